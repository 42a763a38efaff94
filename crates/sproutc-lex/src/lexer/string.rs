//! String and character literals share a grammar — `"..."` — and are split
//! apart only after the closing quote is found: a one-character body is a
//! `CHAR`, anything else (including the empty string) is a `STRING`.

use sproutc_util::{ErrorKind, Result, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::value::Value;

pub(super) fn lex_string(cursor: &mut Cursor<'_>, span: Span) -> Result<Token> {
    cursor.advance(); // opening '"'
    let start = cursor.position();
    loop {
        if cursor.is_at_end() {
            return Err(ErrorKind::UnterminatedString.at(span));
        }
        if cursor.current_char() == '"' {
            break;
        }
        cursor.advance();
    }
    let text = cursor.slice_from(start).to_string();
    cursor.advance(); // closing '"'

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Token::with_value(TokenKind::Char, Value::Char(c), span)),
        _ => Ok(Token::with_value(TokenKind::String, Value::string(text), span)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> Result<Token> {
        let mut cursor = Cursor::new(src);
        lex_string(&mut cursor, Span::START)
    }

    #[test]
    fn a_single_character_body_is_a_char_token() {
        let tok = lex("\"x\"").unwrap();
        assert_eq!(tok.kind, TokenKind::Char);
        assert_eq!(tok.value, Some(Value::Char('x')));
    }

    #[test]
    fn a_longer_body_is_a_string_token() {
        let tok = lex("\"hello\"").unwrap();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.value, Some(Value::string("hello")));
    }

    #[test]
    fn an_empty_body_is_a_string_not_a_char() {
        let tok = lex("\"\"").unwrap();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.value, Some(Value::string("")));
    }

    #[test]
    fn an_unterminated_string_fails() {
        let err = lex("\"abc").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
    }
}
