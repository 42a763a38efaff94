//! The `#`-prefixed boolean literal: `#t` / `#f`.

use sproutc_util::{ErrorKind, Result, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::value::Value;

pub(super) fn lex_bool(cursor: &mut Cursor<'_>, span: Span) -> Result<Token> {
    cursor.advance(); // '#'
    if cursor.is_at_end() {
        return Err(ErrorKind::InvalidBoolean('\0').at(span));
    }
    let c = cursor.current_char();
    match c {
        't' => {
            cursor.advance();
            Ok(Token::with_value(TokenKind::Bool, Value::Bool(true), span))
        }
        'f' => {
            cursor.advance();
            Ok(Token::with_value(TokenKind::Bool, Value::Bool(false), span))
        }
        other => Err(ErrorKind::InvalidBoolean(other).at(span)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> Result<Token> {
        let mut cursor = Cursor::new(src);
        lex_bool(&mut cursor, Span::START)
    }

    #[test]
    fn hash_t_is_true() {
        let tok = lex("#t").unwrap();
        assert_eq!(tok.value, Some(Value::Bool(true)));
    }

    #[test]
    fn hash_f_is_false() {
        let tok = lex("#f").unwrap();
        assert_eq!(tok.value, Some(Value::Bool(false)));
    }

    #[test]
    fn anything_else_after_hash_is_invalid() {
        let err = lex("#x").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidBoolean('x'));
    }

    #[test]
    fn a_lone_hash_at_eof_is_invalid() {
        let err = lex("#").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidBoolean('\0'));
    }
}
