//! Numeric-literal scanning.
//!
//! The scanner itself is dumb: it just greedily consumes the character
//! class a numeric literal can be built from (`spec.md` §4.1: digits plus
//! `+ - / i .`) and hands the whole candidate to
//! [`crate::atom::parse_number`], which does the actual int/rational/
//! float/complex classification.

use sproutc_util::{ErrorKind, Result, Span};

use crate::atom::{parse_number, Number};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::value::Value;

pub(super) fn lex_number(cursor: &mut Cursor<'_>, span: Span) -> Result<Token> {
    let start = cursor.position();
    while !cursor.is_at_end() && is_number_char(cursor.current_char()) {
        cursor.advance();
    }
    let text = cursor.slice_from(start);
    match parse_number(text) {
        Some(n) => Ok(Token::with_value(TokenKind::Number, number_value(n), span)),
        None => Err(ErrorKind::InvalidNumber(text.to_string()).at(span)),
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '/' | 'i' | '.')
}

fn number_value(n: Number) -> Value {
    match n {
        Number::Int(i) => Value::Int(i),
        Number::Float(f) => Value::Float(f),
        Number::Rational(r) => Value::Rational(r),
        Number::Complex(c) => Value::Complex(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> Result<Token> {
        let mut cursor = Cursor::new(src);
        lex_number(&mut cursor, Span::START)
    }

    #[test]
    fn lexes_a_plain_integer() {
        let tok = lex("42").unwrap();
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.value, Some(Value::Int(42)));
    }

    #[test]
    fn lexes_a_rational_in_canonical_form() {
        let tok = lex("6/8").unwrap();
        assert_eq!(
            tok.value,
            Some(Value::Rational(crate::atom::Rational::new(3, 4).unwrap()))
        );
    }

    #[test]
    fn stops_at_the_first_character_outside_the_number_charset() {
        let mut cursor = Cursor::new("3+4i)");
        let tok = lex_number(&mut cursor, Span::START).unwrap();
        assert_eq!(cursor.current_char(), ')');
        assert!(matches!(tok.value, Some(Value::Complex(_))));
    }

    #[test]
    fn an_unmatched_candidate_fails_with_its_start_location() {
        let err = lex("3+0.5/2i").unwrap_err();
        assert_eq!(err.span, Span::START);
        assert!(matches!(err.kind, ErrorKind::InvalidNumber(_)));
    }
}
