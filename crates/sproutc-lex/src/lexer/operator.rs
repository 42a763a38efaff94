//! Operator-symbol identifiers: a maximal run of operator characters lexes
//! as a single `IDENT`, the same as a word — `+`, `-`, `*`, `<=`, `!=` and so
//! on are ordinary identifiers to this lexer, not a separate token family.
//! What counts as an operator character, and "not a negative number" and
//! "not an arrow" priority, are handled by the caller before reaching here.

use sproutc_util::{Result, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::value::Value;

const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '^', '%', '$', '!', '&', '|', '=', '<', '>'];

pub(super) fn lex_operator(cursor: &mut Cursor<'_>, span: Span) -> Result<Token> {
    let start = cursor.position();
    while !cursor.is_at_end() && OPERATOR_CHARS.contains(&cursor.current_char()) {
        cursor.advance();
    }
    let text = cursor.slice_from(start);
    Ok(Token::with_value(TokenKind::Ident, Value::symbol(text), span))
}
