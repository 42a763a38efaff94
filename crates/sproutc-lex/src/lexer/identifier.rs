//! Identifiers, type-identifiers, quote-family words, and the handful of
//! builtin constant-like words that the lexer itself recognises.
//!
//! Everything here shares one word-scanner (`lex_word`): consume a run of
//! identifier characters, then classify the text. Classification checks, in
//! order, the primitive type names, the quote-family words, the builtin
//! constant words, and finally falls back to a plain `IDENT`. Reserved
//! words that need the surrounding list context to disambiguate (`eq?`,
//! special forms like `lambda`/`cond`/...) are deliberately NOT handled
//! here — those stay `IDENT` and are promoted by the parser's
//! `promote_ident`, which only runs at a list head.

use sproutc_util::{Result, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::value::Value;

/// An identifier may contain letters, digits, `-`, and `?`, but `->` is
/// reserved for the arrow token so a trailing `-` immediately followed by
/// `>` does not get swallowed into the word.
pub(super) fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '?'
}

pub(super) fn lex_word(cursor: &mut Cursor<'_>, span: Span) -> Result<Token> {
    let start = cursor.position();
    loop {
        if cursor.is_at_end() {
            break;
        }
        let c = cursor.current_char();
        if c == '-' && cursor.peek_char(1) == '>' {
            break;
        }
        if !is_ident_continue(c) {
            break;
        }
        cursor.advance();
    }
    let text = cursor.slice_from(start);

    if let Some(kind) = quote_word(text) {
        return Ok(Token::new(kind, span));
    }
    if let Some(kind) = builtin_word(text) {
        return Ok(Token::new(kind, span));
    }
    if is_primitive_type_name(text) {
        return Ok(Token::with_value(TokenKind::TypeIdent, Value::symbol(text), span));
    }

    Ok(Token::with_value(TokenKind::Ident, Value::symbol(text), span))
}

fn quote_word(text: &str) -> Option<TokenKind> {
    Some(match text {
        "quote" => TokenKind::Quote,
        "qquote" => TokenKind::QQuote,
        "unquote" => TokenKind::Unquote,
        "unquote-splice" => TokenKind::UnquoteSplice,
        _ => return None,
    })
}

/// `nil`, `cons`, `just`, `nothing`, `maybe` deliver their own dedicated
/// token kind directly from the lexer, the same way quote-family words and
/// primitive type names do, rather than lexing as plain `IDENT` and waiting
/// on parser promotion. `list` is deliberately absent here — it is a
/// primitive type name (see `is_primitive_type_name`), and the closed set of
/// primitive type names takes priority over this table.
fn builtin_word(text: &str) -> Option<TokenKind> {
    Some(match text {
        "nil" => TokenKind::Nil,
        "cons" => TokenKind::Cons,
        "just" => TokenKind::Just,
        "nothing" => TokenKind::Nothing,
        "maybe" => TokenKind::Maybe,
        _ => return None,
    })
}

/// The closed set of primitive type names: `int, rational, float, complex,
/// bool, char, string, symbol, list, vec`. Anything outside this set (a
/// user-declared ADT name included) lexes as a plain `IDENT` and is only
/// classified as a type variable later, by `normalise_type`.
fn is_primitive_type_name(text: &str) -> bool {
    matches!(
        text,
        "int" | "rational" | "float" | "complex" | "bool" | "char" | "string" | "symbol" | "list" | "vec"
    )
}
