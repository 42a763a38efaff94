//! The `Lexer` struct: construction, the peek/next/swap_current/backup
//! contract (`spec.md` §4.1), and the top-level character dispatch.

use std::collections::VecDeque;

use sproutc_util::{ErrorKind, Result, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

use super::comment::skip_trivia;
use super::identifier::is_ident_continue;

/// Lexes sprout source text into a stream of [`Token`]s with one-token
/// lookahead and an n-token peek buffer.
///
/// Construction eagerly lexes the first token into `current`. From then on
/// the parser drives the lexer purely through `peek`/`next` (and, for the
/// one reserved-word-promotion use case, `swap_current`/`backup`); nothing
/// else observes or mutates lexer state.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    current: Token,
    previous: Option<Token>,
    buffer: VecDeque<Token>,
    backup_disabled: bool,
}

impl<'a> Lexer<'a> {
    /// Builds a lexer over `source`, eagerly lexing the first token.
    pub fn new(source: &'a str) -> Result<Self> {
        let mut cursor = Cursor::new(source);
        let current = lex_one(&mut cursor)?;
        Ok(Self {
            cursor,
            current,
            previous: None,
            buffer: VecDeque::new(),
            backup_disabled: false,
        })
    }

    /// The current token (equivalent to `peek(0)`, without the `Result`).
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// The token `n` positions ahead of `current` (`n = 0` is `current`
    /// itself), without consuming it.
    pub fn peek(&mut self, n: usize) -> Result<&Token> {
        if n == 0 {
            return Ok(&self.current);
        }
        while self.buffer.len() < n {
            let tok = lex_one(&mut self.cursor)?;
            self.buffer.push_back(tok);
        }
        Ok(&self.buffer[n - 1])
    }

    /// Returns the current token, advances to the next one (from the
    /// buffer if one is already there, freshly lexed otherwise), and
    /// records the token just returned as `previous`.
    pub fn next(&mut self) -> Result<Token> {
        let returned = self.current.clone();
        let fresh = match self.buffer.pop_front() {
            Some(tok) => tok,
            None => lex_one(&mut self.cursor)?,
        };
        self.previous = Some(returned.clone());
        self.current = fresh;
        self.backup_disabled = false;
        Ok(returned)
    }

    /// Replaces `current` with a caller-supplied token, preserving its
    /// position in the stream. Used by the parser to promote a reserved
    /// `IDENT` to its keyword token. Disables `backup` until the new
    /// `current` is itself consumed by `next`.
    pub fn swap_current(&mut self, tok: Token) {
        self.current = tok;
        self.backup_disabled = true;
    }

    /// Pushes `current` back onto the front of the buffer and restores
    /// `previous` as `current`. A no-op if there is no `previous` to
    /// restore, or if `backup` has already fired since the last `next`
    /// (at most once in a row).
    pub fn backup(&mut self) {
        if self.backup_disabled {
            return;
        }
        if let Some(prev) = self.previous.take() {
            self.buffer.push_front(self.current.clone());
            self.current = prev;
            self.backup_disabled = true;
        }
    }
}

/// Lexes exactly one token starting at the cursor's current position,
/// skipping leading trivia first. Once the cursor is exhausted this keeps
/// returning the `END` sentinel without advancing further.
pub(super) fn lex_one(cursor: &mut Cursor<'_>) -> Result<Token> {
    skip_trivia(cursor);

    let span = Span::new(cursor.line(), cursor.column());

    if cursor.is_at_end() {
        return Ok(Token::end(span));
    }

    let c = cursor.current_char();
    let nxt = cursor.peek_char(1);

    if c == '(' {
        cursor.advance();
        return Ok(Token::new(TokenKind::LParen, span));
    }
    if c == ')' {
        cursor.advance();
        return Ok(Token::new(TokenKind::RParen, span));
    }

    if is_number_start(c, nxt) {
        return super::number::lex_number(cursor, span);
    }

    if c.is_alphabetic() {
        return super::identifier::lex_word(cursor, span);
    }

    if c == '-' && nxt == '>' {
        cursor.advance_n(2);
        return Ok(Token::new(TokenKind::Arrow, span));
    }

    if is_operator_char(c) {
        return super::operator::lex_operator(cursor, span);
    }

    if c == '"' {
        return super::string::lex_string(cursor, span);
    }

    if c == '#' {
        return super::punctuation::lex_bool(cursor, span);
    }

    if c == '\'' {
        cursor.advance();
        return Ok(Token::new(TokenKind::Quote, span));
    }
    if c == '`' {
        cursor.advance();
        return Ok(Token::new(TokenKind::QQuote, span));
    }
    if c == ',' {
        cursor.advance();
        if cursor.current_char() == '@' {
            cursor.advance();
            return Ok(Token::new(TokenKind::UnquoteSplice, span));
        }
        return Ok(Token::new(TokenKind::Unquote, span));
    }

    if c == ':' {
        cursor.advance();
        return Ok(Token::new(TokenKind::Colon, span));
    }
    if c == '.' {
        cursor.advance();
        return Ok(Token::new(TokenKind::Dot, span));
    }
    if c == '_' {
        cursor.advance();
        return Ok(Token::new(TokenKind::Placeholder, span));
    }

    Err(ErrorKind::UnrecognisedChar(c).at(span))
}

/// A NUMBER token starts on a digit, on `i` not followed by an
/// identifier-continuing character (so bare `i` reads as the imaginary
/// unit rather than the start of a word), or on `-` immediately followed
/// by a digit or `i`.
fn is_number_start(c: char, next: char) -> bool {
    c.is_ascii_digit()
        || (c == 'i' && !is_ident_continue(next))
        || (c == '-' && (next.is_ascii_digit() || next == 'i'))
}

fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '^' | '%' | '$' | '!' | '&' | '|' | '=' | '<' | '>'
    )
}
