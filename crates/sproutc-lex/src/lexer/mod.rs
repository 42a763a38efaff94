//! Lexer implementation, split by token family the way the source text's
//! own tokenisation rules table (`spec.md` §4.1) is split:
//!
//! - `core` — the `Lexer` struct, its peek/next/swap_current/backup
//!   contract, and the top-level character dispatch
//! - `number` — numeric-literal scanning, delegating the actual
//!   classification to [`crate::atom::parse_number`]
//! - `identifier` — identifiers, type-idents, quote-family words, and the
//!   handful of builtin constant words (`nil`, `cons`, ...)
//! - `operator` — the run-of-operator-characters `IDENT` variant
//! - `string` — string and (single-character) char literals
//! - `punctuation` — the single- and two-character punctuation tokens
//! - `comment` — whitespace and `;`-comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod punctuation;
mod string;

pub use core::Lexer;
