//! Recursive-descent parsing and structural validation for the sprout
//! front end (`spec.md` §4.2-4.3).
//!
//! [`Parser`] consumes a [`sproutc_lex::Lexer`] and produces [`Node`]s — the
//! same CST type the lexer's tokens already live in (see `sproutc-lex`'s
//! crate doc for why the CST sits upstream rather than here). There is no
//! separate AST type in this crate: the validated CST *is* the parser's
//! output, and downstream consumers (typechecker, evaluator) work directly
//! on it.
//!
//! The closed set of special forms — `lambda`, `tlambda`, `tapply`, `cond`,
//! `let`/`lets`/`letr`, `define`, `match`, `data`, and the quote family — is
//! recognised by [`Parser::promote_ident`]-style peek-then-classify at a
//! list head (no lexer mutation: `swap_current` stays lexer-only, see
//! `sproutc-lex`'s docs and `DESIGN.md`). Everything else that promotes at a
//! list head (`forall`, `eq?`, `equal?`, `shift`, `reset`, `force`, `do`,
//! `perform`, `handle`, `return`, `error`, `raise`, `try`, `catch`) has no
//! dedicated shape and parses as an ordinary application headed by its own
//! keyword-kind token.
//!
//! [`validate`] holds one pure, stateless function per grammar production —
//! `validate_params`, `validate_type_list`, `validate_type_params`,
//! `validate_forall`, `validate_dotted_list`, `validate_pattern_clause`,
//! `validate_ctor_decl`, `validate_quote` — each a straight-line FSM from a
//! raw CST fragment to either a normalised replacement or a located error.

mod forms;
mod parser;
pub mod validate;

pub use parser::Parser;
pub use sproutc_lex::Node;
pub use sproutc_util::{ErrorKind, Result, SproutError};

/// Parses the smallest complete expression in `source`.
pub fn parse(source: &str) -> Result<Node> {
    Parser::new(source)?.parse()
}

/// Parses every top-level form in `source`.
pub fn parse_program(source: &str) -> Result<Vec<Node>> {
    Parser::new(source)?.parse_program()
}
