//! Shared error vocabulary for the lexer, parser and validators.
//!
//! `spec.md` §7 groups failures into four categories — lexical, structural,
//! semantic-shape and quote-depth — and requires that every failure carry
//! the originating token's source location and unwind the whole parse with
//! no partial CST returned. One error type shared across `sproutc-lex` and
//! `sproutc-par` lets a caller drive lexing then parsing and handle a single
//! `Result` type throughout, the way `faxc_util::DiagnosticError` is shared
//! across `faxc-lex`/`faxc-par` in the teacher crate.

use crate::Span;
use thiserror::Error;

/// The single error type produced by lexing, parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {span}")]
pub struct SproutError {
    pub kind: ErrorKind,
    pub span: Span,
}

pub type Result<T> = std::result::Result<T, SproutError>;

impl ErrorKind {
    /// Attach the source location a failure occurred at.
    pub fn at(self, span: Span) -> SproutError {
        SproutError { kind: self, span }
    }
}

/// The failure taxonomy from `spec.md` §7.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // --- 1. Lexical --------------------------------------------------
    #[error("unrecognised character '{0}'")]
    UnrecognisedChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid numeric literal '{0}'")]
    InvalidNumber(String),
    #[error("invalid boolean literal '#{0}'")]
    InvalidBoolean(char),
    #[error("unterminated arrow token")]
    UnterminatedArrow,
    #[error("rational literal has a zero denominator")]
    ZeroDenominator,

    // --- 2. Structural -------------------------------------------------
    #[error("unterminated list")]
    UnterminatedList,
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("cond expressions must have at least one clause")]
    CondWithoutClauses,
    #[error("cond clauses must be two-element lists")]
    CondClauseArity,
    #[error("lambda expressions may only have one body expression")]
    LambdaExtraBody,
    #[error("type lambda expressions may only have one body expression")]
    TypeLambdaExtraBody,

    // --- 3. Semantic-shape ----------------------------------------------
    #[error("malformed parameter list: {0}")]
    MalformedParams(String),
    #[error("type list did not terminate in a type")]
    TypeListUnterminated,
    #[error("expected a number in composite type position")]
    CompositeTypeExpectedNumber,
    #[error("type lambdas must bind at least one type variable")]
    TypeParamsEmpty,
    #[error("expected a flat list of type variables")]
    TypeParamsMalformed,
    #[error("a list may contain at most one dot, and it must be the penultimate element")]
    BadDottedList,
    #[error("named let must be followed by a bindings list")]
    NamedLetMissingBindings,
    #[error("let bindings must begin with a symbol")]
    BindingMissingSymbol,
    #[error("let binding is missing its ':' type annotation")]
    BindingMissingColon,
    #[error("pattern clauses must have exactly two elements")]
    PatternClauseArity,
    #[error("tapply requires at least one type argument")]
    TapplyNoTypeArgs,
    #[error("data declaration is missing its {0}")]
    BadAdtDecl(&'static str),
    #[error("constructor declaration must be (Name) or (Name (field ...))")]
    BadCtorDecl,

    // --- 4. Quote-depth --------------------------------------------------
    #[error("unquote outside quasiquote")]
    UnquoteOutsideQuasiquote,
    #[error("unquote-splice outside quasiquote")]
    UnquoteSpliceOutsideQuasiquote,
}
