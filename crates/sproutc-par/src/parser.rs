//! The recursive-descent `Parser` (`spec.md` §4.2): core token dispatch,
//! reserved-word recognition, and the handful of list-building helpers
//! every special-form production in [`crate::forms`] shares.

use sproutc_lex::{Lexer, Node, Token, TokenKind, Value};
use sproutc_util::{ErrorKind, Result, Span};

use crate::forms;

/// Drives a [`Lexer`] to produce a single `Node` (or a whole top-level
/// program) per `spec.md` §4.2. Holds no state beyond the lexer itself —
/// every production is a pure function of the remaining token stream.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Result<Self> {
        Ok(Self {
            lexer: Lexer::new(source)?,
        })
    }

    /// Parses the smallest complete expression starting at the current
    /// token and returns it as a `Node`.
    ///
    /// Quote-depth is checked exactly once here, over the whole returned
    /// tree (`validate_quote(root, 0)` — `spec.md` §8's testable quote-depth
    /// property), rather than separately at each nested quote-family
    /// occurrence while parsing: `validate_quote` already walks nested
    /// structure and adjusts depth itself, so checking a quote-family
    /// sub-form in isolation before its enclosing form is fully built would
    /// see it at the wrong ambient depth.
    pub fn parse(&mut self) -> Result<Node> {
        let node = self.parse_expr()?;
        crate::validate::validate_quote(&node, 0)?;
        Ok(node)
    }

    /// Parses top-level expressions until end of input, quote-depth
    /// checking each one independently (see [`Parser::parse`]).
    pub fn parse_program(&mut self) -> Result<Vec<Node>> {
        let mut out = Vec::new();
        while self.peek_kind()? != TokenKind::End {
            let node = self.parse_expr()?;
            crate::validate::validate_quote(&node, 0)?;
            out.push(node);
        }
        Ok(out)
    }

    /// Dispatch rule on `peek(0).kind` (`spec.md` §4.2):
    ///
    /// - self-delivering atoms consume and wrap as-is;
    /// - a bare `IDENT` outside a list head unwraps to `SYMBOL`, with the
    ///   bare symbol `else` promoted to the boolean `true`;
    /// - a quote-family token parses its single operand recursively and
    ///   quote-depth-checks the result;
    /// - `LPAREN` consumes, then — if the head is an `IDENT` naming a
    ///   reserved word — dispatches to the matching special-form parser;
    ///   otherwise it is a plain application/list.
    pub(crate) fn parse_expr(&mut self) -> Result<Node> {
        match self.peek_kind()? {
            TokenKind::Number
            | TokenKind::Bool
            | TokenKind::Char
            | TokenKind::String
            | TokenKind::Nil
            | TokenKind::List
            | TokenKind::Cons
            | TokenKind::Just
            | TokenKind::Nothing
            | TokenKind::Maybe
            | TokenKind::Colon
            | TokenKind::Arrow
            | TokenKind::Dot
            | TokenKind::TypeIdent
            | TokenKind::Forall
            | TokenKind::Placeholder => {
                let tok = self.bump()?;
                Ok(Node::token(tok))
            }
            TokenKind::Ident => {
                let tok = self.bump()?;
                Ok(unwrap_ident(tok))
            }
            TokenKind::Quote | TokenKind::QQuote | TokenKind::Unquote | TokenKind::UnquoteSplice => {
                let head = self.bump()?;
                self.parse_quote_operand(head)
            }
            TokenKind::LParen => self.parse_paren_form(),
            TokenKind::End => Err(ErrorKind::UnexpectedToken {
                expected: "an expression".into(),
                found: "end of input".into(),
            }
            .at(self.peek_span()?)),
            other => Err(ErrorKind::UnexpectedToken {
                expected: "an expression".into(),
                found: format!("{other:?}"),
            }
            .at(self.peek_span()?)),
        }
    }

    fn parse_paren_form(&mut self) -> Result<Node> {
        let open = self.bump()?;
        let start = open.span;

        if self.peek_kind()? == TokenKind::RParen {
            self.bump()?;
            return Ok(Node::of(vec![]));
        }

        if let Some((keyword, head)) = self.promote_ident()? {
            return self.dispatch_reserved(keyword, head, start);
        }

        if matches!(
            self.peek_kind()?,
            TokenKind::Quote | TokenKind::QQuote | TokenKind::Unquote | TokenKind::UnquoteSplice
        ) {
            let head_tok = self.bump()?;
            let node = self.parse_quote_operand(head_tok)?;
            self.expect_rparen(start)?;
            return Ok(node);
        }

        let first = self.parse_expr()?;
        self.parse_list_tail(start, vec![first])
    }

    /// Peek-then-classify (`spec.md`'s REDESIGN FLAG for `promoteIdent`):
    /// inspects `peek(0)` without mutating lexer state, and if it names a
    /// reserved word, consumes it and returns the zero-value keyword-kind
    /// token that replaces it in the tree, paired with which keyword it
    /// was. Returns `None` — having consumed nothing — for any other
    /// token, including a non-reserved `IDENT`.
    fn promote_ident(&mut self) -> Result<Option<(TokenKind, Node)>> {
        if self.peek_kind()? != TokenKind::Ident {
            return Ok(None);
        }
        let name = self.peek(0)?.value.as_ref().and_then(Value::as_str).unwrap_or("").to_string();
        let Some(keyword) = reserved_word(&name) else {
            return Ok(None);
        };
        let ident_tok = self.bump()?;
        Ok(Some((keyword, Node::token(Token::new(keyword, ident_tok.span)))))
    }

    fn dispatch_reserved(&mut self, keyword: TokenKind, head: Node, start: Span) -> Result<Node> {
        match keyword {
            TokenKind::Cond => forms::parse_cond(self, head, start),
            TokenKind::Lambda => forms::parse_lambda(self, head, start),
            TokenKind::TLambda => forms::parse_type_lambda(self, head, start),
            TokenKind::TApply => forms::parse_type_application(self, head, start),
            TokenKind::Define => forms::parse_define(self, head, start),
            TokenKind::Let | TokenKind::Lets | TokenKind::Letr => forms::parse_let(self, head, start),
            TokenKind::Match => forms::parse_match(self, head, start),
            TokenKind::Data => forms::parse_adt(self, head, start),
            // Every other reserved word (forall, eq?, equal?, shift, reset,
            // force, do, perform, handle, return, error, raise, try, catch)
            // has no dedicated shape of its own — it is an ordinary
            // application headed by its own keyword-kind token.
            _ => self.parse_list_tail(start, vec![head]),
        }
    }

    /// Builds the two-element `(QUOTE-KIND operand)` shape. Quote-depth is
    /// not checked here — only the fully-built top-level form is, in
    /// [`Parser::parse`]/[`Parser::parse_program`], since a quote-family
    /// form nested inside an enclosing one can only be judged against its
    /// ambient depth once that enclosing form exists.
    pub(crate) fn parse_quote_operand(&mut self, head: Token) -> Result<Node> {
        let operand = self.parse_expr()?;
        Ok(Node::of(vec![Node::token(head), operand]))
    }

    /// Consumes `parse_expr()` results until `RPAREN`, then returns the
    /// accumulated `children` (already-parsed ones prepended) as a list.
    pub(crate) fn parse_list_tail(&mut self, start: Span, mut children: Vec<Node>) -> Result<Node> {
        loop {
            match self.peek_kind()? {
                TokenKind::RParen => {
                    self.bump()?;
                    return Ok(Node::of(children));
                }
                TokenKind::End => return Err(ErrorKind::UnterminatedList.at(start)),
                _ => children.push(self.parse_expr()?),
            }
        }
    }

    pub(crate) fn peek_kind(&mut self) -> Result<TokenKind> {
        Ok(self.peek(0)?.kind)
    }

    pub(crate) fn peek_span(&mut self) -> Result<Span> {
        Ok(self.peek(0)?.span)
    }

    pub(crate) fn peek(&mut self, n: usize) -> Result<&Token> {
        self.lexer.peek(n)
    }

    /// Whether the token at `peek(1)` is the ident `lambda` — used to
    /// disambiguate `(define f (lambda ...))` from `(define f (params) e)`.
    pub(crate) fn peek_next_is_lambda(&mut self) -> Result<bool> {
        let tok = self.peek(1)?;
        Ok(tok.kind == TokenKind::Ident && tok.value.as_ref().and_then(Value::as_str) == Some("lambda"))
    }

    pub(crate) fn bump(&mut self) -> Result<Token> {
        self.lexer.next()
    }

    pub(crate) fn expect_kind(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        let tok = self.bump()?;
        if tok.kind == kind {
            Ok(tok)
        } else {
            Err(ErrorKind::UnexpectedToken {
                expected: what.to_string(),
                found: format!("{:?}", tok.kind),
            }
            .at(tok.span))
        }
    }

    pub(crate) fn expect_rparen(&mut self, start: Span) -> Result<()> {
        match self.peek_kind()? {
            TokenKind::RParen => {
                self.bump()?;
                Ok(())
            }
            TokenKind::End => Err(ErrorKind::UnterminatedList.at(start)),
            other => Err(ErrorKind::UnexpectedToken {
                expected: "')'".into(),
                found: format!("{other:?}"),
            }
            .at(self.peek_span()?)),
        }
    }

    /// Consumes an `IDENT`/`SYMBOL` token and re-kinds it as `SYMBOL` —
    /// used for binding-name positions (`define`'s name, `data`'s name,
    /// named-let's loop name), which never apply the `else` → `true`
    /// promotion `unwrap_ident` applies at ordinary expression positions.
    pub(crate) fn expect_symbol(&mut self) -> Result<Node> {
        let tok = self.bump()?;
        match tok.kind {
            TokenKind::Ident | TokenKind::Symbol => Ok(Node::token(Token::with_value(
                TokenKind::Symbol,
                tok.value.clone().unwrap_or_else(|| Value::symbol("")),
                tok.span,
            ))),
            other => Err(ErrorKind::UnexpectedToken {
                expected: "a symbol".into(),
                found: format!("{other:?}"),
            }
            .at(tok.span)),
        }
    }
}

fn unwrap_ident(tok: Token) -> Node {
    let name = tok.value.as_ref().and_then(Value::as_str).unwrap_or("").to_string();
    if name == "else" {
        return Node::token(Token::with_value(TokenKind::Bool, Value::Bool(true), tok.span));
    }
    Node::token(Token::with_value(
        TokenKind::Symbol,
        tok.value.clone().unwrap_or_else(|| Value::symbol(&name)),
        tok.span,
    ))
}

/// The closed set of reserved words promoted at a list head (`spec.md`
/// §4.2). Anything else stays a plain `IDENT` and the list it heads is an
/// ordinary application.
fn reserved_word(name: &str) -> Option<TokenKind> {
    Some(match name {
        "lambda" => TokenKind::Lambda,
        "cond" => TokenKind::Cond,
        "let" => TokenKind::Let,
        "lets" => TokenKind::Lets,
        "letr" => TokenKind::Letr,
        "define" => TokenKind::Define,
        "shift" => TokenKind::Shift,
        "reset" => TokenKind::Reset,
        "force" => TokenKind::Force,
        "do" => TokenKind::Do,
        "forall" => TokenKind::Forall,
        "tlambda" => TokenKind::TLambda,
        "tapply" => TokenKind::TApply,
        "perform" => TokenKind::Perform,
        "handle" => TokenKind::Handle,
        "return" => TokenKind::Return,
        "error" => TokenKind::Error,
        "raise" => TokenKind::Raise,
        "try" => TokenKind::Try,
        "catch" => TokenKind::Catch,
        "eq?" => TokenKind::Eq,
        "equal?" => TokenKind::Equals,
        "match" => TokenKind::Match,
        "data" => TokenKind::Data,
        _ => return None,
    })
}
