//! One production per special form in `spec.md` §4.2's closed set:
//! `cond`, `lambda`, `tlambda`, `tapply`, `define`, the `let`/`lets`/`letr`
//! family, `match`, and `data`. Each function receives the already-built
//! keyword-kind `head` node and the list's opening-paren `span`, and is
//! responsible for consuming everything up to and including the closing
//! `RPAREN`.
//!
//! Shape validation (parameter lists, type lists, dotted patterns, ...) is
//! delegated to [`crate::validate`] — these functions only drive the token
//! stream and assemble the resulting `Node`.

use sproutc_lex::{Node, Token, TokenKind};
use sproutc_util::{ErrorKind, Result, Span};

use crate::parser::Parser;
use crate::validate;

/// `(cond (p₁ e₁) … (pₙ eₙ))` — at least one clause, each wrapped as
/// `(CLAUSE pᵢ eᵢ)`.
pub(crate) fn parse_cond(p: &mut Parser, head: Node, start: Span) -> Result<Node> {
    let mut clauses = Vec::new();
    loop {
        match p.peek_kind()? {
            TokenKind::RParen => break,
            TokenKind::End => return Err(ErrorKind::UnterminatedList.at(start)),
            _ => clauses.push(parse_cond_clause(p)?),
        }
    }
    p.expect_rparen(start)?;
    if clauses.is_empty() {
        return Err(ErrorKind::CondWithoutClauses.at(start));
    }
    let mut children = vec![head];
    children.extend(clauses);
    Ok(Node::of(children))
}

fn parse_cond_clause(p: &mut Parser) -> Result<Node> {
    let raw = p.parse_expr()?;
    let span = raw.span().unwrap_or_default();
    let items = raw.as_list().map(|l| l.to_vec()).filter(|v| v.len() == 2).ok_or_else(|| ErrorKind::CondClauseArity.at(span))?;
    let clause_head = Node::token(Token::new(TokenKind::Clause, span));
    Ok(Node::of(vec![clause_head, items[0].clone(), items[1].clone()]))
}

/// `(lambda params body)` — exactly one body expression.
pub(crate) fn parse_lambda(p: &mut Parser, head: Node, start: Span) -> Result<Node> {
    let params_raw = p.parse_expr()?;
    let params = validate::validate_params(&params_raw)?;
    if p.peek_kind()? == TokenKind::RParen {
        return Err(ErrorKind::LambdaExtraBody.at(start));
    }
    let body = p.parse_expr()?;
    match p.peek_kind()? {
        TokenKind::RParen => {}
        TokenKind::End => return Err(ErrorKind::UnterminatedList.at(start)),
        _ => return Err(ErrorKind::LambdaExtraBody.at(p.peek_span()?)),
    }
    p.expect_rparen(start)?;
    Ok(Node::of(vec![head, params, body]))
}

/// `(tlambda (A₁ … Aₖ) body)` — exactly one body expression.
pub(crate) fn parse_type_lambda(p: &mut Parser, head: Node, start: Span) -> Result<Node> {
    let params_raw = p.parse_expr()?;
    let params = validate::validate_type_params(&params_raw)?;
    if p.peek_kind()? == TokenKind::RParen {
        return Err(ErrorKind::TypeLambdaExtraBody.at(start));
    }
    let body = p.parse_expr()?;
    match p.peek_kind()? {
        TokenKind::RParen => {}
        TokenKind::End => return Err(ErrorKind::UnterminatedList.at(start)),
        _ => return Err(ErrorKind::TypeLambdaExtraBody.at(p.peek_span()?)),
    }
    p.expect_rparen(start)?;
    Ok(Node::of(vec![head, params, body]))
}

/// `(tapply expr t₁ … tₘ)` — at least one type argument.
pub(crate) fn parse_type_application(p: &mut Parser, head: Node, start: Span) -> Result<Node> {
    let expr = p.parse_expr()?;
    let mut type_args = Vec::new();
    loop {
        match p.peek_kind()? {
            TokenKind::RParen => break,
            TokenKind::End => return Err(ErrorKind::UnterminatedList.at(start)),
            _ => {
                let raw = p.parse_expr()?;
                type_args.push(validate::normalise_type(&raw)?);
            }
        }
    }
    p.expect_rparen(start)?;
    if type_args.is_empty() {
        return Err(ErrorKind::TapplyNoTypeArgs.at(start));
    }
    let mut children = vec![head, expr];
    children.extend(type_args);
    Ok(Node::of(children))
}

/// Disambiguated by the token following the defined name (`spec.md` §4.2):
///
/// - `(define x : T expr)` — `COLON` follows, `T` normalised as a type;
/// - `(define f (lambda ...) expr-less)` — `LPAREN` then the ident
///   `lambda`: the nested lambda is the whole right-hand side;
/// - `(define f (params) expr)` — `LPAREN` not headed by `lambda`: an
///   explicit parameter list followed by a body.
pub(crate) fn parse_define(p: &mut Parser, head: Node, start: Span) -> Result<Node> {
    let name = p.expect_symbol()?;
    match p.peek_kind()? {
        TokenKind::Colon => {
            p.expect_kind(TokenKind::Colon, "':'")?;
            let type_raw = p.parse_expr()?;
            let ty = validate::normalise_type(&type_raw)?;
            let expr = p.parse_expr()?;
            p.expect_rparen(start)?;
            Ok(Node::of(vec![head, name, ty, expr]))
        }
        TokenKind::LParen if p.peek_next_is_lambda()? => {
            let lambda_expr = p.parse_expr()?;
            p.expect_rparen(start)?;
            Ok(Node::of(vec![head, name, lambda_expr]))
        }
        TokenKind::LParen => {
            let params_raw = p.parse_expr()?;
            let params = validate::validate_params(&params_raw)?;
            let expr = p.parse_expr()?;
            p.expect_rparen(start)?;
            Ok(Node::of(vec![head, name, params, expr]))
        }
        other => Err(ErrorKind::UnexpectedToken {
            expected: "':' or '(' after the defined name".into(),
            found: format!("{other:?}"),
        }
        .at(p.peek_span()?)),
    }
}

/// Shared by `let`, `lets` and `letr`: an optional name (named let),
/// followed by a bindings list (each validated via
/// [`validate::validate_let_binding`]) and a single body expression.
pub(crate) fn parse_let(p: &mut Parser, head: Node, start: Span) -> Result<Node> {
    let mut children = vec![head];
    if p.peek_kind()? != TokenKind::LParen {
        let name = p.expect_symbol()?;
        if p.peek_kind()? != TokenKind::LParen {
            return Err(ErrorKind::NamedLetMissingBindings.at(p.peek_span()?));
        }
        children.push(name);
    }
    let bindings_raw = p.parse_expr()?;
    let binding_span = bindings_raw.span().unwrap_or(start);
    let raw_items = bindings_raw
        .as_list()
        .map(|l| l.to_vec())
        .ok_or_else(|| ErrorKind::NamedLetMissingBindings.at(binding_span))?;
    let mut bindings = Vec::with_capacity(raw_items.len());
    for b in &raw_items {
        bindings.push(validate::validate_let_binding(b)?);
    }
    children.push(Node::of(bindings));
    let body = p.parse_expr()?;
    p.expect_rparen(start)?;
    children.push(body);
    Ok(Node::of(children))
}

/// `(match scrutinee (pattern₁ rhs₁) … (patternₙ rhsₙ))`.
pub(crate) fn parse_match(p: &mut Parser, head: Node, start: Span) -> Result<Node> {
    let scrutinee = p.parse_expr()?;
    let mut clauses = Vec::new();
    loop {
        match p.peek_kind()? {
            TokenKind::RParen => break,
            TokenKind::End => return Err(ErrorKind::UnterminatedList.at(start)),
            _ => {
                let raw = p.parse_expr()?;
                clauses.push(validate::validate_pattern_clause(&raw)?);
            }
        }
    }
    p.expect_rparen(start)?;
    let mut children = vec![head, scrutinee];
    children.extend(clauses);
    Ok(Node::of(children))
}

/// `(data Name (A₁ … Aₖ) (Ctor₁ …) … (Ctorₙ …))` — a name, a (possibly
/// empty-looking but non-empty-checked) type-parameter list, and at least
/// one constructor declaration.
pub(crate) fn parse_adt(p: &mut Parser, head: Node, start: Span) -> Result<Node> {
    if p.peek_kind()? != TokenKind::Ident {
        return Err(ErrorKind::BadAdtDecl("name").at(p.peek_span()?));
    }
    let name = p.expect_symbol()?;
    let type_params_raw = p.parse_expr()?;
    let type_params_span = type_params_raw.span().unwrap_or(start);
    let type_params = validate::validate_type_params(&type_params_raw)
        .map_err(|_| ErrorKind::BadAdtDecl("type parameter list").at(type_params_span))?;

    let mut ctors = Vec::new();
    loop {
        match p.peek_kind()? {
            TokenKind::RParen => break,
            TokenKind::End => return Err(ErrorKind::UnterminatedList.at(start)),
            _ => {
                let raw = p.parse_expr()?;
                ctors.push(validate::validate_ctor_decl(&raw)?);
            }
        }
    }
    p.expect_rparen(start)?;
    if ctors.is_empty() {
        return Err(ErrorKind::BadAdtDecl("product list").at(start));
    }
    let mut children = vec![head, name, type_params];
    children.extend(ctors);
    Ok(Node::of(children))
}
