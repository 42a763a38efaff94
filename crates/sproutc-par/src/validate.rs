//! Structural validators (`spec.md` §4.3): pure functions from a raw CST
//! fragment to either a normalised replacement fragment or a failure
//! carrying the fragment's source location. Each one is a straight-line
//! finite state machine over its input's elements; no state is shared
//! between validators, and none of them touch the lexer or the parser's
//! own stacks.

use std::rc::Rc;

use sproutc_util::{ErrorKind, Result, Span};

use sproutc_lex::{Node, Token, TokenKind, Value};

/// Normalises a single type position: a nested list recurses through
/// [`validate_type_list`], a bare symbol is promoted to `TYPE_VAR`, and a
/// `TYPE_IDENT` passes through unchanged. Shared by `tapply` arguments,
/// constructor fields, and let/define type annotations.
pub fn normalise_type(node: &Node) -> Result<Node> {
    if node.is_list() {
        return validate_type_list(node);
    }
    match node.as_token() {
        Some(t) if t.kind == TokenKind::TypeIdent => Ok(node.clone()),
        Some(t) if matches!(t.kind, TokenKind::Symbol | TokenKind::Ident) => {
            let name = t.value.as_ref().and_then(Value::as_str).unwrap_or("");
            Ok(Node::token(Token::with_value(
                TokenKind::TypeVar,
                Value::symbol(name),
                t.span,
            )))
        }
        Some(t) => Err(ErrorKind::UnexpectedToken {
            expected: "a type".to_string(),
            found: format!("{:?}", t.kind),
        }
        .at(t.span)),
        None => unreachable!("non-list nodes are always tokens"),
    }
}

/// FSM states: `ExpectType, ExpectArrowOrNat, ExpectNat`. Accepts
/// `T (-> T)*` plus `vec`-style composite types, where a second type in a
/// row (no intervening arrow) opens a composite and the following `NUMBER`
/// closes it — `(vec int 3)` is `TYPE_IDENT(vec)` then `TYPE_IDENT(int)`
/// (the second type, consumed from `ExpectArrowOrNat`) then the size `3`
/// (consumed from `ExpectNat`, which returns to `ExpectArrowOrNat`).
/// Delegates to [`validate_forall`] when the list's head is a `FORALL`
/// token.
pub fn validate_type_list(node: &Node) -> Result<Node> {
    let span = node.span().unwrap_or_default();
    let items = node
        .as_list()
        .ok_or_else(|| ErrorKind::TypeListUnterminated.at(span))?
        .to_vec();

    if items.first().and_then(Node::kind) == Some(TokenKind::Forall) {
        return validate_forall(node);
    }
    if items.is_empty() {
        return Err(ErrorKind::TypeListUnterminated.at(span));
    }

    enum State {
        ExpectType,
        ExpectArrowOrNat,
        ExpectNat,
    }

    let mut state = State::ExpectType;
    let mut normalised = Vec::with_capacity(items.len());

    for item in &items {
        match state {
            State::ExpectType => {
                normalised.push(normalise_type(item)?);
                state = State::ExpectArrowOrNat;
            }
            State::ExpectArrowOrNat => match item.kind() {
                Some(TokenKind::Arrow) => {
                    normalised.push(item.clone());
                    state = State::ExpectType;
                }
                Some(TokenKind::Number) => {
                    return Err(ErrorKind::UnexpectedToken {
                        expected: "'->' or a type".to_string(),
                        found: format!("{:?}", item.kind()),
                    }
                    .at(item.span().unwrap_or(span)))
                }
                _ => {
                    normalised.push(normalise_type(item)?);
                    state = State::ExpectNat;
                }
            },
            State::ExpectNat => match item.kind() {
                Some(TokenKind::Number) => {
                    normalised.push(item.clone());
                    state = State::ExpectArrowOrNat;
                }
                _ => {
                    return Err(ErrorKind::CompositeTypeExpectedNumber.at(item.span().unwrap_or(span)));
                }
            },
        }
    }

    if matches!(state, State::ExpectType) {
        return Err(ErrorKind::TypeListUnterminated.at(span));
    }

    let result = Node::of(normalised);
    Ok(Node::token(Token::with_value(
        TokenKind::TypeIdent,
        Value::cst_ref(Rc::new(result)),
        span,
    )))
}

/// A flat, non-empty list of bare symbols, each promoted to `TYPE_VAR`.
pub fn validate_type_params(node: &Node) -> Result<Node> {
    let span = node.span().unwrap_or_default();
    let items = node
        .as_list()
        .ok_or_else(|| ErrorKind::TypeParamsMalformed.at(span))?
        .to_vec();
    if items.is_empty() {
        return Err(ErrorKind::TypeParamsEmpty.at(span));
    }
    let mut out = Vec::with_capacity(items.len());
    for item in &items {
        let t = item
            .as_token()
            .filter(|t| matches!(t.kind, TokenKind::Symbol | TokenKind::Ident))
            .ok_or_else(|| ErrorKind::TypeParamsMalformed.at(item.span().unwrap_or(span)))?;
        let name = t.value.as_ref().and_then(Value::as_str).unwrap_or("");
        out.push(Node::token(Token::with_value(
            TokenKind::TypeVar,
            Value::symbol(name),
            t.span,
        )));
    }
    Ok(Node::token(Token::with_value(
        TokenKind::TypeParamList,
        Value::cst_ref(Rc::new(Node::of(out))),
        span,
    )))
}

/// Shape `(forall (A₁ … Aₖ) body-type)`.
pub fn validate_forall(node: &Node) -> Result<Node> {
    let span = node.span().unwrap_or_default();
    let items = node
        .as_list()
        .ok_or_else(|| ErrorKind::UnexpectedToken {
            expected: "a forall list".to_string(),
            found: "a token".to_string(),
        }
        .at(span))?
        .to_vec();
    if items.len() != 3 {
        return Err(ErrorKind::UnexpectedToken {
            expected: "(forall (vars...) type)".to_string(),
            found: format!("a list of {} elements", items.len()),
        }
        .at(span));
    }
    let type_params = validate_type_params(&items[1])?;
    let body = normalise_type(&items[2])?;
    let forall_node = Node::of(vec![items[0].clone(), type_params, body]);
    Ok(Node::token(Token::with_value(
        TokenKind::TypeIdent,
        Value::cst_ref(Rc::new(forall_node)),
        span,
    )))
}

/// `sym : T₁ : T₂ … symₖ : Tₖ -> Tret` → a `PARAM_LIST` token whose value
/// holds `[(sym₁ type₁), …, (symₖ typeₖ), RETURN_TYPE]`.
pub fn validate_params(node: &Node) -> Result<Node> {
    let span = node.span().unwrap_or_default();
    let items = node
        .as_list()
        .ok_or_else(|| ErrorKind::MalformedParams("expected a parenthesised parameter list".into()).at(span))?
        .to_vec();

    #[derive(PartialEq)]
    enum State {
        Symbol,
        Colon,
        ArgType,
        ArrowOrNextSymbol,
        ReturnType,
        Done,
    }

    let mut state = State::Symbol;
    let mut pairs = Vec::new();
    let mut pending_symbol: Option<Node> = None;
    let mut return_type: Option<Node> = None;

    for item in &items {
        match state {
            State::Symbol => {
                let is_sym = matches!(item.as_token().map(|t| t.kind), Some(TokenKind::Symbol) | Some(TokenKind::Ident));
                if !is_sym {
                    return Err(ErrorKind::MalformedParams("expected a parameter name".into())
                        .at(item.span().unwrap_or(span)));
                }
                pending_symbol = Some(item.clone());
                state = State::Colon;
            }
            State::Colon => {
                if item.kind() != Some(TokenKind::Colon) {
                    return Err(ErrorKind::MalformedParams("expected ':' after a parameter name".into())
                        .at(item.span().unwrap_or(span)));
                }
                state = State::ArgType;
            }
            State::ArgType => {
                let ty = normalise_type(item)?;
                let sym = pending_symbol.take().expect("Colon state always follows Symbol");
                pairs.push(Node::of(vec![sym, ty]));
                state = State::ArrowOrNextSymbol;
            }
            State::ArrowOrNextSymbol => {
                if item.kind() == Some(TokenKind::Arrow) {
                    state = State::ReturnType;
                } else {
                    let is_sym = matches!(item.as_token().map(|t| t.kind), Some(TokenKind::Symbol) | Some(TokenKind::Ident));
                    if !is_sym {
                        return Err(ErrorKind::MalformedParams("expected '->' or the next parameter name".into())
                            .at(item.span().unwrap_or(span)));
                    }
                    pending_symbol = Some(item.clone());
                    state = State::Colon;
                }
            }
            State::ReturnType => {
                return_type = Some(normalise_type(item)?);
                state = State::Done;
            }
            State::Done => {
                return Err(ErrorKind::MalformedParams("unexpected token after the return type".into())
                    .at(item.span().unwrap_or(span)));
            }
        }
    }

    if state != State::Done {
        return Err(ErrorKind::MalformedParams("parameter list did not end with '-> returnType'".into()).at(span));
    }
    let ret = return_type.expect("Done state always sets return_type");
    let mut body = pairs;
    body.push(Node::token(Token::with_value(
        TokenKind::ReturnType,
        Value::cst_ref(Rc::new(ret)),
        span,
    )));
    Ok(Node::token(Token::with_value(
        TokenKind::ParamList,
        Value::cst_ref(Rc::new(Node::of(body))),
        span,
    )))
}

/// At most one `DOT` per list; if present it must sit at `len - 2`, and the
/// list must then have at least 3 elements. Recurses into nested lists.
pub fn validate_dotted_list(node: &Node) -> Result<Node> {
    let span = node.span().unwrap_or_default();
    let Some(list) = node.as_list() else {
        return Ok(node.clone());
    };
    let items = list.to_vec();
    let dot_positions: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, n)| n.kind() == Some(TokenKind::Dot))
        .map(|(i, _)| i)
        .collect();

    if dot_positions.len() > 1 {
        return Err(ErrorKind::BadDottedList.at(span));
    }
    if let Some(&pos) = dot_positions.first() {
        if items.len() < 3 || pos != items.len() - 2 {
            return Err(ErrorKind::BadDottedList.at(span));
        }
    }
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(if item.is_list() { validate_dotted_list(&item)? } else { item });
    }
    Ok(Node::of(out))
}

/// `(pattern rhs)` → a `PATTERN_CLAUSE` token wrapping a `[PATTERN, rhs]`
/// pair; the pattern sub-tree is first dot-checked if it is a list.
pub fn validate_pattern_clause(node: &Node) -> Result<Node> {
    let span = node.span().unwrap_or_default();
    let items = node
        .as_list()
        .ok_or_else(|| ErrorKind::PatternClauseArity.at(span))?
        .to_vec();
    if items.len() != 2 {
        return Err(ErrorKind::PatternClauseArity.at(span));
    }
    let pattern_raw = if items[0].is_list() {
        validate_dotted_list(&items[0])?
    } else {
        items[0].clone()
    };
    let pattern_span = pattern_raw.span().unwrap_or(span);
    let pattern = Node::token(Token::with_value(
        TokenKind::Pattern,
        Value::cst_ref(Rc::new(pattern_raw)),
        pattern_span,
    ));
    Ok(Node::token(Token::with_value(
        TokenKind::PatternClause,
        Value::cst_ref(Rc::new(Node::of(vec![pattern, items[1].clone()]))),
        span,
    )))
}

/// `(Name)` or `(Name (field₁ … fieldₘ))`, each field normalised as a type.
pub fn validate_ctor_decl(node: &Node) -> Result<Node> {
    let span = node.span().unwrap_or_default();
    let items = node
        .as_list()
        .ok_or_else(|| ErrorKind::BadCtorDecl.at(span))?
        .to_vec();
    if items.is_empty() || items.len() > 2 {
        return Err(ErrorKind::BadCtorDecl.at(span));
    }
    let name = items[0]
        .as_token()
        .filter(|t| matches!(t.kind, TokenKind::Symbol | TokenKind::Ident))
        .cloned()
        .ok_or_else(|| ErrorKind::BadCtorDecl.at(span))?;

    let mut fields = Vec::new();
    if let Some(field_list_node) = items.get(1) {
        let field_items = field_list_node.as_list().ok_or_else(|| ErrorKind::BadCtorDecl.at(span))?.to_vec();
        for field in &field_items {
            fields.push(normalise_type(field)?);
        }
    }

    let mut body = vec![Node::token(Token::with_value(
        TokenKind::Symbol,
        name.value.clone().unwrap_or_else(|| Value::symbol("")),
        name.span,
    ))];
    body.extend(fields);
    Ok(Node::token(Token::with_value(
        TokenKind::CtorDecl,
        Value::cst_ref(Rc::new(Node::of(body))),
        span,
    )))
}

/// `sym : T expr` → a `LET_BINDING` token wrapping `[sym, type, expr]`.
pub fn validate_let_binding(node: &Node) -> Result<Node> {
    let span = node.span().unwrap_or_default();
    let items = node
        .as_list()
        .ok_or_else(|| ErrorKind::BindingMissingSymbol.at(span))?
        .to_vec();
    if items.is_empty() {
        return Err(ErrorKind::BindingMissingSymbol.at(span));
    }
    let sym = items[0]
        .as_token()
        .filter(|t| matches!(t.kind, TokenKind::Symbol | TokenKind::Ident))
        .cloned()
        .ok_or_else(|| ErrorKind::BindingMissingSymbol.at(span))?;
    if items.get(1).and_then(Node::kind) != Some(TokenKind::Colon) {
        return Err(ErrorKind::BindingMissingColon.at(span));
    }
    let ty_raw = items
        .get(2)
        .ok_or_else(|| ErrorKind::BindingMissingColon.at(span))?;
    let ty = normalise_type(ty_raw)?;
    let expr = items.get(3).ok_or_else(|| {
        ErrorKind::UnexpectedToken {
            expected: "a bound expression".to_string(),
            found: "end of binding".to_string(),
        }
        .at(span)
    })?;
    let sym_node = Node::token(sym);
    let inner = Node::of(vec![sym_node, ty, expr.clone()]);
    Ok(Node::token(Token::with_value(
        TokenKind::LetBinding,
        Value::cst_ref(Rc::new(inner)),
        span,
    )))
}

/// Leaf rule: a token fails only if it is `UNQUOTE`/`UNQUOTESPLICE` at
/// `depth == 0`. For a list beginning with a quote-family token, the tail
/// is checked at the adjusted depth (`QQUOTE` → `depth + 1`, `UNQUOTE`/
/// `UNQUOTESPLICE` → `depth - 1`, failing if already 0); any other list is
/// checked elementwise at the same depth.
pub fn validate_quote(node: &Node, depth: i32) -> Result<()> {
    match node {
        Node::Token(t) => quote_leaf(t, depth),
        Node::List(list) => {
            let items = list.to_vec();
            let Some(head_kind) = items.first().and_then(Node::kind) else {
                return Ok(());
            };
            match head_kind {
                TokenKind::QQuote => {
                    for item in &items[1..] {
                        validate_quote(item, depth + 1)?;
                    }
                    Ok(())
                }
                TokenKind::Unquote | TokenKind::UnquoteSplice => {
                    if depth == 0 {
                        let span = items[0].span().unwrap_or_default();
                        return Err(quote_depth_error(head_kind).at(span));
                    }
                    for item in &items[1..] {
                        validate_quote(item, depth - 1)?;
                    }
                    Ok(())
                }
                _ => {
                    for item in &items {
                        validate_quote(item, depth)?;
                    }
                    Ok(())
                }
            }
        }
    }
}

/// Maps [`validate_quote`] across a slice of sibling nodes at one depth.
pub fn validate_quote_list(nodes: &[Node], depth: i32) -> Result<()> {
    for node in nodes {
        validate_quote(node, depth)?;
    }
    Ok(())
}

fn quote_leaf(t: &Token, depth: i32) -> Result<()> {
    if matches!(t.kind, TokenKind::Unquote | TokenKind::UnquoteSplice) && depth == 0 {
        return Err(quote_depth_error(t.kind).at(t.span));
    }
    Ok(())
}

fn quote_depth_error(kind: TokenKind) -> ErrorKind {
    if kind == TokenKind::Unquote {
        ErrorKind::UnquoteOutsideQuasiquote
    } else {
        ErrorKind::UnquoteSpliceOutsideQuasiquote
    }
}
