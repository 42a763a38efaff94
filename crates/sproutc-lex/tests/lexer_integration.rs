//! End-to-end lexing of small source fragments, exercising the public
//! `Lexer` contract rather than any one submodule in isolation.

use sproutc_lex::{Lexer, TokenKind, Value};

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(source).expect("valid source");
    let mut out = Vec::new();
    loop {
        let tok = lexer.next().expect("valid source");
        let done = tok.kind == TokenKind::End;
        out.push(tok.kind);
        if done {
            break;
        }
    }
    out
}

#[test]
fn a_typed_lambda_lexes_to_the_expected_kind_sequence() {
    use TokenKind::*;
    assert_eq!(
        kinds("(lambda (x : int) x)"),
        vec![
            LParen, Ident, LParen, Ident, Colon, TypeIdent, RParen, Ident, RParen, End
        ]
    );
}

#[test]
fn a_quasiquoted_list_with_unquote_splice_lexes_correctly() {
    use TokenKind::*;
    assert_eq!(
        kinds("`(1 ,@xs 2)"),
        vec![
            QQuote, LParen, Number, UnquoteSplice, Ident, Number, RParen, End
        ]
    );
}

#[test]
fn reserved_words_and_builtins_stay_as_their_lexer_level_kind() {
    use TokenKind::*;
    // `lambda`, `cond`, `match` etc. are NOT special-cased by the lexer —
    // they lex as plain idents and are only promoted by the parser.
    assert_eq!(kinds("lambda"), vec![Ident, End]);
    assert_eq!(kinds("cond"), vec![Ident, End]);
    // but the constant-like builtin words are.
    assert_eq!(kinds("nil"), vec![Nil, End]);
    assert_eq!(kinds("cons"), vec![Cons, End]);
    // `list` is a primitive type name, not a builtin constant word.
    assert_eq!(kinds("list"), vec![TypeIdent, End]);
}

#[test]
fn negative_numbers_and_bare_operators_are_disambiguated_by_context() {
    use TokenKind::*;
    assert_eq!(kinds("(- 1 2)"), vec![LParen, Ident, Number, Number, RParen, End]);
    assert_eq!(
        kinds("(-1 2)"),
        vec![LParen, Number, Number, RParen, End]
    );
}

#[test]
fn peek_and_backup_round_trip_through_a_small_program() {
    let mut lexer = Lexer::new("(define x 1)").unwrap();
    assert_eq!(lexer.peek(2).unwrap().kind, TokenKind::Ident); // "x"
    let lparen = lexer.next().unwrap();
    let define_ident = lexer.next().unwrap();
    assert_eq!(define_ident.value, Some(Value::symbol("define")));
    lexer.backup();
    assert_eq!(lexer.next().unwrap(), define_ident);
    let _ = lparen;
}

#[test]
fn an_unterminated_string_reports_its_starting_location() {
    let err = Lexer::new("\"abc").unwrap_err();
    assert_eq!(err.span.line, 0);
    assert_eq!(err.span.column, 0);
}

#[test]
fn an_unterminated_string_later_in_the_source_reports_its_own_location() {
    let mut lexer = Lexer::new("(x \"abc)").unwrap();
    lexer.next().unwrap(); // LPAREN
    lexer.next().unwrap(); // x
    let err = lexer.next().unwrap_err();
    assert_eq!(err.span.line, 0);
    assert_eq!(err.span.column, 3);
}

// --- testable properties (`spec.md` §8) ----------------------------------

#[test]
fn an_arbitrary_lowercase_identifier_lexes_to_a_single_ident_with_the_same_text() {
    use proptest::prelude::*;

    proptest!(|(name in "[a-z][a-z0-9_]{0,15}")| {
        let mut lexer = Lexer::new(&name).expect("valid source");
        let tok = lexer.next().expect("valid source");
        prop_assert_eq!(tok.kind, TokenKind::Ident);
        prop_assert_eq!(tok.value.as_ref().and_then(Value::as_str), Some(name.as_str()));
        prop_assert_eq!(lexer.next().unwrap().kind, TokenKind::End);
    });
}

#[test]
fn an_arbitrary_non_negative_integer_literal_round_trips_through_lexing() {
    use proptest::prelude::*;

    proptest!(|(n in 0i64..1_000_000_000)| {
        let text = n.to_string();
        let mut lexer = Lexer::new(&text).expect("valid source");
        let tok = lexer.next().expect("valid source");
        prop_assert_eq!(tok.kind, TokenKind::Number);
        prop_assert_eq!(tok.value, Some(Value::Int(n)));
    });
}
