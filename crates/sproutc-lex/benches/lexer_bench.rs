//! Lexer benchmarks.
//!
//! Run with `cargo bench --package sproutc-lex`.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sproutc_lex::{Lexer, TokenKind};

fn token_count(source: &str) -> usize {
    let mut lexer = Lexer::new(source).expect("valid source");
    let mut count = 0;
    loop {
        let tok = lexer.next().expect("valid source");
        count += 1;
        if tok.kind == TokenKind::End {
            break;
        }
    }
    count
}

fn bench_lexer_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "(define (add a : int b : int) -> int (+ a b))";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_define", |b| {
        b.iter(|| token_count(black_box("(lambda (x) x)")))
    });

    group.bench_function("typed_define", |b| b.iter(|| token_count(black_box(source))));

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        (data Tree
          (Leaf)
          (Node (left Tree) (value int) (right Tree)))

        (define (sum t : Tree) -> int
          (match t
            ((Leaf) 0)
            ((Node l v r) (+ v (+ (sum l) (sum r))))))

        (define (classify x : int) -> string
          (cond
            ((eq? x 0) "zero")
            ((> x 0) "positive")
            (else "negative")))
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("data_and_match", |b| b.iter(|| token_count(black_box(source))));
    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| b.iter(|| token_count(black_box("123456"))));
    group.bench_function("float", |b| b.iter(|| token_count(black_box("3.14159"))));
    group.bench_function("rational", |b| b.iter(|| token_count(black_box("22/7"))));
    group.bench_function("complex", |b| b.iter(|| token_count(black_box("-2.5+4i"))));

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| b.iter(|| token_count(black_box("x"))));
    group.bench_function("long_ident", |b| {
        b.iter(|| token_count(black_box("very-long-predicate-name?")))
    });
    group.bench_function("many_idents", |b| {
        b.iter(|| token_count(black_box("(a b c d e f g h i j)")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_forms,
    bench_lexer_complex,
    bench_lexer_numbers,
    bench_lexer_identifiers
);
criterion_main!(benches);
