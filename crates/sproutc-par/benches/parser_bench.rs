//! Parser benchmarks.
//!
//! Run with `cargo bench --package sproutc-par`.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sproutc_par::parse_program;

fn bench_parser_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_simple");

    let source = "(lambda (x : int -> int) x)";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("lambda", |b| {
        b.iter(|| parse_program(black_box(source)).unwrap())
    });

    group.finish();
}

fn bench_parser_define(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_define");

    let source = "(define (add a : int b : int) -> int (+ a b))";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("typed_define", |b| {
        b.iter(|| parse_program(black_box(source)).unwrap())
    });

    group.finish();
}

fn bench_parser_let_and_cond(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_let_and_cond");

    let source = r#"
        (let loop ((i : int 0) (acc : int 0))
          (cond
            ((eq? i 10) acc)
            (else (loop (+ i 1) (+ acc i)))))
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("named_let_with_cond", |b| {
        b.iter(|| parse_program(black_box(source)).unwrap())
    });

    group.finish();
}

fn bench_parser_data_and_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_data_and_match");

    let source = r#"
        (data Tree (A)
          (Leaf)
          (Node (left Tree) (value A) (right Tree)))

        (define (sum t : Tree) -> int
          (match t
            ((Leaf) 0)
            ((Node l v r) (+ v (+ (sum l) (sum r))))))
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("data_and_match", |b| {
        b.iter(|| parse_program(black_box(source)).unwrap())
    });

    group.finish();
}

fn bench_parser_quote_family(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_quote_family");

    group.bench_function("quote_shorthand", |b| {
        b.iter(|| parse_program(black_box("'(1 2 3)")).unwrap())
    });
    group.bench_function("quasiquote_with_splice", |b| {
        b.iter(|| parse_program(black_box("`(1 ,@xs ,(+ 1 2))")).unwrap())
    });

    group.finish();
}

fn bench_parser_generic_and_tapply(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_generic_and_tapply");

    let source = r#"
        (tlambda (A) (lambda (x : A -> A) x))
        (tapply id int string)
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("tlambda_and_tapply", |b| {
        b.iter(|| parse_program(black_box(source)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_simple,
    bench_parser_define,
    bench_parser_let_and_cond,
    bench_parser_data_and_match,
    bench_parser_quote_family,
    bench_parser_generic_and_tapply
);
criterion_main!(benches);
