//! Benchmarks for exact Gauss-Jordan elimination.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gauss::prelude::*;

/// The n×n Hilbert matrix, whose entries `1/(i+j+1)` grow large denominators.
fn hilbert(n: usize) -> DenseMatrix {
    DenseMatrix::from_fn(n, n, |i, j| {
        Rational::from_i64(1, i64::try_from(i + j + 1).unwrap())
    })
}

/// Right-hand side chosen so the solution is all ones.
fn ones_rhs(a: &DenseMatrix) -> DenseMatrix {
    let ones = DenseMatrix::from_fn(a.num_cols(), 1, |_, _| Rational::from(1));
    a.mm(&ones)
}

/// A tridiagonal system written as equation text.
fn tridiagonal_system(n: usize) -> EquationSystem {
    (0..n)
        .map(|i| {
            let mut text = format!("2x{i}");
            if i > 0 {
                text.push_str(&format!(" - x{}", i - 1));
            }
            if i + 1 < n {
                text.push_str(&format!(" - x{}", i + 1));
            }
            text.push_str(" = 1");
            Equation::parse(&text).unwrap()
        })
        .collect()
}

fn bench_hilbert(c: &mut Criterion) {
    let mut group = c.benchmark_group("hilbert_solve");

    for size in [4, 8, 12, 16] {
        let a = hilbert(size);
        let y = ones_rhs(&a);
        let first = EliminationConfig::with_pivoting(Pivoting::FirstNonZero);

        group.bench_with_input(BenchmarkId::new("partial", size), &size, |b, _| {
            b.iter(|| black_box(a.solve(&y)));
        });
        group.bench_with_input(BenchmarkId::new("first_non_zero", size), &size, |b, _| {
            b.iter(|| black_box(a.solve_with(&y, &first)));
        });
    }

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [8, 16, 32] {
        // Rank-deficient: every row is a multiple of the first.
        let m = DenseMatrix::from_fn(size, size, |i, j| {
            Rational::from_i64(i64::try_from((i + 1) * (j + 1)).unwrap(), 7)
        });

        group.bench_with_input(BenchmarkId::new("rank_one", size), &size, |b, _| {
            b.iter(|| black_box(m.rank()));
        });
    }

    group.finish();
}

fn bench_equation_system(c: &mut Criterion) {
    let mut group = c.benchmark_group("equation_system");

    for size in [8, 16, 32] {
        let system = tridiagonal_system(size);

        group.bench_with_input(BenchmarkId::new("tridiagonal", size), &size, |b, _| {
            b.iter(|| black_box(system.solve()));
        });
    }

    group.bench_function("parse_line", |b| {
        b.iter(|| black_box(Equation::parse("-2*x1 + 3/4 x2 + 0.125x3 - 7 = 4x1 - 9.5")));
    });

    group.finish();
}

criterion_group!(benches, bench_hilbert, bench_rank, bench_equation_system);
criterion_main!(benches);
