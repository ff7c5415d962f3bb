use std::hint::black_box;

use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};
use sprig_benchmark::compilation_unit;
use sprig_rewrite::{clone_tree, clone_with_substitution, equal, equal_ignoring_offsets};
use sprig_syntax::factory::AstFactory;
use sprig_syntax::nodes::NodeKind;

const SIZES: [usize; 3] = [10, 100, 1000];

fn benchmark_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("Clone Benchmark");

    for functions in SIZES {
        let fixture = compilation_unit(functions);
        group.throughput(Throughput::Elements(fixture.ast.len() as u64));
        group.bench_with_input(BenchmarkId::new("clone_tree", functions), &fixture, |b, fixture| {
            b.iter(|| black_box(clone_tree(&fixture.ast, fixture.root)));
        });
    }

    group.finish();
}

fn benchmark_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("Comparator Benchmark");

    for functions in SIZES {
        let fixture = compilation_unit(functions);
        let copy = clone_tree(&fixture.ast, fixture.root);
        let copy_root = copy.root();
        group.throughput(Throughput::Elements(fixture.ast.len() as u64));
        group.bench_with_input(BenchmarkId::new("equal", functions), &fixture, |b, fixture| {
            b.iter(|| black_box(equal(&fixture.ast, Some(fixture.root), &copy, copy_root)));
        });
        group.bench_with_input(
            BenchmarkId::new("equal_ignoring_offsets", functions),
            &fixture,
            |b, fixture| {
                b.iter(|| {
                    let root = Some(fixture.root);
                    black_box(equal_ignoring_offsets(&fixture.ast, root, &copy, copy_root))
                });
            },
        );
    }

    group.finish();
}

fn benchmark_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("Incremental Clone Benchmark");

    let mut replacement = AstFactory::new();
    let new = replacement.integer("42");
    let replacement = replacement.into_ast();

    for functions in SIZES {
        let fixture = compilation_unit(functions);
        // The last literal in the unit, so the walk covers the whole tree before reaching it.
        let Some(old) = fixture
            .ast
            .descendants(fixture.root)
            .filter(|&node| matches!(fixture.ast.kind(node), NodeKind::IntegerLiteral(_)))
            .last()
        else {
            panic!("generated unit has no integer literal");
        };
        group.throughput(Throughput::Elements(fixture.ast.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("clone_with_substitution", functions),
            &fixture,
            |b, fixture| {
                b.iter(|| {
                    let result = clone_with_substitution(
                        &fixture.ast,
                        fixture.root,
                        old,
                        &replacement,
                        new,
                        &fixture.token_map,
                    );
                    assert!(result.substituted());
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_clone, benchmark_compare, benchmark_incremental);
criterion_main!(benches);
