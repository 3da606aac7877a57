#[macro_use]
extern crate criterion;
extern crate range_btree;

use criterion::{BenchmarkId, Criterion};
use range_btree::workload::{RandomKeys, SequentialKeys, SequentialOrder};
use range_btree::*;
use std::collections::BTreeSet;

pub fn put_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");
    let nums: Vec<usize> = vec![1_000, 10_000, 100_000];
    for num in nums {
        group.bench_with_input(BenchmarkId::new("Random", num), &num, |b, &num| {
            b.iter(|| {
                let tree: Tree<u32> = RandomKeys::new(num, 1_000_000, 17).collect();
                assert_eq!(tree.len(), num);
            })
        });
        group.bench_with_input(BenchmarkId::new("Sequential", num), &num, |b, &num| {
            b.iter(|| {
                let tree: Tree<u32> = SequentialKeys::new(num, SequentialOrder::Ascending).collect();
                assert_eq!(tree.len(), num);
            })
        });
        group.bench_with_input(BenchmarkId::new("std BTreeSet", num), &num, |b, &num| {
            b.iter(|| {
                let set: BTreeSet<(u32, usize)> = RandomKeys::new(num, 1_000_000, 17)
                    .enumerate()
                    .map(|(i, x)| (x, i))
                    .collect();
                assert_eq!(set.len(), num);
            })
        });
    }
}

pub fn query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let nums: Vec<usize> = vec![1_000, 10_000, 100_000];
    for num in nums {
        let tree: Tree<u32> = RandomKeys::new(num, 1_000_000, 17).collect();

        group.bench_with_input(BenchmarkId::new("has", num), &tree, |b, tree| {
            let probes: Vec<u32> = RandomKeys::new(1_000, 1_000_000, 42).collect();
            b.iter(|| probes.iter().filter(|&probe| tree.has(probe)).count())
        });
        group.bench_with_input(BenchmarkId::new("iter", num), &tree, |b, tree| {
            b.iter(|| assert_eq!(tree.iter().count(), num))
        });
        group.bench_with_input(BenchmarkId::new("narrow range", num), &tree, |b, tree| {
            b.iter(|| {
                tree.range(RangeQuery::new().min(&500_000).max(&510_000))
                    .count()
            })
        });
        group.bench_with_input(BenchmarkId::new("descending range", num), &tree, |b, tree| {
            b.iter(|| {
                tree.range(RangeQuery::new().min(&250_000).max(&750_000).descending())
                    .count()
            })
        });
    }
}

criterion_group!(benches, put_benchmark, query_benchmark);
criterion_main!(benches);
