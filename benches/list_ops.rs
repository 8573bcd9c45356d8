//! Benchmarks comparing `sentinel_list::List` against the std sequence
//! containers.
//!
//! Run with: cargo bench

use std::collections::{LinkedList, VecDeque};

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sentinel_list::List;

const LEN: usize = 10_000;

// ============================================================================
// Push at the back
// ============================================================================

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    group.throughput(Throughput::Elements(LEN as u64));

    group.bench_function("sentinel-list", |b| {
        let mut list = List::new();
        b.iter(|| {
            for i in 0..LEN as u64 {
                list.push_back(black_box(i));
            }
            list.clear();
        });
    });

    group.bench_function("linked-list", |b| {
        let mut list = LinkedList::new();
        b.iter(|| {
            for i in 0..LEN as u64 {
                list.push_back(black_box(i));
            }
            list.clear();
        });
    });

    group.bench_function("vec-deque", |b| {
        let mut deque = VecDeque::new();
        b.iter(|| {
            for i in 0..LEN as u64 {
                deque.push_back(black_box(i));
            }
            deque.clear();
        });
    });

    group.finish();
}

// ============================================================================
// Sequential traversal
// ============================================================================

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    group.throughput(Throughput::Elements(LEN as u64));

    let list = List::from_iter(0..LEN as u64);
    let linked = LinkedList::from_iter(0..LEN as u64);
    let deque = VecDeque::from_iter(0..LEN as u64);

    group.bench_function("sentinel-list", |b| {
        b.iter(|| black_box(list.iter().sum::<u64>()));
    });

    group.bench_function("linked-list", |b| {
        b.iter(|| black_box(linked.iter().sum::<u64>()));
    });

    group.bench_function("vec-deque", |b| {
        b.iter(|| black_box(deque.iter().sum::<u64>()));
    });

    group.finish();
}

// ============================================================================
// Repeated edits at a held position
// ============================================================================

fn bench_edit_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_middle");

    const EDITS: usize = 10_000;
    group.throughput(Throughput::Elements(EDITS as u64 * 2)); // insert + remove

    group.bench_function("sentinel-list/cursor", |b| {
        let mut list = List::from_iter(0..LEN as u64);
        b.iter(|| {
            let mut cursor = list.cursor_mut(LEN / 2);
            for i in 0..EDITS as u64 {
                cursor.insert(i);
                black_box(cursor.backspace());
            }
        });
    });

    group.bench_function("vec-deque/index", |b| {
        let mut deque = VecDeque::from_iter(0..LEN as u64);
        b.iter(|| {
            for i in 0..EDITS as u64 {
                deque.insert(LEN / 2, i);
                black_box(deque.remove(LEN / 2));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Sort
// ============================================================================

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    group.throughput(Throughput::Elements(LEN as u64));

    // Prime multiplier for a deterministic scramble
    let scrambled: Vec<u64> = (0..LEN as u64).map(|i| (i * 7919) % LEN as u64).collect();

    group.bench_function("sentinel-list", |b| {
        b.iter_with_setup(
            || List::from_iter(scrambled.iter().copied()),
            |mut list| {
                list.sort();
                list
            },
        );
    });

    group.bench_function("vec", |b| {
        b.iter_with_setup(
            || scrambled.clone(),
            |mut vec| {
                vec.sort();
                vec
            },
        );
    });

    group.finish();
}

// ============================================================================
// Splice into the middle
// ============================================================================

fn bench_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("splice_middle");

    const SPLICE_LEN: usize = 1_000;
    group.throughput(Throughput::Elements(SPLICE_LEN as u64));

    group.bench_function("sentinel-list", |b| {
        b.iter_with_setup(
            || {
                (
                    List::from_iter(0..LEN as u64),
                    List::from_iter(0..SPLICE_LEN as u64),
                )
            },
            |(mut list, other)| {
                list.splice_at(LEN / 2, other);
                list
            },
        );
    });

    group.bench_function("vec", |b| {
        b.iter_with_setup(
            || {
                (
                    Vec::from_iter(0..LEN as u64),
                    Vec::from_iter(0..SPLICE_LEN as u64),
                )
            },
            |(mut vec, other)| {
                drop(vec.splice(LEN / 2..LEN / 2, other));
                vec
            },
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_iterate,
    bench_edit_middle,
    bench_sort,
    bench_splice,
);

criterion_main!(benches);
