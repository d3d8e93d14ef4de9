use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

criterion_group!(
    benches,
    bench_insert,
    bench_get,
    bench_hot_get,
    bench_ref_iter
);
criterion_main!(benches);

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insert");
    for n in [1000, 10000].iter() {
        group.bench_function(BenchmarkId::new("Exp", n), |b| {
            b.iter(|| {
                let mut m = splaymap::collections::SplayMap::new();
                for i in 0..*n {
                    m.insert(i, i);
                }
                assert!(m.len() == *n);
            })
        });
        group.bench_function(BenchmarkId::new("Std", n), |b| {
            b.iter(|| {
                let mut m = std::collections::BTreeMap::new();
                for i in 0..*n {
                    m.insert(i, i);
                }
                assert!(m.len() == *n);
            })
        });
    }
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("Get");
    for n in [10, 20, 50, 100, 200, 500, 1000].iter() {
        let n = *n;
        let mut exp_map = splaymap::collections::SplayMap::new();
        for i in 0..n {
            exp_map.insert(i, i);
        }

        let mut std_map = std::collections::BTreeMap::new();
        for i in 0..n {
            std_map.insert(i, i);
        }

        group.bench_function(BenchmarkId::new("Exp", n), |b| {
            b.iter(|| {
                for i in 0..n {
                    assert!(exp_map.get(&i).unwrap() == &i);
                }
            })
        });
        group.bench_function(BenchmarkId::new("Std", n), |b| {
            b.iter(|| {
                for i in 0..n {
                    assert!(std_map.get(&i).unwrap() == &i);
                }
            })
        });
    }
    group.finish();
}

/// Skewed access: most lookups hit a small hot set of keys. This is the
/// workload the self-adjusting tree is designed for, since hot keys stay
/// near the root.
fn bench_hot_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("HotGet");
    for n in [1000, 10000].iter() {
        let n = *n;
        let mut exp_map = splaymap::collections::SplayMap::new();
        for i in 0..n {
            exp_map.insert(i, i);
        }

        let mut std_map = std::collections::BTreeMap::new();
        for i in 0..n {
            std_map.insert(i, i);
        }

        group.bench_function(BenchmarkId::new("Exp", n), |b| {
            b.iter(|| {
                for i in 0..n {
                    // 15 of every 16 accesses go to the hot set.
                    let k = if i % 16 == 0 { i } else { i % 16 };
                    assert!(exp_map.get(&k).is_some());
                }
            })
        });
        group.bench_function(BenchmarkId::new("Std", n), |b| {
            b.iter(|| {
                for i in 0..n {
                    let k = if i % 16 == 0 { i } else { i % 16 };
                    assert!(std_map.get(&k).is_some());
                }
            })
        });
    }
    group.finish();
}

fn bench_ref_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("RefIter");
    for n in [50, 100, 1000, 10000, 100000].iter() {
        let mut exp_map = splaymap::collections::SplayMap::new();
        for i in 0..*n {
            exp_map.insert(i, i);
        }

        let mut std_map = std::collections::BTreeMap::new();
        for i in 0..*n {
            std_map.insert(i, i);
        }

        group.bench_function(BenchmarkId::new("Exp", n), |b| {
            b.iter(|| {
                for (k, v) in exp_map.iter() {
                    assert!(k == v);
                }
            })
        });
        group.bench_function(BenchmarkId::new("Std", n), |b| {
            b.iter(|| {
                for (k, v) in std_map.iter() {
                    assert!(k == v);
                }
            })
        });
    }
    group.finish();
}

use mimalloc::MiMalloc;
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
