use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use solder_di::{BoxedValue, FastInvoker, Key, Registry};
use std::sync::Arc;

trait Greets: Send + Sync {
    fn phrase(&self) -> &str;
}

struct Plain;

impl Greets for Plain {
    fn phrase(&self) -> &str {
        "hello"
    }
}

// ===== Micro Benchmarks =====

fn bench_new(c: &mut Criterion) {
    c.bench_function("registry_new", |b| {
        b.iter(|| {
            let registry = Registry::new();
            black_box(&registry);
        })
    });
}

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("registration");

    let registry = Registry::new();
    group.bench_function("map_string", |b| {
        b.iter(|| {
            registry.map(black_box("Jeremy".to_string()));
        })
    });

    let registry = Registry::new();
    group.bench_function("map_as_trait", |b| {
        b.iter(|| {
            registry.map_as::<dyn Greets>(black_box(Arc::new(Plain)));
        })
    });

    let registry = Registry::new();
    group.bench_function("set_raw", |b| {
        b.iter(|| {
            registry.set(Key::of::<u64>(), black_box(Arc::new(42u64)));
        })
    });

    let registry = Registry::new();
    group.bench_function("map_then_reset", |b| {
        b.iter(|| {
            registry.map(42u64).map("state".to_string());
            registry.reset();
        })
    });

    group.finish();
}

fn bench_resolution(c: &mut Criterion) {
    struct Missing;

    let mut group = c.benchmark_group("resolution");

    let registry = Registry::new();
    registry.map(42u64);
    registry.map("Jeremy".to_string());

    group.bench_function("value_hit_u64", |b| {
        b.iter(|| {
            let v = registry.value::<u64>().unwrap();
            black_box(v);
        })
    });

    group.bench_function("value_miss", |b| {
        b.iter(|| {
            let v = registry.value::<Arc<Missing>>();
            black_box(v.is_none());
        })
    });

    group.bench_function("load_string", |b| {
        let mut target = String::new();
        b.iter(|| {
            registry.load(&mut target).unwrap();
            black_box(target.len());
        })
    });

    group.finish();
}

fn bench_concrete_vs_trait(c: &mut Criterion) {
    struct ConcreteImpl {
        val: u64,
    }

    let mut group = c.benchmark_group("concrete_vs_trait");

    let registry = Registry::new();
    registry.map(Arc::new(ConcreteImpl { val: 42 }));
    registry.map_as::<dyn Greets>(Arc::new(Plain));

    group.bench_function("concrete", |b| {
        b.iter(|| {
            let v = registry.value::<Arc<ConcreteImpl>>().unwrap();
            black_box(v.val);
        })
    });

    group.bench_function("trait_single", |b| {
        b.iter(|| {
            let v = registry.value::<Arc<dyn Greets>>().unwrap();
            black_box(v.phrase().len());
        })
    });

    group.finish();
}

fn greet(name: String, greeter: Arc<dyn Greets>) -> usize {
    name.len() + greeter.phrase().len()
}

#[derive(Clone, Copy)]
struct FastGreet;

impl FastInvoker for FastGreet {
    type Output = usize;

    fn param_keys() -> Vec<Key> {
        vec![Key::of::<String>(), Key::of::<Arc<dyn Greets>>()]
    }

    fn call_fast(self, args: Vec<BoxedValue>) -> usize {
        let name = args[0].downcast_ref::<String>().unwrap();
        let greeter = args[1].downcast_ref::<Arc<dyn Greets>>().unwrap();
        name.len() + greeter.phrase().len()
    }
}

fn bench_invoke(c: &mut Criterion) {
    let mut group = c.benchmark_group("invoke");

    let registry = Registry::new();
    registry.map("Jeremy".to_string());
    registry.map_as::<dyn Greets>(Arc::new(Plain));

    group.bench_function("generic_zero_args", |b| {
        b.iter(|| {
            let v = registry.invoke(|| 42u64).unwrap();
            black_box(v);
        })
    });

    group.bench_function("generic_two_args", |b| {
        b.iter(|| {
            let v = registry.invoke(greet).unwrap();
            black_box(v);
        })
    });

    group.bench_function("fast_two_args", |b| {
        b.iter(|| {
            let v = registry.invoke(FastGreet).unwrap();
            black_box(v);
        })
    });

    group.finish();
}

fn bench_parent_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("parent_chain");

    let root = Arc::new(Registry::new());
    root.map(42u64);

    let mut leaf = root.clone();
    for _ in 0..7 {
        let child = Arc::new(Registry::new());
        child.set_parent(leaf.clone());
        leaf = child;
    }

    group.bench_function("chain_depth_8", |b| {
        b.iter(|| {
            let v = leaf.value::<u64>().unwrap();
            black_box(v);
        })
    });

    group.finish();
}

fn bench_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("contention");

    let registry = Registry::new();
    registry.map(42u64);

    for &thread_count in &[1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("value_threads", thread_count),
            &thread_count,
            |b, &threads| {
                b.iter_custom(|iters| {
                    let start = std::time::Instant::now();
                    crossbeam_utils::thread::scope(|s| {
                        for _ in 0..threads {
                            let registry_ref = &registry;
                            s.spawn(move |_| {
                                for _ in 0..iters / threads as u64 {
                                    let v = registry_ref.value::<u64>().unwrap();
                                    black_box(v);
                                }
                            });
                        }
                    })
                    .unwrap();
                    start.elapsed()
                })
            },
        );
    }

    group.finish();
}

// ===== Macro Benchmarks =====

fn bench_populated_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("populated_registry");

    // A registry holding a spread of entry types, resolving one of them.
    let registry = Registry::new();
    registry
        .map(1u8)
        .map(2u16)
        .map(3u32)
        .map(42u64)
        .map(5u128)
        .map(-1i8)
        .map(-2i16)
        .map(-3i32)
        .map(-4i64)
        .map(0.5f32)
        .map(0.25f64)
        .map(true)
        .map('x')
        .map("Jeremy".to_string())
        .map(vec![0u8; 16])
        .map_as::<dyn Greets>(Arc::new(Plain));

    group.bench_function("resolve_among_16_types", |b| {
        b.iter(|| {
            let v = registry.value::<u64>().unwrap();
            black_box(v);
        })
    });

    group.finish();
}

fn bench_mixed_workload(c: &mut Criterion) {
    // Simulate realistic workload: 70% value hits, 20% loads, 10% invokes
    let registry = Registry::new();
    registry.map(1u64);
    registry.map("payload".to_string());

    c.bench_function("mixed_workload_realistic", |b| {
        let mut target = String::new();
        b.iter(|| {
            for _ in 0..7 {
                let v = registry.value::<u64>().unwrap();
                black_box(v);
            }

            for _ in 0..2 {
                registry.load(&mut target).unwrap();
                black_box(target.len());
            }

            let v = registry.invoke(|n: u64, s: String| n + s.len() as u64).unwrap();
            black_box(v);
        })
    });
}

criterion_group!(
    micro_benches,
    bench_new,
    bench_registration,
    bench_resolution,
    bench_concrete_vs_trait,
    bench_invoke,
    bench_parent_chain,
    bench_contention
);

criterion_group!(macro_benches, bench_populated_registry, bench_mixed_workload);

criterion_main!(micro_benches, macro_benches);
