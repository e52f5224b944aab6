use async_trait::async_trait;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use eddy_core::{
    CacheStore, CachedObject, FetchConfig, FetchService, OriginClient, OriginError,
    OriginResponse,
};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::runtime::Runtime;

const ORIGIN: &str = "https://bench.test";

/// Crea un objeto de prueba con un body de N bytes
fn create_test_object(size: usize) -> CachedObject {
    CachedObject::new(
        vec![b'x'; size],
        "text/html",
        SystemTime::now(),
        Duration::from_secs(3600),
    )
}

/// Origin que siempre responde el mismo body, sin red.
struct StaticOrigin;

#[async_trait]
impl OriginClient for StaticOrigin {
    async fn get(&self, _url: &str) -> Result<OriginResponse, OriginError> {
        Ok(OriginResponse::ok(vec![b'x'; 4096], Some("text/html")))
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Benchmark: Store get (hit)
fn bench_store_get_hit(c: &mut Criterion) {
    let store = CacheStore::new();
    store.put(ORIGIN, "index.html", create_test_object(4096));

    c.bench_function("store_get_hit", |b| {
        b.iter(|| std::hint::black_box(store.get(ORIGIN, "index.html")));
    });
}

/// Benchmark: Store get (miss)
fn bench_store_get_miss(c: &mut Criterion) {
    let store = CacheStore::new();

    c.bench_function("store_get_miss", |b| {
        b.iter(|| std::hint::black_box(store.get(ORIGIN, "nonexistent")));
    });
}

/// Benchmark: Store put con diferentes tamanos de body
fn bench_store_put_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_put_sizes");

    for size in [1_024, 16_384, 262_144].iter() {
        let store = CacheStore::new();
        let object = Arc::new(create_test_object(*size));
        let mut counter = 0u64;

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _size| {
            b.iter(|| {
                counter += 1;
                store.put(ORIGIN, &format!("page-{}", counter), Arc::clone(&object));
            });
        });
    }

    group.finish();
}

/// Benchmark: resolve servido desde cache
fn bench_resolve_hit(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let config = FetchConfig::builder().allow_origin(ORIGIN).build().unwrap();
    let service = FetchService::new(config, Arc::new(StaticOrigin));

    // Pre-populate
    rt.block_on(async {
        service.resolve(ORIGIN, "index.html").await.unwrap();
    });

    c.bench_function("resolve_hit", |b| {
        b.to_async(&rt).iter(|| async {
            std::hint::black_box(service.resolve(ORIGIN, "index.html").await.unwrap())
        });
    });
}

/// Benchmark: Concurrencia - multiples resolves simultaneos
fn bench_resolve_concurrent(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let config = FetchConfig::builder().allow_origin(ORIGIN).build().unwrap();
    let service = Arc::new(FetchService::new(config, Arc::new(StaticOrigin)));

    rt.block_on(async {
        for i in 0..1000 {
            service.resolve(ORIGIN, &format!("page-{}", i)).await.unwrap();
        }
    });

    c.bench_function("resolve_concurrent_100", |b| {
        b.to_async(&rt).iter(|| {
            let service = Arc::clone(&service);
            async move {
                let handles: Vec<_> = (0..100)
                    .map(|i| {
                        let service = Arc::clone(&service);
                        tokio::spawn(async move {
                            service.resolve(ORIGIN, &format!("page-{}", i % 1000)).await
                        })
                    })
                    .collect();

                for handle in handles {
                    let _ = handle.await;
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_store_get_hit,
    bench_store_get_miss,
    bench_store_put_varying_sizes,
    bench_resolve_hit,
    bench_resolve_concurrent,
);

criterion_main!(benches);
