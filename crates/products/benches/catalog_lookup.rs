use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use storecat_products::Catalog;

fn filled_catalog(size: usize) -> Catalog {
    let mut catalog = Catalog::new(size).expect("capacity is positive");
    for i in 0..size {
        catalog
            .add_product(format!("{i:012}"), format!("product {i}"), 1.0 + i as f64)
            .expect("codes are unique");
    }
    catalog
}

/// Lookup cost of the last-inserted code (worst case for a linear scan).
fn bench_find_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_code");
    for size in [10usize, 100, 1_000] {
        let catalog = filled_catalog(size);
        let last = format!("{:012}", size - 1);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &last, |b, code| {
            b.iter(|| black_box(catalog.find_code(black_box(code)).is_ok()))
        });
    }
    group.finish();
}

/// Cost of filling a catalog to capacity (duplicate check makes this quadratic).
fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_catalog");
    for size in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(filled_catalog(size)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_code, bench_fill);
criterion_main!(benches);
