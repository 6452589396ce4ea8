use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pgfrag::{ColumnMap, Range};

fn bench_update(c: &mut Criterion) {
    let cols = ColumnMap::new()
        .map("firstName", "first_name")
        .map("lastName", "last_name");

    c.bench_function("update_fragment", |b| {
        b.iter(|| {
            pgfrag::update()
                .set("firstName", "Aliya")
                .set("lastName", "Jones")
                .set("age", 32)
                .build(black_box(&cols))
                .unwrap()
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let cols = ColumnMap::new().map("companyHandle", "company_handle");

    c.bench_function("search_fragment", |b| {
        b.iter(|| {
            pgfrag::search()
                .range("title", Range::new().like("engineer"))
                .range("salary", Range::new().min(30_000).max(90_000))
                .range("equity", Range::new().min_exclusive(0))
                .eq("companyHandle", "acme")
                .build(black_box(&cols))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_update, bench_search);
criterion_main!(benches);
