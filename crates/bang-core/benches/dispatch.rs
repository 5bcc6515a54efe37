use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bang_core::SearchHandler;

const QUERIES: &[&str] = &[
    "!g rust borrow checker",
    "best mechanical keyboard !gr",
    "#mw firemaking xp",
    "!dhl 00340434161234567890",
    "just some plain text",
    "C# pattern matching",
];

fn bench_search(c: &mut Criterion) {
    let handler = match SearchHandler::builtin() {
        Ok(handler) => handler,
        Err(e) => panic!("failed to build handler: {e}"),
    };

    c.bench_function("search_mixed", |b| {
        b.iter(|| {
            for query in QUERIES {
                black_box(handler.search(black_box(query)));
            }
        })
    });

    c.bench_function("search_default_fallback", |b| {
        b.iter(|| black_box(handler.search(black_box("no bang in this query at all"))))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
