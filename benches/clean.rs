use criterion::{black_box, criterion_group, criterion_main, Criterion};
use html_cleaner::{clean_html, CleanerConfig};

pub fn bench(c: &mut Criterion) {
    let html = include_str!("../resources/tests/article.html");

    c.bench_function("clean compact", |b| {
        let config = CleanerConfig::default();
        b.iter(|| clean_html(black_box(html), &config))
    });
    c.bench_function("clean pretty no links", |b| {
        let config = CleanerConfig::default()
            .pretty_print(true)
            .remove_classes(true)
            .remove_links(true);
        b.iter(|| clean_html(black_box(html), &config))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench
}
criterion_main!(benches);
