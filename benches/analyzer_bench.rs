// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use form_field_analyzer::{parse_html, FieldAnalyzer};

const PAGE: &str = r#"
    <!DOCTYPE html>
    <html>
    <head><title>Test</title></head>
    <body>
        <form action="/login" method="post">
            <input type="hidden" name="_csrf" value="token">
            <input type="email" name="email" value="someone@example.com">
            <input type="password" name="password" autocomplete="on">
            <input type="tel" name="phone" value="555-0100" required>
            <input type="submit">
        </form>
    </body>
    </html>
"#;

fn html_parsing_benchmark(c: &mut Criterion) {
    c.bench_function("parse_html", |b| {
        b.iter(|| black_box(parse_html(black_box(PAGE)).unwrap()))
    });
}

fn analysis_benchmark(c: &mut Criterion) {
    let doc = parse_html(PAGE).unwrap();
    let analyzer = FieldAnalyzer::new();

    c.bench_function("analyze_document", |b| {
        b.iter(|| black_box(analyzer.analyze_document(black_box(&doc), "https://example.com")))
    });
}

criterion_group!(benches, html_parsing_benchmark, analysis_benchmark);
criterion_main!(benches);
