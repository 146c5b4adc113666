//! Benchmarks for the block-structure parser
//!
//! Run with: cargo bench -p tagtree-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tagtree_core::Parser;

/// Sample template with typical nesting.
const WELL_FORMED: &str = r#"<html>
<body>
{% if user %}
  <h1>Hello, {{ user.name }}!</h1>
  {% if user.is_admin %}
    <a href="/admin">admin console</a>
  {% elif user.is_staff %}
    <a href="/staff">staff tools</a>
  {% else %}
    <p>Welcome back.</p>
  {% endif %}
  {% for order in user.orders %}
    <div class="order">
      {{ order.id }}
      {% for line in order.lines %}
        <span>{{ line.sku }} x {{ line.qty }}</span>
      {% endfor %}
    </div>
  {% endfor %}
{% else %}
  <a href="/login">Sign in</a>
{% endif %}
</body>
</html>
"#;

/// The same template with its closers stripped, exercising the
/// degraded-result path.
const MALFORMED: &str = r#"<html>
{% if user %}
  {% if user.is_admin %}
  {% elif user.is_staff %}
  {% for order in user.orders %}
    {% for line in order.lines %}
{% else %}
{% endwhile %}
</html>
"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.throughput(Throughput::Bytes(WELL_FORMED.len() as u64));
    group.bench_function("well_formed", |b| {
        let parser = Parser::new();
        b.iter(|| parser.parse(black_box(WELL_FORMED)));
    });

    group.throughput(Throughput::Bytes(MALFORMED.len() as u64));
    group.bench_function("malformed", |b| {
        let parser = Parser::new();
        b.iter(|| parser.parse(black_box(MALFORMED)));
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_scaling");

    for &repeats in &[10usize, 100, 1000] {
        let input = WELL_FORMED.repeat(repeats);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &input, |b, input| {
            let parser = Parser::new();
            b.iter(|| parser.parse(black_box(input)));
        });
    }

    group.finish();
}

fn bench_exports(c: &mut Criterion) {
    let mut group = c.benchmark_group("exports");

    let result = Parser::new().parse(WELL_FORMED);
    group.bench_function("outline", |b| {
        b.iter(|| tagtree_core::outline::outline(black_box(&result.forest)));
    });
    group.bench_function("diagram", |b| {
        b.iter(|| tagtree_core::diagram::diagram(black_box(&result.forest)));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_scaling, bench_exports);
criterion_main!(benches);
