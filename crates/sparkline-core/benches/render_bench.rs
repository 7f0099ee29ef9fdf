use sparkline_core::{
    ContainerSize, FieldDescriptor, QuerySchema, RenderConfig, RenderInput, ResultRow, ResultSet,
    SparklineWidget, SvgSurface, Visualization,
};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_rows(n: usize) -> ResultSet {
    (0..n)
        .map(|i| {
            let x = i as f64;
            ResultRow::new()
                .with("day", x)
                .with("visits", (x * 0.01).sin() * 10.0 + 20.0)
                .with("revenue", x * 1.5)
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("widget_render");
    let schema = QuerySchema::new(
        vec![FieldDescriptor::dimension("day")],
        vec![FieldDescriptor::measure("visits"), FieldDescriptor::measure("revenue")],
    );
    let config = RenderConfig::default();
    for &n in &[1_000usize, 50_000usize] {
        let rows = build_rows(n);
        group.bench_function(format!("rows_{n}"), |b| {
            let mut widget = SparklineWidget::new();
            let mut surface = SvgSurface::new(ContainerSize::new(800.0, 500.0));
            widget.initialize(&mut surface);
            b.iter(|| {
                let out = widget.render(&mut surface, &RenderInput::new(&rows, &schema, &config));
                black_box(out.ok());
                black_box(surface.to_markup());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
