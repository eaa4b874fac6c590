use criterion::{black_box, criterion_group, criterion_main, Criterion};
use perfplot_core::{
    render_grid, render_grouped_bar, ChartKind, ChartSpec, Dataset, Figure, GridSpec, RenderOptions,
    Result, Series, ValueFormat, ValueLabels,
};

fn build_bars(n: usize) -> Dataset {
    let mut data = Dataset::new((0..n).map(|i| format!("/api/{i}")));
    for j in 0..4 {
        let values: Vec<f64> = (0..n).map(|i| 20.0 + (i * 7 + j * 13) as f64 % 90.0).collect();
        data.add_series(Series::new(format!("p{}", 50 + j * 15), values));
    }
    data
}

fn bar_spec() -> ChartSpec {
    ChartSpec::grouped_bar("bench.png")
        .title("Bench")
        .axes("Endpoint", "Latency (ms)")
        .value_labels(ValueLabels::new(ValueFormat::new(0, "ms")))
}

fn build_grid() -> Figure {
    let line = Dataset::numeric(&[50.0, 100.0, 200.0, 500.0, 1000.0])
        .with_series(Series::new("tps", [520.0, 980.0, 1250.0, 1450.0, 1520.0]));
    let grid = GridSpec::new(2, 2, "bench.png")
        .title("Bench grid")
        .size(14.0, 10.0)
        .panel(line.clone(), ChartSpec::panel(ChartKind::Line))
        .panel(build_bars(3), ChartSpec::panel(ChartKind::GroupedBar))
        .panel(line, ChartSpec::panel(ChartKind::Line))
        .panel(build_bars(5), ChartSpec::panel(ChartKind::GroupedBar));
    render_grid(&grid).expect("grid layout")
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[5usize, 50] {
        let data = build_bars(n);
        let spec = bar_spec();
        group.bench_function(format!("grouped_bar_{n}"), |b| {
            b.iter(|| black_box(render_grouped_bar(&data, &spec)))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    group.sample_size(10);
    let opts = RenderOptions { dpi: 100.0, ..RenderOptions::default() };

    let bars = render_grouped_bar(&build_bars(5), &bar_spec()).expect("bar layout");
    group.bench_function("grouped_bar_100dpi", |b| {
        b.iter(|| -> Result<()> {
            black_box(bars.render_to_png_bytes(&opts)?);
            Ok(())
        })
    });

    let grid = build_grid();
    group.bench_function("grid_100dpi", |b| {
        b.iter(|| -> Result<()> {
            black_box(grid.render_to_png_bytes(&opts)?);
            Ok(())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);
