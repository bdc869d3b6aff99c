use criterion::{Criterion, criterion_group, criterion_main};
use plot_layout::Figure;
use plot_layout::core::encode_node;
use plot_layout::schema::{
    Annotation, ArrowHead, Axis, AxisRef, ClickMode, Layout, Legend, Margin, Shape, ShapeType,
    SpikeMode, TraceOrder,
};
use std::hint::black_box;

fn dense_layout(annotation_count: usize) -> Layout {
    let annotations = (0..annotation_count)
        .map(|i| {
            Annotation::new()
                .text(format!("label-{i}"))
                .x(i as f64)
                .y((i % 17) as f64)
                .x_ref(AxisRef::X(1))
                .y_ref(AxisRef::Paper)
                .show_arrow(i % 2 == 0)
                .arrow_head(ArrowHead::Standard)
        })
        .collect::<Vec<_>>();
    let shapes = (0..annotation_count / 4)
        .map(|i| {
            Shape::new()
                .shape_type(ShapeType::Rect)
                .x0(i as f64)
                .x1(i as f64 + 0.5)
                .y0(0)
                .y1(1)
        })
        .collect::<Vec<_>>();

    Layout::new()
        .title("Benchmark")
        .margin(Margin::new().left(40).right(20).top(30).bottom(30))
        .legend(Legend::new().trace_order(TraceOrder::GROUPED | TraceOrder::REVERSED))
        .click_mode(ClickMode::EVENT | ClickMode::SELECT)
        .x_axis(Axis::new().spike_mode(SpikeMode::all()).num_ticks(10))
        .y_axis(Axis::new().show_grid(true))
        .annotations(annotations)
        .shapes(shapes)
}

fn bench_encode_layout_1k_annotations(c: &mut Criterion) {
    let layout = dense_layout(1_000);

    c.bench_function("encode_layout_1k_annotations", |b| {
        b.iter(|| {
            let _ = encode_node(black_box(&layout));
        })
    });
}

fn bench_figure_json_1k_annotations(c: &mut Criterion) {
    let figure = Figure::new().with_layout(dense_layout(1_000));

    c.bench_function("figure_json_1k_annotations", |b| {
        b.iter(|| {
            let _ = black_box(&figure)
                .to_json_string()
                .expect("figure should serialize");
        })
    });
}

criterion_group!(
    benches,
    bench_encode_layout_1k_annotations,
    bench_figure_json_1k_annotations
);
criterion_main!(benches);
