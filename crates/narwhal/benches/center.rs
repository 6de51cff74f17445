use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use narwhal::coord::{Center, CoordOperator};
use narwhal::{Layer, LayerNode, Size};
use std::hint::black_box;
use std::time::Duration;

type Node = LayerNode<f64, (usize, usize)>;

#[derive(Debug, Clone)]
struct LayersSpec {
    // Per layer, `Some(width)` for a real node and `None` for a routing placeholder.
    rows: Vec<Vec<Option<f64>>>,
}

impl LayersSpec {
    fn build(&self) -> Vec<Layer<Node>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(rank, row)| {
                row.iter()
                    .enumerate()
                    .map(|(i, w)| match w {
                        Some(w) => LayerNode::real(*w),
                        None => LayerNode::dummy((rank, i)),
                    })
                    .collect()
            })
            .collect()
    }
}

fn build_layers_spec(layer_count: usize, max_per_layer: usize, dummy_every: usize) -> LayersSpec {
    let mut rows: Vec<Vec<Option<f64>>> = Vec::with_capacity(layer_count);
    for rank in 0..layer_count {
        // Vary the row length so centering offsets differ between layers.
        let len = 1 + (rank * 7 + 3) % max_per_layer;
        let row = (0..len)
            .map(|i| {
                if dummy_every > 0 && (rank + i) % dummy_every == 0 {
                    None
                } else {
                    Some(20.0 + ((rank * 31 + i * 17) % 60) as f64)
                }
            })
            .collect();
        rows.push(row);
    }
    LayersSpec { rows }
}

fn width_of(node: &Node) -> Size {
    Size::new(node.data().copied().unwrap_or(0.0), 24.0)
}

fn bench_center(c: &mut Criterion) {
    let mut group = c.benchmark_group("center");
    group.measurement_time(Duration::from_secs(5));

    let cases = [
        ("layers_10_w8", 10usize, 8usize, 5usize),
        ("layers_100_w32", 100usize, 32usize, 4usize),
        ("layers_400_w64", 400usize, 64usize, 3usize),
    ];

    for (name, layers, per_layer, dummy_every) in cases {
        let spec = build_layers_spec(layers, per_layer, dummy_every);
        group.bench_with_input(BenchmarkId::new("assign", name), &spec, |b, spec| {
            b.iter_batched(
                || spec.build(),
                |mut g| {
                    let width = Center::new().assign(black_box(&mut g), width_of);
                    black_box(width.ok());
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("coordinates", name), &spec, |b, spec| {
            let g = spec.build();
            b.iter(|| black_box(Center::new().coordinates(black_box(&g), width_of).ok()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_center);
criterion_main!(benches);
