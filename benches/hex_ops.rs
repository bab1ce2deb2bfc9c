use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexgrid::{FractionalHex, Hex, Layout, Orientation, Point2, Vector2};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex-ops");

    group.bench_function("distance over range", |b| {
        let hexes: Vec<Hex> = Hex::range(20).collect();
        b.iter(|| {
            hexes
                .iter()
                .map(|hex| hex.distance_to(black_box(Hex::ORIGIN)))
                .sum::<usize>()
        })
    });

    group.bench_function("fractional round", |b| {
        b.iter(|| FractionalHex::new(black_box(2.6), -1.1, -1.4).round())
    });

    let layout = Layout::new(
        Orientation::pointy(),
        Vector2 { x: 10.0, y: 10.0 },
        Point2 { x: 0.0, y: 0.0 },
    );
    group.bench_function("screen round trip", |b| {
        let hex = Hex::new_axial(17, -6);
        b.iter(|| layout.screen_to_hex(layout.hex_to_screen(black_box(hex))))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
