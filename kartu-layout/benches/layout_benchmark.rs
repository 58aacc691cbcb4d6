use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kartu_layout::{compose_line, wrap};

/// Fixed-advance measure so the benchmark exercises only the wrap loop.
fn mono(s: &str) -> f32 {
    s.chars().count() as f32 * 10.0
}

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("Text Layout");
    group.throughput(Throughput::Elements(1));

    let headline = "UGM Ciptakan Sistem Inspeksi Mobil Berbasis Blockchain \
                    Teknologi blockchain digunakan untuk meningkatkan transparansi \
                    dan keamanan dalam proses inspeksi kendaraan";

    group.bench_function("wrap_headline", |b| {
        b.iter(|| {
            let lines = wrap(black_box(headline), 960.0, 79.2, mono);
            black_box(lines);
        })
    });

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("Text Layout");
    group.throughput(Throughput::Elements(1));

    let headline = "UGM Ciptakan Sistem Inspeksi Mobil Berbasis Blockchain";
    let lines = wrap(headline, 400.0, 79.2, mono);

    group.bench_function("compose_lines", |b| {
        b.iter(|| {
            for line in &lines {
                let out = compose_line(black_box(line), &[], 60.0, |_| 10.0);
                black_box(out);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_wrap, bench_compose);
criterion_main!(benches);
