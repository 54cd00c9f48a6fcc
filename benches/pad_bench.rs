use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sigpad::{CanvasSize, InputPoint, Pad, PadConfig, RasterPad};

fn signature_stroke() -> Vec<InputPoint> {
    // ~60 samples of a wavy line, roughly what a real pointer delivers
    (0..60)
        .map(|i| {
            let t = i as f32;
            InputPoint::timed(
                10.0 + t * 3.0,
                40.0 + (t * 0.4).sin() * 25.0,
                (i as f64) * 8.0,
            )
        })
        .collect()
}

fn bench_draw_stroke(c: &mut Criterion) {
    let config = PadConfig {
        size: CanvasSize {
            width: 200,
            height: 80,
        },
        ..Default::default()
    };
    let mut pad = RasterPad::new(config).expect("failed to create pad");
    let stroke = signature_stroke();

    c.bench_function("draw_stroke_and_snapshot", |b| {
        b.iter(|| {
            let update = pad.draw_stroke(black_box(&stroke)).unwrap();
            black_box(update.encoded.len());
        })
    });
}

fn bench_restore(c: &mut Criterion) {
    let config = PadConfig {
        size: CanvasSize {
            width: 200,
            height: 80,
        },
        ..Default::default()
    };
    let mut pad = RasterPad::new(config.clone()).expect("failed to create pad");
    let exported = pad.draw_stroke(&signature_stroke()).unwrap().encoded;

    c.bench_function("restore_from_data_url", |b| {
        b.iter(|| {
            let restored = RasterPad::new(PadConfig {
                initial_value: Some(exported.clone()),
                ..config.clone()
            })
            .unwrap();
            black_box(restored.is_empty());
        })
    });
}

criterion_group!(benches, bench_draw_stroke, bench_restore);
criterion_main!(benches);
