//! Round-trip bit-stability: exported values restore pixel-identically.

use sha2::{Digest, Sha256};
use sigpad::{encoding, new_pad, Bitmap, CanvasSize, InputPoint, Pad, PadConfig};

fn digest(bitmap: &Bitmap) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bitmap.width.to_le_bytes());
    hasher.update(bitmap.height.to_le_bytes());
    hasher.update(&bitmap.rgba);
    hex::encode(hasher.finalize())
}

fn config(width: u32, height: u32) -> PadConfig {
    PadConfig {
        size: CanvasSize { width, height },
        ..Default::default()
    }
}

/// A few stroke sequences of different shapes and sampling densities.
fn stroke_sequences() -> Vec<Vec<Vec<InputPoint>>> {
    let line = vec![vec![InputPoint::at(10.0, 10.0), InputPoint::at(50.0, 10.0)]];

    let tap = vec![vec![InputPoint::at(80.0, 30.0)]];

    let zigzag = vec![vec![
        InputPoint::timed(10.0, 40.0, 0.0),
        InputPoint::timed(40.0, 10.0, 30.0),
        InputPoint::timed(70.0, 40.0, 45.0),
        InputPoint::timed(100.0, 10.0, 150.0),
    ]];

    let two_signatures = vec![
        vec![
            InputPoint::timed(20.0, 20.0, 0.0),
            InputPoint::timed(60.0, 50.0, 20.0),
            InputPoint::timed(90.0, 20.0, 55.0),
        ],
        vec![
            InputPoint::timed(30.0, 55.0, 200.0),
            InputPoint::timed(120.0, 55.0, 260.0),
        ],
    ];

    vec![line, tap, zigzag, two_signatures]
}

#[test]
fn any_stroke_sequence_round_trips_pixel_identically() {
    for (i, strokes) in stroke_sequences().into_iter().enumerate() {
        let mut pad = new_pad(config(160, 60)).expect("failed to create pad");
        let mut exported = String::new();
        for stroke in &strokes {
            exported = pad.draw_stroke(stroke).expect("stroke failed").encoded;
        }

        let restored = new_pad(PadConfig {
            initial_value: Some(exported),
            ..config(160, 60)
        })
        .expect("restore failed");

        assert_eq!(
            digest(&restored.bitmap()),
            digest(&pad.bitmap()),
            "sequence {} did not round-trip",
            i
        );
    }
}

#[test]
fn codec_round_trip_is_the_identity_on_bitmaps() {
    let mut pad = new_pad(config(200, 80)).expect("failed to create pad");
    pad.draw_stroke(&[
        InputPoint::timed(15.0, 60.0, 0.0),
        InputPoint::timed(70.0, 20.0, 40.0),
        InputPoint::timed(160.0, 65.0, 90.0),
    ])
    .expect("stroke failed");

    let bitmap = pad.bitmap();
    let encoded = encoding::encode_data_url(&bitmap).expect("encode failed");
    let decoded = encoding::decode_data_url(&encoded).expect("decode failed");
    assert_eq!(decoded, bitmap);

    // And once more through the string form: re-encoding the decoded pixels
    // must describe the same image
    let re_encoded = encoding::encode_data_url(&decoded).expect("re-encode failed");
    assert_eq!(
        encoding::decode_data_url(&re_encoded).expect("re-decode failed"),
        bitmap
    );
}

#[test]
fn restore_into_wider_pad_keeps_content_at_top_left() {
    let mut pad = new_pad(config(160, 60)).expect("failed to create pad");
    let exported = pad
        .draw_stroke(&[InputPoint::at(10.0, 10.0), InputPoint::at(50.0, 10.0)])
        .unwrap()
        .encoded;

    // Dimension mismatch is not an error: content composites clipped at the
    // top-left of the new surface
    let wider = new_pad(PadConfig {
        initial_value: Some(exported),
        ..config(320, 120)
    })
    .expect("restore into wider pad failed");
    assert!(!wider.is_empty());

    let bitmap = wider.bitmap();
    let idx = ((10 * bitmap.width + 30) * 4) as usize;
    assert_ne!(&bitmap.rgba[idx..idx + 4], &[255u8, 255, 255, 255]);
}
