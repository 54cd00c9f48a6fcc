use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use sigpad::{CanvasSize, InputPoint, Pad, PadConfig, RasterPad};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_signature_matches_fixture() {
    let script =
        fs::read_to_string("tests/goldens/strokes/signature.json").expect("read fixture");
    let strokes: Vec<Vec<InputPoint>> = serde_json::from_str(&script).expect("parse fixture");

    let config = PadConfig {
        size: CanvasSize {
            width: 200,
            height: 80,
        },
        ..Default::default()
    };
    let mut pad = RasterPad::new(config).expect("failed to create pad");
    for stroke in &strokes {
        pad.draw_stroke(stroke).expect("stroke failed");
    }

    let bitmap = pad.bitmap();
    let mut hasher = Sha256::new();
    hasher.update(&bitmap.rgba);
    let digest = hex::encode(hasher.finalize());

    let expected_path = golden_path("signature.digest");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim());
}
