use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sigpad::{encoding, CanvasSize, InputPoint, Pad, PadConfig, RasterPad};

#[derive(Parser)]
#[command(
    name = "sigpad",
    about = "Headless signature pad: render stroke scripts, restore and export encoded values"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a JSON stroke script onto a fresh pad
    Render {
        /// JSON file holding an array of strokes, each an array of
        /// {"x": .., "y": .., "time_ms": ..} samples
        #[arg(long)]
        strokes: PathBuf,
        /// Surface width in pixels
        #[arg(long, default_value_t = 200)]
        width: u32,
        /// Surface height in pixels
        #[arg(long, default_value_t = 80)]
        height: u32,
        /// Write the rendered PNG here
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the encoded data URL to stdout
        #[arg(long)]
        data_url: bool,
    },
    /// Restore an encoded value onto a pad and export it as a PNG
    Decode {
        /// Encoded value, or @path to a file containing one
        #[arg(long)]
        value: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print dimensions and payload size of an encoded value
    Info {
        /// Encoded value, or @path to a file containing one
        #[arg(long)]
        value: String,
    },
}

/// Accept a value inline or as `@path`.
fn read_value(arg: &str) -> Result<String> {
    if let Some(path) = arg.strip_prefix('@') {
        Ok(fs::read_to_string(path)
            .with_context(|| format!("reading encoded value from {}", path))?
            .trim()
            .to_string())
    } else {
        Ok(arg.to_string())
    }
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Render {
            strokes,
            width,
            height,
            out,
            data_url,
        } => {
            let script = fs::read_to_string(&strokes)
                .with_context(|| format!("reading stroke script {}", strokes.display()))?;
            let strokes: Vec<Vec<InputPoint>> =
                serde_json::from_str(&script).context("parsing stroke script")?;

            let config = PadConfig {
                size: CanvasSize { width, height },
                ..Default::default()
            };
            let mut pad = RasterPad::new(config)?;
            for stroke in &strokes {
                pad.draw_stroke(stroke)?;
            }

            if let Some(out) = out {
                if pad.export_png(&out)? {
                    eprintln!("wrote {}", out.display());
                } else {
                    eprintln!("nothing to export: the stroke script drew nothing");
                }
            }
            if data_url {
                println!("{}", pad.to_data_url());
            }
        }
        Command::Decode { value, out } => {
            let value = read_value(&value)?;
            let restored = encoding::decode_data_url(&value)?;
            let config = PadConfig {
                size: CanvasSize {
                    width: restored.width,
                    height: restored.height,
                },
                initial_value: Some(value),
                ..Default::default()
            };
            let pad = RasterPad::new(config)?;
            pad.export_png(&out)?;
            eprintln!("wrote {}", out.display());
        }
        Command::Info { value } => {
            let value = read_value(&value)?;
            let bitmap = encoding::decode_data_url(&value)?;
            println!(
                "{}x{} px, {} encoded chars",
                bitmap.width,
                bitmap.height,
                value.len()
            );
        }
    }
    Ok(())
}
