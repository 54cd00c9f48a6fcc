//! sigpad: headless signature capture engine
//!
//! A fixed-size raster surface that accumulates freehand strokes fed in as
//! pointer samples, reports emptiness, and serializes its full content as a
//! self-contained `data:image/png;base64,...` string that round-trips
//! bit-stable through [`PadConfig::initial_value`].
//!
//! # Features
//!
//! - **Snapshot exports**: every stroke end re-encodes the whole surface,
//!   never a delta, so each exported value is self-sufficient
//! - **Variable-width pen**: stroke width follows drawing speed between
//!   configured bounds, approximating pen pressure
//! - **Host callbacks**: the surrounding form controller is notified with
//!   `(encoded value, emptiness)` on every stroke end and clear
//!
//! # Example
//!
//! ```
//! use sigpad::{InputPoint, Pad, PadConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pad = sigpad::new_pad(PadConfig::default())?;
//! assert!(pad.is_empty());
//!
//! let update = pad.draw_stroke(&[
//!     InputPoint::at(10.0, 10.0),
//!     InputPoint::at(50.0, 10.0),
//! ])?;
//! assert!(!update.is_empty);
//!
//! // The exported string restores pixel-identically on a fresh pad.
//! let config = PadConfig {
//!     initial_value: Some(update.encoded.clone()),
//!     ..Default::default()
//! };
//! let restored = sigpad::new_pad(config)?;
//! assert_eq!(restored.bitmap(), pad.bitmap());
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod encoding;
pub mod host;
pub mod raster;
pub mod rendering;

pub use rendering::Bitmap;

// Re-export the default backend at the crate root for ergonomic use
pub use raster::RasterPad;

/// Callback invoked with every exported value.
pub type ChangeHandler = Arc<dyn Fn(&PadUpdate) + Send + Sync>;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 200,
            height: 80,
        }
    }
}

/// Configuration for a signature pad
///
/// The defaults match a typical embedded signature box: a 200x80 white
/// surface with a black pen between 1 and 2 pixels wide.
///
/// # Examples
///
/// ```
/// let cfg = sigpad::PadConfig::default();
/// assert_eq!(cfg.size.width, 200);
/// assert!(cfg.initial_value.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PadConfig {
    /// Surface dimensions
    pub size: CanvasSize,
    /// Pen color
    pub stroke_color: Rgba,
    /// Surface background color
    pub background_color: Rgba,
    /// Narrowest pen width (fast strokes), in pixels
    pub min_stroke_width: f32,
    /// Widest pen width (slow strokes), in pixels
    pub max_stroke_width: f32,
    /// EMA weight of the newest velocity sample, in `(0, 1]`
    pub velocity_smoothing: f32,
    /// Previously exported value to restore onto the surface.
    /// A value that cannot be decoded fails construction; the host decides
    /// whether to retry with a blank pad or reject the stored data.
    pub initial_value: Option<String>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            size: CanvasSize::default(),
            stroke_color: Rgba::BLACK,
            background_color: Rgba::WHITE,
            min_stroke_width: 1.0,
            max_stroke_width: 2.0,
            velocity_smoothing: 0.7,
            initial_value: None,
        }
    }
}

/// One pointer sample of an in-progress stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputPoint {
    pub x: f32,
    pub y: f32,
    /// Sample timestamp in milliseconds. Samples without timestamps are
    /// treated as 1 ms apart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<f64>,
    /// Stylus pressure in `[0, 1]`, when the input device reports it.
    /// Currently informational; width follows speed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f32>,
}

impl InputPoint {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            time_ms: None,
            pressure: None,
        }
    }

    pub fn timed(x: f32, y: f32, time_ms: f64) -> Self {
        Self {
            x,
            y,
            time_ms: Some(time_ms),
            pressure: None,
        }
    }
}

/// Payload delivered to the host on every stroke end and clear.
///
/// `encoded` is the full-surface data URL after the mutation, or `""` after
/// a clear. Later payloads always supersede earlier ones for the same pad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadUpdate {
    /// `data:image/png;base64,...` snapshot, or `""` when the pad is empty
    pub encoded: String,
    /// Whether any stroke remains committed on the surface
    pub is_empty: bool,
}

/// Core trait for signature pad implementations
pub trait Pad {
    /// Create a pad with the given configuration. Restores
    /// `config.initial_value` onto the surface when present and non-empty.
    fn new(config: PadConfig) -> Result<Self>
    where
        Self: Sized;

    /// Pointer-down: start a stroke at `point`. If a stroke is already in
    /// progress it is committed first (losing pointer capture behaves like
    /// lifting the pen).
    fn begin_stroke(&mut self, point: InputPoint) -> Result<()>;

    /// Pointer-move: extend the in-progress stroke.
    fn extend_stroke(&mut self, point: InputPoint) -> Result<()>;

    /// Pointer-up: commit the in-progress stroke, re-encode the full
    /// surface, notify the host, and return the same payload.
    fn end_stroke(&mut self) -> Result<PadUpdate>;

    /// Draw one complete stroke from a slice of samples.
    fn draw_stroke(&mut self, points: &[InputPoint]) -> Result<PadUpdate> {
        let (first, rest) = points.split_first().ok_or_else(|| {
            Error::StrokeSequence("a stroke needs at least one point".into())
        })?;
        self.begin_stroke(*first)?;
        for p in rest {
            self.extend_stroke(*p)?;
        }
        self.end_stroke()
    }

    /// Erase all raster content, reset emptiness, and notify the host with
    /// an empty value so its stored field clears in lockstep. Idempotent;
    /// always notifies, even when already empty.
    fn clear(&mut self) -> PadUpdate;

    /// Whether no stroke has been committed since construction (or a
    /// non-empty `initial_value`) or since the last clear. Pure query.
    fn is_empty(&self) -> bool;

    /// The current exported value: `""` when empty, otherwise identical to
    /// the payload of the most recent notification.
    fn to_data_url(&self) -> String;

    /// Snapshot the surface pixels. No side effects.
    fn bitmap(&self) -> Bitmap;

    /// Write the current PNG to `path`. Returns `Ok(false)` without
    /// touching the filesystem when the pad is empty.
    fn export_png(&self, path: &Path) -> Result<bool>;

    /// Register the host callback invoked on every stroke end and clear.
    fn on_change<F>(&mut self, cb: F)
    where
        F: Fn(&PadUpdate) + Send + Sync + 'static;

    /// Remove a previously registered callback if any
    fn clear_on_change(&mut self);
}

/// Create a pad with the default raster backend
pub fn new_pad(config: PadConfig) -> Result<impl Pad> {
    RasterPad::new(config)
}
