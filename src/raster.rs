//! RasterPad: the default pure-Rust pad backend.
//!
//! Owns the pixel surface and the `{Empty, HasContent}` state, paints
//! strokes incrementally as samples arrive, and re-encodes the full surface
//! at every stroke end so each exported value is a complete snapshot.

use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};

use crate::encoding;
use crate::rendering::pen::Pen;
use crate::rendering::surface::Surface;
use crate::rendering::Bitmap;
use crate::{ChangeHandler, Error, InputPoint, Pad, PadConfig, PadUpdate, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PadState {
    Empty,
    HasContent,
}

/// The in-progress stroke between pointer-down and pointer-up.
struct ActiveStroke {
    last: (f32, f32),
    last_width: f32,
    last_time: f64,
    samples: usize,
}

/// Default signature pad backend drawing into an in-memory RGBA surface.
pub struct RasterPad {
    config: PadConfig,
    surface: Surface,
    pen: Pen,
    state: PadState,
    active: Option<ActiveStroke>,
    /// PNG bytes backing `encoded`; empty iff the pad is empty.
    last_png: Vec<u8>,
    /// Cached full-surface data URL, `""` iff the pad is empty. Kept in
    /// lockstep with the surface so queries agree with notifications.
    encoded: String,
    on_change: Option<ChangeHandler>,
}

impl RasterPad {
    fn validate(config: &PadConfig) -> Result<()> {
        if config.size.width == 0 || config.size.height == 0 {
            return Err(Error::ConfigError(format!(
                "surface dimensions must be non-zero, got {}x{}",
                config.size.width, config.size.height
            )));
        }
        if !(config.min_stroke_width > 0.0
            && config.min_stroke_width <= config.max_stroke_width)
        {
            return Err(Error::ConfigError(format!(
                "stroke width bounds must satisfy 0 < min <= max, got [{}, {}]",
                config.min_stroke_width, config.max_stroke_width
            )));
        }
        if !(config.velocity_smoothing > 0.0 && config.velocity_smoothing <= 1.0) {
            return Err(Error::ConfigError(format!(
                "velocity smoothing must be in (0, 1], got {}",
                config.velocity_smoothing
            )));
        }
        Ok(())
    }

    /// Re-encode the surface and refresh the cached exported value.
    fn refresh_snapshot(&mut self) -> Result<()> {
        let png = encoding::encode_png(&self.surface.to_bitmap())?;
        self.encoded = encoding::data_url_from_png(&png);
        self.last_png = png;
        Ok(())
    }

    fn notify(&self, update: &PadUpdate) {
        if let Some(cb) = &self.on_change {
            cb(update);
        }
    }

    /// Timestamp to use for a sample: the reported one, or 1 ms after the
    /// previous sample when the input device reports none.
    fn sample_time(point: &InputPoint, previous: Option<f64>) -> f64 {
        point
            .time_ms
            .unwrap_or_else(|| previous.map_or(0.0, |t| t + 1.0))
    }
}

impl Pad for RasterPad {
    fn new(config: PadConfig) -> Result<Self> {
        Self::validate(&config)?;

        let mut surface = Surface::new(
            config.size.width,
            config.size.height,
            config.background_color,
        );

        let mut state = PadState::Empty;
        if let Some(value) = config.initial_value.as_deref() {
            if !value.is_empty() {
                // Malformed stored values fail construction; never a silent
                // blank surface. Dimension mismatches composite clipped at
                // the top-left, like drawing an image onto a canvas.
                let restored = encoding::decode_data_url(value)?;
                surface.composite(&restored);
                state = PadState::HasContent;
            }
        }

        let pen = Pen::new(
            config.min_stroke_width,
            config.max_stroke_width,
            config.velocity_smoothing,
        );

        let mut pad = Self {
            config,
            surface,
            pen,
            state,
            active: None,
            last_png: Vec::new(),
            encoded: String::new(),
            on_change: None,
        };
        if pad.state == PadState::HasContent {
            pad.refresh_snapshot()?;
        }
        Ok(pad)
    }

    fn begin_stroke(&mut self, point: InputPoint) -> Result<()> {
        if self.active.is_some() {
            // Losing pointer capture behaves like lifting the pen
            self.end_stroke()?;
        }
        self.pen.reset();
        let time = Self::sample_time(&point, None);
        let width = self.pen.width_for(point.x, point.y, time);
        // Paint the down sample immediately so a tap leaves a dot
        self.surface
            .stamp_dab(point.x, point.y, width / 2.0, self.config.stroke_color);
        self.active = Some(ActiveStroke {
            last: (point.x, point.y),
            last_width: width,
            last_time: time,
            samples: 1,
        });
        Ok(())
    }

    fn extend_stroke(&mut self, point: InputPoint) -> Result<()> {
        let active = self.active.as_mut().ok_or_else(|| {
            Error::StrokeSequence("extend_stroke without begin_stroke".into())
        })?;
        let time = Self::sample_time(&point, Some(active.last_time));
        let width = self.pen.width_for(point.x, point.y, time);
        let from = active.last;
        let from_width = active.last_width;
        active.last = (point.x, point.y);
        active.last_width = width;
        active.last_time = time;
        active.samples += 1;
        self.surface.draw_segment(
            from,
            (point.x, point.y),
            from_width,
            width,
            self.config.stroke_color,
        );
        Ok(())
    }

    fn end_stroke(&mut self) -> Result<PadUpdate> {
        let active = self.active.take().ok_or_else(|| {
            Error::StrokeSequence("end_stroke without begin_stroke".into())
        })?;
        self.state = PadState::HasContent;
        self.refresh_snapshot()?;
        debug!(
            "stroke committed: {} samples, {} byte snapshot",
            active.samples,
            self.last_png.len()
        );
        let update = PadUpdate {
            encoded: self.encoded.clone(),
            is_empty: false,
        };
        self.notify(&update);
        Ok(update)
    }

    fn clear(&mut self) -> PadUpdate {
        self.active = None;
        self.surface.fill(self.config.background_color);
        self.state = PadState::Empty;
        self.last_png.clear();
        self.encoded.clear();
        debug!("surface cleared");
        let update = PadUpdate {
            encoded: String::new(),
            is_empty: true,
        };
        self.notify(&update);
        update
    }

    fn is_empty(&self) -> bool {
        self.state == PadState::Empty
    }

    fn to_data_url(&self) -> String {
        self.encoded.clone()
    }

    fn bitmap(&self) -> Bitmap {
        self.surface.to_bitmap()
    }

    fn export_png(&self, path: &Path) -> Result<bool> {
        if self.is_empty() {
            warn!("export_png skipped: pad is empty");
            return Ok(false);
        }
        std::fs::write(path, &self.last_png)?;
        Ok(true)
    }

    fn on_change<F>(&mut self, cb: F)
    where
        F: Fn(&PadUpdate) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(cb));
    }

    fn clear_on_change(&mut self) {
        self.on_change = None;
    }
}
