//! RGBA pixel surface: background fill, round dab stamping, segment drawing.

use crate::rendering::Bitmap;
use crate::Rgba;

/// A fixed-size RGBA8 drawing surface.
///
/// The surface accumulates committed strokes; there is no per-stroke vector
/// store. Painting is hard-edged (no antialiasing) so renders are
/// deterministic across platforms and survive a PNG round trip bit-for-bit.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    /// `width * height * 4` bytes, row-major RGBA.
    pixels: Vec<u8>,
}

impl Surface {
    /// Create a surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        let mut s = Self {
            width,
            height,
            pixels: vec![0u8; (width as usize) * (height as usize) * 4],
        };
        s.fill(background);
        s
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Repaint every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Set one pixel; out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let p = &self.pixels[idx..idx + 4];
        Some(Rgba::new(p[0], p[1], p[2], p[3]))
    }

    /// Stamp a filled disc centered at (`cx`, `cy`), clipped to the surface.
    ///
    /// A radius below half a pixel still paints the center pixel so that a
    /// tap (single-point stroke) leaves a visible mark.
    pub fn stamp_dab(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        let r = radius.max(0.5);
        let x0 = (cx - r).floor() as i32;
        let x1 = (cx + r).ceil() as i32;
        let y0 = (cy - r).floor() as i32;
        let y1 = (cy + r).ceil() as i32;
        let r2 = r * r;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = (x as f32 + 0.5) - cx;
                let dy = (y as f32 + 0.5) - cy;
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Draw a segment from `a` to `b` as a chain of dabs whose radius is
    /// interpolated from `width_a` to `width_b` (widths are diameters).
    pub fn draw_segment(
        &mut self,
        a: (f32, f32),
        b: (f32, f32),
        width_a: f32,
        width_b: f32,
        color: Rgba,
    ) {
        let dx = b.0 - a.0;
        let dy = b.1 - a.1;
        let dist = (dx * dx + dy * dy).sqrt();
        // Half-pixel spacing keeps the chain gap-free at any width.
        let steps = (dist / 0.5).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = a.0 + dx * t;
            let y = a.1 + dy * t;
            let w = width_a + (width_b - width_a) * t;
            self.stamp_dab(x, y, w / 2.0, color);
        }
    }

    /// Composite a decoded bitmap at the top-left, clipped to the surface.
    /// Mismatched dimensions are not an error; this mirrors drawing an image
    /// onto a canvas at (0, 0).
    pub fn composite(&mut self, bitmap: &Bitmap) {
        let w = bitmap.width.min(self.width) as usize;
        let h = bitmap.height.min(self.height) as usize;
        for y in 0..h {
            let src = (y * bitmap.width as usize) * 4;
            let dst = (y * self.width as usize) * 4;
            self.pixels[dst..dst + w * 4].copy_from_slice(&bitmap.rgba[src..src + w * 4]);
        }
    }

    /// Snapshot the current pixel content.
    pub fn to_bitmap(&self) -> Bitmap {
        Bitmap {
            width: self.width,
            height: self.height,
            rgba: self.pixels.clone(),
        }
    }
}
