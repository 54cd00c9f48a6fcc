//! Raster surface and pen model for stroke rendering.

pub mod pen;
pub mod surface;

/// A snapshot of the surface's current pixel content.
///
/// `rgba` holds `width * height * 4` bytes in row-major RGBA order. This is
/// the unit of pixel-identical comparison: two pads show the same signature
/// iff their bitmaps are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Bitmap {
    /// A bitmap filled with a single color.
    pub fn filled(width: u32, height: u32, color: crate::Rgba) -> Self {
        let mut rgba = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for _ in 0..(width as usize) * (height as usize) {
            rgba.extend_from_slice(&color.to_bytes());
        }
        Self { width, height, rgba }
    }
}
