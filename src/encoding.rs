//! Data-URL codec for the surface.
//!
//! The exported value is a self-contained `data:image/png;base64,<payload>`
//! string: storable in a plain text field, usable directly as an image
//! source, and accepted back by `PadConfig::initial_value`. PNG is lossless
//! RGBA, so `decode(encode(bitmap)) == bitmap` holds bit-for-bit.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as Base64Engine;
use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};
use crate::rendering::Bitmap;

/// Prefix of every value this codec produces.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// PNG-encode the bitmap's pixels.
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>> {
    let img = RgbaImage::from_raw(bitmap.width, bitmap.height, bitmap.rgba.clone())
        .ok_or_else(|| Error::EncodeError("pixel buffer does not match dimensions".into()))?;
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| Error::EncodeError(e.to_string()))?;
    Ok(png)
}

/// Wrap already-encoded PNG bytes as a data URL.
pub fn data_url_from_png(png: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URL_PREFIX, STANDARD.encode(png))
}

/// Encode the bitmap as a `data:image/png;base64,` string.
pub fn encode_data_url(bitmap: &Bitmap) -> Result<String> {
    Ok(data_url_from_png(&encode_png(bitmap)?))
}

/// Decode a stored data URL back into pixels.
///
/// Accepts any `data:image/<format>;base64,` value the `image` crate can
/// decode, not only our own PNG output. Every failure (wrong prefix, bad
/// base64, undecodable payload) is `Error::InvalidStoredValue`; the caller
/// decides whether to fall back to a blank surface.
pub fn decode_data_url(value: &str) -> Result<Bitmap> {
    let payload = value
        .strip_prefix("data:image/")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, b64)| b64)
        .ok_or_else(|| {
            Error::InvalidStoredValue("missing data:image/...;base64, prefix".into())
        })?;
    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| Error::InvalidStoredValue(format!("base64 payload: {}", e)))?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| Error::InvalidStoredValue(format!("image payload: {}", e)))?
        .to_rgba8();
    Ok(Bitmap {
        width: img.width(),
        height: img.height(),
        rgba: img.into_raw(),
    })
}
