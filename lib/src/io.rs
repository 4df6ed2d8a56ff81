//! Decode/encode collaborators backed by the `image` crate

use crate::error::{RasterError, Result};
use crate::raster::Raster;
use image::ImageFormat;
use log::warn;
use std::io::Cursor;
use std::path::Path;

/// Decode any format `image` recognizes into an RGBA raster
pub fn decode_raster(bytes: &[u8]) -> Result<Raster> {
    image::load_from_memory(bytes)
        .map(|img| Raster::from(img.to_rgba8()))
        .map_err(|err| {
            warn!("decode of {} bytes failed: {err}", bytes.len());
            RasterError::Decode(err.to_string())
        })
}

/// Decode the image file at `path`
pub fn decode_raster_from_path(path: impl AsRef<Path>) -> Result<Raster> {
    let path = path.as_ref();
    image::open(path)
        .map(|img| Raster::from(img.to_rgba8()))
        .map_err(|err| {
            warn!("decode of {} failed: {err}", path.display());
            RasterError::Decode(format!("{}: {err}", path.display()))
        })
}

/// Serialize to PNG, which keeps every channel value exactly
pub fn encode_raster(raster: &Raster) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    raster
        .as_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|err| RasterError::Encode(err.to_string()))?;
    Ok(bytes)
}

/// Write a raster to `path`, choosing the format from the extension
pub fn save_raster(raster: &Raster, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    raster.as_image().save(path).map_err(|err| {
        warn!("save to {} failed: {err}", path.display());
        RasterError::Encode(format!("{}: {err}", path.display()))
    })
}
