//! Rotations by quarter turns and mirror flips
//!
//! These are pure index remappings: no channel value is ever changed.

use crate::error::{RasterError, Result};
use crate::raster::Raster;
use image::imageops;
use log::debug;

/// Axis to mirror a raster about
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipAxis {
    /// Horizontal line through the center: `(x, y) -> (x, H-1-y)`
    Horizontal = 1,
    /// Vertical line through the center: `(x, y) -> (W-1-x, y)`
    Vertical = 2,
    /// North-east to south-west corner: `(x, y) -> (H-1-y, W-1-x)`
    ForwardDiagonal = 3,
    /// North-west to south-east corner: `(x, y) -> (y, x)`
    BackwardDiagonal = 4,
}

impl TryFrom<i32> for FlipAxis {
    type Error = RasterError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            1 => Ok(FlipAxis::Horizontal),
            2 => Ok(FlipAxis::Vertical),
            3 => Ok(FlipAxis::ForwardDiagonal),
            4 => Ok(FlipAxis::BackwardDiagonal),
            other => Err(RasterError::InvalidParameter(format!(
                "unknown flip axis {other}, expected 1-4"
            ))),
        }
    }
}

/// Rotate clockwise by `quarter_turns` × 90°
///
/// Negative values rotate counter-clockwise; any multiple of four yields a
/// copy of the input.
///
/// * `1`: dimensions swap, `(x, y) -> (H-1-y, x)`
/// * `2`: `(x, y) -> (W-1-x, H-1-y)`
/// * `3`: dimensions swap, `(x, y) -> (y, W-1-x)`
pub fn rotate(src: &Raster, quarter_turns: i32) -> Raster {
    let turns = quarter_turns.rem_euclid(4);
    debug!(
        "rotate {}x{} by {} quarter turns",
        src.width(),
        src.height(),
        turns
    );

    match turns {
        1 => imageops::rotate90(src.as_image()).into(),
        2 => imageops::rotate180(src.as_image()).into(),
        3 => imageops::rotate270(src.as_image()).into(),
        _ => src.copy(),
    }
}

/// Mirror `src` about `axis`
///
/// The diagonal flips swap width and height.
pub fn flip(src: &Raster, axis: FlipAxis) -> Raster {
    debug!("flip {}x{} about {:?}", src.width(), src.height(), axis);

    match axis {
        FlipAxis::Horizontal => imageops::flip_vertical(src.as_image()).into(),
        FlipAxis::Vertical => imageops::flip_horizontal(src.as_image()).into(),
        FlipAxis::ForwardDiagonal => {
            let (width, height) = src.dimensions();
            Raster::from_fn(height, width, |x, y| *src.pixel(width - 1 - y, height - 1 - x))
        }
        FlipAxis::BackwardDiagonal => {
            let (width, height) = src.dimensions();
            Raster::from_fn(height, width, |x, y| *src.pixel(y, x))
        }
    }
}
