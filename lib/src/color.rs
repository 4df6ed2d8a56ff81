//! Color math shared by the transforms
//!
//! Distances are Euclidean over red, green and blue; alpha never takes part.
//! Thresholded comparisons truncate the distance toward zero first, so a
//! threshold of `10` treats a distance of `10.9` as `10`.

use crate::raster::Pixel;
use image::Rgba;
use imageproc::definitions::Clamp;

pub const OPAQUE_BLACK: Pixel = Rgba([0, 0, 0, 255]);
pub const OPAQUE_WHITE: Pixel = Rgba([255, 255, 255, 255]);

/// Clamp an integer channel value into [0, 255]
pub fn clamp_channel(value: i32) -> u8 {
    <u8 as Clamp<i32>>::clamp(value)
}

/// Euclidean distance between two pixels over (red, green, blue)
///
/// Symmetric, and zero exactly when the three color channels agree.
pub fn color_distance(a: &Pixel, b: &Pixel) -> f64 {
    let dr = a[0] as f64 - b[0] as f64;
    let dg = a[1] as f64 - b[1] as f64;
    let db = a[2] as f64 - b[2] as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Integer mean of red, green and blue
pub fn average(pixel: &Pixel) -> u8 {
    ((pixel[0] as u32 + pixel[1] as u32 + pixel[2] as u32) / 3) as u8
}

/// Strict `distance < threshold` on the truncated distance
pub fn within_threshold(a: &Pixel, b: &Pixel, threshold: u32) -> bool {
    (color_distance(a, b) as u32) < threshold
}

/// Strict `distance > threshold` on the truncated distance
pub fn exceeds_threshold(a: &Pixel, b: &Pixel, threshold: u32) -> bool {
    (color_distance(a, b) as u32) > threshold
}

/// Offset red, green and blue independently, clamping; alpha is kept
pub(crate) fn offset_rgb(pixel: &Pixel, dr: i32, dg: i32, db: i32) -> Pixel {
    Rgba([
        clamp_channel((pixel[0] as i32).saturating_add(dr)),
        clamp_channel((pixel[1] as i32).saturating_add(dg)),
        clamp_channel((pixel[2] as i32).saturating_add(db)),
        pixel[3],
    ])
}
