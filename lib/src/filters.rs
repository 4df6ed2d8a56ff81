use crate::error::{RasterError, Result};
use crate::raster::Raster;
use imageproc::integral_image::{integral_image, sum_image_pixels};
use log::debug;
use rayon::prelude::*;

/// Box blur with a window clipped to the raster
///
/// Each output channel (alpha included) is the integer mean of that channel over
/// the square `[x-radius, x+radius] × [y-radius, y+radius]` intersected with
/// the raster bounds. The divisor is the number of in-bounds samples, so
/// pixels near the border average over a smaller window instead of padding.
///
/// # Arguments
/// * `src` - Input raster
/// * `radius` - Half-width of the window; `0` returns an identical raster
///
/// # Returns
/// The blurred raster, or `InvalidParameter` for a negative radius
pub fn blur(src: &Raster, radius: i32) -> Result<Raster> {
    if radius < 0 {
        return Err(RasterError::InvalidParameter(format!(
            "blur radius must be non-negative, got {radius}"
        )));
    }
    let radius = radius as u32;
    let (width, height) = src.dimensions();
    debug!("blur {width}x{height} with radius {radius}");

    if radius == 0 || src.is_empty() {
        return Ok(src.copy());
    }

    // Summed-area table: any clipped window sum is four lookups.
    let integral = integral_image::<_, u64>(src.as_image());
    let mut output = Raster::new(width, height);
    let row_len = width as usize * 4;

    output
        .image_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            let top = y.saturating_sub(radius);
            let bottom = y.saturating_add(radius).min(height - 1);

            for x in 0..width {
                let left = x.saturating_sub(radius);
                let right = x.saturating_add(radius).min(width - 1);
                let samples = ((right - left + 1) as u64) * ((bottom - top + 1) as u64);
                let sums = sum_image_pixels(&integral, left, top, right, bottom);

                let offset = x as usize * 4;
                for channel in 0..4 {
                    row[offset + channel] = (sums[channel] / samples) as u8;
                }
            }
        });

    Ok(output)
}
