//! Per-pixel color maps
//!
//! Each function allocates a raster of the input's dimensions and fills every
//! pixel from the corresponding source pixel alone, so the work is split
//! across pixels with rayon.

use crate::color::{average, offset_rgb};
use crate::raster::{Pixel, Raster};
use image::Rgba;
use log::debug;
use rayon::prelude::*;

/// Apply `f` to every pixel of `src`, producing a new raster
pub fn map_pixels<F>(src: &Raster, f: F) -> Raster
where
    F: Fn(&Pixel) -> Pixel + Sync,
{
    let mut output = src.copy();
    output
        .image_mut()
        .par_chunks_mut(4)
        .for_each(|channels| {
            let mapped = f(&Rgba([channels[0], channels[1], channels[2], channels[3]]));
            channels.copy_from_slice(&mapped.0);
        });
    output
}

/// Set red, green and blue to their integer average; alpha is kept
pub fn grayscale(src: &Raster) -> Raster {
    debug!("grayscale {}x{}", src.width(), src.height());
    map_pixels(src, |p| {
        let gray = average(p);
        Rgba([gray, gray, gray, p[3]])
    })
}

/// Photonegative: every color channel becomes `255 - channel`
pub fn negate(src: &Raster) -> Raster {
    debug!("negate {}x{}", src.width(), src.height());
    map_pixels(src, |p| Rgba([255 - p[0], 255 - p[1], 255 - p[2], p[3]]))
}

/// Add `amount` to red, green and blue, clamped to [0, 255]
pub fn lighten(src: &Raster, amount: i32) -> Raster {
    debug!("lighten by {amount}");
    map_pixels(src, |p| offset_rgb(p, amount, amount, amount))
}

/// Subtract `amount` from red, green and blue, clamped to [0, 255]
pub fn darken(src: &Raster, amount: i32) -> Raster {
    debug!("darken by {amount}");
    let delta = amount.saturating_neg();
    map_pixels(src, |p| offset_rgb(p, delta, delta, delta))
}

pub fn add_red(src: &Raster, amount: i32) -> Raster {
    debug!("add_red {amount}");
    map_pixels(src, |p| offset_rgb(p, amount, 0, 0))
}

pub fn add_green(src: &Raster, amount: i32) -> Raster {
    debug!("add_green {amount}");
    map_pixels(src, |p| offset_rgb(p, 0, amount, 0))
}

pub fn add_blue(src: &Raster, amount: i32) -> Raster {
    debug!("add_blue {amount}");
    map_pixels(src, |p| offset_rgb(p, 0, 0, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> Raster {
        Raster::from_fn(16, 9, |x, y| {
            Rgba([(x * 16) as u8, (y * 28) as u8, ((x + y) * 10) as u8, (x * y) as u8])
        })
    }

    #[test]
    fn test_grayscale_channels_equal_and_alpha_kept() {
        let src = gradient();
        let gray = grayscale(&src);
        for (x, y, p) in gray.as_image().enumerate_pixels() {
            assert_eq!(p[0], p[1]);
            assert_eq!(p[1], p[2]);
            let s = src.get(x, y).unwrap();
            assert_eq!(p[0], average(&s));
            assert_eq!(p[3], s[3]);
        }
    }

    #[test]
    fn test_grayscale_does_not_touch_source() {
        let src = gradient();
        let before = src.clone();
        let _ = grayscale(&src);
        assert_eq!(src, before);
    }

    #[test]
    fn test_negate_twice_is_identity() {
        let src = gradient();
        assert_eq!(negate(&negate(&src)), src);
    }

    #[test]
    fn test_negate_values() {
        let src = Raster::from_pixel(1, 1, Rgba([0, 100, 255, 77]));
        assert_eq!(negate(&src).get(0, 0).unwrap(), Rgba([255, 155, 0, 77]));
    }

    #[test]
    fn test_lighten_and_darken_clamp() {
        let src = Raster::from_pixel(2, 2, Rgba([10, 128, 250, 200]));
        assert_eq!(
            lighten(&src, 20).get(1, 1).unwrap(),
            Rgba([30, 148, 255, 200])
        );
        assert_eq!(
            darken(&src, 20).get(1, 1).unwrap(),
            Rgba([0, 108, 230, 200])
        );
        assert_eq!(
            darken(&src, i32::MIN).get(0, 0).unwrap(),
            Rgba([255, 255, 255, 200])
        );
    }

    #[test]
    fn test_add_single_channel() {
        let src = Raster::from_pixel(3, 1, Rgba([100, 100, 100, 5]));
        assert_eq!(add_red(&src, 200).get(0, 0).unwrap(), Rgba([255, 100, 100, 5]));
        assert_eq!(add_green(&src, -150).get(1, 0).unwrap(), Rgba([100, 0, 100, 5]));
        assert_eq!(add_blue(&src, 1).get(2, 0).unwrap(), Rgba([100, 100, 101, 5]));
    }

    #[test]
    fn test_empty_raster() {
        let src = Raster::new(0, 0);
        assert_eq!(negate(&src), src);
    }
}
