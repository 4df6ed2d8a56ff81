use crate::color::{OPAQUE_BLACK, OPAQUE_WHITE, exceeds_threshold};
use crate::error::{RasterError, Result};
use crate::raster::{Pixel, Raster};
use log::debug;

/// Classify one pixel against its west and north neighbors
///
/// Only in-bounds neighbors take part; the origin has none and is never an edge.
/// All reads come from `src`, never from pixels already written to the output.
fn is_edge(src: &Raster, x: u32, y: u32, threshold: u32) -> bool {
    let here = src.pixel(x, y);
    let west = x > 0 && exceeds_threshold(here, src.pixel(x - 1, y), threshold);
    let north = y > 0 && exceeds_threshold(here, src.pixel(x, y - 1), threshold);
    west || north
}

/// Black-on-white edge map
///
/// A pixel becomes opaque black when its color distance to the west or north
/// neighbor exceeds `threshold`, and opaque white otherwise. The pixel at
/// `(0, 0)` is always white.
///
/// The threshold is unsigned and compared against the distance truncated to
/// an integer, so `0` is the most sensitive setting: any color difference of
/// at least 1 marks an edge.
///
/// # Returns
/// The edge map, or `InvalidParameter` for a raster with no pixels
pub fn show_edges(src: &Raster, threshold: u32) -> Result<Raster> {
    if src.is_empty() {
        return Err(RasterError::InvalidParameter(
            "edge detection needs a non-empty raster".to_string(),
        ));
    }
    debug!(
        "show_edges {}x{} with threshold {threshold}",
        src.width(),
        src.height()
    );

    Ok(Raster::from_fn(src.width(), src.height(), |x, y| -> Pixel {
        if is_edge(src, x, y, threshold) {
            OPAQUE_BLACK
        } else {
            OPAQUE_WHITE
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_two_by_two_scenario() {
        let mut src = Raster::from_pixel(2, 2, OPAQUE_WHITE);
        src.set(0, 0, OPAQUE_BLACK).unwrap();

        let edges = show_edges(&src, 10).unwrap();
        assert_eq!(edges.get(0, 0).unwrap(), OPAQUE_WHITE);
        assert_eq!(edges.get(1, 0).unwrap(), OPAQUE_BLACK);
        assert_eq!(edges.get(0, 1).unwrap(), OPAQUE_BLACK);
        assert_eq!(edges.get(1, 1).unwrap(), OPAQUE_WHITE);
    }

    #[test]
    fn test_uniform_raster_is_all_white() {
        let src = Raster::from_pixel(6, 4, Rgba([90, 20, 200, 17]));
        let edges = show_edges(&src, 0).unwrap();
        assert_eq!(edges, Raster::from_pixel(6, 4, OPAQUE_WHITE));
    }

    #[test]
    fn test_zero_threshold_marks_every_change() {
        // Vertical stripes: every column differs from its west neighbor.
        let src = Raster::from_fn(5, 3, |x, _| Rgba([(x * 40) as u8, 0, 0, 255]));
        let edges = show_edges(&src, 0).unwrap();
        for y in 0..3 {
            assert_eq!(edges.get(0, y).unwrap(), OPAQUE_WHITE);
            for x in 1..5 {
                assert_eq!(edges.get(x, y).unwrap(), OPAQUE_BLACK);
            }
        }
    }

    #[test]
    fn test_reads_original_not_output() {
        // A single dark pixel in row 0: (2,0) is an edge against (1,0), and
        // (3,0) must be judged against the original (2,0), not its black output.
        let mut src = Raster::from_pixel(4, 1, OPAQUE_WHITE);
        src.set(1, 0, OPAQUE_BLACK).unwrap();
        let edges = show_edges(&src, 10).unwrap();
        assert_eq!(edges.get(1, 0).unwrap(), OPAQUE_BLACK);
        assert_eq!(edges.get(2, 0).unwrap(), OPAQUE_BLACK);
        assert_eq!(edges.get(3, 0).unwrap(), OPAQUE_WHITE);
    }

    #[test]
    fn test_threshold_is_strict() {
        let src = Raster::from_fn(2, 1, |x, _| Rgba([(x * 10) as u8, 0, 0, 255]));
        assert_eq!(show_edges(&src, 10).unwrap().get(1, 0).unwrap(), OPAQUE_WHITE);
        assert_eq!(show_edges(&src, 9).unwrap().get(1, 0).unwrap(), OPAQUE_BLACK);
    }

    #[test]
    fn test_empty_raster_rejected() {
        assert!(show_edges(&Raster::new(0, 0), 5).is_err());
    }
}
