//! Color-keyed region operations: chroma key and flood fill

use crate::color::within_threshold;
use crate::error::Result;
use crate::raster::{Pixel, Raster};
use log::debug;
use std::collections::VecDeque;

/// Neighbor offsets in visiting order: N, S, E, W, NE, NW, SE, SW
const NEIGHBORS: [(i64, i64); 8] = [
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, 0),
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
];

/// Replace pixels close to a reference color with the background
///
/// The reference color is read from `src` at `(ref_x, ref_y)`. The output
/// covers the overlap of `src` and `background` (both aligned at the top-left
/// corner); each pixel whose distance to the reference is below `threshold`
/// takes the background pixel, the rest keep the source pixel.
///
/// The threshold is unsigned and compared against the distance truncated to
/// an integer; `0` keys out nothing.
///
/// # Returns
/// The keyed raster, or `OutOfBounds` if the reference lies outside `src`
pub fn chroma_key(
    src: &Raster,
    ref_x: u32,
    ref_y: u32,
    background: &Raster,
    threshold: u32,
) -> Result<Raster> {
    let base = src.get(ref_x, ref_y)?;
    let width = src.width().min(background.width());
    let height = src.height().min(background.height());
    debug!("chroma_key {width}x{height} around ({ref_x}, {ref_y}) threshold {threshold}");

    Ok(Raster::from_fn(width, height, |x, y| {
        let here = src.pixel(x, y);
        if within_threshold(here, &base, threshold) {
            *background.pixel(x, y)
        } else {
            *here
        }
    }))
}

/// Breadth-first flood fill over the 8-connected pixel grid
///
/// Starting at `(ref_x, ref_y)`, every pixel reachable through neighbors whose
/// distance to the seed color is below `threshold` is painted `new_color`
/// (all four channels). Threshold tests always read `src`, so freshly painted
/// pixels never influence the search. The seed itself is always painted, so
/// a threshold of `0` recolors only the seed.
///
/// # Returns
/// A copy of `src` with the reached region recolored, or `OutOfBounds` if
/// the seed lies outside `src`
pub fn paint_bucket(
    src: &Raster,
    ref_x: u32,
    ref_y: u32,
    threshold: u32,
    new_color: Pixel,
) -> Result<Raster> {
    let base = src.get(ref_x, ref_y)?;
    let (width, height) = src.dimensions();
    let index = |x: u32, y: u32| y as usize * width as usize + x as usize;

    let mut output = src.copy();
    // Marked on enqueue, so each coordinate enters the frontier at most once.
    let mut visited = vec![false; width as usize * height as usize];
    let mut frontier = VecDeque::new();

    visited[index(ref_x, ref_y)] = true;
    frontier.push_back((ref_x, ref_y));
    let mut painted = 0usize;

    while let Some((x, y)) = frontier.pop_front() {
        output.put(x, y, new_color);
        painted += 1;

        for (dx, dy) in NEIGHBORS {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            let slot = index(nx, ny);
            if visited[slot] {
                continue;
            }
            if within_threshold(src.pixel(nx, ny), &base, threshold) {
                visited[slot] = true;
                frontier.push_back((nx, ny));
            }
        }
    }

    debug!("paint_bucket from ({ref_x}, {ref_y}) painted {painted} pixels");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{OPAQUE_BLACK, OPAQUE_WHITE};
    use crate::error::RasterError;
    use image::Rgba;

    const RED: Pixel = Rgba([255, 0, 0, 255]);

    fn checkerboard(size: u32) -> Raster {
        Raster::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 {
                OPAQUE_BLACK
            } else {
                OPAQUE_WHITE
            }
        })
    }

    fn count(raster: &Raster, color: Pixel) -> usize {
        raster.as_image().pixels().filter(|p| **p == color).count()
    }

    #[test_log::test]
    fn test_uniform_raster_fills_everything() {
        let src = Raster::from_pixel(5, 5, Rgba([40, 40, 40, 255]));
        for (x, y) in [(0, 0), (2, 2), (4, 1)] {
            let out = paint_bucket(&src, x, y, 1, RED).unwrap();
            assert_eq!(count(&out, RED), 25);
        }
    }

    #[test]
    fn test_checkerboard_fills_single_cell_when_isolated() {
        // Diagonal neighbors share a color, so isolate the seed with a
        // four-shade tiling where no neighbor matches.
        let src = Raster::from_fn(5, 5, |x, y| {
            let shade = ((x % 2) + 2 * (y % 2)) as u8 * 80;
            Rgba([shade, shade, shade, 255])
        });
        let out = paint_bucket(&src, 2, 2, 50, RED).unwrap();
        assert_eq!(count(&out, RED), 1);
        assert_eq!(out.get(2, 2).unwrap(), RED);
    }

    #[test]
    fn test_checkerboard_spreads_diagonally() {
        // On a two-color checkerboard same-colored cells touch diagonally.
        let src = checkerboard(5);
        let out = paint_bucket(&src, 0, 0, 100, RED).unwrap();
        assert_eq!(count(&out, RED), 13);
        assert_eq!(count(&out, OPAQUE_WHITE), 12);
    }

    #[test]
    fn test_zero_threshold_paints_only_seed() {
        let src = Raster::from_pixel(4, 4, OPAQUE_WHITE);
        let out = paint_bucket(&src, 3, 3, 0, RED).unwrap();
        assert_eq!(count(&out, RED), 1);
    }

    #[test]
    fn test_fill_stops_at_barrier() {
        // A full-height black wall at x = 2 separates left from right.
        let src = Raster::from_fn(5, 4, |x, _| if x == 2 { OPAQUE_BLACK } else { OPAQUE_WHITE });
        let out = paint_bucket(&src, 0, 0, 10, RED).unwrap();
        assert_eq!(count(&out, RED), 8);
        for y in 0..4 {
            assert_eq!(out.get(3, y).unwrap(), OPAQUE_WHITE);
            assert_eq!(out.get(2, y).unwrap(), OPAQUE_BLACK);
        }
    }

    #[test]
    fn test_fill_replaces_alpha_and_keeps_source() {
        let src = Raster::from_pixel(3, 3, Rgba([1, 2, 3, 4]));
        let paint = Rgba([9, 8, 7, 6]);
        let out = paint_bucket(&src, 1, 1, 5, paint).unwrap();
        assert_eq!(out, Raster::from_pixel(3, 3, paint));
        assert_eq!(src.get(1, 1).unwrap(), Rgba([1, 2, 3, 4]));
    }

    #[test]
    fn test_fill_seed_out_of_bounds() {
        let src = Raster::new(3, 3);
        assert!(matches!(
            paint_bucket(&src, 3, 0, 5, RED),
            Err(RasterError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_chroma_key_replaces_close_pixels() {
        let green = Rgba([0, 255, 0, 255]);
        let mut src = Raster::from_pixel(4, 4, green);
        src.set(1, 1, OPAQUE_WHITE).unwrap();
        let background = Raster::from_pixel(4, 4, RED);

        let out = chroma_key(&src, 0, 0, &background, 30).unwrap();
        assert_eq!(count(&out, RED), 15);
        assert_eq!(out.get(1, 1).unwrap(), OPAQUE_WHITE);
    }

    #[test]
    fn test_chroma_key_uses_smaller_dimensions() {
        let src = Raster::from_pixel(6, 3, OPAQUE_WHITE);
        let background = Raster::from_pixel(4, 5, OPAQUE_BLACK);
        let out = chroma_key(&src, 5, 2, &background, 1).unwrap();
        assert_eq!(out.dimensions(), (4, 3));
        assert_eq!(count(&out, OPAQUE_BLACK), 12);
    }

    #[test]
    fn test_chroma_key_threshold_is_strict() {
        let src = Raster::from_fn(2, 1, |x, _| Rgba([(x * 20) as u8, 0, 0, 255]));
        let background = Raster::from_pixel(2, 1, RED);
        let out = chroma_key(&src, 0, 0, &background, 20).unwrap();
        assert_eq!(out.get(0, 0).unwrap(), RED);
        assert_eq!(out.get(1, 0).unwrap(), Rgba([20, 0, 0, 255]));
    }

    #[test]
    fn test_chroma_key_zero_threshold_keys_nothing() {
        let src = Raster::from_pixel(3, 2, OPAQUE_WHITE);
        let out = chroma_key(&src, 1, 1, &Raster::from_pixel(3, 2, RED), 0).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_chroma_key_reference_out_of_bounds() {
        let src = Raster::new(2, 2);
        assert!(chroma_key(&src, 0, 2, &Raster::new(2, 2), 10).is_err());
    }
}
