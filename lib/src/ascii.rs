use crate::config::MosaicConfig;
use crate::error::Result;
use crate::glyphs::GlyphCache;
use crate::lut::{Glyph, TILE_HEIGHT, TILE_WIDTH};
use crate::point::grayscale;
use crate::raster::Raster;
use log::debug;
use rayon::prelude::*;
use std::sync::Arc;

/// Tile grid covering a raster, with the last row/column clipped to its edge
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    pub columns: u32,
    pub rows: u32,
}

impl TileGrid {
    pub fn for_raster(raster: &Raster) -> Self {
        Self {
            columns: raster.width().div_ceil(TILE_WIDTH),
            rows: raster.height().div_ceil(TILE_HEIGHT),
        }
    }

    pub fn len(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pixel extent `(x0, y0, width, height)` of a tile, clipped to the raster
fn tile_extent(raster: &Raster, tile_x: u32, tile_y: u32) -> (u32, u32, u32, u32) {
    let x0 = tile_x * TILE_WIDTH;
    let y0 = tile_y * TILE_HEIGHT;
    let width = TILE_WIDTH.min(raster.width() - x0);
    let height = TILE_HEIGHT.min(raster.height() - y0);
    (x0, y0, width, height)
}

/// Average red channel of every tile of a grayscale raster
///
/// Partial tiles on the right and bottom edges average only their in-bounds
/// pixels.
///
/// # Returns
/// One integer mean per tile, row-major
pub fn tile_intensities(gray: &Raster) -> Vec<u8> {
    let grid = TileGrid::for_raster(gray);

    // Parallelize tile averaging
    (0..grid.len())
        .into_par_iter()
        .map(|tile_idx| {
            let tile_x = (tile_idx as u32) % grid.columns;
            let tile_y = (tile_idx as u32) / grid.columns;
            let (x0, y0, width, height) = tile_extent(gray, tile_x, tile_y);

            let mut sum = 0u32;
            for y in y0..y0 + height {
                for x in x0..x0 + width {
                    sum += gray.pixel(x, y)[0] as u32;
                }
            }
            (sum / (width * height)) as u8
        })
        .collect()
}

/// Glyph chosen for every tile of `src`, row-major
pub fn select_glyphs(src: &Raster) -> Vec<Glyph> {
    tile_intensities(&grayscale(src))
        .into_iter()
        .map(Glyph::from_intensity)
        .collect()
}

/// Render `src` as an ASCII-art mosaic of the same dimensions
///
/// The raster is converted to grayscale and cut into 10×20 tiles. Each tile's
/// mean intensity selects a glyph, whose pixels (all four channels) replace
/// the tile. Edge tiles receive only the part of the glyph that fits.
pub fn convert_to_ascii(src: &Raster, glyphs: &GlyphCache) -> Result<Raster> {
    let grid = TileGrid::for_raster(src);
    debug!(
        "convert_to_ascii {}x{} as {}x{} tiles",
        src.width(),
        src.height(),
        grid.columns,
        grid.rows
    );

    let selected = select_glyphs(src);
    let mut output = Raster::new(src.width(), src.height());

    for (tile_idx, glyph) in selected.into_iter().enumerate() {
        let bitmap = glyphs.get(glyph)?;
        let tile_x = (tile_idx as u32) % grid.columns;
        let tile_y = (tile_idx as u32) / grid.columns;
        let (x0, y0, width, height) = tile_extent(src, tile_x, tile_y);

        for local_y in 0..height {
            for local_x in 0..width {
                output.put(x0 + local_x, y0 + local_y, *bitmap.pixel(local_x, local_y));
            }
        }
    }

    Ok(output)
}

/// Text form of the mosaic: one character per tile, one line per tile row
pub fn ascii_text(src: &Raster) -> String {
    let grid = TileGrid::for_raster(src);
    let selected = select_glyphs(src);

    let mut text = String::with_capacity(grid.len() + grid.rows as usize);
    for row in selected.chunks(grid.columns.max(1) as usize) {
        text.extend(row.iter().map(|glyph| glyph.as_char()));
        text.push('\n');
    }
    text
}

/// Mosaic renderer owning a shared, load-once glyph cache
#[derive(Clone)]
pub struct MosaicRenderer {
    glyphs: Arc<GlyphCache>,
}

impl MosaicRenderer {
    /// Build a renderer with the glyph source described by `config`
    pub fn new(config: &MosaicConfig) -> Result<Self> {
        Ok(Self::with_cache(Arc::new(GlyphCache::from_config(config)?)))
    }

    /// Build a renderer around an existing cache, which may be shared
    pub fn with_cache(glyphs: Arc<GlyphCache>) -> Self {
        Self { glyphs }
    }

    pub fn glyph_cache(&self) -> &Arc<GlyphCache> {
        &self.glyphs
    }

    pub fn render(&self, src: &Raster) -> Result<Raster> {
        convert_to_ascii(src, &self.glyphs)
    }

    /// Text form of the mosaic, see [`ascii_text`]
    ///
    /// Only the glyph selection is shared with [`MosaicRenderer::render`]; the
    /// configured glyph source is not consulted.
    pub fn render_text(&self, src: &Raster) -> String {
        ascii_text(src)
    }
}

impl Default for MosaicRenderer {
    fn default() -> Self {
        Self::with_cache(Arc::new(GlyphCache::default()))
    }
}
