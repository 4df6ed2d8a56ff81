//! Glyph bitmap sources and the load-once glyph cache

use crate::config::MosaicConfig;
use crate::error::{RasterError, Result};
use crate::io::decode_raster_from_path;
use crate::lut::{Glyph, TILE_HEIGHT, TILE_WIDTH};
use crate::raster::{Pixel, Raster};
use image::Rgba;
use log::{debug, info};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

/// Supplies the 10×20 bitmap for each glyph
pub trait GlyphSource: Send + Sync {
    /// Load one glyph; fails with `ResourceMissing` if the source has no bitmap for it
    fn load_glyph(&self, glyph: Glyph) -> Result<Raster>;
}

/// Glyphs drawn from the shapes in [`Glyph::inked`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinGlyphs {
    ink: Pixel,
    paper: Pixel,
}

impl BuiltinGlyphs {
    pub fn new(ink: [u8; 3], paper: [u8; 3]) -> Self {
        Self {
            ink: Rgba([ink[0], ink[1], ink[2], 255]),
            paper: Rgba([paper[0], paper[1], paper[2], 255]),
        }
    }
}

impl Default for BuiltinGlyphs {
    fn default() -> Self {
        let config = MosaicConfig::default();
        Self::new(config.ink, config.paper)
    }
}

impl GlyphSource for BuiltinGlyphs {
    fn load_glyph(&self, glyph: Glyph) -> Result<Raster> {
        Ok(Raster::from_fn(TILE_WIDTH, TILE_HEIGHT, |x, y| {
            if glyph.inked(x, y) {
                self.ink
            } else {
                self.paper
            }
        }))
    }
}

/// Glyphs decoded from `<dir>/<name>.bmp`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryGlyphs {
    dir: PathBuf,
}

impl DirectoryGlyphs {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl GlyphSource for DirectoryGlyphs {
    fn load_glyph(&self, glyph: Glyph) -> Result<Raster> {
        let path = self.dir.join(format!("{}.bmp", glyph.name()));
        if !path.is_file() {
            return Err(RasterError::ResourceMissing(format!(
                "glyph bitmap {}",
                path.display()
            )));
        }

        let raster = decode_raster_from_path(&path)?;
        debug!("loaded glyph '{}' from {}", glyph.as_char(), path.display());
        Ok(raster)
    }
}

/// Loads every glyph from its source on first use and keeps them for its lifetime
///
/// Every bitmap must be exactly 10×20, whatever the source. A failed or
/// mis-sized load leaves the cache empty and the error reaches the caller.
pub struct GlyphCache {
    source: Box<dyn GlyphSource>,
    glyphs: OnceCell<Vec<Raster>>,
}

impl GlyphCache {
    pub fn new(source: impl GlyphSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            glyphs: OnceCell::new(),
        }
    }

    /// Build the cache described by `config`, validating it first
    pub fn from_config(config: &MosaicConfig) -> Result<Self> {
        config.validate()?;
        Ok(match &config.glyph_dir {
            Some(dir) => Self::new(DirectoryGlyphs::new(dir)),
            None => Self::new(BuiltinGlyphs::new(config.ink, config.paper)),
        })
    }

    /// Bitmap for `glyph`, loading the whole table on the first call
    pub fn get(&self, glyph: Glyph) -> Result<&Raster> {
        let glyphs = self.glyphs.get_or_try_init(|| self.load_all())?;
        Ok(&glyphs[glyph.index()])
    }

    /// Whether the table has been loaded
    pub fn is_loaded(&self) -> bool {
        self.glyphs.get().is_some()
    }

    fn load_all(&self) -> Result<Vec<Raster>> {
        info!("loading {} glyph bitmaps", Glyph::ALL.len());
        Glyph::ALL
            .iter()
            .map(|&glyph| {
                self.source
                    .load_glyph(glyph)
                    .and_then(|raster| check_cell(glyph, raster))
            })
            .collect()
    }
}

/// Reject bitmaps that do not exactly fill one 10×20 cell
fn check_cell(glyph: Glyph, raster: Raster) -> Result<Raster> {
    if raster.dimensions() != (TILE_WIDTH, TILE_HEIGHT) {
        return Err(RasterError::Decode(format!(
            "glyph '{}' is {}x{}, expected {TILE_WIDTH}x{TILE_HEIGHT}",
            glyph.name(),
            raster.width(),
            raster.height()
        )));
    }
    Ok(raster)
}

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new(BuiltinGlyphs::default())
    }
}
