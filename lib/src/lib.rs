//! Raster FX - constructive RGBA raster transforms
//!
//! Every operation reads an immutable [`Raster`] and returns a new one: color
//! maps, quarter-turn rotations and flips, box blur, edge maps, chroma key,
//! flood fill, and an ASCII-art mosaic built from 10×20 glyph cells.
//!
//! # Example
//! ```no_run
//! use raster_fx::{decode_raster_from_path, paint_bucket, save_raster, MosaicRenderer};
//! use image::Rgba;
//!
//! let photo = decode_raster_from_path("photo.png").unwrap();
//! let filled = paint_bucket(&photo, 0, 0, 40, Rgba([255, 0, 0, 255])).unwrap();
//! let ascii = MosaicRenderer::default().render(&filled).unwrap();
//! save_raster(&ascii, "ascii_art.png").unwrap();
//! ```

pub mod ascii;
pub mod color;
pub mod config;
pub mod edges;
pub mod error;
pub mod filters;
pub mod geometry;
pub mod glyphs;
pub mod io;
pub mod lut;
pub mod point;
pub mod raster;
pub mod region;

// Re-export main types for convenience
pub use ascii::{MosaicRenderer, ascii_text, convert_to_ascii};
pub use color::{clamp_channel, color_distance};
pub use config::MosaicConfig;
pub use edges::show_edges;
pub use error::{RasterError, Result};
pub use filters::blur;
pub use geometry::{FlipAxis, flip, rotate};
pub use glyphs::{BuiltinGlyphs, DirectoryGlyphs, GlyphCache, GlyphSource};
pub use io::{decode_raster, decode_raster_from_path, encode_raster, save_raster};
pub use lut::Glyph;
pub use point::{add_blue, add_green, add_red, darken, grayscale, lighten, negate};
pub use raster::{Pixel, Raster};
pub use region::{chroma_key, paint_bucket};
