use crate::error::{RasterError, Result};
use image::{Rgba, RgbaImage};

/// One RGBA pixel with 8-bit channels, stored as `[red, green, blue, alpha]`
pub type Pixel = Rgba<u8>;

/// An owned width×height grid of RGBA pixels
///
/// Every transform in this crate reads a `&Raster` and returns a freshly
/// allocated one, so a raster is never mutated behind its owner's back.
/// `Clone` is a deep copy: the two rasters share no storage afterwards.
#[derive(Debug, Clone)]
pub struct Raster {
    image: RgbaImage,
}

impl Raster {
    /// Allocate a raster filled with transparent black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Allocate a raster where every pixel is `pixel`
    pub fn from_pixel(width: u32, height: u32, pixel: Pixel) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, pixel),
        }
    }

    /// Build a raster from a generator called once per coordinate
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        Self {
            image: RgbaImage::from_fn(width, height, f),
        }
    }

    /// Deep copy with independent storage
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// True when the raster has no pixels at all
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Fails with `OutOfBounds` unless `0 <= x < width` and `0 <= y < height`
    pub fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        let (width, height) = self.dimensions();
        if x < width && y < height {
            Ok(())
        } else {
            Err(RasterError::OutOfBounds {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Read the pixel at `(x, y)`
    pub fn get(&self, x: u32, y: u32) -> Result<Pixel> {
        self.check_bounds(x, y)?;
        Ok(*self.image.get_pixel(x, y))
    }

    /// Overwrite the pixel at `(x, y)`
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<()> {
        self.check_bounds(x, y)?;
        self.image.put_pixel(x, y, pixel);
        Ok(())
    }

    /// Borrow the underlying image buffer
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Unwrap into the underlying image buffer
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    // Crate-internal access for loops that already iterate within bounds.
    pub(crate) fn pixel(&self, x: u32, y: u32) -> &Pixel {
        self.image.get_pixel(x, y)
    }

    pub(crate) fn put(&mut self, x: u32, y: u32, pixel: Pixel) {
        self.image.put_pixel(x, y, pixel);
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }
}

impl From<RgbaImage> for Raster {
    fn from(image: RgbaImage) -> Self {
        Self { image }
    }
}

impl From<Raster> for RgbaImage {
    fn from(raster: Raster) -> Self {
        raster.image
    }
}

/// Two rasters are equal when their dimensions and every channel of every pixel match
impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.image.as_raw() == other.image.as_raw()
    }
}

impl Eq for Raster {}
