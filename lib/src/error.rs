use thiserror::Error;

/// Errors raised by raster access, transforms and the decode/encode collaborators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("pixel ({x}, {y}) is outside a {width}x{height} raster")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("failed to decode raster: {0}")]
    Decode(String),
    #[error("failed to encode raster: {0}")]
    Encode(String),
    #[error("resource missing: {0}")]
    ResourceMissing(String),
}

pub type Result<T> = std::result::Result<T, RasterError>;
