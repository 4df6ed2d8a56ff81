use crate::error::{RasterError, Result};
use std::path::PathBuf;

/// Configuration for mosaic (ASCII-art) rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Directory holding `<name>.bmp` glyph bitmaps; built-in glyphs when `None`
    pub glyph_dir: Option<PathBuf>,

    /// Built-in glyph colors
    pub ink: [u8; 3],   // RGB, default black [0, 0, 0]
    pub paper: [u8; 3], // RGB, default white [255, 255, 255]
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            glyph_dir: None,
            ink: [0, 0, 0],
            paper: [255, 255, 255],
        }
    }
}

impl MosaicConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.glyph_dir {
            if !dir.is_dir() {
                return Err(RasterError::ResourceMissing(format!(
                    "glyph directory {} does not exist",
                    dir.display()
                )));
            }
        }
        if self.ink == self.paper {
            return Err(RasterError::InvalidParameter(format!(
                "ink and paper must differ, both are {:?}",
                self.ink
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MosaicConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_glyph_dir() {
        let config = MosaicConfig {
            glyph_dir: Some(PathBuf::from("/definitely/not/a/glyph/dir")),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RasterError::ResourceMissing(_))
        ));
    }

    #[test]
    fn test_ink_equal_to_paper() {
        let config = MosaicConfig {
            ink: [7, 7, 7],
            paper: [7, 7, 7],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RasterError::InvalidParameter(_))
        ));
    }
}
