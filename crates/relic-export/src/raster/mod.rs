//! Texture export: format dispatch plus the raster and text encoders.

pub mod bmp;
pub mod png;
pub mod procedural;

use serde::{Deserialize, Serialize};

use relic_assets::{PixelFormat, TextureAsset};

use crate::error::{ExportError, ExportResult};

/// Caller-selectable raster output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RasterFormat {
    /// 8-bit indexed bitmap.
    Bmp,
    /// True-color PNG.
    Png,
}

impl RasterFormat {
    /// The file extension for this format.
    pub const fn extension(self) -> &'static str {
        match self {
            RasterFormat::Bmp => "bmp",
            RasterFormat::Png => "png",
        }
    }

    /// Parses a caller-supplied extension, case-insensitively.
    pub fn from_extension(ext: &str) -> ExportResult<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "bmp" => Ok(RasterFormat::Bmp),
            "png" => Ok(RasterFormat::Png),
            _ => Err(ExportError::UnknownExportExtension {
                extension: ext.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Encodes a texture in the requested format.
///
/// Procedural variants ignore the raster choice and emit their descriptive
/// text block. An indexed bitmap is only defined for paletted sources;
/// requesting one for any other pixel format is an unknown-format error,
/// while a PNG request for a source with no RGBA expansion reports the
/// unsupported pixel format itself.
pub fn export_texture(tex: &TextureAsset, format: RasterFormat) -> ExportResult<Vec<u8>> {
    if tex.variant.is_procedural() {
        return Ok(procedural::export_text_block(tex));
    }

    match format {
        RasterFormat::Bmp if tex.format == PixelFormat::P8 => bmp::export_indexed(tex),
        RasterFormat::Png => png::export_true_color(tex),
        RasterFormat::Bmp => Err(ExportError::UnknownExportExtension {
            extension: RasterFormat::Bmp.extension().to_string(),
        }),
    }
}
