//! Texture assets: pixel formats, procedural variants, palettes, mip chains.

use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::property::PropertyEntry;

/// Source pixel encodings a loaded texture can carry.
///
/// The discriminants match the legacy on-disk format codes and show up
/// verbatim in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PixelFormat {
    /// 8-bit palette-indexed.
    P8 = 0,
    /// 7-bit RGB with shared exponent.
    Rgba7 = 1,
    /// 16-bit RGB.
    Rgb16 = 2,
    /// Block-compressed DXT1.
    Dxt1 = 3,
    /// 24-bit RGB.
    Rgb8 = 4,
    /// 32-bit RGBA.
    Rgba8 = 5,
}

impl PixelFormat {
    /// The numeric legacy format code.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Texture subtype tag.
///
/// The four procedural variants regenerate their surface at runtime and are
/// exported as descriptive text blocks; only `Standard` textures are raster
/// export candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureVariant {
    Standard,
    Fire,
    Wet,
    Wave,
    Ice,
}

impl TextureVariant {
    /// The legacy class name emitted in text blocks.
    pub const fn class_name(self) -> &'static str {
        match self {
            TextureVariant::Standard => "Texture",
            TextureVariant::Fire => "FireTexture",
            TextureVariant::Wet => "WetTexture",
            TextureVariant::Wave => "WaveTexture",
            TextureVariant::Ice => "IceTexture",
        }
    }

    /// Whether the variant is generated at runtime rather than stored.
    pub const fn is_procedural(self) -> bool {
        !matches!(self, TextureVariant::Standard)
    }
}

/// A loaded texture.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureAsset {
    /// Asset name.
    pub name: String,
    /// Width of mip level 0 in pixels.
    pub width: u32,
    /// Height of mip level 0 in pixels.
    pub height: u32,
    /// Stored pixel encoding.
    pub format: PixelFormat,
    /// Subtype tag.
    pub variant: TextureVariant,
    /// Color table. Always 256 entries.
    pub palette: Palette,
    /// Mip chain, finest level first. Level 0 holds `width * height` bytes
    /// for paletted textures.
    pub mips: Vec<Vec<u8>>,
    /// Property entries serialized into procedural text blocks.
    pub properties: Vec<PropertyEntry>,
}

impl TextureAsset {
    /// A standard paletted texture with a single mip level.
    pub fn paletted(
        name: impl Into<String>,
        width: u32,
        height: u32,
        palette: Palette,
        pixels: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            format: PixelFormat::P8,
            variant: TextureVariant::Standard,
            palette,
            mips: vec![pixels],
            properties: Vec::new(),
        }
    }

    /// The finest mip level's pixel data.
    pub fn mip_zero(&self) -> &[u8] {
        self.mips.first().map(Vec::as_slice).unwrap_or(&[])
    }
}
