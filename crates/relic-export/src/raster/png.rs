//! True-color PNG encoding.
//!
//! The finest mip level is expanded through the palette into an RGBA buffer
//! and handed to the `png` crate at maximum compression. The compressor
//! itself is a black box; only the expansion is this module's business.

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use relic_assets::{PixelFormat, TextureAsset};

use crate::error::{ExportError, ExportResult};

/// Encodes a texture as a true-color PNG.
pub fn export_true_color(tex: &TextureAsset) -> ExportResult<Vec<u8>> {
    let rgba = expand_rgba(tex)?;

    let mut out = Vec::new();
    let mut encoder = Encoder::new(&mut out, tex.width, tex.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Best);
    encoder.set_filter(FilterType::Paeth);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&rgba)?;
    writer.finish()?;

    Ok(out)
}

/// Expands mip level 0 into an RGBA byte buffer.
///
/// Only paletted sources have a defined expansion; anything else reports the
/// texture and its numeric format code.
fn expand_rgba(tex: &TextureAsset) -> ExportResult<Vec<u8>> {
    match tex.format {
        PixelFormat::P8 => {
            let pixels = tex.mip_zero();
            let mut rgba = Vec::with_capacity(pixels.len() * 4);
            for &index in pixels {
                rgba.extend_from_slice(&tex.palette.color(index).rgba_bytes());
            }
            Ok(rgba)
        }
        other => Err(ExportError::UnsupportedPixelFormat {
            texture: tex.name.clone(),
            format_code: other.code(),
        }),
    }
}
