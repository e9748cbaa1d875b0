//! Descriptive text blocks for procedural textures.
//!
//! Fire, wet, wave, and ice textures regenerate their surface at runtime, so
//! a raster snapshot would be meaningless. They export as a text block:
//! properties, a five-point interpolated palette, then the full 256-entry
//! palette dump.

use std::io::{self, Write};

use relic_assets::{PackedColor, TextureAsset, TextureVariant, PALETTE_SIZE};

use crate::text;

/// Number of interpolated palette samples legacy editors read back.
const SAMPLE_COUNT: usize = 5;

/// Renders the descriptive block for a procedural texture.
///
/// All four variants share the shape; only the class tag and the label on
/// the full palette dump differ. The fire variant labels its dump
/// `PaletteColorN` while the other three use `PaletteN`; consuming tools
/// match on the exact labels, so the asymmetry stays.
pub fn export_text_block(tex: &TextureAsset) -> Vec<u8> {
    let mut out = Vec::new();
    write_text_block(&mut out, tex).expect("writing to Vec should not fail");
    out
}

fn write_text_block<W: Write>(out: &mut W, tex: &TextureAsset) -> io::Result<()> {
    write!(
        out,
        "BEGIN OBJECT CLASS={} USIZE={} VSIZE={}\r\n",
        tex.variant.class_name(),
        tex.width,
        tex.height
    )?;

    text::write_properties(out, &tex.name, &tex.properties, 1, None)?;

    // Five-point interpolated palette, the part 227/469-era editors read.
    for n in 1..=SAMPLE_COUNT {
        let index = (n * 64 - 1).min(PALETTE_SIZE - 1);
        write_color_line(out, "Color", n, tex.palette.color(index as u8))?;
    }

    let label = match tex.variant {
        TextureVariant::Fire => "PaletteColor",
        _ => "Palette",
    };
    for (i, &color) in tex.palette.colors().iter().enumerate() {
        write_color_line(out, label, i + 1, color)?;
    }

    out.write_all(b"END OBJECT\r\n")
}

fn write_color_line<W: Write>(
    out: &mut W,
    label: &str,
    n: usize,
    color: PackedColor,
) -> io::Result<()> {
    write!(
        out,
        "\t{}{}=(R={},G={},B={},A={})\r\n",
        label,
        n,
        color.r(),
        color.g(),
        color.b(),
        color.a()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use relic_assets::{Palette, PixelFormat, PropertyEntry, PropertyValue};

    fn procedural(variant: TextureVariant) -> TextureAsset {
        let palette = Palette::from_fn(|i| PackedColor::from_rgba(i as u8, 0, 0, 255));
        TextureAsset {
            name: "Flames".into(),
            width: 128,
            height: 128,
            format: PixelFormat::P8,
            variant,
            palette,
            mips: vec![vec![0; 128 * 128]],
            properties: vec![PropertyEntry::scalar(
                "RenderHeat",
                PropertyValue::Byte(200),
            )],
        }
    }

    #[test]
    fn test_block_frame_and_properties() {
        let text = String::from_utf8(export_text_block(&procedural(TextureVariant::Fire))).unwrap();
        assert!(text.starts_with("BEGIN OBJECT CLASS=FireTexture USIZE=128 VSIZE=128\r\n"));
        assert!(text.ends_with("END OBJECT\r\n"));
        assert!(text.contains("\tRenderHeat=200\r\n"));
    }

    #[test]
    fn test_interpolated_samples() {
        let text = String::from_utf8(export_text_block(&procedural(TextureVariant::Wave))).unwrap();
        // Samples land on palette indices 63, 127, 191, 255, 255.
        assert!(text.contains("\tColor1=(R=63,G=0,B=0,A=255)\r\n"));
        assert!(text.contains("\tColor2=(R=127,G=0,B=0,A=255)\r\n"));
        assert!(text.contains("\tColor4=(R=255,G=0,B=0,A=255)\r\n"));
        assert!(text.contains("\tColor5=(R=255,G=0,B=0,A=255)\r\n"));
    }

    #[test]
    fn test_palette_dump_labels() {
        let fire = String::from_utf8(export_text_block(&procedural(TextureVariant::Fire))).unwrap();
        assert!(fire.contains("\tPaletteColor1=(R=0,G=0,B=0,A=255)\r\n"));
        assert!(fire.contains("\tPaletteColor256=(R=255,G=0,B=0,A=255)\r\n"));

        for variant in [TextureVariant::Wet, TextureVariant::Wave, TextureVariant::Ice] {
            let text = String::from_utf8(export_text_block(&procedural(variant))).unwrap();
            assert!(text.contains("\tPalette1=(R=0,G=0,B=0,A=255)\r\n"));
            assert!(text.contains("\tPalette256=(R=255,G=0,B=0,A=255)\r\n"));
            assert!(!text.contains("PaletteColor1="));
        }
    }

    #[test]
    fn test_dump_is_complete() {
        let text = String::from_utf8(export_text_block(&procedural(TextureVariant::Ice))).unwrap();
        assert_eq!(text.matches("\tPalette").count(), PALETTE_SIZE);
    }
}
