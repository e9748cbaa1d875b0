//! Font descriptor blocks.

use std::io::{self, Write};

use relic_assets::FontAsset;

/// Renders the page/glyph descriptor block for a font.
///
/// Each page names its backing texture and lists its glyph cells as
/// `CharN(...)` lines, N being the 0-based slot index. All-zero cells are
/// unused slots and are omitted. The emitted USize/VSize are cross-assigned
/// from the source's V/U extents; the swap is baked into the consuming tools
/// and must not be corrected here.
pub fn export_font(font: &FontAsset) -> Vec<u8> {
    let mut out = Vec::new();
    write_font(&mut out, font).expect("writing to Vec should not fail");
    out
}

/// Writes the font descriptor to a writer.
pub fn write_font<W: Write>(out: &mut W, font: &FontAsset) -> io::Result<()> {
    out.write_all(b"BEGIN OBJECT CLASS=Font\r\n")?;

    for page in &font.pages {
        out.write_all(b"\tBEGIN PAGE\r\n")?;
        write!(out, "\t\tTexture='{}'\r\n", page.texture.name)?;

        for (i, c) in page.characters.iter().enumerate() {
            if c.is_unused() {
                continue;
            }
            write!(
                out,
                "\t\tChar{}(StartU={},StartV={},USize={},VSize={})\r\n",
                i, c.start_u, c.start_v, c.v_size, c.u_size
            )?;
        }

        out.write_all(b"\tEND PAGE\r\n")?;
    }

    out.write_all(b"END OBJECT\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use relic_assets::{FontCharacter, FontPage, Palette, TextureAsset};

    fn one_page_font(characters: Vec<FontCharacter>) -> FontAsset {
        FontAsset {
            name: "SmallFont".into(),
            pages: vec![FontPage {
                texture: TextureAsset::paletted("SmallFontPage0", 8, 8, Palette::default(), vec![0; 64]),
                characters,
            }],
        }
    }

    #[test]
    fn test_descriptor_layout() {
        let font = one_page_font(vec![FontCharacter {
            start_u: 1,
            start_v: 2,
            u_size: 3,
            v_size: 4,
        }]);
        let text = String::from_utf8(export_font(&font)).unwrap();
        assert_eq!(
            text,
            "BEGIN OBJECT CLASS=Font\r\n\
             \tBEGIN PAGE\r\n\
             \t\tTexture='SmallFontPage0'\r\n\
             \t\tChar0(StartU=1,StartV=2,USize=4,VSize=3)\r\n\
             \tEND PAGE\r\n\
             END OBJECT\r\n"
        );
    }

    #[test]
    fn test_unused_slots_omitted_and_indices_kept() {
        let font = one_page_font(vec![
            FontCharacter::default(),
            FontCharacter {
                start_u: 5,
                ..FontCharacter::default()
            },
        ]);
        let text = String::from_utf8(export_font(&font)).unwrap();
        assert!(!text.contains("Char0"));
        // The surviving slot keeps its original index.
        assert!(text.contains("Char1(StartU=5,StartV=0,USize=0,VSize=0)"));
    }

    #[test]
    fn test_uv_extent_swap() {
        let font = one_page_font(vec![FontCharacter {
            start_u: 0,
            start_v: 0,
            u_size: 7,
            v_size: 9,
        }]);
        let text = String::from_utf8(export_font(&font)).unwrap();
        assert!(text.contains("USize=9,VSize=7"));
    }
}
