//! Indexed bitmap encoding.
//!
//! Produces the classic 8-bit paletted layout: 14-byte file header, 40-byte
//! DIB header, 256-entry BGRA color table, then pixel rows stored bottom-up.
//! The header precedes data whose final size is only known after the palette
//! and rows are serialized, so it is written twice: a placeholder up front
//! and the real values patched in at the end.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Cursor, Seek, SeekFrom, Write};

use relic_assets::TextureAsset;

use crate::error::{ExportError, ExportResult};

/// Byte size of the combined file and DIB header.
pub const HEADER_SIZE: usize = 54;

/// Largest width or height accepted. Anything bigger is a malformed asset,
/// not a real texture.
pub const MAX_DIMENSION: u32 = 8192;

/// `BM` signature.
const SIGNATURE: u16 = 0x4d42;

/// Combined bitmap file and DIB header. Fields the legacy layout fixes to
/// constants are not stored, only written.
#[derive(Debug, Clone, Copy, Default)]
struct BmpHeader {
    file_size: u32,
    pixel_offset: u32,
    width: u32,
    height: u32,
}

impl BmpHeader {
    fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u16::<LittleEndian>(SIGNATURE)?;
        writer.write_u32::<LittleEndian>(self.file_size)?;
        writer.write_u32::<LittleEndian>(0)?; // reserved
        writer.write_u32::<LittleEndian>(self.pixel_offset)?;

        writer.write_u32::<LittleEndian>(40)?; // DIB header size
        writer.write_u32::<LittleEndian>(self.width)?;
        writer.write_u32::<LittleEndian>(self.height)?;
        writer.write_u16::<LittleEndian>(1)?; // planes
        writer.write_u16::<LittleEndian>(8)?; // bits per pixel
        writer.write_u32::<LittleEndian>(0)?; // compression
        writer.write_u32::<LittleEndian>(0)?; // image size
        writer.write_u32::<LittleEndian>(0)?; // x pixels per meter
        writer.write_u32::<LittleEndian>(0)?; // y pixels per meter
        writer.write_u32::<LittleEndian>(0)?; // colors used
        writer.write_u32::<LittleEndian>(0)?; // colors important
        Ok(())
    }
}

/// Encodes a paletted texture as an 8-bit indexed bitmap.
pub fn export_indexed(tex: &TextureAsset) -> ExportResult<Vec<u8>> {
    let (width, height) = (tex.width, tex.height);
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ExportError::OversizedImage {
            texture: tex.name.clone(),
            width,
            height,
        });
    }

    let mut out = Cursor::new(Vec::with_capacity(
        HEADER_SIZE + 4 * 256 + (width * height) as usize,
    ));

    let mut header = BmpHeader {
        width,
        height,
        ..BmpHeader::default()
    };
    header.write(&mut out)?;

    for &color in tex.palette.colors() {
        out.write_u32::<LittleEndian>(color.bgra())?;
    }
    header.pixel_offset = out.position() as u32;

    // Rows are stored bottom-up.
    let pixels = tex.mip_zero();
    let width = width as usize;
    for y in (0..height as usize).rev() {
        out.write_all(&pixels[y * width..(y + 1) * width])?;
    }

    header.file_size = out.position() as u32;
    out.seek(SeekFrom::Start(0))?;
    header.write(&mut out)?;

    Ok(out.into_inner())
}
