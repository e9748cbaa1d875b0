//! Packed binary layouts of the legacy mesh streams.
//!
//! The vertex-animation (`_a.3d`) and geometry (`_d.3d`) stream layouts are
//! fixed by third-party import tools; field order, widths, and little-endian
//! byte order are load-bearing. See
//! <https://paulbourke.net/dataformats/unreal/> for the classic description.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{self, Write};

use relic_assets::{poly_flags, Vec3};

/// Size of the geometry stream header in bytes.
pub const DATA_HEADER_SIZE: usize = 48;

/// Size of one packed triangle record in bytes.
pub const TRIANGLE_SIZE: usize = 16;

/// Color written into every triangle record. The consuming tools have never
/// documented the field; 127 is the value they have always been fed.
pub const TRIANGLE_COLOR: i8 = 127;

/// Triangle type codes.
pub mod triangle_type {
    /// Plain one-sided surface.
    pub const NORMAL: i8 = 0;
    /// Two-sided surface.
    pub const TWO_SIDED: i8 = 1;
    /// Translucent two-sided surface.
    pub const TRANSLUCENT: i8 = 2;
    /// Alpha-tested two-sided surface.
    pub const MASKED_TWO_SIDED: i8 = 3;
    /// Modulated two-sided surface.
    pub const MODULATED_TWO_SIDED: i8 = 4;
    /// First-person weapon attachment triangle.
    pub const WEAPON_TRIANGLE: i8 = 8;
}

/// Derives the type code for a set of polygon flags.
///
/// The masked/translucent/modulated bits only matter on two-sided surfaces;
/// with the two-sided bit clear the code is always `NORMAL`.
pub fn triangle_type_for(flags: u32) -> i8 {
    if flags & poly_flags::TWO_SIDED != 0 {
        if flags & poly_flags::MODULATED != 0 {
            triangle_type::MODULATED_TWO_SIDED
        } else if flags & poly_flags::MASKED != 0 {
            triangle_type::MASKED_TWO_SIDED
        } else if flags & poly_flags::TRANSLUCENT != 0 {
            triangle_type::TRANSLUCENT
        } else {
            triangle_type::TWO_SIDED
        }
    } else {
        triangle_type::NORMAL
    }
}

/// Packs one vertex position into a 32-bit animation word.
///
/// X and Y are negated, scaled by 8, and truncated into 11-bit fields; Z is
/// scaled by 4 into the 10-bit top field. Out-of-range coordinates wrap
/// through the masks, which is the accepted legacy behavior.
pub fn pack_vertex(v: Vec3) -> u32 {
    let x = (-v.x * 8.0) as i32;
    let y = (-v.y * 8.0) as i32;
    let z = (v.z * 4.0) as i32;
    ((x & 0x7ff) as u32) | (((y & 0x7ff) as u32) << 11) | (((z & 0x3ff) as u32) << 22)
}

/// Vertex-animation stream header.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnivHeader {
    /// Number of animation frames.
    pub num_frames: u16,
    /// Bytes per frame: four per vertex.
    pub frame_size: u16,
}

impl AnivHeader {
    /// Writes the header to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u16::<LittleEndian>(self.num_frames)?;
        writer.write_u16::<LittleEndian>(self.frame_size)?;
        Ok(())
    }
}

/// Geometry stream header.
///
/// Only the two counts carry information. The remaining fields are legacy
/// placeholders the consuming tools seek past; they are written as zeros.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataHeader {
    /// Triangle count.
    pub num_polygons: u16,
    /// Vertices per animation frame.
    pub num_vertices: u16,
}

impl DataHeader {
    /// Writes the 48-byte header to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u16::<LittleEndian>(self.num_polygons)?;
        writer.write_u16::<LittleEndian>(self.num_vertices)?;

        // Placeholder rotation/frame/normal/scale fields, then padding.
        writer.write_u16::<LittleEndian>(0)?;
        writer.write_u16::<LittleEndian>(0)?;
        for _ in 0..3 {
            writer.write_u32::<LittleEndian>(0)?;
        }
        writer.write_u32::<LittleEndian>(0)?;
        for _ in 0..3 {
            writer.write_u32::<LittleEndian>(0)?;
        }
        writer.write_all(&[0u8; 12])?;
        Ok(())
    }
}

/// One packed triangle record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleRecord {
    /// Per-frame vertex buffer indices.
    pub vertex: [u16; 3],
    /// Type code, see [`triangle_type`].
    pub triangle_type: i8,
    /// Always [`TRIANGLE_COLOR`].
    pub color: i8,
    /// Byte UV pair per corner.
    pub uv: [[u8; 2]; 3],
    /// Material/texture slot.
    pub tex_num: i8,
    /// Reserved, always zero.
    pub flags: i8,
}

impl TriangleRecord {
    /// Writes the 16-byte record to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for v in self.vertex {
            writer.write_u16::<LittleEndian>(v)?;
        }
        writer.write_i8(self.triangle_type)?;
        writer.write_i8(self.color)?;
        for corner in self.uv {
            writer.write_u8(corner[0])?;
            writer.write_u8(corner[1])?;
        }
        writer.write_i8(self.tex_num)?;
        writer.write_i8(self.flags)?;
        Ok(())
    }
}
