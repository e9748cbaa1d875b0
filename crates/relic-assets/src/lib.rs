//! Relic Asset Data Model
//!
//! This crate defines the typed, already-loaded asset objects the Relic
//! export codecs consume: palettes and packed colors, property schemas,
//! script classes, textures (standard and procedural), vertex-animated and
//! LOD meshes, bitmap fonts, and raw audio payloads.
//!
//! Assets are immutable from the codec layer's point of view. The repository
//! that loads and indexes them lives elsewhere; everything here is plain data
//! plus the small accessors the encoders need.
//!
//! # Example
//!
//! ```
//! use relic_assets::{Palette, PackedColor, TextureAsset};
//!
//! let palette = Palette::from_fn(|i| PackedColor::from_rgba(i as u8, 0, 0, 255));
//! let tex = TextureAsset::paletted("Wall", 2, 2, palette, vec![0, 1, 2, 3]);
//! assert_eq!(tex.mip_zero().len(), 4);
//! ```

pub mod audio;
pub mod class;
pub mod color;
pub mod error;
pub mod font;
pub mod mesh;
pub mod property;
pub mod texture;

// Re-export main types for convenience
pub use audio::{AudioAsset, AudioKind};
pub use class::ClassAsset;
pub use color::{PackedColor, Palette, PALETTE_SIZE};
pub use error::CodecError;
pub use font::{FontAsset, FontCharacter, FontPage};
pub use mesh::{
    poly_flags, GenericMesh, LodMesh, MeshAsset, MeshFace, MeshMaterial, MeshTriangle, MeshWedge,
    SkeletalAnimationAsset, SkeletalMesh, Vec3, VertexAnimation,
};
pub use property::{ObjectProperties, PropertyEntry, PropertyValue};
pub use texture::{PixelFormat, TextureAsset, TextureVariant};
