//! Relic Export Backend
//!
//! This crate converts loaded [`relic_assets`] objects into the legacy file
//! encodings their original tooling consumes: indented text property blocks,
//! 8-bit indexed bitmaps, true-color PNGs, packed triangle-mesh binaries, and
//! verbatim audio payloads. Third-party tools parse these outputs byte by
//! byte, so every layout here is reproduced exactly: header field order,
//! record packing, palette ordering, the CRLF text grammar.
//!
//! Every export call is a pure, synchronous function from one borrowed asset
//! (plus, for textures, the caller's [`RasterFormat`] choice) to an owned
//! byte buffer. A zero-length buffer is the designated "nothing to export"
//! signal and is never an error; real failures carry the offending asset's
//! name in a typed [`ExportError`].
//!
//! # Example
//!
//! ```
//! use relic_assets::{PackedColor, Palette, TextureAsset};
//! use relic_export::{export_asset, Asset, RasterFormat};
//!
//! let palette = Palette::from_fn(|i| PackedColor::from_rgba(i as u8, 0, 0, 255));
//! let tex = TextureAsset::paletted("Wall", 2, 2, palette, vec![0, 1, 2, 3]);
//!
//! let artifacts = export_asset(Asset::Texture(&tex), RasterFormat::Bmp)?;
//! assert_eq!(artifacts[0].file_name, "Wall.bmp");
//! assert_eq!(&artifacts[0].data[0..2], b"BM");
//! # Ok::<(), relic_export::ExportError>(())
//! ```

pub mod artifact;
pub mod audio;
pub mod error;
pub mod font;
pub mod mesh;
pub mod raster;
pub mod text;

// Re-export main types for convenience
pub use artifact::{export_asset, ArtifactCategory, Asset, ExportArtifact};
pub use error::{ExportError, ExportResult};
pub use raster::{export_texture, RasterFormat};
