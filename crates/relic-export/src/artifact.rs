//! Artifact assembly: one asset in, named output files out.
//!
//! The codecs return bare byte buffers; this layer fixes the caller-visible
//! contract around them: which files an asset produces, what they are
//! called, and which directory class they belong to. Persistence itself
//! stays with the caller: artifacts are plain in-memory values, and codecs
//! that produced an empty buffer contribute no artifact at all.

use serde::{Deserialize, Serialize};

use relic_assets::{
    AudioAsset, AudioKind, ClassAsset, FontAsset, MeshAsset, SkeletalAnimationAsset, TextureAsset,
};

use crate::audio;
use crate::error::ExportResult;
use crate::font;
use crate::mesh;
use crate::raster::{self, RasterFormat};
use crate::text;

/// Output directory class an artifact files under, mirroring the package
/// layout the legacy tools expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactCategory {
    Classes,
    Fonts,
    Meshes,
    Textures,
    Sounds,
    Music,
}

impl ArtifactCategory {
    /// The conventional directory name.
    pub const fn dir_name(self) -> &'static str {
        match self {
            ArtifactCategory::Classes => "Classes",
            ArtifactCategory::Fonts => "Fonts",
            ArtifactCategory::Meshes => "Meshes",
            ArtifactCategory::Textures => "Textures",
            ArtifactCategory::Sounds => "Sounds",
            ArtifactCategory::Music => "Music",
        }
    }
}

/// One finished export artifact.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// Directory class the artifact belongs under.
    pub category: ArtifactCategory,
    /// Output file name, extension included.
    pub file_name: String,
    /// Encoded bytes. Never empty.
    pub data: Vec<u8>,
    /// BLAKE3 hash of `data`, for output validation.
    pub hash: String,
}

impl ExportArtifact {
    fn new(category: ArtifactCategory, file_name: String, data: Vec<u8>) -> Self {
        let hash = blake3::hash(&data).to_hex().to_string();
        Self {
            category,
            file_name,
            data,
            hash,
        }
    }
}

/// A borrowed view of any exportable asset.
#[derive(Debug, Clone, Copy)]
pub enum Asset<'a> {
    Class(&'a ClassAsset),
    Font(&'a FontAsset),
    Mesh(&'a MeshAsset),
    SkeletalAnimation(&'a SkeletalAnimationAsset),
    Texture(&'a TextureAsset),
    Audio(&'a AudioAsset),
}

/// Exports one asset to its named artifacts.
///
/// `raster` picks the encoding for standard textures, including font page
/// textures. An empty result list means the asset had nothing to emit and
/// the caller skips it; it is not a failure.
pub fn export_asset(asset: Asset<'_>, raster: RasterFormat) -> ExportResult<Vec<ExportArtifact>> {
    let mut artifacts = Vec::new();

    match asset {
        Asset::Class(cls) => {
            push(
                &mut artifacts,
                ArtifactCategory::Classes,
                format!("{}.uc", cls.name),
                text::export_class(cls),
            );
        }
        Asset::Font(f) => {
            push(
                &mut artifacts,
                ArtifactCategory::Fonts,
                format!("{}.ufnt", f.name),
                font::export_font(f),
            );
            // Every page's backing texture becomes a sibling file of the
            // descriptor.
            for page in &f.pages {
                let (ext, data) = texture_output(&page.texture, raster)?;
                push(
                    &mut artifacts,
                    ArtifactCategory::Fonts,
                    format!("{}.{}", page.texture.name, ext),
                    data,
                );
            }
        }
        Asset::Mesh(m) => match m {
            MeshAsset::Skeletal(_) => {
                push(
                    &mut artifacts,
                    ArtifactCategory::Meshes,
                    format!("{}.psk", m.name()),
                    mesh::export_geometry(m)?,
                );
            }
            _ => {
                push(
                    &mut artifacts,
                    ArtifactCategory::Meshes,
                    format!("{}_a.3d", m.name()),
                    mesh::export_vertex_anim(m)?,
                );
                push(
                    &mut artifacts,
                    ArtifactCategory::Meshes,
                    format!("{}_d.3d", m.name()),
                    mesh::export_geometry(m)?,
                );
            }
        },
        Asset::SkeletalAnimation(anim) => {
            push(
                &mut artifacts,
                ArtifactCategory::Meshes,
                format!("{}.psa", anim.name),
                mesh::export_skeletal_anim(anim),
            );
        }
        Asset::Texture(tex) => {
            let (ext, data) = texture_output(tex, raster)?;
            push(
                &mut artifacts,
                ArtifactCategory::Textures,
                format!("{}.{}", tex.name, ext),
                data,
            );
        }
        Asset::Audio(a) => {
            let category = match a.kind {
                AudioKind::Sound => ArtifactCategory::Sounds,
                AudioKind::Music => ArtifactCategory::Music,
            };
            push(
                &mut artifacts,
                category,
                format!("{}.{}", a.name, a.format),
                audio::export_audio(Some(a)),
            );
        }
    }

    Ok(artifacts)
}

/// Encodes a texture and picks its extension. Procedural variants emit text
/// and override the raster extension with `fx`.
fn texture_output(
    tex: &TextureAsset,
    raster: RasterFormat,
) -> ExportResult<(&'static str, Vec<u8>)> {
    let ext = if tex.variant.is_procedural() {
        "fx"
    } else {
        raster.extension()
    };
    Ok((ext, raster::export_texture(tex, raster)?))
}

fn push(
    artifacts: &mut Vec<ExportArtifact>,
    category: ArtifactCategory,
    file_name: String,
    data: Vec<u8>,
) {
    if !data.is_empty() {
        artifacts.push(ExportArtifact::new(category, file_name, data));
    }
}
