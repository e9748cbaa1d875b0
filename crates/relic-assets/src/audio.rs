//! Sound and music assets.

use serde::{Deserialize, Serialize};

/// Audio asset flavor. Only affects which output directory the caller files
/// the export under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioKind {
    Sound,
    Music,
}

/// A loaded audio asset: an opaque payload plus the stored format tag.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioAsset {
    /// Asset name.
    pub name: String,
    /// Sound effect or music track.
    pub kind: AudioKind,
    /// Stored format tag, e.g. `wav` or `it`. Used only as the output file
    /// extension; the payload is never inspected.
    pub format: String,
    /// Raw payload bytes, copied out verbatim on export.
    pub data: Vec<u8>,
}

impl AudioAsset {
    /// A sound effect.
    pub fn sound(name: impl Into<String>, format: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            kind: AudioKind::Sound,
            format: format.into(),
            data,
        }
    }

    /// A music track.
    pub fn music(name: impl Into<String>, format: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            kind: AudioKind::Music,
            format: format.into(),
            data,
        }
    }
}
