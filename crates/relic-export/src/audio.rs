//! Audio passthrough export.

use relic_assets::AudioAsset;

/// Copies an audio asset's payload out verbatim.
///
/// The payload is never inspected or converted; the stored format tag only
/// decides the output extension, and that happens in the artifact layer. A
/// missing asset reference yields an empty buffer, the usual
/// "nothing to export" signal.
pub fn export_audio(asset: Option<&AudioAsset>) -> Vec<u8> {
    asset.map(|a| a.data.clone()).unwrap_or_default()
}
