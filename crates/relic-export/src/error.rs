//! Error types for the export backend.

use relic_assets::CodecError;
use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while encoding an asset.
///
/// Every failure is fatal for the export call that raised it and names the
/// offending asset. An *empty* output buffer is never an error; it is the
/// designated "nothing to export" signal.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Triangle count exceeds the 16-bit polygon field of the geometry
    /// header.
    #[error("too many triangles ({count}) to export in {mesh}")]
    TooManyPolygons {
        /// Mesh asset name.
        mesh: String,
        /// Offending triangle count.
        count: usize,
    },

    /// A raster expansion was requested for a pixel format with no defined
    /// conversion.
    #[error("{texture}: unimplemented for texture format {format_code}")]
    UnsupportedPixelFormat {
        /// Texture asset name.
        texture: String,
        /// Numeric legacy format code.
        format_code: u8,
    },

    /// The requested texture output format is not recognized.
    #[error("unknown texture export format: {extension}")]
    UnknownExportExtension {
        /// The rejected extension.
        extension: String,
    },

    /// Width or height exceeds the sanity bound for indexed bitmaps.
    #[error("abnormally large indexed texture {texture}: {width}x{height}")]
    OversizedImage {
        /// Texture asset name.
        texture: String,
        width: u32,
        height: u32,
    },

    /// Vertex buffer length disagrees with frame count times verts per
    /// frame.
    #[error("{mesh}: vertex buffer holds {actual} entries, expected {expected}")]
    VertexCountMismatch {
        /// Mesh asset name.
        mesh: String,
        expected: usize,
        actual: usize,
    },

    /// I/O error from a writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

impl CodecError for ExportError {
    fn code(&self) -> &'static str {
        match self {
            ExportError::TooManyPolygons { .. } => "EXPORT_001",
            ExportError::UnsupportedPixelFormat { .. } => "EXPORT_002",
            ExportError::UnknownExportExtension { .. } => "EXPORT_003",
            ExportError::OversizedImage { .. } => "EXPORT_004",
            ExportError::VertexCountMismatch { .. } => "EXPORT_005",
            ExportError::Io(_) => "EXPORT_006",
            ExportError::Encoding(_) => "EXPORT_007",
        }
    }

    fn category(&self) -> &'static str {
        "export"
    }
}
