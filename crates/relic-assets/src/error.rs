//! Shared error reporting seam between the asset model and codec crates.

/// Common trait for codec errors.
///
/// Every codec crate's error type implements this trait so callers can report
/// failures uniformly: a stable code for programmatic handling and a category
/// for grouping.
pub trait CodecError: std::error::Error {
    /// Stable error code, e.g. `EXPORT_001`.
    fn code(&self) -> &'static str;

    /// Human-readable message.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category, e.g. `export`.
    fn category(&self) -> &'static str;
}
