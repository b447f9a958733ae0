// --- File: crates/hourbook_common/src/error.rs ---

/// A trait for converting errors to HTTP status codes.
///
/// Domain crates implement this for their error enums so the transport
/// layer can map any outcome to a status without matching on variants
/// it has no business knowing about.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}
