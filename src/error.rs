//! Screen construction errors.

/// Errors reported when building a [`Screen`](crate::Screen).
///
/// Stream processing itself never fails; malformed input is handled locally
/// (skipped parameters, ignored sequences).
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("Invalid screen configuration: {reason}")]
    InvalidConfiguration { reason: String },
}
