use thiserror::Error;

/// Rejected body construction.
#[derive(Debug, Error)]
pub enum BodyError {
    /// A composite body needs at least one member.
    #[error("composite body requires at least one member")]
    EmptyComposite,
    /// Width and height must both be positive and finite.
    #[error("invalid body size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    /// Settings document could not be parsed.
    #[error("invalid body settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}
