//! Error type shared by every fallible operation in the crate.

/// Errors returned by range configuration, numeric parsing and state restore.
#[derive(Debug, thiserror::Error)]
pub enum SeekBarError {
    #[error("numeric kind '{0}' is not supported")]
    UnsupportedNumericKind(String),
    #[error("'{text}' is not a valid {kind} value")]
    InvalidNumber { kind: String, text: String },
    #[error("range bounds must be finite")]
    NonFiniteBound,
    #[error("thumb asset must have a positive size, got {width}x{height}")]
    InvalidThumbAsset { width: f64, height: f64 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("malformed saved state: {0}")]
    SavedState(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeekBarError>;
