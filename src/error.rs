use thiserror::Error;

/// Errors raised while building a counting session.
///
/// Per-frame processing never fails; only construction and configuration
/// loading do.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid geometry for zone `{zone}`: {reason}")]
    InvalidGeometry { zone: String, reason: String },

    #[error("invalid zone layout: {0}")]
    InvalidLayout(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
