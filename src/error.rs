//! Error types for the modeline crate.
//!
//! Rendering never fails; these errors only come out of setup.

use thiserror::Error;

/// Result type alias using modeline's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a status line.
#[derive(Debug, Error)]
pub enum Error {
    /// The options file is not valid TOML or has the wrong shape.
    #[error("failed to parse options: {0}")]
    Parse(#[from] toml::de::Error),

    /// A threshold was given for a section that does not exist.
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// A threshold of zero columns would never truncate and is rejected.
    #[error("threshold for section `{0}` must be greater than zero")]
    ZeroThreshold(String),

    /// The host refused to apply the requested display settings.
    #[error("failed to apply host display settings: {0}")]
    HostSettings(#[source] anyhow::Error),
}
