//! Error handling for Hearth XRay
//!
//! Registry operations never fail: rejection is reported through return
//! values. Errors only come from the ambient layers (configuration loading).

/// Main error type for Hearth XRay
#[derive(Debug, thiserror::Error)]
pub enum XrayError {
    #[error("IO error for {path}: {error}")]
    Io {
        path: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Config parse error in {context}: {error}")]
    ConfigParse {
        context: String,
        #[source]
        error: toml::de::Error,
    },

    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

/// Type alias for Results in Hearth XRay
pub type XrayResult<T> = Result<T, XrayError>;
