//! Error types for tronic-core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a system colour palette.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The palette file could not be read.
    #[error("failed to read palette {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML palette did not parse.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML palette did not parse.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension names no supported format.
    #[error("unsupported palette format: {0:?} (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_error_io_display() {
        let err = ThemeError::Io {
            path: PathBuf::from("palette.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let text = err.to_string();
        assert!(text.contains("palette.yaml"));
        assert!(text.contains("missing"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_theme_error_unsupported_display() {
        let err = ThemeError::UnsupportedFormat(PathBuf::from("palette.ini"));
        assert!(err.to_string().contains("palette.ini"));
    }
}
