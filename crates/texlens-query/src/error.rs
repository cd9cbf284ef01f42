//! Error types for the texlens-query crate.
//!
//! Filtering itself never fails: malformed terms fall back to text search
//! and an empty result is a normal outcome. Errors only arise at the edges,
//! when sessions are loaded or names are parsed.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or parsing search configuration.
#[derive(Debug, Error)]
pub enum TexlensError {
    /// The config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON config could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML config could not be parsed.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Colour-space class name not recognized.
    #[error("unknown color space class '{0}' (expected all, srgb, linear or normal_maps)")]
    UnknownColorSpace(String),
}

/// Result type for texlens-query operations.
pub type Result<T> = std::result::Result<T, TexlensError>;
