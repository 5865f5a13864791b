//! Error types for header generation
//!
//! Every failure the generator can hit is an I/O failure on a specific path,
//! or a manifest that cannot be read. Variants carry the path so the CLI can
//! print a useful diagnostic without extra context.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while collecting inputs or writing the generated header
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Failed to read config input {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open output header {} for writing: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output header {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read existing output header {}: {source}", path.display())]
    ReadOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Generated header {} is out of date, rerun cfg2header", path.display())]
    HeaderStale { path: PathBuf },

    #[error("Generated header {} has not been generated", path.display())]
    HeaderMissing { path: PathBuf },

    #[error("Config input {} has no usable file name", path.display())]
    InvalidInputName { path: PathBuf },

    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest: {source}")]
    ManifestParse {
        #[from]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
