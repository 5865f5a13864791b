//! cfg2header - Camera config header generator
//!
//! Embeds camera module configuration files into a single C header so the
//! device-side library can look them up by name without touching the
//! filesystem. Config contents are opaque: they are copied byte for byte
//! into string literals, never parsed.
//!
//! # Output
//!
//! ```text
//! const char c_ov10640_pass1ConfigurationData[<len + 1>] =
//! "line one\n"
//! "line two\n"
//! ;
//! ...
//! const char * cameraConfigTable[N] = { <arrays, input order> };
//! const char * cameraConfigString[N] = { "<names, input order>" };
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use cfg2header::{CameraConfigManifest, HeaderGenerator};
//!
//! let manifest = CameraConfigManifest::builtin()?.resolve(Path::new("."));
//! let summary = HeaderGenerator::from_manifest(&manifest).generate()?;
//! ```

pub mod config;
pub mod error;
pub mod header;

// Re-export main types
pub use config::CameraConfigManifest;
pub use error::GeneratorError;
pub use header::{
    CheckOutcome, ConfigSymbol, GeneratedHeader, GenerationSummary, HeaderEntry, HeaderGenerator,
    PlannedEntry,
};
