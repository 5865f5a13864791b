//! Generator configuration

mod manifest;

pub use manifest::{CameraConfigManifest, BUILTIN_MANIFEST};
