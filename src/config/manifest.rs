//! Camera config manifest
//!
//! The manifest names the ordered list of config files to embed and the
//! header to write. A default manifest is compiled into the binary so a bare
//! invocation always produces the same header.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{GeneratorError, Result};

/// Manifest compiled into the binary
pub const BUILTIN_MANIFEST: &str = include_str!("../../config/camera_modules.yaml");

/// Ordered inputs and the output header path
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CameraConfigManifest {
    pub output: PathBuf,
    #[serde(default)]
    pub inputs: Vec<PathBuf>,
}

impl CameraConfigManifest {
    /// The manifest shipped with the generator
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_MANIFEST)
    }

    /// Load a manifest from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| GeneratorError::ManifestRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_yaml(&content)
    }

    /// Load a manifest from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let manifest: CameraConfigManifest = serde_yaml::from_str(content)?;
        Ok(manifest)
    }

    /// Load a manifest and resolve its paths.
    ///
    /// With no manifest file the builtin one is used. Relative paths are
    /// anchored at `root` when given, otherwise at the manifest file's
    /// directory, or at `.` for the builtin manifest.
    pub fn load(manifest: Option<&Path>, root: Option<&Path>) -> Result<Self> {
        let (loaded, default_root) = match manifest {
            Some(path) => {
                let dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
                (Self::from_file(path)?, dir)
            }
            None => (Self::builtin()?, PathBuf::from(".")),
        };

        let root = root.map(Path::to_path_buf).unwrap_or(default_root);
        tracing::debug!(root = %root.display(), inputs = loaded.inputs.len(), "Manifest loaded");
        Ok(loaded.resolve(&root))
    }

    /// Anchor relative paths at `root`. Absolute paths are kept as-is.
    pub fn resolve(&self, root: &Path) -> Self {
        Self {
            output: root.join(&self.output),
            inputs: self.inputs.iter().map(|p| root.join(p)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_manifest() {
        let manifest = CameraConfigManifest::builtin().unwrap();
        assert_eq!(manifest.output, PathBuf::from("camera_modules_config.h"));
        assert_eq!(manifest.inputs.len(), 16);
        assert_eq!(
            manifest.inputs[0],
            PathBuf::from("camera_configs/c_ov10640_pass1.cfg")
        );
        assert_eq!(
            manifest.inputs[15],
            PathBuf::from("camera_configs/ref_ar0231rccbbae_pass2.cfg")
        );
    }

    #[test]
    fn test_parse_manifest() {
        let yaml = r#"
output: out/camera.h
inputs:
  - a_pass1.cfg
  - /abs/b_pass1.cfg
"#;
        let manifest = CameraConfigManifest::from_yaml(yaml).unwrap();
        let resolved = manifest.resolve(Path::new("/work"));

        assert_eq!(resolved.output, PathBuf::from("/work/out/camera.h"));
        assert_eq!(
            resolved.inputs,
            vec![
                PathBuf::from("/work/a_pass1.cfg"),
                PathBuf::from("/abs/b_pass1.cfg")
            ]
        );
    }

    #[test]
    fn test_inputs_default_to_empty() {
        let manifest = CameraConfigManifest::from_yaml("output: empty.h\n").unwrap();
        assert!(manifest.inputs.is_empty());
    }

    #[test]
    fn test_missing_output_rejected() {
        let err = CameraConfigManifest::from_yaml("inputs: []\n").unwrap_err();
        assert!(matches!(err, GeneratorError::ManifestParse { .. }));
    }

    #[test]
    fn test_load_builtin_defaults_to_current_dir() {
        let manifest = CameraConfigManifest::load(None, None).unwrap();
        assert_eq!(manifest.output, Path::new(".").join("camera_modules_config.h"));
        assert_eq!(
            manifest.inputs[0],
            Path::new(".").join("camera_configs/c_ov10640_pass1.cfg")
        );
    }

    #[test]
    fn test_load_file_defaults_to_manifest_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.yaml");
        std::fs::write(&path, "output: out.h\ninputs:\n  - cfg/a_pass1.cfg\n").unwrap();

        let manifest = CameraConfigManifest::load(Some(&path), None).unwrap();
        assert_eq!(manifest.output, dir.path().join("out.h"));
        assert_eq!(manifest.inputs, vec![dir.path().join("cfg/a_pass1.cfg")]);
    }

    #[test]
    fn test_load_root_overrides_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.yaml");
        std::fs::write(&path, "output: out.h\ninputs:\n  - a_pass1.cfg\n").unwrap();

        let manifest = CameraConfigManifest::load(Some(&path), Some(Path::new("/build"))).unwrap();
        assert_eq!(manifest.output, PathBuf::from("/build/out.h"));
        assert_eq!(manifest.inputs, vec![PathBuf::from("/build/a_pass1.cfg")]);

        let builtin = CameraConfigManifest::load(None, Some(Path::new("/build"))).unwrap();
        assert_eq!(builtin.output, PathBuf::from("/build/camera_modules_config.h"));
    }

    #[test]
    fn test_missing_manifest_file() {
        let err = CameraConfigManifest::from_file(Path::new("/nonexistent/manifest.yaml"))
            .unwrap_err();
        assert!(matches!(err, GeneratorError::ManifestRead { .. }));
    }
}
