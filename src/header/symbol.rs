//! Symbol and display names derived from config file paths

use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{GeneratorError, Result};

/// Appended to the file stem to form the C array identifier
pub const SYMBOL_SUFFIX: &str = "ConfigurationData";

static C_IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Names generated for one config input
///
/// `symbol` names the byte array in the header, `display` is the string
/// placed in `cameraConfigString` at the same index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSymbol {
    pub symbol: String,
    pub display: String,
}

impl ConfigSymbol {
    /// Derive names from a file path: `dir/ref_ar0231_pass1.cfg` becomes
    /// `ref_ar0231_pass1ConfigurationData` / `ref_ar0231_pass1`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| GeneratorError::InvalidInputName {
                path: path.to_path_buf(),
            })?;

        Ok(Self::from_symbol(format!("{stem}{SYMBOL_SUFFIX}")))
    }

    /// Build from an already-suffixed symbol, stripping the trailing suffix
    /// for the display name.
    pub fn from_symbol(symbol: String) -> Self {
        let display = symbol
            .strip_suffix(SYMBOL_SUFFIX)
            .unwrap_or(&symbol)
            .to_string();
        Self { symbol, display }
    }

    /// Whether the symbol can be used verbatim as a C identifier
    pub fn is_c_identifier(&self) -> bool {
        C_IDENTIFIER_RE.is_match(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_from_cfg_path() {
        let sym = ConfigSymbol::from_path(Path::new("../camera_configs/c_ov10640_pass1.cfg"))
            .unwrap();
        assert_eq!(sym.symbol, "c_ov10640_pass1ConfigurationData");
        assert_eq!(sym.display, "c_ov10640_pass1");
        assert!(sym.is_c_identifier());
    }

    #[test]
    fn test_only_last_extension_dropped() {
        let sym = ConfigSymbol::from_path(Path::new("cfg/sensor.v2.cfg")).unwrap();
        assert_eq!(sym.symbol, "sensor.v2ConfigurationData");
        assert_eq!(sym.display, "sensor.v2");
        // Derived names are not rejected, only flagged
        assert!(!sym.is_c_identifier());
    }

    #[test]
    fn test_file_without_extension() {
        let sym = ConfigSymbol::from_path(Path::new("sensor")).unwrap();
        assert_eq!(sym.symbol, "sensorConfigurationData");
        assert_eq!(sym.display, "sensor");
    }

    #[test]
    fn test_display_strips_only_trailing_suffix() {
        let sym = ConfigSymbol::from_path(Path::new("ConfigurationData_x.cfg")).unwrap();
        assert_eq!(sym.symbol, "ConfigurationData_xConfigurationData");
        assert_eq!(sym.display, "ConfigurationData_x");
    }

    #[test]
    fn test_path_without_file_name() {
        let err = ConfigSymbol::from_path(Path::new("/")).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidInputName { .. }));
    }

    #[test]
    fn test_identifier_check() {
        assert!(ConfigSymbol::from_symbol("_a1".to_string()).is_c_identifier());
        assert!(!ConfigSymbol::from_symbol("1abc".to_string()).is_c_identifier());
        assert!(!ConfigSymbol::from_symbol("a-b".to_string()).is_c_identifier());
    }
}
