//! System colour palette.
//!
//! Controls draw bevels and default backgrounds from a small set of desktop
//! system colours. The palette defaults to the classic light desktop scheme and
//! can be loaded from a YAML or TOML file; keys left out keep their defaults.
//!
//! ```yaml
//! control: "#f0f0f0"
//! control_light: "#e3e3e3"
//! control_dark: "#a0a0a0"
//! ```

use crate::color::Color;
use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Desktop system colours used by the controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemColors {
    /// Face colour of 3D elements
    pub control: Color,
    /// Light edge of 3D elements
    pub control_light: Color,
    /// Shadow edge of 3D elements
    pub control_dark: Color,
}

impl Default for SystemColors {
    fn default() -> Self {
        Self::light()
    }
}

impl SystemColors {
    /// Classic light desktop scheme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            control: Color::from_rgb8(0xf0, 0xf0, 0xf0),
            control_light: Color::from_rgb8(0xe3, 0xe3, 0xe3),
            control_dark: Color::from_rgb8(0xa0, 0xa0, 0xa0),
        }
    }

    /// Parse a palette from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(serde_yaml_ng::from_str(source)?)
    }

    /// Parse a palette from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a palette file, choosing the parser from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ThemeError> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str,
            Some("toml") => Self::from_toml_str,
            _ => return Err(ThemeError::UnsupportedFormat(path.to_path_buf())),
        };

        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let colors = parse(&source)?;
        log::info!("loaded system palette from {}", path.display());
        Ok(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_light_palette_values() {
        let p = SystemColors::default();
        assert_eq!(p.control.to_hex(), "#f0f0f0");
        assert_eq!(p.control_light.to_hex(), "#e3e3e3");
        assert_eq!(p.control_dark.to_hex(), "#a0a0a0");
    }

    #[test]
    fn test_from_yaml_partial_keeps_defaults() {
        let p = SystemColors::from_yaml_str("control_dark: \"#404040\"\n").unwrap();
        assert_eq!(p.control_dark.to_hex(), "#404040");
        assert_eq!(p.control_light, SystemColors::light().control_light);
    }

    #[test]
    fn test_from_toml() {
        let p = SystemColors::from_toml_str(
            "control = \"#101010\"\ncontrol_light = \"#202020\"\n",
        )
        .unwrap();
        assert_eq!(p.control.to_hex(), "#101010");
        assert_eq!(p.control_light.to_hex(), "#202020");
        assert_eq!(p.control_dark, SystemColors::light().control_dark);
    }

    #[test]
    fn test_bad_color_is_error() {
        let err = SystemColors::from_yaml_str("control: \"#zzzzzz\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::Yaml(_)));

        let err = SystemColors::from_toml_str("control = \"#12\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::Toml(_)));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let err = SystemColors::load("palette.ini").unwrap_err();
        assert!(matches!(err, ThemeError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("tronic-core-missing-palette.yaml");
        let _ = std::fs::remove_file(&path);
        let err = SystemColors::load(&path).unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }

    #[test]
    fn test_load_yaml_file() {
        let path = std::env::temp_dir().join(format!(
            "tronic-core-palette-{}.yml",
            std::process::id()
        ));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "control_light: \"#cccccc\"").unwrap();
        }
        let p = SystemColors::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(p.control_light.to_hex(), "#cccccc");
    }
}
