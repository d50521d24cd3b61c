//! XRay configuration
//!
//! Loaded from TOML. Every field has a default so an empty file is valid.

use crate::error::{XrayError, XrayResult};
use crate::variant::OutlineColor;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A material tag to resolve into a default variant at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultOreEntry {
    pub dictionary_name: String,
    pub color: [u8; 3],
    #[serde(default)]
    pub draw: bool,
}

impl DefaultOreEntry {
    pub fn new(dictionary_name: &str, color: [u8; 3], draw: bool) -> Self {
        Self {
            dictionary_name: dictionary_name.to_string(),
            color,
            draw,
        }
    }

    pub fn outline_color(&self) -> OutlineColor {
        OutlineColor::from(self.color)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XrayConfig {
    /// Ores seeded as defaults; the built-in table when absent
    pub default_ores: Vec<DefaultOreEntry>,
    /// Log the store dump after seeding (debug level)
    pub dump_after_seed: bool,
}

impl Default for XrayConfig {
    fn default() -> Self {
        Self {
            default_ores: default_ore_entries(),
            dump_after_seed: false,
        }
    }
}

impl XrayConfig {
    pub fn from_toml_str(source: &str) -> XrayResult<Self> {
        let config: XrayConfig = toml::from_str(source).map_err(|error| XrayError::ConfigParse {
            context: "xray config".to_string(),
            error,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> XrayResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|error| XrayError::Io {
            path: path.display().to_string(),
            error,
        })?;
        log::info!("Loading xray config from {}", path.display());
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> XrayResult<()> {
        for (index, entry) in self.default_ores.iter().enumerate() {
            if entry.dictionary_name.trim().is_empty() {
                return Err(XrayError::InvalidConfig {
                    field: format!("default_ores[{}].dictionary_name", index),
                    value: entry.dictionary_name.clone(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Built-in ore table
pub fn default_ore_entries() -> Vec<DefaultOreEntry> {
    vec![
        DefaultOreEntry::new("oreGold", [255, 255, 0], false),
        DefaultOreEntry::new("oreIron", [170, 117, 37], false),
        DefaultOreEntry::new("oreDiamond", [0, 0, 255], true),
        DefaultOreEntry::new("oreRedstone", [255, 0, 0], false),
        DefaultOreEntry::new("oreLapis", [0, 0, 140], false),
        DefaultOreEntry::new("oreCoal", [0, 0, 0], false),
        DefaultOreEntry::new("oreEmerald", [0, 255, 0], false),
        DefaultOreEntry::new("oreQuartz", [255, 255, 255], false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_builtin_table() {
        let config = XrayConfig::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, XrayConfig::default());
        assert_eq!(config.default_ores.len(), 8);
    }

    #[test]
    fn test_parse_entries() {
        let config = XrayConfig::from_toml_str(
            r#"
            dump_after_seed = true

            [[default_ores]]
            dictionary_name = "oreCopper"
            color = [200, 100, 50]
            draw = true

            [[default_ores]]
            dictionary_name = "oreTin"
            color = [180, 180, 200]
            "#,
        )
        .expect("config should parse");

        assert!(config.dump_after_seed);
        assert_eq!(
            config.default_ores,
            vec![
                DefaultOreEntry::new("oreCopper", [200, 100, 50], true),
                DefaultOreEntry::new("oreTin", [180, 180, 200], false),
            ]
        );
        assert_eq!(config.default_ores[0].outline_color(), OutlineColor::new(200, 100, 50));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let err = XrayConfig::from_toml_str(
            r#"
            [[default_ores]]
            dictionary_name = " "
            color = [0, 0, 0]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, XrayError::InvalidConfig { .. }));

        let err = XrayConfig::from_toml_str("default_ores = 3").unwrap_err();
        assert!(matches!(err, XrayError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[[default_ores]]\ndictionary_name = \"oreSilver\"\ncolor = [192, 192, 192]")
            .expect("write config");

        let config = XrayConfig::load(file.path()).expect("config should load");
        assert_eq!(config.default_ores.len(), 1);
        assert_eq!(config.default_ores[0].dictionary_name, "oreSilver");

        let missing = XrayConfig::load(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(missing, XrayError::Io { .. }));
    }
}
