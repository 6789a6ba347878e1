use crate::codec::Codec;
use crate::errors::{AlphabetNotFoundError, find_closest_alphabet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 62 characters of the alphabet, in digit order
    pub chars: String,
    /// Default minimum length of encoded output (0 = no padding)
    #[serde(default)]
    pub padding: usize,
}

/// Named alphabets, built-in plus user overrides.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AlphabetRegistry {
    #[serde(default)]
    pub alphabets: BTreeMap<String, AlphabetConfig>,
    /// Override files that could not be loaded, one message each
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl AlphabetRegistry {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The built-in `standard` and `inverted` alphabets.
    pub fn load_default() -> Result<Self, toml::de::Error> {
        Self::from_toml(include_str!("../alphabets.toml"))
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Standard override locations, lowest priority first:
    /// 1. `~/.config/base62/alphabets.toml`
    /// 2. `./alphabets.toml`
    pub fn override_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("base62").join("alphabets.toml"));
        }
        paths.push(PathBuf::from("alphabets.toml"));
        paths
    }

    /// Load the built-in alphabets with user overrides from the standard
    /// locations.
    pub fn load_with_overrides() -> Result<Self, toml::de::Error> {
        let mut registry = Self::load_default()?;
        registry.apply_overrides(&Self::override_paths());
        Ok(registry)
    }

    /// Merge each existing file in `paths`, in order. Files that fail to
    /// load are recorded in `warnings` and skipped.
    pub fn apply_overrides(&mut self, paths: &[PathBuf]) {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(path) {
                Ok(other) => self.merge(other),
                Err(e) => self
                    .warnings
                    .push(format!("Failed to load config from {:?}: {}", path, e)),
            }
        }
    }

    /// Merge another registry into this one, overriding existing alphabets
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
        self.warnings.extend(other.warnings);
    }

    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Alphabet names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.alphabets.keys().cloned().collect()
    }

    /// Builds a validated codec for a named alphabet, with its configured
    /// padding.
    pub fn codec(&self, name: &str) -> Result<Codec, Box<dyn std::error::Error>> {
        let config = self.get_alphabet(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, &self.names());
            AlphabetNotFoundError::new(name, suggestion)
        })?;

        Ok(Codec::from_chars(&config.chars)?.with_padding(config.padding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{INVERTED_CHARS, STANDARD_CHARS};
    use crate::errors::AlphabetError;

    #[test]
    fn test_load_default_config() {
        let registry = AlphabetRegistry::load_default().unwrap();
        assert_eq!(registry.names(), vec!["inverted", "standard"]);
        assert_eq!(
            registry.get_alphabet("standard").unwrap().chars,
            STANDARD_CHARS
        );
        assert_eq!(
            registry.get_alphabet("inverted").unwrap().chars,
            INVERTED_CHARS
        );
        assert_eq!(registry.get_alphabet("standard").unwrap().padding, 0);
    }

    #[test]
    fn test_codec_from_registry() {
        let registry = AlphabetRegistry::load_default().unwrap();
        let codec = registry.codec("inverted").unwrap();
        assert_eq!(codec.encode_bytes(b"base62"), "uIp9av6y");
        assert_eq!(codec.padding(), 0);
    }

    #[test]
    fn test_codec_unknown_name_suggests() {
        let registry = AlphabetRegistry::load_default().unwrap();
        let err = registry.codec("standart").unwrap_err();
        let not_found = err.downcast_ref::<AlphabetNotFoundError>().unwrap();
        assert_eq!(not_found.name, "standart");
        assert_eq!(not_found.suggestion.as_deref(), Some("standard"));
    }

    #[test]
    fn test_codec_invalid_alphabet() {
        let registry = AlphabetRegistry::from_toml(
            r#"
            [alphabets.short]
            chars = "0123456789"
            "#,
        )
        .unwrap();
        let err = registry.codec("short").unwrap_err();
        assert_eq!(
            err.downcast_ref::<AlphabetError>(),
            Some(&AlphabetError::InvalidLength { actual: 10 })
        );
    }

    #[test]
    fn test_merge_configs() {
        let mut registry = AlphabetRegistry::load_default().unwrap();
        let user = AlphabetRegistry::from_toml(&format!(
            r#"
            [alphabets.standard]
            chars = "{}"
            padding = 8

            [alphabets.reversed]
            chars = "{}"
            "#,
            STANDARD_CHARS,
            STANDARD_CHARS.chars().rev().collect::<String>()
        ))
        .unwrap();

        registry.merge(user);

        assert_eq!(registry.names(), vec!["inverted", "reversed", "standard"]);
        let standard = registry.codec("standard").unwrap();
        assert_eq!(standard.padding(), 8);
        assert_eq!(standard.encode_u64(61), "0000000z");

        let reversed = registry.codec("reversed").unwrap();
        assert_eq!(reversed.encode_u64(1), "y");
    }

    #[test]
    fn test_apply_overrides_records_bad_files() {
        let dir = std::env::temp_dir().join(format!("base62-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let bad = dir.join("bad.toml");
        let good = dir.join("good.toml");
        std::fs::write(&bad, "alphabets = 3").unwrap();
        std::fs::write(
            &good,
            format!("[alphabets.extra]\nchars = \"{}\"\npadding = 2\n", INVERTED_CHARS),
        )
        .unwrap();

        let mut registry = AlphabetRegistry::load_default().unwrap();
        registry.apply_overrides(&[bad.clone(), dir.join("missing.toml"), good]);

        assert_eq!(registry.warnings.len(), 1);
        assert!(registry.warnings[0].contains("bad.toml"));
        assert_eq!(registry.get_alphabet("extra").unwrap().padding, 2);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
