//! Render configuration
//!
//! Holds the values both inventory views share: the CSS class that marks
//! item elements and the size of item images. Stored as JSON; every field
//! is optional and falls back to the defaults below.

use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "AVAKU_CONFIG";

pub const DEFAULT_ITEM_CLASS: &str = "item";
pub const DEFAULT_IMAGE_WIDTH: u32 = 120;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 165;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid item class '{0}'")]
    InvalidItemClass(String),

    #[error("Image dimensions must be non-zero (got {width}x{height})")]
    InvalidImageSize { width: u32, height: u32 },
}

/// Settings shared by the equipped and browser views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Class marking item elements, used for rendering and lookup
    pub item_class: String,

    /// Width attribute of item images
    pub image_width: u32,

    /// Height attribute of item images
    pub image_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            item_class: DEFAULT_ITEM_CLASS.to_string(),
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
        }
    }
}

impl RenderConfig {
    /// Parses and validates a config from JSON text
    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&json, path)?;
        tracing::info!(path = %path.display(), "loaded render config");
        Ok(config)
    }

    /// Resolves the config to use
    ///
    /// Precedence: explicit path > `AVAKU_CONFIG` > platform default file
    /// > built-in defaults. Only the platform default may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_from(
            explicit,
            std::env::var_os(CONFIG_ENV),
            default_config_path(),
        )
    }

    /// Applies the `resolve` precedence to already-read sources
    fn resolve_from(
        explicit: Option<&Path>,
        env_path: Option<OsString>,
        default_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = env_path {
            return Self::load(PathBuf::from(path));
        }

        match default_path {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                tracing::debug!("no render config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks the item class and image size
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_css_identifier(&self.item_class) {
            return Err(ConfigError::InvalidItemClass(self.item_class.clone()));
        }

        if self.image_width == 0 || self.image_height == 0 {
            return Err(ConfigError::InvalidImageSize {
                width: self.image_width,
                height: self.image_height,
            });
        }

        Ok(())
    }
}

/// `<config dir>/avaku/config.json`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("avaku").join("config.json"))
}

/// Accepts names usable as a `.class` selector
///
/// A leading `-` must be followed by a letter, `_` or another `-`.
fn is_css_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let start_ok = match (chars.next(), chars.next()) {
        (Some('-'), Some(second)) => second.is_ascii_alphabetic() || second == '_' || second == '-',
        (Some('-'), None) => false,
        (Some(first), _) => first.is_ascii_alphabetic() || first == '_',
        (None, _) => false,
    };

    start_ok
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && Selector::parse(&format!(".{name}")).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.item_class, "item");
        assert_eq!(config.image_width, 120);
        assert_eq!(config.image_height, 165);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RenderConfig::from_json(r#"{ "item_class": "wearable" }"#, Path::new("x")).unwrap();
        assert_eq!(config.item_class, "wearable");
        assert_eq!(config.image_width, DEFAULT_IMAGE_WIDTH);
    }

    #[test]
    fn test_rejects_bad_item_class() {
        for class in ["", "-", "-9", "9lives", "two words", "a.b"] {
            let config = RenderConfig {
                item_class: class.to_string(),
                ..RenderConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidItemClass(_))));
        }
    }

    #[test]
    fn test_accepts_dashed_item_classes() {
        for class in ["item", "_item", "-item", "worn-item-2"] {
            let config = RenderConfig {
                item_class: class.to_string(),
                ..RenderConfig::default()
            };
            assert!(config.validate().is_ok(), "{class} should be accepted");
        }
    }

    #[test]
    fn test_rejects_zero_size() {
        let result = RenderConfig::from_json(r#"{ "image_height": 0 }"#, Path::new("x"));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidImageSize { width: 120, height: 0 })
        ));
    }

    #[test]
    fn test_load_and_resolve_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "image_width": 60, "image_height": 80 }"#).unwrap();

        let config = RenderConfig::resolve(Some(file.path())).unwrap();
        assert_eq!((config.image_width, config.image_height), (60, 80));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(matches!(
            RenderConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    fn config_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolve_uses_env_path() {
        let env = config_file(r#"{ "item_class": "from-env" }"#);

        let config =
            RenderConfig::resolve_from(None, Some(env.path().as_os_str().to_owned()), None).unwrap();
        assert_eq!(config.item_class, "from-env");
    }

    #[test]
    fn test_resolve_explicit_path_beats_env() {
        let explicit = config_file(r#"{ "item_class": "explicit" }"#);
        let env = config_file(r#"{ "item_class": "from-env" }"#);

        let config = RenderConfig::resolve_from(
            Some(explicit.path()),
            Some(env.path().as_os_str().to_owned()),
            None,
        )
        .unwrap();
        assert_eq!(config.item_class, "explicit");
    }

    #[test]
    fn test_resolve_env_path_beats_default_file() {
        let env = config_file(r#"{ "item_class": "from-env" }"#);
        let default = config_file(r#"{ "item_class": "from-default" }"#);

        let config = RenderConfig::resolve_from(
            None,
            Some(env.path().as_os_str().to_owned()),
            Some(default.path().to_path_buf()),
        )
        .unwrap();
        assert_eq!(config.item_class, "from-env");
    }

    #[test]
    fn test_resolve_missing_env_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let result = RenderConfig::resolve_from(None, Some(missing.into_os_string()), None);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_resolve_uses_default_file_when_present() {
        let default = config_file(r#"{ "image_width": 90 }"#);

        let config =
            RenderConfig::resolve_from(None, None, Some(default.path().to_path_buf())).unwrap();
        assert_eq!(config.image_width, 90);
    }

    #[test]
    fn test_resolve_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("avaku").join("config.json");

        assert_eq!(
            RenderConfig::resolve_from(None, None, Some(absent)).unwrap(),
            RenderConfig::default()
        );
        assert_eq!(
            RenderConfig::resolve_from(None, None, None).unwrap(),
            RenderConfig::default()
        );
    }
}
