//! Runner configuration loaded from TOML.
//!
//! ```toml
//! color = true
//! lessons = ["abstraction", "polymorphism"]
//! coffee_water = 20
//! ```
//!
//! Every field is optional; an absent file means all lessons with color.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::lesson::{Lesson, DEFAULT_COFFEE_WATER};

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "oop-lessons.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LessonConfig {
    pub color: bool,
    pub lessons: Vec<Lesson>,
    /// Water for the abstraction lesson's coffee machine.
    pub coffee_water: i64,
}

impl Default for LessonConfig {
    fn default() -> Self {
        LessonConfig {
            color: true,
            lessons: Lesson::ALL.to_vec(),
            coffee_water: DEFAULT_COFFEE_WATER,
        }
    }
}

impl LessonConfig {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(path, &text)?;
        debug!(path = %path.display(), lessons = config.lessons.len(), "loaded config");
        Ok(config)
    }

    /// An explicit path must exist. Without one, the default file is used
    /// when present and defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_cover_every_lesson() {
        let config = LessonConfig::default();
        assert!(config.color);
        assert_eq!(config.lessons, Lesson::ALL);
        assert_eq!(config.coffee_water, 20);
    }

    #[test]
    fn coffee_water_is_configurable() {
        let config = LessonConfig::from_toml(Path::new("x.toml"), "coffee_water = -3").unwrap();
        assert_eq!(config.coffee_water, -3);
        assert_eq!(config.lessons, Lesson::ALL);
    }

    #[test]
    fn empty_file_means_defaults() {
        let config = LessonConfig::from_toml(Path::new("x.toml"), "").unwrap();
        assert_eq!(config, LessonConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = LessonConfig::from_toml(
            Path::new("x.toml"),
            r#"lessons = ["polymorphism", "abstraction"]"#,
        )
        .unwrap();
        assert!(config.color);
        assert_eq!(config.lessons, [Lesson::Polymorphism, Lesson::Abstraction]);
    }

    #[test]
    fn unknown_lesson_fails_to_parse() {
        let err = LessonConfig::from_toml(Path::new("x.toml"), r#"lessons = ["closures"]"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_key_fails_to_parse() {
        let err = LessonConfig::from_toml(Path::new("x.toml"), "colour = false").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "color = false").unwrap();
        writeln!(file, r#"lessons = ["encapsulation"]"#).unwrap();

        let config = LessonConfig::load_or_default(Some(file.path())).unwrap();
        assert!(!config.color);
        assert_eq!(config.lessons, [Lesson::Encapsulation]);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = LessonConfig::load_or_default(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
