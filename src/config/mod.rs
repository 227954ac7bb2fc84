use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::lot::{BuildError, Parking, ParkingBuilder};

/// Lot layout as read from a TOML file:
///
/// ```toml
/// size = 10
/// pedestrian_exits = [8, 42, 85]
/// disabled_bays = [2, 47, 72]
/// ```
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct LotConfig {
    #[serde(default)]
    pub size: Option<usize>,
    #[serde(default)]
    pub pedestrian_exits: Vec<usize>,
    #[serde(default)]
    pub disabled_bays: Vec<usize>,
}

impl LotConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse lot layout")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lot layout: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid lot layout in {}", path.display()))
    }

    /// First readable layout file from the standard search locations
    pub fn load() -> Option<Self> {
        Self::load_first(get_config_paths())
    }

    /// First of `paths` that exists and parses; unreadable files are logged and skipped
    fn load_first(paths: impl IntoIterator<Item = PathBuf>) -> Option<Self> {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => return Some(config),
                Err(e) => {
                    tracing::warn!("Skipping layout file {}: {:#}", path.display(), e);
                }
            }
        }
        None
    }

    pub fn into_builder(self) -> ParkingBuilder {
        let mut builder = ParkingBuilder::new();
        if let Some(size) = self.size {
            builder = builder.with_square_size(size);
        }
        for exit in self.pedestrian_exits {
            builder = builder.with_pedestrian_exit(exit);
        }
        for bay in self.disabled_bays {
            builder = builder.with_disabled_bay(bay);
        }
        builder
    }

    pub fn build(self) -> Result<Parking, BuildError> {
        self.into_builder().build()
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("lanepark.toml"), PathBuf::from(".lanepark.toml")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("lanepark").join("config.toml"));
        paths.push(config_dir.join("lanepark.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".lanepark.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_layout() {
        let config = LotConfig::from_toml_str(
            "size = 10\npedestrian_exits = [8, 42, 85]\ndisabled_bays = [2, 47, 72]\n",
        )
        .unwrap();

        assert_eq!(config.size, Some(10));
        assert_eq!(config.pedestrian_exits, vec![8, 42, 85]);
        assert_eq!(config.build().unwrap().available_bays(), 97);
    }

    #[test]
    fn test_lists_default_to_empty() {
        let config = LotConfig::from_toml_str("size = 3").unwrap();
        assert!(config.pedestrian_exits.is_empty());
        assert!(config.disabled_bays.is_empty());
        assert_eq!(config.build().unwrap().available_bays(), 9);
    }

    #[test]
    fn test_missing_size_fails_to_build() {
        let config = LotConfig::from_toml_str("pedestrian_exits = [1]").unwrap();
        assert_eq!(config.build().unwrap_err(), BuildError::MissingSize);
    }

    #[test]
    fn test_rejects_negative_index() {
        assert!(LotConfig::from_toml_str("size = 3\npedestrian_exits = [-1]").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "size = 3").unwrap();
        writeln!(file, "pedestrian_exits = [4]").unwrap();
        writeln!(file, "disabled_bays = [0]").unwrap();

        let mut parking = LotConfig::load_from(file.path()).unwrap().build().unwrap();
        assert_eq!(parking.park('D'), Some(0));
        assert_eq!(parking.park('X'), Some(3));
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = LotConfig::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.toml"));
    }

    #[test]
    fn test_load_first_skips_missing_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let invalid = dir.path().join("invalid.toml");
        let valid = dir.path().join("valid.toml");
        std::fs::write(&invalid, "size = [not toml").unwrap();
        std::fs::write(&valid, "size = 4\npedestrian_exits = [5]").unwrap();

        let config = LotConfig::load_first([missing, invalid, valid]).unwrap();
        assert_eq!(config.size, Some(4));
        assert_eq!(config.pedestrian_exits, vec![5]);
    }

    #[test]
    fn test_load_first_with_only_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        let invalid = dir.path().join("invalid.toml");
        let negative = dir.path().join("negative.toml");
        std::fs::write(&invalid, "size = [not toml").unwrap();
        std::fs::write(&negative, "size = -3").unwrap();

        let missing = dir.path().join("missing.toml");
        assert_eq!(LotConfig::load_first([missing, invalid, negative]), None);
    }

    #[test]
    fn test_config_paths_start_local() {
        let paths = get_config_paths();
        assert_eq!(paths[0], PathBuf::from("lanepark.toml"));
        assert_eq!(paths[1], PathBuf::from(".lanepark.toml"));
    }
}
