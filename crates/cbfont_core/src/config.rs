//! Persisted editor configuration.
//!
//! The cell geometry is fixed per font project; this stores the operator's
//! choice between runs as a TOML file in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{CellSize, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FontConfig {
    pub cell: CellSize,
}

impl FontConfig {
    const FILE_NAME: &'static str = "cbfont.toml";

    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "cbfont").map(|dirs| dirs.config_dir().join(Self::FILE_NAME))
    }

    /// Load the stored configuration, falling back to the 16x16 default.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("falling back to default config: {err}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        // Reject geometries the codec cannot represent.
        CellSize::new(config.cell.rows, config.cell.cols)?;
        Ok(config)
    }

    /// Store the configuration in the platform config directory.
    pub fn store(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.store_to(&path)
    }

    /// Write to a temp file, then move it over the real one.
    pub fn store_to(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self)?;

        let mut write_name = path.as_os_str().to_os_string();
        write_name.push(".new");
        let write_name = PathBuf::from(write_name);

        fs::write(&write_name, text)?;
        fs::rename(&write_name, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CbFontError;

    #[test]
    fn test_config_round_trip() {
        let dir = std::env::temp_dir().join(format!("cbfont_config_test_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cbfont.toml");

        let config = FontConfig {
            cell: CellSize::SIZE_32X32,
        };
        config.store_to(&path).unwrap();

        let loaded = FontConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_config_rejects_bad_geometry() {
        let dir = std::env::temp_dir().join(format!("cbfont_config_bad_test_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cbfont.toml");

        fs::write(&path, "[cell]\nrows = 12\ncols = 16\n").unwrap();
        assert!(matches!(
            FontConfig::load_from(&path).unwrap_err(),
            CbFontError::InvalidCellSize { rows: 12, cols: 16 }
        ));

        fs::remove_dir_all(&dir).unwrap();
    }
}
