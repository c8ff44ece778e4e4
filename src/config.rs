//! Runtime configuration resolved from the environment.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".school-manager";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "school.sqlite";

/// Overrides the database location.
pub const DB_PATH_ENV: &str = "SCHOOL_MANAGER_DB";
/// Set to `0`, `false` or `no` to skip generating test data.
pub const SEED_ENV: &str = "SCHOOL_MANAGER_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    /// Populate an empty database with generated groups, courses and students.
    pub seed: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match lookup(DB_PATH_ENV).filter(|value| !value.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };
        let seed = lookup(SEED_ENV)
            .map(|value| !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Ok(Self { db_path, seed })
    }
}

/// Resolve the absolute path to the SQLite database inside the user's home.
fn default_db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_and_seed_flag() {
        let config = Config::from_lookup(|key| match key {
            DB_PATH_ENV => Some("/tmp/school.sqlite".into()),
            SEED_ENV => Some("False".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/school.sqlite"));
        assert!(!config.seed);
    }

    #[test]
    fn seed_defaults_to_enabled() {
        let config = Config::from_lookup(|key| match key {
            DB_PATH_ENV => Some("school.sqlite".into()),
            _ => None,
        })
        .unwrap();
        assert!(config.seed);
    }
}
