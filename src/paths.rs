// File: src/paths.rs
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

pub struct AppPaths;

impl AppPaths {
    /// Returns the ProjectDirs struct, common to all path lookups.
    fn get_proj_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "trougnouf", "vimdict")
    }

    /// Helper to ensure a directory exists before returning it.
    fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
        if !path.exists() {
            fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(path)
    }

    /// Determines the config directory from an environment override or the
    /// OS default.
    fn resolve_config_base() -> Option<PathBuf> {
        // 1. Test Override
        if let Ok(test_dir) = env::var("VIMDICT_TEST_DIR") {
            return Some(PathBuf::from(test_dir));
        }

        // 2. Standard OS location
        let proj = Self::get_proj_dirs()?;
        Some(proj.config_dir().to_path_buf())
    }

    pub fn get_config_dir() -> Result<PathBuf> {
        let path = Self::resolve_config_base()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::ensure_exists(path)
    }

    pub fn get_config_file_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }
}
