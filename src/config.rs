// File: ./src/config.rs
// Handles configuration loading and defaults.
use crate::dict::DictKind;
use crate::paths::AppPaths;
use anyhow::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

fn default_ignore_prefixes() -> Vec<String> {
    vec!["os".to_string(), "tags".to_string()]
}

fn default_function_doc() -> String {
    "eval.txt".to_string()
}

fn default_commands_dict() -> String {
    DictKind::Commands.default_filename().to_string()
}

fn default_functions_dict() -> String {
    DictKind::Functions.default_filename().to_string()
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Filename prefixes excluded from the command scan. The stock Vim
    /// doc tree ships platform notes (os_*.txt) and a tags index that
    /// only add noise to the dictionary.
    #[serde(default = "default_ignore_prefixes")]
    pub ignore_prefixes: Vec<String>,

    /// Documentation file listing the builtin function signatures.
    #[serde(default = "default_function_doc")]
    pub function_doc: String,

    #[serde(default = "default_commands_dict")]
    pub commands_dict: String,
    #[serde(default = "default_functions_dict")]
    pub functions_dict: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            ignore_prefixes: default_ignore_prefixes(),
            function_doc: default_function_doc(),
            commands_dict: default_commands_dict(),
            functions_dict: default_functions_dict(),
        }
    }
}

impl Config {
    /// Load the configuration from an explicit path.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        // Explicitly detect missing file so callers can fall back to the
        // built-in defaults.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        // Read the file with contextualized error (covers permission/IO issues).
        let contents = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        // Parse TOML with contextualized error (covers syntax issues).
        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Load the configuration from the per-user config path.
    pub fn load_default() -> Result<Self> {
        let Ok(path) = AppPaths::get_config_file_path() else {
            // No resolvable config location behaves like a missing file.
            return Err(anyhow::anyhow!("Config file not found"));
        };
        Self::load_from(&path)
    }

    /// Helper to detect whether an anyhow::Error indicates that the config
    /// file was missing, as opposed to unreadable or malformed.
    pub fn is_missing_config_error(err: &Error) -> bool {
        // Fast textual check for the explicit not-found message.
        if err.to_string().contains("Config file not found") {
            return true;
        }

        // Walk the error chain and look for an underlying IO NotFound.
        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// Output filename for the given dictionary kind.
    pub fn dict_filename(&self, kind: DictKind) -> &str {
        match kind {
            DictKind::Commands => &self.commands_dict,
            DictKind::Functions => &self.functions_dict,
        }
    }
}
