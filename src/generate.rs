// File: src/generate.rs
//! Drives a full dictionary generation run.

use crate::commands;
use crate::config::Config;
use crate::dict::{self, DictKind};
use crate::functions;
use anyhow::{Context, Result};
use std::path::Path;
use strum::IntoEnumIterator;

/// What a generation run produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Files read during the command scan.
    pub files_scanned: usize,
    /// Distinct command names written.
    pub commands: usize,
    /// Distinct function entries written.
    pub functions: usize,
}

/// Generate both dictionaries under `output_dir` from the documentation in
/// `doc_root`. The command dictionary is written before the function
/// reference is opened, so a missing reference file still leaves a fresh
/// command dictionary behind.
pub fn run(doc_root: &Path, output_dir: &Path, config: &Config) -> Result<Summary> {
    let mut summary = Summary::default();

    for kind in DictKind::iter() {
        let entries = match kind {
            DictKind::Commands => {
                let (entries, files_scanned) =
                    commands::scan_dir(doc_root, &config.ignore_prefixes)?;
                log::info!(
                    "Found {} command names across {} files",
                    entries.len(),
                    files_scanned
                );
                summary.files_scanned = files_scanned;
                summary.commands = entries.len();
                entries
            }
            DictKind::Functions => {
                let entries = functions::scan_file(&doc_root.join(&config.function_doc))?;
                log::info!("Found {} function signatures", entries.len());
                summary.functions = entries.len();
                entries
            }
        };

        let path = output_dir.join(config.dict_filename(kind));
        dict::write_dict(&path, &entries).with_context(|| {
            format!("Failed to write {} dictionary '{}'", kind, path.display())
        })?;
        log::info!("Wrote {} dictionary: {}", kind, path.display());
    }

    Ok(summary)
}
