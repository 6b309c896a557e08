// File: src/commands.rs
//! Extracts Ex command names from the documentation tree.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A command reference line: `:name` at the start of the line, optionally
/// preceded by a bracketed count/range marker and optionally ending in a
/// bracketed abbreviation suffix, as in `:[N]bd[elete]`.
static COMMAND_RX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:(\[\w+\])?(?P<word>[a-z]\w*(\[\w+\])?)").unwrap());

/// Extract the command token from a single documentation line.
/// Brackets are stripped from the captured name (`bd[elete]` becomes
/// `bdelete`); lines that do not look like a command reference yield None.
pub fn extract_command(line: &str) -> Option<String> {
    let caps = COMMAND_RX.captures(line)?;
    // A matching line without the named group is skipped, never an error.
    let word = caps.name("word")?;
    Some(word.as_str().replace('[', "").replace(']', ""))
}

/// Scan every regular file directly inside `doc_root` for command tokens,
/// skipping filenames that start with one of `ignore_prefixes`. Subdirectories
/// are not descended into. Returns the deduplicated token set and the number
/// of files read.
pub fn scan_dir(doc_root: &Path, ignore_prefixes: &[String]) -> Result<(HashSet<String>, usize)> {
    let mut entries = HashSet::new();
    let mut files_scanned = 0;

    let dir = fs::read_dir(doc_root).with_context(|| {
        format!(
            "Failed to read documentation directory '{}'",
            doc_root.display()
        )
    })?;

    for dir_entry in dir {
        let dir_entry = dir_entry?;
        let name = dir_entry.file_name();
        let name = name.to_string_lossy();
        if ignore_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
        {
            log::debug!("Skipping '{}' (ignored prefix)", name);
            continue;
        }

        let path = dir_entry.path();
        if !path.is_file() {
            continue;
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        for line in contents.lines() {
            if let Some(token) = extract_command(line) {
                entries.insert(token);
            }
        }
        files_scanned += 1;
    }

    Ok((entries, files_scanned))
}
