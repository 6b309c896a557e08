// File: src/functions.rs
//! Extracts builtin function signatures from the function reference file.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A function signature line: a lowercase name followed by a parenthesized
/// argument list, anchored at the start of the line, as in `abs({expr})`.
static FUNCTION_RX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z][a-z0-9_]*)\(([a-zA-Z0-9_, {}\[\]]*?)\)").unwrap());

/// Extract a formatted dictionary entry from a single documentation line.
/// Placeholder braces are dropped from the arguments (`{expr}` becomes
/// `expr`) while optional-argument brackets are kept as written.
pub fn extract_function(line: &str) -> Option<String> {
    let caps = FUNCTION_RX.captures(line)?;
    let name = caps.get(1)?.as_str();
    let args = caps.get(2)?.as_str().trim().replace(['{', '}'], "");
    Some(format!("function! {}({})", name, args))
}

/// Scan the function reference file for signature lines. Returns the
/// deduplicated set of formatted entries; distinct arities of the same
/// function each keep their own entry.
pub fn scan_file(path: &Path) -> Result<HashSet<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read function reference '{}'", path.display()))?;

    let mut entries = HashSet::new();
    for line in contents.lines() {
        if let Some(entry) = extract_function(line) {
            entries.insert(entry);
        }
    }
    Ok(entries)
}
