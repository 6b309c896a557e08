// File: src/dict.rs
// Renders and persists completion dictionaries.
use anyhow::Result;
use fs2::FileExt;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use strum::EnumIter;

/// The dictionary categories, in generation order: commands are
/// extracted and written before the function reference is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum DictKind {
    Commands,
    Functions,
}

impl DictKind {
    pub fn default_filename(&self) -> &'static str {
        match self {
            DictKind::Commands => "builtincmds.dict",
            DictKind::Functions => "builtinfuncs.dict",
        }
    }
}

impl fmt::Display for DictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictKind::Commands => write!(f, "command"),
            DictKind::Functions => write!(f, "function"),
        }
    }
}

/// Helper to get a sidecar lock file path.
fn get_lock_path(file_path: &Path) -> PathBuf {
    let mut lock_path = file_path.to_path_buf();
    if let Some(ext) = lock_path.extension() {
        let mut new_ext = ext.to_os_string();
        new_ext.push(".lock");
        lock_path.set_extension(new_ext);
    } else {
        lock_path.set_extension("lock");
    }
    lock_path
}

/// Run `f` while holding an exclusive advisory lock next to `file_path`,
/// so concurrent runs cannot interleave their writes.
pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let lock_path = get_lock_path(file_path);
    let file = fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)?;

    file.lock_exclusive()?;
    let result = f();
    file.unlock()?;
    result
}

/// Atomic write: Write to .tmp file then rename
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

/// Write an entry set as a dictionary file, one entry per line in set
/// iteration order, with a trailing newline. Any previous file is replaced.
pub fn write_dict(path: &Path, entries: &HashSet<String>) -> Result<()> {
    let mut body = entries
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    body.push('\n');
    with_lock(path, || atomic_write(path, &body))
}
