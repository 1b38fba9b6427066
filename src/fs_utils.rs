use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// List every regular file under `root`, recursively, in traversal order.
///
/// Directory entries that cannot be read are silently skipped. Symlinks are
/// handled by walkdir's defaults (not followed); no cycle detection beyond
/// that is attempted.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::PathNotFound(root.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}

/// The file's extension, lowercased, with its leading dot ("" when absent).
///
/// A dotfile such as `.bashrc` has no extension and yields "".
pub fn file_extension(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => String::new(),
    }
}

/// Retain only the paths whose extension is in the allowed set.
///
/// Comparison is case-insensitive on the file side; `allowed` entries are
/// expected lowercase with leading dot (the CLI normalizes them). A file
/// without an extension matches only an explicit "" entry.
pub fn filter_by_extension(files: Vec<PathBuf>, allowed: &[String]) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|f| allowed.iter().any(|a| *a == file_extension(f)))
        .collect()
}
