use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Recursively finds files under `root` whose file name ends with `suffix`.
///
/// The walk is depth-first in directory-listing order and the results keep that
/// order. Symlinked directories are not descended into; a symlink to a regular
/// file counts as a file. Directories are never returned, even when their name
/// ends with the suffix.
///
/// # Arguments
///
/// * `root` - The directory to start searching from.
/// * `suffix` - Plain, case-sensitive file name suffix (e.g. `".cpp"`).
///
/// # Returns
///
/// An error if `root` itself cannot be opened as a directory. Failures further
/// down the tree are logged and skipped.
pub fn find_files_with_suffix(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    // Probe the root up front so a missing or unreadable root is distinguishable
    // from an empty one.
    fs::read_dir(root)
        .with_context(|| format!("Failed to open root directory: {}", root.display()))?;

    let mut matching_files = Vec::new();
    for entry_result in WalkDir::new(root).follow_links(false).min_depth(1) {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                warn!(
                    target: "srclist::search",
                    path = ?e.path(),
                    error = %e,
                    "Skipping unreadable entry"
                );
                continue;
            }
        };

        if name_matches(&entry, suffix) && is_regular_file(&entry) {
            debug!(target: "srclist::search", path = %entry.path().display(), "Matched");
            matching_files.push(entry.into_path());
        }
    }
    Ok(matching_files)
}

fn name_matches(entry: &DirEntry, suffix: &str) -> bool {
    entry.file_name().to_string_lossy().ends_with(suffix)
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
