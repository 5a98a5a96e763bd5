use anyhow::{ensure, Context, Result};
use std::io::Write;
use std::path::{Component, Path};
use tracing::{info, warn};

use crate::file_system::{find_files_with_suffix, relative_slash_path};

pub const DEFAULT_ROOT: &str = "src";
pub const DEFAULT_SUFFIX: &str = ".cpp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOptions {
    /// Child directory of the base directory to scan.
    pub root_name: String,
    /// File name suffix a file must end with to be listed.
    pub suffix: String,
    /// Fail instead of printing nothing when the root cannot be opened.
    pub strict: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            strict: false,
        }
    }
}

/// Wraps a base-relative path in double quotes, e.g. `"src/core/Engine.cpp"`.
pub fn format_line(relative: &str) -> String {
    format!("\"{}\"", relative)
}

/// Checks that `name` is a plain relative path below the base directory.
/// Absolute paths, `..` and `.` segments, and the empty string are rejected.
pub fn check_root_name(name: &str) -> Result<()> {
    let path = Path::new(name);
    ensure!(!name.is_empty(), "Root directory name must not be empty");
    ensure!(
        path.components().all(|c| matches!(c, Component::Normal(_))),
        "Root directory '{}' must be a relative path inside the executable's directory",
        name
    );
    Ok(())
}

/// Builds the output lines for every matching file under `base/<root_name>`,
/// in traversal order.
pub fn collect_lines(base: &Path, options: &ListingOptions) -> Result<Vec<String>> {
    check_root_name(&options.root_name)?;
    let root = base.join(&options.root_name);

    let files = match find_files_with_suffix(&root, &options.suffix) {
        Ok(files) => files,
        Err(e) if !options.strict => {
            warn!(
                target: "srclist::listing",
                path = %root.display(),
                error = %e,
                "Root directory is missing or unreadable; nothing to list"
            );
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    files
        .iter()
        .map(|file| relative_slash_path(base, file).map(|rel| format_line(&rel)))
        .collect()
}

/// Writes one line per matching file to `out` and returns how many were written.
pub fn write_listing<W: Write>(out: &mut W, base: &Path, options: &ListingOptions) -> Result<usize> {
    let lines = collect_lines(base, options)?;
    for line in &lines {
        writeln!(out, "{}", line).context("Failed to write listing")?;
    }
    out.flush().context("Failed to flush listing")?;

    info!(
        target: "srclist::listing",
        base = %base.display(),
        count = lines.len(),
        "Listing complete"
    );
    Ok(lines.len())
}
