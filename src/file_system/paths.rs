use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// Returns the real directory containing the running executable.
///
/// Symlinks are resolved first, so a binary reached through a link still lists
/// the `src` tree that sits next to the actual file.
pub fn base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to get current executable path")?;
    let exe = dunce::canonicalize(&exe)
        .with_context(|| format!("Failed to canonicalize executable path {}", exe.display()))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("Executable has no parent directory"))
}

/// Renders `path` relative to `base` with `/` separators, whatever the platform uses.
pub fn relative_slash_path(base: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(base).with_context(|| {
        format!(
            "{} is not inside base directory {}",
            path.display(),
            base.display()
        )
    })?;

    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}
