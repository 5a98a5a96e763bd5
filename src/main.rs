use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::debug;

use srclist::file_system;
use srclist::listing::{self, ListingOptions, DEFAULT_ROOT, DEFAULT_SUFFIX};
use srclist::logging;

/// Prints a quoted, base-relative path for every source file under the `src`
/// directory next to this executable, ready to paste into a build file.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Directory next to the executable to scan (relative, no `..`)
    #[clap(long, default_value = DEFAULT_ROOT, value_parser = parse_root_name)]
    root: String,
    /// File name suffix to list
    #[clap(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,
    /// Fail when the root directory is missing instead of printing nothing
    #[clap(long)]
    strict: bool,
}

fn parse_root_name(name: &str) -> Result<String, String> {
    listing::check_root_name(name)
        .map(|_| name.to_string())
        .map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    logging::init()?;
    let cli = Cli::parse();

    let base = file_system::base_dir().context("Failed to locate the executable's directory")?;
    debug!(target: "srclist::main", base = %base.display(), root = %cli.root, suffix = %cli.suffix, "Starting listing");

    let options = ListingOptions {
        root_name: cli.root,
        suffix: cli.suffix,
        strict: cli.strict,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    listing::write_listing(&mut out, &base, &options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["srclist"]).unwrap();
        assert_eq!(cli.root, "src");
        assert_eq!(cli.suffix, ".cpp");
        assert!(!cli.strict);
    }

    #[test]
    fn test_cli_overrides() {
        let cli =
            Cli::try_parse_from(["srclist", "--root", "lib", "--suffix", ".cc", "--strict"]).unwrap();
        assert_eq!(cli.root, "lib");
        assert_eq!(cli.suffix, ".cc");
        assert!(cli.strict);
    }

    #[test]
    fn test_cli_rejects_root_outside_base() {
        assert!(Cli::try_parse_from(["srclist", "--root", "/usr/src"]).is_err());
        assert!(Cli::try_parse_from(["srclist", "--root", "../src"]).is_err());
        assert!(Cli::try_parse_from(["srclist", "--root", "code/src"]).is_ok());
    }
}
