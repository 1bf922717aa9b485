// Declare modules
pub mod cli;
pub mod config;
pub mod errors;
pub mod filter;
pub mod formatter;
pub mod headers;
pub mod models;
pub mod scanner;
pub mod snapshot;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use self::cli::{ArchitectureArgs, Cli, Command};
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::headers::shift_headers_in_file;
use self::scanner::render;
use self::snapshot::{splice_fenced_block, write_snapshot};

/// Parses arguments and dispatches to the selected command.
///
/// Per-file failures are logged and swallowed; only configuration problems
/// come back as errors.
pub fn run() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Command::Architecture(args) => architecture(args),
        Command::ShiftHeaders { file, shift } => {
            shift_headers(&file, shift);
            Ok(())
        }
    }
}

fn architecture(args: ArchitectureArgs) -> Result<()> {
    let root = resolve_root(args.root.as_deref())?;

    let config = resolve_config(args, &root)?;

    let lines = render(&root, &config.filter);
    if lines.is_empty() {
        log::warn!("⚠️ No entries left in {} after filtering.", root.display());
    }

    if config.print_tree {
        println!("{}", OutputGenerator::generate_tree(&lines));
    }

    match write_snapshot(&config.output, &lines) {
        Ok(()) => log::info!(
            "📐 Project architecture saved to {}",
            display_relative(&config.output, &root)
        ),
        Err(err) => log::error!("Error writing snapshot: {}", err),
    }

    if let Some(md_file) = &config.markdown {
        let block = OutputGenerator::format_as_codeblock(&lines);
        if splice_fenced_block(md_file, &block, Some(&config.anchor)) {
            log::info!(
                "🔁 Updated fenced architecture block in {}",
                display_relative(md_file, &root)
            );
        } else {
            log::warn!(
                "⚠️ Could not find fenced block to replace in {}",
                display_relative(md_file, &root)
            );
        }
    }

    Ok(())
}

/// Absolute, symlink-free project root, so `.` or `..` still have a directory name.
fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    fs::canonicalize(&root).context(format!("Failed to resolve project root {:?}", root))
}

fn shift_headers(file: &Path, shift: i64) {
    match shift_headers_in_file(file, shift) {
        Ok(true) => log::info!(
            "Headers updated in {} with a shift of {}.",
            file.display(),
            shift
        ),
        Ok(false) => log::warn!("No numbered headers to update in {}.", file.display()),
        Err(err) => log::error!("{}", err),
    }
}

/// Shows `path` relative to the project root when it lives under it.
fn display_relative(path: &Path, root: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .filter(|rel| !rel.starts_with(".."))
        .unwrap_or_else(|| PathBuf::from(path))
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_root_resolves_to_a_named_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let nested = tmp.path().join("project").join("sub");
        fs::create_dir_all(&nested).unwrap();

        let root = resolve_root(Some(&nested.join(".."))).unwrap();
        assert!(root.is_absolute());
        assert_eq!(root.file_name().unwrap(), "project");

        let cwd = resolve_root(Some(Path::new("."))).unwrap();
        assert_eq!(cwd, fs::canonicalize(env::current_dir().unwrap()).unwrap());
        assert!(cwd.file_name().is_some());
    }

    #[test]
    fn missing_root_is_a_config_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(resolve_root(Some(&tmp.path().join("absent"))).is_err());
    }

    #[test]
    fn paths_under_root_are_shown_relative() {
        let root = Path::new("/work/app");
        assert_eq!(
            display_relative(Path::new("/work/app/.github/copilot-instructions.md"), root),
            ".github/copilot-instructions.md"
        );
        assert_eq!(
            display_relative(Path::new("/elsewhere/architecture"), root),
            "/elsewhere/architecture"
        );
    }
}
