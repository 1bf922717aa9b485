use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Keep project documentation in sync with the source tree"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the project tree, save it and refresh the fenced block in the docs
    Architecture(ArchitectureArgs),

    /// Shift every numbered markdown header (`# 3 Title`) by a fixed amount
    ShiftHeaders {
        /// Markdown file to rewrite in place
        file: PathBuf,

        /// Amount added to each header number (may be negative)
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        shift: i64,
    },
}

#[derive(Args, Debug)]
pub struct ArchitectureArgs {
    /// Project root to render (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Snapshot file (defaults to `<root>/architecture`)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Markdown document holding the fenced tree block
    #[arg(long)]
    pub markdown: Option<PathBuf>,

    /// Text after which the fenced block is searched for
    #[arg(long, default_value = "Architecture du projet")]
    pub anchor: String,

    /// Only write the snapshot file
    #[arg(long)]
    pub no_markdown: bool,

    /// Also print the tree to stdout
    #[arg(long)]
    pub stdout: bool,

    /// Use a predefined set of filters from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Directory names to leave out entirely
    #[arg(long, num_args = 1..)]
    pub exclude_dir: Option<Vec<String>>,

    /// File name endings to leave out (e.g. '.lock')
    #[arg(long, num_args = 1..)]
    pub exclude_suffix: Option<Vec<String>>,

    /// File names always shown, whatever their suffix
    #[arg(long, num_args = 1..)]
    pub keep: Option<Vec<String>>,

    /// Directories shown without their contents
    #[arg(long, num_args = 1..)]
    pub no_recurse: Option<Vec<String>>,

    /// Glob patterns for entry names to hide (e.g. '*.log')
    #[arg(long, num_args = 1..)]
    pub ignore: Option<Vec<String>>,

    /// Print the root directory's name as the first line
    #[arg(long)]
    pub keep_root: bool,
}
