use globset::GlobSet;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Inclusion rules for the architecture tree.
///
/// Built once per invocation (see `config::resolve_config`) and only read afterwards.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Directories that never appear and are never walked.
    pub exclude_dirs: BTreeSet<String>,
    /// File name tails that hide a file (`.md`, or a bare name such as `architecture`).
    pub exclude_suffixes: Vec<String>,
    /// Files shown even when one of `exclude_suffixes` matches.
    pub keep_files: BTreeSet<String>,
    /// Directories listed as a single entry without their contents.
    pub no_recurse_dirs: BTreeSet<String>,
    /// Extra glob patterns matched against entry names.
    pub ignore: GlobSet,
    /// Emit the root directory's own name as the first line.
    pub keep_root: bool,
}

pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".venv",
    ".git",
    ".github",
    ".vscode",
    "notebooks",
    "default_project_name.egg-info",
    "__pycache__",
];

pub const DEFAULT_EXCLUDE_SUFFIXES: &[&str] = &[
    "__init__.py",
    ".md",
    ".txt",
    "architecture",
    "LICENCE",
    ".ipynb",
    ".DS_Store",
];

pub const DEFAULT_KEEP_FILES: &[&str] = &[
    "copilot-instructions.md",
    "empty.chatmode.md",
    "requirements.txt",
    ".gitignore",
];

impl FilterConfig {
    /// A configuration that lets everything through.
    pub fn permissive() -> Self {
        Self {
            exclude_dirs: BTreeSet::new(),
            exclude_suffixes: Vec::new(),
            keep_files: BTreeSet::new(),
            no_recurse_dirs: BTreeSet::new(),
            ignore: GlobSet::empty(),
            keep_root: false,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: to_set(DEFAULT_EXCLUDE_DIRS),
            exclude_suffixes: DEFAULT_EXCLUDE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            keep_files: to_set(DEFAULT_KEEP_FILES),
            ..Self::permissive()
        }
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Represents one rendered line of the architecture tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub text: String,
    pub is_dir: bool,
    pub depth: usize,
}

/// A numbered markdown heading such as `## 3 Details`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderToken {
    /// Zero-based line number within the document.
    pub line: usize,
    /// Number of `#` markers.
    pub level: usize,
    pub index: i64,
    /// Byte span of the integer within its line.
    pub start: usize,
    pub end: usize,
}

/// Everything the `architecture` command needs after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub filter: FilterConfig,
    pub output: PathBuf,
    pub markdown: Option<PathBuf>,
    pub anchor: String,
    pub print_tree: bool,
}
