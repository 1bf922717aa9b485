use crate::app::errors::SyncError;
use crate::app::filter::{should_include, should_recurse};
use crate::app::models::{FilterConfig, TreeLine};
use std::fs;
use std::path::{Path, PathBuf};

const BRANCH: &str = "├──";
const LAST_BRANCH: &str = "└──";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

/// Renders a directory as box-drawing tree lines.
pub fn render(root: &Path, config: &FilterConfig) -> Vec<String> {
    Scanner::new(root, config)
        .scan()
        .into_iter()
        .map(|line| line.text)
        .collect()
}

pub struct Scanner<'a> {
    root: PathBuf,
    config: &'a FilterConfig,
}

/// A surviving child of the directory being walked.
struct Child {
    name: String,
    path: PathBuf,
    is_dir: bool,
    is_symlink: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(root: impl Into<PathBuf>, config: &'a FilterConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Walks the root depth-first, directories before files at every level.
    pub fn scan(&self) -> Vec<TreeLine> {
        let mut lines = Vec::new();

        if self.config.keep_root {
            let name = self
                .root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.root.display().to_string());
            lines.push(TreeLine {
                text: name,
                is_dir: true,
                depth: 0,
            });
        }

        self.walk_dir(&self.root, "", 1, &mut lines);

        log::debug!(
            "Rendered {} entries ({} directories, max depth {}) under {}",
            lines.len(),
            lines.iter().filter(|l| l.is_dir).count(),
            lines.iter().map(|l| l.depth).max().unwrap_or(0),
            self.root.display()
        );
        lines
    }

    fn walk_dir(&self, dir: &Path, prefix: &str, depth: usize, lines: &mut Vec<TreeLine>) {
        let children = match self.list_children(dir) {
            Ok(children) => children,
            Err(err) => {
                log::warn!("{}", err);
                lines.push(TreeLine {
                    text: format!("{}{}", prefix, err),
                    is_dir: false,
                    depth,
                });
                return;
            }
        };

        let count = children.len();
        for (index, child) in children.iter().enumerate() {
            let is_last = index + 1 == count;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };

            lines.push(TreeLine {
                text: format!("{}{} {}", prefix, connector, child.name),
                is_dir: child.is_dir,
                depth,
            });

            // Symlinked directories are listed but never followed, so cycles can't recurse forever.
            if child.is_dir && !child.is_symlink && should_recurse(&child.name, self.config) {
                let extension = if is_last { BLANK_INDENT } else { PIPE_INDENT };
                let child_prefix = format!("{}{}", prefix, extension);
                self.walk_dir(&child.path, &child_prefix, depth + 1, lines);
            }
        }
    }

    /// Lists, partitions, sorts and filters the immediate children of `dir`.
    fn list_children(&self, dir: &Path) -> Result<Vec<Child>, SyncError> {
        let list_error = |source: std::io::Error| SyncError::List {
            path: dir.to_path_buf(),
            source,
        };

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in fs::read_dir(dir).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_symlink = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);
            let is_dir = path.is_dir();

            if !should_include(&name, is_dir, self.config) {
                continue;
            }

            let child = Child {
                name,
                path,
                is_dir,
                is_symlink,
            };
            if is_dir {
                dirs.push(child);
            } else {
                files.push(child);
            }
        }

        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));
        dirs.append(&mut files);
        Ok(dirs)
    }
}
