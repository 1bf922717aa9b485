use crate::app::models::FilterConfig;

/// Decides whether an entry named `name` shows up in the tree.
///
/// Excluded directories and glob matches are dropped outright. For files,
/// `keep_files` wins over both the suffix list and the glob patterns.
pub fn should_include(name: &str, is_dir: bool, config: &FilterConfig) -> bool {
    if is_dir {
        return !config.exclude_dirs.contains(name) && !config.ignore.is_match(name);
    }

    if config.keep_files.contains(name) {
        return true;
    }

    let suffix_hit = config
        .exclude_suffixes
        .iter()
        .any(|suffix| name.ends_with(suffix.as_str()));

    !suffix_hit && !config.ignore.is_match(name)
}

/// Whether the walker should descend into an (already included) directory.
pub fn should_recurse(name: &str, config: &FilterConfig) -> bool {
    !config.exclude_dirs.contains(name) && !config.no_recurse_dirs.contains(name)
}
