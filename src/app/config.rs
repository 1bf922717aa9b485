use crate::app::cli::ArchitectureArgs;
use crate::app::models::{
    FilterConfig, RuntimeConfig, DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_SUFFIXES, DEFAULT_KEEP_FILES,
};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
struct PresetConfig {
    exclude_dirs: Option<Vec<String>>,
    exclude_suffixes: Option<Vec<String>>,
    keep_files: Option<Vec<String>>,
    no_recurse_dirs: Option<Vec<String>>,
    ignore: Option<Vec<String>>,
    keep_root: Option<bool>,
}

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("docsync").join("presets.toml"))
}

fn load_presets_file(config_path: &Path) -> Result<HashMap<String, PresetConfig>> {
    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    let parsed: PresetsFile = toml::from_str(&content).context("Failed to parse presets.toml")?;

    Ok(parsed.presets)
}

/// Defaults first, then preset entries, then CLI entries; duplicates keep their first position.
fn merge_vecs(
    defaults: &[&str],
    preset_vec: Option<Vec<String>>,
    cli_vec: Option<Vec<String>>,
) -> Vec<String> {
    let mut combined: Vec<String> = defaults.iter().map(|s| s.to_string()).collect();
    combined.extend(preset_vec.unwrap_or_default());
    combined.extend(cli_vec.unwrap_or_default());

    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).context(format!("Invalid glob pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}

/// Resolves the `architecture` settings for `root`, reading presets from the user's config dir.
pub fn resolve_config(args: ArchitectureArgs, root: &Path) -> Result<RuntimeConfig> {
    let presets = load_presets_file(&presets_path()?)?;
    build_config(args, root, &presets)
}

fn build_config(
    args: ArchitectureArgs,
    root: &Path,
    presets: &HashMap<String, PresetConfig>,
) -> Result<RuntimeConfig> {
    // Determine preset to use: CLI flag > project directory name > None
    let project_name = root.file_name().and_then(|n| n.to_str());
    let preset_key = args.preset.as_deref().or(project_name);
    let preset = preset_key
        .and_then(|k| presets.get(k))
        .cloned()
        .unwrap_or_default();

    if let Some(name) = args.preset.as_deref() {
        if !presets.contains_key(name) {
            log::warn!("Preset '{}' not found, using built-in filters", name);
        }
    }

    let ignore_patterns = merge_vecs(&[], preset.ignore, args.ignore);

    let filter = FilterConfig {
        exclude_dirs: merge_vecs(DEFAULT_EXCLUDE_DIRS, preset.exclude_dirs, args.exclude_dir)
            .into_iter()
            .collect(),
        exclude_suffixes: merge_vecs(
            DEFAULT_EXCLUDE_SUFFIXES,
            preset.exclude_suffixes,
            args.exclude_suffix,
        ),
        keep_files: merge_vecs(DEFAULT_KEEP_FILES, preset.keep_files, args.keep)
            .into_iter()
            .collect(),
        no_recurse_dirs: merge_vecs(&[], preset.no_recurse_dirs, args.no_recurse)
            .into_iter()
            .collect(),
        ignore: build_globset(&ignore_patterns)?,
        keep_root: args.keep_root || preset.keep_root.unwrap_or(false),
    };

    let markdown = if args.no_markdown {
        None
    } else {
        Some(
            args.markdown
                .unwrap_or_else(|| root.join(".github").join("copilot-instructions.md")),
        )
    };

    Ok(RuntimeConfig {
        filter,
        output: args.output.unwrap_or_else(|| root.join("architecture")),
        markdown,
        anchor: args.anchor,
        print_tree: args.stdout,
    })
}
