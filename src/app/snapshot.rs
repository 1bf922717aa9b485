use crate::app::errors::{FenceError, SyncError};
use crate::app::formatter::{OutputGenerator, FENCE};
use std::fs;
use std::path::Path;

/// Writes the tree lines to `path`, creating parent directories and overwriting any old snapshot.
pub fn write_snapshot(path: &Path, lines: &[String]) -> Result<(), SyncError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }
    fs::write(path, OutputGenerator::generate_tree(lines)).map_err(|e| SyncError::io(path, e))
}

/// Replaces the first fenced block after `anchor` (or anywhere, if the anchor is
/// absent) with `new_block`, which must carry its own fences.
///
/// Fails with the missing fence when there is no block to replace.
pub fn splice_text(
    content: &str,
    new_block: &str,
    anchor: Option<&str>,
) -> Result<String, FenceError> {
    let search_start = match anchor.filter(|a| !a.is_empty()) {
        Some(anchor) => match content.find(anchor) {
            Some(idx) => idx + anchor.len(),
            None => {
                log::debug!("Anchor {:?} not found, searching the whole document", anchor);
                0
            }
        },
        None => 0,
    };

    let open = content[search_start..]
        .find(FENCE)
        .map(|i| search_start + i)
        .ok_or(FenceError::MissingOpen)?;
    let after_open = open + FENCE.len();
    let close = content[after_open..]
        .find(FENCE)
        .map(|i| after_open + i)
        .ok_or(FenceError::MissingClose)?;

    let mut out = String::with_capacity(content.len() + new_block.len());
    out.push_str(&content[..open]);
    out.push_str(new_block);
    out.push_str(&content[close + FENCE.len()..]);
    Ok(out)
}

/// File-level splice. Touches exactly one document and writes only on success.
pub fn try_splice_fenced_block(
    md_path: &Path,
    new_block: &str,
    anchor: Option<&str>,
) -> Result<(), SyncError> {
    let content = fs::read_to_string(md_path).map_err(|e| SyncError::io(md_path, e))?;

    let updated =
        splice_text(&content, new_block, anchor).map_err(|missing| SyncError::NotFound {
            path: md_path.to_path_buf(),
            missing,
        })?;

    fs::write(md_path, updated).map_err(|e| SyncError::io(md_path, e))
}

/// Like [`try_splice_fenced_block`] but reports failures through the log and returns `false`.
pub fn splice_fenced_block(md_path: &Path, new_block: &str, anchor: Option<&str>) -> bool {
    match try_splice_fenced_block(md_path, new_block, anchor) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("{}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BLOCK: &str = "```\n└── new\n```";

    #[test]
    fn snapshot_creates_parents_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("docs/nested/architecture");

        write_snapshot(&path, &["old".to_string()]).unwrap();
        write_snapshot(&path, &["├── a".to_string(), "└── b".to_string()]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "├── a\n└── b");
    }

    #[test]
    fn snapshot_reports_io_failure() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("blocker"), "").unwrap();
        let path = tmp.path().join("blocker/architecture");

        let err = write_snapshot(&path, &["x".to_string()]).unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }));
    }

    #[test]
    fn splice_replaces_block_after_anchor() {
        let doc = "```\nfirst\n```\n## 4. Architecture du projet :\n```text\nold\n```\ntail\n";
        let out = splice_text(doc, BLOCK, Some("Architecture du projet")).unwrap();
        assert_eq!(
            out,
            "```\nfirst\n```\n## 4. Architecture du projet :\n```\n└── new\n```\ntail\n"
        );
    }

    #[test]
    fn missing_anchor_falls_back_to_first_block() {
        let doc = "intro\n```\nold\n```\n";
        let out = splice_text(doc, BLOCK, Some("Nowhere")).unwrap();
        assert_eq!(out, "intro\n```\n└── new\n```\n");
    }

    #[test]
    fn unterminated_block_is_not_found() {
        assert_eq!(
            splice_text("a\n```\nb\n", BLOCK, None),
            Err(FenceError::MissingClose)
        );
        assert_eq!(
            splice_text("plain text", BLOCK, None),
            Err(FenceError::MissingOpen)
        );
    }

    #[test]
    fn splicing_twice_is_stable() {
        let doc = "# Architecture du projet\n```\nold\n```\n";
        let once = splice_text(doc, BLOCK, Some("Architecture du projet")).unwrap();
        let twice = splice_text(&once, BLOCK, Some("Architecture du projet")).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn document_without_fences_is_left_untouched() {
        let tmp = TempDir::new().unwrap();
        let md = tmp.path().join("guide.md");
        fs::write(&md, "# Title\nno code here\n").unwrap();

        assert!(!splice_fenced_block(&md, BLOCK, Some("Title")));
        assert_eq!(fs::read_to_string(&md).unwrap(), "# Title\nno code here\n");
    }

    #[test]
    fn unterminated_block_in_file_reports_missing_close() {
        let tmp = TempDir::new().unwrap();
        let md = tmp.path().join("guide.md");
        fs::write(&md, "Architecture du projet\n```\nhalf\n").unwrap();

        let err = try_splice_fenced_block(&md, BLOCK, Some("Architecture du projet")).unwrap_err();
        assert!(matches!(
            err,
            SyncError::NotFound {
                missing: FenceError::MissingClose,
                ..
            }
        ));
        assert_eq!(err.to_string(), format!("closing fence not found in {}", md.display()));
    }

    #[test]
    fn splice_writes_file_on_success() {
        let tmp = TempDir::new().unwrap();
        let md = tmp.path().join("guide.md");
        fs::write(&md, "x\n```\nold\n```\n").unwrap();

        assert!(splice_fenced_block(&md, BLOCK, None));
        assert_eq!(fs::read_to_string(&md).unwrap(), "x\n```\n└── new\n```\n");
    }

    #[test]
    fn missing_document_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = try_splice_fenced_block(&tmp.path().join("absent.md"), BLOCK, None).unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }));
    }
}
