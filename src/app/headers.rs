use crate::app::errors::SyncError;
use crate::app::models::HeaderToken;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#+)[ \t]+(-?[0-9]+)\b").expect("header pattern is valid"))
}

/// Finds every numbered heading (`# 3 Title`, `## -1. Draft`) in document order.
pub fn parse_headers(text: &str) -> Vec<HeaderToken> {
    text.split_inclusive('\n')
        .enumerate()
        .filter_map(|(line, content)| {
            let caps = header_regex().captures(content)?;
            let number = caps.get(2)?;
            let index = number.as_str().parse::<i64>().ok()?;
            Some(HeaderToken {
                line,
                level: caps.get(1)?.as_str().len(),
                index,
                start: number.start(),
                end: number.end(),
            })
        })
        .collect()
}

/// Adds `shift` to every numbered heading.
///
/// Values are visited from the largest down, each original value exactly
/// once, so a freshly shifted header is never matched again. Only the
/// integer span changes; everything else is copied byte for byte.
pub fn shift_headers(text: &str, shift: i64) -> String {
    let tokens = parse_headers(text);
    if tokens.is_empty() || shift == 0 {
        return text.to_string();
    }

    let values: BTreeSet<i64> = tokens.iter().map(|t| t.index).collect();
    let mut shifted: Vec<Option<i64>> = vec![None; tokens.len()];
    for &value in values.iter().rev() {
        let Some(target) = value.checked_add(shift) else {
            log::warn!("Header {} cannot be shifted by {} without overflow", value, shift);
            continue;
        };
        for (slot, token) in shifted.iter_mut().zip(&tokens) {
            if token.index == value {
                *slot = Some(target);
            }
        }
    }

    let mut pending = tokens.iter().zip(shifted).peekable();
    let mut out = String::with_capacity(text.len() + tokens.len());
    for (line_no, line) in text.split_inclusive('\n').enumerate() {
        match pending.next_if(|(token, _)| token.line == line_no) {
            Some((token, Some(value))) => {
                out.push_str(&line[..token.start]);
                out.push_str(&format_index(value, &line[token.start..token.end]));
                out.push_str(&line[token.end..]);
            }
            _ => out.push_str(line),
        }
    }
    out
}

/// Prints `value` with the zero padding of the number it replaces (`07` stays two digits wide).
fn format_index(value: i64, original: &str) -> String {
    let digits = original.trim_start_matches('-');
    if digits.len() < 2 || !digits.starts_with('0') {
        return value.to_string();
    }
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{:0width$}", sign, value.unsigned_abs(), width = digits.len())
}

/// Rewrites a markdown file in place. Returns `false` when it has no numbered headers.
pub fn shift_headers_in_file(path: &Path, shift: i64) -> Result<bool, SyncError> {
    if !path.is_file() {
        return Err(SyncError::InvalidInput {
            path: path.to_path_buf(),
            reason: "is not a valid file",
        });
    }
    if path.extension().and_then(|e| e.to_str()) != Some("md") {
        return Err(SyncError::InvalidInput {
            path: path.to_path_buf(),
            reason: "is not a Markdown file",
        });
    }

    let content = fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
    let tokens = parse_headers(&content);
    if tokens.is_empty() {
        return Ok(false);
    }
    log::debug!(
        "{} numbered headers in {}, deepest level {}",
        tokens.len(),
        path.display(),
        tokens.iter().map(|t| t.level).max().unwrap_or(0)
    );

    let updated = shift_headers(&content, shift);
    fs::write(path, updated).map_err(|e| SyncError::io(path, e))?;
    Ok(true)
}
