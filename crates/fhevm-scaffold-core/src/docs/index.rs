//! Documentation index (`SUMMARY.md`) maintenance.
//!
//! The index is a Markdown list grouped under `## <Category>` headings.
//! Links are only ever added: an entry whose target already appears anywhere
//! in the index is left alone, so regenerating docs never duplicates lines.

use std::path::Path;

use crate::error::Result;
use crate::templates::embedded;

pub const INDEX_FILE: &str = "SUMMARY.md";

/// Insert `- [title](target)` at the end of `section`. Returns `None` when a
/// link to `target` is already present.
pub fn insert_link(index: &str, section: &str, title: &str, target: &str) -> Option<String> {
    let needle = format!("]({target})");
    if index.lines().any(|line| line.contains(&needle)) {
        return None;
    }

    let entry = format!("- [{title}]({target})");
    let heading = format!("## {section}");
    let mut lines: Vec<&str> = index.lines().collect();

    match lines.iter().position(|line| line.trim_end() == heading) {
        Some(start) => {
            let end = lines[start + 1..]
                .iter()
                .position(|line| line.starts_with("# ") || line.starts_with("## "))
                .map_or(lines.len(), |offset| start + 1 + offset);
            let last_content = lines[start + 1..end]
                .iter()
                .rposition(|line| !line.trim().is_empty())
                .map_or(start, |offset| start + 1 + offset);
            if last_content == start {
                // Empty section: keep a blank line under the heading.
                lines.insert(start + 1, "");
                lines.insert(start + 2, &entry);
            } else {
                lines.insert(last_content + 1, &entry);
            }
        }
        None => {
            while lines.last().is_some_and(|line| line.trim().is_empty()) {
                lines.pop();
            }
            if !lines.is_empty() {
                lines.push("");
            }
            lines.push(&heading);
            lines.push("");
            lines.push(&entry);
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Some(out)
}

/// Add a link to the index file at `path`, creating it if needed.
/// Returns whether the file changed.
pub fn update_index(path: &Path, section: &str, title: &str, target: &str) -> Result<bool> {
    let current = if path.exists() {
        std::fs::read_to_string(path)?
    } else {
        embedded::DOC_SUMMARY.to_string()
    };

    match insert_link(&current, section, title, target) {
        Some(updated) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, updated)?;
            tracing::debug!("indexed {target} under {section}");
            Ok(true)
        }
        None => {
            tracing::debug!("{target} already indexed");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = "# Table of contents\n\n- [Overview](README.md)\n\n## Basic\n\n- [FHE Counter](fhe-counter.md)\n\n## Auctions\n\n- [Blind Auction](blind-auction.md)\n";

    #[test]
    fn test_append_to_existing_section() {
        let out = insert_link(INDEX, "Basic", "FHE Add", "fhe-add.md").unwrap();
        assert!(out.contains(
            "## Basic\n\n- [FHE Counter](fhe-counter.md)\n- [FHE Add](fhe-add.md)\n\n## Auctions"
        ));
    }

    #[test]
    fn test_append_to_last_section() {
        let out = insert_link(INDEX, "Auctions", "Other", "other.md").unwrap();
        assert!(out.ends_with("- [Blind Auction](blind-auction.md)\n- [Other](other.md)\n"));
    }

    #[test]
    fn test_new_section_appended() {
        let out = insert_link(INDEX, "Access Control", "ACL", "access-control.md").unwrap();
        assert!(out.ends_with("\n\n## Access Control\n\n- [ACL](access-control.md)\n"));
        assert!(out.starts_with(INDEX.trim_end()));
    }

    #[test]
    fn test_existing_target_is_not_duplicated() {
        assert!(insert_link(INDEX, "Basic", "Renamed", "fhe-counter.md").is_none());
        assert!(insert_link(INDEX, "Auctions", "FHE Counter", "fhe-counter.md").is_none());
    }

    #[test]
    fn test_empty_section() {
        let index = "# Table of contents\n\n## Basic\n\n## Auctions\n";
        let out = insert_link(index, "Basic", "FHE Counter", "fhe-counter.md").unwrap();
        assert_eq!(
            out,
            "# Table of contents\n\n## Basic\n\n- [FHE Counter](fhe-counter.md)\n\n## Auctions\n"
        );
    }

    #[test]
    fn test_update_index_creates_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join(INDEX_FILE);

        assert!(update_index(&path, "Basic", "FHE Counter", "fhe-counter.md").unwrap());
        let first = std::fs::read_to_string(&path).unwrap();
        assert!(first.starts_with("# Table of contents"));
        assert!(first.contains("## Basic\n\n- [FHE Counter](fhe-counter.md)\n"));

        assert!(!update_index(&path, "Basic", "FHE Counter", "fhe-counter.md").unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
    }
}
