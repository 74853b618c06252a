//! In-place comment stripping across a frontend tree.
//!
//! Destructive by design: files are rewritten where they stand, there is no
//! backup and no rollback. An interrupted run leaves some files stripped and
//! others untouched, with no resumption state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

use crate::strip::{strip_html_comments, strip_js_comments};

/// Path fragments whose directories are left untouched.
const SKIP_MARKERS: &[&str] = &["images", "data", ".git"];

fn in_skipped_dir(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let Some(dir) = rel.parent() else {
        return false;
    };
    let dir = dir.to_string_lossy();
    SKIP_MARKERS.iter().any(|marker| dir.contains(marker))
}

/// Strip comments from one file, rewriting only on change.
///
/// Returns whether the file was rewritten. Files that are neither `.html`
/// nor `.js` are ignored. Read and write failures abort the caller's run.
pub fn process_file(path: &Path) -> anyhow::Result<bool> {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return Ok(false);
    };
    if ext != "html" && ext != "js" {
        return Ok(false);
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let stripped = if ext == "html" {
        strip_html_comments(&content).into_owned()
    } else {
        strip_js_comments(&content)
    };

    if stripped != content {
        fs::write(path, stripped).with_context(|| format!("rewriting {}", path.display()))?;
        return Ok(true);
    }
    Ok(false)
}

/// Walk `root` and strip every eligible file, returning the changed paths
/// relative to `root` in walk order.
pub fn strip_tree(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut changed = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if in_skipped_dir(root, path) {
            continue;
        }
        if process_file(path)? {
            changed.push(path.strip_prefix(root).unwrap_or(path).to_path_buf());
        }
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_markers_match_anywhere_in_the_directory_path() {
        let root = Path::new("/tree");
        assert!(in_skipped_dir(root, Path::new("/tree/images/icons/a.js")));
        assert!(in_skipped_dir(root, Path::new("/tree/src/data/b.js")));
        assert!(in_skipped_dir(root, Path::new("/tree/.git/hooks/c.js")));
        assert!(!in_skipped_dir(root, Path::new("/tree/src/app.js")));
        // Substring matching is inherited behavior: "database" contains "data".
        assert!(in_skipped_dir(root, Path::new("/tree/database/d.js")));
    }

    #[test]
    fn non_target_extensions_are_ignored() {
        assert!(!process_file(Path::new("/nonexistent/file.css")).unwrap());
        assert!(!process_file(Path::new("/nonexistent/file")).unwrap());
    }
}
