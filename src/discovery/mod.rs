//! Icon discovery.
//!
//! Recursively scans an input directory for `.svg` icon sources and
//! produces the ordered set the rest of the pipeline consumes.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extension that marks a file as an icon source.
pub const ICON_EXTENSION: &str = "svg";

/// One discovered icon source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// Path relative to the input root, forward-slash separated.
    pub rel: String,
    /// Icon identifier: the relative path with the `.svg` suffix stripped.
    pub name: String,
}

impl IconEntry {
    /// Path of the source file under `root`.
    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(&self.rel)
    }
}

/// Scan a directory for icon sources.
///
/// Returns entries sorted by lexicographic comparison of their relative
/// paths. Entry order flows straight into the generated artifacts, so the
/// sort is a determinism invariant. A nonexistent root yields an empty set.
pub fn scan_directory(root: &Path) -> Vec<IconEntry> {
    let mut entries = Vec::new();

    if !root.exists() {
        return entries;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) != Some(ICON_EXTENSION) {
            continue;
        }

        let Ok(rel_path) = path.strip_prefix(root) else {
            continue;
        };

        // Identifiers end up in the manifest, so they must be UTF-8.
        let Some(rel) = unix_path(rel_path) else {
            continue;
        };

        let name = rel
            .strip_suffix(".svg")
            .unwrap_or(rel.as_str())
            .to_string();
        entries.push(IconEntry { rel, name });
    }

    entries.sort_by(|a, b| a.rel.cmp(&b.rel));
    entries
}

/// Render a relative path with `/` separators regardless of platform.
fn unix_path(path: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        parts.push(component.as_os_str().to_str()?);
    }
    Some(parts.join("/"))
}
