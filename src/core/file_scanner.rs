use std::{
    collections::BTreeSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

pub const PO_EXTENSION: &str = "po";

/// Expand the command line inputs into the list of files to check.
///
/// Files are taken as given, whatever their extension; directories are
/// searched recursively for `*.po` files. Paths matching an ignore pattern
/// are dropped. The result is de-duplicated and sorted; `./de.po` and
/// `de.po` count as the same file.
pub fn collect_files(inputs: &[PathBuf], ignore_patterns: &[Pattern]) -> Result<Vec<PathBuf>> {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();

    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input) {
                let entry = entry
                    .with_context(|| format!("Cannot access path in {}", input.display()))?;
                let path = entry.path();
                if entry.file_type().is_file() && is_po_file(path) {
                    files.insert(normalize(path));
                }
            }
        } else {
            files.insert(normalize(input));
        }
    }

    Ok(files
        .into_iter()
        .filter(|path| !ignore_patterns.iter().any(|p| p.matches_path(path)))
        .collect())
}

/// Drop `.` components, keeping a lone `.` as is.
fn normalize(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|component| *component != Component::CurDir)
        .collect();
    if normalized.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        normalized
    }
}

fn is_po_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(PO_EXTENSION)
}
