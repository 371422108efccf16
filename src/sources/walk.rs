//! Full-repository discovery, used when `--files-changed-only false`.

use super::filter::PathFilter;
use super::select::SourceFile;
use crate::config::Settings;
use crate::error::Result;
use ignore::WalkBuilder;
use std::path::Path;
use tracing::{debug, info, warn};

/// List every source file under `root`.
///
/// Hidden directories (any component starting with `.`) are skipped, and the
/// paths of git submodules declared in `.gitmodules` are ignored. Symlinks are
/// followed. The result is sorted by path.
pub fn list_source_files(
    root: &Path,
    settings: &Settings,
    filter: &PathFilter,
) -> Result<Vec<SourceFile>> {
    let submodules = read_submodule_paths(root)?;
    for path in &submodules {
        info!("appending submodule to ignored paths: {}", path);
    }
    let filter = filter.with_extra_ignored(&submodules)?;

    let mut names = walk_tree(root);
    names.sort();

    let files = names
        .into_iter()
        .filter(|name| settings.has_source_extension(name))
        .inspect(|name| debug!("\"./{}\" is a source code file", name))
        .filter(|name| !filter.is_ignored(name))
        .map(SourceFile::whole)
        .collect();

    Ok(files)
}

/// Repository-relative paths of every file below `root`.
fn walk_tree(root: &Path) -> Vec<String> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false) // .gitignore does not decide what gets linted
        .follow_links(true); // ignore crate detects loops

    builder.filter_entry(|entry| {
        entry.depth() == 0
            || !entry.file_type().map(|t| t.is_dir()).unwrap_or(false)
            || !entry.file_name().to_string_lossy().starts_with('.')
    });

    let mut names = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable path: {}", e);
                continue;
            }
        };
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        names.push(relative_name(rel));
    }
    names
}

fn relative_name(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Paths of the submodules declared in `root/.gitmodules`, if any.
pub fn read_submodule_paths(root: &Path) -> Result<Vec<String>> {
    let path = root.join(".gitmodules");
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(parse_gitmodules(&content))
}

/// Extract `path = ...` values from `.gitmodules` content.
pub(crate) fn parse_gitmodules(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with(';'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            (key.trim() == "path").then(|| value.trim().trim_matches('"').to_string())
        })
        .filter(|path| !path.is_empty())
        .collect()
}
