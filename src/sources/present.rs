//! Making sure selected files exist on disk before linting.

use super::select::SourceFile;
use crate::error::Result;
use crate::github::RestApi;
use std::path::Path;
use tracing::{info, warn};

/// File the selection is dumped to on local (non-CI) runs.
pub const CHANGED_FILES_DUMP: &str = ".changed_files.json";

/// Download files that are missing from the checkout.
///
/// A missing file is fetched from its `raw_url` and written to its basename in
/// the repository root; `lint_path` is updated to match. Files that are
/// missing and cannot be downloaded are dropped with a warning.
pub fn ensure_files_present(
    root: &Path,
    files: Vec<SourceFile>,
    api: &dyn RestApi,
) -> Result<Vec<SourceFile>> {
    let mut present = Vec::with_capacity(files.len());

    for mut file in files {
        if root.join(&file.lint_path).exists() {
            present.push(file);
            continue;
        }

        let Some(raw_url) = file.raw_url.clone() else {
            warn!("{} is not in the checkout and has no raw_url; skipping", file.name);
            continue;
        };

        info!("downloading file from url: {}", raw_url);
        let contents = match api.download_file(&raw_url) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("failed to download {}: {}; skipping", file.name, e);
                continue;
            }
        };

        let basename = file
            .name
            .rsplit('/')
            .next()
            .unwrap_or(file.name.as_str())
            .to_string();
        std::fs::write(root.join(&basename), contents)?;
        file.lint_path = basename;
        present.push(file);
    }

    Ok(present)
}

/// Write the selection as pretty JSON, for inspecting local runs.
pub fn write_changed_files_dump(root: &Path, files: &[SourceFile]) -> Result<()> {
    let json = serde_json::to_string_pretty(files)?;
    std::fs::write(root.join(CHANGED_FILES_DUMP), json)?;
    Ok(())
}
