use crate::error::{Result, ScorerError};
use crate::types::input::ScoreRequest;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Request files under `root` whose extension is in `extensions`, in path order.
pub fn discover_requests(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(ScorerError::PathNotFound(root.display().to_string()));
    }

    let wanted: Vec<String> = extensions
        .iter()
        .map(|extension| extension.trim().trim_start_matches('.').to_lowercase())
        .collect();
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .and_then(|extension| extension.to_str())
                .map(|extension| wanted.contains(&extension.to_lowercase()))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ScorerError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

pub fn load_request(path: &Path) -> Result<ScoreRequest> {
    let content = read_text(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ScorerError::InvalidRequest(format!("{}: {}", path.display(), e)))
}
