//! Filesystem rename collaborator.
//!
//! The engine only produces strings; applying one to disk happens here.
//! The original extension is always preserved.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A planned rename, before or after it has been applied.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RenamePlan {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub old_name: String,
    pub new_name: String,
}

/// Compute the target path for a release name, keeping the source file's
/// extension and directory.
pub fn plan(source: &Path, release_name: &str) -> Result<RenamePlan> {
    if !source.exists() {
        return Err(Error::not_found(source.display().to_string()));
    }
    if release_name.is_empty() {
        return Err(Error::invalid_input("release name is empty"));
    }

    let extension = source
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let new_name = format!("{release_name}{extension}");
    let new_path = source
        .parent()
        .map(|dir| dir.join(&new_name))
        .unwrap_or_else(|| PathBuf::from(&new_name));

    Ok(RenamePlan {
        old_path: source.to_path_buf(),
        new_path,
        old_name: source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        new_name,
    })
}

/// Rename a file to its release name. With `dry_run` the plan is returned
/// without touching the filesystem.
pub fn rename(source: &Path, release_name: &str, dry_run: bool) -> Result<RenamePlan> {
    let plan = plan(source, release_name)?;

    if dry_run {
        tracing::info!(
            "Dry run: {} -> {}",
            plan.old_path.display(),
            plan.new_path.display()
        );
        return Ok(plan);
    }

    tracing::info!("Renaming {} -> {}", plan.old_path.display(), plan.new_path.display());
    fs::rename(&plan.old_path, &plan.new_path)?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_preserves_extension_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("old.name.mkv");
        fs::write(&source, b"").unwrap();

        let plan = plan(&source, "New.Name.2024-GROUP").unwrap();
        assert_eq!(plan.new_name, "New.Name.2024-GROUP.mkv");
        assert_eq!(plan.new_path, dir.path().join("New.Name.2024-GROUP.mkv"));
        assert_eq!(plan.old_name, "old.name.mkv");
    }

    #[test]
    fn dry_run_leaves_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("movie.mkv");
        fs::write(&source, b"").unwrap();

        let plan = rename(&source, "Movie.2024-NOTAG", true).unwrap();
        assert!(source.exists());
        assert!(!plan.new_path.exists());
    }

    #[test]
    fn rename_moves_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("movie.mkv");
        fs::write(&source, b"data").unwrap();

        let plan = rename(&source, "Movie.2024-NOTAG", false).unwrap();
        assert!(!source.exists());
        assert!(plan.new_path.exists());
        assert_eq!(fs::read(&plan.new_path).unwrap(), b"data");
    }

    #[test]
    fn missing_source_is_not_found() {
        let err = plan(Path::new("/nonexistent/movie.mkv"), "X").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn empty_release_name_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("movie.mkv");
        fs::write(&source, b"").unwrap();
        let err = plan(&source, "").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
