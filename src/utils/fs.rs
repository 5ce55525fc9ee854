//! Filesystem helpers used by the asset resolver.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Creates a directory and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Recursively copies a directory and all its contents to a new location.
///
/// Creates the destination if it does not exist, preserves the directory
/// structure, and overwrites existing files. Symlinks and other special
/// file types are skipped.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    ensure_dir(dst)?;

    for entry in
        fs::read_dir(src).with_context(|| format!("Failed to read directory: {}", src.display()))?
    {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir(&src_path, &dst_path)?;
        } else if file_type.is_file() {
            fs::copy(&src_path, &dst_path).with_context(|| {
                format!(
                    "Failed to copy file from {} to {}",
                    src_path.display(),
                    dst_path.display()
                )
            })?;
        }
        // Skip symlinks and other file types
    }

    Ok(())
}

/// Recursively removes a directory, tolerating its absence.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)
            .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copy_dir_copies_nested_structure() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("index.html"), "<html></html>").unwrap();
        fs::write(src.join("nested").join("app.js"), "console.log(1);").unwrap();

        let dst = temp.path().join("dst");
        copy_dir(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("index.html")).unwrap(), "<html></html>");
        assert_eq!(
            fs::read_to_string(dst.join("nested").join("app.js")).unwrap(),
            "console.log(1);"
        );
    }

    #[test]
    fn copy_dir_overwrites_existing_files() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("a.txt"), "new").unwrap();
        fs::write(dst.join("a.txt"), "old").unwrap();

        copy_dir(&src, &dst).unwrap();
        assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "new");
    }

    #[test]
    fn remove_dir_all_tolerates_missing_path() {
        let temp = TempDir::new().unwrap();
        remove_dir_all(&temp.path().join("never-created")).unwrap();
    }

    #[test]
    fn copy_dir_fails_on_missing_source() {
        let temp = TempDir::new().unwrap();
        let err = copy_dir(&temp.path().join("absent"), &temp.path().join("dst")).unwrap_err();
        assert!(err.to_string().contains("Failed to read directory"));
    }
}
