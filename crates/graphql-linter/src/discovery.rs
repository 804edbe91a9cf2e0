use crate::{LintError, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File extensions treated as schema files (compared case-insensitively)
pub const SCHEMA_EXTENSIONS: &[&str] = &["graphql", "graphqls"];

/// Directories never descended into (compared lower-cased)
pub const IGNORED_DIRECTORIES: &[&str] = &["node_modules", "vendor", ".git"];

/// Find every schema file under `target`, in directory-walk order.
///
/// `target` may be a directory or a single file. Hidden entries and the
/// ignored directories are skipped below the target itself.
///
/// # Errors
///
/// Returns an error if `target` does not exist, cannot be walked, or holds
/// no schema files.
pub fn discover_schema_files(target: &Path) -> Result<Vec<PathBuf>> {
    if !target.try_exists()? {
        return Err(LintError::TargetNotFound(target.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(target)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_schema_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(LintError::NoSchemaFiles(target.to_path_buf()));
    }

    tracing::debug!(count = files.len(), target = %target.display(), "Discovered schema files");
    Ok(files)
}

fn is_excluded(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();

    let excluded = name.starts_with('.')
        || (entry.file_type().is_dir()
            && IGNORED_DIRECTORIES.contains(&name.to_lowercase().as_str()));
    if excluded {
        tracing::debug!(path = %entry.path().display(), "Skipping excluded entry");
    }
    excluded
}

/// Whether the path has a `.graphql` or `.graphqls` extension, in any case
#[must_use]
pub fn is_schema_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SCHEMA_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, relative: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "type Query { id: ID }").unwrap();
    }

    fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|file| {
                file.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_discovers_schema_files_in_order() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b.graphql");
        touch(temp.path(), "a.GRAPHQLS");
        touch(temp.path(), "nested/c.graphql");
        touch(temp.path(), "notes.txt");

        let files = discover_schema_files(temp.path()).unwrap();
        assert_eq!(
            relative_names(temp.path(), &files),
            vec!["a.GRAPHQLS", "b.graphql", "nested/c.graphql"]
        );
    }

    #[test]
    fn test_skips_hidden_and_ignored_entries() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "schema.graphql");
        touch(temp.path(), ".hidden.graphql");
        touch(temp.path(), ".config/extra.graphql");
        touch(temp.path(), "node_modules/pkg/schema.graphql");
        touch(temp.path(), "Vendor/lib.graphql");

        let files = discover_schema_files(temp.path()).unwrap();
        assert_eq!(relative_names(temp.path(), &files), vec!["schema.graphql"]);
    }

    #[test]
    fn test_single_file_target() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "only.graphqls");

        let target = temp.path().join("only.graphqls");
        let files = discover_schema_files(&target).unwrap();
        assert_eq!(files, vec![target]);
    }

    #[test]
    fn test_no_schema_files() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "README.md");

        let result = discover_schema_files(temp.path());
        assert!(matches!(result, Err(LintError::NoSchemaFiles(_))));
    }

    #[test]
    fn test_missing_target() {
        let temp = TempDir::new().unwrap();
        let result = discover_schema_files(&temp.path().join("missing"));
        assert!(matches!(result, Err(LintError::TargetNotFound(_))));
    }
}
