use crate::core::{AnalysisError, Language};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<glob::Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
        }
    }

    /// Invalid globs are dropped with a warning.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Self {
        self.ignore_patterns = patterns
            .iter()
            .filter_map(|pattern| match glob::Pattern::new(pattern) {
                Ok(compiled) => Some(compiled),
                Err(err) => {
                    log::warn!("Ignoring invalid ignore pattern '{pattern}': {err}");
                    None
                }
            })
            .collect();
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>, AnalysisError> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry.map_err(|err| AnalysisError::Discovery {
                path: self.root.clone(),
                message: err.to_string(),
            })?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        self.is_eligible(path) && !self.is_ignored(path)
    }

    fn is_eligible(&self, path: &Path) -> bool {
        Language::from_path(path) == Language::Python
    }

    /// Patterns match against the whole path or the bare file name, so both
    /// `**/__pycache__/**` and `test_*.py` work.
    fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        self.ignore_patterns
            .iter()
            .any(|pattern| pattern.matches(&path_str) || pattern.matches(&file_name))
    }
}

/// Expands input paths into the sorted, deduplicated set of eligible files.
///
/// Directories are walked and filtered by `ignore_patterns`; files named
/// explicitly are kept whenever their language is supported.
pub fn discover_files(
    paths: &[PathBuf],
    ignore_patterns: &[String],
) -> Result<Vec<PathBuf>, AnalysisError> {
    let mut found = BTreeSet::new();

    for path in paths {
        if path.is_dir() {
            let walker = FileWalker::new(path.clone()).with_ignore_patterns(ignore_patterns);
            found.extend(walker.walk()?);
        } else if path.is_file() {
            if Language::from_path(path) == Language::Python {
                found.insert(path.clone());
            } else {
                log::debug!("Skipping unsupported file {}", path.display());
            }
        } else {
            return Err(AnalysisError::Discovery {
                path: path.clone(),
                message: "path does not exist".to_string(),
            });
        }
    }

    Ok(found.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "x = 1\n").unwrap();
        path
    }

    #[test]
    fn test_walk_filters_language_and_patterns() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "app.py");
        touch(dir.path(), "pkg/util.py");
        touch(dir.path(), "README.md");
        touch(dir.path(), "test_app.py");
        touch(dir.path(), "__pycache__/app.cpython-311.py");

        let patterns = vec!["test_*.py".to_string(), "**/__pycache__/**".to_string()];
        let files = discover_files(&[dir.path().to_path_buf()], &patterns).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().display().to_string())
            .collect();

        assert_eq!(names, vec!["app.py", "pkg/util.py"]);
    }

    #[test]
    fn test_explicit_files_are_deduplicated_and_sorted() {
        let dir = TempDir::new().unwrap();
        let b = touch(dir.path(), "b.py");
        let a = touch(dir.path(), "a.py");
        let notes = touch(dir.path(), "notes.txt");

        let files = discover_files(&[b.clone(), a.clone(), b.clone(), notes], &[]).unwrap();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_missing_path_is_a_discovery_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = discover_files(&[missing], &[]).unwrap_err();
        assert!(matches!(err, AnalysisError::Discovery { .. }));
    }

    #[test]
    fn test_invalid_pattern_is_dropped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "app.py");
        let files = discover_files(&[dir.path().to_path_buf()], &["[".to_string()]).unwrap();
        assert_eq!(files.len(), 1);
    }
}
