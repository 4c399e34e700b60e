//! File listing by glob pattern.

use std::path::{Path, PathBuf};

use globset::Glob;
use walkdir::WalkDir;

use crate::error::Result;

/// List the files under `root` whose file name matches `pattern`.
///
/// Non-recursive mode stays in the top-level directory. Matching is on
/// the file name only, not the full path; results come back sorted for
/// deterministic output.
pub fn glob_files(root: impl AsRef<Path>, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let matcher = Glob::new(pattern)?.compile_matcher();
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut results = Vec::new();
    for entry in WalkDir::new(root).max_depth(max_depth).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && matcher.is_match(entry.file_name()) {
            results.push(entry.into_path());
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::UtilError;

    fn touch(path: &Path) {
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn non_recursive_stays_on_top() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.txt"));
        touch(&dir.path().join("b.log"));
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub").join("c.txt"));

        let found = glob_files(dir.path(), "*.txt", false).unwrap();
        assert_eq!(found, vec![dir.path().join("a.txt")]);
    }

    #[test]
    fn recursive_descends() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.txt"));
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub").join("c.txt"));
        touch(&dir.path().join("sub").join("d.log"));

        let found = glob_files(dir.path(), "*.txt", true).unwrap();
        assert_eq!(found, vec![
            dir.path().join("a.txt"),
            dir.path().join("sub").join("c.txt"),
        ]);
    }

    #[test]
    fn star_matches_everything_but_directories() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("only"));
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let found = glob_files(dir.path(), "*", false).unwrap();
        assert_eq!(found, vec![dir.path().join("only")]);
    }

    #[test]
    fn broken_pattern_is_reported() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            glob_files(dir.path(), "[", false),
            Err(UtilError::Pattern(_))
        ));
    }
}
