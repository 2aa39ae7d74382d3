//! Combine every file of a result directory into one text.

use crate::utils::error::CollectError;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Concatenated contents of a result directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedResults {
    /// Source files in the order they were concatenated
    pub files: Vec<PathBuf>,

    /// Each file's contents followed by a single `\n`
    pub text: String,
}

impl CombinedResults {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// List entries directly inside `input_dir`, sorted by name
///
/// **Public** - also used by the run command for logging
///
/// Names are compared byte-wise, so `size_10` sorts before `size_2`.
/// Sub-directories are listed too; reading them fails later.
pub fn list_result_files(input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, CollectError> {
    let input_dir = input_dir.as_ref();

    let read_dir_err = |source| CollectError::ReadDir {
        path: input_dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(input_dir).map_err(read_dir_err)? {
        names.push(entry.map_err(read_dir_err)?.file_name());
    }
    names.sort();

    Ok(names.into_iter().map(|name| input_dir.join(name)).collect())
}

/// Combine all result files in `input_dir`
///
/// **Public** - main entry point of the collection stage
///
/// # Returns
/// The combined text and the sorted source paths. An empty directory
/// yields an empty text.
///
/// # Errors
/// * `CollectError::ReadDir` - directory missing or unreadable
/// * `CollectError::ReadFile` - entry is a directory, unreadable, or not UTF-8
pub fn combine_files(input_dir: impl AsRef<Path>) -> Result<CombinedResults, CollectError> {
    let input_dir = input_dir.as_ref();
    let files = list_result_files(input_dir)?;

    debug!("Combining {} files from {}", files.len(), input_dir.display());

    let mut text = String::new();
    for path in &files {
        let contents = fs::read_to_string(path).map_err(|source| CollectError::ReadFile {
            path: path.clone(),
            source,
        })?;
        debug!("  {} ({} bytes)", path.display(), contents.len());

        text.push_str(&contents);
        text.push('\n');
    }

    Ok(CombinedResults { files, text })
}

/// Combine `input_dir` and write the result to `output_path`
///
/// **Public** - used by the `collect` and `run` commands
///
/// Existing content at `output_path` is replaced.
pub fn collect_to_file(
    input_dir: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<CombinedResults, CollectError> {
    let output_path = output_path.as_ref();
    let combined = combine_files(input_dir)?;

    fs::write(output_path, combined.text.as_bytes()).map_err(|source| CollectError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!(
        "Combined {} files into {} ({} bytes)",
        combined.file_count(),
        output_path.display(),
        combined.text.len()
    );

    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_combine_sorts_by_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "2,2,0.2,0.2").unwrap();
        fs::write(dir.path().join("a.txt"), "1,1,0.1,0.1").unwrap();

        let combined = combine_files(dir.path()).unwrap();

        assert_eq!(combined.text, "1,1,0.1,0.1\n2,2,0.2,0.2\n");
        assert_eq!(combined.file_count(), 2);
        assert!(combined.files[0].ends_with("a.txt"));
    }

    #[test]
    fn test_lexicographic_not_numeric() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("size_2"), "two").unwrap();
        fs::write(dir.path().join("size_10"), "ten").unwrap();

        let combined = combine_files(dir.path()).unwrap();
        assert_eq!(combined.text, "ten\ntwo\n");
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("combined.txt");
        let input = dir.path().join("input");
        fs::create_dir(&input).unwrap();

        let combined = collect_to_file(&input, &out).unwrap();

        assert!(combined.text.is_empty());
        assert_eq!(fs::read(&out).unwrap().len(), 0);
    }

    #[test]
    fn test_subdirectory_is_fatal() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let result = combine_files(dir.path());
        assert!(matches!(result, Err(CollectError::ReadFile { .. })));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempdir().unwrap();
        let result = combine_files(dir.path().join("missing"));
        assert!(matches!(result, Err(CollectError::ReadDir { .. })));
    }

    #[test]
    fn test_overwrites_existing_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("a"), "x").unwrap();

        let out = dir.path().join("combined.txt");
        fs::write(&out, "stale content that is longer").unwrap();

        collect_to_file(&input, &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "x\n");
    }
}
