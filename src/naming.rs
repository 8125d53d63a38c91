use crate::constants::{ARCHIVE_EXTENSION, INDEX_WIDTH};
use std::fmt;
use std::path::{Path, PathBuf};

/// `<stem><index>.zip`, with the index zero-padded to at least three digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    stem: String,
    index: usize,
}

impl ArchiveName {
    pub fn new(stem: impl Into<String>, index: usize) -> Self {
        ArchiveName {
            stem: stem.into(),
            index,
        }
    }

    pub fn in_dir(&self, dir: &Path) -> PathBuf {
        dir.join(self.to_string())
    }
}

impl fmt::Display for ArchiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:0width$}.{}",
            self.stem,
            self.index,
            ARCHIVE_EXTENSION,
            width = INDEX_WIDTH
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    #[error("Cannot derive an archive name from '{0}': it has no base name; pass --stem")]
    NoStem(PathBuf),
    #[error("Directory name of '{0}' is not valid UTF-8; pass --stem")]
    NonUtf8(PathBuf),
    #[error("Invalid archive stem '{0}': must be non-empty and contain no path separators")]
    InvalidStem(String),
}

/// Base name of `dir`, used as the archive stem.
pub fn stem_from_dir(dir: &Path) -> Result<String, NamingError> {
    let name = dir
        .file_name()
        .ok_or_else(|| NamingError::NoStem(dir.to_path_buf()))?;
    name.to_str()
        .map(str::to_owned)
        .ok_or_else(|| NamingError::NonUtf8(dir.to_path_buf()))
}

/// Checks a stem supplied from outside the directory name.
pub fn validate_stem(stem: &str) -> Result<(), NamingError> {
    if stem.is_empty() || stem.contains(['/', '\\']) || stem == "." || stem == ".." {
        return Err(NamingError::InvalidStem(stem.to_string()));
    }
    Ok(())
}
