use crate::packer::FileEntry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("File name {0:?} is not valid UTF-8")]
    NonUtf8Name(PathBuf),
}

impl ListError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        ListError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Regular files directly inside `dir`, sorted by name.
///
/// Subdirectories, FIFOs, sockets and device nodes are skipped. Symlinks are
/// followed, so a link to a file counts with the target's size and a link to
/// a directory is skipped.
pub fn list_entries(dir: &Path) -> Result<Vec<FileEntry>, ListError> {
    let mut entries = Vec::new();
    for item in fs::read_dir(dir).map_err(|err| ListError::io(dir, err))? {
        let item = item.map_err(|err| ListError::io(dir, err))?;
        let path = item.path();
        let metadata = fs::metadata(&path).map_err(|err| ListError::io(&path, err))?;

        if metadata.is_dir() {
            warn!(path = %path.display(), "skipping subdirectory");
            continue;
        }
        if !metadata.is_file() {
            warn!(path = %path.display(), "skipping special file");
            continue;
        }

        let name = item
            .file_name()
            .into_string()
            .map_err(|_| ListError::NonUtf8Name(path.clone()))?;
        debug!(%name, size = metadata.len(), "listed file");
        entries.push(FileEntry::new(name, metadata.len()));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
