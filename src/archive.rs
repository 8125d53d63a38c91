use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write archive {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Zip error while writing {path}: {source}")]
    Zip {
        path: PathBuf,
        #[source]
        source: ZipError,
    },
}

/// Writes `names` (relative to `source_dir`) into a stored, uncompressed zip
/// at `target`.
///
/// The archive is assembled in a temporary file next to `target` and only
/// renamed into place once complete, replacing any archive from an earlier run.
pub fn write_archive(
    source_dir: &Path,
    target: &Path,
    names: &[String],
) -> Result<(), ArchiveError> {
    let write_err = |source: io::Error| ArchiveError::Io {
        path: target.to_path_buf(),
        source,
    };
    let zip_err = |source: ZipError| ArchiveError::Zip {
        path: target.to_path_buf(),
        source,
    };

    let parent = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let temp = NamedTempFile::new_in(parent).map_err(write_err)?;
    let mut writer = ZipWriter::new(temp);

    for name in names {
        let path = source_dir.join(name);
        let read_err = |source: io::Error| ArchiveError::Read {
            path: path.clone(),
            source,
        };
        let mut file = File::open(&path).map_err(read_err)?;
        let size = file.metadata().map_err(read_err)?.len();

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .large_file(size >= u64::from(u32::MAX));
        writer.start_file(name.as_str(), options).map_err(zip_err)?;
        io::copy(&mut file, &mut writer).map_err(read_err)?;
        debug!(%name, size, archive = %target.display(), "stored file");
    }

    let temp = writer.finish().map_err(zip_err)?;
    temp.persist(target).map_err(|e| write_err(e.error))?;
    Ok(())
}
