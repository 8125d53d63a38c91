use crate::archive::{self, ArchiveError};
use crate::cli::SplitArgs;
use crate::constants::LIMIT_SIZE;
use crate::listing::{self, ListError};
use crate::naming::{self, ArchiveName, NamingError};
use crate::packer::{self, PackError};
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub stem: Option<String>,
    pub limit: u64,
}

impl SplitRequest {
    /// Packs the current directory into its parent.
    pub fn for_current_dir(stem: Option<String>) -> Result<Self, SplitError> {
        let source_dir = env::current_dir()?;
        let output_dir = source_dir
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| SplitError::NoParent(source_dir.clone()))?;
        Ok(SplitRequest {
            source_dir,
            output_dir,
            stem,
            limit: LIMIT_SIZE,
        })
    }
}

impl TryFrom<SplitArgs> for SplitRequest {
    type Error = SplitError;

    fn try_from(args: SplitArgs) -> Result<Self, Self::Error> {
        SplitRequest::for_current_dir(args.stem)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArchive {
    pub path: PathBuf,
    pub files: Vec<String>,
    pub bytes: u64,
}

#[derive(Debug)]
pub struct SplitOutcome {
    pub archives: Vec<WrittenArchive>,
}

#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error(transparent)]
    Pack(#[from] PackError),
    #[error(transparent)]
    List(#[from] ListError),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
    #[error(transparent)]
    Naming(#[from] NamingError),
    #[error("'{0}' has no parent directory to write archives into")]
    NoParent(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Default)]
pub struct SplitService;

impl SplitService {
    /// Lists, packs and archives `request.source_dir`.
    ///
    /// Every entry is checked against the limit before the first archive is
    /// written, so an oversized file aborts the run with nothing on disk.
    pub fn execute(&self, request: &SplitRequest) -> Result<SplitOutcome, SplitError> {
        let stem = resolve_stem(request)?;
        let entries = listing::list_entries(&request.source_dir)?;
        info!(
            dir = %request.source_dir.display(),
            files = entries.len(),
            limit = request.limit,
            "packing directory"
        );

        let batches = packer::pack(entries, request.limit)?;

        let mut archives = Vec::with_capacity(batches.len());
        for batch in batches {
            let name = ArchiveName::new(stem.as_str(), batch.index);
            let path = name.in_dir(&request.output_dir);
            archive::write_archive(&request.source_dir, &path, &batch.names)?;
            info!(
                archive = %path.display(),
                files = batch.len(),
                bytes = batch.total,
                "wrote archive"
            );
            archives.push(WrittenArchive {
                path,
                files: batch.names,
                bytes: batch.total,
            });
        }

        Ok(SplitOutcome { archives })
    }
}

fn resolve_stem(request: &SplitRequest) -> Result<String, NamingError> {
    match &request.stem {
        Some(stem) => {
            naming::validate_stem(stem)?;
            Ok(stem.clone())
        }
        None => naming::stem_from_dir(&request.source_dir),
    }
}
