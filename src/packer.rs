//! Assigns directory entries to size-bounded batches.
//!
//! The packer is pure: it never touches the filesystem. Each [`Batch`] it
//! yields maps to exactly one archive, in the order the batches are sealed.

use std::mem;
use tracing::debug;

/// A single file as observed in the directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        FileEntry {
            name: name.into(),
            size,
        }
    }
}

/// File names destined for one archive, plus their accumulated size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// 1-based position of this batch in the run.
    pub index: usize,
    pub names: Vec<String>,
    pub total: u64,
}

impl Batch {
    fn empty(index: usize) -> Self {
        Batch {
            index,
            names: Vec::new(),
            total: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    fn admit(&mut self, entry: FileEntry) {
        self.total += entry.size;
        self.names.push(entry.name);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("{name} is {size} bytes, bigger than the {limit} byte archive limit. Cannot proceed.")]
    OversizedEntry { name: String, size: u64, limit: u64 },
}

/// Accumulates entries into the current batch, sealing it when the next
/// entry would push it over the limit.
///
/// `finish` consumes the packer, so no entry can be pushed after the final
/// batch has been handed out.
#[derive(Debug)]
pub struct Packer {
    limit: u64,
    current: Batch,
}

impl Packer {
    pub fn new(limit: u64) -> Self {
        Packer {
            limit,
            current: Batch::empty(1),
        }
    }

    /// Admits `entry`, returning the previous batch if it had to be sealed to
    /// make room.
    pub fn push(&mut self, entry: FileEntry) -> Result<Option<Batch>, PackError> {
        guard_size(&entry, self.limit)?;

        let would_be = self.current.total.saturating_add(entry.size);
        if would_be > self.limit && !self.current.is_empty() {
            let next = Batch::empty(self.current.index + 1);
            let sealed = mem::replace(&mut self.current, next);
            debug!(
                index = sealed.index,
                files = sealed.len(),
                bytes = sealed.total,
                overflow_by = %entry.name,
                "sealed batch"
            );
            self.current.admit(entry);
            return Ok(Some(sealed));
        }

        debug!(name = %entry.name, size = entry.size, index = self.current.index, "admitted entry");
        self.current.admit(entry);
        Ok(None)
    }

    /// Seals and returns the batch in progress, even when it is empty.
    pub fn finish(self) -> Batch {
        debug!(
            index = self.current.index,
            files = self.current.len(),
            bytes = self.current.total,
            "sealed final batch"
        );
        self.current
    }
}

/// Rejects an entry that could never fit in any archive on its own.
pub fn guard_size(entry: &FileEntry, limit: u64) -> Result<(), PackError> {
    if entry.size > limit {
        return Err(PackError::OversizedEntry {
            name: entry.name.clone(),
            size: entry.size,
            limit,
        });
    }
    Ok(())
}

/// Packs `entries` in order. An empty input yields a single empty batch.
pub fn pack<I>(entries: I, limit: u64) -> Result<Vec<Batch>, PackError>
where
    I: IntoIterator<Item = FileEntry>,
{
    let mut packer = Packer::new(limit);
    let mut batches = Vec::new();
    for entry in entries {
        if let Some(sealed) = packer.push(entry)? {
            batches.push(sealed);
        }
    }
    batches.push(packer.finish());
    Ok(batches)
}
