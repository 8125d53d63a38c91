//! Centralized constants for archive naming and limits.

/// Maximum total bytes per archive.
///
/// Kept at 950 MB so that an archive plus zip overhead stays under a
/// 1,000,000,000 byte upload ceiling.
pub const LIMIT_SIZE: u64 = 950_000_000;

/// Minimum width of the zero-padded archive index.
pub const INDEX_WIDTH: usize = 3;

/// Extension of every written archive.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "zipsplit=info";

/// Log filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "zipsplit=debug";
