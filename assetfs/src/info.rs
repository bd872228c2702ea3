//! Metadata views over filesystem entries.
//!
//! Two adapters implement [`FileInfo`]: [`AssetFileInfo`] wraps the metadata
//! record of an embedded asset, [`DirInfo`] synthesizes metadata for a
//! directory that has no backing record at all.

use std::any::Any;
use std::time::SystemTime;

bitflags::bitflags! {
    /// File mode bits: a directory type bit plus Unix permission bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FileMode: u32 {
        /// Directory type bit.
        const DIR = 1 << 31;
        /// Mask selecting the permission bits.
        const PERM = 0o777;
        /// Mask selecting the type bits.
        const TYPE = Self::DIR.bits();
    }
}

impl FileMode {
    /// Permission bits reported for asset files.
    pub const FILE_PERM: FileMode = FileMode::from_bits_truncate(0o444);

    /// Permission bits reported for synthesized directories.
    pub const DIR_PERM: FileMode = FileMode::from_bits_truncate(0o777);

    /// Whether the directory bit is set.
    pub const fn is_dir(self) -> bool {
        self.contains(FileMode::DIR)
    }

    /// The permission bits alone.
    pub const fn perm(self) -> FileMode {
        self.intersection(FileMode::PERM)
    }
}

/// Per-asset metadata, available without touching the content bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetMetadata {
    /// Content length in bytes.
    pub size: u64,
    /// Last-modified timestamp recorded when the asset was embedded.
    pub mod_time: SystemTime,
    /// Mode bits recorded for the source file.
    pub mode: FileMode,
}

/// Metadata view over a filesystem entry.
pub trait FileInfo: Send + Sync + std::fmt::Debug {
    /// Base name of the entry.
    fn name(&self) -> &str;

    /// Length in bytes for regular files; always 0 for directories.
    fn size(&self) -> u64;

    /// Modification time; the Unix epoch for synthesized directories.
    fn mod_time(&self) -> SystemTime;

    /// File mode bits.
    fn mode(&self) -> FileMode;

    /// Abbreviation for `mode().is_dir()`.
    fn is_dir(&self) -> bool {
        self.mode().is_dir()
    }

    /// Underlying system object; embedded assets have none.
    fn sys(&self) -> Option<&(dyn Any + Send + Sync)> {
        None
    }
}

/// [`FileInfo`] for an asset file, wrapping its metadata record.
#[derive(Debug)]
pub struct AssetFileInfo {
    name: String,
    meta: AssetMetadata,
}

impl AssetFileInfo {
    /// Wraps `meta` under an explicit display name.
    ///
    /// The name is an override, not derived from the record: the caller
    /// presents the basename even when the record was keyed by a longer
    /// path.
    pub fn new(name: impl Into<String>, meta: AssetMetadata) -> Self {
        Self {
            name: name.into(),
            meta,
        }
    }
}

impl FileInfo for AssetFileInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.meta.size
    }

    fn mod_time(&self) -> SystemTime {
        self.meta.mod_time
    }

    /// Type bits pass through from the record; permissions are forced to
    /// read-only.
    fn mode(&self) -> FileMode {
        self.meta
            .mode
            .intersection(FileMode::TYPE)
            .union(FileMode::FILE_PERM)
    }
}

/// [`FileInfo`] for a directory synthesized from a children table.
///
/// No backing record exists, so every field is fixed: size 0 (the real
/// value would be system-dependent), mode `DIR | 0777`, modification time
/// at the Unix epoch.
#[derive(Debug)]
pub struct DirInfo {
    name: String,
}

impl DirInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FileInfo for DirInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        0
    }

    fn mod_time(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH
    }

    fn mode(&self) -> FileMode {
        FileMode::DIR.union(FileMode::DIR_PERM)
    }
}
