//! A read-only virtual filesystem over statically embedded assets.
//!
//! An asset-embedding step compiles files into the binary as byte tables and
//! hands this crate three lookups: content bytes per asset path, metadata
//! per asset path, and child names per directory path. [`AssetFs`] combines
//! them behind the [`Fs`] trait so generic file-serving and file-walking
//! code can treat the embedded assets like a real disk directory, including
//! directories that exist only because a children table declares them.

use std::io::{Read, Seek};

use atomicow::CowArc;

pub mod assets;
pub mod file;
pub mod info;
pub mod path;

pub use assets::{AssetFs, BytesFn, ChildrenFn, MetadataFn};
pub use file::AssetFile;
pub use info::{AssetFileInfo, AssetMetadata, DirInfo, FileInfo, FileMode};

/// The content bytes of an asset.
///
/// Embedded assets hand out their `&'static [u8]` payload without copying;
/// owned buffers remain possible for providers that build content at
/// runtime.
pub type Bytes = CowArc<'static, [u8]>;

/// The operation a failed lookup was issued from, as rendered in the error
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Op {
    Open,
    Stat,
    Lstat,
    ReadDir,
}

/// The single error kind: the requested path is absent from the relevant
/// lookup, or the request is structurally invalid for what the path is
/// (opening a directory as a byte stream, listing a file).
///
/// The display text follows the `<Op> <path>: no such file or directory`
/// convention; callers pattern-match on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{op} {path}: no such file or directory")]
pub struct NotFound {
    op: Op,
    path: String,
}

impl NotFound {
    pub fn new(op: Op, path: impl Into<String>) -> Self {
        Self {
            op,
            path: path.into(),
        }
    }

    /// The operation that failed.
    pub fn op(&self) -> Op {
        self.op
    }

    /// The normalized path that was not found.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Classification of a filesystem root.
///
/// The surrounding virtual-filesystem abstraction asks every implementation
/// what kind of root it serves; an asset filesystem has exactly one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RootType {
    #[default]
    Assets,
}

/// An open, readable and seekable handle as returned by [`Fs::open`].
///
/// Handles are independent per open call; concurrent opens of the same path
/// never share a cursor. Callers close the handle when done with it.
pub trait File: Read + Seek + Send + Sync + std::fmt::Debug {
    /// Releases the handle. Idempotent, with no effect beyond making
    /// further reads and seeks fail.
    fn close(&mut self);
}

/// A read-only filesystem.
///
/// All paths are slash-separated and relative; leading slashes are stripped
/// before resolution, and the root directory is the empty string.
pub trait Fs: Send + Sync {
    /// Opens the file at `path` for reading.
    ///
    /// Directories are not openable as byte streams; opening one fails with
    /// [`NotFound`] just as a missing path does.
    fn open(&self, path: &str) -> Result<Box<dyn File>, NotFound>;

    /// Returns metadata for the file or directory at `path`.
    fn stat(&self, path: &str) -> Result<Box<dyn FileInfo>, NotFound>;

    /// Like [`Fs::stat`]. There are no symbolic links in this model, so the
    /// two are equivalent; both exist because generic file-walking callers
    /// expect both.
    fn lstat(&self, path: &str) -> Result<Box<dyn FileInfo>, NotFound>;

    /// Lists the immediate children of the directory at `path`, sorted by
    /// name. Fails with [`NotFound`] for missing paths and for file paths.
    fn read_dir(&self, path: &str) -> Result<Vec<Box<dyn FileInfo>>, NotFound>;

    /// Classifies the root this filesystem serves. Never consults the
    /// backing data.
    fn root_type(&self, path: &str) -> RootType;

    /// The display name of this filesystem.
    fn name(&self) -> &str;
}
