//! The asset-backed filesystem implementation.

use std::fmt;

use atomicow::CowArc;

use crate::file::AssetFile;
use crate::info::{AssetFileInfo, AssetMetadata, DirInfo, FileInfo};
use crate::path;
use crate::{Bytes, File, Fs, NotFound, Op, RootType};

/// Asset-content lookup: normalized asset path to content bytes.
pub type BytesFn = dyn Fn(&str) -> Option<Bytes> + Send + Sync;

/// Asset-metadata lookup, independent of the content bytes.
pub type MetadataFn = dyn Fn(&str) -> Option<AssetMetadata> + Send + Sync;

/// Directory-children lookup: directory path (root = `""`) to immediate
/// child names.
pub type ChildrenFn = dyn Fn(&str) -> Option<Vec<String>> + Send + Sync;

/// A read-only filesystem over statically embedded assets.
///
/// Holds the three lookups an asset-embedding step generates. Any of them
/// may be absent; an absent lookup reports every path missing, so a
/// degraded filesystem still answers every query, with [`NotFound`].
///
/// Everything behind the lookups is immutable for the process lifetime, so
/// concurrent unsynchronized reads need no coordination.
pub struct AssetFs {
    name: CowArc<'static, str>,
    bytes: Option<Box<BytesFn>>,
    metadata: Option<Box<MetadataFn>>,
    children: Option<Box<ChildrenFn>>,
}

static_assertions::assert_impl_all!(AssetFs: Send, Sync);

impl AssetFs {
    pub fn new(
        name: &str,
        bytes: Option<Box<BytesFn>>,
        metadata: Option<Box<MetadataFn>>,
        children: Option<Box<ChildrenFn>>,
    ) -> Self {
        Self {
            name: CowArc::new_owned_from_arc(name),
            bytes,
            metadata,
            children,
        }
    }

    /// A filesystem with no backing data: every path is missing.
    pub fn empty(name: &str) -> Self {
        Self::new(name, None, None, None)
    }

    fn lookup_bytes(&self, path: &str) -> Option<Bytes> {
        (self.bytes.as_ref()?)(path)
    }

    fn lookup_metadata(&self, path: &str) -> Option<AssetMetadata> {
        (self.metadata.as_ref()?)(path)
    }

    fn lookup_children(&self, path: &str) -> Option<Vec<String>> {
        (self.children.as_ref()?)(path)
    }

    /// A path is a directory iff it is a key of the children table.
    fn is_dir(&self, path: &str) -> bool {
        self.lookup_children(path).is_some()
    }

    fn stat_as(&self, op: Op, path: &str) -> Result<Box<dyn FileInfo>, NotFound> {
        let path = path::normalize(path);
        if self.is_dir(path) {
            let name = if path.is_empty() {
                "/"
            } else {
                path::base_name(path)
            };
            return Ok(Box::new(DirInfo::new(name)));
        }
        match self.lookup_metadata(path) {
            Some(meta) => Ok(Box::new(AssetFileInfo::new(path::base_name(path), meta))),
            None => Err(NotFound::new(op, path)),
        }
    }
}

impl Fs for AssetFs {
    fn open(&self, path: &str) -> Result<Box<dyn File>, NotFound> {
        let path = path::normalize(path);
        // Directories are not byte streams.
        if self.is_dir(path) {
            return Err(NotFound::new(Op::Open, path));
        }
        match self.lookup_bytes(path) {
            Some(bytes) => Ok(Box::new(AssetFile::new(bytes))),
            None => Err(NotFound::new(Op::Open, path)),
        }
    }

    fn stat(&self, path: &str) -> Result<Box<dyn FileInfo>, NotFound> {
        self.stat_as(Op::Stat, path)
    }

    fn lstat(&self, path: &str) -> Result<Box<dyn FileInfo>, NotFound> {
        // No symbolic links exist in this model.
        self.stat_as(Op::Lstat, path)
    }

    fn read_dir(&self, path: &str) -> Result<Vec<Box<dyn FileInfo>>, NotFound> {
        let path = path::normalize(path);
        let mut children = self
            .lookup_children(path)
            .ok_or_else(|| NotFound::new(Op::ReadDir, path))?;
        children.sort();

        let mut entries: Vec<Box<dyn FileInfo>> = Vec::with_capacity(children.len());
        for child in children {
            let child_path = path::join(path, &child);
            if self.is_dir(&child_path) {
                entries.push(Box::new(DirInfo::new(child)));
            } else if let Some(meta) = self.lookup_metadata(&child_path) {
                entries.push(Box::new(AssetFileInfo::new(child, meta)));
            } else {
                // The children table names an asset the metadata table does
                // not know. Fail the whole listing rather than return a
                // partial one.
                log::warn!(
                    "{}: declared child {child_path} has no metadata",
                    &*self.name
                );
                return Err(NotFound::new(Op::ReadDir, child_path));
            }
        }
        Ok(entries)
    }

    fn root_type(&self, _path: &str) -> RootType {
        RootType::Assets
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for AssetFs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
