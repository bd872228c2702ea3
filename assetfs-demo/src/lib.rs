//! Embedded demo asset sets for the `assetfs` crate.
//!
//! Stands in for the generated output of an asset-embedding step: a static
//! byte table and a children table per set, plus constructors returning
//! ready-made filesystems. Two sets are provided so an external union layer
//! can be exercised over disjoint namespaces.

use std::time::{Duration, SystemTime};

use assetfs::{AssetFs, AssetMetadata, FileMode};
use atomicow::CowArc;

/// Build timestamp recorded for every embedded demo asset.
pub fn embed_time() -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)
}

fn meta(size: u64) -> AssetMetadata {
    AssetMetadata {
        size,
        mod_time: embed_time(),
        // Source files were 0644; the filesystem masks this to 0444.
        mode: FileMode::from_bits_truncate(0o644),
    }
}

type AssetTable = [(&'static str, &'static [u8])];
type DirTable = [(&'static str, &'static [&'static str])];

fn lookup(table: &'static AssetTable, path: &str) -> Option<&'static [u8]> {
    table
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, data)| *data)
}

fn children(table: &'static DirTable, path: &str) -> Option<Vec<String>> {
    table
        .iter()
        .find(|(dir, _)| *dir == path)
        .map(|(_, names)| names.iter().map(|n| n.to_string()).collect())
}

fn build(name: &str, assets: &'static AssetTable, dirs: &'static DirTable) -> AssetFs {
    AssetFs::new(
        name,
        Some(Box::new(move |path: &str| {
            lookup(assets, path).map(CowArc::Static)
        })),
        Some(Box::new(move |path: &str| {
            lookup(assets, path).map(|data| meta(data.len() as u64))
        })),
        Some(Box::new(move |path: &str| children(dirs, path))),
    )
}

static HELLO_TXT: &[u8] = b"Hello World";
static HELLO_WORLD_TXT: &[u8] = b"Hello World of files\n";
static HELLO_BAR_TXT: &[u8] = b"Hello Bar\n";
static INDEX_HTML: &[u8] = b"<!DOCTYPE html>\n<html><body>Hello Index</body></html>\n";

static ASSETS1: &AssetTable = &[
    ("hello.txt", HELLO_TXT),
    ("hello/world.txt", HELLO_WORLD_TXT),
    ("hello/bar.txt", HELLO_BAR_TXT),
    ("index.html", INDEX_HTML),
];

static DIRS1: &DirTable = &[
    ("", &["hello", "hello.txt", "index.html"]),
    ("hello", &["bar.txt", "world.txt"]),
];

static HELLO_TXT2: &[u8] = b"Hello CSS Assets";
static STYLE_CSS: &[u8] = b"body { background-color: #AFA; }";

static ASSETS2: &AssetTable = &[("hello.txt", HELLO_TXT2), ("css/style.css", STYLE_CSS)];

static DIRS2: &DirTable = &[("", &["css", "hello.txt"]), ("css", &["style.css"])];

/// The primary demo set, served under the `assets://` namespace.
pub fn assets_fs() -> AssetFs {
    build("assets://", ASSETS1, DIRS1)
}

/// The secondary demo set, served under the `assets2://` namespace.
///
/// Overlaps `hello.txt` with the primary set so union layering is
/// observable.
pub fn assets2_fs() -> AssetFs {
    build("assets2://", ASSETS2, DIRS2)
}
