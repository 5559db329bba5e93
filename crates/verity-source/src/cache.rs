use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::SourceError;
use crate::index::SourceIndex;

type IndexCache = RwLock<FxHashMap<PathBuf, Arc<SourceIndex>>>;

static INDEXES: Lazy<IndexCache> = Lazy::new(|| RwLock::new(FxHashMap::default()));

/// Drops every cached source index.
pub fn clear_cache() {
    INDEXES.write().clear();
}

pub(crate) fn load_index(file: &str, use_cache: bool) -> Result<Arc<SourceIndex>, SourceError> {
    let path = resolve_path(file);
    if !use_cache {
        return parse_index(&path).map(Arc::new);
    }
    if let Some(index) = INDEXES.read().get(&path) {
        return Ok(Arc::clone(index));
    }

    // Parsed outside the lock; a concurrent parse of the same file yields the
    // same index, so whichever insert wins is fine.
    let index = Arc::new(parse_index(&path)?);
    let mut cache = INDEXES.write();
    let cached = cache.entry(path).or_insert(index);
    Ok(Arc::clone(cached))
}

fn parse_index(path: &Path) -> Result<SourceIndex, SourceError> {
    let source = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let index = SourceIndex::parse(&source).map_err(|err| SourceError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    debug!(
        "source index parsed path={} calls={}",
        path.display(),
        index.calls().len()
    );
    Ok(index)
}

/// Caller locations are relative to the directory rustc ran in, which is the
/// workspace root under cargo while tests run from the package directory.
fn resolve_path(file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    if let Ok(cwd) = env::current_dir() {
        for dir in cwd.ancestors() {
            let candidate = dir.join(path);
            if candidate.exists() {
                return candidate;
            }
        }
    }
    path.to_path_buf()
}
