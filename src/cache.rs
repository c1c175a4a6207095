//! Storage for compiled routes, so that compilation can happen once per
//! process (or once per deployment, with [`FileCache`]).

use crate::prefix_map::CompileError;
use crate::routes::CompiledRoutes;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

pub trait RouteCache<R> {
    /// Returns the routes stored under `key`, or stores and returns the
    /// result of `factory`. `factory` runs at most once per call and only on a
    /// miss.
    fn get_or_compute<F>(&self, key: &str, factory: F) -> Result<Arc<CompiledRoutes<R>>, CompileError>
    where
        F: FnOnce() -> Result<CompiledRoutes<R>, CompileError>;
}

/// Stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

impl<R> RouteCache<R> for NullCache {
    fn get_or_compute<F>(&self, _key: &str, factory: F) -> Result<Arc<CompiledRoutes<R>>, CompileError>
    where
        F: FnOnce() -> Result<CompiledRoutes<R>, CompileError>,
    {
        factory().map(Arc::new)
    }
}

/// Keeps compiled routes in memory, shared between threads.
///
/// The factory runs while the entry is locked: it must not use the same cache.
#[derive(Debug)]
pub struct MemoryCache<R> {
    entries: DashMap<String, Arc<CompiledRoutes<R>>>,
}

impl<R> Default for MemoryCache<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> MemoryCache<R> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear()
    }
}

impl<R> RouteCache<R> for MemoryCache<R> {
    fn get_or_compute<F>(&self, key: &str, factory: F) -> Result<Arc<CompiledRoutes<R>>, CompileError>
    where
        F: FnOnce() -> Result<CompiledRoutes<R>, CompileError>,
    {
        if let Some(routes) = self.entries.get(key) {
            return Ok(Arc::clone(&routes));
        }
        match self.entries.entry(key.to_owned()) {
            Entry::Occupied(e) => Ok(Arc::clone(e.get())),
            Entry::Vacant(e) => {
                let routes = Arc::new(factory()?);
                e.insert(Arc::clone(&routes));
                debug!(key, "cached compiled routes in memory");
                Ok(routes)
            }
        }
    }
}

const FILE_NAME: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Keeps compiled routes as JSON files, one per key, in a directory.
///
/// An unreadable file is treated as a miss and overwritten.
#[derive(Debug, Clone)]
pub struct FileCache {
    directory: PathBuf,
}

impl Default for FileCache {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join("prefix_router"))
    }
}

impl FileCache {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The file backing `key`.
    ///
    /// Every byte outside `[A-Za-z0-9_-]` is percent-encoded, so distinct
    /// keys never share a file.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name = utf8_percent_encode(key, FILE_NAME);
        self.directory.join(format!("{}.json", name))
    }

    fn load<R: DeserializeOwned>(path: &Path) -> Option<CompiledRoutes<R>> {
        let file = File::open(path).ok()?;
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(routes) => Some(routes),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed route cache file");
                None
            }
        }
    }

    fn store<R: Serialize>(path: &Path, routes: &CompiledRoutes<R>) -> Result<(), CompileError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, routes)?;
        writer.flush()?;
        Ok(())
    }
}

impl<R> RouteCache<R> for FileCache
where
    R: Serialize + DeserializeOwned,
{
    fn get_or_compute<F>(&self, key: &str, factory: F) -> Result<Arc<CompiledRoutes<R>>, CompileError>
    where
        F: FnOnce() -> Result<CompiledRoutes<R>, CompileError>,
    {
        let path = self.path_for(key);
        if let Some(routes) = Self::load(&path) {
            return Ok(Arc::new(routes));
        }

        let routes = factory()?;
        Self::store(&path, &routes)?;
        debug!(key, path = %path.display(), "wrote compiled routes to file");
        Ok(Arc::new(routes))
    }
}
