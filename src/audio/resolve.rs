//! Asset name resolution.
//!
//! Tracks refer to their audio by a bare name (`meditation1`). The
//! `DirResolver` looks for a file with that stem under the assets directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::config::AssetSettings;
use crate::error::ResolveError;

/// Audio bytes for a resolved asset name.
#[derive(Debug, Clone)]
pub struct AudioAsset {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

pub trait AssetResolver {
    fn resolve(&self, name: &str) -> Result<AudioAsset, ResolveError>;
}

/// Resolves names against files in a directory tree.
#[derive(Debug, Clone)]
pub struct DirResolver {
    root: PathBuf,
    extensions: Vec<String>,
    max_depth: Option<usize>,
}

impl DirResolver {
    pub fn new(root: impl Into<PathBuf>, settings: &AssetSettings) -> Self {
        let extensions = settings
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        Self {
            root: root.into(),
            extensions,
            max_depth: settings.max_depth,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find the file for `name` without reading it.
    ///
    /// A name matches a file stem (`meditation1` -> `meditation1.mp3`) or a
    /// full file name. When several files match, the one whose extension
    /// comes first in the configured list wins; ties go to the first path in
    /// walk order.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        let mut walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name();
        if let Some(d) = self.max_depth {
            walker = walker.max_depth(d);
        }

        let mut best: Option<(usize, PathBuf)> = None;
        for entry in walker.into_iter().filter_map(Result::ok) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(rank) = self.extension_rank(path) else {
                continue;
            };
            let stem_matches = path.file_stem().and_then(|s| s.to_str()) == Some(name);
            let name_matches = path.file_name().and_then(|s| s.to_str()) == Some(name);
            if !(stem_matches || name_matches) {
                continue;
            }
            if best.as_ref().map_or(true, |(r, _)| rank < *r) {
                best = Some((rank, path.to_path_buf()));
            }
        }

        best.map(|(_, p)| p)
    }

    fn extension_rank(&self, path: &Path) -> Option<usize> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        self.extensions.iter().position(|e| *e == ext)
    }
}

impl AssetResolver for DirResolver {
    fn resolve(&self, name: &str) -> Result<AudioAsset, ResolveError> {
        let path = self
            .locate(name)
            .ok_or_else(|| ResolveError::NotFound(name.to_string()))?;
        let bytes = fs::read(&path).map_err(|source| ResolveError::Io {
            path: path.clone(),
            source,
        })?;
        log::debug!("resolved {name:?} to {} ({} bytes)", path.display(), bytes.len());

        Ok(AudioAsset {
            name: name.to_string(),
            bytes: bytes.into(),
        })
    }
}
