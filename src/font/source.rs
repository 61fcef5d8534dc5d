//! Font source resolution

use std::path::{Path, PathBuf};

use url::Url;

use super::cache::FontCache;
use crate::error::{Error, Result};

/// Where the original font comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A file on the local filesystem
    Local(PathBuf),
    /// A URL to download into the font cache
    Remote(Url),
}

impl FontSource {
    /// Classify a path-or-URL string
    ///
    /// Only strings with both a scheme and a host are remote, so Windows
    /// drive paths like `C:/Windows/Fonts/msyh.ttc` stay local.
    pub fn parse(source: &str) -> Self {
        match Url::parse(source) {
            Ok(url) if url.host().is_some() => FontSource::Remote(url),
            _ => FontSource::Local(PathBuf::from(source)),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, FontSource::Remote(_))
    }

    /// Resolve to a readable local font file, downloading through `cache` if needed
    pub fn resolve(&self, cache: &FontCache) -> Result<PathBuf> {
        let path = match self {
            FontSource::Local(path) => path.clone(),
            FontSource::Remote(url) => cache.fetch(url)?,
        };

        ensure_file(&path)?;
        Ok(path)
    }
}

fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::FileNotFound(path.to_path_buf()))
    }
}
