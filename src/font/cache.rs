//! On-disk cache for downloaded fonts

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};

/// Directory name used for the cache under the working directory
pub const DEFAULT_CACHE_DIR: &str = "fonts";

/// Download cache keyed by the file name at the end of the URL
#[derive(Debug, Clone)]
pub struct FontCache {
    dir: PathBuf,
}

impl FontCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache rooted at `./fonts`
    pub fn in_current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?.join(DEFAULT_CACHE_DIR)))
    }

    /// Location a URL is cached at
    pub fn path_for(&self, url: &Url) -> Result<PathBuf> {
        let name = url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .ok_or_else(|| Error::InvalidSource(format!("URL '{}' has no file name", url)))?;

        Ok(self.dir.join(name))
    }

    /// Whether `url` is already in the cache
    pub fn contains(&self, url: &Url) -> bool {
        self.path_for(url).is_ok_and(|path| path.is_file())
    }

    /// Return the cached copy of `url`, downloading it first if it is absent
    ///
    /// A cached file is reused as-is; nothing checks whether the remote file
    /// changed. The download goes to a temporary file in the cache directory
    /// and is renamed into place only once complete.
    pub fn fetch(&self, url: &Url) -> Result<PathBuf> {
        let path = self.path_for(url)?;
        if path.is_file() {
            debug!("Using cached font '{}'", path.display());
            return Ok(path);
        }

        fs::create_dir_all(&self.dir)?;

        info!("Downloading font from '{}' to '{}'", url, path.display());

        let download_error = |message: String| Error::Download {
            url: url.to_string(),
            message,
        };

        let response = ureq::get(url.as_str())
            .call()
            .map_err(|e| download_error(e.to_string()))?;

        let mut temp = NamedTempFile::new_in(&self.dir)?;
        let bytes = io::copy(&mut response.into_reader(), temp.as_file_mut())
            .map_err(|e| download_error(e.to_string()))?;

        temp.persist(&path).map_err(|e| Error::Io(e.error))?;
        debug!(bytes, "saved '{}'", path.display());

        Ok(path)
    }
}
