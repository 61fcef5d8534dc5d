//! Directory scanning for translation files

use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::{CharSet, TextEncoding};
use crate::error::{Error, Result};

/// Options for scanning a text directory
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// File name suffixes to read (e.g. ".txt")
    pub extensions: Vec<String>,
    /// Directory names that are skipped entirely
    pub exclude_dirs: Vec<String>,
    /// Encoding of every matching file
    pub encoding: TextEncoding,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            extensions: vec![".txt".to_string()],
            exclude_dirs: Vec::new(),
            encoding: TextEncoding::Utf16Le,
        }
    }
}

impl CollectOptions {
    fn matches_file(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            if ext.starts_with('.') {
                name.ends_with(ext.as_str())
            } else {
                name.ends_with(&format!(".{}", ext))
            }
        })
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        // The root itself is never excluded
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self
                .exclude_dirs
                .iter()
                .any(|ex| *ex == entry.file_name().to_string_lossy())
    }
}

/// Counters gathered while scanning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectStats {
    /// Matching files whose characters were collected
    pub files_scanned: usize,
    /// Matching files skipped because of read or decode errors
    pub files_skipped: usize,
}

/// Collect the distinct printable characters used by every matching file under `root`
///
/// Files that cannot be read or decoded are reported as warnings and skipped.
/// Fails if `root` is not an existing directory or no character was found.
///
/// # Example
///
/// ```no_run
/// use subset_font::text::{collect_chars, CollectOptions};
/// use std::path::Path;
///
/// let (chars, _stats) = collect_chars(Path::new("package/Interface/Translations"), &CollectOptions::default())
///     .expect("Failed to collect characters");
/// println!("Collected {} unique characters.", chars.len());
/// ```
pub fn collect_chars(root: &Path, options: &CollectOptions) -> Result<(CharSet, CollectStats)> {
    if !root.exists() {
        return Err(Error::TextDirNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut chars = CharSet::new();
    let mut stats = CollectStats::default();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !options.is_excluded(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error walking '{}': {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if !options.matches_file(&entry.file_name().to_string_lossy()) {
            continue;
        }

        match read_text(entry.path(), options.encoding) {
            Ok(text) => {
                chars.add_printable(&text);
                stats.files_scanned += 1;
            }
            Err(e) => {
                warn!("Error reading '{}': {}", entry.path().display(), e);
                stats.files_skipped += 1;
            }
        }
    }

    debug!(
        files_scanned = stats.files_scanned,
        files_skipped = stats.files_skipped,
        unique_chars = chars.len(),
        "scanned '{}'",
        root.display()
    );

    if chars.is_empty() {
        return Err(Error::NoCharacters(root.to_path_buf()));
    }

    Ok((chars, stats))
}

fn read_text(path: &Path, encoding: TextEncoding) -> Result<String> {
    let bytes = fs::read(path)?;
    encoding.decode(&bytes).map_err(|message| Error::Decode {
        path: path.to_path_buf(),
        message,
    })
}
