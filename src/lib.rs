//! Font Subsetting Library
//!
//! Shrinks a font down to the characters a localization project actually uses.
//! This library provides functionality to:
//! - Resolve a font from a local path or download it into a cache
//! - Collect the unique printable characters of a tree of translation files
//! - Subset a font (or one face of a font collection) to those characters
//!
//! # Example
//!
//! ```no_run
//! use subset_font::font::{subset_font, FontCache, FontSource, SubsetOptions};
//! use subset_font::text::{collect_chars, CollectOptions};
//! use std::path::Path;
//!
//! let cache = FontCache::in_current_dir()?;
//! let font = FontSource::parse("https://example.com/fonts/NotoSans-Regular.ttf").resolve(&cache)?;
//!
//! let (chars, _) = collect_chars(Path::new("package/Interface/Translations"), &CollectOptions::default())?;
//!
//! subset_font(&font, Path::new("Subset.ttf"), &chars, &SubsetOptions::default())?;
//! # Ok::<(), subset_font::Error>(())
//! ```

pub mod error;
pub mod font;
pub mod text;

// Re-export commonly used items
pub use error::{Error, Result};
