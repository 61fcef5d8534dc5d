//! Font acquisition and subsetting

pub mod cache;
pub mod sfnt;
pub mod source;
pub mod subset;

// Re-export commonly used items
pub use cache::{FontCache, DEFAULT_CACHE_DIR};
pub use source::FontSource;
pub use subset::{
    load_font, save_font, subset_font, FontFile, SubsetFont, SubsetOptions, SubsetReport, Subsetter,
};
