//! Character collection from translation files

pub mod charset;
pub mod collect;
pub mod encoding;
pub mod printable;

// Re-export commonly used items
pub use charset::CharSet;
pub use collect::{collect_chars, CollectOptions, CollectStats};
pub use encoding::TextEncoding;
pub use printable::is_printable;
