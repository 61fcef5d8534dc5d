//! Error types for the font subsetting library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the font subsetting library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Font file not found
    #[error("Font file '{}' does not exist", .0.display())]
    FileNotFound(PathBuf),

    /// Font source string cannot be used
    #[error("Invalid font source: {0}")]
    InvalidSource(String),

    /// Download of a remote font failed
    #[error("Error downloading font from '{url}': {message}")]
    Download { url: String, message: String },

    /// Text directory does not exist
    #[error("Text directory '{}' does not exist", .0.display())]
    TextDirNotFound(PathBuf),

    /// Text directory path is not a directory
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A text file could not be decoded
    #[error("Cannot decode '{}': {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    /// Scan produced no characters
    #[error("No characters found in '{}'", .0.display())]
    NoCharacters(PathBuf),

    /// Font face could not be parsed
    #[error("Cannot parse font {index} in '{}'", .path.display())]
    FontParse { path: PathBuf, index: u32 },

    /// Font index outside the collection
    #[error("Font number {index} out of range: '{}' contains {count} font(s)", .path.display())]
    FontIndexOutOfRange { path: PathBuf, index: u32, count: u32 },

    /// Structural problem in sfnt data
    #[error("Malformed font data: {0}")]
    MalformedFont(String),

    /// Error raised by the glyph subsetter
    #[error("Error during font subsetting: {0}")]
    Subset(String),
}

impl From<subsetter::Error> for Error {
    fn from(err: subsetter::Error) -> Self {
        Error::Subset(err.to_string())
    }
}
