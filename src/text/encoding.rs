//! Text decoding for translation files

use std::fmt;
use std::str::FromStr;

/// Encoding used to read every scanned text file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-16, little-endian (the format the game's translation files ship in)
    #[default]
    Utf16Le,
    /// UTF-16, big-endian
    Utf16Be,
    /// UTF-8
    Utf8,
}

impl TextEncoding {
    /// Decode raw file contents
    ///
    /// Decoding is strict: a trailing odd byte or an unpaired surrogate in
    /// UTF-16 input, or an invalid sequence in UTF-8 input, is an error.
    /// A byte order mark is not stripped.
    pub fn decode(self, bytes: &[u8]) -> Result<String, String> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| e.utf8_error().to_string()),
            TextEncoding::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
            TextEncoding::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
        }
    }

    /// Canonical name, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
            TextEncoding::Utf8 => "utf-8",
        }
    }
}

fn decode_utf16(bytes: &[u8], read: fn([u8; 2]) -> u16) -> Result<String, String> {
    if bytes.len() % 2 != 0 {
        return Err(format!("truncated data: {} bytes is not a whole number of UTF-16 units", bytes.len()));
    }

    let units = bytes.chunks_exact(2).map(|pair| read([pair[0], pair[1]]));

    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| format!("unpaired surrogate 0x{:04X}", e.unpaired_surrogate()))
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-16le" | "utf-16-le" | "utf16le" => Ok(TextEncoding::Utf16Le),
            "utf-16be" | "utf-16-be" | "utf16be" => Ok(TextEncoding::Utf16Be),
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            _ => Err(format!("unknown encoding '{}' (expected utf-16le, utf-16be or utf-8)", s)),
        }
    }
}
