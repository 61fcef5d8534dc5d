//! Table-level rewriting of the glyph subsetter output
//!
//! `subsetter` targets PDF embedding: its output has no character map and no
//! `OS/2` table. Both are added back here so the result loads as a regular
//! text font.

use write_fonts::read::FontRef;
use write_fonts::tables::cmap::Cmap;
use write_fonts::types::{GlyphId, Tag};
use write_fonts::FontBuilder;

use crate::error::{Error, Result};

pub const CMAP: Tag = Tag::new(b"cmap");
pub const OS2: Tag = Tag::new(b"OS/2");

/// Byte range of `usFirstCharIndex` and `usLastCharIndex` in `OS/2`
const OS2_CHAR_RANGE: std::ops::Range<usize> = 64..68;

/// Rebuild `glyphs` with a `cmap` for `mappings` and, if given, the source `OS/2`
///
/// `mappings` pairs each character with its glyph ID in the subset font.
/// Every table of `glyphs` is carried over unchanged.
pub fn rebuild(glyphs: &[u8], mappings: &[(char, u16)], os2: Option<&[u8]>) -> Result<Vec<u8>> {
    let font = FontRef::new(glyphs).map_err(|e| Error::MalformedFont(e.to_string()))?;

    let cmap = Cmap::from_mappings(
        mappings
            .iter()
            .map(|&(c, gid)| (c, GlyphId::new(u32::from(gid)))),
    )
    .map_err(|e| Error::Subset(e.to_string()))?;

    let mut builder = FontBuilder::new();
    builder
        .add_table(&cmap)
        .map_err(|e| Error::Subset(e.to_string()))?;
    if let Some(os2) = os2 {
        builder.add_raw(OS2, with_char_range(os2, mappings));
    }

    for record in font.table_directory.table_records() {
        let tag = record.tag();
        if tag == CMAP || (tag == OS2 && os2.is_some()) {
            continue;
        }
        if let Some(data) = font.table_data(tag) {
            builder.add_raw(tag, data.as_bytes().to_vec());
        }
    }

    Ok(builder.build())
}

/// Copy of `os2` with the first/last character index narrowed to `mappings`
fn with_char_range(os2: &[u8], mappings: &[(char, u16)]) -> Vec<u8> {
    let mut os2 = os2.to_vec();

    let first = mappings.iter().map(|&(c, _)| c as u32).min();
    let last = mappings.iter().map(|&(c, _)| c as u32).max();
    if let (Some(first), Some(last), Some(field)) = (first, last, os2.get_mut(OS2_CHAR_RANGE)) {
        // Both fields saturate at 0xFFFF
        let first = first.min(0xFFFF) as u16;
        let last = last.min(0xFFFF) as u16;
        field[..2].copy_from_slice(&first.to_be_bytes());
        field[2..].copy_from_slice(&last.to_be_bytes());
    }
    os2
}
