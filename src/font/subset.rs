//! Font subsetting
//!
//! Glyph selection and table rewriting are delegated to the `subsetter`
//! crate. This module maps characters to glyphs through the source font's
//! `cmap`, then writes a new `cmap` for the remapped glyph IDs and the
//! source `OS/2` into the result because `subsetter` emits neither.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rustybuzz::ttf_parser::{self, Tag};
use subsetter::GlyphRemapper;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::sfnt;
use crate::error::{Error, Result};
use crate::text::CharSet;

/// Number of missing characters listed in the warning
const MISSING_SAMPLE: usize = 32;

/// Options for subsetting a font
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubsetOptions {
    /// Index of the font inside a collection (0 for plain font files)
    pub font_index: u32,
}

/// A font file read into memory
///
/// The data is owned and dropped with the value, so the file is never held
/// open past `load_font`.
#[derive(Debug)]
pub struct FontFile {
    path: PathBuf,
    data: Vec<u8>,
    index: u32,
}

impl FontFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn face(&self) -> Result<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, self.index).ok_or_else(|| Error::FontParse {
            path: self.path.clone(),
            index: self.index,
        })
    }

    /// Number of glyphs in the selected face
    pub fn glyph_count(&self) -> Result<u16> {
        Ok(self.face()?.number_of_glyphs())
    }
}

/// Read a font file and check that `options.font_index` selects a parsable face
pub fn load_font(path: &Path, options: &SubsetOptions) -> Result<FontFile> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let data = fs::read(path)?;
    let count = ttf_parser::fonts_in_collection(&data).unwrap_or(1);
    if options.font_index >= count {
        return Err(Error::FontIndexOutOfRange {
            path: path.to_path_buf(),
            index: options.font_index,
            count,
        });
    }

    let font = FontFile {
        path: path.to_path_buf(),
        data,
        index: options.font_index,
    };
    // Fail early on data that is not a font
    font.face()?;

    debug!(index = font.index, count, "loaded '{}'", path.display());
    Ok(font)
}

/// Outcome of a subsetting run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubsetReport {
    /// Characters requested
    pub requested: usize,
    /// Characters without a glyph in the source font
    pub missing: Vec<char>,
    /// Glyphs in the subset font, `.notdef` and composite components included
    pub glyph_count: u16,
    /// Size of the subset font in bytes
    pub size: usize,
}

/// A subset font ready to be saved
#[derive(Debug, Clone)]
pub struct SubsetFont {
    data: Vec<u8>,
    report: SubsetReport,
}

impl SubsetFont {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn report(&self) -> &SubsetReport {
        &self.report
    }
}

/// Collects the characters to keep and subsets fonts down to them
#[derive(Debug, Clone, Default)]
pub struct Subsetter {
    options: SubsetOptions,
    chars: CharSet,
}

impl Subsetter {
    pub fn new(options: SubsetOptions) -> Self {
        Self { options, chars: CharSet::new() }
    }

    /// Request glyphs for every character of `text`
    pub fn populate(&mut self, text: &str) {
        self.chars.extend(text.chars());
    }

    pub fn options(&self) -> &SubsetOptions {
        &self.options
    }

    pub fn chars(&self) -> &CharSet {
        &self.chars
    }

    /// Subset `font` to the populated characters
    pub fn subset(&self, font: &FontFile) -> Result<SubsetFont> {
        let face = font.face()?;

        let mut remapper = GlyphRemapper::new();
        // .notdef stays glyph 0
        remapper.remap(0);

        let mut mappings = Vec::with_capacity(self.chars.len());
        let mut missing = Vec::new();
        for c in self.chars.iter() {
            match face.glyph_index(c) {
                Some(gid) if gid.0 != 0 => mappings.push((c, remapper.remap(gid.0))),
                _ => missing.push(c),
            }
        }

        if !missing.is_empty() {
            let sample: String = missing.iter().take(MISSING_SAMPLE).collect();
            let more = if missing.len() > MISSING_SAMPLE { "..." } else { "" };
            warn!(
                "{} character(s) have no glyph in '{}': {}{}",
                missing.len(),
                font.path.display(),
                sample,
                more
            );
        }

        let glyphs = subsetter::subset(&font.data, font.index, &remapper)?;

        let os2 = face.raw_face().table(Tag::from_bytes(b"OS/2"));
        let data = sfnt::rebuild(&glyphs, &mappings, os2)?;

        let glyph_count = rustybuzz::Face::from_slice(&data, 0)
            .ok_or_else(|| Error::Subset("subset font cannot be parsed".to_string()))?
            .number_of_glyphs();

        debug!(
            requested = self.chars.len(),
            mapped = mappings.len(),
            glyph_count,
            size = data.len(),
            "subset '{}'",
            font.path.display()
        );

        let report = SubsetReport {
            requested: self.chars.len(),
            missing,
            glyph_count,
            size: data.len(),
        };
        Ok(SubsetFont { data, report })
    }
}

/// Write a subset font, creating missing parent directories
///
/// The data goes to a temporary file next to `path` first, so an existing
/// output survives a failed write.
pub fn save_font(font: &SubsetFont, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(&font.data)?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// Subset the font at `input` to `chars` and save it to `output`
///
/// # Example
///
/// ```no_run
/// use subset_font::font::{subset_font, SubsetOptions};
/// use subset_font::text::CharSet;
/// use std::path::Path;
///
/// let chars: CharSet = "Hello".chars().collect();
/// let report = subset_font(
///     Path::new("NotoSans-Regular.ttf"),
///     Path::new("Subset.ttf"),
///     &chars,
///     &SubsetOptions::default(),
/// ).expect("Failed to subset font");
/// println!("{} glyphs", report.glyph_count);
/// ```
pub fn subset_font(
    input: &Path,
    output: &Path,
    chars: &CharSet,
    options: &SubsetOptions,
) -> Result<SubsetReport> {
    let mut subsetter = Subsetter::new(*options);
    subsetter.populate(&chars.to_text());

    let font = load_font(input, options)?;
    let subset = subsetter.subset(&font)?;
    drop(font);

    save_font(&subset, output)?;
    Ok(subset.report)
}
