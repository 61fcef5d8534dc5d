//! Integration tests for the font subsetting library

use std::fs;
use std::path::{Path, PathBuf};

use rustybuzz::Face;
use subset_font::font::{load_font, subset_font, SubsetOptions};
use subset_font::text::{collect_chars, CharSet, CollectOptions};
use subset_font::Error;
use tempfile::TempDir;

/// Find a TrueType font to subset
///
/// Prefers fonts dropped into `tests/fixtures/fonts`, then falls back to
/// common system locations.
fn fixture_font() -> Option<PathBuf> {
    let mut fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    fixtures.push("tests");
    fixtures.push("fixtures");
    fixtures.push("fonts");

    if let Ok(entries) = fs::read_dir(&fixtures) {
        let mut fonts: Vec<PathBuf> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "ttf"))
            .collect();
        fonts.sort();
        if let Some(font) = fonts.into_iter().next() {
            return Some(font);
        }
    }

    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:/Windows/Fonts/arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|p| p.is_file())
}

fn write_utf16le(path: &Path, text: &str) {
    let bytes: Vec<u8> = text.encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
    fs::write(path, bytes).expect("Failed to write text file");
}

fn glyph_count(path: &Path) -> u16 {
    load_font(path, &SubsetOptions::default())
        .and_then(|font| font.glyph_count())
        .expect("Font should parse")
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_be_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// Wrap a single TrueType font into a two-font collection
///
/// Font 0 has an empty table directory and cannot be parsed; font 1 is the
/// original font with its table offsets moved past the collection header.
fn two_face_collection(font: &[u8]) -> Vec<u8> {
    let num_tables = read_u16(font, 4) as usize;
    let dir_len = 12 + 16 * num_tables;
    let empty_dir_at = 20;
    let dir_at = empty_dir_at + 12;
    let base = (dir_at + dir_len) as u32;

    let mut ttc = Vec::with_capacity(base as usize + font.len());
    ttc.extend_from_slice(b"ttcf");
    ttc.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    ttc.extend_from_slice(&2u32.to_be_bytes());
    ttc.extend_from_slice(&(empty_dir_at as u32).to_be_bytes());
    ttc.extend_from_slice(&(dir_at as u32).to_be_bytes());

    ttc.extend_from_slice(&font[..4]);
    ttc.extend_from_slice(&[0u8; 8]);

    ttc.extend_from_slice(&font[..12]);
    for i in 0..num_tables {
        let record = 12 + 16 * i;
        ttc.extend_from_slice(&font[record..record + 8]);
        ttc.extend_from_slice(&(read_u32(font, record + 8) + base).to_be_bytes());
        ttc.extend_from_slice(&font[record + 12..record + 16]);
    }

    ttc.extend_from_slice(font);
    ttc
}

#[test]
fn test_subset_single_character() {
    let Some(font) = fixture_font() else {
        eprintln!("Skipping subset test: no TrueType font available");
        return;
    };

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("Subset.ttf");
    let chars: CharSet = "A".chars().collect();

    let report = subset_font(&font, &output, &chars, &SubsetOptions::default())
        .expect("Failed to subset font");

    assert!(output.exists(), "Subset font was not created");
    assert_eq!(report.requested, 1);
    assert!(report.missing.is_empty(), "'A' should be covered: {:?}", report.missing);
    assert!(
        report.glyph_count < glyph_count(&font),
        "Subset should have fewer glyphs than {}",
        font.display()
    );

    let data = fs::read(&output).expect("Failed to read subset font");
    assert_eq!(report.size, data.len());

    let face = Face::from_slice(&data, 0).expect("Subset font should parse");
    assert_eq!(face.number_of_glyphs(), report.glyph_count);
    assert!(face.glyph_index('A').is_some(), "'A' should be mapped");
    assert!(face.glyph_index('B').is_none(), "'B' should not be mapped");
}

#[test]
fn test_subset_reports_missing_characters() {
    let Some(font) = fixture_font() else {
        eprintln!("Skipping missing-character test: no TrueType font available");
        return;
    };

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("Subset.ttf");
    let chars: CharSet = ['a', '\u{10FFFD}'].into_iter().collect();

    let report = subset_font(&font, &output, &chars, &SubsetOptions::default())
        .expect("Failed to subset font");

    assert_eq!(report.requested, 2);
    assert_eq!(report.missing, vec!['\u{10FFFD}']);
}

#[test]
fn test_collect_then_subset() {
    let Some(font) = fixture_font() else {
        eprintln!("Skipping pipeline test: no TrueType font available");
        return;
    };

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let text_dir = temp_dir.path().join("Translations");
    fs::create_dir_all(text_dir.join("de")).expect("Failed to create text dir");
    write_utf16le(&text_dir.join("en.txt"), "Hello\r\n");
    write_utf16le(&text_dir.join("de").join("de.txt"), "Hallo\tWelt\r\n");

    let (chars, stats) = collect_chars(&text_dir, &CollectOptions::default())
        .expect("Failed to collect characters");
    assert_eq!(chars.to_text(), "HWaelot");
    assert_eq!(stats.files_scanned, 2);

    let output = temp_dir.path().join("out").join("Subset.ttf");
    subset_font(&font, &output, &chars, &SubsetOptions::default())
        .expect("Failed to subset font");

    let data = fs::read(&output).expect("Failed to read subset font");
    let face = Face::from_slice(&data, 0).expect("Subset font should parse");
    for c in chars.iter() {
        assert!(face.glyph_index(c).is_some(), "{:?} should be mapped", c);
    }
    assert!(face.glyph_index('z').is_none());
}

#[test]
fn test_subset_second_font_of_collection() {
    let Some(font) = fixture_font() else {
        eprintln!("Skipping collection test: no TrueType font available");
        return;
    };

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let collection = temp_dir.path().join("Fonts.ttc");
    let data = fs::read(&font).expect("Failed to read font");
    fs::write(&collection, two_face_collection(&data)).expect("Failed to write collection");

    let first = load_font(&collection, &SubsetOptions { font_index: 0 });
    assert!(matches!(first, Err(Error::FontParse { index: 0, .. })), "{:?}", first.err());
    match load_font(&collection, &SubsetOptions { font_index: 2 }) {
        Err(Error::FontIndexOutOfRange { count, .. }) => assert_eq!(count, 2),
        other => panic!("expected FontIndexOutOfRange, got {:?}", other.err()),
    }

    let output = temp_dir.path().join("Subset.ttf");
    let chars: CharSet = "A".chars().collect();
    let report = subset_font(&collection, &output, &chars, &SubsetOptions { font_index: 1 })
        .expect("Failed to subset second font");
    assert!(report.missing.is_empty(), "'A' should be covered: {:?}", report.missing);

    let subset = fs::read(&output).expect("Failed to read subset font");
    let face = Face::from_slice(&subset, 0).expect("Subset font should parse");
    assert!(face.glyph_index('A').is_some(), "'A' should be mapped");
    assert!(face.glyph_index('B').is_none(), "'B' should not be mapped");
}

#[test]
fn test_subset_keeps_os2() {
    let Some(font) = fixture_font() else {
        eprintln!("Skipping OS/2 test: no TrueType font available");
        return;
    };

    let data = fs::read(&font).expect("Failed to read font");
    if !Face::from_slice(&data, 0).is_some_and(|face| face.tables().os2.is_some()) {
        eprintln!("Skipping OS/2 test: {} has no OS/2 table", font.display());
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("Subset.ttf");
    let chars: CharSet = "BD".chars().collect();
    subset_font(&font, &output, &chars, &SubsetOptions::default()).expect("Failed to subset font");

    let subset = fs::read(&output).expect("Failed to read subset font");
    let face = Face::from_slice(&subset, 0).expect("Subset font should parse");
    assert!(face.tables().os2.is_some(), "Subset font should have an OS/2 table");

    let os2 = face
        .raw_face()
        .table(rustybuzz::ttf_parser::Tag::from_bytes(b"OS/2"))
        .expect("OS/2 data");
    assert_eq!(read_u16(os2, 64), 'B' as u16);
    assert_eq!(read_u16(os2, 66), 'D' as u16);
}

#[test]
fn test_subset_nonexistent_font() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("Subset.ttf");
    let chars: CharSet = "A".chars().collect();

    let result = subset_font(
        Path::new("nonexistent.ttf"),
        &output,
        &chars,
        &SubsetOptions::default(),
    );

    let err = result.expect_err("Should fail with nonexistent font");
    assert!(err.to_string().contains("does not exist"), "unexpected error: {}", err);
    assert!(!output.exists());
}
