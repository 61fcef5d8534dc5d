//! Font subsetting CLI tool
//!
//! Collects the characters used by a tree of translation files and subsets
//! a font down to them.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::Level;

use subset_font::font::{
    load_font, save_font, FontCache, FontSource, SubsetOptions, Subsetter,
};
use subset_font::text::{collect_chars, CollectOptions, TextEncoding};

const DEFAULT_INPUT: &str =
    "https://github.com/adobe-fonts/source-han-sans/raw/release/Variable/OTC/SourceHanSans-VF.ttf.ttc";
const DEFAULT_OUTPUT: &str = "package/Interface/CommunityShaders/Fonts/CommunityShaders.ttf";
const DEFAULT_TEXT_DIR: &str = "package/Interface/Translations";

/// Subset Font - Collect unique characters from translations and generate a font subset
#[derive(Parser)]
#[command(name = "subset-font")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Use the default font release and project layout
    subset-font

    # Subset a local font collection, picking its second face
    subset-font --input C:/Windows/Fonts/msyh.ttc --font_number 1 --output SubsetFont.ttf

    # Scan UTF-8 .lang files, skipping a backup directory
    subset-font --text_dir translations --extension .lang --encoding utf-8 --exclude backup")]
struct Cli {
    /// Path or URL to the original font file (e.g., C:/Windows/Fonts/msyh.ttc)
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: String,

    /// Path for the output subset font file (e.g., SubsetFont.ttf)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Directory to scan for translated files
    #[arg(long = "text_dir", alias = "text-dir", default_value = DEFAULT_TEXT_DIR)]
    text_dir: PathBuf,

    /// Font number inside a font collection (.ttc/.otc); a plain font file
    /// only has font 0, so any other number is an error there
    #[arg(long = "font_number", alias = "font-number", default_value_t = 0)]
    font_number: u32,

    /// File name suffix of translation files (repeatable)
    #[arg(long = "extension", default_value = ".txt")]
    extensions: Vec<String>,

    /// Directory name to skip while scanning (repeatable)
    #[arg(long = "exclude")]
    exclude: Vec<String>,

    /// Text encoding of translation files (utf-16le, utf-16be, utf-8)
    #[arg(long, default_value_t = TextEncoding::Utf16Le)]
    encoding: TextEncoding,

    /// Directory for downloaded fonts [default: ./fonts]
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Show more log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Step 1: locate or download the font
    let cache = match cli.cache_dir {
        Some(dir) => FontCache::new(dir),
        None => FontCache::in_current_dir()?,
    };

    let source = FontSource::parse(&cli.input);
    if let FontSource::Remote(url) = &source {
        if !cache.contains(url) {
            println!("Downloading font from '{}' to '{}'...", url, cache.path_for(url)?.display());
        }
    }
    let original_font = source.resolve(&cache)?;

    // Step 2: collect characters
    let options = CollectOptions {
        extensions: cli.extensions,
        exclude_dirs: cli.exclude,
        encoding: cli.encoding,
    };
    let (unique_chars, stats) = collect_chars(&cli.text_dir, &options)?;

    println!(
        "Collected {} unique characters from {} file(s).",
        unique_chars.len(),
        stats.files_scanned
    );

    // Step 3: subset
    let mut subsetter = Subsetter::new(SubsetOptions { font_index: cli.font_number });
    subsetter.populate(&unique_chars.to_text());

    let subset = {
        let font = load_font(&original_font, subsetter.options())
            .with_context(|| format!("Error during font subsetting of '{}'", original_font.display()))?;
        subsetter
            .subset(&font)
            .with_context(|| format!("Error during font subsetting of '{}'", font.path().display()))?
    };

    save_font(&subset, &cli.output)
        .with_context(|| format!("Cannot write '{}'", cli.output.display()))?;

    let report = subset.report();
    println!(
        "Subset font saved to '{}' ({} glyphs, {} bytes).",
        cli.output.display(),
        report.glyph_count,
        report.size
    );
    if !report.missing.is_empty() {
        println!("{} character(s) were not covered by the font.", report.missing.len());
    }

    Ok(())
}
