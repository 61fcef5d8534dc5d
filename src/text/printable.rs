//! Printability classification
//!
//! A character is printable unless its general category is one of the
//! "Other" or "Separator" categories. U+0020 SPACE is the single exception
//! and counts as printable.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Check whether a character renders as a visible glyph (or a plain space)
pub fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }

    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}
