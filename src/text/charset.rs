//! Set of distinct characters collected from text

use std::collections::BTreeSet;

/// Distinct characters, kept in codepoint order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    chars: BTreeSet<char>,
}

impl CharSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every printable character of `text`
    pub fn add_printable(&mut self, text: &str) {
        self.chars.extend(text.chars().filter(|&c| super::is_printable(c)));
    }

    pub fn insert(&mut self, c: char) -> bool {
        self.chars.insert(c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// All characters concatenated in codepoint order
    pub fn to_text(&self) -> String {
        self.chars.iter().collect()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self { chars: iter.into_iter().collect() }
    }
}

impl Extend<char> for CharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CharSet {
    type Item = &'a char;
    type IntoIter = std::collections::btree_set::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_printable_filters_and_dedups() {
        let mut set = CharSet::new();
        set.add_printable("BA\u{0007}A\r\n");
        set.add_printable("B");
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_text(), "AB");
    }

    #[test]
    fn test_text_is_codepoint_ordered() {
        let set: CharSet = "中b a".chars().collect();
        assert_eq!(set.to_text(), " ab中");
        assert!(set.contains('中'));
        assert!(!set.contains('c'));
    }
}
