//! The six category checkers.
//!
//! Each checker is a unit-like value implementing `kensa_core::traits::Checker`.
//! They share nothing but the registry they are handed, so any subset can run
//! in any order.

pub mod citation;
pub mod compliance;
pub mod evidence;
pub mod language;
pub mod length;
pub mod structure;

use kensa_contracts::rule::Severity;
use kensa_core::traits::Checker;

pub use citation::CitationChecker;
pub use compliance::ComplianceChecker;
pub use evidence::EvidenceChecker;
pub use language::LanguageChecker;
pub use length::LengthChecker;
pub use structure::StructureChecker;

/// One checker per category, in reporting order.
///
/// `min_severity` overrides the registry's compliance threshold when set.
pub fn default_checkers(min_severity: Option<Severity>) -> Vec<Box<dyn Checker>> {
    let compliance = match min_severity {
        Some(severity) => ComplianceChecker::with_min_severity(severity),
        None => ComplianceChecker::new(),
    };
    vec![
        Box::new(StructureChecker),
        Box::new(compliance),
        Box::new(LengthChecker),
        Box::new(CitationChecker),
        Box::new(EvidenceChecker),
        Box::new(LanguageChecker),
    ]
}

/// Count the characters that carry length: Unicode letters and digits.
///
/// Kana and kanji are alphabetic, so for Japanese text this is the glyph
/// count; punctuation and whitespace never count.
pub fn char_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphanumeric()).count()
}

/// The first `max_chars` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_count_ignores_punctuation_and_spaces() {
        assert_eq!(char_count("ビタミンCは、水溶性です。"), 11);
        assert_eq!(char_count("a b\tc"), 3);
        assert_eq!(char_count("「」！？…"), 0);
        assert_eq!(char_count("B12"), 3);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("ビタミン", 2), "ビタ");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn default_checkers_cover_every_category_in_order() {
        let categories: Vec<_> = default_checkers(None).iter().map(|c| c.category()).collect();
        assert_eq!(categories, kensa_contracts::report::Category::ALL.to_vec());
    }
}
