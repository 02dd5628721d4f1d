//! Greedy longest-prefix abbreviation matching.
//!
//! Report groups concatenate codes without separators (`-SHRA`, `SCT022CB`),
//! so a group is split by repeatedly taking the longest table code that
//! prefixes what is left. Longest-first resolves codes sharing a leading
//! character.

use crate::tables;

/// Longest code length in any table.
const MAX_CODE_LEN: usize = 3;

/// A table code found at the start of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abbreviation {
    pub abbreviation: &'static str,
    pub meaning: &'static str,
}

/// Find the longest code in `table` that is a prefix of `s`, trying
/// lengths 3, 2, 1. Returns `None` for an empty string or when no prefix
/// is a known code.
pub fn match_abbreviation(
    s: &str,
    table: &'static [(&'static str, &'static str)],
) -> Option<Abbreviation> {
    (1..=MAX_CODE_LEN.min(s.len()))
        .rev()
        .filter_map(|len| s.get(..len))
        .find_map(|prefix| tables::lookup(table, prefix))
        .map(|(abbreviation, meaning)| Abbreviation {
            abbreviation,
            meaning,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{CLOUDS, WEATHER};

    #[test]
    fn test_longest_prefix_wins() {
        let m = match_abbreviation("NSW", WEATHER).unwrap();
        assert_eq!(m.abbreviation, "NSW");

        let m = match_abbreviation("SCT022CB", CLOUDS).unwrap();
        assert_eq!(m.abbreviation, "SCT");
        assert_eq!(m.meaning, "scattered");
        assert_eq!(m.abbreviation.len(), 3);
    }

    #[test]
    fn test_single_char_qualifier() {
        let m = match_abbreviation("-SHRA", WEATHER).unwrap();
        assert_eq!(m.abbreviation, "-");
        assert_eq!(m.meaning, "light intensity");
    }

    #[test]
    fn test_two_char_code() {
        let m = match_abbreviation("VV060", CLOUDS).unwrap();
        assert_eq!(m.abbreviation, "VV");

        let m = match_abbreviation("SHRA", WEATHER).unwrap();
        assert_eq!(m.abbreviation, "SH");
    }

    #[test]
    fn test_short_input() {
        assert_eq!(match_abbreviation("RA", WEATHER).unwrap().abbreviation, "RA");
        assert_eq!(match_abbreviation("+", WEATHER).unwrap().abbreviation, "+");
    }

    #[test]
    fn test_no_match() {
        assert!(match_abbreviation("", WEATHER).is_none());
        assert!(match_abbreviation("Q1006", WEATHER).is_none());
        assert!(match_abbreviation("15/12", CLOUDS).is_none());
        assert!(match_abbreviation("//////", CLOUDS).is_none());
    }

    #[test]
    fn test_non_ascii_input() {
        // Prefix lengths that split a multi-byte char are skipped
        assert!(match_abbreviation("é-", WEATHER).is_none());
        assert!(match_abbreviation("Bé", CLOUDS).is_none());
    }
}
