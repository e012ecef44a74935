//! # Pitch-Class Sets
//!
//! A pitch-class set is stored as a 12-character chroma string, one
//! character per semitone above the root: `"101011010101"` is the major scale.
//! The same set can be written as a number (the chroma read as binary, 2773
//! for the major scale).

/// Interval name for each semitone of the chroma
const IVLS: [&str; 12] = [
    "1P", "2m", "2M", "3m", "3M", "4P", "5d", "5P", "6m", "6M", "7m", "7M",
];

/// Chroma string of a set number: 2773 => "101011010101"
pub fn chroma(set_num: u16) -> String {
    format!("{:012b}", set_num & 0xfff)
}

pub fn is_chroma(s: &str) -> bool {
    s.len() == 12 && s.chars().all(|c| c == '0' || c == '1')
}

/// Interval names of the set, ascending from the root.
/// A malformed chroma has no intervals.
///
/// # Example
/// ```
/// use keys::pcset::intervals;
///
/// assert_eq!(intervals("100010010000"), vec!["1P", "3M", "5P"]);
/// ```
pub fn intervals(chroma: &str) -> Vec<&'static str> {
    if !is_chroma(chroma) {
        return vec![];
    }
    chroma
        .chars()
        .zip(IVLS)
        .filter(|(bit, _)| *bit == '1')
        .map(|(_, ivl)| ivl)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    #[test]
    fn test_chroma_from_set_num() {
        assert_eq!(chroma(2773), "101011010101");
        assert_eq!(chroma(0), "000000000000");
        assert_eq!(chroma(4095), "111111111111");
    }

    #[test]
    fn test_major_scale_intervals() {
        assert_eq!(
            intervals(&chroma(2773)),
            vec!["1P", "2M", "3M", "4P", "5P", "6M", "7M"]
        );
    }

    #[test]
    fn test_malformed_chroma() {
        assert!(intervals("").is_empty());
        assert!(intervals("10101").is_empty());
        assert!(intervals("10101101010x").is_empty());
    }

    #[test]
    fn test_interval_names_parse() {
        for name in IVLS {
            assert!(Interval::parse(name).is_some(), "{} should parse", name);
        }
    }
}
