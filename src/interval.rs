//! # Intervals
//!
//! Interval names in shorthand notation: a number followed by a quality
//! (`1P`, `3m`, `5d`, `4A`). The quality-first form (`P5`, `m3`) is accepted
//! too. Only what transposition of pitch classes needs is modelled here:
//! the diatonic number and the alteration relative to the perfect or major
//! interval of that number.
//!
//! ## Qualities
//! - `P` perfect (unisons, fourths, fifths)
//! - `M` / `m` major / minor (seconds, thirds, sixths, sevenths)
//! - `A`, `AA`, ... augmented
//! - `d`, `dd`, ... diminished

/// Circle-of-fifths position of each simple interval number (unison..seventh)
/// when perfect or major.
const FIFTHS: [i32; 7] = [0, 2, 4, -1, 1, 3, 5];

/// A parsed interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Diatonic number, 1 = unison, 8 = octave, 9 = ninth, ...
    pub number: u8,
    /// Alteration relative to the perfect or major interval
    pub alt: i32,
}

impl Interval {
    /// Parse an interval name like "3M", "5d" or "P4".
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        let split = name.find(|c: char| !c.is_ascii_digit()).unwrap_or(name.len());
        let (number, quality) = if split > 0 {
            name.split_at(split)
        } else {
            // quality first: "P5", "m3"
            let digits = name.find(|c: char| c.is_ascii_digit())?;
            let (quality, number) = name.split_at(digits);
            (number, quality)
        };

        let number: u8 = number.parse().ok()?;
        if number == 0 {
            return None;
        }
        let simple = (number - 1) % 7 + 1;
        let perfectable = matches!(simple, 1 | 4 | 5);
        let alt = quality_to_alt(quality, perfectable)?;
        Some(Self { number, alt })
    }

    /// Simple interval number (1..=7), octaves removed
    pub fn simple(&self) -> u8 {
        (self.number - 1) % 7 + 1
    }

    pub fn is_perfectable(&self) -> bool {
        matches!(self.simple(), 1 | 4 | 5)
    }

    /// Position on the circle of fifths, ignoring octaves
    pub fn fifths(&self) -> i32 {
        FIFTHS[(self.simple() - 1) as usize] + 7 * self.alt
    }

    /// Shorthand name, number first ("3M")
    pub fn name(&self) -> String {
        format!("{}{}", self.number, self.quality())
    }

    fn quality(&self) -> String {
        match (self.is_perfectable(), self.alt) {
            (true, 0) => "P".to_string(),
            (false, 0) => "M".to_string(),
            (false, -1) => "m".to_string(),
            (_, alt) if alt > 0 => "A".repeat(alt as usize),
            (true, alt) => "d".repeat((-alt) as usize),
            (false, alt) => "d".repeat((-alt - 1) as usize),
        }
    }
}

fn quality_to_alt(quality: &str, perfectable: bool) -> Option<i32> {
    match quality {
        "P" if perfectable => Some(0),
        "M" if !perfectable => Some(0),
        "m" if !perfectable => Some(-1),
        q if !q.is_empty() && q.chars().all(|c| c == 'A') => Some(q.len() as i32),
        q if !q.is_empty() && q.chars().all(|c| c == 'd') => {
            let count = q.len() as i32;
            Some(if perfectable { -count } else { -count - 1 })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_first() {
        assert_eq!(Interval::parse("3M"), Some(Interval { number: 3, alt: 0 }));
        assert_eq!(Interval::parse("3m"), Some(Interval { number: 3, alt: -1 }));
        assert_eq!(Interval::parse("5d"), Some(Interval { number: 5, alt: -1 }));
        assert_eq!(Interval::parse("7d"), Some(Interval { number: 7, alt: -2 }));
        assert_eq!(Interval::parse("4A"), Some(Interval { number: 4, alt: 1 }));
    }

    #[test]
    fn test_parse_quality_first() {
        assert_eq!(Interval::parse("P5"), Interval::parse("5P"));
        assert_eq!(Interval::parse("m7"), Interval::parse("7m"));
    }

    #[test]
    fn test_invalid_qualities() {
        // Perfect intervals have no major/minor, and vice versa
        assert_eq!(Interval::parse("5M"), None);
        assert_eq!(Interval::parse("3P"), None);
        assert_eq!(Interval::parse("0P"), None);
        assert_eq!(Interval::parse("P"), None);
        assert_eq!(Interval::parse(""), None);
        assert_eq!(Interval::parse("3x"), None);
    }

    #[test]
    fn test_fifths() {
        assert_eq!(Interval::parse("1P").unwrap().fifths(), 0);
        assert_eq!(Interval::parse("5P").unwrap().fifths(), 1);
        assert_eq!(Interval::parse("4P").unwrap().fifths(), -1);
        assert_eq!(Interval::parse("2m").unwrap().fifths(), -5);
        assert_eq!(Interval::parse("5d").unwrap().fifths(), -6);
        assert_eq!(Interval::parse("4A").unwrap().fifths(), 6);
        // Compound intervals land on the same pitch class as their simple form
        assert_eq!(Interval::parse("9M").unwrap().fifths(), 2);
    }

    #[test]
    fn test_name_roundtrip() {
        for name in ["1P", "2m", "2M", "3m", "3M", "4P", "5d", "5P", "6m", "6M", "7m", "7M", "4A", "7d"] {
            assert_eq!(Interval::parse(name).unwrap().name(), name);
        }
    }
}
