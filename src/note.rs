//! # Note Names
//!
//! Tokenizing, validating and transposing note names such as `C`, `Eb`,
//! `F##` or `bb4`.
//!
//! ## Note Name Grammar
//! ```text
//! [letter a-g][accidentals: #... | b... | x...][octave: -?digits][whitespace][suffix]
//! ```
//! Every `x` counts as a double sharp (`##`). The letter is upper-cased.
//!
//! ## Circle of Fifths
//! Pitch classes are located by their distance in perfect fifths from C:
//! `F = -1, C = 0, G = 1, D = 2, A = 3, E = 4, B = 5`, and each sharp adds 7
//! (each flat subtracts 7). Transposition is plain addition on that axis,
//! which keeps spellings diatonic (E + minor third = G, never F##).

use crate::interval::Interval;

const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Fifths coordinate of each natural letter, indexed like `LETTERS`
const FIFTHS: [i32; 7] = [0, 2, 4, -1, 1, 3, 5];

/// Letter index for `(fifths + 1) mod 7`: F C G D A E B
const FIFTHS_TO_STEPS: [u8; 7] = [3, 0, 4, 1, 5, 2, 6];

/// Raw pieces of a note name before validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteTokens {
    pub letter: String,
    pub acc: String,
    pub oct: String,
    pub rest: String,
}

/// Split a string into note letter, accidentals, octave and remaining text.
///
/// Never fails: text that does not fit the note grammar (for example a suffix
/// spanning several lines) yields empty tokens.
///
/// # Example
/// ```
/// use keys::note::tokenize_note;
///
/// let tokens = tokenize_note("eb major");
/// assert_eq!(tokens.letter, "E");
/// assert_eq!(tokens.acc, "b");
/// assert_eq!(tokens.rest, "major");
/// ```
pub fn tokenize_note(s: &str) -> NoteTokens {
    let mut rest = s;

    let letter = match rest.chars().next() {
        Some(c) if matches!(c.to_ascii_uppercase(), 'A'..='G') => {
            rest = &rest[1..];
            c.to_ascii_uppercase().to_string()
        }
        _ => String::new(),
    };

    let acc = match rest.chars().next() {
        Some(c @ ('#' | 'b' | 'x')) => {
            let len = rest.find(|ch: char| ch != c).unwrap_or(rest.len());
            let (run, tail) = rest.split_at(len);
            rest = tail;
            run.replace('x', "##")
        }
        _ => String::new(),
    };

    let sign = usize::from(rest.starts_with('-'));
    let digits = rest[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len() - sign);
    let (oct, tail) = rest.split_at(sign + digits);
    let oct = oct.to_string();
    rest = tail.trim_start();

    if rest.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
        return NoteTokens::default();
    }

    NoteTokens {
        letter,
        acc,
        oct,
        rest: rest.to_string(),
    }
}

/// A pitch class: a letter plus an alteration, without octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass {
    /// Index into C D E F G A B
    pub step: u8,
    /// Sharps (positive) or flats (negative)
    pub alt: i32,
}

impl PitchClass {
    pub const C: PitchClass = PitchClass { step: 0, alt: 0 };
    pub const F: PitchClass = PitchClass { step: 3, alt: 0 };
    pub const B: PitchClass = PitchClass { step: 6, alt: 0 };

    /// Position on the circle of fifths (C = 0)
    pub fn fifths(&self) -> i32 {
        FIFTHS[self.step as usize] + 7 * self.alt
    }

    /// Spell the pitch class found `fifths` perfect fifths from C
    pub fn from_fifths(fifths: i32) -> Self {
        let step = FIFTHS_TO_STEPS[(fifths + 1).rem_euclid(7) as usize];
        let alt = (fifths + 1).div_euclid(7);
        Self { step, alt }
    }

    pub fn letter(&self) -> char {
        LETTERS[self.step as usize]
    }

    /// Name like "C", "F#" or "Bbb"
    pub fn name(&self) -> String {
        format!("{}{}", self.letter(), alt_to_acc(self.alt))
    }

    /// Move `fifths` steps around the circle of fifths (negative = fourths)
    pub fn transpose_fifths(&self, fifths: i32) -> Self {
        Self::from_fifths(self.fifths() + fifths)
    }

    pub fn transpose(&self, interval: &Interval) -> Self {
        self.transpose_fifths(interval.fifths())
    }
}

/// A validated note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInfo {
    pub pc: PitchClass,
    pub oct: Option<i32>,
}

impl NoteInfo {
    /// Circle-of-fifths coordinate of the pitch class
    pub fn fifths(&self) -> i32 {
        self.pc.fifths()
    }

    /// Full name, including the octave when there is one ("Eb4")
    pub fn name(&self) -> String {
        match self.oct {
            Some(oct) => format!("{}{}", self.pc.name(), oct),
            None => self.pc.name(),
        }
    }
}

/// Validate a note name.
///
/// Returns `None` unless the whole string is a note: a letter, optional
/// accidentals and an optional octave.
///
/// # Example
/// ```
/// use keys::note::note;
///
/// assert_eq!(note("Eb").unwrap().fifths(), -3);
/// assert!(note("H").is_none());
/// assert!(note("C major").is_none());
/// ```
pub fn note(name: &str) -> Option<NoteInfo> {
    let tokens = tokenize_note(name);
    if tokens.letter.is_empty() || !tokens.rest.is_empty() {
        return None;
    }

    let letter = tokens.letter.chars().next()?;
    let step = LETTERS.iter().position(|&l| l == letter)? as u8;
    let alt = acc_to_alt(&tokens.acc)?;
    let oct = if tokens.oct.is_empty() {
        None
    } else {
        Some(tokens.oct.parse().ok()?)
    };

    Some(NoteInfo {
        pc: PitchClass { step, alt },
        oct,
    })
}

/// Render an alteration as accidentals: 2 => "##", -3 => "bbb", 0 => ""
pub fn alt_to_acc(alt: i32) -> String {
    if alt < 0 {
        "b".repeat(alt.unsigned_abs() as usize)
    } else {
        "#".repeat(alt as usize)
    }
}

/// Count the accidentals in a string of only sharps or only flats.
/// `None` when the string mixes them or contains anything else.
pub fn acc_to_alt(acc: &str) -> Option<i32> {
    if acc.chars().all(|c| c == '#') {
        Some(acc.len() as i32)
    } else if acc.chars().all(|c| c == 'b') {
        Some(-(acc.len() as i32))
    } else {
        None
    }
}

/// Move a note around the circle of fifths. Octaves are dropped.
///
/// # Example
/// ```
/// use keys::note::transpose_fifths;
///
/// assert_eq!(transpose_fifths("B", 1).as_deref(), Some("F#"));
/// assert_eq!(transpose_fifths("F", -1).as_deref(), Some("Bb"));
/// ```
pub fn transpose_fifths(note_name: &str, fifths: i32) -> Option<String> {
    let info = note(note_name)?;
    Some(info.pc.transpose_fifths(fifths).name())
}

/// Transpose a note by an interval name. Octaves are dropped; the result is a
/// pitch class.
///
/// # Example
/// ```
/// use keys::note::transpose;
///
/// assert_eq!(transpose("E", "3m").as_deref(), Some("G"));
/// assert_eq!(transpose("F#", "4A").as_deref(), Some("B#"));
/// ```
pub fn transpose(note_name: &str, interval: &str) -> Option<String> {
    let info = note(note_name)?;
    let interval = Interval::parse(interval)?;
    Some(info.pc.transpose(&interval).name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(letter: &str, acc: &str, oct: &str, rest: &str) -> NoteTokens {
        NoteTokens {
            letter: letter.to_string(),
            acc: acc.to_string(),
            oct: oct.to_string(),
            rest: rest.to_string(),
        }
    }

    #[test]
    fn test_tokenize_note() {
        assert_eq!(tokenize_note("c major"), tokens("C", "", "", "major"));
        assert_eq!(tokenize_note("eb major"), tokens("E", "b", "", "major"));
        assert_eq!(tokenize_note("bb4 dorian"), tokens("B", "b", "4", "dorian"));
        assert_eq!(tokenize_note("fx"), tokens("F", "##", "", ""));
        assert_eq!(tokenize_note("C-1"), tokens("C", "", "-1", ""));
    }

    #[test]
    fn test_tokenize_without_letter() {
        assert_eq!(tokenize_note("major"), tokens("", "", "", "major"));
        // "d" is a note letter, so mode names starting with a-g lose it
        assert_eq!(tokenize_note("dorian"), tokens("D", "", "", "orian"));
        assert_eq!(tokenize_note(""), NoteTokens::default());
        assert_eq!(tokenize_note("   "), NoteTokens::default());
    }

    #[test]
    fn test_tokenize_multiline_suffix() {
        assert_eq!(tokenize_note("c major\nminor"), NoteTokens::default());
    }

    #[test]
    fn test_note_validation() {
        let eb = note("Eb").unwrap();
        assert_eq!(eb.pc, PitchClass { step: 2, alt: -1 });
        assert_eq!(eb.fifths(), -3);
        assert_eq!(note("C4").unwrap().oct, Some(4));
        assert_eq!(note("C4").unwrap().name(), "C4");
        assert!(note("").is_none());
        assert!(note("H").is_none());
        assert!(note("C-").is_none());
        assert!(note("C major").is_none());
    }

    #[test]
    fn test_fifths_coordinates() {
        let expected = [("F", -1), ("C", 0), ("G", 1), ("D", 2), ("A", 3), ("E", 4), ("B", 5), ("F#", 6), ("Bb", -2)];
        for (name, fifths) in expected {
            assert_eq!(note(name).unwrap().fifths(), fifths, "{}", name);
            assert_eq!(PitchClass::from_fifths(fifths).name(), name);
        }
    }

    #[test]
    fn test_alt_to_acc() {
        assert_eq!(alt_to_acc(0), "");
        assert_eq!(alt_to_acc(2), "##");
        assert_eq!(alt_to_acc(-3), "bbb");
        assert_eq!(acc_to_alt("###"), Some(3));
        assert_eq!(acc_to_alt("bb"), Some(-2));
        assert_eq!(acc_to_alt(""), Some(0));
        assert_eq!(acc_to_alt("#b"), None);
    }

    #[test]
    fn test_transpose() {
        assert_eq!(transpose("C", "3M").as_deref(), Some("E"));
        assert_eq!(transpose("D", "7m").as_deref(), Some("C"));
        assert_eq!(transpose("B", "5d").as_deref(), Some("F"));
        assert_eq!(transpose("Eb", "6M").as_deref(), Some("C"));
        assert_eq!(transpose("C4", "5P").as_deref(), Some("G"));
        assert_eq!(transpose("H", "5P"), None);
        assert_eq!(transpose("C", "5M"), None);
    }

    #[test]
    fn test_transpose_fifths_walk() {
        let sharps: Vec<_> = (1..=7).filter_map(|i| transpose_fifths("B", i)).collect();
        assert_eq!(sharps, ["F#", "C#", "G#", "D#", "A#", "E#", "B#"]);
        let flats: Vec<_> = (1..=7).filter_map(|i| transpose_fifths("F", -i)).collect();
        assert_eq!(flats, ["Bb", "Eb", "Ab", "Db", "Gb", "Cb", "Fb"]);
    }
}
