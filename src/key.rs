//! # Keys
//!
//! Build the description of a key (tonic + mode) from a free-form name like
//! `"Eb major"`, `"f# dorian"` or `"C minor"`.
//!
//! ## Pipeline
//! 1. [`tokenize()`] splits the name into a tonic and a mode type
//! 2. The tonic is validated as a note name, the mode type against the mode table
//! 3. Everything else is derived from those two:
//!    - `alt`: tonic position on the circle of fifths minus the mode's reference alteration
//!    - `altered_notes`: the notes of the key signature, walked along the circle of fifths
//!    - `scale`: the tonic transposed by each interval of the mode
//!
//! ## Example
//! ```rust
//! use keys::key;
//!
//! let eb = key("Eb major").unwrap();
//! assert_eq!(eb.acc, "bbb");
//! assert_eq!(eb.altered_notes, vec!["Bb", "Eb", "Ab"]);
//! assert_eq!(eb.scale, vec!["Eb", "F", "G", "Ab", "Bb", "C", "D"]);
//! assert_eq!(eb.seventh, "EbMaj7");
//!
//! assert!(key("H major").is_none());
//! ```

use crate::error::KeyError;
use crate::interval::Interval;
use crate::mode::mode;
use crate::note::{acc_to_alt, alt_to_acc, note, tokenize_note, PitchClass};
use log::{debug, trace};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Description of a key. Built by [`key()`], never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    /// "<tonic> <mode type>", e.g. "Eb major"
    pub name: String,
    pub tonic: String,
    /// Canonical mode name ("ionian" for "major")
    pub mode_name: String,
    pub mode_num: u8,
    pub set_num: u16,
    pub chroma: String,
    /// Sharps (positive) or flats (negative) in the key signature
    pub alt: i32,
    /// `alt` as accidentals: "###", "bb", ""
    pub acc: String,
    /// Notes of the key signature, in the order they are written
    pub altered_notes: Vec<String>,
    pub intervals: Vec<String>,
    pub scale: Vec<String>,
    pub triad: String,
    pub seventh: String,
    pub aliases: Vec<String>,
}

/// Split a key name into `(tonic, mode type)`.
///
/// The name is matched case-insensitively. Either part may come back empty:
/// - `"dorian"` is a mode without tonic: `("", "dorian")`
/// - `"C"` is a tonic without mode: `("C", "")`
/// - unrecognized names come back unchanged as the mode type: `("", "nonsense")`
///
/// # Example
/// ```
/// use keys::tokenize;
///
/// assert_eq!(tokenize("C major"), ("C".to_string(), "major".to_string()));
/// assert_eq!(tokenize("dorian"), ("".to_string(), "dorian".to_string()));
/// ```
pub fn tokenize(key_name: &str) -> (String, String) {
    let lower = key_name.to_lowercase();
    let tokens = tokenize_note(&lower);
    let tonic = format!("{}{}", tokens.letter, tokens.acc);

    if mode(&tokens.rest).is_some() {
        (tonic, tokens.rest)
    } else if mode(&lower).is_some() {
        trace!("'{}' is a mode without tonic", key_name);
        (String::new(), lower)
    } else if !tokens.letter.is_empty() && tokens.rest.is_empty() {
        trace!("'{}' is a tonic without mode", key_name);
        (tonic, String::new())
    } else {
        trace!("'{}' has no recognizable tonic or mode", key_name);
        (String::new(), key_name.to_string())
    }
}

/// Build the key described by `key_name`.
///
/// Returns `None` when the name has no valid tonic or no known mode; a key
/// is never partially filled.
///
/// # Example
/// ```
/// use keys::key;
///
/// let d = key("D dorian").unwrap();
/// assert_eq!(d.mode_name, "dorian");
/// assert_eq!(d.alt, 0);
/// assert_eq!(d.triad, "Dm");
///
/// assert!(key("nonsense").is_none());
/// assert!(key("dorian").is_none());
/// ```
pub fn key(key_name: &str) -> Option<Key> {
    let (tonic, mode_type) = tokenize(key_name);
    let (Some(m), Some(t)) = (mode(&mode_type), note(&tonic)) else {
        debug!("Cannot resolve key '{}' (tonic '{}', mode '{}')", key_name, tonic, mode_type);
        return None;
    };

    let alt = t.fifths() - m.alt;
    let intervals = m.intervals();
    let scale = intervals
        .iter()
        .filter_map(|name| Interval::parse(name))
        .map(|ivl| t.pc.transpose(&ivl).name())
        .collect();

    Some(Key {
        name: format!("{} {}", tonic, mode_type),
        mode_name: m.name.to_string(),
        mode_num: m.mode_num,
        set_num: m.set_num,
        chroma: m.chroma(),
        alt,
        acc: alt_to_acc(alt),
        altered_notes: altered_notes(alt),
        intervals: intervals.into_iter().map(String::from).collect(),
        scale,
        triad: format!("{}{}", tonic, m.triad),
        seventh: format!("{}{}", tonic, m.seventh),
        aliases: m.aliases.iter().map(|a| a.to_string()).collect(),
        tonic,
    })
}

/// Notes sharped or flatted by a key signature of `alt` accidentals,
/// in key-signature order.
///
/// Sharps are counted up the circle of fifths from B (F#, C#, G#, ...),
/// flats down from F (Bb, Eb, Ab, ...).
pub fn altered_notes(alt: i32) -> Vec<String> {
    if alt > 0 {
        (1..=alt)
            .map(|i| PitchClass::B.transpose_fifths(i).name())
            .collect()
    } else {
        (alt..=-1)
            .rev()
            .map(|i| PitchClass::F.transpose_fifths(i).name())
            .collect()
    }
}

/// Tonic of the major key with the given key signature ("###" => "A").
///
/// # Example
/// ```
/// use keys::major_tonic_from_key_signature;
///
/// assert_eq!(major_tonic_from_key_signature("").unwrap(), "C");
/// assert_eq!(major_tonic_from_key_signature("bb").unwrap(), "Bb");
/// assert!(major_tonic_from_key_signature("#b").is_err());
/// ```
pub fn major_tonic_from_key_signature(signature: &str) -> Result<String, KeyError> {
    let alt = acc_to_alt(signature.trim())
        .ok_or_else(|| KeyError::InvalidKeySignature(signature.to_string()))?;
    Ok(PitchClass::C.transpose_fifths(alt).name())
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        key(s).ok_or_else(|| KeyError::UnresolvedKey(s.to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
