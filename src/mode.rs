//! # Mode Table
//!
//! The seven diatonic modes, looked up by name or alias (case-insensitive).
//!
//! Each mode carries a reference alteration `alt`: the circle-of-fifths
//! position of the tonic on which the mode needs no accidentals (D for
//! dorian, F for lydian, B for locrian). Subtracting it from a tonic's
//! position gives the key signature of that mode on that tonic.
//!
//! ```text
//! mode        alt   natural tonic
//! lydian       -1   F
//! ionian        0   C
//! mixolydian    1   G
//! dorian        2   D
//! aeolian       3   A
//! phrygian      4   E
//! locrian       5   B
//! ```

use crate::pcset;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// A diatonic mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    /// Rotation of the major scale this mode starts on (ionian = 0)
    pub mode_num: u8,
    /// Pitch-class set number
    pub set_num: u16,
    /// Reference alteration (see module docs)
    pub alt: i32,
    pub name: &'static str,
    /// Chord suffix of the triad built on the tonic ("", "m", "dim")
    pub triad: &'static str,
    /// Chord suffix of the seventh chord built on the tonic
    pub seventh: &'static str,
    pub aliases: &'static [&'static str],
}

impl Mode {
    pub fn chroma(&self) -> String {
        pcset::chroma(self.set_num)
    }

    /// Scale formula as interval names, starting with "1P"
    pub fn intervals(&self) -> Vec<&'static str> {
        pcset::intervals(&self.chroma())
    }
}

static MODES: [Mode; 7] = [
    Mode { mode_num: 0, set_num: 2773, alt: 0, name: "ionian", triad: "", seventh: "Maj7", aliases: &["major"] },
    Mode { mode_num: 1, set_num: 2902, alt: 2, name: "dorian", triad: "m", seventh: "m7", aliases: &[] },
    Mode { mode_num: 2, set_num: 3418, alt: 4, name: "phrygian", triad: "m", seventh: "m7", aliases: &[] },
    Mode { mode_num: 3, set_num: 2741, alt: -1, name: "lydian", triad: "", seventh: "Maj7", aliases: &[] },
    Mode { mode_num: 4, set_num: 2774, alt: 1, name: "mixolydian", triad: "", seventh: "7", aliases: &[] },
    Mode { mode_num: 5, set_num: 2906, alt: 3, name: "aeolian", triad: "m", seventh: "m7", aliases: &["minor"] },
    Mode { mode_num: 6, set_num: 3434, alt: 5, name: "locrian", triad: "dim", seventh: "m7b5", aliases: &[] },
];

// name and alias -> mode
static INDEX: Lazy<HashMap<&'static str, &'static Mode>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for mode in MODES.iter() {
        index.insert(mode.name, mode);
        for alias in mode.aliases {
            index.insert(*alias, mode);
        }
    }
    index
});

/// Find a mode by name or alias.
///
/// # Example
/// ```
/// use keys::mode::mode;
///
/// assert_eq!(mode("Major").unwrap().name, "ionian");
/// assert_eq!(mode("dorian").unwrap().alt, 2);
/// assert!(mode("blues").is_none());
/// ```
pub fn mode(name: &str) -> Option<&'static Mode> {
    INDEX.get(name.to_lowercase().as_str()).copied()
}

/// All modes, in mode number order
pub fn all() -> &'static [Mode] {
    &MODES
}

/// Mode names in mode number order, optionally followed by their aliases
pub fn names(with_aliases: bool) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = MODES.iter().map(|m| m.name).collect();
    if with_aliases {
        names.extend(MODES.iter().flat_map(|m| m.aliases.iter().copied()));
    }
    names
}
