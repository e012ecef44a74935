//! # keys
//!
//! Musical key descriptions from key names: tonic, mode, key signature,
//! altered notes, scale and tonic chords.
//!
//! ```rust
//! use keys::{key, tokenize};
//!
//! assert_eq!(tokenize("Eb major"), ("Eb".to_string(), "major".to_string()));
//!
//! let k = key("Eb major").unwrap();
//! assert_eq!(k.alt, -3);
//! assert_eq!(k.scale.len(), k.intervals.len());
//! ```
//!
//! ## Modules
//! - `key` - tokenizing key names and building [`Key`]s
//! - `note` - note names, circle-of-fifths coordinates, transposition
//! - `interval` - interval names ("3M", "5d")
//! - `pcset` - pitch-class sets and their intervals
//! - `mode` - the diatonic mode table
//! - `error` - [`KeyError`]

pub mod error;
pub mod interval;
pub mod key;
pub mod mode;
pub mod note;
pub mod pcset;

pub use error::*;
pub use key::{altered_notes, key, major_tonic_from_key_signature, tokenize, Key};
pub use mode::Mode;

/// Render a key as YAML.
pub fn to_yaml(key: &Key) -> Result<String, KeyError> {
    Ok(serde_yaml::to_string(key)?)
}
