//! # Error Types
//!
//! Looking up a key never fails loudly: [`key()`](crate::key()) returns `None`
//! for names it cannot resolve. This module holds the error type used by the
//! `Result`-returning entry points built on top of it.
//!
//! ## Error Types
//! - `UnresolvedKey` - the key name has no valid tonic or no valid mode
//! - `InvalidKeySignature` - a signature string is not a run of `#` or `b`
//! - `Output` - a key could not be rendered as YAML
//!
//! ## Usage
//! ```rust
//! use keys::{Key, KeyError};
//!
//! match "H major".parse::<Key>() {
//!     Ok(key) => println!("{}", key),
//!     Err(KeyError::UnresolvedKey(name)) => eprintln!("not a key: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyError {
    /// The key name could not be resolved to a tonic and a mode.
    ///
    /// # Example
    /// ```
    /// # use keys::KeyError;
    /// let err = KeyError::UnresolvedKey("H major".to_string());
    /// assert_eq!(err.to_string(), "Unresolved key name: 'H major'");
    /// ```
    #[error("Unresolved key name: '{0}'")]
    UnresolvedKey(String),

    /// Key signature strings must contain only sharps or only flats.
    ///
    /// # Example
    /// ```
    /// # use keys::KeyError;
    /// let err = KeyError::InvalidKeySignature("#b".to_string());
    /// assert_eq!(err.to_string(), "Invalid key signature: '#b'");
    /// ```
    #[error("Invalid key signature: '{0}'")]
    InvalidKeySignature(String),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_yaml::Error),
}
