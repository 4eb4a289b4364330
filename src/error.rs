//! Error types for list encoding and decoding.
//!
//! Only two failure categories exist in this crate:
//!
//! - **Configuration errors**: raised synchronously at codec construction
//!   time (an empty separator), represented by [`Error::EmptySeparator`].
//! - **Item parse errors**: produced by an [`ItemCodec`](crate::ItemCodec)
//!   for a single malformed segment, represented by [`ParseError`]. These
//!   never escape [`ListCodec::parse`](crate::ListCodec::parse); each one
//!   is logged and the offending segment is dropped.
//!
//! Item *serializer* failures are a programming error rather than an
//! expected runtime condition; they propagate out of
//! [`ListCodec::serialize`](crate::ListCodec::serialize) as
//! [`Error::Serialize`].
//!
//! ## Examples
//!
//! ```rust
//! use qslist::{Error, ListCodec, StringCodec};
//!
//! let result = ListCodec::with_separator(StringCodec, "");
//! assert!(matches!(result, Err(Error::EmptySeparator)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate's public API.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The separator supplied at construction time was empty.
    ///
    /// Splitting on an empty separator is undefined, so construction fails
    /// fast instead of deferring the problem to the first decode.
    #[error("invalid separator: must not be empty")]
    EmptySeparator,

    /// An item serializer failed while encoding a collection.
    #[error("serialize error: {0}")]
    Serialize(String),

    /// Custom error with a display message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a serialize error from a failing item serializer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qslist::Error;
    ///
    /// let err = Error::serialize("map keys must be strings");
    /// assert!(err.to_string().contains("serialize error"));
    /// ```
    pub fn serialize<T: fmt::Display>(msg: T) -> Self {
        Error::Serialize(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

/// A failure to parse one list segment into an item.
///
/// Produced by [`ItemCodec::parse_item`](crate::ItemCodec::parse_item)
/// implementations. Inside [`ListCodec::parse`](crate::ListCodec::parse)
/// these are recovered per segment: the error is logged together with the
/// raw segment and its index, and the segment produces no item.
///
/// # Examples
///
/// ```rust
/// use qslist::ParseError;
///
/// let err = ParseError::new("invalid digit found in string");
/// assert_eq!(err.to_string(), "invalid digit found in string");
/// ```
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    /// Creates a parse error with a display message.
    pub fn new<T: fmt::Display>(message: T) -> Self {
        ParseError {
            message: message.to_string(),
        }
    }

    /// Creates a parse error describing an unexpected segment value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qslist::ParseError;
    ///
    /// let err = ParseError::unexpected("boolean", "maybe");
    /// assert!(err.to_string().contains("expected boolean"));
    /// ```
    pub fn unexpected(expected: &str, found: &str) -> Self {
        ParseError {
            message: format!("expected {expected}, found `{found}`"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
