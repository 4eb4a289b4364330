//! # qslist
//!
//! A delimited-list codec for URL query strings: encode an ordered list of
//! scalar values into a single flat string suitable for one query
//! parameter, and decode it back, tolerantly.
//!
//! ## Key Features
//!
//! - **Pluggable item codecs**: any scalar type participates by implementing
//!   [`ItemCodec`]; string, integer, float, boolean, timestamp, RFC 3339
//!   datetime, and JSON codecs ship in the box
//! - **Separator escaping**: items may contain the separator character;
//!   occurrences are reversibly escaped to the separator's percent-encoded
//!   form, nothing more
//! - **Best-effort decoding**: a segment that fails to parse is logged and
//!   dropped instead of failing the whole list, so stale or foreign URLs
//!   never crash the consumer
//! - **Order-insensitive equality**: list comparison ignores ordering, the
//!   exact rule is documented on [`ListCodec::equal`]
//! - **No Unsafe Code**: written entirely in safe Rust with zero unsafe
//!   blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qslist = "0.1"
//! ```
//!
//! ### Basic round trip
//!
//! ```rust
//! use qslist::{ListCodec, StringCodec};
//!
//! let codec = ListCodec::new(StringCodec);
//!
//! let statuses = vec!["CONFIRMED".to_string(), "QUALIFIED".to_string()];
//! let encoded = codec.serialize(&statuses).unwrap();
//! assert_eq!(encoded, "CONFIRMED,QUALIFIED");
//!
//! let decoded = codec.parse(&encoded);
//! assert!(codec.equal(&decoded, &statuses));
//! ```
//!
//! ### Typed items
//!
//! ```rust
//! use qslist::{IntegerCodec, ListCodec};
//!
//! let codec = ListCodec::new(IntegerCodec::new());
//! assert_eq!(codec.serialize(&[3, 1, 4]).unwrap(), "3,1,4");
//!
//! // Malformed segments are dropped, never fatal.
//! assert_eq!(codec.parse("3,oops,4"), vec![3, 4]);
//! ```
//!
//! ### Items containing the separator
//!
//! ```rust
//! use qslist::{ListCodec, StringCodec};
//!
//! let codec = ListCodec::new(StringCodec);
//! let encoded = codec.serialize(&["hello, world".into()]).unwrap();
//! assert_eq!(encoded, "hello%2C world");
//! assert_eq!(codec.parse(&encoded), vec!["hello, world"]);
//! ```
//!
//! ### Default string lists
//!
//! For the common case of comma-separated strings, the crate-level helpers
//! skip the codec setup:
//!
//! ```rust
//! let items = qslist::from_query("a,b,c");
//! assert_eq!(items, vec!["a", "b", "c"]);
//! assert_eq!(qslist::to_query(&items).unwrap(), "a,b,c");
//! ```
//!
//! ## Decoding policy
//!
//! Decoding is deliberately forgiving. Query strings are shared, bookmarked,
//! and hand-edited; a value produced by an older or newer version of an
//! application must degrade to "fewer items", not to an error page. Each
//! segment is parsed in isolation: failures are reported through
//! [`tracing`] (target `qslist`, with the raw segment and its index) and the
//! segment is dropped. [`ListCodec::parse`] itself is total.
//!
//! Encoding is the opposite: an item serializer that fails indicates a
//! broken data model, so [`ListCodec::serialize`] propagates that failure
//! unmodified.
//!
//! ## Concurrency
//!
//! A [`ListCodec`] is an immutable value. Construction is pure, and every
//! operation is a synchronous, bounded string transformation, so one
//! instance can be shared across threads freely.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`lead_filters.rs`** - Driving a filter list through a query parameter
//! - **`custom_separators.rs`** - Alternate separators and escaping behavior
//!
//! Run any example with: `cargo run --example <name>`

pub mod codec;
pub mod error;
pub mod format;
pub mod list;

pub use codec::{
    BooleanCodec, DateTimeCodec, FloatCodec, FromStrCodec, IntegerCodec, ItemCodec, JsonCodec,
    StringCodec, TimestampCodec,
};
pub use error::{Error, ParseError, Result};
pub use list::ListCodec;

/// Returns the default list codec: comma-separated strings.
///
/// This is the process-wide default configuration. It is a plain value:
/// construct it once and pass it around, or call this wherever convenient,
/// since construction is free of side effects.
///
/// # Examples
///
/// ```rust
/// let codec = qslist::string_list();
/// assert_eq!(codec.parse("a,b"), vec!["a", "b"]);
/// ```
#[must_use]
pub fn string_list() -> ListCodec<StringCodec> {
    ListCodec::new(StringCodec)
}

/// Decodes a comma-separated string list with the default codec.
///
/// # Examples
///
/// ```rust
/// assert_eq!(qslist::from_query("x,y"), vec!["x", "y"]);
/// assert!(qslist::from_query("").is_empty());
/// ```
#[must_use]
pub fn from_query(query: &str) -> Vec<String> {
    string_list().parse(query)
}

/// Encodes a string list with the default codec.
///
/// # Examples
///
/// ```rust
/// let items = vec!["x".to_string(), "y".to_string()];
/// assert_eq!(qslist::to_query(&items).unwrap(), "x,y");
/// ```
///
/// # Errors
///
/// Never fails for string items; the `Result` mirrors
/// [`ListCodec::serialize`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_query(items: &[String]) -> Result<String> {
    string_list().serialize(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_round_trip() {
        let codec = string_list();
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let encoded = codec.serialize(&items).unwrap();
        let decoded = codec.parse(&encoded);
        assert!(codec.equal(&decoded, &items));
    }

    #[test]
    fn test_integer_round_trip() {
        let codec = ListCodec::new(IntegerCodec::new());
        let items = vec![-1, 0, 42];
        let encoded = codec.serialize(&items).unwrap();
        assert_eq!(encoded, "-1,0,42");
        assert_eq!(codec.parse(&encoded), items);
    }

    #[test]
    fn test_empty_list_and_empty_query() {
        let codec = string_list();
        assert_eq!(codec.serialize(&[]).unwrap(), "");
        assert!(codec.parse("").is_empty());
    }

    #[test]
    fn test_query_helpers() {
        let items = from_query("a,b");
        assert_eq!(items, vec!["a", "b"]);
        assert_eq!(to_query(&items).unwrap(), "a,b");
    }

    #[test]
    fn test_default_instance() {
        let codec: ListCodec<StringCodec> = ListCodec::default();
        assert_eq!(codec.separator(), ",");
    }
}
