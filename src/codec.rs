//! Item codecs: pluggable parse/serialize/equality for a single list item.
//!
//! A [`ListCodec`](crate::ListCodec) never interprets item text itself. It
//! delegates to an [`ItemCodec`], a small capability bundle that knows how
//! to turn one string into one item and back. Any scalar type (string,
//! number, enum, timestamp, JSON document) can participate in a list by
//! supplying an implementation.
//!
//! ## Built-in codecs
//!
//! | Codec | Item type | Wire form |
//! |-------|-----------|-----------|
//! | [`StringCodec`] | `String` | the text itself |
//! | [`IntegerCodec`] | `i64` | decimal digits |
//! | [`FloatCodec`] | `f64` | decimal notation |
//! | [`BooleanCodec`] | `bool` | `true` / `false` |
//! | [`TimestampCodec`] | `DateTime<Utc>` | milliseconds since the Unix epoch |
//! | [`DateTimeCodec`] | `DateTime<Utc>` | RFC 3339 text |
//! | [`JsonCodec<T>`] | any serde type | one JSON document per item |
//! | [`FromStrCodec<T>`] | any `FromStr + Display` scalar | its `Display` form |
//!
//! ## Implementing your own
//!
//! ```rust
//! use qslist::{ItemCodec, ListCodec, ParseError};
//!
//! struct HexCodec;
//!
//! impl ItemCodec for HexCodec {
//!     type Item = u32;
//!
//!     fn parse_item(&self, raw: &str) -> Result<u32, ParseError> {
//!         u32::from_str_radix(raw, 16).map_err(ParseError::new)
//!     }
//!
//!     fn serialize_item(&self, item: &u32) -> qslist::Result<String> {
//!         Ok(format!("{item:x}"))
//!     }
//! }
//!
//! let codec = ListCodec::new(HexCodec);
//! assert_eq!(codec.serialize(&[255, 16]).unwrap(), "ff,10");
//! assert_eq!(codec.parse("ff,10"), vec![255, 16]);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, ParseError, Result};

/// Parse, serialize, and compare a single list item.
///
/// The three operations mirror the shape of the list codec itself, one
/// level down: [`parse_item`](Self::parse_item) may fail with a
/// [`ParseError`] (recovered per segment during list decoding),
/// [`serialize_item`](Self::serialize_item) is expected to succeed for any
/// well-formed item (a failure propagates out of
/// [`ListCodec::serialize`](crate::ListCodec::serialize)), and
/// [`eq_items`](Self::eq_items) defines item equality for the list-level
/// containment check.
///
/// `eq_items` is optional: the default compares the two items' serialized
/// forms, which is value equality for every codec whose encoding is
/// canonical. Codecs over `PartialEq` items usually override it with
/// `a == b`.
pub trait ItemCodec {
    /// The scalar type this codec produces and consumes.
    type Item;

    /// Parses one unescaped segment into an item.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the segment is malformed for this
    /// item type.
    fn parse_item(&self, raw: &str) -> std::result::Result<Self::Item, ParseError>;

    /// Serializes one item into its wire form.
    ///
    /// The returned string must not be pre-escaped; separator escaping is
    /// the list codec's job.
    ///
    /// # Errors
    ///
    /// Returns an error only when the item cannot be represented at all,
    /// which indicates a broken data model rather than bad input.
    fn serialize_item(&self, item: &Self::Item) -> Result<String>;

    /// Compares two items for equality.
    ///
    /// Default: both items serialize successfully to the same string.
    fn eq_items(&self, a: &Self::Item, b: &Self::Item) -> bool {
        match (self.serialize_item(a), self.serialize_item(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

/// The identity codec: items are the segment text itself.
///
/// Parsing never fails, so decoding a string list keeps every segment.
///
/// # Examples
///
/// ```rust
/// use qslist::{ItemCodec, StringCodec};
///
/// let item = StringCodec.parse_item("hello").unwrap();
/// assert_eq!(item, "hello");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl ItemCodec for StringCodec {
    type Item = String;

    fn parse_item(&self, raw: &str) -> std::result::Result<String, ParseError> {
        Ok(raw.to_owned())
    }

    fn serialize_item(&self, item: &String) -> Result<String> {
        Ok(item.clone())
    }

    fn eq_items(&self, a: &String, b: &String) -> bool {
        a == b
    }
}

/// A codec for any scalar that implements [`FromStr`] and [`Display`].
///
/// This is the generic stringification fallback: parsing delegates to
/// `FromStr`, serializing to `Display`, equality to `PartialEq`. The
/// [`IntegerCodec`], [`FloatCodec`], and [`BooleanCodec`] aliases cover the
/// common scalars.
///
/// [`Display`]: std::fmt::Display
///
/// # Examples
///
/// ```rust
/// use qslist::{FromStrCodec, ListCodec};
///
/// let codec = ListCodec::new(FromStrCodec::<u16>::new());
/// assert_eq!(codec.parse("8080,9090"), vec![8080, 9090]);
/// ```
pub struct FromStrCodec<T>(PhantomData<fn() -> T>);

impl<T> FromStrCodec<T> {
    #[must_use]
    pub const fn new() -> Self {
        FromStrCodec(PhantomData)
    }
}

impl<T> Default for FromStrCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FromStrCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FromStrCodec<T> {}

impl<T> fmt::Debug for FromStrCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromStrCodec")
    }
}

impl<T> ItemCodec for FromStrCodec<T>
where
    T: FromStr + fmt::Display + PartialEq,
    T::Err: fmt::Display,
{
    type Item = T;

    fn parse_item(&self, raw: &str) -> std::result::Result<T, ParseError> {
        raw.parse::<T>().map_err(ParseError::new)
    }

    fn serialize_item(&self, item: &T) -> Result<String> {
        Ok(item.to_string())
    }

    fn eq_items(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Signed 64-bit integers in decimal notation.
pub type IntegerCodec = FromStrCodec<i64>;

/// 64-bit floats in decimal notation.
pub type FloatCodec = FromStrCodec<f64>;

/// Booleans as the literals `true` and `false`.
pub type BooleanCodec = FromStrCodec<bool>;

/// UTC timestamps as decimal milliseconds since the Unix epoch.
///
/// Sub-millisecond precision does not survive a round trip; items are
/// compared at full precision, so only millisecond-aligned instants
/// round-trip losslessly.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use qslist::{ItemCodec, TimestampCodec};
///
/// let instant = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
/// assert_eq!(
///     TimestampCodec.serialize_item(&instant).unwrap(),
///     "1700000000000"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampCodec;

impl ItemCodec for TimestampCodec {
    type Item = DateTime<Utc>;

    fn parse_item(&self, raw: &str) -> std::result::Result<DateTime<Utc>, ParseError> {
        let millis: i64 = raw.parse().map_err(ParseError::new)?;
        Utc.timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| ParseError::unexpected("unix timestamp in milliseconds", raw))
    }

    fn serialize_item(&self, item: &DateTime<Utc>) -> Result<String> {
        Ok(item.timestamp_millis().to_string())
    }

    fn eq_items(&self, a: &DateTime<Utc>, b: &DateTime<Utc>) -> bool {
        a == b
    }
}

/// UTC timestamps as RFC 3339 text, encoded with millisecond precision and
/// a `Z` suffix.
///
/// # Examples
///
/// ```rust
/// use qslist::{ItemCodec, DateTimeCodec};
///
/// let instant = DateTimeCodec.parse_item("2024-01-15T10:30:00Z").unwrap();
/// assert_eq!(
///     DateTimeCodec.serialize_item(&instant).unwrap(),
///     "2024-01-15T10:30:00.000Z"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeCodec;

impl ItemCodec for DateTimeCodec {
    type Item = DateTime<Utc>;

    fn parse_item(&self, raw: &str) -> std::result::Result<DateTime<Utc>, ParseError> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(ParseError::new)
    }

    fn serialize_item(&self, item: &DateTime<Utc>) -> Result<String> {
        Ok(item.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    fn eq_items(&self, a: &DateTime<Utc>, b: &DateTime<Utc>) -> bool {
        a == b
    }
}

/// One JSON document per list item, via serde.
///
/// Useful for structured values inside a single query parameter. Equality
/// uses the default serialized-form comparison, so two items are equal when
/// they produce identical JSON.
///
/// # Examples
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use qslist::{JsonCodec, ListCodec};
///
/// #[derive(Serialize, Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let codec = ListCodec::new(JsonCodec::<Point>::new());
/// let encoded = codec.serialize(&[Point { x: 1, y: 2 }]).unwrap();
/// assert_eq!(encoded, r#"{"x":1%2C"y":2}"#);
/// assert_eq!(codec.parse(&encoded), vec![Point { x: 1, y: 2 }]);
/// ```
pub struct JsonCodec<T>(PhantomData<fn() -> T>);

impl<T> JsonCodec<T> {
    #[must_use]
    pub const fn new() -> Self {
        JsonCodec(PhantomData)
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for JsonCodec<T> {}

impl<T> fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonCodec")
    }
}

impl<T> ItemCodec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Item = T;

    fn parse_item(&self, raw: &str) -> std::result::Result<T, ParseError> {
        serde_json::from_str(raw).map_err(ParseError::new)
    }

    fn serialize_item(&self, item: &T) -> Result<String> {
        serde_json::to_string(item).map_err(Error::serialize)
    }
}
