//! The list codec: joining items into one delimited query value and
//! splitting it back.
//!
//! ## Overview
//!
//! A [`ListCodec`] composes an [`ItemCodec`] with a separator string:
//!
//! - **Encode**: each item is serialized, literal separator occurrences
//!   inside the result are replaced with the separator's percent-encoded
//!   form, and the escaped segments are joined with the separator.
//! - **Decode**: the value is split on the separator, each segment is
//!   unescaped (the percent-encoded separator form restored to the literal
//!   separator, and only that) and parsed. A segment that fails to parse is
//!   logged and dropped; decoding itself never fails. Shareable URLs carry
//!   stale and foreign values, so a malformed segment must never take the
//!   whole list down with it.
//!
//! ## Usage
//!
//! ```rust
//! use qslist::{ListCodec, StringCodec};
//!
//! let codec = ListCodec::new(StringCodec);
//!
//! let encoded = codec.serialize(&["hello, world".into(), "bye".into()]).unwrap();
//! assert_eq!(encoded, "hello%2C world,bye");
//!
//! let decoded = codec.parse(&encoded);
//! assert_eq!(decoded, vec!["hello, world", "bye"]);
//! ```
//!
//! ## Known escaping limitation
//!
//! Escaping targets exactly the separator's percent-encoded form. If an
//! item's serialized text *naturally* contains that form (a literal `%2C`
//! with the default comma separator), decoding restores it to the literal
//! separator. See [`format`](crate::format) for details.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::warn;

use crate::codec::ItemCodec;
use crate::error::{Error, Result};

/// Byte set matching JavaScript's `encodeURIComponent`: everything except
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )` is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// A codec for an ordered list of items carried in a single flat string.
///
/// Immutable once constructed: the separator and item codec are fixed for
/// the codec's lifetime, it holds no interior state, and one instance may
/// serve any number of [`parse`](Self::parse) / [`serialize`](Self::serialize)
/// calls from any number of threads.
///
/// Construct with [`ListCodec::new`] (comma separator) or
/// [`ListCodec::with_separator`].
///
/// # Examples
///
/// ```rust
/// use qslist::{IntegerCodec, ListCodec};
///
/// let codec = ListCodec::new(IntegerCodec::new());
/// assert_eq!(codec.serialize(&[1, 2, 3]).unwrap(), "1,2,3");
/// assert_eq!(codec.parse("1,2,3"), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct ListCodec<C> {
    item_codec: C,
    separator: String,
    encoded_separator: String,
}

impl<C> ListCodec<C> {
    /// Creates a list codec with the default comma separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qslist::{ListCodec, StringCodec};
    ///
    /// let codec = ListCodec::new(StringCodec);
    /// assert_eq!(codec.separator(), ",");
    /// ```
    #[must_use]
    pub fn new(item_codec: C) -> Self {
        let separator = ",".to_owned();
        let encoded_separator = encode_uri_component(&separator);
        ListCodec {
            item_codec,
            separator,
            encoded_separator,
        }
    }

    /// Creates a list codec with a custom separator.
    ///
    /// The separator may be any non-empty string; items whose serialized
    /// form contains it are escaped, so it need not be absent from item
    /// content. The separator's percent-encoded form is computed here, once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qslist::{ListCodec, StringCodec};
    ///
    /// let codec = ListCodec::with_separator(StringCodec, "|").unwrap();
    /// assert_eq!(codec.parse("a|b"), vec!["a", "b"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySeparator`] when `separator` is empty.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn with_separator(item_codec: C, separator: impl Into<String>) -> Result<Self> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(Error::EmptySeparator);
        }
        let encoded_separator = encode_uri_component(&separator);
        Ok(ListCodec {
            item_codec,
            separator,
            encoded_separator,
        })
    }

    /// Returns the configured separator.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns a reference to the underlying item codec.
    #[must_use]
    pub fn item_codec(&self) -> &C {
        &self.item_codec
    }
}

impl<C: Default> Default for ListCodec<C> {
    fn default() -> Self {
        ListCodec::new(C::default())
    }
}

impl<C: ItemCodec> ListCodec<C> {
    /// Decodes a query value into a list of items, best effort.
    ///
    /// Segments that fail to parse are logged (with the raw segment text
    /// and its index) and dropped; the remaining items keep their original
    /// order. This method never fails: a malformed query value yields a
    /// shorter list, possibly an empty one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qslist::{IntegerCodec, ListCodec};
    ///
    /// let codec = ListCodec::new(IntegerCodec::new());
    ///
    /// // The malformed middle segment is dropped, not fatal.
    /// assert_eq!(codec.parse("1,BAD,3"), vec![1, 3]);
    /// assert_eq!(codec.parse(""), Vec::<i64>::new());
    /// ```
    #[must_use]
    pub fn parse(&self, query: &str) -> Vec<C::Item> {
        self.parse_segments(query, None)
    }

    /// Decodes like [`parse`](Self::parse), tagging diagnostics with the
    /// query-key name the value came from.
    #[must_use]
    pub fn parse_for_key(&self, query: &str, key: &str) -> Vec<C::Item> {
        self.parse_segments(query, Some(key))
    }

    fn parse_segments(&self, query: &str, key: Option<&str>) -> Vec<C::Item> {
        if query.is_empty() {
            // Splitting "" yields one empty segment, which would decode as
            // a phantom item; an empty value is an empty list.
            return Vec::new();
        }
        query
            .split(self.separator.as_str())
            .enumerate()
            .filter_map(|(index, segment)| {
                let unescaped = segment.replace(&self.encoded_separator, &self.separator);
                match self.item_codec.parse_item(&unescaped) {
                    Ok(item) => Some(item),
                    Err(error) => {
                        match key {
                            Some(key) => warn!(
                                target: "qslist",
                                segment, index, key, %error,
                                "dropping segment that failed to parse"
                            ),
                            None => warn!(
                                target: "qslist",
                                segment, index, %error,
                                "dropping segment that failed to parse"
                            ),
                        }
                        None
                    }
                }
            })
            .collect()
    }

    /// Encodes a list of items into a single flat string.
    ///
    /// Every literal separator occurrence inside an item's serialized form
    /// is replaced with the separator's percent-encoded form before
    /// joining. An empty list encodes to the empty string, the inverse of
    /// the empty-value fast path in [`parse`](Self::parse).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qslist::{ListCodec, StringCodec};
    ///
    /// let codec = ListCodec::new(StringCodec);
    /// let encoded = codec.serialize(&["a,b".into(), "c".into()]).unwrap();
    /// assert_eq!(encoded, "a%2Cb,c");
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates a failure of the item codec's serializer unmodified; no
    /// other failure path exists.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn serialize(&self, items: &[C::Item]) -> Result<String> {
        // Pre-allocate assuming short scalar segments
        let mut output = String::with_capacity(items.len() * 8);
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                output.push_str(&self.separator);
            }
            let raw = self.item_codec.serialize_item(item)?;
            output.push_str(&raw.replace(&self.separator, &self.encoded_separator));
        }
        Ok(output)
    }

    /// Compares two lists for order-insensitive equality.
    ///
    /// Two lists are equal when they are the identical slice (pointer and
    /// length, a short-circuit only), or when they have equal length and
    /// every item of `a` is found somewhere in `b` under
    /// [`ItemCodec::eq_items`]. This is a containment check, not multiset
    /// equality: duplicate counts are not balanced, so the relation is
    /// asymmetric under duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qslist::{ListCodec, StringCodec};
    ///
    /// let codec = ListCodec::new(StringCodec);
    /// let xx = vec!["x".to_string(), "x".to_string()];
    /// let xy = vec!["x".to_string(), "y".to_string()];
    ///
    /// // Order does not matter.
    /// assert!(codec.equal(&["a".into(), "b".into()], &["b".into(), "a".into()]));
    ///
    /// // Every item of `xx` occurs in `xy`, but not the other way around.
    /// assert!(codec.equal(&xx, &xy));
    /// assert!(!codec.equal(&xy, &xx));
    /// ```
    #[must_use]
    pub fn equal(&self, a: &[C::Item], b: &[C::Item]) -> bool {
        if std::ptr::eq(a, b) {
            return true;
        }
        if a.len() != b.len() {
            return false;
        }
        a.iter()
            .all(|item| b.iter().any(|other| self.item_codec.eq_items(item, other)))
    }
}
