//! Wire format notes
//!
//! This module documents the delimited-list format produced and consumed by
//! [`ListCodec`](crate::ListCodec).
//!
//! # Overview
//!
//! A list is carried as the segments' item text joined with a separator
//! string (comma by default):
//!
//! ```text
//! CONFIRMED,QUALIFIED,PENDING
//! ```
//!
//! The encoded string is intended to travel as one key's value inside a URL
//! query string. The codec's responsibility stops at producing and
//! consuming the flat delimited string; URL-level percent encoding of the
//! value as a whole belongs to the caller's URL layer.
//!
//! # Separator escaping
//!
//! Items may legitimately contain the separator, so encoding replaces every
//! literal separator occurrence inside an item's serialized text with the
//! separator's percent-encoded form (the `encodeURIComponent` encoding of
//! the separator string, uppercase hex):
//!
//! ```text
//! items:   ["hello, world", "bye"]
//! encoded: hello%2C world,bye
//! ```
//!
//! Decoding reverses exactly that substitution per segment before handing
//! the text to the item codec. It is *not* a general percent-decoding pass:
//! unrelated percent sequences in item content pass through untouched.
//!
//! ```rust
//! use qslist::{ListCodec, StringCodec};
//!
//! let codec = ListCodec::new(StringCodec);
//! // %41 is not the encoded separator, so it survives as-is.
//! assert_eq!(codec.parse("%41,b"), vec!["%41", "b"]);
//! ```
//!
//! # Known ambiguity
//!
//! Because unescaping is a plain substring substitution, an item whose
//! serialized text *naturally* contains the separator's encoded form is
//! indistinguishable from an escaped separator. With the default comma
//! separator, the item text `50%2Coff` decodes as `50,off`:
//!
//! ```rust
//! use qslist::{ListCodec, StringCodec};
//!
//! let codec = ListCodec::new(StringCodec);
//! let encoded = codec.serialize(&["50%2Coff".into()]).unwrap();
//! // The literal "%2C" in the item collides with the escape form.
//! assert_eq!(codec.parse(&encoded), vec!["50,off"]);
//! ```
//!
//! This limitation is inherited from the format; hardening it would change
//! the observable round-trip behavior of values already in circulation.
//! Items that never contain a percent sign round-trip losslessly.
//!
//! # Empty values
//!
//! The empty string encodes the empty list, and only the empty list: a
//! single empty item encodes as `""` too, which is why decoding treats the
//! empty value as a dedicated fast path rather than a one-segment split.
//! Between separators, empty segments are preserved and handed to the item
//! codec (the string codec turns them into empty items; stricter codecs
//! reject and drop them).
