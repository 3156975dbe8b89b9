//! Convenience interfaces for decoding bodies into form fields.
//!
//! The functions in this module are suited to decoding the fields of a
//! complete in-memory body, publishing to the [`FromParts`] trait. Bodies
//! captured as text are handled by [`text`], bodies captured as raw bytes
//! by [`raw`]; one decode call publishes values in its body's
//! representation only, so a text decode never produces byte values and a
//! raw decode never produces text.
//!
//! In many cases (when the expected fields are known), [`FromParts`] can
//! be derived. See the [`FromParts`](macro@FromParts) macro for details.
//!
//! Two behaviors of the format's common producers are preserved here and
//! worth knowing about. Parts sharing a field name resolve to the latest
//! one decoded. And a part whose header block yields no field name is
//! published under the name most recently recovered from an earlier part,
//! a compatibility behavior rather than a recommended contract; a nameless
//! part before any named one is dropped.

pub mod raw;
pub mod text;

use std::{borrow::ToOwned, collections::HashMap, string::String};

pub use bytes::Bytes;
pub use raw::decode as decode_raw;
pub use text::decode as decode_text;

/// Derive [`FromParts`] for a struct collecting decoded fields.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// To collect a field, add the `part("name")` attribute to a struct field,
/// where `name` is the form field name. An `Option<T>` field takes the
/// latest value decoded for its name, while a `Vec<T>` field collects
/// every occurrence. Fields of `String` receive from text decodes, and
/// fields of [`Bytes`] from raw decodes; `Bytes` must be in scope where
/// the derive is used.
///
/// ```
/// #[derive(Debug, Default, FromParts)]
/// struct Upload {
///     #[part("caption")]
///     caption: Option<String>,
///     #[part("tag")]
///     tags: Vec<String>,
/// }
///
/// let mut upload = Upload::default();
/// cloison::avec::text::decode_into(body, boundary, &mut upload)?;
/// ```
#[cfg(feature = "derive")]
pub use cloison_derive::FromParts;

/// Receive decoded fields for a body.
///
/// The decoders publish one call per decoded part, in body order, through
/// the method matching the body's representation: [`text`] publishes
/// through [`add_text`](Self::add_text) only, [`raw`] through
/// [`add_raw`](Self::add_raw) only.
///
/// The default implementation of each method ignores received values.
///
/// See the [`FromParts`](macro@FromParts) derive macro for an automatic
/// implementation of this trait.
#[allow(unused_variables)]
pub trait FromParts {
    /// Add a text value for a field.
    fn add_text(&mut self, name: &str, value: &str) {}
    /// Add a raw value for a field.
    ///
    /// The value is a subrange of the decoded body's buffer, not a copy.
    fn add_raw(&mut self, name: &str, value: Bytes) {}
}

impl FromParts for HashMap<String, String> {
    fn add_text(&mut self, name: &str, value: &str) {
        self.insert(name.to_owned(), value.to_owned());
    }
}

impl FromParts for HashMap<String, Bytes> {
    fn add_raw(&mut self, name: &str, value: Bytes) {
        self.insert(name.to_owned(), value);
    }
}
