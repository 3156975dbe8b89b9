//! Decoder for bodies held as text.

use std::{collections::HashMap, string::String};

use thiserror::Error;

use crate::sans::{
    boundary::{self, ContentTypeError, SniffError},
    disposition,
    segment::{self, Segments},
};

use super::FromParts;

/// Errors occurring while decoding a text body.
#[derive(Debug, Error)]
pub enum Error {
    /// No boundary in the content type.
    #[error("Unusable content type: {0}")]
    ContentType(#[from] ContentTypeError),
    /// No boundary sniffable from the body.
    #[error("Unusable body prefix: {0}")]
    Sniff(#[from] SniffError),
    /// Delimiters present, but nothing decodable between them.
    #[error("Splitting at the delimiter produced no usable parts.")]
    NoParts,
}

/// Decode the fields of a text body into a name to value mapping.
///
/// This method is also re-exported as `cloison::avec::decode_text`.
///
/// A part with an empty payload maps its field to the empty string. A body
/// the delimiter never occurs in decodes to an empty mapping.
pub fn decode(body: &str, boundary: &str) -> Result<HashMap<String, String>, Error> {
    let mut fields = HashMap::new();
    decode_into(body, boundary, &mut fields)?;

    Ok(fields)
}

/// Decode the fields of a text body, resolving the delimiter first.
///
/// The delimiter is taken from the content type when one is supplied and
/// declares a boundary, and sniffed from the body prefix otherwise.
pub fn decode_form(
    body: &str,
    content_type: Option<&str>,
) -> Result<HashMap<String, String>, Error> {
    let boundary = match content_type.map(boundary::from_content_type) {
        Some(Ok(boundary)) => boundary,
        _ => boundary::sniff(body)?,
    };

    decode(body, boundary)
}

/// Decode the fields of a text body, publishing to a receiver.
pub fn decode_into(body: &str, boundary: &str, o: &mut impl FromParts) -> Result<(), Error> {
    let mut candidates = false;
    let mut published = false;

    // Field name carried across parts, so an unnamed part lands under the
    // name most recently recovered before it.
    let mut name = None;

    for range in Segments::new(body.as_bytes(), boundary) {
        candidates = true;

        // A part without a blank line is skipped, not a failure of the call.
        let Some((head, payload)) = segment::split_head(body.as_bytes(), range) else {
            continue;
        };

        if let Some(n) = disposition::field_name(&body[head]) {
            name = Some(n);
        }

        let Some(name) = name else {
            continue;
        };

        o.add_text(name, &body[payload]);
        published = true;
    }

    if candidates && !published {
        Err(Error::NoParts)?;
    }

    Ok(())
}
