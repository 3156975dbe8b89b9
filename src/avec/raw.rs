//! Decoder for bodies held as raw bytes.

use core::str;

use std::{collections::HashMap, string::String};

use bytes::Bytes;
use thiserror::Error;

use crate::sans::{
    boundary::{self, ContentTypeError},
    disposition,
    segment::{self, Segments},
};

use super::FromParts;

/// Errors occurring while decoding a raw body.
#[derive(Debug, Error)]
pub enum Error {
    /// No boundary in the content type.
    #[error("Unusable content type: {0}")]
    ContentType(#[from] ContentTypeError),
    /// Delimiters present, but nothing decodable between them.
    #[error("Splitting at the delimiter produced no usable parts.")]
    NoParts,
}

/// Decode the fields of a raw body into a name to value mapping.
///
/// This method is also re-exported as `cloison::avec::decode_raw`.
///
/// Values are subranges of the body's buffer, byte-for-byte identical to
/// the corresponding input regions and shared rather than copied.
pub fn decode(body: &Bytes, boundary: &str) -> Result<HashMap<String, Bytes>, Error> {
    let mut fields = HashMap::new();
    decode_into(body, boundary, &mut fields)?;

    Ok(fields)
}

/// Decode the fields of a raw body, resolving the delimiter from the
/// declared content type.
///
/// Unlike [`text::decode_form`](crate::avec::text::decode_form), there is
/// no sniffing fallback; sniffing is defined over text.
pub fn decode_form(body: &Bytes, content_type: &str) -> Result<HashMap<String, Bytes>, Error> {
    let boundary = boundary::from_content_type(content_type)?;

    decode(body, boundary)
}

/// Decode the fields of a raw body, publishing to a receiver.
pub fn decode_into(body: &Bytes, boundary: &str, o: &mut impl FromParts) -> Result<(), Error> {
    let mut candidates = false;
    let mut published = false;

    // Field name carried across parts, so an unnamed part lands under the
    // name most recently recovered before it.
    let mut name = None;

    for range in Segments::new(body, boundary) {
        candidates = true;

        // A part without a blank line is skipped, not a failure of the call.
        let Some((head, payload)) = segment::split_head(body, range) else {
            continue;
        };

        // A header block that is not text recovers no name.
        let head = str::from_utf8(&body[head]).ok();

        if let Some(n) = head.and_then(disposition::field_name) {
            name = Some(n);
        }

        let Some(name) = name else {
            continue;
        };

        o.add_raw(name, body.slice(payload));
        published = true;
    }

    if candidates && !published {
        Err(Error::NoParts)?;
    }

    Ok(())
}
