//! Resolving the delimiter separating parts of a body.

use thiserror::Error;

use super::disposition::parameter;

/// An error extracting a boundary from a content type.
#[derive(Debug, Error)]
pub enum ContentTypeError {
    /// No usable boundary parameter.
    #[error("No boundary parameter in the content type.")]
    MissingBoundary,
}

/// Extract the boundary declared by a `Content-Type` header value.
///
/// The parameter name is matched case-insensitively, and the token may be
/// quoted (`boundary="xyz"`) or bare (`boundary=xyz`, terminating at the
/// next `;` or the end of the value). A parameter whose token is empty
/// counts as missing.
///
/// This is the primary resolution path, and is preferred over [`sniff`]
/// whenever a content type is available.
pub fn from_content_type(content_type: &str) -> Result<&str, ContentTypeError> {
    content_type
        .split(';')
        .find_map(|p| parameter(p, "boundary"))
        .filter(|b| !b.is_empty())
        .ok_or(ContentTypeError::MissingBoundary)
}

/// An error sniffing a boundary from a body.
#[derive(Debug, Error)]
pub enum SniffError {
    /// No form data marker to anchor on.
    #[error("No form data marker in the body.")]
    MissingMarker,
    /// Nothing usable before the marker.
    #[error("No delimiter line before the form data marker.")]
    MissingDelimiter,
}

const MARKER: &str = "Content-Disposition: form-data;";

/// Derive the boundary from a body's opening delimiter line.
///
/// Takes everything before the first `Content-Disposition: form-data;`
/// marker, trims surrounding whitespace, and strips the two dashes
/// prefixing a delimiter line.
///
/// This is a best-effort fallback for when no content type was captured
/// alongside the body. It assumes the sniffed prefix is exactly the
/// delimiter line; a body with preamble noise before its first part will
/// produce an unusable token.
pub fn sniff(body: &str) -> Result<&str, SniffError> {
    let (prefix, _) = body.split_once(MARKER).ok_or(SniffError::MissingMarker)?;

    let prefix = prefix.trim();
    let boundary = prefix.strip_prefix("--").unwrap_or(prefix);

    if boundary.is_empty() {
        Err(SniffError::MissingDelimiter)?;
    }

    Ok(boundary)
}
