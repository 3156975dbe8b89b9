//! Recovering field names from part header blocks.

/// Recover the field name declared by a header block.
///
/// Scans the block line by line for `Content-Disposition` headers and
/// returns the final `name` attribute read, so a later declaration
/// overrides an earlier one. All other attributes (notably `filename`) and
/// all other headers are ignored.
pub fn field_name(head: &str) -> Option<&str> {
    let mut name = None;

    for line in head.split("\r\n") {
        let Some((header, value)) = line.split_once(':') else {
            continue;
        };

        if !header.trim().eq_ignore_ascii_case("content-disposition") {
            continue;
        }

        for attribute in value.split(';') {
            if let Some(value) = parameter(attribute, "name") {
                name = Some(value);
            }
        }
    }

    name
}

/// Match a `key=value` parameter against a key, case-insensitively,
/// returning the unquoted value.
pub(crate) fn parameter<'a>(attribute: &'a str, key: &str) -> Option<&'a str> {
    let (k, v) = attribute.split_once('=')?;

    if !k.trim().eq_ignore_ascii_case(key) {
        return None;
    }

    let v = v.trim();
    let unquoted = v.strip_prefix('"').and_then(|v| v.strip_suffix('"'));

    Some(unquoted.unwrap_or(v))
}
