//! Splitting bodies at boundary delimiters.

use core::ops::Range;

/// Iterator over the segments of a body, as byte ranges.
///
/// Splits the body at literal occurrences of `\r\n--` followed by the
/// boundary token, yielding only the regions strictly between consecutive
/// delimiters. The preamble before the first delimiter and the trailer
/// after the last (conventionally `--`) are never yielded.
///
/// A body opening directly with the dashed boundary is treated as starting
/// with a delimiter, compensating for a leading line break stripped by
/// upstream body handling.
///
/// Matching is plain substring search, so a boundary token holding
/// characters special to some pattern syntax is still matched literally.
#[derive(Debug)]
pub struct Segments<'a> {
    body: &'a [u8],
    boundary: &'a [u8],
    /// Offset past the most recent delimiter, once one has been found.
    start: Option<usize>,
}

impl<'a> Segments<'a> {
    /// Create an iterator over the segments between delimiters.
    pub fn new(body: &'a [u8], boundary: &'a str) -> Self {
        let boundary = boundary.as_bytes();

        let start = if body.starts_with(b"--") && body[2..].starts_with(boundary) {
            Some(2 + boundary.len())
        } else {
            find(body, boundary, 0).map(|p| p + 4 + boundary.len())
        };

        Self {
            body,
            boundary,
            start,
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.start?;

        // Without a following delimiter, the pending region is the trailer.
        let Some(p) = find(self.body, self.boundary, start) else {
            self.start = None;
            return None;
        };

        self.start = Some(p + 4 + self.boundary.len());
        Some(start..p)
    }
}

/// Locate the next literal occurrence of the delimiter at or after an offset.
fn find(body: &[u8], boundary: &[u8], from: usize) -> Option<usize> {
    let last = body.len().checked_sub(4 + boundary.len())?;

    (from..=last).find(|&p| body[p..].starts_with(b"\r\n--") && body[p + 4..].starts_with(boundary))
}

/// Split a segment into its header block and payload at the first blank
/// line, or `None` for a segment without one.
///
/// The returned ranges index into the body the segment was taken from. The
/// line break opening the segment (carried over from the delimiter line)
/// belongs to the header block and is skipped by header parsing.
pub fn split_head(body: &[u8], segment: Range<usize>) -> Option<(Range<usize>, Range<usize>)> {
    let at = body[segment.clone()]
        .windows(4)
        .position(|w| w == b"\r\n\r\n")?;

    let head = segment.start..segment.start + at;
    let payload = segment.start + at + 4..segment.end;

    Some((head, payload))
}
