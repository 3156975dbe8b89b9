#![cfg(feature = "std")]

use bytes::Bytes;
use cloison::avec::{raw, text};
use cloison::sans::boundary;

#[test]
fn decode_text_form() {
    let body = "\r\n--B\r\nContent-Disposition: form-data; name=\"f1\"\r\n\r\nhello\r\n--B\r\nContent-Disposition: form-data; name=\"f2\"\r\n\r\nworld\r\n--B--";

    let fields = text::decode_form(body, Some("multipart/form-data; boundary=B")).unwrap();

    assert_eq!(fields.len(), 2);
    assert_eq!(fields["f1"], "hello");
    assert_eq!(fields["f2"], "world");
}

#[test]
fn decode_text_deterministic() {
    let body = concat!(
        "\r\n--B\r\n",
        "Content-Disposition: form-data; name=\"f1\"\r\n",
        "\r\n",
        "hello\r\n",
        "--B\r\n",
        "Content-Disposition: form-data; name=\"f2\"\r\n",
        "\r\n",
        "world\r\n",
        "--B--"
    );

    let first = text::decode(body, "B").unwrap();
    let second = text::decode(body, "B").unwrap();

    assert_eq!(first, second);
}

#[test]
fn boundary_quoted() {
    let boundary = boundary::from_content_type("multipart/form-data; boundary=\"abc123\"").unwrap();
    assert_eq!(boundary, "abc123");
}

#[test]
fn boundary_with_trailing_parameter() {
    let boundary =
        boundary::from_content_type("multipart/form-data; boundary=abc123; charset=utf-8").unwrap();
    assert_eq!(boundary, "abc123");
}

#[test]
fn boundary_key_case_insensitive() {
    let boundary = boundary::from_content_type("multipart/form-data; BOUNDARY=abc123").unwrap();
    assert_eq!(boundary, "abc123");
}

#[test]
fn boundary_missing() {
    let result = boundary::from_content_type("multipart/form-data");
    assert!(matches!(
        result,
        Err(boundary::ContentTypeError::MissingBoundary)
    ));
}

#[test]
fn boundary_empty_counts_as_missing() {
    let result = boundary::from_content_type("multipart/form-data; boundary=\"\"");
    assert!(matches!(
        result,
        Err(boundary::ContentTypeError::MissingBoundary)
    ));
}

#[test]
fn sniff_delimiter_line() {
    let body = "--xYz123\r\nContent-Disposition: form-data; name=\"f\"\r\n\r\nv\r\n--xYz123--";
    assert_eq!(boundary::sniff(body).unwrap(), "xYz123");
}

#[test]
fn sniff_with_leading_line_break() {
    let body = "\r\n--xYz123\r\nContent-Disposition: form-data; name=\"f\"\r\n\r\nv\r\n--xYz123--";
    assert_eq!(boundary::sniff(body).unwrap(), "xYz123");
}

#[test]
fn sniff_missing_marker() {
    let result = boundary::sniff("no parts in here");
    assert!(matches!(result, Err(boundary::SniffError::MissingMarker)));
}

#[test]
fn sniff_marker_without_delimiter() {
    let result = boundary::sniff("Content-Disposition: form-data; name=\"f\"\r\n\r\nv");
    assert!(matches!(
        result,
        Err(boundary::SniffError::MissingDelimiter)
    ));
}

#[test]
fn decode_form_falls_back_to_sniffing() {
    let body = concat!(
        "--B\r\n",
        "Content-Disposition: form-data; name=\"a\"\r\n",
        "\r\n",
        "1\r\n",
        "--B--"
    );

    // No content type at all, and one without a boundary, both sniff.
    let fields = text::decode_form(body, None).unwrap();
    assert_eq!(fields["a"], "1");

    let fields = text::decode_form(body, Some("multipart/form-data")).unwrap();
    assert_eq!(fields["a"], "1");
}

#[test]
fn last_write_wins() {
    let body = concat!(
        "\r\n--B\r\n",
        "Content-Disposition: form-data; name=\"f\"\r\n",
        "\r\n",
        "first\r\n",
        "--B\r\n",
        "Content-Disposition: form-data; name=\"f\"\r\n",
        "\r\n",
        "second\r\n",
        "--B--"
    );

    let fields = text::decode(body, "B").unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["f"], "second");
}

#[test]
fn empty_payload_keeps_its_key() {
    let body = concat!(
        "\r\n--B\r\n",
        "Content-Disposition: form-data; name=\"empty\"\r\n",
        "\r\n",
        "\r\n--B--"
    );

    let fields = text::decode(body, "B").unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["empty"], "");
}

#[test]
fn name_carries_to_unnamed_part() {
    let body = concat!(
        "\r\n--B\r\n",
        "Content-Disposition: form-data; name=\"f1\"\r\n",
        "\r\n",
        "first\r\n",
        "--B\r\n",
        "X-Ignored: yes\r\n",
        "\r\n",
        "second\r\n",
        "--B--"
    );

    // The unnamed part publishes under the previous name, replacing it.
    let fields = text::decode(body, "B").unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["f1"], "second");
}

#[test]
fn later_disposition_line_wins_within_a_part() {
    let body = concat!(
        "\r\n--B\r\n",
        "Content-Disposition: form-data; name=\"early\"\r\n",
        "Content-Disposition: form-data; name=\"late\"\r\n",
        "\r\n",
        "v\r\n",
        "--B--"
    );

    let fields = text::decode(body, "B").unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["late"], "v");
}

#[test]
fn filename_attribute_is_not_a_name() {
    let body = concat!(
        "\r\n--B\r\n",
        "Content-Disposition: form-data; name=\"doc\"; filename=\"report.pdf\"\r\n",
        "\r\n",
        "v\r\n",
        "--B--"
    );

    let fields = text::decode(body, "B").unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["doc"], "v");
}

#[test]
fn malformed_part_is_skipped() {
    let body = concat!(
        "\r\n--B\r\n",
        "Content-Disposition: form-data; name=\"ok\"\r\n",
        "\r\n",
        "good\r\n",
        "--B\r\n",
        "no blank line in this one\r\n",
        "--B--"
    );

    let fields = text::decode(body, "B").unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["ok"], "good");
}

#[test]
fn all_parts_malformed() {
    let body = "\r\n--B\r\nno blank line\r\n--B--";

    let result = text::decode(body, "B");
    assert!(matches!(result, Err(text::Error::NoParts)));
}

#[test]
fn nameless_part_before_any_name() {
    let body = "\r\n--B\r\nX-Ignored: yes\r\n\r\norphan\r\n--B--";

    let result = text::decode(body, "B");
    assert!(matches!(result, Err(text::Error::NoParts)));
}

#[test]
fn body_without_delimiters_is_empty() {
    let fields = text::decode("just some plain text", "B").unwrap();
    assert!(fields.is_empty());

    let fields = text::decode("", "B").unwrap();
    assert!(fields.is_empty());
}

#[test]
fn metacharacter_boundary_is_literal() {
    let body = concat!(
        "\r\n--a.b+c\r\n",
        "Content-Disposition: form-data; name=\"x\"\r\n",
        "\r\n",
        "1\r\n",
        "--a.b+c--"
    );

    let fields = text::decode(body, "a.b+c").unwrap();
    assert_eq!(fields["x"], "1");

    // The dot must not match an arbitrary character.
    let other = body.replace("a.b+c", "aZb+c");
    let fields = text::decode(&other, "a.b+c").unwrap();
    assert!(fields.is_empty());
}

#[test]
fn decode_raw_inline() {
    let body = Bytes::from_static(
        b"\r\n--bin\r\nContent-Disposition: form-data; name=\"blob\"\r\n\r\n\x00\x01\x02\xff\xfe\r\n--bin--",
    );

    let fields = raw::decode(&body, "bin").unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(&fields["blob"][..], b"\x00\x01\x02\xff\xfe".as_slice());
}

#[test]
fn decode_raw_fixture() {
    let data = std::fs::read("fixtures/mixed-upload.bin").unwrap();
    let body = Bytes::from(data);

    let fields = raw::decode_form(&body, "multipart/form-data; boundary=9f3a61d0c4").unwrap();

    assert_eq!(fields.len(), 2);
    assert_eq!(&fields["caption"][..], b"A full byte sweep".as_slice());

    // Every byte value round-trips untouched.
    let sweep: Vec<u8> = (0..=255).collect();
    assert_eq!(&fields["payload"][..], sweep.as_slice());

    // And the value is the matching region of the input buffer itself.
    let start = body
        .windows(sweep.len())
        .position(|w| w == sweep.as_slice())
        .unwrap();
    assert_eq!(fields["payload"], body.slice(start..start + sweep.len()));
}

#[test]
fn decode_raw_missing_boundary() {
    let body = Bytes::from_static(b"\r\n--bin\r\n\r\n\r\n--bin--");

    let result = raw::decode_form(&body, "multipart/form-data");
    assert!(matches!(result, Err(raw::Error::ContentType(_))));
}
