//! Extracting JSON text from raw asset bytes.

use std::borrow::Cow;

use super::error::LocalizationError;

/// Byte that opens the JSON document inside an asset.
const JSON_MARKER: u8 = b'{';

/// Returns the asset's text from the first `{` byte to the end.
///
/// Some assets carry a binary or text preamble in front of the JSON, so
/// everything before the marker is dropped. Invalid UTF-8 is replaced rather
/// than rejected.
///
/// # Errors
/// `LocalizationError::NoJsonContent` when the bytes contain no `{`.
pub fn payload_text(bytes: &[u8]) -> Result<Cow<'_, str>, LocalizationError> {
    let start = bytes
        .iter()
        .position(|&byte| byte == JSON_MARKER)
        .ok_or(LocalizationError::NoJsonContent)?;

    Ok(String::from_utf8_lossy(bytes.get(start..).unwrap_or_default()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain(&b"{\"a\":{}}"[..], "{\"a\":{}}")]
    #[case::binary_preamble(&b"\x00\x01\xffjunk{\"a\":1}"[..], "{\"a\":1}")]
    #[case::text_preamble(&b"header: v1\n{}"[..], "{}")]
    #[case::first_marker_wins(&b"x{y{z"[..], "{y{z")]
    #[case::marker_only(&b"{"[..], "{")]
    fn payload_text_starts_at_first_marker(#[case] bytes: &[u8], #[case] expected: &str) {
        let text = payload_text(bytes).unwrap();

        assert_that!(text.as_ref(), eq(expected));
    }

    #[rstest]
    #[case::empty(&b""[..])]
    #[case::no_marker(&b"English,Hello\n"[..])]
    #[case::closing_brace_only(&b"}]"[..])]
    fn payload_text_rejects_bytes_without_marker(#[case] bytes: &[u8]) {
        let result = payload_text(bytes);

        assert!(matches!(result, Err(LocalizationError::NoJsonContent)));
    }

    #[rstest]
    fn payload_text_keeps_multibyte_text() {
        let bytes = "\u{feff}{\"k\":{\"Simplified Chinese\":\"你好\"}}".as_bytes();

        let text = payload_text(bytes).unwrap();

        assert_that!(text.as_ref(), contains_substring("你好"));
        assert_that!(text.starts_with('{'), eq(true));
    }
}
