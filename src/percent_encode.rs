use crate::compat::{Cow, String};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Form component percent-encode set
/// Everything except ASCII alphanumerics and `-`, `_`, `.`, `~`.
/// Space is handled separately (it becomes `+`).
pub const FORM_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Write percent-encoded string directly to buffer
fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Form-encode a query key or value directly into buffer.
/// Spaces become `+`, a literal `+` becomes `%2B`.
pub fn encode_form_component_into(buffer: &mut String, input: &str) {
    for (i, part) in input.split(' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        percent_encode_into(buffer, part, FORM_COMPONENT_SET);
    }
}

/// Decode a query key or value: `+` is a space, `%XX` a byte.
/// Malformed escapes are kept literally, invalid UTF-8 is replaced.
pub fn decode_form_component(input: &str) -> String {
    let spaced = if input.contains('+') {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
