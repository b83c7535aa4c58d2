use crate::compat::Cow;

/// Check if a character is an ASCII tab or newline
fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Trim leading/trailing C0 controls and spaces, and drop internal tabs/newlines.
/// Returns a Cow to avoid allocation when possible.
pub fn clean_tabs_and_newlines(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();

    if !bytes.iter().any(|&b| b <= 0x20) {
        return Cow::Borrowed(input);
    }

    let start = bytes.iter().position(|&b| b > 0x20).unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| b > 0x20)
        .map_or(0, |pos| pos + 1);

    if start >= end {
        return Cow::Borrowed("");
    }

    let trimmed = &input[start..end];
    if !has_tabs_or_newline(trimmed) {
        return Cow::Borrowed(trimmed);
    }

    Cow::Owned(
        trimmed
            .chars()
            .filter(|&c| !is_ascii_tab_or_newline(c))
            .collect(),
    )
}

/// Split the fragment (#hash) off a URL string.
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split the query (?search) off a URL string that has no fragment.
/// Returns (`url_without_query`, `query_without_question_mark`)
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
pub fn is_scheme_name(candidate: &str) -> bool {
    let mut bytes = candidate.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

/// Split a leading `scheme:` off the input.
/// Returns (`scheme`, `remainder`); the scheme is `None` if the prefix before
/// the first `:` is not a valid scheme name.
pub fn split_scheme(input: &str) -> (Option<&str>, &str) {
    match memchr::memchr(b':', input.as_bytes()) {
        Some(pos) if is_scheme_name(&input[..pos]) => (Some(&input[..pos]), &input[pos + 1..]),
        _ => (None, input),
    }
}

/// Compare two strings, lowercasing both sides unless `case_sensitive`.
pub fn strings_match(left: &str, right: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        return left == right;
    }
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}
