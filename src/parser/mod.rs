mod authority;

use authority::split_authority;

use crate::helpers::{prune_fragment, prune_query, split_scheme};
use crate::url_components::RawComponents;

/// Split an already cleaned URL string into its raw components.
///
/// `[scheme:][//authority][path][?query][#fragment]`
///
/// Never fails: anything that is not recognized as scheme or authority ends
/// up in the path.
pub fn split_url(input: &str) -> RawComponents<'_> {
    if input.is_empty() {
        return RawComponents::new();
    }

    let (rest, fragment) = prune_fragment(input);
    let (rest, query) = prune_query(rest);
    let (scheme, rest) = split_scheme(rest);

    let mut components = RawComponents {
        scheme,
        query,
        fragment,
        ..RawComponents::new()
    };

    let path = match rest.strip_prefix("//") {
        Some(after_slashes) => {
            let authority_end = memchr::memchr(b'/', after_slashes.as_bytes())
                .unwrap_or(after_slashes.len());
            let authority = split_authority(&after_slashes[..authority_end]);
            components.username = authority.username;
            components.password = authority.password;
            components.host = Some(authority.host);
            components.port = authority.port;
            &after_slashes[authority_end..]
        }
        None => rest,
    };

    if !path.is_empty() {
        components.path = Some(path);
    }

    components
}
