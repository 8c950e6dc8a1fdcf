//! Where the cart drawer is shown.
//!
//! The store itself is route-agnostic; shells call [`cart_visible`] with the
//! current path to decide whether to mount the drawer.

/// Route prefixes on which visitors browse and select activities.
const BROWSING_PREFIXES: &[&str] = &["/destinations", "/activities"];

/// Whether the cart drawer should be shown for `route`.
///
/// `route` is a request path, optionally with a query string or fragment.
/// Matching is by whole path segment, so `/destinations-admin` does not match
/// `/destinations`.
pub fn cart_visible(route: &str) -> bool {
    let path = route
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    BROWSING_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}
