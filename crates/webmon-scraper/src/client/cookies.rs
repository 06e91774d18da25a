//! `Cookie` header rendering for a record's auth context.

use webmon_core::AuthContext;

/// Renders `auth` as a `Cookie` header value (`a=1; b=2`), in key order.
///
/// Returns `None` for an empty context so no header is sent at all.
pub(crate) fn cookie_header(auth: &AuthContext) -> Option<String> {
    if auth.is_empty() {
        return None;
    }
    Some(
        auth.iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; "),
    )
}
