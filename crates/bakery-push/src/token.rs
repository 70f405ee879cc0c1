//! Push address format validation.

/// Structural validity check for a provider push address.
///
/// This is a format check, not a liveness check: addresses that do not
/// look like `ExponentPushToken[…]` are dropped before any network call.
pub fn is_valid_push_token(token: &str) -> bool {
    let inner = token
        .strip_prefix("ExponentPushToken[")
        .and_then(|rest| rest.strip_suffix(']'));
    matches!(inner, Some(body) if !body.is_empty())
}
