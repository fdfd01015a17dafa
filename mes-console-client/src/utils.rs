//! Small helpers.

/// Maximum bytes of a response body echoed into debug logs.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a body for logging without splitting a multi-byte character.
pub(crate) fn truncate_for_log(body: &str) -> String {
    if body.len() <= TRUNCATE_LIMIT {
        return body.to_string();
    }
    let mut cut = TRUNCATE_LIMIT;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}... ({} bytes total)", &body[..cut], body.len())
}
