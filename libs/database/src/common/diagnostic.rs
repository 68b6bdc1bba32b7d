//! Shortening of store error text before it leaves the process.

/// Upper bound on characters of store error text exposed to clients
pub const DIAGNOSTIC_MAX_CHARS: usize = 80;

/// Truncate `message` to [`DIAGNOSTIC_MAX_CHARS`] characters.
///
/// Cuts on a character boundary and appends `...` when anything was dropped.
pub fn truncate_diagnostic(message: &str) -> String {
    truncate_chars(message, DIAGNOSTIC_MAX_CHARS)
}

/// Truncate `message` to at most `max` characters
pub fn truncate_chars(message: &str, max: usize) -> String {
    match message.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}
