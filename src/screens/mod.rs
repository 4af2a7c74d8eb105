//! Info screens shown during normal operation.
//!
//! Each screen renders three rows of text into the 128x32 frame from the
//! cached data in [`crate::state::AppState`]; screens never fetch anything
//! themselves.

pub mod network;
pub mod performance;

/// Clip to at most `max` characters without splitting a UTF-8 sequence.
///
/// Hostnames can exceed the 21 columns the panel fits; anything past the
/// clip point simply isn't drawn.
pub(crate) fn clip(
    s: &str,
    max: usize,
) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
