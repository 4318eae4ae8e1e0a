//! Defensive JSON extraction from loosely structured oracle responses.
//!
//! The completion oracle guarantees no output structure; callers scan its
//! text for the first embedded JSON payload and decode that. Extraction is
//! purely textual; decoding (and decode failure handling) stays with the
//! caller.

/// Returns the first brace-delimited candidate JSON object in `text`: the
/// span from the first `{` through the last `}`.
///
/// Returns `None` when no such span exists. The span is not validated as
/// JSON; a decode step must follow.
#[must_use]
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    text.get(start..=end)
}

/// Returns the first bracket-delimited candidate JSON array in `text`: the
/// span from the first `[` through the first `]` that follows it.
///
/// Returns `None` when no such span exists. The span is not validated as
/// JSON; a decode step must follow.
#[must_use]
pub fn first_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let rest = text.get(start..)?;
    let end_offset = rest.find(']')?;
    text.get(start..=start + end_offset)
}
