use super::{value_text, Envelope, ParseError};

const ERROR_MESSAGE_KEY: &str = "Error Message";
const NOTE_KEY: &str = "Note";
const INFORMATION_KEY: &str = "Information";

/// Substrings of an `"Information"` text that mark it as a quota message.
const RATE_LIMIT_MARKERS: &[&str] = &["rate limit", "premium"];

/// Rejects envelopes that signal the upstream did not honor the request.
///
/// Checked in priority order: `"Error Message"`, then `"Note"` (always a
/// rate limit, whatever its text), then `"Information"` (a rate limit only
/// when its text mentions one, otherwise a plain advisory). Must run before
/// any structural decoding since these envelopes carry no data keys.
pub fn classify_envelope(envelope: &Envelope) -> Result<(), ParseError> {
    if let Some(message) = envelope.get(ERROR_MESSAGE_KEY) {
        return Err(ParseError::UpstreamError(value_text(message)));
    }

    if let Some(note) = envelope.get(NOTE_KEY) {
        return Err(ParseError::UpstreamRateLimited(value_text(note)));
    }

    if let Some(info) = envelope.get(INFORMATION_KEY) {
        let text = value_text(info);
        let lower = text.to_lowercase();
        if RATE_LIMIT_MARKERS.iter().any(|m| lower.contains(m)) {
            return Err(ParseError::UpstreamRateLimited(text));
        }
        return Err(ParseError::UpstreamInformational(text));
    }

    Ok(())
}
