//! Marker grammar
//!
//! A marker is a left bracket, one sigil character (`!` opening, `~`
//! closing), one or more characters excluding `]`, CR and LF, then a right
//! bracket. Because the name class excludes CR/LF, a marker never spans
//! more than one line.

use regex::Regex;
use std::sync::OnceLock;

/// Prefix that starts an opening marker
pub const OPENING_PREFIX: &str = "[!";

/// Prefix that starts a closing marker
pub const CLOSING_PREFIX: &str = "[~";

/// Half-width, in characters, of the window positional queries inspect
/// around the cursor
pub const QUERY_WINDOW: usize = 20;

/// Regex matching a complete marker: `[!name]` or `[~name]`
pub fn marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[([!~])([^\]\r\n]+)\]").unwrap())
}

/// Regex matching a complete opening marker at the end of a text slice,
/// allowing trailing whitespace. Used by the auto-close policy.
pub fn opening_at_end_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[!([^\]\r\n]+)\]\s*$").unwrap())
}

/// Sanitize a raw marker name: trim surrounding whitespace and escape
/// angle brackets so the name is safe to embed in rendered output.
///
/// Idempotent: sanitizing an already-sanitized name yields the same string.
pub fn sanitize_name(raw: &str) -> String {
    raw.trim().replace('<', "&lt;").replace('>', "&gt;")
}
