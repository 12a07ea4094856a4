//! # Reply Selector
//!
//! File: cli/src/chat/reply.rs
//!
//! ## Overview
//!
//! Maps a chat message to one of four canned bot replies. Matching is a
//! case-insensitive substring check against a fixed keyword list, evaluated in
//! priority order; the first rule that matches wins.
//!
//! | Priority | Keywords            | Reply                          |
//! |----------|---------------------|--------------------------------|
//! | 1        | `hello`, `hi`       | [`GREETING_REPLY`]             |
//! | 2        | `assignment`        | [`ASSIGNMENT_REPLY`]           |
//! | 3        | `thanks`            | [`THANKS_REPLY`]               |
//! | -        | (none)              | [`FALLBACK_REPLY`]             |
//!
//! `hi` is a plain substring, so words such as "this" or "which" also match
//! the greeting rule.
//!

pub const GREETING_REPLY: &str = "Hello! How can I help you today?";
pub const ASSIGNMENT_REPLY: &str = "You can upload your assignment using our form.";
pub const THANKS_REPLY: &str = "You're welcome!";
pub const FALLBACK_REPLY: &str = "Sorry, I didn't understand. Can you please rephrase?";

/// Keyword rules in priority order.
const RULES: &[(&[&str], &str)] = &[
    (&["hello", "hi"], GREETING_REPLY),
    (&["assignment"], ASSIGNMENT_REPLY),
    (&["thanks"], THANKS_REPLY),
];

/// # Select Reply (`select_reply`)
///
/// Returns the bot reply for `message`. Pure and total: the empty string and
/// any input without a keyword get [`FALLBACK_REPLY`].
///
/// ```rust
/// assert_eq!(select_reply("HI, need an assignment"), GREETING_REPLY);
/// ```
pub fn select_reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}
