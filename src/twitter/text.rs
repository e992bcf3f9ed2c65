//! Text handling for outgoing statuses: truncation to the platform
//! character limit and HTML entity decoding.

/// Truncates text to a character budget, reserving room for a suffix.
///
/// If the text fits inside `max_chars` it is returned unchanged. Otherwise
/// it is cut to `max_chars - len(suffix)` characters and the suffix is
/// appended, so the result never exceeds the budget. Counting is per
/// Unicode code point, not per byte; the platform's limit is a character
/// limit.
///
/// # Parameters
///
/// - `text`: The text to truncate
/// - `max_chars`: The character budget
/// - `suffix`: Marker appended when the text had to be cut
///
/// # Example
///
/// ```rust
/// use retweeter::truncate_text;
///
/// assert_eq!(truncate_text("short", 140, "..."), "short");
/// let cut = truncate_text(&"a".repeat(150), 140, "...");
/// assert_eq!(cut.chars().count(), 140);
/// assert!(cut.ends_with("..."));
/// ```
pub fn truncate_text(text: &str, max_chars: usize, suffix: &str) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let suffix_len = suffix.chars().count();
    // A suffix that cannot fit is itself cut; the budget always wins.
    if suffix_len >= max_chars {
        return suffix.chars().take(max_chars).collect();
    }

    let mut truncated: String = text.chars().take(max_chars - suffix_len).collect();
    truncated.push_str(suffix);
    truncated
}

/// Decodes the standard HTML escapes the API applies to text.
///
/// The search endpoint returns text with `<`, `>`, `&`, and quotes escaped;
/// posting that text back verbatim would publish the escape sequences.
/// `&amp;` is decoded last so a literal entity spelling such as `&amp;lt;`
/// survives a single pass as `&lt;`.
pub fn decode_html_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
