// src/util/text.rs

/// Extract the first non-empty line of plain text, trimmed and shortened to
/// at most `max_chars` characters (an ellipsis marks the cut).
///
/// # Examples
///
/// ```
/// use notehub::util::text::preview;
///
/// assert_eq!(preview("\n  Milk, eggs  \nbread", 40), "Milk, eggs");
/// assert_eq!(preview("abcdefghij", 5), "abcd…");
/// ```
pub fn preview(content: &str, max_chars: usize) -> String {
    let line = content
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("");

    if line.chars().count() <= max_chars {
        return line.to_string();
    }

    let kept: String = line.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}
