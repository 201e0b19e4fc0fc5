/// Turns a snake_case activity type into a display label
///
/// Underscores become spaces and every ASCII letter that follows a non-word
/// character (anything outside `[A-Za-z0-9_]`, or the start) is upper-cased;
/// everything else is left as-is. Not locale-aware.
///
/// # Examples
/// ```
/// use snakecage_report::analysis_report::services::humanize_activity_type;
///
/// assert_eq!(humanize_activity_type("net_connect"), "Net Connect");
/// assert_eq!(humanize_activity_type("cpu-usage"), "Cpu-Usage");
/// ```
pub fn humanize_activity_type(kind: &str) -> String {
    let mut label = String::with_capacity(kind.len());
    let mut at_word_start = true;

    for c in kind.chars() {
        let c = if c == '_' { ' ' } else { c };
        let is_word_char = c.is_ascii_alphanumeric();
        if is_word_char && at_word_start {
            label.push(c.to_ascii_uppercase());
        } else {
            label.push(c);
        }
        at_word_start = !is_word_char;
    }

    label
}
