//! Text sanitising helpers for user-submitted values shown in embeds.

/// Words an alias may not contain, to stop senders impersonating staff.
const BLOCKED_ALIAS_WORDS: [&str; 5] = ["admin", "owner", "mod", "moderator", "staff"];

/// Flattens control whitespace to spaces, trims, and truncates to `max` characters.
pub fn safe_text(value: &str, max: usize) -> String {
    value
        .replace(['\r', '\n', '\t'], " ")
        .trim()
        .chars()
        .take(max)
        .collect()
}

/// Returns `true` if a menfess alias contains mention syntax or a staff-like word.
pub fn is_bad_alias(alias: &str) -> bool {
    if alias.contains(['<', '@', '#', '>']) {
        return true;
    }

    let lower = alias.to_lowercase();
    BLOCKED_ALIAS_WORDS.iter().any(|word| lower.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_text_flattens_and_truncates() {
        assert_eq!(safe_text("  hello\nworld\t ", 32), "hello world");
        assert_eq!(safe_text("abcdefgh", 3), "abc");
        assert_eq!(safe_text("", 10), "");
    }

    #[test]
    fn safe_text_counts_characters_not_bytes() {
        assert_eq!(safe_text("🌙🌙🌙", 2), "🌙🌙");
    }

    #[test]
    fn rejects_mentions_in_alias() {
        assert!(is_bad_alias("<@123>"));
        assert!(is_bad_alias("#general"));
        assert!(is_bad_alias("me@home"));
    }

    #[test]
    fn rejects_staff_words_case_insensitively() {
        assert!(is_bad_alias("Server OWNER"));
        assert!(is_bad_alias("Moderator"));
        assert!(is_bad_alias("admin kecil"));
    }

    #[test]
    fn accepts_plain_alias() {
        assert!(!is_bad_alias("secret admirer"));
        assert!(!is_bad_alias("bulan"));
    }
}
