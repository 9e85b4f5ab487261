//! String helpers.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("static regex")
});

/// True if any entry of `haystack` contains `needle`.
pub fn string_slice_contains<S: AsRef<str>>(haystack: &[S], needle: &str) -> bool {
    haystack.iter().any(|s| s.as_ref().contains(needle))
}

/// True if any entry of `haystack` equals `needle`, ignoring case.
pub fn string_slice_compare_insensitive<S: AsRef<str>>(haystack: &[S], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    haystack.iter().any(|s| s.as_ref().to_lowercase() == needle)
}

/// True if any entry of `haystack` contains `needle`, ignoring case.
pub fn string_slice_contains_insensitive<S: AsRef<str>>(haystack: &[S], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    haystack
        .iter()
        .any(|s| s.as_ref().to_lowercase().contains(&needle))
}

/// Interpret a prompt answer: `y` or `yes` in any case.
pub fn yes_or_no(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn is_enabled(enabled: bool) -> &'static str {
    if enabled { "Enabled" } else { "Disabled" }
}

/// Split a camel-case identifier into words.
///
/// Runs of capitals stay together as one word, so
/// `"ExpectedHTTPRainbow"` becomes `"Expected HTTP Rainbow"`.
pub fn add_padding_on_upper_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let mut words: Vec<String> = Vec::new();
    let mut left = 0;
    for x in 1..chars.len() {
        if chars[x].is_uppercase() {
            if !chars[x - 1].is_uppercase() {
                words.push(chars[left..x].iter().collect());
                left = x;
            }
        } else if x > 1 && chars[x - 1].is_uppercase() && left < x - 1 {
            words.push(chars[left..x - 1].iter().collect());
            left = x - 1;
        }
    }
    words.push(chars[left..].iter().collect());
    words.join(" ")
}

/// Loose email shape check: local part, `@`, and a host name.
pub fn matches_email_pattern(value: &str) -> bool {
    EMAIL.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_slice_contains() {
        let haystack = ["hello", "world", "USDT", "Contains", "string"];
        assert!(string_slice_contains(&haystack, "USD"));
        assert!(!string_slice_contains(&haystack, "thing"));
    }

    #[test]
    fn test_string_slice_compare_insensitive() {
        let haystack = ["hello", "WoRld", "USDT", "Contains", "string"];
        assert!(!string_slice_compare_insensitive(&haystack, "USD"));
        assert!(string_slice_compare_insensitive(&haystack, "WORLD"));
    }

    #[test]
    fn test_string_slice_contains_insensitive() {
        let haystack = vec!["bLa".to_string(), "BrO".to_string(), "sUp".to_string()];
        assert!(string_slice_contains_insensitive(&haystack, "Bla"));
        assert!(!string_slice_contains_insensitive(&haystack, "ning"));
    }

    #[test]
    fn test_yes_or_no() {
        assert!(yes_or_no("y"));
        assert!(yes_or_no("yes"));
        assert!(yes_or_no("YES"));
        assert!(!yes_or_no("ding"));
    }

    #[test]
    fn test_is_enabled() {
        assert_eq!(is_enabled(true), "Enabled");
        assert_eq!(is_enabled(false), "Disabled");
    }

    #[test]
    fn test_add_padding_on_upper_case() {
        for (supplied, expected) in [
            ("", ""),
            ("ExpectedHTTPRainbow", "Expected HTTP Rainbow"),
            ("SmellyCatSmellsBad", "Smelly Cat Smells Bad"),
            ("Gronk", "Gronk"),
        ] {
            assert_eq!(add_padding_on_upper_case(supplied), expected);
        }
    }

    #[test]
    fn test_matches_email_pattern() {
        assert!(!matches_email_pattern("someone semail"));
        assert!(!matches_email_pattern("someone esemail@gmail"));
        assert!(matches_email_pattern("123@gmail"));
        assert!(matches_email_pattern("someonesemail@email.com"));
    }
}
