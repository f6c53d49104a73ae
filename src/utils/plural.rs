//! Pluralization for summary lines.

/// `""` for exactly one, `"s"` otherwise.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Count followed by a pluralized noun: `"1 section"`, `"3 violations"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "violation"), "0 violations");
        assert_eq!(plural_count(1, "section"), "1 section");
        assert_eq!(plural_count(4, "hotkey"), "4 hotkeys");
    }
}
