//! Middle elision of over-long identifiers.

/// Inserted where characters were removed from a truncated name.
pub const TRUNCATION_MARKER: &str = "__";

/// Shortens `name` to exactly `max_len` characters when it is longer.
///
/// The first and last halves of the budget are kept and joined by
/// [`TRUNCATION_MARKER`]. The half is `max_len / 2` rounded half to even, so
/// an odd budget gives the extra character to the prefix when `max_len / 2`
/// rounds down. Budgets too small to hold the marker keep a plain prefix
/// instead.
///
/// Two names sharing a long enough prefix and suffix truncate to the same
/// string; resolving such collisions is left to the caller.
pub fn truncate_identifier(name: &str, max_len: usize) -> String {
    let len = name.chars().count();
    if len <= max_len {
        return name.to_string();
    }

    let marker_len = TRUNCATION_MARKER.len();
    if max_len <= marker_len {
        return name.chars().take(max_len).collect();
    }

    let middle = half_to_even(max_len);
    let prefix_len = max_len - middle - 1;
    let suffix_len = middle - 1;

    let mut out = String::with_capacity(max_len);
    out.extend(name.chars().take(prefix_len));
    out.push_str(TRUNCATION_MARKER);
    out.extend(name.chars().skip(len - suffix_len));
    out
}

/// `n / 2` rounded half to even.
fn half_to_even(n: usize) -> usize {
    let half = n / 2;
    if n % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_untouched() {
        assert_eq!(truncate_identifier("abc", 3), "abc");
        assert_eq!(truncate_identifier("", 0), "");
    }

    #[test]
    fn elides_the_middle() {
        assert_eq!(truncate_identifier("abcdefghij", 6), "ab__ij");
        assert_eq!(truncate_identifier("abcdefghij", 7), "ab__hij");
        assert_eq!(truncate_identifier("abcdefghij", 3), "__j");
    }

    #[test]
    fn odd_budgets_round_half_to_even() {
        assert_eq!(half_to_even(5), 2);
        assert_eq!(half_to_even(7), 4);
        assert_eq!(half_to_even(43), 22);
        assert_eq!(half_to_even(8), 4);
        assert_eq!(truncate_identifier("abcdefghij", 5), "ab__j");
        assert_eq!(truncate_identifier("abcdefghij", 9), "abcd__hij");
    }

    #[test]
    fn tiny_budgets_keep_a_prefix() {
        assert_eq!(truncate_identifier("abcdefghij", 2), "ab");
        assert_eq!(truncate_identifier("abcdefghij", 1), "a");
        assert_eq!(truncate_identifier("abcdefghij", 0), "");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let truncated = truncate_identifier("ééééééééé", 5);
        assert_eq!(truncated, "éé__é");
        assert_eq!(truncated.chars().count(), 5);
    }
}
