//! Placeholder initials shown while no image is set

/// Maximum number of characters kept from the caller's text
pub const MAX_PLACEHOLDER_CHARS: usize = 2;

/// Normalize caller text into placeholder initials.
///
/// Trims surrounding whitespace, uppercases, then keeps at most the first two
/// characters. Returns `None` when nothing is left after trimming.
pub fn normalize(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(
        trimmed
            .to_uppercase()
            .chars()
            .take(MAX_PLACEHOLDER_CHARS)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_two_letters_uppercased() {
        assert_eq!(normalize("  subin krishna ").as_deref(), Some("SU"));
        assert_eq!(normalize("ab").as_deref(), Some("AB"));
        assert_eq!(normalize("x").as_deref(), Some("X"));
    }

    #[test]
    fn whitespace_only_is_absent() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize(" \t\n "), None);
    }

    #[test]
    fn never_exceeds_two_chars() {
        for input in ["hello", "ß", "ßß", "éa", " 日本語 ", "a b"] {
            let out = normalize(input).unwrap();
            assert!(out.chars().count() <= MAX_PLACEHOLDER_CHARS, "{input:?} -> {out:?}");
            let expected: String = input.trim().to_uppercase().chars().take(2).collect();
            assert_eq!(out, expected);
            assert_eq!(out, out.to_uppercase());
        }
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(normalize("a b").as_deref(), Some("A "));
    }
}
