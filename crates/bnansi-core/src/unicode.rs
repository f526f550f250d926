//! Character-level Unicode classification for Bengali text.

/// Check the full Bengali block (U+0980..U+09FF). Includes a few unassigned
/// codepoints, which never appear in real input.
pub fn is_bengali(c: char) -> bool {
    ('\u{0980}'..='\u{09FF}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bengali() {
        assert!(is_bengali('ক'));
        assert!(is_bengali('৯'));
        assert!(is_bengali('\u{09CD}'));
        assert!(!is_bengali('K'));
        assert!(!is_bengali('\u{200C}'));
        // The danda is shared with Devanagari.
        assert!(!is_bengali('।'));
    }
}
