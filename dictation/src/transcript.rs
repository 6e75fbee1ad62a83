//! Transcript token extraction.
//!
//! A dictated phrase is free text, like "りんご2つで398円" or "about 250
//! grams", and the calculators only want one number out of it. The rule is
//! fixed: the *first* decimal token wins, regardless of magnitude or
//! position.
//! This module is pure and stateless; routing and engine concerns live in
//! `adapter`.

use once_cell::sync::Lazy;
use regex::Regex;

// [0-9] rather than \d: the regex crate's \d is Unicode-wide and would
// also match full-width digits the engines never emit.
static NUMERIC_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("numeric token pattern compiles"));

/// Extract the first decimal number (optional fractional part) from a
/// transcript, or `None` when the text contains no digits.
pub fn first_numeric_token(text: &str) -> Option<f64> {
    NUMERIC_TOKEN
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins_over_later_larger_tokens() {
        // "two apples for 398 yen": the 2 is routed, not the 398.
        assert_eq!(first_numeric_token("りんご2つで398円"), Some(2.0));
    }

    #[test]
    fn fractional_part_is_kept_together() {
        assert_eq!(first_numeric_token("1.5リットル入り"), Some(1.5));
        assert_eq!(first_numeric_token("about 2.25 kilos"), Some(2.25));
    }

    #[test]
    fn plain_integer_transcript() {
        assert_eq!(first_numeric_token("398"), Some(398.0));
    }

    #[test]
    fn number_embedded_in_latin_text() {
        assert_eq!(first_numeric_token("the price is 120 yen"), Some(120.0));
    }

    #[test]
    fn no_digits_yields_none() {
        assert_eq!(first_numeric_token("りんごをください"), None);
        assert_eq!(first_numeric_token(""), None);
        assert_eq!(first_numeric_token("no numbers here"), None);
    }

    #[test]
    fn trailing_dot_is_not_a_fraction() {
        // "5." parses as 5; the dot belongs to the sentence.
        assert_eq!(first_numeric_token("5. そのあと6"), Some(5.0));
    }
}
