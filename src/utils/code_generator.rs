//! Short code generation and validation utilities.
//!
//! Codes are drawn from the 62-character alphanumeric alphabet using a
//! cryptographically secure generator, so they cannot be enumerated by
//! guessing.

use rand::Rng;

/// Alphabet for generated codes: `A-Z`, `a-z`, `0-9`.
pub const CODE_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated codes when none is configured.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Upper bound for custom code length when none is configured.
pub const DEFAULT_MAX_CUSTOM_CODE_LENGTH: usize = 50;

/// Generates a random short code of `length` characters.
///
/// Each character is drawn uniformly from [`CODE_ALPHABET`] using
/// [`rand::rng`], a ChaCha-based CSPRNG seeded from the operating system.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(7);
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Checks whether `code` is an acceptable short code.
///
/// # Rules
///
/// - Length: 1 to `max_length` characters
/// - Allowed characters: ASCII letters and digits only
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_short_code("demo", 50));
/// assert!(!is_valid_short_code("has space", 50));
/// assert!(!is_valid_short_code("", 50));
/// ```
pub fn is_valid_short_code(code: &str, max_length: usize) -> bool {
    !code.is_empty() && code.len() <= max_length && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(7).len(), 7);
        assert_eq!(generate_code(1).len(), 1);
        assert_eq!(generate_code(32).len(), 32);
    }

    #[test]
    fn test_generate_code_zero_length() {
        assert!(generate_code(0).is_empty());
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code(DEFAULT_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code(DEFAULT_CODE_LENGTH));
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_covers_alphabet() {
        let mut seen: HashMap<char, usize> = HashMap::new();

        for c in generate_code(20_000).chars() {
            *seen.entry(c).or_default() += 1;
        }

        // 20k draws over 62 symbols: every symbol shows up.
        assert_eq!(seen.len(), CODE_ALPHABET.len());
    }

    #[test]
    fn test_generated_codes_are_valid() {
        let code = generate_code(DEFAULT_CODE_LENGTH);
        assert!(is_valid_short_code(&code, DEFAULT_MAX_CUSTOM_CODE_LENGTH));
    }

    #[test]
    fn test_validate_letters_and_digits() {
        assert!(is_valid_short_code("abc123", 50));
        assert!(is_valid_short_code("ABCxyz", 50));
        assert!(is_valid_short_code("7", 50));
        assert!(is_valid_short_code("demo", 50));
    }

    #[test]
    fn test_validate_maximum_length() {
        let at_limit = "a".repeat(50);
        let over_limit = "a".repeat(51);

        assert!(is_valid_short_code(&at_limit, 50));
        assert!(!is_valid_short_code(&over_limit, 50));
    }

    #[test]
    fn test_validate_respects_configured_limit() {
        assert!(is_valid_short_code("abcde", 5));
        assert!(!is_valid_short_code("abcdef", 5));
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(!is_valid_short_code("", 50));
    }

    #[test]
    fn test_validate_spaces_not_allowed() {
        assert!(!is_valid_short_code("has space", 50));
        assert!(!is_valid_short_code(" ", 50));
    }

    #[test]
    fn test_validate_path_separators() {
        assert!(!is_valid_short_code("a/b", 50));
        assert!(!is_valid_short_code("a\\b", 50));
        assert!(!is_valid_short_code("..", 50));
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(!is_valid_short_code("my-code", 50));
        assert!(!is_valid_short_code("my_code", 50));
        assert!(!is_valid_short_code("code@1", 50));
    }

    #[test]
    fn test_validate_non_ascii() {
        assert!(!is_valid_short_code("café", 50));
        assert!(!is_valid_short_code("код", 50));
    }
}
