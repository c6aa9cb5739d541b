//! Normalization helpers for name and phone comparison.
//!
//! The baseline predicate compares raw strings, faithful to the source
//! stores that never normalize what they hand back. The normalized
//! predicate and the bucketed scanner both rely on these canonical forms
//! instead, so `Jane  DOE` / `jane doe` and `555-1111` / `(555) 1111`
//! land on the same key.

/// Normalizes a display name for comparison.
///
/// Normalization steps:
/// 1. Trim leading/trailing whitespace
/// 2. Convert to lowercase
/// 3. Collapse multiple whitespace to single space
///
/// An empty result means the name cannot participate in matching.
///
/// # Example
///
/// ```rust
/// use contact_dedup::services::detection::normalize_name;
///
/// assert_eq!(normalize_name("  Jane   DOE  "), "jane doe");
/// assert_eq!(normalize_name("   "), "");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a phone number for comparison.
///
/// Keeps a single leading `+` (international prefix) and strips every
/// non-digit character. No country-code inference is attempted; `555-1111`
/// and `(555) 1111` normalize identically, but `555-1111` and
/// `+1 555-1111` remain distinct.
///
/// # Example
///
/// ```rust
/// use contact_dedup::services::detection::normalize_phone;
///
/// assert_eq!(normalize_phone("(555) 11-11"), "5551111");
/// assert_eq!(normalize_phone("+49 30 1234"), "+49301234");
/// assert_eq!(normalize_phone("ext."), "");
/// ```
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    let trimmed = phone.trim();
    let mut normalized = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        normalized.push('+');
    }
    normalized.extend(trimmed.chars().filter(char::is_ascii_digit));
    normalized
}

/// Counts the digits in an already-normalized phone number.
#[must_use]
pub fn digit_count(normalized: &str) -> usize {
    normalized.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Jane Doe", "jane doe"; "lowercases")]
    #[test_case("  Jane   Doe  ", "jane doe"; "collapses whitespace")]
    #[test_case("JANE\tDOE", "jane doe"; "tabs are whitespace")]
    #[test_case("", ""; "empty stays empty")]
    #[test_case("  \n ", ""; "blank collapses to empty")]
    fn test_normalize_name(input: &str, expected: &str) {
        assert_eq!(normalize_name(input), expected);
    }

    #[test_case("555-1111", "5551111"; "dashes stripped")]
    #[test_case("(555) 1111", "5551111"; "parens and spaces stripped")]
    #[test_case("+1 (555) 1111", "+15551111"; "leading plus kept")]
    #[test_case("55+5-1111", "5551111"; "interior plus dropped")]
    #[test_case("call me", ""; "no digits yields empty")]
    fn test_normalize_phone(input: &str, expected: &str) {
        assert_eq!(normalize_phone(input), expected);
    }

    #[test]
    fn test_digit_count_ignores_plus() {
        assert_eq!(digit_count("+49301234"), 8);
        assert_eq!(digit_count(""), 0);
    }

    #[test]
    fn test_normalize_name_unicode_lowercase() {
        assert_eq!(normalize_name("ÅSA  Ö"), "åsa ö");
    }
}
