//! Column name sanitization
//!
//! Raw datasets arrive with headers like `IncomePerCap` or
//! `Owner Count`; downstream table definitions want lowercase
//! snake_case identifiers.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s/\-.,]+").expect("Invalid separator regex")
});

static INVALID_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-z0-9_]").expect("Invalid identifier char regex")
});

/// Sanitize a single column name:
/// - camel case converted to snake case
/// - lowercased, leading/trailing whitespace stripped
/// - spaces and separator punctuation collapsed to underscores
/// - remaining non-identifier characters removed
/// - prefixed with `_` when the result does not start with a letter
///   or underscore
pub fn sanitize_column_name(name: &str) -> String {
    // camelCase -> camel_Case
    let mut snake = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() && prev_lower_or_digit {
            snake.push('_');
        }
        prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        snake.push(ch);
    }

    let lowered = snake.to_lowercase();
    let trimmed = lowered.trim();
    let joined = SEPARATORS.replace_all(trimmed, "_");
    let cleaned = INVALID_CHARS.replace_all(&joined, "").into_owned();

    match cleaned.chars().next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => cleaned,
        _ => format!("_{}", cleaned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_to_snake_case() {
        assert_eq!(sanitize_column_name("IncomePerCap"), "income_per_cap");
        assert_eq!(sanitize_column_name("fipsCode"), "fips_code");
    }

    #[test]
    fn test_spaces_and_separators() {
        assert_eq!(sanitize_column_name("Total Population"), "total_population");
        assert_eq!(sanitize_column_name("engine-size"), "engine_size");
        assert_eq!(sanitize_column_name("date/time"), "date_time");
        assert_eq!(sanitize_column_name("  Owner Count  "), "owner_count");
    }

    #[test]
    fn test_invalid_characters_removed() {
        assert_eq!(sanitize_column_name("price ($)"), "price_");
        assert_eq!(sanitize_column_name("rate%"), "rate");
    }

    #[test]
    fn test_leading_digit_gets_underscore_prefix() {
        assert_eq!(sanitize_column_name("2020 Sales"), "_2020_sales");
    }

    #[test]
    fn test_already_clean_names_pass_through() {
        assert_eq!(sanitize_column_name("county"), "county");
        assert_eq!(sanitize_column_name("owner_count"), "owner_count");
    }
}
