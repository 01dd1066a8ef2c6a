//! Variety section - scores character class coverage and spread.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

const CLASS_POINTS: i64 = 15;

/// Scores character variety.
///
/// 15 points per character class present (uppercase, lowercase, digits,
/// specials), 5 more when two or more specials appear, and a spread bonus
/// of 5 at 12 distinct characters or 10 at 16.
pub fn variety_points(password: &SecretString) -> i64 {
    let pwd = password.expose_secret();

    let has_upper = pwd.chars().any(|c| c.is_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| !c.is_alphanumeric());
    let class_count = [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|&&present| present)
        .count() as i64;

    let mut points = class_count * CLASS_POINTS;

    let special_count = pwd.chars().filter(|c| !c.is_alphanumeric()).count();
    if special_count >= 2 {
        points += 5;
    }

    let distinct: HashSet<char> = pwd.chars().collect();
    if distinct.len() >= 16 {
        points += 10;
    } else if distinct.len() >= 12 {
        points += 5;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_points_empty() {
        assert_eq!(variety_points(&secret("")), 0);
    }

    #[test]
    fn test_variety_points_single_class() {
        assert_eq!(variety_points(&secret("abc")), 15);
    }

    #[test]
    fn test_variety_points_all_classes() {
        // four classes, one special, under the distinct-char thresholds
        assert_eq!(variety_points(&secret("Ab1!")), 60);
    }

    #[test]
    fn test_variety_points_multiple_specials() {
        assert_eq!(variety_points(&secret("Ab1!@")), 65);
    }

    #[test]
    fn test_variety_points_distinct_spread() {
        // 12 distinct lowercase letters: one class plus the spread bonus
        assert_eq!(variety_points(&secret("abcdefghijkl")), 15 + 5);
        // 16 distinct
        assert_eq!(variety_points(&secret("abcdefghijklmnop")), 15 + 10);
    }
}
