//! Default password scorer - combines the scoring sections into one score.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{blacklist_veto, length_points, pattern_penalty, variety_points};

pub const MAX_SCORE: i64 = 100;

/// Scores a password on a 0..=100 scale.
///
/// # Returns
/// - `None` for an empty password (no score computed)
/// - `Some(0)` for a blacklisted password
/// - `Some(score)` otherwise, the clamped sum of the section contributions
pub fn score_password(password: &SecretString) -> Option<i64> {
    if password.expose_secret().is_empty() {
        return None;
    }

    if blacklist_veto(password) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Password vetoed by blacklist");
        return Some(0);
    }

    let raw = length_points(password) + variety_points(password) + pattern_penalty(password);
    Some(raw.clamp(0, MAX_SCORE))
}

/// Async variant that debounces, then sends the score via channel.
///
/// Cancelling the token during the debounce window sends nothing, leaving
/// the receiver on its previous value.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Option<i64>>,
) {
    use std::time::Duration;

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        return;
    }

    if tx.send(score_password(password)).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password score: receiver dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn set_env(key: &str, value: &str) {
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn remove_env(key: &str) {
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn setup_blacklist() -> NamedTempFile {
        crate::blacklist::reset_blacklist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in ["password", "123456", "qwerty", "admin"] {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        set_env("SCORER_BLACKLIST_PATH", temp_file.path().to_str().unwrap());
        let _ = crate::blacklist::init_blacklist();
        temp_file
    }

    fn cleanup_blacklist() {
        remove_env("SCORER_BLACKLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_score_empty_password() {
        let _file = setup_blacklist();
        assert_eq!(score_password(&secret("")), None);
        cleanup_blacklist();
    }

    #[test]
    #[serial]
    fn test_score_blacklisted_password() {
        let _file = setup_blacklist();
        assert_eq!(score_password(&secret("password")), Some(0));
        assert_eq!(score_password(&secret("QWERTY")), Some(0));
        cleanup_blacklist();
    }

    #[test]
    #[serial]
    fn test_score_weak_short_password() {
        let _file = setup_blacklist();
        let score = score_password(&secret("abc")).unwrap();
        assert!(score < 20, "Expected a very weak score, got {}", score);
        cleanup_blacklist();
    }

    #[test]
    #[serial]
    fn test_score_medium_password() {
        let _file = setup_blacklist();
        let score = score_password(&secret("MyPass13!")).unwrap();
        assert!(
            (40..80).contains(&score),
            "Expected a mid-range score, got {}",
            score
        );
        cleanup_blacklist();
    }

    #[test]
    #[serial]
    fn test_score_strong_password() {
        let _file = setup_blacklist();
        let score = score_password(&secret("VeryStrongPassword13!@#")).unwrap();
        assert!(score >= 80, "Expected a very strong score, got {}", score);
        cleanup_blacklist();
    }

    #[test]
    #[serial]
    fn test_score_clamps_at_max() {
        let _file = setup_blacklist();
        // raw contributions sum past 100 for this one
        let score = score_password(&secret("Correct!Horse9Battery#Staple2Xyz")).unwrap();
        assert_eq!(score, MAX_SCORE);
        cleanup_blacklist();
    }

    #[test]
    #[serial]
    fn test_score_penalties_never_go_negative() {
        let _file = setup_blacklist();
        // repeated and sequential runs in a short password
        let score = score_password(&secret("aaa1234")).unwrap();
        assert!((0..=MAX_SCORE).contains(&score));
        cleanup_blacklist();
    }

    #[test]
    #[serial]
    fn test_score_within_bounds() {
        let _file = setup_blacklist();
        for pwd in ["a", "password", "MyPass13!", "VeryStrongPassword13!@#"] {
            let score = score_password(&secret(pwd)).unwrap();
            assert!(
                (0..=MAX_SCORE).contains(&score),
                "Score {} out of bounds for password '{}'",
                score,
                pwd
            );
        }
        cleanup_blacklist();
    }
}
