//! Length section - scores password length.

use secrecy::{ExposeSecret, SecretString};

const BASE_CAP: i64 = 20;

/// Scores password length: half a point per byte up to 20, plus a bonus
/// for passwords longer than 12 or 16 bytes.
pub fn length_points(password: &SecretString) -> i64 {
    let len = password.expose_secret().len();

    let mut points = ((len as f64) * 0.5).min(BASE_CAP as f64) as i64;
    if len > 16 {
        points += 10;
    } else if len > 12 {
        points += 5;
    }
    points
}
