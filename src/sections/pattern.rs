//! Pattern section - penalizes repetitive and sequential runs.

use secrecy::{ExposeSecret, SecretString};

const RUN_PENALTY: i64 = -10;

/// Penalizes predictable patterns.
///
/// -10 for a run of three or more repeated characters, -10 for a run of
/// four or more sequential characters (ascending or descending code
/// points). Returns 0 when neither pattern is present.
pub fn pattern_penalty(password: &SecretString) -> i64 {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < 3 {
        return 0;
    }

    let mut penalty = 0;

    let mut run = 1;
    for pair in chars.windows(2) {
        if pair[1] == pair[0] {
            run += 1;
            if run >= 3 {
                penalty += RUN_PENALTY;
                break;
            }
        } else {
            run = 1;
        }
    }

    if chars.len() >= 4 {
        let sequential = chars.windows(4).any(|window| {
            window.windows(2).all(|pair| {
                let prev = pair[0] as i32;
                let curr = pair[1] as i32;
                curr == prev + 1 || curr == prev - 1
            })
        });
        if sequential {
            penalty += RUN_PENALTY;
        }
    }

    penalty
}
