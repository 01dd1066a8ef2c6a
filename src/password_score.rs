//! Password score derivation - score, strength message, validity.

use std::fmt;
use std::sync::Arc;

use secrecy::SecretString;

use crate::reactive::{Input, Memo};
use crate::scorer::score_password;

/// Minimum score a password needs to be considered valid.
pub const DEFAULT_MIN_SCORE: i64 = 30;

/// Password strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    VeryWeak,
    Weak,
    Good,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Buckets a score. Half-open ranges, ascending, first match wins.
    pub fn from_score(score: i64) -> Self {
        if score < 20 {
            Strength::VeryWeak
        } else if score < 40 {
            Strength::Weak
        } else if score < 60 {
            Strength::Good
        } else if score < 80 {
            Strength::Strong
        } else {
            Strength::VeryStrong
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "very weak",
            Strength::Weak => "weak",
            Strength::Good => "good",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

type Scorer = dyn Fn(&SecretString) -> Option<i64> + Send + Sync;

/// Reactive password score deriver.
///
/// Reads the password through a shared [`Input`] handle and exposes three
/// derived values: the numeric score, the bucketed strength message, and
/// validity against the minimum score. The score is memoized on the input
/// version, so every read after a password change reflects the new value
/// and the three reads are always mutually consistent.
///
/// An absent scorer result reads as score 0, indistinguishable from a
/// zero score.
pub struct PasswordScore {
    password: Input<SecretString>,
    min_score: i64,
    scorer: Arc<Scorer>,
    memo: Memo<i64>,
}

impl PasswordScore {
    /// Creates a deriver over the built-in scorer with the default minimum
    /// score of 30.
    pub fn new(password: Input<SecretString>) -> Self {
        Self::with_min_score(password, DEFAULT_MIN_SCORE)
    }

    /// Creates a deriver over the built-in scorer with a custom minimum.
    pub fn with_min_score(password: Input<SecretString>, min_score: i64) -> Self {
        Self::with_scorer(password, min_score, score_password)
    }

    /// Creates a deriver over a custom scoring function.
    pub fn with_scorer(
        password: Input<SecretString>,
        min_score: i64,
        scorer: impl Fn(&SecretString) -> Option<i64> + Send + Sync + 'static,
    ) -> Self {
        Self {
            password,
            min_score,
            scorer: Arc::new(scorer),
            memo: Memo::new(),
        }
    }

    /// Current score, with an absent scorer result normalized to 0.
    pub fn score(&self) -> i64 {
        let (version, password) = self.password.snapshot();
        self.memo.read(version, || (self.scorer)(&password).unwrap_or(0))
    }

    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score())
    }

    /// Strength message for the current score, one of five fixed values.
    pub fn message(&self) -> &'static str {
        self.strength().message()
    }

    /// `true` iff the score meets the minimum, equality included.
    pub fn is_valid(&self) -> bool {
        self.score() >= self.min_score
    }
}
