//! Reactive dashboard derivations library
//!
//! This library provides the derived view-model values behind an account
//! and dashboard UI: password strength scoring over a reactive input, and
//! statistics cards over an asynchronous fetch.
//!
//! # Features
//!
//! - `async` (default): Enables the statistics client seam and the
//!   channel-based scorer variant
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `SCORER_BLACKLIST_PATH`: Custom path to the common-password list
//!   (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use dash_reactive::{init_blacklist, Input, PasswordScore};
//! use secrecy::SecretString;
//!
//! // Initialize blacklist (call once at startup)
//! init_blacklist().expect("Failed to load blacklist");
//!
//! let password = Input::new(SecretString::new("MyP@ssw0rd!".to_string().into()));
//! let derived = PasswordScore::new(password.clone());
//!
//! println!("Score: {}", derived.score());
//! println!("Strength: {}", derived.message());
//! println!("Valid: {}", derived.is_valid());
//!
//! // Derived reads follow every change to the input
//! password.set(SecretString::new("longer and stranger!".to_string().into()));
//! println!("Score: {}", derived.score());
//! ```

// Internal modules
mod blacklist;
mod password_score;
mod reactive;
mod scorer;
mod sections;
mod stats;

// Public API
pub use blacklist::{
    BlacklistError, get_blacklist_path, init_blacklist, init_blacklist_from_path, is_blacklisted,
};
pub use password_score::{DEFAULT_MIN_SCORE, PasswordScore, Strength};
pub use reactive::{AsyncData, FetchState, Input, Memo};
pub use scorer::{MAX_SCORE, score_password};
pub use stats::{
    CardType, LABEL_TOTAL_ITEMS, LABEL_TOTAL_LABELS, LABEL_TOTAL_LOCATIONS, LABEL_TOTAL_VALUE,
    StatCard, StatCards, StatisticsSummary, StatsError,
};

#[cfg(feature = "async")]
pub use scorer::score_password_tx;

#[cfg(feature = "async")]
pub use stats::{StatsClient, fetch_statistics};
