//! Password scoring sections
//!
//! Each section scores one aspect of the password; the scorer sums the
//! contributions and clamps the result.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::blacklist_veto;
pub use length::length_points;
pub use pattern::pattern_penalty;
pub use variety::variety_points;
