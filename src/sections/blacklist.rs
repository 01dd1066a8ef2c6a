//! Blacklist section - vetoes passwords from the common-password list.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::is_blacklisted;

/// Returns `true` when the password is in the loaded blacklist.
///
/// A vetoed password scores 0 regardless of the other sections. Returns
/// `false` when the blacklist was never initialized.
pub fn blacklist_veto(password: &SecretString) -> bool {
    is_blacklisted(password.expose_secret())
}
