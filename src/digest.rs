//!
//! Rust FrontBase adapter
//!
//! Password digest
//!

use rsfrontbase_core::{FbcAccess, FbsError};

/// Digest a password for a user.
///
/// A `None` password produces a `None` digest, without calling the FBCAccess
/// digest. A `None` user is accepted by the library itself.
pub fn digest_password<C: FbcAccess>(
    cli: &C,
    user: Option<&str>,
    password: Option<&str>,
) -> Result<Option<String>, FbsError> {
    match password {
        Some(password) => cli.digest_password(user, password),
        None => Ok(None),
    }
}
