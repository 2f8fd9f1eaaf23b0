//!
//! Rust FrontBase adapter
//!
//! Copies of the FBCAccess error strings
//!

use rsfrontbase_core::FbcAccess;

use crate::handle::{ErrorMetaData, ErrorMessages};

/// Copy every error message reported by a metadata.
///
/// Returns `None` when the metadata reports no errors. The message buffer
/// and the error metadata are both released before returning.
pub(crate) fn copy_all_messages<C: FbcAccess>(cli: &C, md: &C::MdHandle) -> Option<String> {
    if !cli.errors_found(md) {
        return None;
    }

    let emd = match cli.error_metadata(md) {
        Some(emd) => ErrorMetaData::new(cli, emd),
        None => return Some(String::new()),
    };

    let msgs = match cli.all_error_messages(emd.handle()) {
        Some(msgs) => ErrorMessages::new(cli, msgs),
        None => return Some(String::new()),
    };

    let copy = copy_error(cli.message_bytes(msgs.handle()));

    // Message first, then the error metadata
    drop(msgs);
    drop(emd);

    Some(copy)
}

/// Owned copy of a string produced by FBCAccess
pub(crate) fn copy_error(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
