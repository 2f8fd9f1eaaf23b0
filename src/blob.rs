//!
//! Rust FrontBase adapter
//!
//! BLOB handles and contents
//!

use std::{borrow::Cow, fmt, ops::Deref};

use log::debug;
use rsfrontbase_core::{BlobRef, FbcAccess, FbsError};

/// Size of the BLOB contents, as stored by FrontBase
pub(crate) fn blob_size(len: usize) -> Result<u32, FbsError> {
    u32::try_from(len).map_err(|_| {
        FbsError::Blob(format!(
            "Blob of {} bytes exceeds the maximum of {} bytes",
            len,
            u32::MAX
        ))
    })
}

/// Handle of a BLOB written by this connection.
///
/// The handle string can be stored as a column value. Releasing the
/// handle doesn't affect the contents read through it.
pub struct BlobHandle<'c, C: FbcAccess> {
    cli: &'c C,
    handle: C::BlobHandle,
    size: u32,
}

impl<'c, C: FbcAccess> BlobHandle<'c, C> {
    pub(crate) fn new(cli: &'c C, handle: C::BlobHandle, size: u32) -> Self {
        BlobHandle { cli, handle, size }
    }

    /// String identifying the BLOB
    pub fn handle_string(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.cli.blob_handle_string(&self.handle))
    }

    /// Owned reference to the BLOB, usable after the handle is released
    pub fn to_ref(&self) -> BlobRef {
        BlobRef {
            handle: self.handle_string().into_owned(),
            size: self.size,
        }
    }

    /// Release the handle. Same as dropping it
    pub fn release(self) {}
}

impl<'c, C: FbcAccess> fmt::Debug for BlobHandle<'c, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlobHandle")
            .field("handle", &self.handle_string())
            .field("size", &self.size)
            .finish()
    }
}

impl<'c, C: FbcAccess> Drop for BlobHandle<'c, C> {
    fn drop(&mut self) {
        self.cli.release_blob_handle(&self.handle);
        debug!("Blob handle released");
    }
}

/// Contents of a BLOB, released through the FBCAccess LOB release
pub struct BlobData<'c, C: FbcAccess> {
    cli: &'c C,
    data: C::LobData,
}

impl<'c, C: FbcAccess> BlobData<'c, C> {
    pub(crate) fn new(cli: &'c C, data: C::LobData) -> Self {
        BlobData { cli, data }
    }

    /// Release the contents. Same as dropping it
    pub fn release(self) {}
}

impl<'c, C: FbcAccess> Deref for BlobData<'c, C> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.cli.lob_bytes(&self.data)
    }
}

impl<'c, C: FbcAccess> fmt::Debug for BlobData<'c, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlobData({} bytes)", self.len())
    }
}

impl<'c, C: FbcAccess> Drop for BlobData<'c, C> {
    fn drop(&mut self) {
        self.cli.release_lob(&self.data);
        debug!("Blob data released");
    }
}
