//!
//! Rust FrontBase adapter
//!
//! Scoped owners of the transient FBCAccess objects
//!

use rsfrontbase_core::FbcAccess;

/// Generate a guard that owns a FBCAccess object and releases
/// it with the matching verb when dropped
macro_rules! scoped_handle {
    ( $( $(#[$attr:meta])* $name:ident($handle:ident) => $release:ident; )* ) => {
        $(
            $(#[$attr])*
            pub(crate) struct $name<'c, C: FbcAccess> {
                cli: &'c C,
                handle: C::$handle,
            }

            impl<'c, C: FbcAccess> $name<'c, C> {
                pub(crate) fn new(cli: &'c C, handle: C::$handle) -> Self {
                    Self { cli, handle }
                }

                pub(crate) fn handle(&self) -> &C::$handle {
                    &self.handle
                }
            }

            impl<'c, C: FbcAccess> Drop for $name<'c, C> {
                fn drop(&mut self) {
                    self.cli.$release(&self.handle);
                }
            }
        )*
    };
}

scoped_handle! {
    /// Session or statement metadata
    MetaData(MdHandle) => release_metadata;

    ErrorMetaData(EmdHandle) => release_error_metadata;

    /// Buffer of the all-error-messages primitive
    ErrorMessages(Message) => release_message;

    /// Datatype metadata of an ANY TYPE value
    DatatypeMetaData(DtmdHandle) => release_datatype_metadata;

    /// Handle created from a handle string, only alive during a read
    TransientBlob(BlobHandle) => release_blob_handle;
}
