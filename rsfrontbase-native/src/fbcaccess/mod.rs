//! FBCAccess functions and types
//!
//! The functions are either linked at build time (`linking` feature)
//! or loaded from the library at runtime (`dynamic_loading` feature).

#![allow(non_snake_case)]

pub mod types;

use std::os::raw::{c_char, c_int, c_uint, c_void};

pub use types::*;

/// Registers the FBCAccess functions.
///
/// Generates the `FbcLib` trait, that returns each function as a pointer,
/// and its implementations for the enabled linkage features.
macro_rules! fbc_functions {
    ( $(
        fn $name:ident( $( $arg:ident : $ty:ty ),* $(,)? ) $( -> $ret:ty )?;
    )* ) => {
        /// Access to the FBCAccess functions
        pub trait FbcLib {
            $(
                fn $name(&self) -> unsafe extern "C" fn( $( $ty ),* ) $( -> $ret )?;
            )*
        }

        #[cfg(feature = "linking")]
        mod linked {
            use super::*;

            extern "C" {
                $(
                    pub fn $name( $( $arg : $ty ),* ) $( -> $ret )?;
                )*
            }
        }

        /// FBCAccess linked at build time
        #[cfg(feature = "linking")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct FbcLinking;

        #[cfg(feature = "linking")]
        impl FbcLib for FbcLinking {
            $(
                fn $name(&self) -> unsafe extern "C" fn( $( $ty ),* ) $( -> $ret )? {
                    linked::$name
                }
            )*
        }

        /// FBCAccess loaded at runtime
        #[cfg(feature = "dynamic_loading")]
        pub struct FbcDynLoading {
            $(
                $name: unsafe extern "C" fn( $( $ty ),* ) $( -> $ret )?,
            )*
            _lib: libloading::Library,
        }

        #[cfg(feature = "dynamic_loading")]
        impl FbcDynLoading {
            /// Load the FBCAccess library from the path, resolving every function
            pub fn with_client(path: &std::path::Path) -> Result<Self, libloading::Error> {
                unsafe {
                    let lib = libloading::Library::new(path)?;

                    Ok(Self {
                        $(
                            $name: *lib.get::<unsafe extern "C" fn( $( $ty ),* ) $( -> $ret )?>(
                                concat!(stringify!($name), "\0").as_bytes(),
                            )?,
                        )*
                        _lib: lib,
                    })
                }
            }
        }

        #[cfg(feature = "dynamic_loading")]
        impl FbcLib for FbcDynLoading {
            $(
                fn $name(&self) -> unsafe extern "C" fn( $( $ty ),* ) $( -> $ret )? {
                    self.$name
                }
            )*
        }
    };
}

fbc_functions! {
    fn fbcDigestPassword(user: *const c_char, password: *const c_char, digest: *mut c_char) -> *const c_char;

    fn fbcdcConnectToDatabaseRM(
        database_name: *const c_char,
        host_name: *const c_char,
        database_password: *const c_char,
        error_message: *mut *const c_char,
    ) -> *mut FBCDatabaseConnection;
    fn fbcdcConnectToDatabaseUsingPortRM(
        host_name: *const c_char,
        port: c_int,
        database_password: *const c_char,
        error_message: *mut *const c_char,
    ) -> *mut FBCDatabaseConnection;
    fn fbcdcConnectToURL(
        url: *const c_char,
        database_password: *const c_char,
        session_name: *const c_char,
        user_name: *const c_char,
        password: *const c_char,
        system_user_name: *const c_char,
    ) -> *mut FBCMetaData;
    fn fbcmdDatabaseConnection(md: *mut FBCMetaData) -> *mut FBCDatabaseConnection;
    fn fbcdcRetain(dc: *mut FBCDatabaseConnection) -> *mut FBCDatabaseConnection;
    fn fbcdcClose(dc: *mut FBCDatabaseConnection);
    fn fbcdcRelease(dc: *mut FBCDatabaseConnection);
    fn fbcdcConnected(dc: *mut FBCDatabaseConnection) -> bool;
    fn fbcdcErrorMessage(dc: *mut FBCDatabaseConnection) -> *const c_char;
    fn fbcdcCreateSession(
        dc: *mut FBCDatabaseConnection,
        session_name: *const c_char,
        user_name: *const c_char,
        password: *const c_char,
        system_user_name: *const c_char,
    ) -> *mut FBCMetaData;
    fn fbcdcSetFormatResult(dc: *mut FBCDatabaseConnection, format: bool);
    fn fbcdcExecuteSQL(
        dc: *mut FBCDatabaseConnection,
        sql: *const c_char,
        length: c_uint,
        options: c_uint,
    ) -> *mut FBCMetaData;

    fn fbcmdRelease(md: *mut FBCMetaData);
    fn fbcmdErrorsFound(md: *mut FBCMetaData) -> bool;
    fn fbcmdErrorMetaData(md: *mut FBCMetaData) -> *mut FBCErrorMetaData;
    fn fbcemdRelease(emd: *mut FBCErrorMetaData);
    fn fbcemdAllErrorMessages(emd: *mut FBCErrorMetaData) -> *mut c_char;
    fn fbcemdReleaseMessage(message: *mut c_char);
    fn fbcmdMessage(md: *mut FBCMetaData) -> *const c_char;

    fn fbcmdColumnCount(md: *mut FBCMetaData) -> c_uint;
    fn fbcmdColumnMetaDataAtIndex(md: *mut FBCMetaData, index: c_uint) -> *const FBCColumnMetaData;
    fn fbcmdDatatypeMetaDataAtIndex(md: *mut FBCMetaData, index: c_uint) -> *const FBCDatatypeMetaData;
    fn fbccmdTableName(cmd: *const FBCColumnMetaData) -> *const c_char;
    fn fbccmdLabelName(cmd: *const FBCColumnMetaData) -> *const c_char;
    fn fbccmdIsNullable(cmd: *const FBCColumnMetaData) -> bool;
    fn fbcdmdDatatypeCode(dtmd: *const FBCDatatypeMetaData) -> FBDatatypeCode;
    fn fbcdmdScale(dtmd: *const FBCDatatypeMetaData) -> c_int;
    fn fbcmdAnyTypeDatatypeMetaData(md: *mut FBCMetaData, column: *const FBCColumn) -> *mut FBCDatatypeMetaData;
    fn fbcdmdRelease(dtmd: *mut FBCDatatypeMetaData);

    fn fbcmdFetchRow(md: *mut FBCMetaData) -> *mut FBCRow;
    fn fbcrRelease(row: *mut FBCRow);
    fn fbcrLOBSize(lob: *const FBCLOB) -> c_uint;

    fn fbcdcWriteBLOB(dc: *mut FBCDatabaseConnection, data: *const c_void, size: c_uint) -> *mut FBCBlobHandle;
    fn fbcdcReadBLOB(dc: *mut FBCDatabaseConnection, handle: *mut FBCBlobHandle) -> *mut c_void;
    fn fbcdcReleaseLOB(data: *mut c_void);
    fn fbcbhCreate(handle_string: *const c_char) -> *mut FBCBlobHandle;
    fn fbcbhHandleAsChar(handle: *mut FBCBlobHandle) -> *const c_char;
    fn fbcbhBlobSize(handle: *mut FBCBlobHandle) -> c_uint;
    fn fbcbhRelease(handle: *mut FBCBlobHandle);

    fn fbcdCreate(url: *const c_char, options: *const c_char) -> bool;
    fn fbcdStart(url: *const c_char, options: *const c_char) -> bool;
    fn fbcdStop(url: *const c_char) -> bool;
    fn fbcdDelete(url: *const c_char) -> bool;
}
