//! FBCAccess data types
//!
//! Layouts follow `FBCAccess/FBCAccess.h`. The reference counted objects
//! are only ever handled through pointers, so they are opaque here.

#![allow(non_camel_case_types, dead_code)]

use std::os::raw::{c_char, c_double, c_int, c_longlong, c_short, c_uchar, c_uint};

macro_rules! opaque {
    ( $( $name:ident ),* ) => {
        $(
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        )*
    };
}

opaque!(
    FBCDatabaseConnection,
    FBCMetaData,
    FBCErrorMetaData,
    FBCColumnMetaData,
    FBCDatatypeMetaData,
    FBCBlobHandle
);

pub type FBDatatypeCode = c_uint;

/// Option flag of `fbcdcExecuteSQL`
pub const FBCDCCommit: c_uint = 1;

/// BIT and BIT VARYING values
#[repr(C)]
#[derive(Clone, Copy)]
pub struct FBCBit {
    pub size: c_uint,
    pub bytes: *const c_uchar,
}

/// BLOB and CLOB values
#[repr(C)]
#[derive(Clone, Copy)]
pub struct FBCLOB {
    pub handle_as_string: *const c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct FBCRawTimestamp {
    pub seconds: c_double,
}

/// ANY TYPE values, carrying the runtime datatype
#[repr(C)]
#[derive(Clone, Copy)]
pub struct FBCAnyType {
    pub type_: FBDatatypeCode,
    pub column: *const FBCColumn,
}

/// Value slot of a fetched row
#[repr(C)]
#[derive(Clone, Copy)]
pub union FBCColumn {
    pub boolean: c_uchar,
    pub tiny_integer: c_char,
    pub short_integer: c_short,
    pub integer: c_int,
    pub long_integer: c_longlong,
    pub numeric: c_double,
    pub real: c_double,
    pub decimal: c_double,
    pub character: *const c_char,
    pub timestamp: *const c_char,
    pub raw_timestamp: FBCRawTimestamp,
    pub raw_day_time: c_double,
    pub bit: FBCBit,
    pub blob: FBCLOB,
    pub any_type: FBCAnyType,
}

/// A fetched row: one slot pointer per column, null for NULL values
pub type FBCRow = *const FBCColumn;
