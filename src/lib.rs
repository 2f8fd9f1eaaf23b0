//!
//! Rust FrontBase adapter
//!
//! Adapter over the FBCAccess library: sessions, statements, typed
//! row values and BLOBs, with every FBCAccess object released by its owner.
//!

pub mod prelude {
    pub use crate::query::{Execute, Queryable};
}

mod admin;
mod blob;
mod connection;
mod digest;
mod handle;
mod messages;
mod query;
mod result;
mod row;
mod statement;

#[cfg(test)]
mod tests;

pub use crate::{
    admin::{create_database, delete_database, start_database},
    blob::{BlobData, BlobHandle},
    connection::*,
    digest::digest_password,
    query::{Execute, Queryable},
    result::{Column, ColumnInfo, ResultSet, Rows},
    row::Row,
};
pub use rsfrontbase_core::{
    AccessMode, BlobRef, ColumnToVal, Datatype, FbcAccess, FbcSlot, FbsError, FromRow, IntoParam,
    IntoParams, IsolationLevel, LockingMode, SessionMode, Value,
};

#[cfg(feature = "date_time")]
pub use rsfrontbase_core::date_time;

#[cfg(feature = "native_client")]
pub use rsfrontbase_native::NativeFbcClient;
