//! `FbcAccess` implementation for the native FBCAccess library

mod connection;
pub mod fbcaccess;
mod slot;

pub use connection::{
    BlobHandle, DcHandle, DtmdHandle, EmdHandle, LobData, MdHandle, Message, NativeFbcClient,
    RowHandle,
};
pub use fbcaccess::FbcLib;
#[cfg(feature = "dynamic_loading")]
pub use fbcaccess::FbcDynLoading;
#[cfg(feature = "linking")]
pub use fbcaccess::FbcLinking;
pub use slot::NativeSlot;
