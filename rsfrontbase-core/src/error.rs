//! Error type for the adapter

use thiserror::Error;

use crate::Datatype;

#[derive(Debug, Error)]
pub enum FbsError {
    /// The connect primitive returned no connection
    #[error("could not connect: {0}")]
    Connect(String),

    /// Session creation failed. `None` when FBCAccess reported nothing
    #[error("could not create session: {}", .0.as_deref().unwrap_or("no session metadata"))]
    Session(Option<String>),

    #[error("sql error: {0}")]
    Sql(String),

    #[error("path too long")]
    PathTooLong,

    #[error("blob error: {0}")]
    Blob(String),

    #[error("error: {0}")]
    Other(String),
}

impl From<String> for FbsError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}

impl From<&str> for FbsError {
    fn from(msg: &str) -> Self {
        Self::Other(msg.to_string())
    }
}

impl From<std::ffi::NulError> for FbsError {
    fn from(e: std::ffi::NulError) -> Self {
        Self::Other(format!("string contains an interior nul byte at {}", e.nul_position()))
    }
}

pub fn err_idx_not_exist<T>() -> Result<T, FbsError> {
    Err(FbsError::Other("This index doesn't exists".to_string()))
}

pub fn err_column_null(type_name: &str) -> FbsError {
    format!(
        "This is a null value. Use the Option<{}> to safe access this column and avoid errors",
        type_name
    )
    .into()
}

pub fn err_type_conv<T>(from: Datatype, to: &str) -> Result<T, FbsError> {
    Err(FbsError::Other(format!(
        "Can't convert {:?} column to {}",
        from, to
    )))
}
