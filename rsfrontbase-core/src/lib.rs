//! Types, traits and constants to abstract over the different
//! implementations of the FrontBase client

mod connection;
mod datatype;
#[cfg(feature = "date_time")]
pub mod date_time;
pub(crate) mod error;
mod params;
mod row;
mod session;
mod value;

pub use connection::*;
pub use datatype::Datatype;
pub use error::{err_column_null, err_idx_not_exist, err_type_conv, FbsError};
pub use params::*;
pub use row::*;
pub use session::*;
pub use value::*;

/// Size of the buffer handed to the digest primitive. Upper bound of the
/// digest length produced by FBCAccess.
pub const DIGEST_BUFFER_LEN: usize = 1000;

/// Upper bound, in bytes, of the `file://` url built for path connections
pub const MAX_URL_LEN: usize = 1024;

/// User under which the database password is digested
pub const SYSTEM_USER: &str = "_SYSTEM";

/// Commit flag of the execute-SQL primitive
pub const FBCDC_COMMIT: u32 = 1;

/// Table name reported by FBCAccess for columns without a table
pub const NO_TABLE_NAME: &str = "_NA";
