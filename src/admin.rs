//!
//! Rust FrontBase adapter
//!
//! Database administration
//!

use log::debug;
use rsfrontbase_core::{FbcAccess, FbsError};

/// Create a database at the FrontBase url
pub fn create_database<C: FbcAccess>(cli: &C, url: &str) -> Result<bool, FbsError> {
    debug!("Creating database {}", url);

    cli.create_database(url)
}

/// Start the database at the FrontBase url
pub fn start_database<C: FbcAccess>(cli: &C, url: &str) -> Result<bool, FbsError> {
    debug!("Starting database {}", url);

    cli.start_database(url)
}

/// Stop, then delete the database at the FrontBase url.
///
/// Returns the outcome of the delete, the database may have been stopped already
pub fn delete_database<C: FbcAccess>(cli: &C, url: &str) -> Result<bool, FbsError> {
    debug!("Deleting database {}", url);

    cli.stop_database(url)?;
    cli.delete_database(url)
}
