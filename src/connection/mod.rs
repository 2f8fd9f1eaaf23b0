//!
//! Rust FrontBase adapter
//!
//! Connection functions
//!

mod builder;
mod conn_string;

pub use builder::*;

use log::{debug, warn};
use rsfrontbase_core::*;

use crate::{
    blob::{blob_size, BlobData, BlobHandle},
    digest::digest_password,
    handle::{MetaData, TransientBlob},
    messages::copy_all_messages,
    result::ResultSet,
};

/// Statement executed on every new session, so the raw timestamps are UTC
const TIME_ZONE_UTC: &str = "SET TIME ZONE 'UTC';";

const COMMIT: &str = "COMMIT;";
const ROLLBACK: &str = "ROLLBACK;";

/// Credentials and identification of a new session
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    /// Digested under `_SYSTEM` before connecting
    pub database_password: Option<&'a str>,
    pub user: &'a str,
    pub password: Option<&'a str>,
    /// Session name reported to the server
    pub session_name: &'a str,
    /// Operating system user reported to the server
    pub os_user: &'a str,
}

/// A connection to a FrontBase database
pub struct Connection<C: FbcAccess> {
    /// Connection handle, `None` once closed
    pub(crate) handle: Option<C::DcHandle>,

    /// Commit flag of the statements run through `Queryable` and `Execute`
    pub(crate) auto_commit: bool,

    /// FBCAccess functions
    pub(crate) cli: C,
}

impl<C: FbcAccess> Connection<C> {
    /// Connect through FBExec to a named database on a host, and create a session
    pub fn connect_on_host(
        cli: C,
        database: &str,
        host: &str,
        creds: &Credentials,
    ) -> Result<Self, FbsError> {
        let database_password = digest_password(&cli, Some(SYSTEM_USER), creds.database_password)?;

        let dc = cli
            .connect_rm(database, host, database_password.as_deref())
            .map_err(|e| {
                warn!("Failed to connect to {} on {}: {}", database, host, e);
                e
            })?;

        debug!("Connected to {} on {}", database, host);

        Self::open_session(cli, dc, creds)
    }

    /// Connect to the database server listening at a port on a host, and create a session
    pub fn connect_on_port(
        cli: C,
        host: &str,
        port: u32,
        creds: &Credentials,
    ) -> Result<Self, FbsError> {
        let database_password = digest_password(&cli, Some(SYSTEM_USER), creds.database_password)?;

        let dc = cli
            .connect_rm_port(host, port, database_password.as_deref())
            .map_err(|e| {
                warn!("Failed to connect to {}:{}: {}", host, port, e);
                e
            })?;

        debug!("Connected to {}:{}", host, port);

        Self::open_session(cli, dc, creds)
    }

    /// Connect to a local database file, and create a session
    ///
    /// Fails with `FbsError::Session(None)` when FBCAccess opens the session
    /// but gives no connection for it. Only the session metadata is released
    /// in that case.
    pub fn connect_at_path(
        cli: C,
        database: &str,
        path: &str,
        creds: &Credentials,
    ) -> Result<Self, FbsError> {
        let url = format!("file://{}", path);
        if url.len() > MAX_URL_LEN {
            return Err(FbsError::PathTooLong);
        }

        let database_password = digest_password(&cli, Some(SYSTEM_USER), creds.database_password)?;
        let password = digest_password(&cli, Some(creds.user), creds.password)?;

        let params = SessionParams {
            session_name: creds.session_name,
            user: creds.user,
            password: password.as_deref(),
            os_user: creds.os_user,
        };

        let session = cli
            .connect_url(&url, database_password.as_deref(), &params)?
            .ok_or_else(|| {
                warn!("Failed to open {} at {}: no session", database, url);
                FbsError::Session(None)
            })?;

        let dc = {
            let session = MetaData::new(&cli, session);

            if let Some(msgs) = copy_all_messages(&cli, session.handle()) {
                warn!("Failed to open {} at {}: {}", database, url, msgs);
                return Err(FbsError::Session(Some(msgs)));
            }

            // Without a connection there is nothing to close, it stays owned by
            // FBCAccess and goes away with the session metadata
            let dc = cli.database_connection(session.handle()).ok_or_else(|| {
                warn!("Failed to open {} at {}: no connection for the session", database, url);
                FbsError::Session(None)
            })?;
            cli.retain(&dc);

            dc
        };

        debug!("Connected to {} at {}", database, url);

        let conn = Connection {
            handle: Some(dc),
            auto_commit: true,
            cli,
        };

        conn.finalize()
    }

    /// Create the session on a new connection. Any failure
    /// closes and releases the connection.
    fn open_session(cli: C, dc: C::DcHandle, creds: &Credentials) -> Result<Self, FbsError> {
        let conn = Connection {
            handle: Some(dc),
            auto_commit: true,
            cli,
        };

        {
            let dc = conn.dc()?;
            let password = digest_password(&conn.cli, Some(creds.user), creds.password)?;

            let params = SessionParams {
                session_name: creds.session_name,
                user: creds.user,
                password: password.as_deref(),
                os_user: creds.os_user,
            };

            let session = conn.cli.create_session(dc, &params)?.ok_or_else(|| {
                warn!("Failed to create the session: no session");
                FbsError::Session(None)
            })?;
            let session = MetaData::new(&conn.cli, session);

            if let Some(msgs) = copy_all_messages(&conn.cli, session.handle()) {
                warn!("Failed to create the session: {}", msgs);
                return Err(FbsError::Session(Some(msgs)));
            }
        }

        let conn = conn.finalize()?;
        conn.cli.retain(conn.dc()?);

        Ok(conn)
    }

    /// Settings shared by all new sessions: raw values and UTC timestamps
    fn finalize(self) -> Result<Self, FbsError> {
        self.cli.set_format_result(self.dc()?, false);

        if let Err(e) = self.execute_sql(TIME_ZONE_UTC, true) {
            warn!("Failed to set the session time zone: {}", e);
            return Err(e);
        }

        Ok(self)
    }

    pub(crate) fn dc(&self) -> Result<&C::DcHandle, FbsError> {
        self.handle
            .as_ref()
            .ok_or_else(|| FbsError::from("The connection is closed"))
    }

    /// Returns `true` while the connection has an active session
    pub fn is_open(&self) -> bool {
        match &self.handle {
            Some(dc) => self.cli.connected(dc),
            None => false,
        }
    }

    /// Latest error message of the connection
    pub fn error_message(&self) -> Option<String> {
        self.handle
            .as_ref()
            .and_then(|dc| self.cli.error_message(dc))
    }

    /// Commit flag used by `Queryable` and `Execute`. Default: true
    pub fn auto_commit(&self) -> bool {
        self.auto_commit
    }

    pub fn set_auto_commit(&mut self, auto_commit: bool) {
        self.auto_commit = auto_commit;
    }

    /// Execute a statement, committing it when `auto_commit` is set
    pub fn execute_sql(&self, sql: &str, auto_commit: bool) -> Result<ResultSet<'_, C>, FbsError> {
        let dc = self.dc()?;
        let flags = if auto_commit { FBCDC_COMMIT } else { 0 };

        let md = match self.cli.execute_sql(dc, sql, flags)? {
            Some(md) => MetaData::new(&self.cli, md),
            None => {
                return Err(FbsError::Sql(
                    self.cli
                        .error_message(dc)
                        .unwrap_or_else(|| "No metadata returned by the execution".to_string()),
                ))
            }
        };

        if let Some(msgs) = copy_all_messages(&self.cli, md.handle()) {
            return Err(FbsError::Sql(msgs));
        }

        Ok(ResultSet::new(self, md))
    }

    /// Write the bytes as a new BLOB
    pub fn create_blob(&self, data: &[u8]) -> Result<BlobHandle<'_, C>, FbsError> {
        let dc = self.dc()?;
        let size = blob_size(data.len())?;

        let handle = self.cli.write_blob(dc, data).ok_or_else(|| {
            FbsError::Blob(
                self.cli
                    .error_message(dc)
                    .unwrap_or_else(|| "Failed to write the blob".to_string()),
            )
        })?;

        Ok(BlobHandle::new(&self.cli, handle, size))
    }

    /// Read the contents of the BLOB identified by the handle string
    pub fn blob_data(&self, handle: &str) -> Result<BlobData<'_, C>, FbsError> {
        let dc = self.dc()?;

        let blob = self
            .cli
            .blob_handle_from_string(handle)?
            .ok_or_else(|| FbsError::Blob(format!("Invalid blob handle {}", handle)))?;
        let blob = TransientBlob::new(&self.cli, blob);

        let data = self.cli.read_blob(dc, blob.handle()).ok_or_else(|| {
            FbsError::Blob(
                self.cli
                    .error_message(dc)
                    .unwrap_or_else(|| format!("Failed to read the blob {}", handle)),
            )
        })?;

        Ok(BlobData::new(&self.cli, data))
    }

    /// Copy of the contents of a BLOB read from a row
    pub fn read_blob(&self, blob: &BlobRef) -> Result<Vec<u8>, FbsError> {
        Ok(self.blob_data(&blob.handle)?.to_vec())
    }

    /// Run a closure inside a transaction. The statements of the closure
    /// run without auto commit, then are committed if the closure returns
    /// `Ok`, or rolled back otherwise.
    pub fn with_transaction<T>(
        &mut self,
        closure: impl FnOnce(&mut Self) -> Result<T, FbsError>,
    ) -> Result<T, FbsError> {
        if !self.auto_commit {
            return Err(FbsError::from("A transaction is already in progress"));
        }

        self.auto_commit = false;
        let res = closure(self);
        self.auto_commit = true;

        if res.is_ok() {
            self.execute_sql(COMMIT, true)?;
        } else {
            self.execute_sql(ROLLBACK, false)?;
        }

        res
    }

    /// Close and release the connection. Does nothing if already closed
    pub fn close(&mut self) {
        if let Some(dc) = self.handle.take() {
            self.cli.close(&dc);
            self.cli.release(&dc);

            debug!("Connection closed");
        }
    }
}

impl<C: FbcAccess> Drop for Connection<C> {
    fn drop(&mut self) {
        self.close();
    }
}
