//! Client trait to abstract over the FBCAccess implementations
//!
//! Every reference counted FBCAccess object is exposed as an associated
//! handle type. Each class of handle has its own release verb, and the
//! verbs are not interchangeable.

use crate::FbsError;

/// Parameters of the create-session primitive
#[derive(Debug, Clone, Copy)]
pub struct SessionParams<'a> {
    pub session_name: &'a str,
    pub user: &'a str,
    /// Already digested user password
    pub password: Option<&'a str>,
    pub os_user: &'a str,
}

/// One value slot of a fetched row.
///
/// Reading a field that does not match the slot datatype is undefined
/// for the native client, so callers must check the column datatype first.
pub trait FbcSlot {
    fn boolean(&self) -> bool;

    fn tiny_integer(&self) -> i8;

    fn short_integer(&self) -> i16;

    fn integer(&self) -> i32;

    fn long_integer(&self) -> i64;

    fn numeric(&self) -> f64;

    fn real(&self) -> f64;

    fn decimal(&self) -> f64;

    /// Character data, without the terminator
    fn character(&self) -> &[u8];

    /// String form of the BLOB handle stored in the slot
    fn blob_handle(&self) -> &[u8];

    /// Seconds since 2001-01-01 00:00:00 UTC
    fn raw_timestamp(&self) -> f64;

    fn raw_day_time(&self) -> f64;

    /// Size of a BIT / BIT VARYING value
    fn bit_size(&self) -> u32;

    fn bit_bytes(&self) -> &[u8];

    /// Runtime datatype code of an ANY TYPE slot
    fn any_type_code(&self) -> u32;

    /// Nested value of an ANY TYPE slot
    fn any_type_value(&self) -> Option<&Self>;
}

/// The capabilities consumed from the FBCAccess library
pub trait FbcAccess {
    /// `FBCDatabaseConnection`
    type DcHandle;
    /// `FBCMetaData`, for sessions and executed statements
    type MdHandle;
    /// `FBCErrorMetaData`
    type EmdHandle;
    /// Message buffer returned by the all-error-messages primitive
    type Message;
    /// Datatype metadata allocated for an ANY TYPE value
    type DtmdHandle;
    /// `FBCRow`
    type RowHandle;
    /// Value slot of a row
    type Slot: FbcSlot;
    /// `FBCBlobHandle`
    type BlobHandle;
    /// Buffer returned by the read-BLOB primitive
    type LobData;

    /// Digest a password for a user, `None` if the library produced no digest
    fn digest_password(&self, user: Option<&str>, password: &str)
        -> Result<Option<String>, FbsError>;

    /// Connect through FBExec to a named database on a host
    fn connect_rm(
        &self,
        database: &str,
        host: &str,
        database_password: Option<&str>,
    ) -> Result<Self::DcHandle, FbsError>;

    /// Connect to the database server listening at a port on a host
    fn connect_rm_port(
        &self,
        host: &str,
        port: u32,
        database_password: Option<&str>,
    ) -> Result<Self::DcHandle, FbsError>;

    /// Connect to an url and create a session, returning the session metadata
    fn connect_url(
        &self,
        url: &str,
        database_password: Option<&str>,
        session: &SessionParams,
    ) -> Result<Option<Self::MdHandle>, FbsError>;

    /// Connection owning the session metadata returned by `connect_url`.
    /// The returned handle is not retained
    fn database_connection(&self, md: &Self::MdHandle) -> Option<Self::DcHandle>;

    fn retain(&self, dc: &Self::DcHandle);

    fn close(&self, dc: &Self::DcHandle);

    fn release(&self, dc: &Self::DcHandle);

    fn connected(&self, dc: &Self::DcHandle) -> bool;

    /// Latest error message of the connection
    fn error_message(&self, dc: &Self::DcHandle) -> Option<String>;

    fn create_session(
        &self,
        dc: &Self::DcHandle,
        session: &SessionParams,
    ) -> Result<Option<Self::MdHandle>, FbsError>;

    fn set_format_result(&self, dc: &Self::DcHandle, format: bool);

    /// Execute a sql statement. `flags` is `FBCDC_COMMIT` or zero
    fn execute_sql(
        &self,
        dc: &Self::DcHandle,
        sql: &str,
        flags: u32,
    ) -> Result<Option<Self::MdHandle>, FbsError>;

    fn release_metadata(&self, md: &Self::MdHandle);

    fn errors_found(&self, md: &Self::MdHandle) -> bool;

    fn error_metadata(&self, md: &Self::MdHandle) -> Option<Self::EmdHandle>;

    fn release_error_metadata(&self, emd: &Self::EmdHandle);

    fn all_error_messages(&self, emd: &Self::EmdHandle) -> Option<Self::Message>;

    fn message_bytes<'m>(&self, msg: &'m Self::Message) -> &'m [u8];

    fn release_message(&self, msg: &Self::Message);

    /// Textual message of a statement that does not produce rows
    fn fetch_message<'m>(&self, md: &'m Self::MdHandle) -> Option<&'m [u8]>;

    fn column_count(&self, md: &Self::MdHandle) -> u32;

    fn column_table_name<'m>(&self, md: &'m Self::MdHandle, column: u32) -> &'m [u8];

    fn column_label_name<'m>(&self, md: &'m Self::MdHandle, column: u32) -> &'m [u8];

    fn column_is_nullable(&self, md: &Self::MdHandle, column: u32) -> bool;

    /// Code of the datatype metadata at the column index
    fn column_datatype_code(&self, md: &Self::MdHandle, column: u32) -> u32;

    /// Scale of the datatype metadata at the column index
    fn column_scale(&self, md: &Self::MdHandle, column: u32) -> i64;

    /// Allocate a datatype metadata describing the runtime type of an ANY TYPE slot
    fn any_type_metadata(&self, md: &Self::MdHandle, slot: &Self::Slot)
        -> Option<Self::DtmdHandle>;

    fn datatype_scale(&self, dtmd: &Self::DtmdHandle) -> i64;

    fn release_datatype_metadata(&self, dtmd: &Self::DtmdHandle);

    /// Fetch the next row, `None` at the end of the rowset
    fn fetch_row(&self, md: &Self::MdHandle) -> Option<Self::RowHandle>;

    fn release_row(&self, row: &Self::RowHandle);

    /// Value slot at the column, `None` for a null value
    fn row_slot<'r>(&self, row: &'r Self::RowHandle, column: u32) -> Option<&'r Self::Slot>;

    /// Size of the BLOB referenced by a slot
    fn lob_size(&self, slot: &Self::Slot) -> u32;

    fn write_blob(&self, dc: &Self::DcHandle, data: &[u8]) -> Option<Self::BlobHandle>;

    fn blob_handle_from_string(&self, handle: &str) -> Result<Option<Self::BlobHandle>, FbsError>;

    fn blob_handle_string<'b>(&self, blob: &'b Self::BlobHandle) -> &'b [u8];

    fn release_blob_handle(&self, blob: &Self::BlobHandle);

    fn read_blob(&self, dc: &Self::DcHandle, blob: &Self::BlobHandle) -> Option<Self::LobData>;

    fn lob_bytes<'l>(&self, data: &'l Self::LobData) -> &'l [u8];

    /// Release a buffer returned by `read_blob`
    fn release_lob(&self, data: &Self::LobData);

    fn create_database(&self, url: &str) -> Result<bool, FbsError>;

    fn start_database(&self, url: &str) -> Result<bool, FbsError>;

    fn stop_database(&self, url: &str) -> Result<bool, FbsError>;

    fn delete_database(&self, url: &str) -> Result<bool, FbsError>;
}
