//! `FbcAccess` implementation for the native FBCAccess library

use log::debug;
use rsfrontbase_core::*;
use std::{
    ffi::{CStr, CString},
    os::raw::{c_char, c_int, c_uint, c_void},
    ptr::{self, NonNull},
    slice,
};

use crate::{
    fbcaccess::{self, FbcLib},
    slot::NativeSlot,
};

/// `FBCDatabaseConnection` handle
pub struct DcHandle(NonNull<fbcaccess::FBCDatabaseConnection>);

// FBCAccess connections are not bound to the thread that created them,
// they only must not be used by two threads at once
unsafe impl Send for DcHandle {}

/// `FBCMetaData` handle
pub struct MdHandle(NonNull<fbcaccess::FBCMetaData>);

/// `FBCErrorMetaData` handle
pub struct EmdHandle(NonNull<fbcaccess::FBCErrorMetaData>);

/// Message returned by `fbcemdAllErrorMessages`
pub struct Message(NonNull<c_char>);

/// Datatype metadata allocated for an ANY TYPE value
pub struct DtmdHandle(NonNull<fbcaccess::FBCDatatypeMetaData>);

/// `FBCRow` handle
pub struct RowHandle(NonNull<fbcaccess::FBCRow>);

/// `FBCBlobHandle` handle
pub struct BlobHandle(NonNull<fbcaccess::FBCBlobHandle>);

/// Buffer returned by `fbcdcReadBLOB`
pub struct LobData {
    data: NonNull<c_void>,
    len: usize,
}

/// Client that wraps the native FBCAccess library
pub struct NativeFbcClient<L: FbcLib> {
    fbc: L,
}

impl<L: FbcLib> NativeFbcClient<L> {
    pub fn new(fbc: L) -> Self {
        Self { fbc }
    }
}

#[cfg(feature = "linking")]
impl NativeFbcClient<fbcaccess::FbcLinking> {
    /// Client over the library linked at build time
    pub fn linked() -> Self {
        Self::new(fbcaccess::FbcLinking)
    }
}

#[cfg(feature = "dynamic_loading")]
impl NativeFbcClient<fbcaccess::FbcDynLoading> {
    /// Client over the library found at the path
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rsfrontbase_native::NativeFbcClient;
    ///
    /// // On linux
    /// NativeFbcClient::with_client("/usr/local/FrontBase/lib/libFBCAccess.so");
    ///
    /// // On macOS
    /// NativeFbcClient::with_client("/Library/FrontBase/lib/libFBCAccess.dylib");
    /// ```
    pub fn with_client<P: AsRef<std::path::Path>>(path: P) -> Result<Self, FbsError> {
        let fbc = fbcaccess::FbcDynLoading::with_client(path.as_ref())
            .map_err(|e| FbsError::from(e.to_string()))?;

        debug!("FBCAccess loaded from {}", path.as_ref().display());

        Ok(Self::new(fbc))
    }
}

/// Bytes of a nul terminated string, empty for a null pointer
unsafe fn c_bytes<'a>(ptr: *const c_char) -> &'a [u8] {
    if ptr.is_null() {
        &[]
    } else {
        CStr::from_ptr(ptr).to_bytes()
    }
}

fn opt_cstring(s: Option<&str>) -> Result<Option<CString>, FbsError> {
    Ok(s.map(CString::new).transpose()?)
}

fn opt_ptr(s: &Option<CString>) -> *const c_char {
    s.as_ref().map_or(ptr::null(), |s| s.as_ptr())
}

impl<L: FbcLib> NativeFbcClient<L> {
    fn connect_error(&self, local_error: *const c_char) -> FbsError {
        if local_error.is_null() {
            FbsError::Connect("Unknown connection error".to_string())
        } else {
            // The local error is owned by FBCAccess, only a copy leaves here
            FbsError::Connect(unsafe { CStr::from_ptr(local_error) }.to_string_lossy().into_owned())
        }
    }
}

impl<L: FbcLib> FbcAccess for NativeFbcClient<L> {
    type DcHandle = DcHandle;
    type MdHandle = MdHandle;
    type EmdHandle = EmdHandle;
    type Message = Message;
    type DtmdHandle = DtmdHandle;
    type RowHandle = RowHandle;
    type Slot = NativeSlot;
    type BlobHandle = BlobHandle;
    type LobData = LobData;

    fn digest_password(
        &self,
        user: Option<&str>,
        password: &str,
    ) -> Result<Option<String>, FbsError> {
        let user = opt_cstring(user)?;
        let password = CString::new(password)?;
        let mut digest = [0 as c_char; DIGEST_BUFFER_LEN];

        unsafe {
            let res = self.fbc.fbcDigestPassword()(
                opt_ptr(&user),
                password.as_ptr(),
                digest.as_mut_ptr(),
            );

            if res.is_null() {
                Ok(None)
            } else {
                Ok(Some(CStr::from_ptr(res).to_string_lossy().into_owned()))
            }
        }
    }

    fn connect_rm(
        &self,
        database: &str,
        host: &str,
        database_password: Option<&str>,
    ) -> Result<DcHandle, FbsError> {
        let database = CString::new(database)?;
        let host = CString::new(host)?;
        let database_password = opt_cstring(database_password)?;
        let mut local_error: *const c_char = ptr::null();

        let dc = unsafe {
            self.fbc.fbcdcConnectToDatabaseRM()(
                database.as_ptr(),
                host.as_ptr(),
                opt_ptr(&database_password),
                &mut local_error,
            )
        };

        NonNull::new(dc)
            .map(DcHandle)
            .ok_or_else(|| self.connect_error(local_error))
    }

    fn connect_rm_port(
        &self,
        host: &str,
        port: u32,
        database_password: Option<&str>,
    ) -> Result<DcHandle, FbsError> {
        let host = CString::new(host)?;
        let database_password = opt_cstring(database_password)?;
        let mut local_error: *const c_char = ptr::null();

        let dc = unsafe {
            self.fbc.fbcdcConnectToDatabaseUsingPortRM()(
                host.as_ptr(),
                port as c_int,
                opt_ptr(&database_password),
                &mut local_error,
            )
        };

        NonNull::new(dc)
            .map(DcHandle)
            .ok_or_else(|| self.connect_error(local_error))
    }

    fn connect_url(
        &self,
        url: &str,
        database_password: Option<&str>,
        session: &SessionParams,
    ) -> Result<Option<MdHandle>, FbsError> {
        let url = CString::new(url)?;
        let database_password = opt_cstring(database_password)?;
        let session_name = CString::new(session.session_name)?;
        let user = CString::new(session.user)?;
        let password = opt_cstring(session.password)?;
        let os_user = CString::new(session.os_user)?;

        let md = unsafe {
            self.fbc.fbcdcConnectToURL()(
                url.as_ptr(),
                opt_ptr(&database_password),
                session_name.as_ptr(),
                user.as_ptr(),
                opt_ptr(&password),
                os_user.as_ptr(),
            )
        };

        Ok(NonNull::new(md).map(MdHandle))
    }

    fn database_connection(&self, md: &MdHandle) -> Option<DcHandle> {
        NonNull::new(unsafe { self.fbc.fbcmdDatabaseConnection()(md.0.as_ptr()) }).map(DcHandle)
    }

    fn retain(&self, dc: &DcHandle) {
        unsafe {
            self.fbc.fbcdcRetain()(dc.0.as_ptr());
        }
    }

    fn close(&self, dc: &DcHandle) {
        unsafe { self.fbc.fbcdcClose()(dc.0.as_ptr()) }
    }

    fn release(&self, dc: &DcHandle) {
        unsafe { self.fbc.fbcdcRelease()(dc.0.as_ptr()) }
    }

    fn connected(&self, dc: &DcHandle) -> bool {
        unsafe { self.fbc.fbcdcConnected()(dc.0.as_ptr()) }
    }

    fn error_message(&self, dc: &DcHandle) -> Option<String> {
        let msg = unsafe { self.fbc.fbcdcErrorMessage()(dc.0.as_ptr()) };

        if msg.is_null() {
            None
        } else {
            Some(unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned())
        }
    }

    fn create_session(
        &self,
        dc: &DcHandle,
        session: &SessionParams,
    ) -> Result<Option<MdHandle>, FbsError> {
        let session_name = CString::new(session.session_name)?;
        let user = CString::new(session.user)?;
        let password = opt_cstring(session.password)?;
        let os_user = CString::new(session.os_user)?;

        let md = unsafe {
            self.fbc.fbcdcCreateSession()(
                dc.0.as_ptr(),
                session_name.as_ptr(),
                user.as_ptr(),
                opt_ptr(&password),
                os_user.as_ptr(),
            )
        };

        Ok(NonNull::new(md).map(MdHandle))
    }

    fn set_format_result(&self, dc: &DcHandle, format: bool) {
        unsafe { self.fbc.fbcdcSetFormatResult()(dc.0.as_ptr(), format) }
    }

    fn execute_sql(
        &self,
        dc: &DcHandle,
        sql: &str,
        flags: u32,
    ) -> Result<Option<MdHandle>, FbsError> {
        let sql_c = CString::new(sql)?;
        let len = c_uint::try_from(sql.len())
            .map_err(|_| FbsError::Sql(format!("Statement of {} bytes is too long", sql.len())))?;

        let md = unsafe {
            self.fbc.fbcdcExecuteSQL()(dc.0.as_ptr(), sql_c.as_ptr(), len, flags as c_uint)
        };

        Ok(NonNull::new(md).map(MdHandle))
    }

    fn release_metadata(&self, md: &MdHandle) {
        unsafe { self.fbc.fbcmdRelease()(md.0.as_ptr()) }
    }

    fn errors_found(&self, md: &MdHandle) -> bool {
        unsafe { self.fbc.fbcmdErrorsFound()(md.0.as_ptr()) }
    }

    fn error_metadata(&self, md: &MdHandle) -> Option<EmdHandle> {
        NonNull::new(unsafe { self.fbc.fbcmdErrorMetaData()(md.0.as_ptr()) }).map(EmdHandle)
    }

    fn release_error_metadata(&self, emd: &EmdHandle) {
        unsafe { self.fbc.fbcemdRelease()(emd.0.as_ptr()) }
    }

    fn all_error_messages(&self, emd: &EmdHandle) -> Option<Message> {
        NonNull::new(unsafe { self.fbc.fbcemdAllErrorMessages()(emd.0.as_ptr()) }).map(Message)
    }

    fn message_bytes<'m>(&self, msg: &'m Message) -> &'m [u8] {
        unsafe { c_bytes(msg.0.as_ptr()) }
    }

    fn release_message(&self, msg: &Message) {
        unsafe { self.fbc.fbcemdReleaseMessage()(msg.0.as_ptr()) }
    }

    fn fetch_message<'m>(&self, md: &'m MdHandle) -> Option<&'m [u8]> {
        let msg = unsafe { self.fbc.fbcmdMessage()(md.0.as_ptr()) };

        if msg.is_null() {
            None
        } else {
            Some(unsafe { c_bytes(msg) })
        }
    }

    fn column_count(&self, md: &MdHandle) -> u32 {
        unsafe { self.fbc.fbcmdColumnCount()(md.0.as_ptr()) }
    }

    fn column_table_name<'m>(&self, md: &'m MdHandle, column: u32) -> &'m [u8] {
        unsafe {
            let cmd = self.fbc.fbcmdColumnMetaDataAtIndex()(md.0.as_ptr(), column);
            c_bytes(self.fbc.fbccmdTableName()(cmd))
        }
    }

    fn column_label_name<'m>(&self, md: &'m MdHandle, column: u32) -> &'m [u8] {
        unsafe {
            let cmd = self.fbc.fbcmdColumnMetaDataAtIndex()(md.0.as_ptr(), column);
            c_bytes(self.fbc.fbccmdLabelName()(cmd))
        }
    }

    fn column_is_nullable(&self, md: &MdHandle, column: u32) -> bool {
        unsafe {
            let cmd = self.fbc.fbcmdColumnMetaDataAtIndex()(md.0.as_ptr(), column);
            self.fbc.fbccmdIsNullable()(cmd)
        }
    }

    fn column_datatype_code(&self, md: &MdHandle, column: u32) -> u32 {
        unsafe {
            let dtmd = self.fbc.fbcmdDatatypeMetaDataAtIndex()(md.0.as_ptr(), column);
            self.fbc.fbcdmdDatatypeCode()(dtmd)
        }
    }

    fn column_scale(&self, md: &MdHandle, column: u32) -> i64 {
        unsafe {
            let dtmd = self.fbc.fbcmdDatatypeMetaDataAtIndex()(md.0.as_ptr(), column);
            self.fbc.fbcdmdScale()(dtmd).into()
        }
    }

    fn any_type_metadata(&self, md: &MdHandle, slot: &NativeSlot) -> Option<DtmdHandle> {
        NonNull::new(unsafe {
            self.fbc.fbcmdAnyTypeDatatypeMetaData()(md.0.as_ptr(), slot.as_ptr())
        })
        .map(DtmdHandle)
    }

    fn datatype_scale(&self, dtmd: &DtmdHandle) -> i64 {
        unsafe { self.fbc.fbcdmdScale()(dtmd.0.as_ptr()).into() }
    }

    fn release_datatype_metadata(&self, dtmd: &DtmdHandle) {
        unsafe { self.fbc.fbcdmdRelease()(dtmd.0.as_ptr()) }
    }

    fn fetch_row(&self, md: &MdHandle) -> Option<RowHandle> {
        NonNull::new(unsafe { self.fbc.fbcmdFetchRow()(md.0.as_ptr()) }).map(RowHandle)
    }

    fn release_row(&self, row: &RowHandle) {
        unsafe { self.fbc.fbcrRelease()(row.0.as_ptr()) }
    }

    fn row_slot<'r>(&self, row: &'r RowHandle, column: u32) -> Option<&'r NativeSlot> {
        // The caller checked the column against the column count of the result
        unsafe { NativeSlot::from_ptr(*row.0.as_ptr().add(column as usize)) }
    }

    fn lob_size(&self, slot: &NativeSlot) -> u32 {
        unsafe {
            let column = slot.as_ptr();
            self.fbc.fbcrLOBSize()(ptr::addr_of!((*column).blob))
        }
    }

    fn write_blob(&self, dc: &DcHandle, data: &[u8]) -> Option<BlobHandle> {
        // Sizes above c_uint can't be represented by FBCAccess
        let len = c_uint::try_from(data.len()).ok()?;

        NonNull::new(unsafe {
            self.fbc.fbcdcWriteBLOB()(dc.0.as_ptr(), data.as_ptr() as *const c_void, len)
        })
        .map(BlobHandle)
    }

    fn blob_handle_from_string(&self, handle: &str) -> Result<Option<BlobHandle>, FbsError> {
        let handle = CString::new(handle)?;

        Ok(NonNull::new(unsafe { self.fbc.fbcbhCreate()(handle.as_ptr()) }).map(BlobHandle))
    }

    fn blob_handle_string<'b>(&self, blob: &'b BlobHandle) -> &'b [u8] {
        unsafe { c_bytes(self.fbc.fbcbhHandleAsChar()(blob.0.as_ptr())) }
    }

    fn release_blob_handle(&self, blob: &BlobHandle) {
        unsafe { self.fbc.fbcbhRelease()(blob.0.as_ptr()) }
    }

    fn read_blob(&self, dc: &DcHandle, blob: &BlobHandle) -> Option<LobData> {
        unsafe {
            let len = self.fbc.fbcbhBlobSize()(blob.0.as_ptr()) as usize;
            let data = self.fbc.fbcdcReadBLOB()(dc.0.as_ptr(), blob.0.as_ptr());

            NonNull::new(data).map(|data| LobData { data, len })
        }
    }

    fn lob_bytes<'l>(&self, data: &'l LobData) -> &'l [u8] {
        unsafe { slice::from_raw_parts(data.data.as_ptr() as *const u8, data.len) }
    }

    fn release_lob(&self, data: &LobData) {
        unsafe { self.fbc.fbcdcReleaseLOB()(data.data.as_ptr()) }
    }

    fn create_database(&self, url: &str) -> Result<bool, FbsError> {
        let url = CString::new(url)?;
        let options = CString::default();

        Ok(unsafe { self.fbc.fbcdCreate()(url.as_ptr(), options.as_ptr()) })
    }

    fn start_database(&self, url: &str) -> Result<bool, FbsError> {
        let url = CString::new(url)?;
        let options = CString::default();

        Ok(unsafe { self.fbc.fbcdStart()(url.as_ptr(), options.as_ptr()) })
    }

    fn stop_database(&self, url: &str) -> Result<bool, FbsError> {
        let url = CString::new(url)?;

        Ok(unsafe { self.fbc.fbcdStop()(url.as_ptr()) })
    }

    fn delete_database(&self, url: &str) -> Result<bool, FbsError> {
        let url = CString::new(url)?;

        Ok(unsafe { self.fbc.fbcdDelete()(url.as_ptr()) })
    }
}
