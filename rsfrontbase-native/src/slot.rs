//! Value slots of the rows fetched through FBCAccess

use rsfrontbase_core::FbcSlot;
use std::{ffi::CStr, os::raw::c_char, slice};

use crate::fbcaccess::FBCColumn;

/// View over a `FBCColumn` owned by a fetched row
#[repr(transparent)]
pub struct NativeSlot(FBCColumn);

impl NativeSlot {
    /// # Safety
    ///
    /// `ptr` must be null or point to a slot that outlives `'r`
    pub(crate) unsafe fn from_ptr<'r>(ptr: *const FBCColumn) -> Option<&'r NativeSlot> {
        (ptr as *const NativeSlot).as_ref()
    }

    pub(crate) fn as_ptr(&self) -> *const FBCColumn {
        &self.0
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

impl FbcSlot for NativeSlot {
    fn boolean(&self) -> bool {
        unsafe { self.0.boolean != 0 }
    }

    fn tiny_integer(&self) -> i8 {
        unsafe { self.0.tiny_integer as i8 }
    }

    fn short_integer(&self) -> i16 {
        unsafe { self.0.short_integer }
    }

    fn integer(&self) -> i32 {
        unsafe { self.0.integer }
    }

    fn long_integer(&self) -> i64 {
        unsafe { self.0.long_integer }
    }

    fn numeric(&self) -> f64 {
        unsafe { self.0.numeric }
    }

    fn real(&self) -> f64 {
        unsafe { self.0.real }
    }

    fn decimal(&self) -> f64 {
        unsafe { self.0.decimal }
    }

    fn character(&self) -> &[u8] {
        unsafe { c_bytes(self.0.character) }
    }

    fn blob_handle(&self) -> &[u8] {
        unsafe { c_bytes(self.0.blob.handle_as_string) }
    }

    fn raw_timestamp(&self) -> f64 {
        unsafe { self.0.raw_timestamp.seconds }
    }

    fn raw_day_time(&self) -> f64 {
        unsafe { self.0.raw_day_time }
    }

    fn bit_size(&self) -> u32 {
        unsafe { self.0.bit.size }
    }

    fn bit_bytes(&self) -> &[u8] {
        unsafe {
            let bit = self.0.bit;
            if bit.bytes.is_null() {
                &[]
            } else {
                slice::from_raw_parts(bit.bytes, bit.size as usize)
            }
        }
    }

    fn any_type_code(&self) -> u32 {
        unsafe { self.0.any_type.type_ }
    }

    fn any_type_value(&self) -> Option<&Self> {
        unsafe { NativeSlot::from_ptr(self.0.any_type.column) }
    }
}
