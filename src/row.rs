//!
//! Rust FrontBase adapter
//!
//! Values of the fetched rows
//!

use std::borrow::Cow;

use rsfrontbase_core::*;

use crate::{handle::DatatypeMetaData, result::ResultSet};

/// Generate the typed getters of a row, one for the declared column
/// type and one for the runtime type of an ANY TYPE column
macro_rules! typed_getters {
    ( $(
        $(#[$attr:meta])*
        $name:ident, $any_name:ident -> $ty:ty, [ $( $dt:ident ),+ ], |$slot:ident| $read:expr;
    )* ) => {
        $(
            $(#[$attr])*
            pub fn $name(&self, col: u32) -> Result<$ty, FbsError> {
                let $slot = self.typed_slot(col, &[ $( Datatype::$dt ),+ ], stringify!($ty))?;

                Ok($read)
            }

            $(#[$attr])*
            ///
            /// Read from the value of an ANY TYPE column
            pub fn $any_name(&self, col: u32) -> Result<$ty, FbsError> {
                let $slot = self.any_typed_slot(col, &[ $( Datatype::$dt ),+ ], stringify!($ty))?;

                Ok($read)
            }
        )*
    };
}

/// A row fetched from a result
pub struct Row<'r, C: FbcAccess> {
    result: &'r ResultSet<'r, C>,
    handle: C::RowHandle,
}

impl<'r, C: FbcAccess> Row<'r, C> {
    pub(crate) fn new(result: &'r ResultSet<'r, C>, handle: C::RowHandle) -> Self {
        Row { result, handle }
    }

    /// Value slot of the column, `None` for a null value
    fn slot(&self, col: u32) -> Result<Option<&C::Slot>, FbsError> {
        self.result.datatype(col)?;

        Ok(self.result.cli().row_slot(&self.handle, col))
    }

    /// Non null slot of a column declared with one of the datatypes
    fn typed_slot(
        &self,
        col: u32,
        accepted: &[Datatype],
        type_name: &str,
    ) -> Result<&C::Slot, FbsError> {
        let datatype = self.result.datatype(col)?;
        if !accepted.contains(&datatype) {
            return err_type_conv(datatype, type_name);
        }

        self.slot(col)?
            .ok_or_else(|| err_column_null(type_name))
    }

    /// Non null slot of an ANY TYPE column
    fn any_slot(&self, col: u32) -> Result<&C::Slot, FbsError> {
        let datatype = self.result.datatype(col)?;
        if datatype != Datatype::AnyType {
            return err_type_conv(datatype, "ANY TYPE");
        }

        self.slot(col)?
            .ok_or_else(|| err_column_null("ANY TYPE"))
    }

    /// Non null nested slot of an ANY TYPE column holding one of the datatypes
    fn any_typed_slot(
        &self,
        col: u32,
        accepted: &[Datatype],
        type_name: &str,
    ) -> Result<&C::Slot, FbsError> {
        let slot = self.any_slot(col)?;

        let datatype = Datatype::from_code(slot.any_type_code());
        if !accepted.contains(&datatype) {
            return err_type_conv(datatype, type_name);
        }

        slot.any_type_value()
            .ok_or_else(|| err_column_null(type_name))
    }

    /// Returns `true` if the value of the column is `NULL`
    pub fn is_null(&self, col: u32) -> Result<bool, FbsError> {
        Ok(self.slot(col)?.is_none())
    }

    typed_getters! {
        get_boolean, get_any_type_boolean -> bool, [Boolean], |slot| slot.boolean();

        get_tiny_integer, get_any_type_tiny_integer -> i64, [TinyInteger], |slot| slot.tiny_integer().into();

        get_short_integer, get_any_type_short_integer -> i64, [SmallInteger], |slot| slot.short_integer().into();

        /// Also reads primary keys
        get_integer, get_any_type_integer -> i64, [Integer, PrimaryKey], |slot| slot.integer().into();

        get_long_integer, get_any_type_long_integer -> i64, [LongInteger], |slot| slot.long_integer();

        get_numeric, get_any_type_numeric -> f64, [Numeric, Float, Double], |slot| slot.numeric();

        get_real, get_any_type_real -> f64, [Real], |slot| slot.real();

        get_decimal, get_any_type_decimal -> f64, [Decimal], |slot| slot.decimal();

        get_character, get_any_type_character -> Cow<'_, str>, [Character, VCharacter], |slot| String::from_utf8_lossy(slot.character());

        /// Seconds since 2001-01-01 00:00:00 UTC
        get_timestamp, get_any_type_timestamp -> f64, [Timestamp], |slot| slot.raw_timestamp();

        /// Size of the bit value
        get_bit_size, get_any_type_bit_size -> u32, [Bit, VBit], |slot| slot.bit_size();

        get_bit_bytes, get_any_type_bit_bytes -> &[u8], [Bit, VBit], |slot| slot.bit_bytes();
    }

    /// Raw seconds of a DAY TIME value
    pub fn get_day_time(&self, col: u32) -> Result<f64, FbsError> {
        Ok(self
            .typed_slot(col, &[Datatype::DayTime], "f64")?
            .raw_day_time())
    }

    /// Handle string and size of a BLOB or CLOB value
    pub fn get_blob_handle(&self, col: u32) -> Result<(Cow<'_, str>, u32), FbsError> {
        let slot = self.typed_slot(col, &[Datatype::BLOB, Datatype::CLOB], "BlobRef")?;

        Ok(self.blob_handle(slot))
    }

    /// Handle string and size of a BLOB or CLOB value of an ANY TYPE column
    pub fn get_any_type_blob_handle(&self, col: u32) -> Result<(Cow<'_, str>, u32), FbsError> {
        let slot = self.any_typed_slot(col, &[Datatype::BLOB, Datatype::CLOB], "BlobRef")?;

        Ok(self.blob_handle(slot))
    }

    fn blob_handle<'s>(&self, slot: &'s C::Slot) -> (Cow<'s, str>, u32) {
        (
            String::from_utf8_lossy(slot.blob_handle()),
            self.result.cli().lob_size(slot),
        )
    }

    /// Runtime datatype of the value of an ANY TYPE column
    pub fn get_any_type_type(&self, col: u32) -> Result<Datatype, FbsError> {
        Ok(Datatype::from_code(self.any_slot(col)?.any_type_code()))
    }

    /// Returns `true` if the ANY TYPE column carries no value
    pub fn any_type_is_null(&self, col: u32) -> Result<bool, FbsError> {
        Ok(self.any_slot(col)?.any_type_value().is_none())
    }

    /// Declared scale of the column
    pub fn scale(&self, col: u32) -> Result<i64, FbsError> {
        self.result.scale(col)
    }

    /// Scale of the runtime datatype of an ANY TYPE column
    pub fn any_type_scale(&self, col: u32) -> Result<i64, FbsError> {
        let slot = self.any_slot(col)?;
        let cli = self.result.cli();

        let dtmd = cli
            .any_type_metadata(self.result.md.handle(), slot)
            .ok_or_else(|| FbsError::from("No datatype metadata for the ANY TYPE value"))?;
        let dtmd = DatatypeMetaData::new(cli, dtmd);

        Ok(cli.datatype_scale(dtmd.handle()))
    }

    /// Value of the column, dispatched on the declared datatype,
    /// or on the runtime datatype for ANY TYPE columns
    pub fn value(&self, col: u32) -> Result<Value, FbsError> {
        let datatype = self.result.datatype(col)?;

        let slot = match self.slot(col)? {
            Some(slot) => slot,
            None => return Ok(Value::Null),
        };

        if datatype != Datatype::AnyType {
            return self.slot_value(col, slot, datatype, false);
        }

        match slot.any_type_value() {
            Some(nested) => {
                self.slot_value(col, nested, Datatype::from_code(slot.any_type_code()), true)
            }
            None => Ok(Value::Null),
        }
    }

    fn slot_value(
        &self,
        col: u32,
        slot: &C::Slot,
        datatype: Datatype,
        any_type: bool,
    ) -> Result<Value, FbsError> {
        Ok(match datatype {
            Datatype::PrimaryKey | Datatype::Integer => Value::Integer(slot.integer().into()),

            Datatype::Boolean => Value::Boolean(slot.boolean()),

            Datatype::SmallInteger => Value::Integer(slot.short_integer().into()),

            Datatype::TinyInteger => Value::Integer(slot.tiny_integer().into()),

            Datatype::LongInteger => Value::Integer(slot.long_integer()),

            Datatype::Float | Datatype::Double | Datatype::Numeric => Value::Float(slot.numeric()),

            Datatype::Real => Value::Float(slot.real()),

            Datatype::Decimal => Value::Decimal {
                value: slot.decimal(),
                scale: if any_type {
                    self.any_type_scale(col)?
                } else {
                    self.result.scale(col)?
                },
            },

            Datatype::Character | Datatype::VCharacter => {
                Value::Text(String::from_utf8_lossy(slot.character()).into_owned())
            }

            Datatype::Bit | Datatype::VBit => Value::Bits(slot.bit_bytes().to_vec()),

            Datatype::Timestamp => Value::Timestamp(slot.raw_timestamp()),

            Datatype::DayTime if !any_type => Value::Float(slot.raw_day_time()),

            lob if lob.is_lob() => {
                let (handle, size) = self.blob_handle(slot);

                Value::Blob(BlobRef {
                    handle: handle.into_owned(),
                    size,
                })
            }

            other => {
                return Err(FbsError::Other(format!(
                    "Unexpected column type {:?} at column {}",
                    other, col
                )))
            }
        })
    }

    /// Values of all the columns
    pub fn values(&self) -> Result<Vec<Value>, FbsError> {
        (0..self.result.column_count())
            .map(|col| self.value(col))
            .collect()
    }

    /// Get the column value converted to the type
    pub fn get<T>(&self, col: u32) -> Result<T, FbsError>
    where
        Value: ColumnToVal<T>,
    {
        self.value(col)?.to_val()
    }

    /// Get the values of the row, converted to a tuple or a `Vec<Value>`
    pub fn get_all<T>(&self) -> Result<T, FbsError>
    where
        T: FromRow,
    {
        T::try_from(self.values()?)
    }

    /// Release the row. Same as dropping it
    pub fn release(self) {}
}

impl<'r, C: FbcAccess> Drop for Row<'r, C> {
    fn drop(&mut self) {
        self.result.cli().release_row(&self.handle);
    }
}
