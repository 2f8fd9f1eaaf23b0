//! FrontBase column datatypes

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Datatype of a column, as reported by the FBCAccess datatype metadata.
///
/// The discriminants are the FBCAccess `FBDatatypeCode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum Datatype {
    PrimaryKey = 0,
    Boolean = 1,
    Integer = 2,
    SmallInteger = 3,
    Float = 4,
    Real = 5,
    Double = 6,
    Numeric = 7,
    Decimal = 8,
    Character = 9,
    VCharacter = 10,
    Bit = 11,
    VBit = 12,
    Date = 13,
    Time = 14,
    TimeTZ = 15,
    Timestamp = 16,
    TimestampTZ = 17,
    YearMonth = 18,
    DayTime = 19,
    CLOB = 20,
    BLOB = 21,
    TinyInteger = 22,
    LongInteger = 23,
    CircaDate = 24,
    AnyType = 25,
    Undecided = 26,
}

impl Datatype {
    /// Map a FBCAccess datatype code. Codes unknown to this crate
    /// are reported as `Undecided`
    pub fn from_code(code: u32) -> Self {
        Self::try_from(code).unwrap_or(Datatype::Undecided)
    }

    /// The FBCAccess datatype code
    pub fn code(self) -> u32 {
        self.into()
    }

    /// Datatypes whose values are BLOB handles
    pub fn is_lob(self) -> bool {
        matches!(self, Datatype::BLOB | Datatype::CLOB)
    }
}
