//! Value conversions and row extraction traits

use crate::{
    error::{err_column_null, err_type_conv},
    BlobRef, FbsError, Value,
};

/// Define the conversion from a column value to a rust value
pub trait ColumnToVal<T> {
    fn to_val(self) -> Result<T, FbsError>
    where
        Self: std::marker::Sized;
}

impl ColumnToVal<Value> for Value {
    fn to_val(self) -> Result<Value, FbsError> {
        Ok(self)
    }
}

impl ColumnToVal<String> for Value {
    fn to_val(self) -> Result<String, FbsError> {
        match self {
            Value::Null => Err(err_column_null("String")),

            Value::Text(t) => Ok(t),

            Value::Integer(i) => Ok(i.to_string()),

            Value::Float(f) => Ok(f.to_string()),

            Value::Boolean(b) => Ok(b.to_string()),

            Value::Blob(blob) => Ok(blob.handle),

            dec @ Value::Decimal { .. } => Ok(dec.to_string()),

            #[cfg(feature = "date_time")]
            Value::Timestamp(seconds) => Ok(crate::date_time::format_timestamp(
                crate::date_time::decode_timestamp(seconds)?,
            )),

            other => err_type_conv(other.datatype(), "String"),
        }
    }
}

impl ColumnToVal<i64> for Value {
    fn to_val(self) -> Result<i64, FbsError> {
        match self {
            Value::Null => Err(err_column_null("i64")),

            Value::Integer(i) => Ok(i),

            other => err_type_conv(other.datatype(), "i64"),
        }
    }
}

/// Implements the narrowing integer conversions, rejecting values out of range
macro_rules! impl_to_int {
    ( $( $t: ident ),+ ) => {
        $(
            impl ColumnToVal<$t> for Value {
                fn to_val(self) -> Result<$t, FbsError> {
                    let datatype = self.datatype();
                    let i = ColumnToVal::<i64>::to_val(self)?;

                    $t::try_from(i).or_else(|_| err_type_conv(datatype, stringify!($t)))
                }
            }
        )+
    };
}

impl_to_int!(i32, i16, i8);

impl ColumnToVal<f64> for Value {
    fn to_val(self) -> Result<f64, FbsError> {
        match self {
            Value::Null => Err(err_column_null("f64")),

            Value::Float(f) => Ok(f),

            Value::Decimal { value, .. } => Ok(value),

            Value::Integer(i) => Ok(i as f64),

            other => err_type_conv(other.datatype(), "f64"),
        }
    }
}

impl ColumnToVal<f32> for Value {
    fn to_val(self) -> Result<f32, FbsError> {
        ColumnToVal::<f64>::to_val(self).map(|f| f as f32)
    }
}

impl ColumnToVal<bool> for Value {
    fn to_val(self) -> Result<bool, FbsError> {
        match self {
            Value::Null => Err(err_column_null("bool")),

            Value::Boolean(b) => Ok(b),

            other => err_type_conv(other.datatype(), "bool"),
        }
    }
}

impl ColumnToVal<Vec<u8>> for Value {
    fn to_val(self) -> Result<Vec<u8>, FbsError> {
        match self {
            Value::Null => Err(err_column_null("Vec<u8>")),

            Value::Bits(bits) | Value::Binary(bits) => Ok(bits),

            other => err_type_conv(other.datatype(), "Vec<u8>"),
        }
    }
}

impl ColumnToVal<BlobRef> for Value {
    fn to_val(self) -> Result<BlobRef, FbsError> {
        match self {
            Value::Null => Err(err_column_null("BlobRef")),

            Value::Blob(blob) => Ok(blob),

            other => err_type_conv(other.datatype(), "BlobRef"),
        }
    }
}

/// Implements for all nullable variants
impl<T> ColumnToVal<Option<T>> for Value
where
    Value: ColumnToVal<T>,
{
    fn to_val(self) -> Result<Option<T>, FbsError> {
        if self.is_null() {
            return Ok(None);
        }

        Ok(Some(self.to_val()?))
    }
}

/// Implemented for types that represents a list of values of columns
pub trait FromRow {
    fn try_from(row: Vec<Value>) -> Result<Self, FbsError>
    where
        Self: std::marker::Sized;
}

/// Allow use of a vector instead of tuples, for when the number of columns are unknow at compile time
/// or more columns are needed than what can be used with the tuples
impl FromRow for Vec<Value> {
    fn try_from(row: Vec<Value>) -> Result<Self, FbsError>
    where
        Self: Sized,
    {
        Ok(row)
    }
}

/// For no columns
impl FromRow for () {
    fn try_from(_row: Vec<Value>) -> Result<Self, FbsError>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Generates FromRow implementations for a tuple
macro_rules! impl_from_row {
    ($($t: ident),+) => {
        impl<'a, $($t),+> FromRow for ($($t,)+)
        where
            $( Value: ColumnToVal<$t>, )+
        {
            fn try_from(row: Vec<Value>) -> Result<Self, FbsError> {
                let expected = [ $( stringify!($t) ),+ ].len();
                let mut iter = row.into_iter();

                Ok(( $(
                    ColumnToVal::<$t>::to_val(
                        iter
                            .next()
                            .ok_or_else(|| {
                                FbsError::Other(
                                    format!("The sql returned less columns than the {} expected", expected),
                                )
                            })?
                    )?,
                )+ ))
            }
        }
    };
}

/// Generates FromRow implementations for various tuples
macro_rules! impls_from_row {
    ($t: ident) => {
        impl_from_row!($t);
    };

    ($t: ident, $($ts: ident),+ ) => {
        impls_from_row!($($ts),+);

        impl_from_row!($t, $($ts),+);
    };
}

impls_from_row!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tuple_from_row() {
        let row = vec![Value::Integer(1), Value::from("hello"), Value::Boolean(true)];

        let (a, b, c): (i64, String, bool) = FromRow::try_from(row).unwrap();

        assert_eq!(1, a);
        assert_eq!("hello", b);
        assert!(c);
    }

    #[test]
    fn nullable_columns() {
        let row = vec![Value::Null, Value::Integer(7)];

        let (a, b): (Option<String>, Option<i32>) = FromRow::try_from(row).unwrap();

        assert_eq!(None, a);
        assert_eq!(Some(7), b);
    }

    #[test]
    fn null_into_non_optional() {
        let res: Result<(i64,), _> = FromRow::try_from(vec![Value::Null]);

        assert!(res.is_err());
    }

    #[test]
    fn less_columns_than_expected() {
        let res: Result<(i64, i64, i64), _> = FromRow::try_from(vec![Value::Integer(1)]);

        let err = res.err().expect("Missing columns must fail");
        assert!(err.to_string().contains("less columns than the 3 expected"));
    }

    #[test]
    fn narrowing_out_of_range() {
        let res: Result<i32, _> = Value::Integer(5_000_000_000).to_val();
        assert!(res.is_err());

        let res: Result<i16, _> = Value::Integer(40_000).to_val();
        assert!(res.is_err());

        let res: Result<i8, _> = Value::Integer(-129).to_val();
        assert!(res.is_err());

        let res: Result<i8, _> = Value::Integer(-128).to_val();
        assert_eq!(-128, res.unwrap());

        let res: Result<Option<i32>, _> = Value::Integer(i64::MAX).to_val();
        assert!(res.is_err());
    }

    #[test]
    fn wrong_type() {
        let res: Result<i64, _> = Value::from("abc").to_val();

        assert!(res.is_err());
    }
}
