//! Conversion of FrontBase raw timestamps
//!
//! FBCAccess reports timestamps as seconds, as a double, relative to
//! 2001-01-01 00:00:00 UTC. The session time zone is always UTC.

use chrono::NaiveDateTime;

use crate::{err_column_null, err_type_conv, ColumnToVal, FbsError, IntoParam, Value};

/// Unix time of 2001-01-01 00:00:00 UTC
pub const REFERENCE_DATE_UNIX: i64 = 978_307_200;

const NANOS_PER_SECOND: f64 = 1e9;

/// Convert the raw seconds to a date time
pub fn decode_timestamp(seconds: f64) -> Result<NaiveDateTime, FbsError> {
    if !seconds.is_finite() {
        return Err(format!("Invalid timestamp value {}", seconds).into());
    }

    let mut whole = seconds.floor();
    let mut nanos = ((seconds - whole) * NANOS_PER_SECOND).round();
    if nanos >= NANOS_PER_SECOND {
        whole += 1.0;
        nanos = 0.0;
    }

    // Saturates outside of the i64 range, then rejected by the checked add or by chrono
    (whole as i64)
        .checked_add(REFERENCE_DATE_UNIX)
        .and_then(|unix| NaiveDateTime::from_timestamp_opt(unix, nanos as u32))
        .ok_or_else(|| format!("Timestamp {} out of range", seconds).into())
}

/// Convert a date time to raw seconds
pub fn encode_timestamp(ts: NaiveDateTime) -> f64 {
    (ts.timestamp() - REFERENCE_DATE_UNIX) as f64
        + ts.timestamp_subsec_nanos() as f64 / NANOS_PER_SECOND
}

/// Timestamp literal body, with microsecond precision
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

impl ColumnToVal<NaiveDateTime> for Value {
    fn to_val(self) -> Result<NaiveDateTime, FbsError> {
        match self {
            Value::Null => Err(err_column_null("NaiveDateTime")),

            Value::Timestamp(seconds) => decode_timestamp(seconds),

            other => err_type_conv(other.datatype(), "NaiveDateTime"),
        }
    }
}

impl IntoParam for NaiveDateTime {
    fn into_param(self) -> Value {
        Value::Timestamp(encode_timestamp(self))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn reference_date() {
        let ts = decode_timestamp(0.0).unwrap();

        assert_eq!(NaiveDate::from_ymd(2001, 1, 1).and_hms(0, 0, 0), ts);
    }

    #[test]
    fn roundtrip() {
        let ts = NaiveDate::from_ymd(2023, 4, 11).and_hms_micro(13, 45, 10, 250_000);
        let seconds = encode_timestamp(ts);

        assert_eq!(ts, decode_timestamp(seconds).unwrap());
        assert_eq!("2023-04-11 13:45:10.250000", format_timestamp(ts));
    }

    #[test]
    fn before_reference() {
        let ts = decode_timestamp(-86_400.5).unwrap();

        assert_eq!(NaiveDate::from_ymd(2000, 12, 30).and_hms_milli(23, 59, 59, 500), ts);
    }

    #[test]
    fn not_finite() {
        assert!(decode_timestamp(f64::NAN).is_err());
    }

    #[test]
    fn out_of_range() {
        assert!(decode_timestamp(1e19).is_err());
        assert!(decode_timestamp(-1e19).is_err());
        assert!(decode_timestamp(1e15).is_err());

        assert!(Value::Timestamp(1e19).sql_literal().is_err());

        let res: Result<NaiveDateTime, _> = Value::Timestamp(1e19).to_val();
        assert!(res.is_err());
    }
}
