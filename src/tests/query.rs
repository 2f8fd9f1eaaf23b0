//!
//! Rust FrontBase adapter
//!
//! Parameters and transactions tests
//!

use crate::{prelude::*, tests::mock::*, *};

const USER_BY_ID: &str = "SELECT NAME FROM USERS WHERE ID = 7 AND NAME <> 'O''Brien?';";

fn users_mock() -> MockFbc {
    let mock = MockFbc::new();

    mock.script(
        USER_BY_ID,
        MockResult::new(vec![MockColumn::new("NAME", Datatype::VCharacter)])
            .row(vec![Some(MockSlot::Character("ada".to_string()))]),
    );

    mock
}

#[test]
fn params_replace_placeholders() -> Result<(), FbsError> {
    let mock = users_mock();
    let conn = connect_mock(&mock);

    let rows: Vec<(String,)> = conn.query(
        "SELECT NAME FROM USERS WHERE ID = ? AND NAME <> ?;",
        (7, "O'Brien?"),
    )?;
    assert_eq!(vec![("ada".to_string(),)], rows);

    let values = vec![Value::Integer(7), Value::from("O'Brien?")];
    let name: Option<(String,)> = conn.query_first(
        "SELECT NAME FROM USERS WHERE ID = ? AND NAME <> ?;",
        &values[..],
    )?;
    assert_eq!(Some(("ada".to_string(),)), name);

    assert_eq!(2, mock.count(&format!("execute_sql({}, 1)", USER_BY_ID)));

    Ok(())
}

#[test]
fn quoted_placeholders_are_text() -> Result<(), FbsError> {
    let mock = MockFbc::new();
    let conn = connect_mock(&mock);
    mock.clear_calls();

    conn.execute(
        "UPDATE \"T?\" SET A = 'Why?', B = ? WHERE C = 'It''s?';",
        (None::<i64>,),
    )?;

    assert_eq!(
        vec![
            "execute_sql(UPDATE \"T?\" SET A = 'Why?', B = null WHERE C = 'It''s?';, 1)",
            "release_metadata",
        ],
        mock.calls()
    );

    Ok(())
}

#[test]
fn invalid_number_of_params() {
    let mock = MockFbc::new();
    let conn = connect_mock(&mock);
    mock.clear_calls();

    let missing = conn.execute("INSERT INTO T VALUES (?, ?);", (1,));
    assert!(missing
        .err()
        .expect("A parameter is missing")
        .to_string()
        .contains("Invalid number of parameters"));

    let extra = conn.execute("INSERT INTO T VALUES (1);", (1, vec![1u8, 2]));
    assert!(extra.is_err());

    let extra: Result<Vec<(i64,)>, _> = conn.query("SELECT 1;", vec![Value::Null]);
    assert!(extra.is_err());

    // Nothing written or executed
    assert!(mock.calls().is_empty());
}

#[test]
fn binary_params_written_as_blobs() -> Result<(), FbsError> {
    let mock = MockFbc::new();
    let conn = connect_mock(&mock);
    mock.clear_calls();

    conn.execute(
        "INSERT INTO DOCS (ID, DOC) VALUES (?, ?);",
        (1, vec![0x00u8, 0x01, 0xFF]),
    )?;

    assert_eq!(
        vec![
            "write_blob",
            "execute_sql(INSERT INTO DOCS (ID, DOC) VALUES (1, @'BLOB0');, 1)",
            "release_metadata",
            "release_blob_handle",
        ],
        mock.calls()
    );
    assert_eq!(vec![vec![0x00u8, 0x01, 0xFF]], mock.state().blobs);

    Ok(())
}

#[test]
fn stored_blob_params_use_the_handle() -> Result<(), FbsError> {
    let mock = MockFbc::new();
    let conn = connect_mock(&mock);

    let blob = conn.create_blob(b"stored")?.to_ref();
    mock.clear_calls();

    conn.execute("INSERT INTO DOCS VALUES (?, ?);", (blob, b"X".to_vec()))?;

    assert_eq!(1, mock.count("write_blob"));
    assert_eq!(
        1,
        mock.count("execute_sql(INSERT INTO DOCS VALUES (@'BLOB0', @'BLOB1');, 1)")
    );

    Ok(())
}

#[cfg(feature = "date_time")]
#[test]
fn timestamp_params() -> Result<(), FbsError> {
    use chrono::NaiveDate;

    let mock = MockFbc::new();
    let conn = connect_mock(&mock);

    let ts = NaiveDate::from_ymd_opt(2001, 1, 1)
        .and_then(|d| d.and_hms_milli_opt(0, 1, 1, 500))
        .expect("Valid date");

    conn.execute("INSERT INTO LOG VALUES (?, ?, ?);", (ts, true, 2.5))?;

    assert_eq!(
        1,
        mock.count(
            "execute_sql(INSERT INTO LOG VALUES (TIMESTAMP '2001-01-01 00:01:01.500000', TRUE, 2.5);, 1)"
        )
    );

    Ok(())
}

mod transaction {
    use super::*;

    #[test]
    fn commit_on_success() -> Result<(), FbsError> {
        let mock = MockFbc::new();
        let mut conn = connect_mock(&mock);
        mock.clear_calls();

        let inserted = conn.with_transaction(|conn| {
            assert!(!conn.auto_commit());

            conn.execute("INSERT INTO T VALUES (?);", (1,))?;
            conn.execute("INSERT INTO T VALUES (?);", (2,))?;

            Ok(2)
        })?;

        assert_eq!(2, inserted);
        assert!(conn.auto_commit());
        assert_eq!(
            vec![
                "execute_sql(INSERT INTO T VALUES (1);, 0)",
                "release_metadata",
                "execute_sql(INSERT INTO T VALUES (2);, 0)",
                "release_metadata",
                "execute_sql(COMMIT;, 1)",
                "release_metadata",
            ],
            mock.calls()
        );

        Ok(())
    }

    #[test]
    fn rollback_on_error() {
        let mock = MockFbc::new();
        mock.fail("INSERT INTO T VALUES (2);", "Duplicate key");
        let mut conn = connect_mock(&mock);
        mock.clear_calls();

        let res: Result<(), _> = conn.with_transaction(|conn| {
            conn.execute("INSERT INTO T VALUES (?);", (1,))?;
            conn.execute("INSERT INTO T VALUES (?);", (2,))?;

            Ok(())
        });

        assert!(matches!(res, Err(FbsError::Sql(ref msg)) if msg == "Duplicate key"));
        assert!(conn.auto_commit());
        assert_eq!(0, mock.count("execute_sql(COMMIT;, 1)"));
        assert_eq!(
            vec!["execute_sql(ROLLBACK;, 0)", "release_metadata"],
            mock.calls_from("execute_sql(ROLLBACK;")
        );
    }

    #[test]
    fn nested_transaction() {
        let mock = MockFbc::new();
        let mut conn = connect_mock(&mock);

        let res = conn.with_transaction(|conn| conn.with_transaction(|_| Ok(())));

        assert!(res
            .err()
            .expect("Nested transactions must fail")
            .to_string()
            .contains("already in progress"));
        assert_eq!(1, mock.count("execute_sql(ROLLBACK;, 0)"));
        assert!(conn.auto_commit());
    }

    #[test]
    fn manual_commit_mode() {
        let mock = MockFbc::new();
        let mut conn = connect_mock(&mock);
        conn.set_auto_commit(false);

        assert!(conn.with_transaction(|_| Ok(())).is_err());
        assert_eq!(0, mock.count("execute_sql(ROLLBACK;, 0)"));
        assert!(!conn.auto_commit());
    }
}
