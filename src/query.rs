//!
//! Rust FrontBase adapter
//!
//! High level api
//!

use rsfrontbase_core::{FbcAccess, FbsError, FromRow, IntoParams};

use crate::{statement::Statement, Connection};

/// Implemented for types that can be used to execute sql queries
pub trait Queryable {
    /// Returns the rows of the query, converted to `R`.
    ///
    /// `R` is a tuple of types convertible from the column values,
    /// or `Vec<Value>` for a variable number of columns.
    ///
    /// possible values for argument `params`:
    ///
    /// `()`: no parameters,
    ///
    /// `(param0, param1, param2...)`: a tuple of `IntoParam` values corresponding to positional `?` sql parameters
    ///
    /// `Vec<Value>` or `&[Value]`: for a number of parameters unknown at compile time
    fn query<P, R>(&self, sql: &str, params: P) -> Result<Vec<R>, FbsError>
    where
        P: IntoParams,
        R: FromRow;

    /// Returns the first row of the query, or None
    fn query_first<P, R>(&self, sql: &str, params: P) -> Result<Option<R>, FbsError>
    where
        P: IntoParams,
        R: FromRow;
}

/// Implemented for types that can be used to execute sql statements
pub trait Execute {
    /// Execute a statement, returning the message of the server, if any
    ///
    /// `params` as in `Queryable::query`
    fn execute<P>(&self, sql: &str, params: P) -> Result<Option<String>, FbsError>
    where
        P: IntoParams;
}

impl<C: FbcAccess> Queryable for Connection<C> {
    fn query<P, R>(&self, sql: &str, params: P) -> Result<Vec<R>, FbsError>
    where
        P: IntoParams,
        R: FromRow,
    {
        let stmt = Statement::parse(sql).bind(self, params.to_params())?;
        let result = self.execute_sql(stmt.sql(), self.auto_commit)?;

        let rows = result.rows().map(|row| row.get_all()).collect();

        rows
    }

    fn query_first<P, R>(&self, sql: &str, params: P) -> Result<Option<R>, FbsError>
    where
        P: IntoParams,
        R: FromRow,
    {
        let stmt = Statement::parse(sql).bind(self, params.to_params())?;
        let result = self.execute_sql(stmt.sql(), self.auto_commit)?;

        let row = result.fetch_row().map(|row| row.get_all()).transpose();

        row
    }
}

impl<C: FbcAccess> Execute for Connection<C> {
    fn execute<P>(&self, sql: &str, params: P) -> Result<Option<String>, FbsError>
    where
        P: IntoParams,
    {
        let stmt = Statement::parse(sql).bind(self, params.to_params())?;
        let result = self.execute_sql(stmt.sql(), self.auto_commit)?;

        let msg = result.fetch_message().map(|msg| msg.into_owned());

        Ok(msg)
    }
}
