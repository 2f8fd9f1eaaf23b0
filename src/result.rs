//!
//! Rust FrontBase adapter
//!
//! Results of the executed statements
//!

use std::borrow::Cow;

use rsfrontbase_core::*;

use crate::{handle::MetaData, row::Row, Connection};

/// Metadata of a column, borrowed from the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo<'r> {
    pub table_name: Cow<'r, str>,
    pub label_name: Cow<'r, str>,
    pub datatype: Datatype,
    pub is_nullable: bool,
}

/// Owned description of a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// `None` for columns not coming from a table
    pub table: Option<String>,
    pub name: String,
    pub datatype: Datatype,
    pub nullable: bool,
}

/// Result of an executed statement.
///
/// The column count and the declared datatypes are read once, they
/// don't change between the fetched rows.
pub struct ResultSet<'c, C: FbcAccess> {
    pub(crate) conn: &'c Connection<C>,
    pub(crate) md: MetaData<'c, C>,
    datatypes: Vec<Datatype>,
}

impl<'c, C: FbcAccess> ResultSet<'c, C> {
    pub(crate) fn new(conn: &'c Connection<C>, md: MetaData<'c, C>) -> Self {
        let count = conn.cli.column_count(md.handle());

        let datatypes = (0..count)
            .map(|col| Datatype::from_code(conn.cli.column_datatype_code(md.handle(), col)))
            .collect();

        ResultSet {
            conn,
            md,
            datatypes,
        }
    }

    pub(crate) fn cli(&self) -> &'c C {
        &self.conn.cli
    }

    pub fn column_count(&self) -> u32 {
        self.datatypes.len() as u32
    }

    /// Declared datatype of the column
    pub fn datatype(&self, col: u32) -> Result<Datatype, FbsError> {
        match self.datatypes.get(col as usize) {
            Some(datatype) => Ok(*datatype),
            None => err_idx_not_exist(),
        }
    }

    /// Metadata of the column at the index
    pub fn column_info(&self, col: u32) -> Result<ColumnInfo<'_>, FbsError> {
        let datatype = self.datatype(col)?;
        let cli = self.cli();

        Ok(ColumnInfo {
            table_name: String::from_utf8_lossy(cli.column_table_name(self.md.handle(), col)),
            label_name: String::from_utf8_lossy(cli.column_label_name(self.md.handle(), col)),
            datatype,
            is_nullable: cli.column_is_nullable(self.md.handle(), col),
        })
    }

    /// Index and datatype of the first column labeled with the name, ignoring the case
    pub fn column_index(&self, name: &str) -> Option<(u32, Datatype)> {
        let cli = self.cli();

        (0..self.column_count())
            .find(|col| {
                cli.column_label_name(self.md.handle(), *col)
                    .eq_ignore_ascii_case(name.as_bytes())
            })
            .map(|col| (col, self.datatypes[col as usize]))
    }

    /// Owned descriptions of all columns
    pub fn columns(&self) -> Result<Vec<Column>, FbsError> {
        (0..self.column_count())
            .map(|col| {
                let info = self.column_info(col)?;

                Ok(Column {
                    table: if info.table_name == NO_TABLE_NAME {
                        None
                    } else {
                        Some(info.table_name.into_owned())
                    },
                    name: info.label_name.into_owned(),
                    datatype: info.datatype,
                    nullable: info.is_nullable,
                })
            })
            .collect()
    }

    /// Declared scale of the column
    pub fn scale(&self, col: u32) -> Result<i64, FbsError> {
        self.datatype(col)?;

        Ok(self.cli().column_scale(self.md.handle(), col))
    }

    /// Fetch the next row, `None` when all the rows were fetched
    pub fn fetch_row(&self) -> Option<Row<'_, C>> {
        self.cli()
            .fetch_row(self.md.handle())
            .map(|handle| Row::new(self, handle))
    }

    /// Iterator over the rows not fetched yet
    pub fn rows(&self) -> Rows<'_, C> {
        Rows { result: self }
    }

    /// Message of a statement that doesn't produce rows
    pub fn fetch_message(&self) -> Option<Cow<'_, str>> {
        self.cli()
            .fetch_message(self.md.handle())
            .map(String::from_utf8_lossy)
    }

    /// Release the result. Same as dropping it
    pub fn close(self) {}
}

/// Iterator over the rows of a result
pub struct Rows<'r, C: FbcAccess> {
    result: &'r ResultSet<'r, C>,
}

impl<'r, C: FbcAccess> Iterator for Rows<'r, C> {
    type Item = Row<'r, C>;

    fn next(&mut self) -> Option<Self::Item> {
        self.result.fetch_row()
    }
}
