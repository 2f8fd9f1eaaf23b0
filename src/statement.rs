//!
//! Rust FrontBase adapter
//!
//! Sql statements with positional parameters
//!

use rsfrontbase_core::{FbcAccess, FbsError, Value};

use crate::{blob::BlobHandle, Connection};

/// Piece of a parsed statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node<'s> {
    Text(&'s str),
    Placeholder,
}

/// Sql split on the `?` placeholders found outside of quoted
/// strings and quoted names
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Statement<'s> {
    nodes: Vec<Node<'s>>,
}

impl<'s> Statement<'s> {
    pub fn parse(sql: &'s str) -> Self {
        let mut nodes = vec![];
        let mut quote = None;
        let mut start = 0;

        // A doubled quote closes and reopens the quoted part
        for (i, ch) in sql.char_indices() {
            match (quote, ch) {
                (None, '\'') | (None, '"') => quote = Some(ch),

                (Some(q), ch) if q == ch => quote = None,

                (None, '?') => {
                    if start < i {
                        nodes.push(Node::Text(&sql[start..i]));
                    }
                    nodes.push(Node::Placeholder);
                    start = i + 1;
                }

                _ => {}
            }
        }

        if start < sql.len() {
            nodes.push(Node::Text(&sql[start..]));
        }

        Statement { nodes }
    }

    pub fn placeholders(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| **node == Node::Placeholder)
            .count()
    }

    /// Replace each placeholder by the literal of its parameter.
    ///
    /// `Binary` parameters are written as new BLOBs first, and replaced
    /// by their handle strings.
    pub fn bind<'c, C: FbcAccess>(
        &self,
        conn: &'c Connection<C>,
        params: Vec<Value>,
    ) -> Result<BoundStatement<'c, C>, FbsError> {
        let expected = self.placeholders();
        if params.len() != expected {
            return Err(FbsError::Other(format!(
                "Invalid number of parameters: {} expected, {} given",
                expected,
                params.len()
            )));
        }

        let mut params = params.into_iter();
        let mut sql = String::new();
        let mut blobs = vec![];

        for node in &self.nodes {
            match node {
                Node::Text(text) => sql.push_str(text),

                Node::Placeholder => match params.next() {
                    Some(Value::Binary(data)) => {
                        let blob = conn.create_blob(&data)?;
                        sql.push_str(&blob.handle_string());
                        blobs.push(blob);
                    }
                    Some(param) => sql.push_str(&param.sql_literal()?),
                    None => return Err("Invalid number of parameters".into()),
                },
            }
        }

        Ok(BoundStatement {
            sql,
            _blobs: blobs,
        })
    }
}

/// Statement with the parameters in place. Owns the handles of the
/// BLOBs written for it, released after the execution.
pub(crate) struct BoundStatement<'c, C: FbcAccess> {
    sql: String,
    _blobs: Vec<BlobHandle<'c, C>>,
}

impl<'c, C: FbcAccess> BoundStatement<'c, C> {
    pub fn sql(&self) -> &str {
        &self.sql
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plain_statement() {
        let stmt = Statement::parse("SELECT a, b, c FROM t WHERE a = 2");

        assert_eq!(0, stmt.placeholders());
        assert_eq!(
            vec![Node::Text("SELECT a, b, c FROM t WHERE a = 2")],
            stmt.nodes
        );
    }

    #[test]
    fn placeholders_outside_quotes() {
        let stmt = Statement::parse(
            "SELECT a, \"b?\", c, ? FROM t WHERE a = ? AND b = 'What?' OR c = 'Strange''?'",
        );

        assert_eq!(2, stmt.placeholders());
        assert_eq!(
            vec![
                Node::Text("SELECT a, \"b?\", c, "),
                Node::Placeholder,
                Node::Text(" FROM t WHERE a = "),
                Node::Placeholder,
                Node::Text(" AND b = 'What?' OR c = 'Strange''?'"),
            ],
            stmt.nodes
        );
    }

    #[test]
    fn adjacent_placeholders() {
        let stmt = Statement::parse("??VALUES ?");

        assert_eq!(
            vec![
                Node::Placeholder,
                Node::Placeholder,
                Node::Text("VALUES "),
                Node::Placeholder,
            ],
            stmt.nodes
        );
    }

    #[test]
    fn empty_strings_and_multibyte_text() {
        let sql = "UPDATE \"t\" SET \"text\" = '' WHERE id = ?; UPDATE \"t\" SET \"text\" = 'Är du pensionär? Då' WHERE id = ?";
        let stmt = Statement::parse(sql);

        assert_eq!(
            vec![
                Node::Text("UPDATE \"t\" SET \"text\" = '' WHERE id = "),
                Node::Placeholder,
                Node::Text("; UPDATE \"t\" SET \"text\" = 'Är du pensionär? Då' WHERE id = "),
                Node::Placeholder,
            ],
            stmt.nodes
        );
    }
}
