//! Connection string parser

use std::path::Path;

use percent_encoding::percent_decode_str;
use rsfrontbase_core::FbsError;
use url::Url;

use super::ConnectionTarget;

#[derive(Debug)]
pub struct ConnStringSettings {
    pub user: Option<String>,
    pub pass: Option<String>,
    pub target: ConnectionTarget,
    pub database_password: Option<String>,
    pub session_name: Option<String>,
    pub os_user: Option<String>,
    pub auto_commit: Option<bool>,
}

/// Parse the connection string.
///
/// Sintaxes accepted:
/// - `frontbase://{user}:{pass}@{host}/{db_name}?{options}`, for a database registered on FBExec
/// - `frontbase://{user}:{pass}@{host}:{port}?{options}`, for a database server listening on a port
/// - `frontbase:///{path}?database={db_name}&{options}`, for a local database file
///
/// Options: `database_password`, `session`, `os_user` and `auto_commit`
pub fn parse(sconn: &str) -> Result<ConnStringSettings, FbsError> {
    if !sconn.starts_with("frontbase://") {
        return Err(FbsError::from(
            "The string must start with the prefix 'frontbase://'",
        ));
    }

    let url = Url::parse(sconn)
        .map_err(|e| FbsError::from(format!("Invalid connection string: {}", e)))?;

    let user = match url.username() {
        "" => None,
        user => Some(decode(user)?),
    };

    let pass = url.password().map(decode).transpose()?;

    let mut database = None;
    let mut database_password = None;
    let mut session_name = None;
    let mut os_user = None;
    let mut auto_commit = None;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "database" => database = Some(value.into_owned()),
            "database_password" => database_password = Some(value.into_owned()),
            "session" => session_name = Some(value.into_owned()),
            "os_user" => os_user = Some(value.into_owned()),
            "auto_commit" => {
                auto_commit = match value.as_ref() {
                    "true" | "1" => Some(true),
                    "false" | "0" => Some(false),
                    _ => None,
                }
            }
            _ => {}
        }
    }

    let target = match url.host_str() {
        Some(host) if !host.is_empty() => {
            let host = decode(host)?;

            match url.port() {
                Some(port) => ConnectionTarget::OnPort {
                    host,
                    port: port.into(),
                },
                None => {
                    let database = match url.path().trim_matches('/') {
                        "" => database
                            .ok_or_else(|| FbsError::from("The database name is required"))?,
                        name => decode(name)?,
                    };

                    ConnectionTarget::OnHost { database, host }
                }
            }
        }

        // Local file
        _ => {
            let path = decode(url.path())?;
            if path.is_empty() || path == "/" {
                return Err(FbsError::from("The database path is required"));
            }

            let database = match database {
                Some(database) => database,
                None => Path::new(&path)
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .ok_or_else(|| FbsError::from("The database name is required"))?,
            };

            ConnectionTarget::AtPath { database, path }
        }
    };

    Ok(ConnStringSettings {
        user,
        pass,
        target,
        database_password,
        session_name,
        os_user,
        auto_commit,
    })
}

fn decode(s: &str) -> Result<String, FbsError> {
    percent_decode_str(s)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| FbsError::from(format!("Invalid connection string: {}", e)))
}
