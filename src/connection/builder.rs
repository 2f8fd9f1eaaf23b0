//!
//! Rust FrontBase adapter
//!
//! Connection configuration
//!

use rsfrontbase_core::*;

use super::{conn_string, Connection, Credentials};

/// Creates the FBCAccess client of the new connections
pub trait FbcClientFactory {
    type C: FbcAccess;

    fn new_instance(&self) -> Result<Self::C, FbsError>;
}

/// How the database is reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    /// Database registered on the FBExec of a host
    OnHost { database: String, host: String },

    /// Database server listening at a port of a host
    OnPort { host: String, port: u32 },

    /// Local database file
    AtPath { database: String, path: String },
}

/// Settings of the new connections
#[derive(Debug, Clone)]
pub struct ConnectionConfiguration {
    pub target: ConnectionTarget,
    pub user: String,
    pub password: Option<String>,
    pub database_password: Option<String>,
    pub session_name: String,
    pub os_user: String,
    pub auto_commit: bool,
    pub session_mode: Option<SessionMode>,
}

impl Default for ConnectionConfiguration {
    fn default() -> Self {
        Self {
            target: ConnectionTarget::OnHost {
                database: "test".to_string(),
                host: "localhost".to_string(),
            },
            user: SYSTEM_USER.to_string(),
            password: None,
            database_password: None,
            session_name: default_session_name(),
            os_user: std::env::var("USER").unwrap_or_default(),
            auto_commit: true,
            session_mode: None,
        }
    }
}

/// Name of the running executable
fn default_session_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "rsfrontbase".to_string())
}

/// Builder for creating database connections
pub struct ConnectionBuilder<F: FbcClientFactory> {
    factory: F,
    conf: ConnectionConfiguration,
}

impl<F: FbcClientFactory> ConnectionBuilder<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            conf: Default::default(),
        }
    }

    /// Database registered on the FBExec of the host. Default: `test` on `localhost`
    pub fn on_host<S: Into<String>, H: Into<String>>(&mut self, database: S, host: H) -> &mut Self {
        self.conf.target = ConnectionTarget::OnHost {
            database: database.into(),
            host: host.into(),
        };
        self
    }

    /// Database server listening at the port of the host
    pub fn on_port<H: Into<String>>(&mut self, host: H, port: u32) -> &mut Self {
        self.conf.target = ConnectionTarget::OnPort {
            host: host.into(),
            port,
        };
        self
    }

    /// Local database file
    pub fn at_path<S: Into<String>, P: Into<String>>(&mut self, database: S, path: P) -> &mut Self {
        self.conf.target = ConnectionTarget::AtPath {
            database: database.into(),
            path: path.into(),
        };
        self
    }

    /// Username, uppercased on connect. Default: _SYSTEM
    pub fn user<S: Into<String>>(&mut self, user: S) -> &mut Self {
        self.conf.user = user.into();
        self
    }

    /// Password of the user. Default: none
    pub fn password<S: Into<String>>(&mut self, password: S) -> &mut Self {
        self.conf.password = Some(password.into());
        self
    }

    /// Password of the database. Default: none
    pub fn database_password<S: Into<String>>(&mut self, password: S) -> &mut Self {
        self.conf.database_password = Some(password.into());
        self
    }

    /// Session name reported to the server. Default: name of the executable
    pub fn session_name<S: Into<String>>(&mut self, session_name: S) -> &mut Self {
        self.conf.session_name = session_name.into();
        self
    }

    /// Operating system user reported to the server. Default: $USER
    pub fn os_user<S: Into<String>>(&mut self, os_user: S) -> &mut Self {
        self.conf.os_user = os_user.into();
        self
    }

    /// Commit flag of the `Queryable` and `Execute` statements. Default: true
    pub fn auto_commit(&mut self, auto_commit: bool) -> &mut Self {
        self.conf.auto_commit = auto_commit;
        self
    }

    /// Transaction settings applied after the session is created. Default: server defaults
    pub fn session_mode(&mut self, mode: SessionMode) -> &mut Self {
        self.conf.session_mode = Some(mode);
        self
    }

    /// Apply the settings of a connection string, see `conn_string::parse`
    pub fn with_string<S: AsRef<str>>(&mut self, sconn: S) -> Result<&mut Self, FbsError> {
        let settings = conn_string::parse(sconn.as_ref())?;

        self.conf.target = settings.target;

        if let Some(user) = settings.user {
            self.conf.user = user;
        }
        if let Some(pass) = settings.pass {
            self.conf.password = Some(pass);
        }
        if let Some(database_password) = settings.database_password {
            self.conf.database_password = Some(database_password);
        }
        if let Some(session_name) = settings.session_name {
            self.conf.session_name = session_name;
        }
        if let Some(os_user) = settings.os_user {
            self.conf.os_user = os_user;
        }
        if let Some(auto_commit) = settings.auto_commit {
            self.conf.auto_commit = auto_commit;
        }

        Ok(self)
    }

    pub fn configuration(&self) -> &ConnectionConfiguration {
        &self.conf
    }

    /// Open a new connection to the database
    pub fn connect(&self) -> Result<Connection<F::C>, FbsError> {
        let cli = self.factory.new_instance()?;
        let user = self.conf.user.to_uppercase();

        let creds = Credentials {
            database_password: self.conf.database_password.as_deref(),
            user: &user,
            password: self.conf.password.as_deref(),
            session_name: &self.conf.session_name,
            os_user: &self.conf.os_user,
        };

        let mut conn = match &self.conf.target {
            ConnectionTarget::OnHost { database, host } => {
                Connection::connect_on_host(cli, database, host, &creds)?
            }
            ConnectionTarget::OnPort { host, port } => {
                Connection::connect_on_port(cli, host, *port, &creds)?
            }
            ConnectionTarget::AtPath { database, path } => {
                Connection::connect_at_path(cli, database, path, &creds)?
            }
        };

        conn.auto_commit = self.conf.auto_commit;

        if let Some(mode) = self.conf.session_mode {
            conn.execute_sql(&mode.sql(), true)?;
        }

        Ok(conn)
    }
}

#[cfg(feature = "linking")]
mod native_linked {
    use super::*;
    use rsfrontbase_native::{FbcLinking, NativeFbcClient};

    /// FBCAccess linked at build time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LinkedClient;

    impl FbcClientFactory for LinkedClient {
        type C = NativeFbcClient<FbcLinking>;

        fn new_instance(&self) -> Result<Self::C, FbsError> {
            Ok(NativeFbcClient::linked())
        }
    }

    /// Builder of connections through the FBCAccess linked at build time
    pub fn builder_linked() -> ConnectionBuilder<LinkedClient> {
        ConnectionBuilder::new(LinkedClient)
    }
}

#[cfg(feature = "linking")]
pub use native_linked::*;

#[cfg(feature = "dynamic_loading")]
mod native_dyn_loaded {
    use super::*;
    use rsfrontbase_native::{FbcDynLoading, NativeFbcClient};

    /// FBCAccess loaded at runtime from a path
    #[derive(Debug, Clone)]
    pub struct DynLoadedClient(String);

    impl FbcClientFactory for DynLoadedClient {
        type C = NativeFbcClient<FbcDynLoading>;

        fn new_instance(&self) -> Result<Self::C, FbsError> {
            NativeFbcClient::with_client(&self.0)
        }
    }

    /// Builder of connections through the FBCAccess found at the path
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rsfrontbase::builder_dyn_load;
    ///
    /// // On linux
    /// builder_dyn_load("libFBCAccess.so");
    ///
    /// // On macOS
    /// builder_dyn_load("/Library/FrontBase/lib/libFBCAccess.dylib");
    /// ```
    pub fn builder_dyn_load<S: Into<String>>(lib_path: S) -> ConnectionBuilder<DynLoadedClient> {
        ConnectionBuilder::new(DynLoadedClient(lib_path.into()))
    }
}

#[cfg(feature = "dynamic_loading")]
pub use native_dyn_loaded::*;
