//! FrontBase session options
//!
//! More info about the transaction modes of FrontBase sessions:
//! https://www.frontbase.com/documentation/FBUsersGuide.pdf

/// Locking discipline of the session transactions
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum LockingMode {
    Pessimistic,
    Optimistic,
    Deferred,
}

impl LockingMode {
    fn as_sql(self) -> &'static str {
        match self {
            LockingMode::Pessimistic => "PESSIMISTIC",
            LockingMode::Optimistic => "OPTIMISTIC",
            LockingMode::Deferred => "DEFERRED",
        }
    }
}

/// Data access mode of the session transactions
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum AccessMode {
    ReadWrite,
    ReadOnly,
}

impl AccessMode {
    fn as_sql(self) -> &'static str {
        match self {
            AccessMode::ReadWrite => "READ WRITE",
            AccessMode::ReadOnly => "READ ONLY",
        }
    }
}

/// Transaction isolation level
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum IsolationLevel {
    Serializable,
    RepeatableRead,
    ReadCommitted,
    Versioned,
}

impl IsolationLevel {
    fn as_sql(self) -> &'static str {
        match self {
            IsolationLevel::Serializable => "SERIALIZABLE",
            IsolationLevel::RepeatableRead => "REPEATABLE READ",
            IsolationLevel::ReadCommitted => "READ COMMITTED",
            IsolationLevel::Versioned => "VERSIONED",
        }
    }
}

/// Transaction settings applied to a session right after it is created
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct SessionMode {
    pub isolation: IsolationLevel,
    pub locking: LockingMode,
    pub access: AccessMode,
}

impl Default for SessionMode {
    fn default() -> Self {
        Self {
            isolation: IsolationLevel::Serializable,
            locking: LockingMode::Pessimistic,
            access: AccessMode::ReadWrite,
        }
    }
}

impl SessionMode {
    pub fn new(isolation: IsolationLevel, locking: LockingMode, access: AccessMode) -> Self {
        Self {
            isolation,
            locking,
            access,
        }
    }

    /// Statement that applies this mode
    pub fn sql(&self) -> String {
        format!(
            "SET TRANSACTION ISOLATION LEVEL {}, LOCKING {}, {};",
            self.isolation.as_sql(),
            self.locking.as_sql(),
            self.access.as_sql()
        )
    }
}
