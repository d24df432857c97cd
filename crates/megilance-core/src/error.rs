//! Error types for the MegiLance client

use thiserror::Error;

/// Main error type for client-side operations
#[derive(Error, Debug)]
pub enum UiError {
    /// Durable storage could not complete an operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or merged
    #[error("Config error: {0}")]
    Config(String),

    /// An avatar was asked to derive initials from an empty name
    #[error("Name must contain at least one non-whitespace character")]
    EmptyName,

    /// A stored or user-supplied theme name is not `light` or `dark`
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, UiError>;
