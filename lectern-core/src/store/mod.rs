use thiserror::Error;

mod data;
pub use data::*;

mod json;
pub use json::*;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing document could not be read or written
    #[error("{document}: {source}")]
    Io {
        document: &'static str,
        #[source]
        source: std::io::Error,
    },
    /// The backing document exists but its content does not parse
    #[error("{document} is malformed: {source}")]
    Malformed {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// The three documents that make up all persisted classroom state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Credentials,
    LiveSession,
    Notifications,
}

/// Represents a type that can load and replace the classroom documents.
///
/// Every operation is a wholesale read or rewrite of one document. There is
/// no locking and no merge, so concurrent writers race and the last write
/// wins.
pub trait Storage: Send + Sync + 'static {
    fn load_credentials(&self) -> Result<CredentialMap>;
    fn save_credentials(&self, credentials: &CredentialMap) -> Result<()>;

    fn load_live_session(&self) -> Result<LiveSession>;
    fn save_live_session(&self, session: &LiveSession) -> Result<()>;

    fn load_notifications(&self) -> Result<Vec<Notification>>;
    fn save_notifications(&self, notifications: &[Notification]) -> Result<()>;

    /// Returns true if the document is already present in the backing storage
    fn exists(&self, kind: DocumentKind) -> bool;
}
