use std::{fs, path::PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::store::{
    CredentialMap, DocumentKind, LiveSession, Notification, Result, Storage, StoreError,
};

const CREDENTIALS_FILE: &str = "users_database.json";
const LIVE_SESSION_FILE: &str = "live_status.json";
const NOTIFICATIONS_FILE: &str = "notifications.json";

impl DocumentKind {
    /// File name of the document, shared with previous deployments
    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::Credentials => CREDENTIALS_FILE,
            DocumentKind::LiveSession => LIVE_SESSION_FILE,
            DocumentKind::Notifications => NOTIFICATIONS_FILE,
        }
    }
}

/// A JSON-file storage implementation for lectern.
///
/// Each document is one flat file in the data directory, read in full on
/// every load and rewritten in full on every save.
pub struct JsonStorage {
    dir: PathBuf,
}

impl JsonStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();

        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            document: "data directory",
            source,
        })?;

        Ok(Self { dir })
    }

    fn path(&self, kind: DocumentKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    fn load<T>(&self, kind: DocumentKind) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let bytes = fs::read(self.path(kind)).map_err(|source| StoreError::Io {
            document: kind.file_name(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            document: kind.file_name(),
            source,
        })
    }

    fn save<T>(&self, kind: DocumentKind, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Malformed {
            document: kind.file_name(),
            source,
        })?;

        fs::write(self.path(kind), bytes).map_err(|source| StoreError::Io {
            document: kind.file_name(),
            source,
        })
    }
}

impl Storage for JsonStorage {
    fn load_credentials(&self) -> Result<CredentialMap> {
        self.load(DocumentKind::Credentials)
    }

    fn save_credentials(&self, credentials: &CredentialMap) -> Result<()> {
        self.save(DocumentKind::Credentials, credentials)
    }

    fn load_live_session(&self) -> Result<LiveSession> {
        self.load(DocumentKind::LiveSession)
    }

    fn save_live_session(&self, session: &LiveSession) -> Result<()> {
        self.save(DocumentKind::LiveSession, session)
    }

    fn load_notifications(&self) -> Result<Vec<Notification>> {
        self.load(DocumentKind::Notifications)
    }

    fn save_notifications(&self, notifications: &[Notification]) -> Result<()> {
        self.save(DocumentKind::Notifications, notifications)
    }

    fn exists(&self, kind: DocumentKind) -> bool {
        self.path(kind).exists()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn documents_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).unwrap();

        let session = LiveSession {
            is_live: true,
            topic: "Thermodynamics Part 2".to_string(),
            room_token: "MolecularMan_0a1b2c3d".to_string(),
        };

        storage.save_live_session(&session).unwrap();
        assert_eq!(storage.load_live_session().unwrap(), session);

        let cleared = LiveSession::default();
        storage.save_live_session(&cleared).unwrap();
        assert_eq!(storage.load_live_session().unwrap(), cleared);
    }

    #[test]
    fn live_document_uses_link_field() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).unwrap();

        let session = LiveSession {
            is_live: true,
            topic: "Stoichiometry".to_string(),
            room_token: "MolecularMan_deadbeef".to_string(),
        };

        storage.save_live_session(&session).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(LIVE_SESSION_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["is_live"], serde_json::json!(true));
        assert_eq!(value["link"], serde_json::json!("MolecularMan_deadbeef"));
        assert!(value.get("room_token").is_none());
    }

    #[test]
    fn missing_document_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).unwrap();

        assert!(!storage.exists(DocumentKind::Notifications));
        assert!(matches!(
            storage.load_notifications(),
            Err(StoreError::Io { .. })
        ));
    }

    #[test]
    fn garbage_document_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).unwrap();

        std::fs::write(dir.path().join(NOTIFICATIONS_FILE), "{oops").unwrap();

        assert!(matches!(
            storage.load_notifications(),
            Err(StoreError::Malformed { .. })
        ));
    }
}
