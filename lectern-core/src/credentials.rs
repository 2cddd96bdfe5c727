use std::sync::Arc;

use log::warn;
use sha2::{Digest, Sha256};

use crate::{
    auth::Role,
    store::{self, CredentialMap, DocumentKind, Storage},
};

/// A seeded classroom account.
struct SeedUser {
    username: &'static str,
    password: &'static str,
    role: Role,
}

/// The fixed account list. There is no registration; these three accounts
/// are the whole userbase.
const SEED_USERS: [SeedUser; 3] = [
    SeedUser {
        username: "Mohammed",
        password: "Molsalmaan@9292",
        role: Role::Teacher,
    },
    SeedUser {
        username: "Muskan",
        password: "mus1234kan",
        role: Role::Student,
    },
    SeedUser {
        username: "Prithwin",
        password: "prithwin",
        role: Role::Student,
    },
];

/// Checks submitted credentials against the credential document.
pub struct CredentialStore<S> {
    storage: Arc<S>,
}

impl<S> CredentialStore<S>
where
    S: Storage,
{
    pub fn new(storage: &Arc<S>) -> Self {
        Self {
            storage: storage.clone(),
        }
    }

    /// Seeds the credential document if it doesn't exist yet.
    /// An existing document is never overwritten.
    pub fn ensure_initialized(&self) -> store::Result<()> {
        if self.storage.exists(DocumentKind::Credentials) {
            return Ok(());
        }

        let credentials: CredentialMap = SEED_USERS
            .iter()
            .map(|user| (user.username.to_string(), digest(user.password)))
            .collect();

        self.storage.save_credentials(&credentials)
    }

    /// Returns true iff the username is known and the password digest
    /// matches. A missing or malformed document fails closed.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let credentials = match self.storage.load_credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                warn!("denying login, credential document unavailable: {e}");
                return false;
            }
        };

        credentials
            .get(username)
            .map(|stored| *stored == digest(password))
            .unwrap_or(false)
    }

    /// Resolves the role of an account from the seed table.
    pub fn role_of(&self, username: &str) -> Option<Role> {
        SEED_USERS
            .iter()
            .find(|user| user.username == username)
            .map(|user| user.role)
    }
}

impl<S> Clone for CredentialStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

/// Hex-encoded SHA-256, the digest format of the credential document
pub fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::store::JsonStorage;

    fn store(dir: &tempfile::TempDir) -> CredentialStore<JsonStorage> {
        let storage = Arc::new(JsonStorage::new(dir.path()).unwrap());
        let store = CredentialStore::new(&storage);
        store.ensure_initialized().unwrap();
        store
    }

    #[test]
    fn seeded_credentials_verify() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        for user in &SEED_USERS {
            assert!(store.verify(user.username, user.password));
        }

        assert!(!store.verify("Mohammed", "wrong"));
        assert!(!store.verify("Muskan", "Molsalmaan@9292"));
        assert!(!store.verify("nobody", "prithwin"));
        assert!(!store.verify("", ""));
    }

    #[test]
    fn initialization_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(JsonStorage::new(dir.path()).unwrap());
        let store = CredentialStore::new(&storage);

        let mut existing = CredentialMap::new();
        existing.insert("Mohammed".to_string(), digest("different"));
        storage.save_credentials(&existing).unwrap();

        store.ensure_initialized().unwrap();

        assert_eq!(storage.load_credentials().unwrap(), existing);
        assert!(store.verify("Mohammed", "different"));
        assert!(!store.verify("Muskan", "mus1234kan"));
    }

    #[test]
    fn malformed_document_fails_closed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        std::fs::write(dir.path().join("users_database.json"), "not json").unwrap();

        assert!(!store.verify("Mohammed", "Molsalmaan@9292"));
    }

    #[test]
    fn roles_come_from_the_seed_table() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        assert_eq!(store.role_of("Mohammed"), Some(Role::Teacher));
        assert_eq!(store.role_of("Muskan"), Some(Role::Student));
        assert_eq!(store.role_of("Prithwin"), Some(Role::Student));
        assert_eq!(store.role_of("nobody"), None);
    }

    #[test]
    fn digest_is_hex_sha256() {
        // sha256 of the empty string
        assert_eq!(
            digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
