use dashmap::DashMap;
use thiserror::Error;

use crate::{credentials::CredentialStore, store::Storage, util::random_string};

/// What a logged-in account is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// May mutate the live status and post notifications
    Teacher,
    /// May only read
    Student,
}

/// Login session data for authentication.
///
/// Constructed once at login and discarded at logout. Held in process
/// memory only, so sessions do not survive a restart.
#[derive(Debug, Clone)]
pub struct SessionData {
    /// The session token, or key if you will
    pub token: String,
    pub username: String,
    pub role: Role,
}

#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password is incorrect, or the credential document could
    /// not be read. The cause is deliberately not distinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

pub struct Auth<S> {
    credentials: CredentialStore<S>,
    sessions: DashMap<String, SessionData>,
}

impl<S> Auth<S>
where
    S: Storage,
{
    const TOKEN_LENGTH: usize = 32;

    pub fn new(credentials: CredentialStore<S>) -> Self {
        Self {
            credentials,
            sessions: DashMap::new(),
        }
    }

    /// Logs in a user, returning a new session
    pub fn login(&self, credentials: Credentials) -> Result<SessionData, AuthError> {
        if !self
            .credentials
            .verify(&credentials.username, &credentials.password)
        {
            return Err(AuthError::InvalidCredentials);
        }

        let role = self
            .credentials
            .role_of(&credentials.username)
            .unwrap_or(Role::Student);

        let session = SessionData {
            token: random_string(Self::TOKEN_LENGTH),
            username: credentials.username,
            role,
        };

        self.sessions
            .insert(session.token.clone(), session.clone());

        Ok(session)
    }

    /// Discards the associated session, if it exists. Always succeeds.
    pub fn logout(&self, token: &str) {
        self.sessions.remove(token);
    }

    /// Returns the session behind a token, if it exists
    pub fn session(&self, token: &str) -> Option<SessionData> {
        self.sessions.get(token).map(|session| session.clone())
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;
    use crate::store::JsonStorage;

    fn auth(dir: &tempfile::TempDir) -> Auth<JsonStorage> {
        let storage = Arc::new(JsonStorage::new(dir.path()).unwrap());
        let credentials = CredentialStore::new(&storage);
        credentials.ensure_initialized().unwrap();
        Auth::new(credentials)
    }

    fn login(auth: &Auth<JsonStorage>, username: &str, password: &str) -> Result<SessionData, AuthError> {
        auth.login(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    #[test]
    fn login_assigns_roles_from_the_seed_table() {
        let dir = tempfile::tempdir().unwrap();
        let auth = auth(&dir);

        let teacher = login(&auth, "Mohammed", "Molsalmaan@9292").unwrap();
        assert_eq!(teacher.role, Role::Teacher);
        assert_eq!(teacher.username, "Mohammed");
        assert_eq!(teacher.token.len(), Auth::<JsonStorage>::TOKEN_LENGTH);

        let student = login(&auth, "Prithwin", "prithwin").unwrap();
        assert_eq!(student.role, Role::Student);
    }

    #[test]
    fn bad_credentials_are_rejected_uniformly() {
        let dir = tempfile::tempdir().unwrap();
        let auth = auth(&dir);

        assert!(matches!(
            login(&auth, "Mohammed", "nope"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            login(&auth, "nobody", "prithwin"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            login(&auth, "", ""),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn sessions_resolve_until_logout() {
        let dir = tempfile::tempdir().unwrap();
        let auth = auth(&dir);

        let session = login(&auth, "Muskan", "mus1234kan").unwrap();

        let found = auth.session(&session.token).unwrap();
        assert_eq!(found.username, "Muskan");

        auth.logout(&session.token);
        assert!(auth.session(&session.token).is_none());

        // Logging out an unknown or already-discarded token is fine
        auth.logout(&session.token);
        auth.logout("does-not-exist");
    }

    #[test]
    fn every_login_issues_a_fresh_token() {
        let dir = tempfile::tempdir().unwrap();
        let auth = auth(&dir);

        let first = login(&auth, "Muskan", "mus1234kan").unwrap();
        let second = login(&auth, "Muskan", "mus1234kan").unwrap();

        assert_ne!(first.token, second.token);
        assert!(auth.session(&first.token).is_some());
        assert!(auth.session(&second.token).is_some());
    }
}
