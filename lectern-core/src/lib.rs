mod auth;
mod config;
mod credentials;
mod live;
mod notifications;
mod store;
mod util;

use std::sync::Arc;

pub use auth::*;
pub use config::*;
pub use credentials::*;
pub use live::*;
pub use notifications::*;
pub use store::*;

/// The lectern classroom system, facilitating live status, announcements,
/// and authentication over three independent file-backed documents.
pub struct Classroom<S> {
    pub credentials: CredentialStore<S>,
    pub auth: Auth<S>,
    pub live: LiveSessionStore<S>,
    pub notifications: NotificationLog<S>,
}

impl Classroom<JsonStorage> {
    /// Creates a classroom backed by JSON documents in the configured data
    /// directory.
    pub fn with_config(config: &ClassroomConfig) -> Result<Self> {
        let storage = JsonStorage::new(&config.data_dir)?;
        Self::new(storage, config.notification_retention)
    }
}

impl<S> Classroom<S>
where
    S: Storage,
{
    /// Wires the stores over a shared storage handle and seeds any missing
    /// documents.
    pub fn new(storage: S, notification_retention: Option<usize>) -> Result<Self> {
        let storage = Arc::new(storage);

        let credentials = CredentialStore::new(&storage);
        let notifications = NotificationLog::new(&storage, notification_retention);
        let live = LiveSessionStore::new(&storage, &notifications);
        let auth = Auth::new(credentials.clone());

        credentials.ensure_initialized()?;
        live.ensure_initialized()?;
        notifications.ensure_initialized()?;

        Ok(Self {
            credentials,
            auth,
            live,
            notifications,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn classroom(dir: &tempfile::TempDir) -> Classroom<JsonStorage> {
        Classroom::with_config(&ClassroomConfig {
            data_dir: dir.path().to_path_buf(),
            notification_retention: None,
        })
        .unwrap()
    }

    #[test]
    fn initialization_seeds_all_documents() {
        let dir = tempfile::tempdir().unwrap();
        let _classroom = classroom(&dir);

        assert!(dir.path().join("users_database.json").exists());
        assert!(dir.path().join("live_status.json").exists());
        assert!(dir.path().join("notifications.json").exists());
    }

    #[test]
    fn a_full_class_day() {
        let dir = tempfile::tempdir().unwrap();
        let classroom = classroom(&dir);

        // The teacher logs in and goes live
        let teacher = classroom
            .auth
            .login(Credentials {
                username: "Mohammed".to_string(),
                password: "Molsalmaan@9292".to_string(),
            })
            .unwrap();
        assert_eq!(teacher.role, Role::Teacher);

        let token = classroom.live.start_session("Thermodynamics").unwrap();

        // A student logs in and sees the live class plus the announcement
        let student = classroom
            .auth
            .login(Credentials {
                username: "Prithwin".to_string(),
                password: "prithwin".to_string(),
            })
            .unwrap();
        assert_eq!(student.role, Role::Student);

        let status = classroom.live.read();
        assert!(status.is_live);
        assert_eq!(status.room_token, token);
        assert_eq!(classroom.notifications.list().len(), 1);

        // Class ends, the announcement stays
        classroom.live.end_session().unwrap();
        assert_eq!(classroom.live.read(), LiveSession::default());
        assert_eq!(classroom.notifications.list().len(), 1);
    }

    #[test]
    fn state_survives_a_new_classroom_instance() {
        let dir = tempfile::tempdir().unwrap();

        {
            let classroom = classroom(&dir);
            classroom.live.start_session("Electrolysis").unwrap();
            classroom.notifications.append("Homework due Friday").unwrap();
        }

        let reopened = classroom(&dir);

        let status = reopened.live.read();
        assert!(status.is_live);
        assert_eq!(status.topic, "Electrolysis");

        // Newest first: the manual notice, then the start announcement
        let messages: Vec<_> = reopened
            .notifications
            .list()
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "Homework due Friday");
    }
}
