use std::sync::Arc;

use log::warn;
use thiserror::Error;

use crate::{
    notifications::NotificationLog,
    store::{self, DocumentKind, LiveSession, Storage, StoreError},
    util::random_hex,
};

/// Fixed prefix of every generated room token
const ROOM_PREFIX: &str = "MolecularMan_";
/// Length of the random hex suffix
const ROOM_SUFFIX_LENGTH: usize = 8;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Topic must not be empty")]
    EmptyTopic,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The singleton live-status record and its transitions.
pub struct LiveSessionStore<S> {
    storage: Arc<S>,
    log: NotificationLog<S>,
}

impl<S> LiveSessionStore<S>
where
    S: Storage,
{
    pub fn new(storage: &Arc<S>, log: &NotificationLog<S>) -> Self {
        Self {
            storage: storage.clone(),
            log: log.clone(),
        }
    }

    /// Ensures the live document exists, starting not live
    pub(crate) fn ensure_initialized(&self) -> store::Result<()> {
        if self.storage.exists(DocumentKind::LiveSession) {
            return Ok(());
        }

        self.write(&LiveSession::default())
    }

    /// Reads the current live status. An unreadable document reads as
    /// "not live".
    pub fn read(&self) -> LiveSession {
        match self.storage.load_live_session() {
            Ok(session) => session,
            Err(e) => {
                warn!("live status unavailable, assuming not live: {e}");
                LiveSession::default()
            }
        }
    }

    /// Replaces the live document in full, with no merge against prior
    /// content.
    pub fn write(&self, session: &LiveSession) -> store::Result<()> {
        self.storage.save_live_session(session)
    }

    /// Goes live with a freshly generated room token and announces the
    /// session on the notice board. Returns the token.
    ///
    /// The status write and the announcement are two separate document
    /// rewrites. A crash between them leaves the class live but
    /// unannounced.
    pub fn start_session(&self, topic: &str) -> Result<String, SessionError> {
        if topic.trim().is_empty() {
            return Err(SessionError::EmptyTopic);
        }

        let token = format!("{ROOM_PREFIX}{}", random_hex(ROOM_SUFFIX_LENGTH));

        self.write(&LiveSession {
            is_live: true,
            topic: topic.to_string(),
            room_token: token.clone(),
        })?;

        let announcement = format!("🔴 Live Class Started: {topic}. Join now!");
        if let Err(e) = self.log.append(&announcement) {
            warn!("class is live but the announcement failed: {e}");
        }

        Ok(token)
    }

    /// Ends the live session, clearing topic and token. The previous
    /// session's data is not retained anywhere.
    pub fn end_session(&self) -> store::Result<()> {
        self.write(&LiveSession::default())
    }
}
