use std::sync::Arc;

use chrono::Local;
use log::warn;
use thiserror::Error;

use crate::store::{self, DocumentKind, Notification, Storage, StoreError};

/// Timestamp format of notice board entries, minute resolution
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Message must not be empty")]
    EmptyMessage,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The notice board: an append-ordered list of announcements, newest first.
pub struct NotificationLog<S> {
    storage: Arc<S>,
    /// Maximum number of entries kept, `None` keeps the board unbounded
    retention: Option<usize>,
}

impl<S> NotificationLog<S>
where
    S: Storage,
{
    pub fn new(storage: &Arc<S>, retention: Option<usize>) -> Self {
        Self {
            storage: storage.clone(),
            retention,
        }
    }

    /// Ensures the notification document exists, starting the board empty
    pub(crate) fn ensure_initialized(&self) -> store::Result<()> {
        if self.storage.exists(DocumentKind::Notifications) {
            return Ok(());
        }

        self.storage.save_notifications(&[])
    }

    /// Returns the notice board, newest first. An unreadable document reads
    /// as an empty board.
    pub fn list(&self) -> Vec<Notification> {
        match self.storage.load_notifications() {
            Ok(notifications) => notifications,
            Err(e) => {
                warn!("notice board unavailable, showing it empty: {e}");
                Vec::new()
            }
        }
    }

    /// Prepends a message to the board and rewrites the whole document.
    ///
    /// The list is reloaded from a snapshot first, so two racing appends
    /// lose one of the messages.
    pub fn append(&self, message: &str) -> Result<(), NotificationError> {
        if message.trim().is_empty() {
            return Err(NotificationError::EmptyMessage);
        }

        let mut notifications = self.list();

        notifications.insert(
            0,
            Notification {
                date: Local::now().format(DATE_FORMAT).to_string(),
                message: message.to_string(),
            },
        );

        if let Some(limit) = self.retention {
            notifications.truncate(limit);
        }

        self.storage
            .save_notifications(&notifications)
            .map_err(Into::into)
    }
}

impl<S> Clone for NotificationLog<S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            retention: self.retention,
        }
    }
}
