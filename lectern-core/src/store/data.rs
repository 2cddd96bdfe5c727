use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Username to hex-encoded password digest, as stored in the credential
/// document.
pub type CredentialMap = BTreeMap<String, String>;

/// The singleton record describing whether a class is in progress.
///
/// Serializes to the live-status document as-is. The room token is stored
/// under the `link` field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveSession {
    pub is_live: bool,
    pub topic: String,
    /// Opaque identifier of the meeting room, empty when not live
    #[serde(rename = "link")]
    pub room_token: String,
}

/// A single notice board entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Creation time, minute resolution, formatted as `YYYY-MM-DD HH:MM`
    pub date: String,
    pub message: String,
}
