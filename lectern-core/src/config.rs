use std::path::PathBuf;

/// The configuration of a classroom instance.
#[derive(Debug, Clone)]
pub struct ClassroomConfig {
    /// Directory holding the three JSON documents
    pub data_dir: PathBuf,
    /// Maximum number of notice board entries kept, newest first.
    /// `None` keeps the board unbounded.
    pub notification_retention: Option<usize>,
}

impl Default for ClassroomConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            // The board grows without bound unless explicitly capped
            notification_retention: None,
        }
    }
}
