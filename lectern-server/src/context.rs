use std::sync::Arc;

use axum::extract::FromRef;
use lectern_core::{Classroom, JsonStorage};

use crate::ServerConfig;

#[derive(Clone, FromRef)]
pub struct ServerContext {
    pub classroom: Arc<Classroom<JsonStorage>>,
    pub config: Arc<ServerConfig>,
}
