use std::{
    env,
    net::{Ipv6Addr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use axum::routing::get;
use lectern_core::{Classroom, ClassroomConfig, JsonStorage};
use log::info;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

mod auth;
mod context;
mod docs;
mod errors;
mod live;
mod logging;
mod notifications;
mod schemas;
mod serialized;

pub use context::ServerContext;
pub use logging::init_logger;

/// The default port the server will listen on.
pub const DEFAULT_PORT: u16 = 9050;
/// The default video-conferencing host room tokens are handed to.
pub const DEFAULT_VIDEO_HOST: &str = "meet.jit.si";

pub type Router = axum::Router<ServerContext>;

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub video_host: String,
    pub notification_retention: Option<usize>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env::var("LECTERN_SERVER_PORT")
            .map(|x| x.parse::<u16>().expect("Port must be a number"))
            .unwrap_or(DEFAULT_PORT);

        let data_dir = env::var("LECTERN_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| ClassroomConfig::default().data_dir);

        let video_host =
            env::var("LECTERN_VIDEO_HOST").unwrap_or_else(|_| DEFAULT_VIDEO_HOST.to_string());

        let notification_retention = env::var("LECTERN_NOTIFICATION_RETENTION")
            .ok()
            .map(|x| x.parse::<usize>().expect("Retention must be a number"));

        Self {
            port,
            data_dir,
            video_host,
            notification_retention,
        }
    }

    pub fn classroom_config(&self) -> ClassroomConfig {
        ClassroomConfig {
            data_dir: self.data_dir.clone(),
            notification_retention: self.notification_retention,
        }
    }
}

/// Builds the application router over the given context.
pub fn router(context: ServerContext) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let version_one_router = Router::new()
        .nest("/auth", auth::router())
        .nest("/live", live::router())
        .nest("/notifications", notifications::router());

    Router::new()
        .nest("/v1", version_one_router)
        .route("/api.json", get(docs::docs))
        .layer(cors)
        .with_state(context)
}

/// Starts the lectern server
pub async fn run_server(classroom: Classroom<JsonStorage>, config: ServerConfig) {
    let addr: SocketAddr = (Ipv6Addr::UNSPECIFIED, config.port).into();

    let context = ServerContext {
        classroom: Arc::new(classroom),
        config: Arc::new(config),
    };

    let app = router(context);

    let listener = TcpListener::bind(&addr).await.expect("listens on address");

    info!("Listening on {addr}");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server runs");
}
