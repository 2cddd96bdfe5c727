use lectern_core::Classroom;
use lectern_server::{init_logger, run_server, ServerConfig};
use log::{error, info};

#[tokio::main]
async fn main() {
    init_logger();

    let config = ServerConfig::from_env();

    match Classroom::with_config(&config.classroom_config()) {
        Ok(classroom) => {
            info!("Initialized successfully.");
            run_server(classroom, config).await;
        }
        Err(error) => {
            error!("Lectern failed to start: {error}");
            error!("Hint: check that the data directory exists and is writable.");
        }
    }
}
