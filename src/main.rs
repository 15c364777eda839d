use opus_sync::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting opus-sync");

    // Load configuration
    let config = startup::load_config()?;

    // Events file from the first argument or EVENTS_FILE
    let path = startup::events_path(std::env::args().nth(1))?;

    startup::run(config, path).await
}
