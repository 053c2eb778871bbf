//! Sortviz Visualization Server
//!
//! Prepare a playback driver and serve its controls and state.

use std::env;
use std::sync::Arc;

use sortviz_playback::{PlaybackDriver, TracingObserver};
use sortviz_vis::{VisConfig, VisServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sortviz_vis=info,sortviz_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Positional args: [query] [port]
    let args: Vec<String> = env::args().skip(1).collect();
    let config = VisConfig::from_env().with_args(&args);

    tracing::info!(
        query = %config.run.to_query(),
        delay_ms = config.run.delay().as_millis() as u64,
        seed = ?config.seed,
        "Starting sortviz"
    );

    let driver = PlaybackDriver::with_observer(config.run, config.seed, Arc::new(TracingObserver));
    let server = VisServer::new(driver);
    server.serve(config.addr).await?;

    Ok(())
}
