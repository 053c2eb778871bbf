//! Sortviz Visualization Server
//!
//! Drives sorting playback and exposes it to browser frontends.
//!
//! # Architecture
//!
//! - **REST API**: start, pause, resume, stop, step; configuration and catalog
//! - **WebSocket**: streams status and display frames as events are applied
//!
//! # Usage
//!
//! ```ignore
//! let driver = PlaybackDriver::new(RunConfig::default());
//! let server = VisServer::new(driver);
//! server.serve(addr).await;
//! ```

mod config;
mod server;

pub use config::VisConfig;
pub use server::{AppState, VisServer};
