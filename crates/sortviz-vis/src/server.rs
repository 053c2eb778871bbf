//! Axum web server with WebSocket streaming for visualization.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sortviz_core::{AlgorithmInfo, Catalog, RunConfig};
use sortviz_playback::{DisplayState, PlaybackDriver, PlaybackStatus};
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

/// Shared application state.
pub struct AppState {
    driver: PlaybackDriver,
    catalog: Catalog,
}

/// Visualization server.
pub struct VisServer {
    state: Arc<AppState>,
}

impl VisServer {
    /// Create a server around a playback driver with the built-in catalog.
    pub fn new(driver: PlaybackDriver) -> Self {
        Self::with_catalog(driver, Catalog::default())
    }

    /// Create a server with custom listings and cheat sheets.
    pub fn with_catalog(driver: PlaybackDriver, catalog: Catalog) -> Self {
        Self {
            state: Arc::new(AppState { driver, catalog }),
        }
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/status", get(status_handler))
            .route("/api/display", get(display_handler))
            .route("/api/config", get(config_handler).post(set_config_handler))
            .route("/api/catalog", get(catalog_handler))
            .route("/api/sequence/reset", post(reset_handler))
            .route("/api/run/start", post(start_handler))
            .route("/api/run/pause", post(pause_handler))
            .route("/api/run/resume", post(resume_handler))
            .route("/api/run/stop", post(stop_handler))
            .route("/api/run/step", post(step_handler))
            // WebSocket for real-time updates
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the server on the given address.
    pub async fn serve(self, addr: SocketAddr) -> Result<(), std::io::Error> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Visualization server running on http://{}", addr);
        axum::serve(listener, self.router()).await
    }
}

/// Status plus display, the unit pushed to WebSocket clients.
#[derive(Debug, Clone, Serialize)]
struct Frame {
    status: PlaybackStatus,
    display: DisplayState,
}

async fn frame(driver: &PlaybackDriver) -> Frame {
    Frame {
        status: driver.status().await,
        display: driver.display().await,
    }
}

async fn status_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    Json(state.driver.status().await)
}

async fn display_handler(State(state): State<Arc<AppState>>) -> Json<DisplayState> {
    Json(state.driver.display().await)
}

#[derive(Serialize)]
struct ConfigResponse {
    applied: bool,
    config: RunConfig,
    query: String,
}

async fn config_handler(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    let config = state.driver.config().await;
    Json(ConfigResponse {
        applied: true,
        config,
        query: config.to_query(),
    })
}

#[derive(Deserialize)]
struct ConfigRequest {
    query: String,
}

async fn set_config_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConfigRequest>,
) -> Json<ConfigResponse> {
    let requested = RunConfig::from_query(&req.query);
    let applied = state.driver.set_config(requested).await;
    let config = state.driver.config().await;
    Json(ConfigResponse {
        applied,
        config,
        query: config.to_query(),
    })
}

async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<Vec<AlgorithmInfo>> {
    Json(state.catalog.iter().cloned().collect())
}

async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    state.driver.reset_sequence().await;
    Json(state.driver.status().await)
}

async fn start_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    state.driver.start().await;
    Json(state.driver.status().await)
}

async fn pause_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    state.driver.pause().await;
    Json(state.driver.status().await)
}

async fn resume_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    state.driver.resume().await;
    Json(state.driver.status().await)
}

async fn stop_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    state.driver.stop().await;
    Json(state.driver.status().await)
}

async fn step_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    state.driver.step().await;
    Json(state.driver.status().await)
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn send_frame(socket: &mut WebSocket, frame: &Frame) -> Result<(), axum::Error> {
    match serde_json::to_string(frame) {
        Ok(json) => socket.send(Message::Text(json.into())).await,
        Err(e) => {
            warn!("Failed to encode frame: {}", e);
            Ok(())
        }
    }
}

async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    let mut updates = state.driver.subscribe();

    if let Err(e) = send_frame(&mut socket, &frame(&state.driver).await).await {
        warn!("Failed to send initial frame: {}", e);
        return;
    }

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<WsCommand>(&text) {
                            Ok(cmd) => {
                                handle_ws_command(&state.driver, cmd).await;
                                if let Err(e) = send_frame(&mut socket, &frame(&state.driver).await).await {
                                    warn!("Failed to send frame: {}", e);
                                    break;
                                }
                            }
                            Err(e) => debug!("Ignoring client message: {}", e),
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("WebSocket client disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        warn!("WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                if let Err(e) = send_frame(&mut socket, &frame(&state.driver).await).await {
                    warn!("Failed to send frame: {}", e);
                    break;
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsCommand {
    Start,
    Pause,
    Resume,
    Stop,
    Step,
    ResetSequence,
    /// Re-send the current frame without changing anything
    Refresh,
}

async fn handle_ws_command(driver: &PlaybackDriver, cmd: WsCommand) -> bool {
    match cmd {
        WsCommand::Start => driver.start().await,
        WsCommand::Pause => driver.pause().await,
        WsCommand::Resume => driver.resume().await,
        WsCommand::Stop => driver.stop().await,
        WsCommand::Step => driver.step().await,
        WsCommand::ResetSequence => driver.reset_sequence().await,
        WsCommand::Refresh => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_playback::PlaybackState;

    fn server() -> VisServer {
        VisServer::new(PlaybackDriver::new(RunConfig::default()))
    }

    #[test]
    fn router_builds() {
        let _router = server().router();
    }

    #[test]
    fn ws_commands_parse() {
        let cmd: WsCommand = serde_json::from_str(r#"{"type":"reset_sequence"}"#).unwrap();
        assert_eq!(cmd, WsCommand::ResetSequence);
        assert!(serde_json::from_str::<WsCommand>(r#"{"type":"explode"}"#).is_err());
    }

    #[tokio::test]
    async fn step_handler_enters_step_mode() {
        let server = server();
        let Json(status) = step_handler(State(server.state.clone())).await;
        assert_eq!(status.state, PlaybackState::Stepping);
        assert_eq!(status.cursor, 1);
    }

    #[tokio::test]
    async fn config_handler_applies_query() {
        let server = server();
        let Json(resp) = set_config_handler(
            State(server.state.clone()),
            Json(ConfigRequest {
                query: "algo=merge&size=16&speed=999".to_string(),
            }),
        )
        .await;

        assert!(resp.applied);
        assert_eq!(resp.query, "algo=merge&size=16&speed=100");

        let Json(display) = display_handler(State(server.state.clone())).await;
        assert_eq!(display.sequence.len(), 16);
    }

    #[tokio::test]
    async fn ws_command_respects_state() {
        let server = server();
        let driver = &server.state.driver;
        assert!(!handle_ws_command(driver, WsCommand::Pause).await);
        assert!(handle_ws_command(driver, WsCommand::Start).await);
        assert!(handle_ws_command(driver, WsCommand::Pause).await);
        assert!(handle_ws_command(driver, WsCommand::Stop).await);
        assert_eq!(driver.state().await, PlaybackState::Idle);
    }

    #[test]
    fn catalog_lists_every_algorithm() {
        let server = server();
        let Json(entries) = tokio_test::block_on(catalog_handler(State(server.state.clone())));
        assert_eq!(entries.len(), 4);
    }
}
