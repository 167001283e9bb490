//! Dashboard WebSocket handler
//!
//! Streams periodic status frames to connected dashboard clients.

use axum::{
    async_trait,
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use steward_service::services::{DashboardFrame, DashboardStream, FrameSink, SinkClosed, StreamEnd};

use crate::state::AppState;

/// Dashboard WebSocket endpoint
///
/// GET /dashboard
pub async fn dashboard_handler(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(state, socket))
}

/// Frame sink over the write half of a dashboard socket
struct WsFrameSink {
    sink: SplitSink<WebSocket, Message>,
}

#[async_trait]
impl FrameSink for WsFrameSink {
    async fn send(&mut self, frame: DashboardFrame) -> Result<(), SinkClosed> {
        let json = serde_json::to_string(&frame).map_err(|_| SinkClosed)?;
        self.sink
            .send(Message::Text(json.into()))
            .await
            .map_err(|_| SinkClosed)
    }
}

impl WsFrameSink {
    /// Flush a close frame and shut the write half down
    async fn close(mut self) {
        let _ = self.sink.send(Message::Close(None)).await;
        let _ = self.sink.close().await;
    }
}

/// Handle an upgraded dashboard connection
async fn handle_socket(state: AppState, mut socket: WebSocket) {
    // Upgrades that race the shutdown flag get a close frame and nothing else
    let shutdown = state.shutdown_signal();
    if *shutdown.borrow() {
        let _ = socket.send(Message::Close(None)).await;
        return;
    }

    let connection_id = state.dashboard_connections().register();
    tracing::info!(connection_id = %connection_id, "Dashboard client connected");

    // Split the WebSocket
    let (ws_sink, mut ws_stream) = socket.split();
    let mut sink = WsFrameSink { sink: ws_sink };

    // Drain inbound frames so pings are answered and closes are seen
    let connection_id_recv = connection_id;
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = ws_stream.next().await {
            match msg {
                Ok(Message::Close(_)) => {
                    tracing::info!(
                        connection_id = %connection_id_recv,
                        "Dashboard client closed connection"
                    );
                    break;
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {
                    // Pong replies are handled automatically by axum
                }
                Ok(Message::Text(_) | Message::Binary(_)) => {
                    tracing::trace!(
                        connection_id = %connection_id_recv,
                        "Ignoring inbound dashboard message"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        connection_id = %connection_id_recv,
                        error = %e,
                        "Dashboard socket error"
                    );
                    break;
                }
            }
        }
    });

    let stream = DashboardStream::from_context(
        state.service_context(),
        state.clock(),
        state.dashboard_interval(),
    );

    // Broadcast until the client goes away or shutdown begins
    tokio::select! {
        result = stream.run(&mut sink, shutdown) => {
            match result {
                Ok(StreamEnd::Disconnected) => {
                    tracing::info!(connection_id = %connection_id, "Dashboard client disconnected");
                }
                Ok(StreamEnd::Cancelled) => {
                    tracing::info!(connection_id = %connection_id, "Dashboard stream stopped by shutdown");
                }
                Err(e) => {
                    tracing::error!(
                        connection_id = %connection_id,
                        error = %e,
                        "Dashboard stream failed"
                    );
                }
            }
        }
        _ = &mut recv_task => {
            tracing::debug!(connection_id = %connection_id, "Dashboard receive task ended");
        }
    }

    recv_task.abort();
    sink.close().await;

    if let Some(open_for) = state.dashboard_connections().deregister(connection_id) {
        tracing::info!(
            connection_id = %connection_id,
            open_for_secs = open_for.num_seconds(),
            "Dashboard connection cleaned up"
        );
    }
}
