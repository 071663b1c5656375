//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, MessageText, RoomName},
    infrastructure::dto::websocket::{ClientEvent, ServerEvent},
    ui::state::AppState,
    usecase::{
        DisconnectConnectionUseCase, JoinRoomUseCase, RegisterConnectionUseCase,
        RelayMessageUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // Identifiers are assigned by the server at connect time
    let connection_id = ConnectionIdFactory::generate();
    ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection_id: ConnectionId) {
    let (mut sender, mut receiver) = socket.split();

    // Register the connection before any event is processed
    let (tx, mut rx) = mpsc::unbounded_channel();
    let register_usecase = RegisterConnectionUseCase::new(state.registry.clone());
    if let Err(e) = register_usecase.execute(connection_id.clone(), tx).await {
        tracing::error!("Failed to register connection '{}': {}", connection_id, e);
        return;
    }
    tracing::info!("Connection '{}' registered", connection_id);

    // Tell the client its server-assigned identifier
    let connected = ServerEvent::Connected {
        connection_id: connection_id.as_str().to_string(),
    };
    let connected_json = serde_json::to_string(&connected).unwrap();
    if sender.send(Message::Text(connected_json.into())).await.is_err() {
        tracing::warn!("Failed to send connected event to '{}'", connection_id);
    }

    let recv_state = state.clone();
    let recv_connection_id = connection_id.clone();

    // Receive events from this client; each event runs to completion
    // before the next is processed
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    dispatch_event(&recv_state, &recv_connection_id, text.as_str()).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", recv_connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Forward relayed events to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Drop the connection's memberships; no notification to remaining members
    let disconnect_usecase = DisconnectConnectionUseCase::new(state.registry.clone());
    match disconnect_usecase.execute(&connection_id).await {
        Ok(left_rooms) => {
            tracing::info!(
                "Connection '{}' disconnected (left {} room(s))",
                connection_id,
                left_rooms.len()
            );
        }
        Err(_) => {
            tracing::warn!("Failed to deregister connection '{}'", connection_id);
        }
    }
}

/// Dispatch one inbound event to its use case by event kind.
async fn dispatch_event(state: &Arc<AppState>, connection_id: &ConnectionId, raw: &str) {
    let event = match serde_json::from_str::<ClientEvent>(raw) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Failed to parse event from '{}': {}", connection_id, e);
            report_error(state, connection_id, format!("malformed event: {e}")).await;
            return;
        }
    };

    match event {
        ClientEvent::Message { message, room_id } => {
            handle_message(state, connection_id, message, room_id).await;
        }
        ClientEvent::JoinRoom { room } => {
            handle_join_room(state, connection_id, room).await;
        }
    }
}

/// Relay `message` to the other members of `room_id`.
async fn handle_message(
    state: &Arc<AppState>,
    connection_id: &ConnectionId,
    message: String,
    room_id: String,
) {
    let (room, text) = match (RoomName::new(room_id), MessageText::new(message)) {
        (Ok(room), Ok(text)) => (room, text),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!("Invalid message payload from '{}': {}", connection_id, e);
            report_error(state, connection_id, e.to_string()).await;
            return;
        }
    };

    let relay_usecase = RelayMessageUseCase::new(state.registry.clone());
    let targets = relay_usecase.execute(connection_id, &room).await;
    if targets.is_empty() {
        // Empty or unknown room: silent no-op
        tracing::debug!("No relay targets in room '{}'", room);
        return;
    }

    let event = ServerEvent::ReceivedMessage {
        message: text.into_string(),
    };
    let payload = serde_json::to_string(&event).unwrap();
    tracing::info!(
        "Relaying message from '{}' to {} member(s) of room '{}'",
        connection_id,
        targets.len(),
        room
    );
    for target in targets {
        if let Some(target_sender) = state.registry.sender_for(&target).await
            && target_sender.send(payload.clone()).is_err()
        {
            tracing::warn!("Failed to relay message to '{}'", target);
        }
    }
}

/// Add the connection to the named room, creating it on demand.
async fn handle_join_room(state: &Arc<AppState>, connection_id: &ConnectionId, room: String) {
    let room = match RoomName::new(room) {
        Ok(room) => room,
        Err(e) => {
            tracing::warn!("Invalid room name from '{}': {}", connection_id, e);
            report_error(state, connection_id, e.to_string()).await;
            return;
        }
    };

    let join_usecase = JoinRoomUseCase::new(state.registry.clone());
    match join_usecase.execute(connection_id, room.clone()).await {
        Ok(true) => {
            tracing::info!("Connection '{}' joined room '{}'", connection_id, room);
        }
        Ok(false) => {
            tracing::debug!("Connection '{}' already in room '{}'", connection_id, room);
        }
        Err(e) => {
            tracing::warn!("Join failed for '{}': {}", connection_id, e);
        }
    }
}

/// Send an `error` event back to the offending connection.
async fn report_error(state: &Arc<AppState>, connection_id: &ConnectionId, reason: String) {
    let event = ServerEvent::Error { reason };
    let payload = serde_json::to_string(&event).unwrap();
    if let Some(sender) = state.registry.sender_for(connection_id).await
        && sender.send(payload).is_err()
    {
        tracing::warn!("Failed to send error event to '{}'", connection_id);
    }
}
