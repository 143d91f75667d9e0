use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::{
    sync::{broadcast::error::RecvError, mpsc},
    task::JoinHandle,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    services::roster_broadcast,
    state::{ServerEvent, SharedState},
};

/// Writer channel closed: the connection should be terminated immediately.
#[derive(Debug, Error)]
#[error("connection closed")]
struct ConnectionClosed;

/// Handle the full lifecycle of one roster websocket subscriber.
///
/// The client gets a snapshot right away, then one per broadcast tick. Inbound frames are
/// ignored apart from ping and close.
pub async fn handle_socket(state: SharedState, socket: WebSocket) {
    let connection_id = Uuid::new_v4();
    let (mut sender, mut receiver) = socket.split();
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<Message>();

    // Dedicated writer task keeps outbound messages flowing even while we await inbound frames.
    let writer_task = tokio::spawn(async move {
        while let Some(message) = outbound_rx.recv().await {
            if sender.send(message).await.is_err() {
                break;
            }
        }
    });

    // Subscribe before the first snapshot so no tick falls in between.
    let mut events = state.roster_hub().subscribe();
    info!(%connection_id, "roster subscriber connected");

    match roster_broadcast::roster_event(&state).await {
        Ok(event) => {
            if send_event(&outbound_tx, event).is_err() {
                finalize(writer_task, outbound_tx).await;
                return;
            }
        }
        Err(err) => warn!(%connection_id, error = %err, "initial roster snapshot skipped"),
    }

    loop {
        tokio::select! {
            received = events.recv() => match received {
                Ok(event) => {
                    if send_event(&outbound_tx, event).is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    debug!(%connection_id, skipped, "roster subscriber lagging");
                }
                Err(RecvError::Closed) => break,
            },
            inbound = receiver.next() => match inbound {
                Some(Ok(Message::Ping(payload))) => {
                    let _ = outbound_tx.send(Message::Pong(payload));
                }
                Some(Ok(Message::Close(frame))) => {
                    let _ = outbound_tx.send(Message::Close(frame));
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    warn!(%connection_id, error = %err, "websocket error");
                    break;
                }
                None => break,
            },
        }
    }

    info!(%connection_id, "roster subscriber disconnected");
    finalize(writer_task, outbound_tx).await;
}

/// Queue a broadcast payload as a text frame. Fails once the writer is gone.
fn send_event(
    tx: &mpsc::UnboundedSender<Message>,
    event: ServerEvent,
) -> Result<(), ConnectionClosed> {
    tx.send(Message::Text(event.data.into()))
        .map_err(|_| ConnectionClosed)
}

/// Close the outbound channel and wait for the writer to flush.
async fn finalize(writer_task: JoinHandle<()>, outbound_tx: mpsc::UnboundedSender<Message>) {
    drop(outbound_tx);
    let _ = writer_task.await;
}
