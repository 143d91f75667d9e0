use tokio::sync::broadcast;

#[derive(Clone, Debug)]
/// Serialized payload fanned out to every websocket subscriber.
pub struct ServerEvent {
    pub data: String,
}

impl ServerEvent {
    /// Serialise `payload` once so every subscriber forwards the same text frame.
    pub fn json<T>(payload: &T) -> serde_json::Result<Self>
    where
        T: serde::Serialize,
    {
        Ok(Self {
            data: serde_json::to_string(payload)?,
        })
    }
}

/// Simple broadcast hub wrapper used by the roster push.
pub struct RosterHub {
    sender: broadcast::Sender<ServerEvent>,
}

impl RosterHub {
    /// Construct a new hub backed by a Tokio broadcast channel with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Register a new subscriber that will receive subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    /// Send an event to all current subscribers, returning how many received it.
    pub fn broadcast(&self, event: ServerEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
