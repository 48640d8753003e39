//! Fan-out of state changes to observers over bounded channels.
use crate::models::dto::TrackerState;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, error::TrySendError};

/// Buffered messages per subscriber before new ones are dropped.
const CAPACITY: usize = 64;

/// Kind of state change.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StateEvent {
    /// Clients were tracked, untracked or moved between workspaces.
    ClientsChange,
    /// Layout, tiling state, capacities or proportions of a workspace changed.
    WorkspacesChange,
    /// The active desktop or screen changed.
    WorkplaceChange,
    /// Windows were placed.
    WindowsChange,
}

/// An event together with the state right after it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StateMessage {
    pub event: StateEvent,
    pub state: TrackerState,
}

#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<mpsc::Sender<StateMessage>>,
}

impl EventBus {
    pub fn subscribe(&mut self) -> mpsc::Receiver<StateMessage> {
        let (tx, rx) = mpsc::channel(CAPACITY);
        self.subscribers.push(tx);
        rx
    }

    #[must_use]
    pub fn has_subscribers(&self) -> bool {
        !self.subscribers.is_empty()
    }

    /// Deliver to every subscriber without waiting. Full subscribers miss the
    /// message, closed ones are dropped.
    pub fn publish(&mut self, message: &StateMessage) {
        self.subscribers.retain(|tx| match tx.try_send(message.clone()) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                tracing::warn!(event = ?message.event, "Subscriber is lagging, dropping event");
                true
            }
            Err(TrySendError::Closed(_)) => {
                tracing::debug!("Subscriber went away");
                false
            }
        });
    }
}
