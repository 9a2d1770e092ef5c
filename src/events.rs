use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use tokio::sync::mpsc::{self, Receiver, Sender, error::TrySendError};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    entity::events::{ActiveModel as EventActive, Model as EventModel},
    error::AppResult,
};

/// Events buffered while the writer is behind; anything past this is dropped.
pub const EVENT_QUEUE_CAPACITY: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub packer_id: Uuid,
    pub order_id: Option<Uuid>,
    pub ip_addr: Option<String>,
    pub action: String,
}

/// Fire-and-forget sink for packer events.
///
/// `record` never waits and never fails the caller. When the queue is full or
/// the writer is gone the event is logged and dropped; the background writer
/// does the same for rows the store refuses.
#[derive(Debug, Clone)]
pub struct EventRecorder {
    tx: Sender<NewEvent>,
}

impl EventRecorder {
    /// Recorder plus the receiving end of its queue, with no writer attached.
    pub fn channel(capacity: usize) -> (Self, Receiver<NewEvent>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Recorder backed by a writer task inserting into the `events` table.
    pub fn spawn(orm: OrmConn) -> Self {
        let (recorder, rx) = Self::channel(EVENT_QUEUE_CAPACITY);
        tokio::spawn(write_events(orm, rx));
        recorder
    }

    pub fn record(&self, event: NewEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::warn!(action = %event.action, "event queue full, dropping event");
            }
            Err(TrySendError::Closed(event)) => {
                tracing::warn!(action = %event.action, "event writer stopped, dropping event");
            }
        }
    }
}

async fn write_events(orm: OrmConn, mut rx: Receiver<NewEvent>) {
    while let Some(event) = rx.recv().await {
        match insert_event(&orm, &event).await {
            Ok(_) => tracing::debug!(action = %event.action, "event has been logged"),
            Err(err) => tracing::warn!(error = %err, action = %event.action, "event log failed"),
        }
    }
    tracing::debug!("event writer finished");
}

pub async fn insert_event(orm: &OrmConn, event: &NewEvent) -> AppResult<EventModel> {
    let row = EventActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(event.packer_id),
        order_id: Set(event.order_id),
        ip_addr: Set(event.ip_addr.clone()),
        action: Set(event.action.clone()),
        created_at: NotSet,
    }
    .insert(orm)
    .await?;

    Ok(row)
}
