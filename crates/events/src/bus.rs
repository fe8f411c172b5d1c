//! In-process progress fan-out backed by a `tokio::sync::broadcast` channel.
//!
//! [`ProgressBus`] lets several observers (a UI forwarder, a logger, a test
//! recorder) independently watch one pipeline run. It is designed to be
//! shared via `Arc<ProgressBus>` and passed to the pipeline as its
//! [`ProgressSink`].

use tokio::sync::broadcast;

use crate::sink::{ProgressSink, ProgressUpdate};

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// Fan-out hub for [`ProgressUpdate`]s.
pub struct ProgressBus {
    sender: broadcast::Sender<ProgressUpdate>,
}

impl ProgressBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed updates are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an update to all current subscribers.
    ///
    /// Updates published while nobody is subscribed are dropped.
    pub fn publish(&self, update: ProgressUpdate) {
        // A SendError here just means zero receivers, which is fine.
        let _ = self.sender.send(update);
    }

    /// Subscribe to all updates published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressUpdate> {
        self.sender.subscribe()
    }
}

impl Default for ProgressBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ProgressSink for ProgressBus {
    fn report(&self, update: ProgressUpdate) {
        self.publish(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediaforge_core::progress::PipelineStage;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = ProgressBus::default();
        let mut rx = bus.subscribe();

        bus.publish(ProgressUpdate::new(PipelineStage::GeneratingImages, 10));

        let received = rx.recv().await.expect("should receive the update");
        assert_eq!(received.stage, PipelineStage::GeneratingImages);
        assert_eq!(received.percent, 10);
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_update() {
        let bus = ProgressBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ProgressUpdate::new(PipelineStage::Complete, 100));

        let u1 = rx1.recv().await.expect("subscriber 1 should receive");
        let u2 = rx2.recv().await.expect("subscriber 2 should receive");
        assert_eq!(u1.percent, 100);
        assert_eq!(u2.percent, 100);
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = ProgressBus::default();
        bus.publish(ProgressUpdate::new(PipelineStage::Initializing, 0));
    }

    #[tokio::test]
    async fn bus_acts_as_progress_sink() {
        let bus = ProgressBus::default();
        let mut rx = bus.subscribe();

        let sink: &dyn ProgressSink = &bus;
        sink.report(ProgressUpdate::new(PipelineStage::Finalizing, 90));

        let received = rx.recv().await.expect("should receive via sink");
        assert_eq!(received.stage, PipelineStage::Finalizing);
    }
}
