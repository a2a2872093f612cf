//! One-shot effect delivery.
//!
//! Backed by a broadcast channel: every post goes to the subscribers that
//! exist at that moment and is never replayed to later ones. Posting with
//! nobody subscribed drops the effect.

use futures_core::Stream;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, SendError, TryRecvError};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use super::effect::Effect;

/// Per-subscriber buffer used when no capacity is configured.
pub const DEFAULT_EVENT_CAPACITY: usize = 16;

/// Publish side of the effect stream.
pub struct EventChannel<E> {
    sender: broadcast::Sender<E>,
}

impl<E: Effect> EventChannel<E> {
    /// Create a channel that buffers up to `capacity` effects per subscriber.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Hand `event` to every live subscriber without waiting for them.
    ///
    /// Returns `false` when there was no subscriber and the event was dropped.
    pub fn post(&self, event: E) -> bool {
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::trace!(receivers, "effect posted");
                true
            }
            Err(SendError(event)) => {
                tracing::debug!(?event, "no effect subscriber, dropping");
                false
            }
        }
    }

    /// Start receiving effects posted from now on.
    pub fn subscribe(&self) -> EventStream<E> {
        EventStream {
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<E: Effect> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

/// Receive side of the effect stream.
///
/// Ends (yields `None`) once the owning channel is dropped.
pub struct EventStream<E> {
    receiver: broadcast::Receiver<E>,
}

impl<E: Effect> EventStream<E> {
    /// Wait for the next effect.
    pub async fn recv(&mut self) -> Option<E> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "effect subscriber lagged, oldest effects skipped");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Take the next effect if one is already waiting.
    pub fn try_recv(&mut self) -> Option<E> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "effect subscriber lagged, oldest effects skipped");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// Adapt the subscription into a [`Stream`].
    pub fn into_stream(self) -> impl Stream<Item = E> {
        BroadcastStream::new(self.receiver).filter_map(|item| match item {
            Ok(event) => Some(event),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "effect subscriber lagged, oldest effects skipped");
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Ping {
        One,
        Two,
    }

    impl Effect for Ping {}

    #[test]
    fn post_without_subscriber_is_dropped() {
        let channel = EventChannel::new(4);
        assert!(!channel.post(Ping::One));

        let mut late = channel.subscribe();
        assert_eq!(late.try_recv(), None);
    }

    #[test]
    fn every_subscriber_gets_each_post_once() {
        let channel = EventChannel::new(4);
        let mut first = channel.subscribe();
        let mut second = channel.subscribe();

        assert!(channel.post(Ping::One));

        assert_eq!(first.try_recv(), Some(Ping::One));
        assert_eq!(first.try_recv(), None);
        assert_eq!(second.try_recv(), Some(Ping::One));
        assert_eq!(second.try_recv(), None);
    }

    #[test]
    fn lagging_subscriber_skips_oldest() {
        let channel = EventChannel::new(1);
        let mut slow = channel.subscribe();

        channel.post(Ping::One);
        channel.post(Ping::Two);

        assert_eq!(slow.try_recv(), Some(Ping::Two));
        assert_eq!(slow.try_recv(), None);
    }

    #[test]
    fn zero_capacity_is_raised() {
        let channel = EventChannel::new(0);
        let mut sub = channel.subscribe();
        channel.post(Ping::One);
        assert_eq!(sub.try_recv(), Some(Ping::One));
    }

    #[test]
    fn subscriber_count_tracks_drops() {
        let channel: EventChannel<Ping> = EventChannel::default();
        assert_eq!(channel.subscriber_count(), 0);
        let sub = channel.subscribe();
        assert_eq!(channel.subscriber_count(), 1);
        drop(sub);
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn recv_ends_when_channel_dropped() {
        let channel = EventChannel::new(4);
        let mut sub = channel.subscribe();
        channel.post(Ping::Two);
        drop(channel);

        assert_eq!(sub.recv().await, Some(Ping::Two));
        assert_eq!(sub.recv().await, None);
    }

    #[tokio::test]
    async fn stream_yields_posts_in_order() {
        let channel = EventChannel::new(4);
        let stream = channel.subscribe().into_stream();
        channel.post(Ping::One);
        channel.post(Ping::Two);
        drop(channel);

        let collected: Vec<Ping> = stream.collect().await;
        assert_eq!(collected, vec![Ping::One, Ping::Two]);
    }
}
