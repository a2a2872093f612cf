//! State store: single writer for a reducer's state.

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use super::channel::{EventChannel, EventStream};
use super::reducer::Reducer;

/// Owns the current state of a reducer and the effect channel it feeds.
///
/// All writes go through [`Store::dispatch`]; observers only ever get
/// read handles. Subscribers are notified only when a dispatch actually
/// changes the state.
pub struct Store<R: Reducer> {
    state: watch::Sender<R::State>,
    events: EventChannel<R::Effect>,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the default state.
    pub fn new(event_capacity: usize) -> Self {
        Self::with_state(R::State::default(), event_capacity)
    }

    /// Create a store starting from `initial`.
    pub fn with_state(initial: R::State, event_capacity: usize) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            state,
            events: EventChannel::new(event_capacity),
        }
    }

    /// Run `intent` through the reducer, publish the new state, then post
    /// the resulting effect if there is one.
    pub fn dispatch(&self, intent: R::Intent) {
        tracing::debug!(?intent, "dispatch");
        let mut effect = None;
        self.state.send_if_modified(|state| {
            let reduction = R::reduce(state.clone(), intent);
            effect = reduction.effect;
            if *state == reduction.state {
                return false;
            }
            tracing::debug!(from = ?state, to = ?reduction.state, "state transition");
            *state = reduction.state;
            true
        });

        if let Some(effect) = effect {
            self.events.post(effect);
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Observe the state, starting from the current value.
    pub fn subscribe_state(&self) -> StateStream<R::State> {
        let mut receiver = self.state.subscribe();
        receiver.mark_changed();
        StateStream { receiver }
    }

    /// Observe effects posted from now on.
    pub fn subscribe_events(&self) -> EventStream<R::Effect> {
        self.events.subscribe()
    }

    pub fn event_subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }
}

/// Hot view of a store's state.
///
/// The first read yields the value current at subscribe time; later reads
/// yield each published change. Changes published between two reads are
/// coalesced into the latest one.
pub struct StateStream<S> {
    receiver: watch::Receiver<S>,
}

impl<S: Clone + Send + Sync + 'static> StateStream<S> {
    /// Wait for the next unseen state. `None` once the store is dropped.
    pub async fn next(&mut self) -> Option<S> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Take the next unseen state if there is one.
    pub fn try_next(&mut self) -> Option<S> {
        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    /// Latest state without marking it seen.
    pub fn current(&self) -> S {
        self.receiver.borrow().clone()
    }

    /// Adapt into a [`Stream`] that starts with the latest value.
    pub fn into_stream(self) -> impl Stream<Item = S> {
        WatchStream::from_changes(self.receiver)
    }
}
