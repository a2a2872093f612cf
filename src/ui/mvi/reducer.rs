//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// Output of a single reduction step.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction<S, E> {
    /// The state that replaces the previous one.
    pub state: S,
    /// Effect to post after the state has been published.
    pub effect: Option<E>,
}

impl<S, E> Reduction<S, E> {
    /// A transition with no effect.
    pub fn state(state: S) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    /// A transition that also posts `effect`.
    pub fn with_effect(state: S, effect: E) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effect?)
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The effect type this reducer may emit.
    type Effect: Effect;

    /// Process an intent and return the new state plus an optional effect.
    ///
    /// This should be a pure function with no side effects; posting the
    /// effect is the store's job.
    fn reduce(state: Self::State, intent: Self::Intent) -> Reduction<Self::State, Self::Effect>;
}
