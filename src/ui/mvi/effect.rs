//! Base trait for one-shot effects in MVI architecture.

use std::fmt::Debug;

/// Marker trait for effect objects.
///
/// Effects are commands the view layer must carry out (navigation,
/// launching a system dialog). Unlike state they are not stored: each
/// one is delivered to the subscribers present when it is posted and
/// then forgotten.
pub trait Effect: Clone + Debug + Send + 'static {}
