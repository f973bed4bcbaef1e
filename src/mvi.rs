//! Intent/reducer/snapshot plumbing behind the directory state manager.
//!
//! ```text
//! intent ──→ reduce(state, intent) ──→ snapshot ──→ derived view
//! ```

/// A user action or an I/O outcome fed to a [`Reducer`].
pub trait Intent: Send + 'static {}

/// Value state owned by a manager. Cloned out to readers, never shared.
pub trait Snapshot: Clone + PartialEq + Default + Send + 'static {}

/// The single place where a snapshot changes.
///
/// `reduce` performs no I/O; effects happen in the caller before or after.
pub trait Reducer {
    type State: Snapshot;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Folds a batch of intents over `state` in order.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
