#![forbid(unsafe_code)]

//! Change callbacks for selector state.
//!
//! [`Subscribers<T>`] keeps callbacks as weak references; the strong side is
//! owned by the [`Subscription`] guard handed back from `subscribe`. Dropping
//! the guard unsubscribes. Dead entries are pruned lazily on the next
//! `notify`.
//!
//! Callbacks run synchronously, in registration order, while the owning
//! model is mutably borrowed, so they observe the change but cannot call
//! back into the model.

use std::rc::{Rc, Weak};

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

/// A list of change callbacks.
pub struct Subscribers<T> {
    callbacks: Vec<CallbackWeak<T>>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }
}

impl<T> std::fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

impl<T: 'static> Subscribers<T> {
    /// Register `callback`; it stays registered while the guard lives.
    pub fn subscribe(&mut self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        self.callbacks.push(Rc::downgrade(&strong));
        // Rc<dyn Fn(&T)> cannot coerce to Rc<dyn Any>, so box the handle.
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Invoke every live callback with `value` and prune dead ones.
    pub fn notify(&mut self, value: &T) {
        self.callbacks.retain(|w| w.strong_count() > 0);
        let live: Vec<CallbackRc<T>> = self.callbacks.iter().filter_map(Weak::upgrade).collect();
        for callback in live {
            callback(value);
        }
    }

    /// Registered callbacks, including dead ones not yet pruned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

/// Guard returned by `subscribe`. Dropping it unsubscribes the callback.
#[must_use = "dropping the subscription unsubscribes the callback"]
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
