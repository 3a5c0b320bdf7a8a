//! Binding between the design view and the active edit context.
//!
//! # Swap protocol
//!
//! [`ContextBinding::set_context`] runs these steps in order:
//!
//! 1. observers see `context_changing` while the old context is still current
//! 2. the refresh handler is detached from the *stored* previous validation
//!    signals (never re-derived from the incoming context)
//! 3. the context reference is swapped
//! 4. the new context is queried for validation signals; absence is fine
//! 5. the refresh handler is attached to `cancelled` and `ended`
//! 6. observers see `context_changed` with the new context current
//!
//! The binding only holds weak references. Owners should still call
//! `set_context(None)` before tearing a context down.

use super::signal::{Handler, Signal};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Editable document or selection context supplied by the host.
pub trait EditContext {
    /// Validation capability of this context.
    ///
    /// Must hand out a shared handle (the same signals on every call); the
    /// binding keeps only a weak reference to it.
    fn validation(&self) -> Option<Rc<ValidationSignals>> {
        None
    }
}

/// Transaction lifecycle signals of a validating context.
#[derive(Debug, Default)]
pub struct ValidationSignals {
    began: Signal,
    cancelled: Signal,
    ended: Signal,
}

impl ValidationSignals {
    /// Signals with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raised when a validation starts.
    pub fn began(&self) -> &Signal {
        &self.began
    }

    /// Raised when a validation is abandoned.
    pub fn cancelled(&self) -> &Signal {
        &self.cancelled
    }

    /// Raised when a validation completes.
    pub fn ended(&self) -> &Signal {
        &self.ended
    }

    /// Raise `began`.
    pub fn begin(&self) {
        self.began.raise();
    }

    /// Raise `cancelled`.
    pub fn cancel(&self) {
        self.cancelled.raise();
    }

    /// Raise `ended`.
    pub fn end(&self) {
        self.ended.raise();
    }
}

/// Receives context swap notifications. Both methods default to no-ops.
pub trait ContextObserver {
    /// Called before the swap; `current` is the outgoing context.
    fn context_changing(&mut self, _current: Option<&Rc<dyn EditContext>>) {}

    /// Called after the swap; `current` is the incoming context.
    fn context_changed(&mut self, _current: Option<&Rc<dyn EditContext>>) {}
}

/// Registration handle returned by [`ContextBinding::add_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Tracks the active edit context and its validation subscription.
pub struct ContextBinding {
    context: Option<Weak<dyn EditContext>>,
    validation: Option<Weak<ValidationSignals>>,
    refresh: Handler,
    observers: Vec<(ObserverId, Box<dyn ContextObserver>)>,
    next_observer: u64,
}

impl ContextBinding {
    /// Create a binding that runs `refresh` when the bound context's
    /// validation is cancelled or ends.
    pub fn new(refresh: Handler) -> Self {
        Self {
            context: None,
            validation: None,
            refresh,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// The active context, if one is set and still alive.
    pub fn context(&self) -> Option<Rc<dyn EditContext>> {
        self.context.as_ref().and_then(Weak::upgrade)
    }

    /// Whether the refresh handler is currently attached to live signals.
    pub fn is_validating(&self) -> bool {
        self.validation
            .as_ref()
            .is_some_and(|signals| signals.strong_count() > 0)
    }

    /// Swap the active context. See the module docs for the exact order.
    pub fn set_context(&mut self, context: Option<Rc<dyn EditContext>>) {
        let outgoing = self.context();
        for (_, observer) in &mut self.observers {
            observer.context_changing(outgoing.as_ref());
        }
        drop(outgoing);

        self.detach();

        self.context = context.as_ref().map(Rc::downgrade);

        match context.as_ref().and_then(|ctx| ctx.validation()) {
            Some(signals) => {
                signals.cancelled().subscribe(&self.refresh);
                signals.ended().subscribe(&self.refresh);
                self.validation = Some(Rc::downgrade(&signals));
                debug!("Bound validation signals of new context");
            }
            None => {
                debug!(
                    has_context = context.is_some(),
                    "Context has no validation capability"
                );
            }
        }

        for (_, observer) in &mut self.observers {
            observer.context_changed(context.as_ref());
        }
    }

    /// Register a swap observer.
    pub fn add_observer(&mut self, observer: Box<dyn ContextObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Unregister a swap observer, handing it back.
    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn ContextObserver>> {
        let index = self.observers.iter().position(|(oid, _)| *oid == id)?;
        Some(self.observers.remove(index).1)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn detach(&mut self) {
        let Some(previous) = self.validation.take().and_then(|weak| weak.upgrade()) else {
            return;
        };
        previous.cancelled().unsubscribe(&self.refresh);
        previous.ended().unsubscribe(&self.refresh);
        debug!("Released validation signals of previous context");
    }
}

impl Drop for ContextBinding {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for ContextBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextBinding")
            .field("has_context", &self.context().is_some())
            .field("validating", &self.is_validating())
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
