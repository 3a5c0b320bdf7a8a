//! Parameterless multicast signal.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared callback attached to a [`Signal`].
///
/// Handlers are compared by pointer identity, so the same `Rc` must be used to
/// unsubscribe as was used to subscribe.
pub type Handler = Rc<dyn Fn()>;

/// A list of handlers invoked in subscription order.
///
/// Subscribing the same handler twice attaches it twice, and each
/// [`unsubscribe`](Signal::unsubscribe) removes one attachment. Callers that
/// must not double-subscribe track that themselves.
#[derive(Default)]
pub struct Signal {
    handlers: RefCell<Vec<Handler>>,
}

impl Signal {
    /// A signal with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler`.
    pub fn subscribe(&self, handler: &Handler) {
        self.handlers.borrow_mut().push(Rc::clone(handler));
    }

    /// Detach the most recent attachment of `handler`.
    ///
    /// Returns `false` if it was not attached.
    pub fn unsubscribe(&self, handler: &Handler) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        match handlers.iter().rposition(|h| Rc::ptr_eq(h, handler)) {
            Some(index) => {
                handlers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of attached handlers.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Invoke every attached handler.
    ///
    /// The list is snapshotted first, so handlers may subscribe or
    /// unsubscribe while the signal is being raised.
    pub fn raise(&self) {
        let handlers = self.handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
