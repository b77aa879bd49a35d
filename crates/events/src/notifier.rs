//! Synchronous observer registry.
//!
//! - No IO / no threads
//! - Listeners run on the mutating thread, in registration order
//! - Dropping a [`Subscription`] unregisters its listener

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<M> = dyn Fn(&M);

/// Handle keeping a listener registered.
///
/// The notifier only holds a weak reference; once every handle is dropped, the
/// listener is pruned on the next publish.
#[must_use = "dropping a subscription unregisters its listener"]
pub struct Subscription<M> {
    _listener: Rc<Listener<M>>,
}

impl<M> core::fmt::Debug for Subscription<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Fan-out of change messages to registered listeners.
pub struct ChangeNotifier<M> {
    subscribers: RefCell<Vec<Weak<Listener<M>>>>,
}

impl<M> Default for ChangeNotifier<M> {
    fn default() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
        }
    }
}

impl<M> core::fmt::Debug for ChangeNotifier<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

impl<M: 'static> ChangeNotifier<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&M) + 'static) -> Subscription<M> {
        let listener: Rc<Listener<M>> = Rc::new(listener);
        self.subscribers.borrow_mut().push(Rc::downgrade(&listener));
        Subscription {
            _listener: listener,
        }
    }

    /// Deliver `message` to every live listener.
    ///
    /// The registry is not borrowed while listeners run, so a listener may read
    /// the publisher or subscribe new listeners (those see the next message).
    pub fn publish(&self, message: &M) {
        let live: Vec<Rc<Listener<M>>> = {
            let mut subs = self.subscribers.borrow_mut();
            // Drop any dead subscribers while publishing.
            subs.retain(|weak| weak.strong_count() > 0);
            subs.iter().filter_map(Weak::upgrade).collect()
        };

        tracing::trace!(listeners = live.len(), "publishing list change");
        for listener in live {
            listener(message);
        }
    }

    /// Number of listeners whose subscription is still held.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}
