//! Change notification for reactive record lists.
//!
//! Lists publish a [`ListChange`] after every structural mutation; observers
//! register through a [`ChangeNotifier`] and stay registered for as long as they
//! hold the returned [`Subscription`].

pub mod change;
pub mod notifier;

pub use change::ListChange;
pub use notifier::{ChangeNotifier, Subscription};
