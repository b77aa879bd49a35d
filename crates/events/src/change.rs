/// A structural change to an observable list.
///
/// Notifications are published after the change is fully applied (including the
/// re-sort that follows every membership change), so an observer reading the
/// list from inside its callback always sees the final state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ListChange {
    /// One element was inserted.
    Added,
    /// One element was replaced in place.
    Replaced,
    /// One element was removed.
    Removed,
    /// The whole content was replaced.
    Reset,
    /// Only the order changed (new comparator).
    Reordered,
    /// A filtered view switched predicate.
    Refiltered,
}

impl ListChange {
    /// Whether the change can alter which elements are present.
    pub fn alters_membership(self) -> bool {
        !matches!(self, ListChange::Reordered)
    }
}
