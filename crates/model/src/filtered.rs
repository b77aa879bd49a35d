//! Predicate-gated live projection of a record list.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use rhrh_core::Index;
use rhrh_events::{ChangeNotifier, ListChange, Subscription};

use crate::unique_list::ReadOnlyList;

type Predicate<T> = Rc<dyn Fn(&T) -> bool>;

struct FilterState<T> {
    predicate: Predicate<T>,
    visible: Vec<T>,
}

struct FilterShared<T> {
    state: RefCell<FilterState<T>>,
    notifier: ChangeNotifier<ListChange>,
}

impl<T: Clone + 'static> FilterShared<T> {
    fn refresh(&self, source: &ReadOnlyList<T>) {
        let predicate = Rc::clone(&self.state.borrow().predicate);
        let visible: Vec<T> = source.items().iter().filter(|e| predicate(*e)).cloned().collect();
        self.state.borrow_mut().visible = visible;
    }
}

/// Elements of a backing list that satisfy the active predicate, in the backing
/// list's order.
///
/// The view subscribes to the backing list once, at construction, and
/// recomputes on every change it is notified of. Filtering never re-sorts.
pub struct FilteredList<T> {
    source: ReadOnlyList<T>,
    shared: Rc<FilterShared<T>>,
    _upstream: Subscription<ListChange>,
}

impl<T: Clone + 'static> FilteredList<T> {
    /// A view showing every element of `source`.
    pub fn new(source: ReadOnlyList<T>) -> Self {
        let shared = Rc::new(FilterShared {
            state: RefCell::new(FilterState {
                predicate: Rc::new(|_: &T| true),
                visible: source.to_vec(),
            }),
            notifier: ChangeNotifier::default(),
        });

        let weak: Weak<FilterShared<T>> = Rc::downgrade(&shared);
        let reader = source.clone();
        let upstream = source.subscribe(move |change| {
            if let Some(shared) = weak.upgrade() {
                shared.refresh(&reader);
                shared.notifier.publish(change);
            }
        });

        Self {
            source,
            shared,
            _upstream: upstream,
        }
    }

    /// Replace the predicate; the visible sequence updates immediately.
    pub fn apply_predicate(&self, predicate: impl Fn(&T) -> bool + 'static) {
        self.shared.state.borrow_mut().predicate = Rc::new(predicate);
        self.shared.refresh(&self.source);
        self.shared.notifier.publish(&ListChange::Refiltered);
    }

    /// Reset to the always-true predicate.
    pub fn show_all(&self) {
        self.apply_predicate(|_| true);
    }

    pub fn items(&self) -> Ref<'_, [T]> {
        Ref::map(self.shared.state.borrow(), |s| s.visible.as_slice())
    }

    pub fn get(&self, index: Index) -> Option<T> {
        self.shared.state.borrow().visible.get(index.zero_based()).cloned()
    }

    pub fn len(&self) -> usize {
        self.shared.state.borrow().visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.shared.state.borrow().visible.clone()
    }

    /// Register for notifications: every upstream change is forwarded after
    /// the view has been recomputed; predicate changes publish
    /// [`ListChange::Refiltered`].
    pub fn subscribe(&self, listener: impl Fn(&ListChange) + 'static) -> Subscription<ListChange> {
        self.shared.notifier.subscribe(listener)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for FilteredList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.shared.state.borrow().visible.iter())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::{Customer, CustomerSortKey};
    use crate::fixtures::customer;
    use crate::record::{ContainsKeywords, Record};
    use crate::unique_list::UniqueEntityList;
    use rhrh_core::SortOrder;

    fn names(view: &FilteredList<Customer>) -> Vec<String> {
        view.items().iter().map(|c| c.name().to_string()).collect()
    }

    fn seeded() -> UniqueEntityList<Customer> {
        let mut list = UniqueEntityList::new(Customer::default_comparator());
        list.set_all(vec![
            customer("Carol Tan", "333"),
            customer("Alice Tan", "111"),
            customer("Bob Lim", "222"),
        ])
        .unwrap();
        list
    }

    #[test]
    fn starts_with_everything_visible() {
        let list = seeded();
        let view = FilteredList::new(list.as_read_only());
        assert_eq!(names(&view), vec!["Alice Tan", "Bob Lim", "Carol Tan"]);
    }

    #[test]
    fn predicate_filters_in_backing_order() {
        let list = seeded();
        let view = FilteredList::new(list.as_read_only());
        let tan = ContainsKeywords::new(["tan"]);

        view.apply_predicate(move |c: &Customer| tan.test(c));
        assert_eq!(names(&view), vec!["Alice Tan", "Carol Tan"]);

        view.show_all();
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn view_tracks_backing_mutations_without_resubscribing() {
        let mut list = seeded();
        let view = FilteredList::new(list.as_read_only());
        let tan = ContainsKeywords::new(["tan"]);
        view.apply_predicate(move |c: &Customer| tan.test(c));

        list.add(customer("Ben Tan", "444")).unwrap();
        list.add(customer("Zed Koh", "555")).unwrap();
        assert_eq!(names(&view), vec!["Alice Tan", "Ben Tan", "Carol Tan"]);

        list.remove(&customer("Alice Tan", "111")).unwrap();
        assert_eq!(names(&view), vec!["Ben Tan", "Carol Tan"]);
    }

    #[test]
    fn comparator_change_keeps_visible_set() {
        let mut list = seeded();
        let view = FilteredList::new(list.as_read_only());
        let tan = ContainsKeywords::new(["tan"]);
        view.apply_predicate(move |c: &Customer| tan.test(c));

        list.set_comparator(Customer::comparator(CustomerSortKey::Name, SortOrder::Descending));
        assert_eq!(names(&view), vec!["Carol Tan", "Alice Tan"]);
    }

    #[test]
    fn forwards_changes_after_recomputing() {
        let mut list = seeded();
        let view = Rc::new(FilteredList::new(list.as_read_only()));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let (log, reader) = (Rc::clone(&seen), Rc::downgrade(&view));
        let _sub = view.subscribe(move |change| {
            let len = reader.upgrade().map(|v| v.len()).unwrap_or_default();
            log.borrow_mut().push((*change, len));
        });

        list.add(customer("Dan", "444")).unwrap();
        view.apply_predicate(|c: &Customer| c.name().as_str() == "Dan");

        assert_eq!(
            *seen.borrow(),
            vec![(ListChange::Added, 4), (ListChange::Refiltered, 1)]
        );
    }

    #[test]
    fn dropping_view_releases_upstream_subscription() {
        let mut list = seeded();
        let view = FilteredList::new(list.as_read_only());
        drop(view);
        list.add(customer("Dan", "444")).unwrap();
        assert_eq!(list.len(), 4);
    }
}
