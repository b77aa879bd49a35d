//! Duplicate-free, sorted, observable record collection.
//!
//! One generic container serves every record kind. Uniqueness is checked with
//! the kind's weak identity ([`Entity::is_same`]); removal and replacement look
//! the target up by strong equality (`PartialEq`), so a record that merely
//! *represents* the same entity is never removed by accident.
//!
//! Every successful mutation re-sorts with the active comparator and then
//! notifies observers of the [`ReadOnlyList`] projection.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use rhrh_core::{Comparator, DomainError, DomainResult, Entity};
use rhrh_events::{ChangeNotifier, ListChange, Subscription};

struct Shared<T> {
    items: RefCell<Vec<T>>,
    notifier: ChangeNotifier<ListChange>,
}

impl<T> Shared<T> {
    fn new(items: Vec<T>) -> Rc<Self> {
        Rc::new(Self {
            items: RefCell::new(items),
            notifier: ChangeNotifier::default(),
        })
    }
}

/// Ordered record list; no two elements are weakly identical (for kinds with
/// `Entity::UNIQUE`).
pub struct UniqueEntityList<T: Entity> {
    shared: Rc<Shared<T>>,
    comparator: Comparator<T>,
    default_comparator: Comparator<T>,
}

impl<T: Entity> UniqueEntityList<T> {
    pub fn new(default_comparator: Comparator<T>) -> Self {
        Self {
            shared: Shared::new(Vec::new()),
            comparator: default_comparator.clone(),
            default_comparator,
        }
    }

    /// Whether some stored element is weakly identical to `entity`.
    pub fn contains(&self, entity: &T) -> bool {
        self.shared.items.borrow().iter().any(|e| e.is_same(entity))
    }

    /// First stored element matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.shared.items.borrow().iter().find(|e| predicate(e)).cloned()
    }

    pub fn add(&mut self, entity: T) -> DomainResult<()> {
        if T::UNIQUE && self.contains(&entity) {
            return Err(DomainError::duplicate(T::KIND));
        }
        self.mutate(ListChange::Added, |items| items.push(entity));
        Ok(())
    }

    /// Replace `target` (located by strong equality) with `replacement`.
    ///
    /// `replacement` may be weakly identical to `target` itself; it must not be
    /// weakly identical to any other stored element.
    pub fn set_entity(&mut self, target: &T, replacement: T) -> DomainResult<()> {
        let index = self.position(target).ok_or(DomainError::not_found(T::KIND))?;

        if T::UNIQUE {
            let collides = self
                .shared
                .items
                .borrow()
                .iter()
                .enumerate()
                .any(|(i, e)| i != index && e.is_same(&replacement));
            if collides {
                return Err(DomainError::duplicate(T::KIND));
            }
        }

        self.mutate(ListChange::Replaced, |items| items[index] = replacement);
        Ok(())
    }

    /// Remove the element strongly equal to `entity`.
    pub fn remove(&mut self, entity: &T) -> DomainResult<()> {
        let index = self.position(entity).ok_or(DomainError::not_found(T::KIND))?;
        self.mutate(ListChange::Removed, |items| {
            items.remove(index);
        });
        Ok(())
    }

    /// Replace the whole content with `entities`.
    pub fn set_all(&mut self, entities: Vec<T>) -> DomainResult<()> {
        Self::check_unique(&entities)?;
        self.mutate(ListChange::Reset, |items| *items = entities);
        Ok(())
    }

    /// Remove every element. Cannot fail: an empty list is trivially unique.
    pub fn clear(&mut self) {
        self.mutate(ListChange::Reset, Vec::clear);
    }

    /// Fails if `entities` holds two weakly identical elements (pairwise check).
    pub fn check_unique(entities: &[T]) -> DomainResult<()> {
        if !T::UNIQUE {
            return Ok(());
        }
        for (i, a) in entities.iter().enumerate() {
            if entities[i + 1..].iter().any(|b| a.is_same(b)) {
                return Err(DomainError::duplicate(T::KIND));
            }
        }
        Ok(())
    }

    /// Change presentation order. Membership is untouched.
    pub fn set_comparator(&mut self, comparator: Comparator<T>) {
        self.comparator = comparator;
        self.mutate(ListChange::Reordered, |_| {});
    }

    pub fn reset_sort_to_default(&mut self) {
        self.set_comparator(self.default_comparator.clone());
    }

    /// Live, read-only view of this list.
    pub fn as_read_only(&self) -> ReadOnlyList<T> {
        ReadOnlyList {
            shared: Rc::clone(&self.shared),
        }
    }

    pub fn len(&self) -> usize {
        self.shared.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.shared.items.borrow().clone()
    }

    fn position(&self, entity: &T) -> Option<usize> {
        self.shared.items.borrow().iter().position(|e| e == entity)
    }

    /// Apply `change`, re-sort, then notify. Observers never see the list
    /// between the two steps.
    fn mutate(&mut self, change: ListChange, apply: impl FnOnce(&mut Vec<T>)) {
        {
            let mut items = self.shared.items.borrow_mut();
            apply(&mut *items);
            let comparator = &self.comparator;
            items.sort_by(|a, b| comparator.compare(a, b));
            tracing::trace!(kind = %T::KIND, ?change, len = items.len(), "list mutated");
        }
        self.shared.notifier.publish(&change);
    }
}

/// Deep copy with the same comparators and no observers.
impl<T: Entity> Clone for UniqueEntityList<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Shared::new(self.to_vec()),
            comparator: self.comparator.clone(),
            default_comparator: self.default_comparator.clone(),
        }
    }
}

impl<T: Entity> PartialEq for UniqueEntityList<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.shared.items.borrow() == *other.shared.items.borrow()
    }
}

impl<T: Entity> core::fmt::Debug for UniqueEntityList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.shared.items.borrow().iter()).finish()
    }
}

/// Read-only reactive projection of a [`UniqueEntityList`].
///
/// Cheap to clone; every clone observes the same backing list, so structural
/// changes are visible without re-fetching.
pub struct ReadOnlyList<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for ReadOnlyList<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: Clone + 'static> ReadOnlyList<T> {
    /// Borrow the current elements. Do not hold across a mutation.
    pub fn items(&self) -> Ref<'_, [T]> {
        Ref::map(self.shared.items.borrow(), Vec::as_slice)
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.shared.items.borrow().get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.shared.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.shared.items.borrow().clone()
    }

    /// Register for change notifications; called after each mutation.
    pub fn subscribe(&self, listener: impl Fn(&ListChange) + 'static) -> Subscription<ListChange> {
        self.shared.notifier.subscribe(listener)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for ReadOnlyList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.shared.items.borrow().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::Customer;
    use crate::employee::{Employee, EmployeeSortKey};
    use crate::fields::{Address, Name};
    use crate::fixtures::{customer, employee, reservation};
    use crate::record::Record;
    use crate::reservation::Reservation;
    use rhrh_core::SortOrder;
    use std::cell::RefCell;

    fn customers() -> UniqueEntityList<Customer> {
        UniqueEntityList::new(Customer::default_comparator())
    }

    fn employees() -> UniqueEntityList<Employee> {
        UniqueEntityList::new(Employee::default_comparator())
    }

    fn names(list: &UniqueEntityList<Customer>) -> Vec<String> {
        list.to_vec().iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn contains_uses_weak_identity() {
        let mut list = customers();
        list.add(customer("Amy Bee", "91234567")).unwrap();

        assert!(list.contains(&customer("Someone Else", "91234567")));
        assert!(!list.contains(&customer("Amy Bee", "11111111")));
    }

    #[test]
    fn add_rejects_second_customer_with_same_phone() {
        let mut list = customers();
        list.add(customer("Amy Bee", "91234567")).unwrap();

        let err = list.add(customer("Bob Choo", "91234567")).unwrap_err();
        assert_eq!(err, DomainError::DuplicateEntity(rhrh_core::EntityKind::Customer));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_keeps_list_sorted() {
        let mut list = customers();
        list.add(customer("Carol", "333")).unwrap();
        list.add(customer("alice", "111")).unwrap();
        list.add(customer("Bob", "222")).unwrap();

        assert_eq!(names(&list), vec!["alice", "Bob", "Carol"]);
    }

    #[test]
    fn set_entity_allows_editing_own_identity() {
        let mut list = customers();
        let amy = customer("Amy Bee", "91234567");
        list.add(amy.clone()).unwrap();

        let renamed = amy.clone().with_name(Name::new("Amy Tan").unwrap());
        list.set_entity(&amy, renamed.clone()).unwrap();

        assert_eq!(list.to_vec(), vec![renamed]);
    }

    #[test]
    fn set_entity_rejects_collision_with_other_element() {
        let mut list = customers();
        let amy = customer("Amy Bee", "111");
        let bob = customer("Bob Choo", "222");
        list.add(amy.clone()).unwrap();
        list.add(bob.clone()).unwrap();

        let err = list
            .set_entity(&amy, amy.clone().with_phone(bob.phone().clone()))
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateEntity(_)));
        assert_eq!(list.to_vec(), vec![amy, bob]);
    }

    #[test]
    fn set_entity_requires_exact_target() {
        let mut list = customers();
        let amy = customer("Amy Bee", "111");
        list.add(amy.clone()).unwrap();

        let stale = amy.clone().with_address(Address::new("Elsewhere").unwrap());
        let err = list.set_entity(&stale, amy.clone()).unwrap_err();
        assert!(matches!(err, DomainError::EntityNotFound(_)));
    }

    #[test]
    fn set_entity_after_target_removed_is_not_found() {
        let mut list = customers();
        let amy = customer("Amy Bee", "111");
        list.add(amy.clone()).unwrap();
        list.remove(&amy).unwrap();

        let err = list.set_entity(&amy, amy.clone()).unwrap_err();
        assert!(matches!(err, DomainError::EntityNotFound(_)));
        assert!(list.is_empty());
    }

    #[test]
    fn remove_requires_strong_equality() {
        let mut list = customers();
        let amy = customer("Amy Bee", "111");
        list.add(amy.clone()).unwrap();

        let lookalike = amy.clone().with_address(Address::new("Different Road").unwrap());
        assert!(list.contains(&lookalike));
        let err = list.remove(&lookalike).unwrap_err();
        assert!(matches!(err, DomainError::EntityNotFound(_)));

        list.remove(&amy).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn set_all_rejects_internal_duplicates_without_mutating() {
        let mut list = customers();
        list.add(customer("Keep Me", "999")).unwrap();

        let err = list
            .set_all(vec![customer("Amy", "111"), customer("Bob", "111")])
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateEntity(_)));
        assert_eq!(names(&list), vec!["Keep Me"]);

        list.set_all(vec![customer("Zed", "100"), customer("Amy", "200")]).unwrap();
        assert_eq!(names(&list), vec!["Amy", "Zed"]);
    }

    #[test]
    fn clear_empties_and_publishes_reset() {
        let mut list = customers();
        list.add(customer("Amy", "111")).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = list
            .as_read_only()
            .subscribe(move |change| sink.borrow_mut().push(*change));

        list.clear();

        assert!(list.is_empty());
        assert_eq!(*seen.borrow(), [ListChange::Reset]);
        list.add(customer("Amy", "111")).unwrap();
        assert_eq!(names(&list), vec!["Amy"]);
    }

    #[test]
    fn reservations_allow_weakly_identical_entries() {
        let mut list = UniqueEntityList::<Reservation>::new(Reservation::default_comparator());
        let r = reservation("91234567", 2, "2021-12-24 2000");
        list.add(r.clone()).unwrap();
        list.add(r.clone().with_number_of_people(4)).unwrap();
        list.add(r.clone()).unwrap();
        assert_eq!(list.len(), 3);

        list.remove(&r).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn comparator_change_reorders_without_membership_change() {
        let mut list = employees();
        let a = employee("Alice", "111", 1000);
        let b = employee("Bob", "222", 2000);
        list.set_comparator(Employee::comparator(EmployeeSortKey::Salary, SortOrder::Ascending));
        list.add(b.clone()).unwrap();
        list.add(a.clone()).unwrap();
        assert_eq!(list.to_vec(), vec![a.clone(), b.clone()]);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let _sub = list.as_read_only().subscribe(move |c| log.borrow_mut().push(*c));

        list.set_comparator(Employee::comparator(EmployeeSortKey::Salary, SortOrder::Descending));
        assert_eq!(list.to_vec(), vec![b.clone(), a.clone()]);
        assert_eq!(*seen.borrow(), vec![ListChange::Reordered]);
        assert!(seen.borrow().iter().all(|c| !c.alters_membership()));

        list.reset_sort_to_default();
        assert_eq!(list.to_vec(), vec![a, b]);
    }

    #[test]
    fn read_only_projection_is_live() {
        let mut list = customers();
        let view = list.as_read_only();
        assert!(view.is_empty());

        list.add(customer("Amy", "111")).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.get(0).unwrap().name().as_str(), "Amy");
    }

    #[test]
    fn observers_see_final_sorted_state() {
        let mut list = customers();
        list.add(customer("Bob", "222")).unwrap();
        let view = list.as_read_only();

        let observed = Rc::new(RefCell::new(Vec::new()));
        let (log, reader) = (Rc::clone(&observed), view.clone());
        let _sub = view.subscribe(move |_| {
            let first = reader.items()[0].name().to_string();
            log.borrow_mut().push(first);
        });

        list.add(customer("Amy", "111")).unwrap();
        assert_eq!(*observed.borrow(), vec!["Amy".to_string()]);
    }

    #[test]
    fn failed_mutations_do_not_notify() {
        let mut list = customers();
        let amy = customer("Amy", "111");
        list.add(amy.clone()).unwrap();

        let hits = Rc::new(RefCell::new(0));
        let h = Rc::clone(&hits);
        let _sub = list.as_read_only().subscribe(move |_| *h.borrow_mut() += 1);

        let _ = list.add(amy.clone());
        let _ = list.remove(&customer("Nobody", "000"));
        let _ = list.set_all(vec![amy.clone(), amy]);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn clone_is_detached_from_source() {
        let mut list = customers();
        list.add(customer("Amy", "111")).unwrap();
        let copy = list.clone();

        list.add(customer("Bob", "222")).unwrap();
        assert_eq!(copy.len(), 1);
        assert_ne!(copy, list);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(usize, usize),
            Edit(usize, usize, usize),
            Remove(usize),
            SetAll(Vec<(usize, usize)>),
        }

        const NAMES: [&str; 4] = ["Amy", "Bob", "Carol", "Dan"];
        const PHONES: [&str; 4] = ["111", "222", "333", "444"];

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0..4usize, 0..4usize).prop_map(|(n, p)| Op::Add(n, p)),
                (0..8usize, 0..4usize, 0..4usize).prop_map(|(i, n, p)| Op::Edit(i, n, p)),
                (0..8usize).prop_map(Op::Remove),
                proptest::collection::vec((0..4usize, 0..4usize), 0..5).prop_map(Op::SetAll),
            ]
        }

        fn build(n: usize, p: usize) -> Customer {
            customer(NAMES[n], PHONES[p])
        }

        proptest! {
            /// Property: no observable state holds two weakly identical customers,
            /// and the list is always sorted by the active comparator.
            #[test]
            fn uniqueness_and_order_hold(ops in proptest::collection::vec(op(), 1..40)) {
                let mut list = customers();
                let cmp = Customer::default_comparator();

                for op in ops {
                    let _ = match op {
                        Op::Add(n, p) => list.add(build(n, p)),
                        Op::Edit(i, n, p) => match list.to_vec().get(i).cloned() {
                            Some(target) => list.set_entity(&target, build(n, p)),
                            None => Ok(()),
                        },
                        Op::Remove(i) => match list.to_vec().get(i).cloned() {
                            Some(target) => list.remove(&target),
                            None => Ok(()),
                        },
                        Op::SetAll(entries) => {
                            list.set_all(entries.into_iter().map(|(n, p)| build(n, p)).collect())
                        }
                    };

                    let items = list.to_vec();
                    prop_assert!(UniqueEntityList::check_unique(&items).is_ok());
                    prop_assert!(items.windows(2).all(|w| cmp.compare(&w[0], &w[1]).is_le()));
                }
            }
        }
    }
}
