//! The store plus one filtered view per kind: what commands execute against.

use rhrh_core::{Comparator, DomainResult};

use crate::book::{RecordBook, Snapshot, Stored};
use crate::customer::Customer;
use crate::employee::Employee;
use crate::filtered::FilteredList;
use crate::reservation::Reservation;
use crate::supplier::Supplier;

/// A record kind with a filtered view in the [`ModelManager`].
pub trait Viewed: Stored {
    fn filtered(model: &ModelManager) -> &FilteredList<Self>;
}

macro_rules! impl_viewed {
    ($t:ty, $field:ident) => {
        impl Viewed for $t {
            fn filtered(model: &ModelManager) -> &FilteredList<Self> {
                &model.$field
            }
        }
    };
}

impl_viewed!(Customer, customers);
impl_viewed!(Employee, employees);
impl_viewed!(Supplier, suppliers);
impl_viewed!(Reservation, reservations);

/// In-memory model: a [`RecordBook`] and the live views the presentation layer
/// renders.
///
/// Views are wired to the book's lists once, in [`ModelManager::new`]; every
/// later mutation of the book (including a whole restore) reaches them through
/// change notification.
pub struct ModelManager {
    book: RecordBook,
    customers: FilteredList<Customer>,
    employees: FilteredList<Employee>,
    suppliers: FilteredList<Supplier>,
    reservations: FilteredList<Reservation>,
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(RecordBook::new())
    }
}

impl ModelManager {
    pub fn new(book: RecordBook) -> Self {
        let customers = FilteredList::new(book.entries::<Customer>().as_read_only());
        let employees = FilteredList::new(book.entries::<Employee>().as_read_only());
        let suppliers = FilteredList::new(book.entries::<Supplier>().as_read_only());
        let reservations = FilteredList::new(book.entries::<Reservation>().as_read_only());
        Self {
            book,
            customers,
            employees,
            suppliers,
            reservations,
        }
    }

    pub fn book(&self) -> &RecordBook {
        &self.book
    }

    // The book is never handed out mutably: replacing it would leave the views
    // subscribed to the old lists. Every mutation goes through these methods.

    pub fn add<T: Viewed>(&mut self, record: T) -> DomainResult<()> {
        self.book.add(record)
    }

    pub fn edit<T: Viewed>(&mut self, target: &T, replacement: T) -> DomainResult<()> {
        self.book.edit(target, replacement)
    }

    pub fn delete<T: Viewed>(&mut self, target: &T) -> DomainResult<()> {
        self.book.delete(target)
    }

    pub fn set_comparator<T: Viewed>(&mut self, comparator: Comparator<T>) {
        self.book.set_comparator(comparator);
    }

    pub fn reset_sort<T: Viewed>(&mut self) {
        self.book.reset_sort::<T>();
    }

    /// Empty every kind at once.
    pub fn clear(&mut self) {
        self.book.clear();
    }

    pub fn filtered<T: Viewed>(&self) -> &FilteredList<T> {
        T::filtered(self)
    }

    pub fn update_filter<T: Viewed>(&self, predicate: impl Fn(&T) -> bool + 'static) {
        T::filtered(self).apply_predicate(predicate);
    }

    pub fn show_all<T: Viewed>(&self) {
        T::filtered(self).show_all();
    }

    pub fn snapshot(&self) -> Snapshot {
        self.book.snapshot()
    }

    pub fn restore(&mut self, snapshot: Snapshot) -> DomainResult<()> {
        self.book.restore(snapshot)
    }
}

/// Equal when the books and every visible sequence are equal.
impl PartialEq for ModelManager {
    fn eq(&self, other: &Self) -> bool {
        self.book == other.book
            && *self.customers.items() == *other.customers.items()
            && *self.employees.items() == *other.employees.items()
            && *self.suppliers.items() == *other.suppliers.items()
            && *self.reservations.items() == *other.reservations.items()
    }
}

impl core::fmt::Debug for ModelManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelManager")
            .field("book", &self.book)
            .field("customers", &self.customers)
            .field("employees", &self.employees)
            .field("suppliers", &self.suppliers)
            .field("reservations", &self.reservations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{customer, reservation};
    use crate::record::ContainsKeywords;

    #[test]
    fn views_follow_book_mutations_and_restore() {
        let mut model = ModelManager::default();
        model.add(customer("Amy Bee", "111")).unwrap();
        assert_eq!(model.filtered::<Customer>().len(), 1);

        let mut snapshot = model.snapshot();
        snapshot.customers.push(customer("Bob Choo", "222"));
        snapshot.reservations.push(reservation("222", 3, "2021-10-30 1900"));
        model.restore(snapshot).unwrap();

        assert_eq!(model.filtered::<Customer>().len(), 2);
        assert_eq!(model.filtered::<Reservation>().len(), 1);
    }

    #[test]
    fn filters_are_per_kind() {
        let mut model = ModelManager::default();
        model.add(customer("Amy Bee", "111")).unwrap();
        model.add(customer("Bob Choo", "222")).unwrap();

        let amy = ContainsKeywords::new(["amy"]);
        model.update_filter(move |c: &Customer| amy.test(c));
        assert_eq!(model.filtered::<Customer>().len(), 1);
        assert_eq!(model.book().entries::<Customer>().len(), 2);

        model.show_all::<Customer>();
        assert_eq!(model.filtered::<Customer>().len(), 2);
    }

    #[test]
    fn views_stay_attached_through_every_mutation() {
        let mut model = ModelManager::default();
        let in_sync = |m: &ModelManager| {
            assert_eq!(
                m.filtered::<Customer>().len(),
                m.book().entries::<Customer>().len(),
                "customer view detached from book"
            );
        };

        model.add(customer("Amy Bee", "111")).unwrap();
        in_sync(&model);

        let mut other = RecordBook::new();
        other.add(customer("Bob Choo", "222")).unwrap();
        other.add(customer("Cat Lim", "333")).unwrap();
        model.restore(other.snapshot()).unwrap();
        in_sync(&model);

        model.add(customer("Dan Ong", "444")).unwrap();
        in_sync(&model);
        assert_eq!(model.filtered::<Customer>().len(), 3);

        model
            .edit(&customer("Dan Ong", "444"), customer("Dan Tan", "444"))
            .unwrap();
        model.delete(&customer("Bob Choo", "222")).unwrap();
        in_sync(&model);

        model.clear();
        in_sync(&model);
        assert!(model.filtered::<Customer>().is_empty());
    }

    #[test]
    fn equality_considers_visible_sequences() {
        let mut a = ModelManager::default();
        let mut b = ModelManager::default();
        a.add(customer("Amy Bee", "111")).unwrap();
        b.add(customer("Amy Bee", "111")).unwrap();
        assert_eq!(a, b);

        b.update_filter(|_: &Customer| false);
        assert_ne!(a, b);
    }
}
