//! Aggregate store: one record list per kind, plus cross-kind lookups.

use serde::{Deserialize, Serialize};

use rhrh_core::{Comparator, DomainResult};

use crate::customer::Customer;
use crate::employee::Employee;
use crate::fields::Phone;
use crate::record::Record;
use crate::reservation::Reservation;
use crate::supplier::Supplier;
use crate::unique_list::UniqueEntityList;

/// Immutable copy of every record, in presentation order.
///
/// This is the unit handed to and received from persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

/// A record kind held by the [`RecordBook`].
pub trait Stored: Record {
    fn entries(book: &RecordBook) -> &UniqueEntityList<Self>;
    fn entries_mut(book: &mut RecordBook) -> &mut UniqueEntityList<Self>;
}

macro_rules! impl_stored {
    ($t:ty, $field:ident) => {
        impl Stored for $t {
            fn entries(book: &RecordBook) -> &UniqueEntityList<Self> {
                &book.$field
            }

            fn entries_mut(book: &mut RecordBook) -> &mut UniqueEntityList<Self> {
                &mut book.$field
            }
        }
    };
}

impl_stored!(Customer, customers);
impl_stored!(Employee, employees);
impl_stored!(Supplier, suppliers);
impl_stored!(Reservation, reservations);

/// Owns the four record lists.
///
/// Reservations hold a customer phone by value; the book does not require that
/// a customer with that phone exists.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordBook {
    customers: UniqueEntityList<Customer>,
    employees: UniqueEntityList<Employee>,
    suppliers: UniqueEntityList<Supplier>,
    reservations: UniqueEntityList<Reservation>,
}

impl Default for RecordBook {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBook {
    pub fn new() -> Self {
        Self {
            customers: UniqueEntityList::new(Customer::default_comparator()),
            employees: UniqueEntityList::new(Employee::default_comparator()),
            suppliers: UniqueEntityList::new(Supplier::default_comparator()),
            reservations: UniqueEntityList::new(Reservation::default_comparator()),
        }
    }

    pub fn from_snapshot(snapshot: Snapshot) -> DomainResult<Self> {
        let mut book = Self::new();
        book.restore(snapshot)?;
        Ok(book)
    }

    pub fn entries<T: Stored>(&self) -> &UniqueEntityList<T> {
        T::entries(self)
    }

    /// Whether a weakly identical record of the same kind is stored.
    pub fn has<T: Stored>(&self, record: &T) -> bool {
        T::entries(self).contains(record)
    }

    pub fn add<T: Stored>(&mut self, record: T) -> DomainResult<()> {
        T::entries_mut(self).add(record)
    }

    pub fn edit<T: Stored>(&mut self, target: &T, replacement: T) -> DomainResult<()> {
        T::entries_mut(self).set_entity(target, replacement)
    }

    pub fn delete<T: Stored>(&mut self, target: &T) -> DomainResult<()> {
        T::entries_mut(self).remove(target)
    }

    pub fn set_comparator<T: Stored>(&mut self, comparator: Comparator<T>) {
        T::entries_mut(self).set_comparator(comparator);
    }

    pub fn reset_sort<T: Stored>(&mut self) {
        T::entries_mut(self).reset_sort_to_default();
    }

    pub fn has_customer_with_phone(&self, phone: &Phone) -> bool {
        self.customer_by_phone(phone).is_some()
    }

    pub fn customer_by_phone(&self, phone: &Phone) -> Option<Customer> {
        self.customers.find(|c| c.phone() == phone)
    }

    pub fn reservations_for(&self, phone: &Phone) -> Vec<Reservation> {
        self.reservations
            .to_vec()
            .into_iter()
            .filter(|r| r.phone() == phone)
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            customers: self.customers.to_vec(),
            employees: self.employees.to_vec(),
            suppliers: self.suppliers.to_vec(),
            reservations: self.reservations.to_vec(),
        }
    }

    /// Replace every list from `snapshot`, all or nothing.
    ///
    /// Each kind is checked for weak-identity duplicates before any list is
    /// touched; existing list instances are reused so live views keep working.
    pub fn restore(&mut self, snapshot: Snapshot) -> DomainResult<()> {
        UniqueEntityList::check_unique(&snapshot.customers)?;
        UniqueEntityList::check_unique(&snapshot.employees)?;
        UniqueEntityList::check_unique(&snapshot.suppliers)?;
        UniqueEntityList::check_unique(&snapshot.reservations)?;

        self.customers.set_all(snapshot.customers)?;
        self.employees.set_all(snapshot.employees)?;
        self.suppliers.set_all(snapshot.suppliers)?;
        self.reservations.set_all(snapshot.reservations)?;
        tracing::debug!(
            customers = self.customers.len(),
            employees = self.employees.len(),
            suppliers = self.suppliers.len(),
            reservations = self.reservations.len(),
            "record book restored"
        );
        Ok(())
    }

    /// Empty every list.
    pub fn clear(&mut self) {
        self.customers.clear();
        self.employees.clear();
        self.suppliers.clear();
        self.reservations.clear();
    }
}
