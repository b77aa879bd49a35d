//! `rhrh-model` — in-memory records for a restaurant back office.
//!
//! Four record kinds (customers, employees, suppliers, reservations) live in
//! one [`RecordBook`]. Each kind is held by a [`UniqueEntityList`] that keeps
//! it duplicate-free and sorted, and is shown through a [`FilteredList`].

pub mod book;
pub mod customer;
pub mod employee;
pub mod fields;
pub mod filtered;
pub mod manager;
pub mod record;
pub mod reservation;
pub mod sample;
pub mod supplier;
pub mod unique_list;

#[cfg(test)]
mod fixtures;

pub use book::{RecordBook, Snapshot, Stored};
pub use customer::{Customer, CustomerSortKey};
pub use employee::{Employee, EmployeeSortKey};
pub use fields::{
    Address, Allergy, DeliveryDetails, Email, JobTitle, Name, Phone, Remark, SpecialRequest,
    SupplyType, Tag,
};
pub use filtered::FilteredList;
pub use manager::{ModelManager, Viewed};
pub use record::{ContainsKeywords, Record};
pub use reservation::{Reservation, ReservationSortKey};
pub use supplier::{Supplier, SupplierSortKey};
pub use unique_list::{ReadOnlyList, UniqueEntityList};
