use core::fmt::Display;
use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use rhrh_core::Index;
use rhrh_model::{
    Address, Allergy, Customer, DeliveryDetails, Email, Employee, JobTitle, ModelManager, Name,
    Phone, Remark, Reservation, SpecialRequest, Supplier, SupplyType, Tag, Viewed,
};

use super::{CommandError, CommandOutcome, CommandResult};

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// The fields an edit command replaces; `None` keeps the current value.
pub trait EditDescriptor {
    type Target;

    fn is_any_field_edited(&self) -> bool;

    /// Copy of `record` with every provided field replaced.
    fn apply_to(&self, record: &Self::Target) -> Self::Target;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditCustomerDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub loyalty_points: Option<u64>,
    pub allergies: Option<BTreeSet<Allergy>>,
    pub special_requests: Option<BTreeSet<SpecialRequest>>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditDescriptor for EditCustomerDescriptor {
    type Target = Customer;

    fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.loyalty_points.is_some()
            || self.allergies.is_some()
            || self.special_requests.is_some()
            || self.tags.is_some()
    }

    fn apply_to(&self, record: &Customer) -> Customer {
        let mut edited = record.clone();
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(phone) = &self.phone {
            edited = edited.with_phone(phone.clone());
        }
        if let Some(email) = &self.email {
            edited = edited.with_email(email.clone());
        }
        if let Some(address) = &self.address {
            edited = edited.with_address(address.clone());
        }
        if let Some(points) = self.loyalty_points {
            edited = edited.with_loyalty_points(points);
        }
        if let Some(allergies) = &self.allergies {
            edited = edited.with_allergies(allergies.iter().cloned());
        }
        if let Some(requests) = &self.special_requests {
            edited = edited.with_special_requests(requests.iter().cloned());
        }
        if let Some(tags) = &self.tags {
            edited = edited.with_tags(tags.iter().cloned());
        }
        edited
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditEmployeeDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub leaves: Option<u32>,
    pub salary: Option<u64>,
    pub job_title: Option<JobTitle>,
    pub shifts: Option<BTreeSet<NaiveDateTime>>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditDescriptor for EditEmployeeDescriptor {
    type Target = Employee;

    fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.leaves.is_some()
            || self.salary.is_some()
            || self.job_title.is_some()
            || self.shifts.is_some()
            || self.tags.is_some()
    }

    fn apply_to(&self, record: &Employee) -> Employee {
        let mut edited = record.clone();
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(phone) = &self.phone {
            edited = edited.with_phone(phone.clone());
        }
        if let Some(email) = &self.email {
            edited = edited.with_email(email.clone());
        }
        if let Some(address) = &self.address {
            edited = edited.with_address(address.clone());
        }
        if let Some(leaves) = self.leaves {
            edited = edited.with_leaves(leaves);
        }
        if let Some(salary) = self.salary {
            edited = edited.with_salary(salary);
        }
        if let Some(job_title) = &self.job_title {
            edited = edited.with_job_title(job_title.clone());
        }
        if let Some(shifts) = &self.shifts {
            edited = edited.with_shifts(shifts.iter().copied());
        }
        if let Some(tags) = &self.tags {
            edited = edited.with_tags(tags.iter().cloned());
        }
        edited
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSupplierDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub supply_type: Option<SupplyType>,
    pub delivery_details: Option<DeliveryDetails>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditDescriptor for EditSupplierDescriptor {
    type Target = Supplier;

    fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.supply_type.is_some()
            || self.delivery_details.is_some()
            || self.tags.is_some()
    }

    fn apply_to(&self, record: &Supplier) -> Supplier {
        let mut edited = record.clone();
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(phone) = &self.phone {
            edited = edited.with_phone(phone.clone());
        }
        if let Some(email) = &self.email {
            edited = edited.with_email(email.clone());
        }
        if let Some(address) = &self.address {
            edited = edited.with_address(address.clone());
        }
        if let Some(supply_type) = &self.supply_type {
            edited = edited.with_supply_type(supply_type.clone());
        }
        if let Some(details) = &self.delivery_details {
            edited = edited.with_delivery_details(details.clone());
        }
        if let Some(tags) = &self.tags {
            edited = edited.with_tags(tags.iter().cloned());
        }
        edited
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditReservationDescriptor {
    pub phone: Option<Phone>,
    pub number_of_people: Option<u32>,
    pub date_time: Option<NaiveDateTime>,
    pub remark: Option<Remark>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditDescriptor for EditReservationDescriptor {
    type Target = Reservation;

    fn is_any_field_edited(&self) -> bool {
        self.phone.is_some()
            || self.number_of_people.is_some()
            || self.date_time.is_some()
            || self.remark.is_some()
            || self.tags.is_some()
    }

    fn apply_to(&self, record: &Reservation) -> Reservation {
        let mut edited = record.clone();
        if let Some(phone) = &self.phone {
            edited = edited.with_phone(phone.clone());
        }
        if let Some(people) = self.number_of_people {
            edited = edited.with_number_of_people(people);
        }
        if let Some(date_time) = self.date_time {
            edited = edited.with_date_time(date_time);
        }
        if let Some(remark) = &self.remark {
            edited = edited.with_remark(Some(remark.clone()));
        }
        if let Some(tags) = &self.tags {
            edited = edited.with_tags(tags.iter().cloned());
        }
        edited
    }
}

/// Replace the record shown at `index` in the filtered view with an edited
/// copy, then show every record of that kind again.
pub(super) fn edit<T, D>(model: &mut ModelManager, index: Index, descriptor: &D) -> CommandOutcome
where
    T: Viewed + Display,
    D: EditDescriptor<Target = T>,
{
    if !descriptor.is_any_field_edited() {
        return Err(CommandError::rejected(MESSAGE_NOT_EDITED));
    }

    let target = model
        .filtered::<T>()
        .get(index)
        .ok_or(CommandError::InvalidIndex(T::KIND))?;
    let edited = descriptor.apply_to(&target);

    if T::UNIQUE && !target.is_same(&edited) && model.book().has(&edited) {
        tracing::debug!(kind = %T::KIND, "edit rejected: duplicate");
        return Err(CommandError::Duplicate(T::KIND));
    }

    let feedback = format!("Edited {}: {}", T::KIND, edited);
    model.edit(&target, edited)?;
    model.show_all::<T>();
    tracing::info!(kind = %T::KIND, command = "edit", index = index.one_based(), "record edited");
    Ok(CommandResult::new(feedback))
}

/// A reservation may only move to the phone of a known customer.
pub(super) fn edit_reservation(
    model: &mut ModelManager,
    index: Index,
    descriptor: &EditReservationDescriptor,
) -> CommandOutcome {
    if let Some(phone) = &descriptor.phone {
        if !model.book().has_customer_with_phone(phone) {
            return Err(CommandError::rejected(format!(
                "No customer with phone {phone} exists; add the customer first"
            )));
        }
    }
    edit(model, index, descriptor)
}
