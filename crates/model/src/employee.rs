//! Employee records.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use rhrh_core::{Comparator, Entity, EntityKind, SortOrder};

use crate::customer::write_set;
use crate::fields::{Address, Email, JobTitle, Name, Phone, Tag};
use crate::record::{Record, sort_keys};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    leaves: u32,
    #[serde(default)]
    salary: u64,
    job_title: JobTitle,
    #[serde(default)]
    shifts: BTreeSet<NaiveDateTime>,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Employee {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        job_title: JobTitle,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            leaves: 0,
            salary: 0,
            job_title,
            shifts: BTreeSet::new(),
            tags: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn leaves(&self) -> u32 {
        self.leaves
    }

    pub fn salary(&self) -> u64 {
        self.salary
    }

    pub fn job_title(&self) -> &JobTitle {
        &self.job_title
    }

    pub fn shifts(&self) -> &BTreeSet<NaiveDateTime> {
        &self.shifts
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn with_name(self, name: Name) -> Self {
        Self { name, ..self }
    }

    pub fn with_phone(self, phone: Phone) -> Self {
        Self { phone, ..self }
    }

    pub fn with_email(self, email: Email) -> Self {
        Self { email, ..self }
    }

    pub fn with_address(self, address: Address) -> Self {
        Self { address, ..self }
    }

    pub fn with_leaves(self, leaves: u32) -> Self {
        Self { leaves, ..self }
    }

    pub fn with_salary(self, salary: u64) -> Self {
        Self { salary, ..self }
    }

    pub fn with_job_title(self, job_title: JobTitle) -> Self {
        Self { job_title, ..self }
    }

    pub fn with_shifts(self, shifts: impl IntoIterator<Item = NaiveDateTime>) -> Self {
        Self {
            shifts: shifts.into_iter().collect(),
            ..self
        }
    }

    pub fn with_tags(self, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
            ..self
        }
    }
}

impl core::fmt::Display for Employee {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Leaves: {}; Salary: {}; Job Title: {}",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.leaves,
            self.salary,
            self.job_title
        )?;
        if !self.shifts.is_empty() {
            f.write_str("; Shifts: ")?;
            for shift in &self.shifts {
                write!(f, "[{}]", shift.format("%Y-%m-%d %H%M"))?;
            }
        }
        write_set(f, "Tags", &self.tags)
    }
}

/// Two employees are the same person when both name and phone match.
impl Entity for Employee {
    const KIND: EntityKind = EntityKind::Employee;

    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name && self.phone == other.phone
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EmployeeSortKey {
    Name,
    Phone,
    Email,
    Address,
    Salary,
    Leaves,
    JobTitle,
}

sort_keys!(EmployeeSortKey {
    "n" => Name,
    "p" => Phone,
    "e" => Email,
    "a" => Address,
    "s" => Salary,
    "l" => Leaves,
    "jt" => JobTitle,
});

impl Record for Employee {
    type SortKey = EmployeeSortKey;

    fn comparator(key: EmployeeSortKey, order: SortOrder) -> Comparator<Self> {
        match key {
            EmployeeSortKey::Name => Comparator::by_text(|e: &Employee| e.name.as_str(), order),
            EmployeeSortKey::Phone => Comparator::by_text(|e: &Employee| e.phone.as_str(), order),
            EmployeeSortKey::Email => Comparator::by_text(|e: &Employee| e.email.as_str(), order),
            EmployeeSortKey::Address => {
                Comparator::by_text(|e: &Employee| e.address.as_str(), order)
            }
            EmployeeSortKey::Salary => Comparator::by_key(|e: &Employee| e.salary, order),
            EmployeeSortKey::Leaves => Comparator::by_key(|e: &Employee| e.leaves, order),
            EmployeeSortKey::JobTitle => {
                Comparator::by_text(|e: &Employee| e.job_title.as_str(), order)
            }
        }
    }

    fn default_comparator() -> Comparator<Self> {
        Self::comparator(EmployeeSortKey::Name, SortOrder::Ascending)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.address.as_str(),
            self.job_title.as_str(),
        ];
        fields.extend(self.tags.iter().map(Tag::as_str));
        fields
    }
}
