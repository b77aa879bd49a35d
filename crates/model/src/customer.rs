//! Customer records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use rhrh_core::{Comparator, Entity, EntityKind, SortOrder};

use crate::fields::{Address, Allergy, Email, Name, Phone, SpecialRequest, Tag};
use crate::record::{Record, sort_keys};

/// A restaurant customer. Immutable; "editing" builds a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    loyalty_points: u64,
    #[serde(default)]
    allergies: BTreeSet<Allergy>,
    #[serde(default)]
    special_requests: BTreeSet<SpecialRequest>,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Customer {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            loyalty_points: 0,
            allergies: BTreeSet::new(),
            special_requests: BTreeSet::new(),
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

    pub fn loyalty_points(&self) -> u64 {
        self.loyalty_points
    }

    pub fn allergies(&self) -> &BTreeSet<Allergy> {
        &self.allergies
    }

    pub fn special_requests(&self) -> &BTreeSet<SpecialRequest> {
        &self.special_requests
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

    pub fn with_loyalty_points(self, loyalty_points: u64) -> Self {
        Self {
            loyalty_points,
            ..self
        }
    }

    pub fn with_allergies(self, allergies: impl IntoIterator<Item = Allergy>) -> Self {
        Self {
            allergies: allergies.into_iter().collect(),
            ..self
        }
    }

    pub fn with_special_requests(
        self,
        special_requests: impl IntoIterator<Item = SpecialRequest>,
    ) -> Self {
        Self {
            special_requests: special_requests.into_iter().collect(),
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

impl core::fmt::Display for Customer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Loyalty Points: {}",
            self.name, self.phone, self.email, self.address, self.loyalty_points
        )?;
        write_set(f, "Allergies", &self.allergies)?;
        write_set(f, "Special Requests", &self.special_requests)?;
        write_set(f, "Tags", &self.tags)
    }
}

pub(crate) fn write_set<T: core::fmt::Display>(
    f: &mut core::fmt::Formatter<'_>,
    label: &str,
    items: &BTreeSet<T>,
) -> core::fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    write!(f, "; {label}: ")?;
    for item in items {
        write!(f, "[{item}]")?;
    }
    Ok(())
}

/// Customers are the same real-world person when they share a phone number.
impl Entity for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn is_same(&self, other: &Self) -> bool {
        self.phone == other.phone
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CustomerSortKey {
    Name,
    Phone,
    Email,
    Address,
    LoyaltyPoints,
}

sort_keys!(CustomerSortKey {
    "n" => Name,
    "p" => Phone,
    "e" => Email,
    "a" => Address,
    "lp" => LoyaltyPoints,
});

impl Record for Customer {
    type SortKey = CustomerSortKey;

    fn comparator(key: CustomerSortKey, order: SortOrder) -> Comparator<Self> {
        match key {
            CustomerSortKey::Name => Comparator::by_text(|c: &Customer| c.name.as_str(), order),
            CustomerSortKey::Phone => Comparator::by_text(|c: &Customer| c.phone.as_str(), order),
            CustomerSortKey::Email => Comparator::by_text(|c: &Customer| c.email.as_str(), order),
            CustomerSortKey::Address => {
                Comparator::by_text(|c: &Customer| c.address.as_str(), order)
            }
            CustomerSortKey::LoyaltyPoints => {
                Comparator::by_key(|c: &Customer| c.loyalty_points, order)
            }
        }
    }

    fn default_comparator() -> Comparator<Self> {
        Self::comparator(CustomerSortKey::Name, SortOrder::Ascending)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.address.as_str(),
        ];
        fields.extend(self.allergies.iter().map(Allergy::as_str));
        fields.extend(self.tags.iter().map(Tag::as_str));
        fields
    }
}
