//! Supplier records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use rhrh_core::{Comparator, Entity, EntityKind, SortOrder};

use crate::customer::write_set;
use crate::fields::{Address, DeliveryDetails, Email, Name, Phone, SupplyType, Tag};
use crate::record::{Record, sort_keys};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    supply_type: SupplyType,
    delivery_details: DeliveryDetails,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Supplier {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        supply_type: SupplyType,
        delivery_details: DeliveryDetails,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            supply_type,
            delivery_details,
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

    pub fn supply_type(&self) -> &SupplyType {
        &self.supply_type
    }

    pub fn delivery_details(&self) -> &DeliveryDetails {
        &self.delivery_details
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

    pub fn with_supply_type(self, supply_type: SupplyType) -> Self {
        Self {
            supply_type,
            ..self
        }
    }

    pub fn with_delivery_details(self, delivery_details: DeliveryDetails) -> Self {
        Self {
            delivery_details,
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

impl core::fmt::Display for Supplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Supply Type: {}; Delivery Details: {}",
            self.name, self.phone, self.email, self.address, self.supply_type, self.delivery_details
        )?;
        write_set(f, "Tags", &self.tags)
    }
}

/// Suppliers are identified by name alone.
impl Entity for Supplier {
    const KIND: EntityKind = EntityKind::Supplier;

    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SupplierSortKey {
    Name,
    Phone,
    Email,
    Address,
    SupplyType,
    DeliveryDetails,
}

sort_keys!(SupplierSortKey {
    "n" => Name,
    "p" => Phone,
    "e" => Email,
    "a" => Address,
    "st" => SupplyType,
    "dd" => DeliveryDetails,
});

impl Record for Supplier {
    type SortKey = SupplierSortKey;

    fn comparator(key: SupplierSortKey, order: SortOrder) -> Comparator<Self> {
        match key {
            SupplierSortKey::Name => Comparator::by_text(|s: &Supplier| s.name.as_str(), order),
            SupplierSortKey::Phone => Comparator::by_text(|s: &Supplier| s.phone.as_str(), order),
            SupplierSortKey::Email => Comparator::by_text(|s: &Supplier| s.email.as_str(), order),
            SupplierSortKey::Address => {
                Comparator::by_text(|s: &Supplier| s.address.as_str(), order)
            }
            SupplierSortKey::SupplyType => {
                Comparator::by_text(|s: &Supplier| s.supply_type.as_str(), order)
            }
            SupplierSortKey::DeliveryDetails => {
                Comparator::by_text(|s: &Supplier| s.delivery_details.as_str(), order)
            }
        }
    }

    fn default_comparator() -> Comparator<Self> {
        Self::comparator(SupplierSortKey::Name, SortOrder::Ascending)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.address.as_str(),
            self.supply_type.as_str(),
        ];
        fields.extend(self.tags.iter().map(Tag::as_str));
        fields
    }
}
