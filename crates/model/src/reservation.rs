//! Reservation records.
//!
//! A reservation refers to its customer by phone value only. Nothing ties it to
//! a stored customer record, so deleting or editing a customer never touches
//! reservations.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use rhrh_core::{Comparator, Entity, EntityKind, SortOrder};

use crate::customer::write_set;
use crate::fields::{Phone, Remark, Tag};
use crate::record::{Record, sort_keys};

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    phone: Phone,
    number_of_people: u32,
    date_time: NaiveDateTime,
    #[serde(default)]
    remark: Option<Remark>,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Reservation {
    pub fn new(phone: Phone, number_of_people: u32, date_time: NaiveDateTime) -> Self {
        Self {
            phone,
            number_of_people,
            date_time,
            remark: None,
            tags: BTreeSet::new(),
        }
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn number_of_people(&self) -> u32 {
        self.number_of_people
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn remark(&self) -> Option<&Remark> {
        self.remark.as_ref()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn with_phone(self, phone: Phone) -> Self {
        Self { phone, ..self }
    }

    pub fn with_number_of_people(self, number_of_people: u32) -> Self {
        Self {
            number_of_people,
            ..self
        }
    }

    pub fn with_date_time(self, date_time: NaiveDateTime) -> Self {
        Self { date_time, ..self }
    }

    pub fn with_remark(self, remark: Option<Remark>) -> Self {
        Self { remark, ..self }
    }

    pub fn with_tags(self, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
            ..self
        }
    }
}

impl core::fmt::Display for Reservation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Phone: {}; Number of people: {}; Time: {}",
            self.phone,
            self.number_of_people,
            self.date_time.format(DATE_TIME_FORMAT)
        )?;
        if let Some(remark) = &self.remark {
            write!(f, "; Remark: {remark}")?;
        }
        write_set(f, "Tags", &self.tags)
    }
}

/// Same phone at the same time. Not enforced: a party may book twice.
impl Entity for Reservation {
    const KIND: EntityKind = EntityKind::Reservation;
    const UNIQUE: bool = false;

    fn is_same(&self, other: &Self) -> bool {
        self.phone == other.phone && self.date_time == other.date_time
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReservationSortKey {
    DateTime,
    Phone,
    NumberOfPeople,
}

sort_keys!(ReservationSortKey {
    "dt" => DateTime,
    "p" => Phone,
    "np" => NumberOfPeople,
});

impl Record for Reservation {
    type SortKey = ReservationSortKey;

    fn comparator(key: ReservationSortKey, order: SortOrder) -> Comparator<Self> {
        match key {
            ReservationSortKey::DateTime => {
                Comparator::by_key(|r: &Reservation| r.date_time, order)
            }
            ReservationSortKey::Phone => {
                Comparator::by_text(|r: &Reservation| r.phone.as_str(), order)
            }
            ReservationSortKey::NumberOfPeople => {
                Comparator::by_key(|r: &Reservation| r.number_of_people, order)
            }
        }
    }

    fn default_comparator() -> Comparator<Self> {
        Self::comparator(ReservationSortKey::DateTime, SortOrder::Ascending)
            .then(Self::comparator(ReservationSortKey::Phone, SortOrder::Ascending))
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.phone.as_str()];
        fields.extend(self.remark.as_ref().map(Remark::as_str));
        fields.extend(self.tags.iter().map(Tag::as_str));
        fields
    }
}
