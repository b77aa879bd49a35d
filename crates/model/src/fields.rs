//! Field value types shared by the record kinds.
//!
//! Each type validates on construction and on deserialization, so a record can
//! only ever hold well-formed fields.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use rhrh_core::{DomainError, DomainResult, ValueObject};

macro_rules! text_field {
    ($(#[$meta:meta])* $t:ident, $valid:path, $constraints:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $t(String);

        impl $t {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if $valid(&value) {
                    Ok(Self(value))
                } else {
                    Err(DomainError::validation($constraints))
                }
            }

            pub fn is_valid(value: &str) -> bool {
                $valid(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ValueObject for $t {
            const CONSTRAINTS: &'static str = $constraints;
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s.trim())
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

text_field!(
    /// A person's or company's name.
    Name,
    is_alphanumeric_words,
    "Names should only contain alphanumeric characters and spaces, and it should not be blank"
);

text_field!(
    /// Phone number; the identity key customers and reservations share.
    Phone,
    is_phone,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long"
);

text_field!(
    Email,
    is_email,
    "Emails should be of the format local-part@domain and contain no whitespace"
);

text_field!(Address, is_not_blank, "Addresses can take any values, and it should not be blank");

text_field!(Tag, is_alphanumeric, "Tags names should be alphanumeric");

text_field!(Allergy, is_alphanumeric, "Allergies should be alphanumeric");

text_field!(
    SpecialRequest,
    is_not_blank,
    "Special requests can take any values, and it should not be blank"
);

text_field!(JobTitle, is_not_blank, "Job titles can take any values, and it should not be blank");

text_field!(
    SupplyType,
    is_not_blank,
    "Supply types can take any values, and it should not be blank"
);

text_field!(
    DeliveryDetails,
    is_not_blank,
    "Delivery details can take any values, and it should not be blank"
);

text_field!(
    /// Free-form note attached to a reservation.
    Remark,
    is_alphanumeric_words,
    "Remark should only contain alphanumeric characters and spaces"
);

/// First character must not be whitespace, otherwise " " becomes valid.
fn is_not_blank(value: &str) -> bool {
    value.chars().next().is_some_and(|c| !c.is_whitespace())
}

fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphanumeric)
}

fn is_alphanumeric_words(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next().is_some_and(char::is_alphanumeric)
        && chars.all(|c| c.is_alphanumeric() || c == ' ')
}

fn is_phone(value: &str) -> bool {
    value.len() >= 3 && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_alphanumeric() || "+_.-".contains(c))
        && !local.starts_with(['+', '_', '.', '-']);
    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
                && !label.starts_with('-')
                && !label.ends_with('-')
        });
    local_ok && domain_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_blank_and_symbols() {
        assert!(Name::new("Alex Yeoh").is_ok());
        assert!(Name::new(" Alex").is_err());
        assert!(Name::new("").is_err());
        assert!(Name::new("James&").is_err());
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::new("911").is_ok());
        assert!(Phone::new("91").is_err());
        assert!(Phone::new("911a").is_err());
    }

    #[test]
    fn rejection_carries_the_constraint_text() {
        assert_eq!(
            Phone::new("1"),
            Err(DomainError::validation(<Phone as ValueObject>::CONSTRAINTS))
        );
    }

    #[test]
    fn email_requires_local_and_domain() {
        assert!(Email::new("amy@example.com").is_ok());
        assert!(Email::new("a-b.c@example").is_ok());
        assert!(Email::new("bob!yahoo").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("bob@").is_err());
        assert!(Email::new("bob@-example.com").is_err());
    }

    #[test]
    fn address_rejects_leading_whitespace() {
        assert!(Address::new("Blk 30 Geylang Street 29, #06-40").is_ok());
        assert!(Address::new(" ").is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Phone = serde_json::from_str("\"91234567\"").unwrap();
        assert_eq!(ok.as_str(), "91234567");
        assert!(serde_json::from_str::<Phone>("\"12\"").is_err());
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let tag: Tag = " friends ".parse().unwrap();
        assert_eq!(tag.to_string(), "friends");
    }
}
