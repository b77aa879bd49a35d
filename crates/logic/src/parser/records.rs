//! `add*` and `edit*`: record fields given as `prefix/value` arguments.

use core::str::FromStr;
use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use rhrh_core::{DomainError, EntityKind, Index};
use rhrh_model::reservation::DATE_TIME_FORMAT;
use rhrh_model::{Allergy, Customer, Employee, Reservation, SpecialRequest, Supplier, Tag};

use super::ParseError;
use super::args::*;
use crate::command::{
    Command, EditCustomerDescriptor, EditEmployeeDescriptor, EditReservationDescriptor,
    EditSupplierDescriptor,
};

const CUSTOMER_PREFIXES: &[&str] = &[
    NAME,
    PHONE,
    EMAIL,
    ADDRESS,
    LOYALTY_POINTS,
    ALLERGY,
    SPECIAL_REQUEST,
    TAG,
];
const EMPLOYEE_PREFIXES: &[&str] = &[
    NAME, PHONE, EMAIL, ADDRESS, LEAVES, SALARY, JOB_TITLE, SHIFT, TAG,
];
const SUPPLIER_PREFIXES: &[&str] = &[
    NAME,
    PHONE,
    EMAIL,
    ADDRESS,
    SUPPLY_TYPE,
    DELIVERY_DETAILS,
    TAG,
];
const RESERVATION_PREFIXES: &[&str] = &[PHONE, NUMBER_OF_PEOPLE, DATE_TIME, REMARK, TAG];

fn field_grammar(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Customer => {
            "n/NAME p/PHONE e/EMAIL a/ADDRESS [lp/LOYALTY_POINTS] [al/ALLERGY]... \
             [sr/SPECIAL_REQUEST]... [t/TAG]..."
        }
        EntityKind::Employee => {
            "n/NAME p/PHONE e/EMAIL a/ADDRESS jt/JOB_TITLE [l/LEAVES] [s/SALARY] \
             [sh/YYYY-MM-DD HHMM]... [t/TAG]..."
        }
        EntityKind::Supplier => {
            "n/NAME p/PHONE e/EMAIL a/ADDRESS st/SUPPLY_TYPE dd/DELIVERY_DETAILS [t/TAG]..."
        }
        EntityKind::Reservation => "p/PHONE np/NUMBER_OF_PEOPLE dt/YYYY-MM-DD HHMM [r/REMARK] [t/TAG]...",
    }
}

fn add_usage(kind: EntityKind) -> String {
    format!(
        "add{}: Adds a {kind}.\nParameters: {}",
        suffix(kind),
        field_grammar(kind)
    )
}

fn edit_usage(kind: EntityKind) -> String {
    format!(
        "edit{}: Edits the {kind} identified by the index number used in the displayed {kind} list. \
         Existing values will be overwritten by the input values.\n\
         Parameters: INDEX (must be a positive integer) [FIELD/VALUE]...\n\
         Fields: {}",
        suffix(kind),
        field_grammar(kind)
    )
}

fn suffix(kind: EntityKind) -> char {
    match kind {
        EntityKind::Customer => 'c',
        EntityKind::Employee => 'e',
        EntityKind::Supplier => 's',
        EntityKind::Reservation => 'r',
    }
}

fn field<F: FromStr<Err = DomainError>>(value: &str) -> Result<F, ParseError> {
    Ok(value.parse()?)
}

/// Repeatable field; a lone empty value (`t/`) yields an empty set.
fn set<F: FromStr<Err = DomainError> + Ord>(values: Vec<&str>) -> Result<BTreeSet<F>, ParseError> {
    values
        .into_iter()
        .filter(|v| !v.is_empty())
        .map(field)
        .collect()
}

fn count<N: FromStr>(value: &str, what: &str) -> Result<N, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidValue(format!("{what} should be a non-negative integer")))
}

fn date_time(value: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).map_err(|_| {
        ParseError::InvalidValue("Date-time should be in the format YYYY-MM-DD HHMM".to_owned())
    })
}

fn number_of_people(value: &str) -> Result<u32, ParseError> {
    match count::<u32>(value, "Number of people")? {
        0 => Err(ParseError::InvalidValue(
            "Number of people should be a positive integer".to_owned(),
        )),
        n => Ok(n),
    }
}

pub(super) fn add(kind: EntityKind, args: &str) -> Result<Command, ParseError> {
    let usage = add_usage(kind);
    let prefixes = match kind {
        EntityKind::Customer => CUSTOMER_PREFIXES,
        EntityKind::Employee => EMPLOYEE_PREFIXES,
        EntityKind::Supplier => SUPPLIER_PREFIXES,
        EntityKind::Reservation => RESERVATION_PREFIXES,
    };
    let map = ArgMap::tokenize(args, prefixes);
    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(usage));
    }

    Ok(match kind {
        EntityKind::Customer => {
            let customer = Customer::new(
                field(map.required(NAME, &usage)?)?,
                field(map.required(PHONE, &usage)?)?,
                field(map.required(EMAIL, &usage)?)?,
                field(map.required(ADDRESS, &usage)?)?,
            )
            .with_loyalty_points(match map.value(LOYALTY_POINTS) {
                Some(points) => count(points, "Loyalty points")?,
                None => 0,
            })
            .with_allergies(set::<Allergy>(map.all(ALLERGY))?)
            .with_special_requests(set::<SpecialRequest>(map.all(SPECIAL_REQUEST))?)
            .with_tags(set::<Tag>(map.all(TAG))?);
            Command::AddCustomer(customer)
        }
        EntityKind::Employee => {
            let mut employee = Employee::new(
                field(map.required(NAME, &usage)?)?,
                field(map.required(PHONE, &usage)?)?,
                field(map.required(EMAIL, &usage)?)?,
                field(map.required(ADDRESS, &usage)?)?,
                field(map.required(JOB_TITLE, &usage)?)?,
            );
            if let Some(leaves) = map.value(LEAVES) {
                employee = employee.with_leaves(count(leaves, "Leaves")?);
            }
            if let Some(salary) = map.value(SALARY) {
                employee = employee.with_salary(count(salary, "Salary")?);
            }
            let shifts = map
                .all(SHIFT)
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(date_time)
                .collect::<Result<Vec<_>, _>>()?;
            Command::AddEmployee(employee.with_shifts(shifts).with_tags(set::<Tag>(map.all(TAG))?))
        }
        EntityKind::Supplier => {
            let supplier = Supplier::new(
                field(map.required(NAME, &usage)?)?,
                field(map.required(PHONE, &usage)?)?,
                field(map.required(EMAIL, &usage)?)?,
                field(map.required(ADDRESS, &usage)?)?,
                field(map.required(SUPPLY_TYPE, &usage)?)?,
                field(map.required(DELIVERY_DETAILS, &usage)?)?,
            )
            .with_tags(set::<Tag>(map.all(TAG))?);
            Command::AddSupplier(supplier)
        }
        EntityKind::Reservation => {
            let reservation = Reservation::new(
                field(map.required(PHONE, &usage)?)?,
                number_of_people(map.required(NUMBER_OF_PEOPLE, &usage)?)?,
                date_time(map.required(DATE_TIME, &usage)?)?,
            )
            .with_remark(map.value(REMARK).map(field).transpose()?)
            .with_tags(set::<Tag>(map.all(TAG))?);
            Command::AddReservation(reservation)
        }
    })
}

pub(super) fn edit(kind: EntityKind, args: &str) -> Result<Command, ParseError> {
    let usage = edit_usage(kind);
    let prefixes = match kind {
        EntityKind::Customer => CUSTOMER_PREFIXES,
        EntityKind::Employee => EMPLOYEE_PREFIXES,
        EntityKind::Supplier => SUPPLIER_PREFIXES,
        EntityKind::Reservation => RESERVATION_PREFIXES,
    };
    let map = ArgMap::tokenize(args, prefixes);
    let index: Index = map
        .preamble()
        .parse()
        .map_err(|_| ParseError::invalid_format(usage))?;

    // A repeatable field given at all replaces the whole set.
    let tags = if map.has(TAG) { Some(set::<Tag>(map.all(TAG))?) } else { None };

    Ok(match kind {
        EntityKind::Customer => Command::EditCustomer(
            index,
            EditCustomerDescriptor {
                name: map.value(NAME).map(field).transpose()?,
                phone: map.value(PHONE).map(field).transpose()?,
                email: map.value(EMAIL).map(field).transpose()?,
                address: map.value(ADDRESS).map(field).transpose()?,
                loyalty_points: map
                    .value(LOYALTY_POINTS)
                    .map(|v| count(v, "Loyalty points"))
                    .transpose()?,
                allergies: if map.has(ALLERGY) { Some(set(map.all(ALLERGY))?) } else { None },
                special_requests: if map.has(SPECIAL_REQUEST) {
                    Some(set(map.all(SPECIAL_REQUEST))?)
                } else {
                    None
                },
                tags,
            },
        ),
        EntityKind::Employee => Command::EditEmployee(
            index,
            EditEmployeeDescriptor {
                name: map.value(NAME).map(field).transpose()?,
                phone: map.value(PHONE).map(field).transpose()?,
                email: map.value(EMAIL).map(field).transpose()?,
                address: map.value(ADDRESS).map(field).transpose()?,
                leaves: map.value(LEAVES).map(|v| count(v, "Leaves")).transpose()?,
                salary: map.value(SALARY).map(|v| count(v, "Salary")).transpose()?,
                job_title: map.value(JOB_TITLE).map(field).transpose()?,
                shifts: if map.has(SHIFT) {
                    Some(
                        map.all(SHIFT)
                            .into_iter()
                            .filter(|s| !s.is_empty())
                            .map(date_time)
                            .collect::<Result<BTreeSet<_>, _>>()?,
                    )
                } else {
                    None
                },
                tags,
            },
        ),
        EntityKind::Supplier => Command::EditSupplier(
            index,
            EditSupplierDescriptor {
                name: map.value(NAME).map(field).transpose()?,
                phone: map.value(PHONE).map(field).transpose()?,
                email: map.value(EMAIL).map(field).transpose()?,
                address: map.value(ADDRESS).map(field).transpose()?,
                supply_type: map.value(SUPPLY_TYPE).map(field).transpose()?,
                delivery_details: map.value(DELIVERY_DETAILS).map(field).transpose()?,
                tags,
            },
        ),
        EntityKind::Reservation => Command::EditReservation(
            index,
            EditReservationDescriptor {
                phone: map.value(PHONE).map(field).transpose()?,
                number_of_people: map.value(NUMBER_OF_PEOPLE).map(number_of_people).transpose()?,
                date_time: map.value(DATE_TIME).map(date_time).transpose()?,
                remark: map.value(REMARK).map(field).transpose()?,
                tags,
            },
        ),
    })
}
