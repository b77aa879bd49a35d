//! Record builders for unit tests.

use chrono::NaiveDateTime;

use crate::customer::Customer;
use crate::employee::Employee;
use crate::fields::{Address, DeliveryDetails, Email, JobTitle, Name, Phone, SupplyType};
use crate::reservation::{DATE_TIME_FORMAT, Reservation};
use crate::supplier::Supplier;

pub fn customer(name: &str, phone: &str) -> Customer {
    Customer::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new("someone@example.com").unwrap(),
        Address::new("Blk 30 Geylang Street 29").unwrap(),
    )
}

pub fn employee(name: &str, phone: &str, salary: u64) -> Employee {
    Employee::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new("staff@example.com").unwrap(),
        Address::new("Blk 5 Bukit Batok St 2").unwrap(),
        JobTitle::new("Waiter").unwrap(),
    )
    .with_salary(salary)
}

pub fn supplier(name: &str, phone: &str) -> Supplier {
    Supplier::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new("sales@example.com").unwrap(),
        Address::new("Blk 11 Ang Mo Kio Street 74").unwrap(),
        SupplyType::new("Rice").unwrap(),
        DeliveryDetails::new("Every Tuesday").unwrap(),
    )
}

pub fn reservation(phone: &str, people: u32, at: &str) -> Reservation {
    Reservation::new(
        Phone::new(phone).unwrap(),
        people,
        NaiveDateTime::parse_from_str(at, DATE_TIME_FORMAT).unwrap(),
    )
}
