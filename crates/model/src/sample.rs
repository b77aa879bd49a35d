//! Sample data for a first run with no saved records.

use chrono::NaiveDateTime;

use rhrh_core::{DomainError, DomainResult};

use crate::book::{RecordBook, Snapshot};
use crate::customer::Customer;
use crate::employee::Employee;
use crate::fields::{
    Address, Allergy, DeliveryDetails, Email, JobTitle, Name, Phone, SpecialRequest, SupplyType,
    Tag,
};
use crate::reservation::{DATE_TIME_FORMAT, Reservation};
use crate::supplier::Supplier;

fn tags(values: &[&str]) -> DomainResult<Vec<Tag>> {
    values.iter().map(|v| Tag::new(*v)).collect()
}

fn at(value: &str) -> DomainResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .map_err(|e| DomainError::validation(format!("date-time {value:?}: {e}")))
}

#[allow(clippy::too_many_arguments)]
fn sample_customer(
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    points: u64,
    allergies: &[&str],
    request: &str,
    tag_values: &[&str],
) -> DomainResult<Customer> {
    Ok(Customer::new(
        Name::new(name)?,
        Phone::new(phone)?,
        Email::new(email)?,
        Address::new(address)?,
    )
    .with_loyalty_points(points)
    .with_allergies(allergies.iter().map(|a| Allergy::new(*a)).collect::<DomainResult<Vec<_>>>()?)
    .with_special_requests([SpecialRequest::new(request)?])
    .with_tags(tags(tag_values)?))
}

fn sample_employee(
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    salary: u64,
    job_title: &str,
) -> DomainResult<Employee> {
    Ok(Employee::new(
        Name::new(name)?,
        Phone::new(phone)?,
        Email::new(email)?,
        Address::new(address)?,
        JobTitle::new(job_title)?,
    )
    .with_leaves(14)
    .with_salary(salary)
    .with_shifts([at("2020-12-04 0800")?])
    .with_tags(tags(&["Employee"])?))
}

fn sample_supplier(
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    supply_type: &str,
    delivery: &str,
) -> DomainResult<Supplier> {
    Ok(Supplier::new(
        Name::new(name)?,
        Phone::new(phone)?,
        Email::new(email)?,
        Address::new(address)?,
        SupplyType::new(supply_type)?,
        DeliveryDetails::new(delivery)?,
    ))
}

fn sample_reservation(phone: &str, people: u32, time: &str) -> DomainResult<Reservation> {
    Ok(Reservation::new(Phone::new(phone)?, people, at(time)?))
}

pub fn sample_snapshot() -> DomainResult<Snapshot> {
    Ok(Snapshot {
        customers: vec![
            sample_customer(
                "Javier Phon",
                "87438807",
                "imphonofyou@example.com",
                "Blk 30 Geylang Street 29, #06-40",
                1000,
                &["McSpicy", "Pineapples"],
                "Doesnt eat meat",
                &["boss"],
            )?,
            sample_customer(
                "Pham Ba Thang",
                "99272758",
                "igotchupham@example.com",
                "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
                10000,
                &["Peanuts", "milk"],
                "Nothing under 100 dollars",
                &["friends"],
            )?,
            sample_customer(
                "Clement Kong",
                "93210283",
                "kingkong@example.com",
                "Blk 11 Ang Mo Kio Street 74, #11-04",
                5000,
                &["Cheese", "rice"],
                "Loves window seats",
                &["regular"],
            )?,
            sample_customer(
                "Lee Hern Ping",
                "91031282",
                "leehp@example.com",
                "Blk 436 Serangoon Gardens Street 26, #16-43",
                1000,
                &["Apples"],
                "Every visit is his birthday",
                &["regular"],
            )?,
            sample_customer(
                "Chetwin Low",
                "92492021",
                "chetwin@example.com",
                "Blk 47 Tampines Street 20, #17-35",
                500,
                &["coriander"],
                "Everything should be deep fried",
                &[],
            )?,
        ],
        employees: vec![
            sample_employee(
                "Javier Phon",
                "81234567",
                "javphon@example.com",
                "Blk 5 Bukit Batok St 2, #177-35",
                8000,
                "Team Lead",
            )?,
            sample_employee(
                "Chetwin Low",
                "85555555",
                "chetlqh@example.com",
                "Blk 7 Yew Tee St 10, #10-35",
                1200,
                "Intern",
            )?,
            sample_employee(
                "Clement Kong",
                "99999999",
                "clementk@example.com",
                "Blk 20 Bishan St 37, #03-10",
                5500,
                "Project Manager",
            )?,
        ],
        suppliers: vec![
            sample_supplier(
                "Supplier1",
                "87438807",
                "alexyeoh@example.com",
                "Blk 30 Geylang Street 29, #06-40",
                "Chicken",
                "7th of every month",
            )?,
            sample_supplier(
                "Supplier2",
                "99272758",
                "berniceyu@example.com",
                "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
                "Rice",
                "Every Tuesday",
            )?,
            sample_supplier(
                "Supplier3",
                "93210283",
                "charlotte@example.com",
                "Blk 11 Ang Mo Kio Street 74, #11-04",
                "Noodles",
                "Every 3 months",
            )?,
        ],
        reservations: vec![
            sample_reservation("92492021", 2, "2021-12-24 2000")?,
            sample_reservation("91031282", 4, "2021-11-11 1300")?,
            sample_reservation("93210283", 2, "2021-12-25 1930")?,
            sample_reservation("99272758", 3, "2021-10-30 1900")?,
            sample_reservation("87438807", 6, "2021-02-14 1130")?,
        ],
    })
}

pub fn sample_book() -> DomainResult<RecordBook> {
    RecordBook::from_snapshot(sample_snapshot()?)
}
