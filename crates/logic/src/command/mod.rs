//! Commands: validated units of work against the [`ModelManager`].
//!
//! A command is built already holding typed, syntax-checked arguments (see
//! [`crate::parser`]). [`Command::execute`] then:
//!
//! 1. reads the model to check preconditions (index in range of the *filtered*
//!    view, record present, no duplicate);
//! 2. on failure returns a [`CommandError`] and leaves the model untouched;
//! 3. on success performs exactly one mutation on one list and returns a
//!    [`CommandResult`].
//!
//! Two commands are equal when their arguments are equal.

mod add;
mod delete;
mod edit;
mod find;
mod sort;

use thiserror::Error;

use rhrh_core::{DomainError, EntityKind, Index, SortOrder};
use rhrh_model::{
    ContainsKeywords, Customer, CustomerSortKey, Employee, EmployeeSortKey, ModelManager,
    Reservation, ReservationSortKey, Supplier, SupplierSortKey,
};

use crate::parser::ParseError;

pub use edit::{
    EditCustomerDescriptor, EditDescriptor, EditEmployeeDescriptor, EditReservationDescriptor,
    EditSupplierDescriptor,
};

/// What the presentation layer should do besides showing feedback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UiDirective {
    ShowHelp,
    Exit,
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub directive: Option<UiDirective>,
    /// Record kind whose view the command touched, if any.
    pub kind: Option<EntityKind>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            directive: None,
            kind: None,
        }
    }

    pub fn with_directive(feedback: impl Into<String>, directive: UiDirective) -> Self {
        Self {
            directive: Some(directive),
            ..Self::new(feedback)
        }
    }
}

/// User-facing command failure. Never fatal; the model is unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("The {0} index provided is invalid")]
    InvalidIndex(EntityKind),

    #[error("This {0} already exists in the address book")]
    Duplicate(EntityKind),

    #[error("This {0} no longer exists in the address book")]
    NotFound(EntityKind),

    /// Precondition failure with its own message.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CommandError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }
}

impl From<DomainError> for CommandError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::DuplicateEntity(kind) => CommandError::Duplicate(kind),
            DomainError::EntityNotFound(kind) => CommandError::NotFound(kind),
            DomainError::Validation(msg) => CommandError::Rejected(msg),
        }
    }
}

pub type CommandOutcome = Result<CommandResult, CommandError>;

pub const MESSAGE_HELP: &str = "Opened help window.";
pub const MESSAGE_EXIT: &str = "Exiting Address Book as requested ...";
pub const MESSAGE_CLEAR: &str = "Address book has been cleared!";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddCustomer(Customer),
    AddEmployee(Employee),
    AddSupplier(Supplier),
    AddReservation(Reservation),
    EditCustomer(Index, EditCustomerDescriptor),
    EditEmployee(Index, EditEmployeeDescriptor),
    EditSupplier(Index, EditSupplierDescriptor),
    EditReservation(Index, EditReservationDescriptor),
    Delete(EntityKind, Index),
    Find(EntityKind, ContainsKeywords),
    /// Show every record of a kind in default order.
    List(EntityKind),
    SortCustomers(CustomerSortKey, SortOrder),
    SortEmployees(EmployeeSortKey, SortOrder),
    SortSuppliers(SupplierSortKey, SortOrder),
    SortReservations(ReservationSortKey, SortOrder),
    /// Empty every record kind. The one command that mutates the whole store
    /// rather than a single list.
    Clear,
    Help,
    Exit,
}

impl Command {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddCustomer(_)
            | Command::AddEmployee(_)
            | Command::AddSupplier(_)
            | Command::AddReservation(_) => "add",
            Command::EditCustomer(..)
            | Command::EditEmployee(..)
            | Command::EditSupplier(..)
            | Command::EditReservation(..) => "edit",
            Command::Delete(..) => "delete",
            Command::Find(..) => "find",
            Command::List(_) => "list",
            Command::SortCustomers(..)
            | Command::SortEmployees(..)
            | Command::SortSuppliers(..)
            | Command::SortReservations(..) => "sort",
            Command::Clear => "clear",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// The record kind this command works on; `None` for global commands.
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Command::AddCustomer(_) | Command::EditCustomer(..) | Command::SortCustomers(..) => {
                Some(EntityKind::Customer)
            }
            Command::AddEmployee(_) | Command::EditEmployee(..) | Command::SortEmployees(..) => {
                Some(EntityKind::Employee)
            }
            Command::AddSupplier(_) | Command::EditSupplier(..) | Command::SortSuppliers(..) => {
                Some(EntityKind::Supplier)
            }
            Command::AddReservation(_)
            | Command::EditReservation(..)
            | Command::SortReservations(..) => Some(EntityKind::Reservation),
            Command::Delete(kind, _) | Command::Find(kind, _) | Command::List(kind) => Some(*kind),
            Command::Clear | Command::Help | Command::Exit => None,
        }
    }

    /// Whether a successful run changes stored records (and should be saved).
    pub fn changes_records(&self) -> bool {
        matches!(
            self,
            Command::AddCustomer(_)
                | Command::AddEmployee(_)
                | Command::AddSupplier(_)
                | Command::AddReservation(_)
                | Command::EditCustomer(..)
                | Command::EditEmployee(..)
                | Command::EditSupplier(..)
                | Command::EditReservation(..)
                | Command::Delete(..)
                | Command::Clear
        )
    }

    pub fn execute(self, model: &mut ModelManager) -> CommandOutcome {
        let kind = self.kind();
        self.run(model).map(|result| CommandResult { kind, ..result })
    }

    fn run(self, model: &mut ModelManager) -> CommandOutcome {
        match self {
            Command::AddCustomer(c) => add::add(model, c),
            Command::AddEmployee(e) => add::add(model, e),
            Command::AddSupplier(s) => add::add(model, s),
            Command::AddReservation(r) => add::add_reservation(model, r),
            Command::EditCustomer(index, d) => edit::edit(model, index, &d),
            Command::EditEmployee(index, d) => edit::edit(model, index, &d),
            Command::EditSupplier(index, d) => edit::edit(model, index, &d),
            Command::EditReservation(index, d) => edit::edit_reservation(model, index, &d),
            Command::Delete(kind, index) => match kind {
                EntityKind::Customer => delete::delete::<Customer>(model, index),
                EntityKind::Employee => delete::delete::<Employee>(model, index),
                EntityKind::Supplier => delete::delete::<Supplier>(model, index),
                EntityKind::Reservation => delete::delete::<Reservation>(model, index),
            },
            Command::Find(kind, keywords) => match kind {
                EntityKind::Customer => find::find::<Customer>(model, keywords),
                EntityKind::Employee => find::find::<Employee>(model, keywords),
                EntityKind::Supplier => find::find::<Supplier>(model, keywords),
                EntityKind::Reservation => find::find::<Reservation>(model, keywords),
            },
            Command::List(kind) => match kind {
                EntityKind::Customer => find::list::<Customer>(model),
                EntityKind::Employee => find::list::<Employee>(model),
                EntityKind::Supplier => find::list::<Supplier>(model),
                EntityKind::Reservation => find::list::<Reservation>(model),
            },
            Command::SortCustomers(key, order) => sort::sort::<Customer>(model, key, order),
            Command::SortEmployees(key, order) => sort::sort::<Employee>(model, key, order),
            Command::SortSuppliers(key, order) => sort::sort::<Supplier>(model, key, order),
            Command::SortReservations(key, order) => {
                sort::sort::<Reservation>(model, key, order)
            }
            Command::Clear => {
                model.clear();
                tracing::info!(command = "clear", "record book cleared");
                Ok(CommandResult::new(MESSAGE_CLEAR))
            }
            Command::Help => Ok(CommandResult::with_directive(
                MESSAGE_HELP,
                UiDirective::ShowHelp,
            )),
            Command::Exit => Ok(CommandResult::with_directive(MESSAGE_EXIT, UiDirective::Exit)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{customer, model_with, sample_model};

    #[test]
    fn equality_follows_arguments() {
        let amy = Command::AddCustomer(customer("Amy Bee", "111"));
        let amy_copy = Command::AddCustomer(customer("Amy Bee", "111"));
        let bob = Command::AddCustomer(customer("Bob Choo", "222"));

        assert_eq!(amy, amy_copy);
        assert_ne!(amy, bob);
        assert_ne!(
            Command::Delete(EntityKind::Customer, Index::from_zero_based(0)),
            Command::Delete(EntityKind::Supplier, Index::from_zero_based(0))
        );
    }

    #[test]
    fn help_and_exit_carry_directives() {
        let mut model = ModelManager::default();
        let help = Command::Help.execute(&mut model).unwrap();
        assert_eq!(help.directive, Some(UiDirective::ShowHelp));
        let exit = Command::Exit.execute(&mut model).unwrap();
        assert_eq!(exit, CommandResult::with_directive(MESSAGE_EXIT, UiDirective::Exit));
    }

    #[test]
    fn clear_empties_the_book() {
        let mut model = sample_model();
        let result = Command::Clear.execute(&mut model).unwrap();
        assert_eq!(result.feedback, MESSAGE_CLEAR);
        assert_eq!(model, ModelManager::default());
    }

    #[test]
    fn domain_errors_map_to_user_messages() {
        let err: CommandError = DomainError::duplicate(EntityKind::Supplier).into();
        assert_eq!(err.to_string(), "This supplier already exists in the address book");
        let err: CommandError = DomainError::not_found(EntityKind::Reservation).into();
        assert_eq!(err.to_string(), "This reservation no longer exists in the address book");
    }

    #[test]
    fn results_name_the_kind_they_touched() {
        let mut model = sample_model();
        let listed = Command::List(EntityKind::Supplier).execute(&mut model).unwrap();
        assert_eq!(listed.kind, Some(EntityKind::Supplier));
        let cleared = Command::Clear.execute(&mut model).unwrap();
        assert_eq!(cleared.kind, None);
    }

    #[test]
    fn only_record_changes_are_flagged_for_saving() {
        let model = model_with(vec![customer("Amy", "111")]);
        assert!(Command::Clear.changes_records());
        assert!(!Command::List(EntityKind::Customer).changes_records());
        assert!(!Command::Help.changes_records());
        assert_eq!(model.filtered::<Customer>().len(), 1);
    }
}
