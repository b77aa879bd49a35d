//! `rhrh-logic` — commands over the record model.
//!
//! Raw input goes through a [`CommandParser`] into a [`Command`], which runs
//! against a [`rhrh_model::ModelManager`]. [`LogicManager`] ties the pieces
//! together and saves through a [`SnapshotStore`] after every change to the
//! records.

pub mod command;
pub mod logic;
pub mod parser;
pub mod storage;

#[cfg(test)]
mod testutil;

pub use command::{
    Command, CommandError, CommandOutcome, CommandResult, EditCustomerDescriptor, EditDescriptor,
    EditEmployeeDescriptor, EditReservationDescriptor, EditSupplierDescriptor, UiDirective,
};
pub use logic::{LogicError, LogicManager};
pub use parser::{CommandParser, DefaultParser, ParseError};
pub use storage::{InMemoryStore, JsonFileStore, SnapshotStore, StorageError, initial_book};
