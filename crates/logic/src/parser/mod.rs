//! Text-to-command parsing.
//!
//! A command line is a command word followed by arguments. Words are a verb
//! plus a one-letter kind suffix (`c`ustomer, `e`mployee, `s`upplier,
//! `r`eservation), e.g. `addc`, `delr`, `sorte`; `clear`, `help` and `exit`
//! stand alone.

mod args;
mod records;

use core::str::FromStr;

use thiserror::Error;

use rhrh_core::{DomainError, EntityKind, Index, SortOrder};
use rhrh_model::{ContainsKeywords, Customer, Employee, Record, Reservation, Supplier};

use crate::command::Command;
use args::{ArgMap, ORDER, SORT_BY};

/// Why a command line was not understood.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command")]
    UnknownCommand,

    /// Arguments do not have the expected shape; carries the usage text.
    #[error("Invalid command format! \n{0}")]
    InvalidFormat(String),

    /// An argument is well placed but its value is malformed.
    #[error("{0}")]
    InvalidValue(String),
}

impl ParseError {
    pub fn invalid_format(usage: impl Into<String>) -> Self {
        Self::InvalidFormat(usage.into())
    }
}

impl From<DomainError> for ParseError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => ParseError::InvalidValue(msg),
            other => ParseError::InvalidValue(other.to_string()),
        }
    }
}

/// Turns raw user input into a [`Command`].
pub trait CommandParser {
    fn parse(&self, raw: &str) -> Result<Command, ParseError>;
}

/// Parser for the built-in command language.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultParser;

impl CommandParser for DefaultParser {
    fn parse(&self, raw: &str) -> Result<Command, ParseError> {
        let raw = raw.trim();
        let (word, args) = match raw.split_once(char::is_whitespace) {
            Some((word, args)) => (word, args.trim()),
            None => (raw, ""),
        };

        match word {
            "" => return Err(ParseError::invalid_format(HELP_USAGE)),
            "clear" => return Ok(Command::Clear),
            "help" => return Ok(Command::Help),
            "exit" => return Ok(Command::Exit),
            _ => {}
        }

        let (verb, kind) = split_word(word).ok_or(ParseError::UnknownCommand)?;
        match verb {
            "add" => records::add(kind, args),
            "edit" => records::edit(kind, args),
            "del" => parse_delete(word, kind, args),
            "find" => parse_find(word, kind, args),
            "list" => Ok(Command::List(kind)),
            "sort" => parse_sort(word, kind, args),
            _ => Err(ParseError::UnknownCommand),
        }
    }
}

const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

fn split_word(word: &str) -> Option<(&str, EntityKind)> {
    let (verb, suffix) = word.split_at_checked(word.len().checked_sub(1)?)?;
    let kind = match suffix {
        "c" => EntityKind::Customer,
        "e" => EntityKind::Employee,
        "s" => EntityKind::Supplier,
        "r" => EntityKind::Reservation,
        _ => return None,
    };
    Some((verb, kind))
}

fn parse_delete(word: &str, kind: EntityKind, args: &str) -> Result<Command, ParseError> {
    let index = Index::from_str(args).map_err(|_| {
        ParseError::invalid_format(format!(
            "{word}: Deletes the {kind} identified by the index number used in the displayed {kind} list.\n\
             Parameters: INDEX (must be a positive integer)\n\
             Example: {word} 1"
        ))
    })?;
    Ok(Command::Delete(kind, index))
}

fn parse_find(word: &str, kind: EntityKind, args: &str) -> Result<Command, ParseError> {
    if args.is_empty() {
        return Err(ParseError::invalid_format(format!(
            "{word}: Finds all {kind}s whose fields contain any of the specified keywords \
             (case-insensitive) and displays them as a list with index numbers.\n\
             Parameters: KEYWORD [MORE_KEYWORDS]...\n\
             Example: {word} alice bob charlie"
        )));
    }
    Ok(Command::Find(kind, ContainsKeywords::new(args.split_whitespace())))
}

fn parse_sort(word: &str, kind: EntityKind, args: &str) -> Result<Command, ParseError> {
    let usage = format!(
        "{word}: Sorts the displayed {kind}s by the given field.\n\
         Parameters: by/FIELD [o/ORDER]  (ORDER is a or d, ascending by default)\n\
         Example: {word} by/p o/d"
    );
    Ok(match kind {
        EntityKind::Customer => {
            let (key, order) = sort_args::<Customer>(args, &usage)?;
            Command::SortCustomers(key, order)
        }
        EntityKind::Employee => {
            let (key, order) = sort_args::<Employee>(args, &usage)?;
            Command::SortEmployees(key, order)
        }
        EntityKind::Supplier => {
            let (key, order) = sort_args::<Supplier>(args, &usage)?;
            Command::SortSuppliers(key, order)
        }
        EntityKind::Reservation => {
            let (key, order) = sort_args::<Reservation>(args, &usage)?;
            Command::SortReservations(key, order)
        }
    })
}

fn sort_args<T: Record>(args: &str, usage: &str) -> Result<(T::SortKey, SortOrder), ParseError> {
    let map = ArgMap::tokenize(args, &[SORT_BY, ORDER]);
    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(usage));
    }
    let key = map.required(SORT_BY, usage)?.parse::<T::SortKey>()?;
    let order = match map.value(ORDER) {
        Some(order) => order.parse::<SortOrder>()?,
        None => SortOrder::Ascending,
    };
    Ok((key, order))
}
