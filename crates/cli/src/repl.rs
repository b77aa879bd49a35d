use core::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Context;

use rhrh_core::EntityKind;
use rhrh_logic::{CommandParser, LogicError, LogicManager, SnapshotStore, UiDirective};
use rhrh_model::{Customer, Employee, FilteredList, ModelManager, Reservation, Supplier};

pub const WELCOME: &str = "Welcome to the restaurant back office. Type `help` for commands.";

pub const HELP: &str = "\
Commands (suffix c/e/s/r = customer/employee/supplier/reservation):
  addc n/NAME p/PHONE e/EMAIL a/ADDRESS [lp/POINTS] [al/ALLERGY]... [sr/REQUEST]... [t/TAG]...
  adde n/NAME p/PHONE e/EMAIL a/ADDRESS jt/JOB_TITLE [l/LEAVES] [s/SALARY] [sh/YYYY-MM-DD HHMM]... [t/TAG]...
  adds n/NAME p/PHONE e/EMAIL a/ADDRESS st/SUPPLY_TYPE dd/DELIVERY_DETAILS [t/TAG]...
  addr p/PHONE np/NUMBER_OF_PEOPLE dt/YYYY-MM-DD HHMM [r/REMARK] [t/TAG]...
  edit<c|e|s|r> INDEX [FIELD/VALUE]...
  del<c|e|s|r> INDEX
  find<c|e|s|r> KEYWORD [MORE_KEYWORDS]...
  list<c|e|s|r>
  sort<c|e|s|r> by/FIELD [o/a|d]
  clear | help | exit";

/// Read commands from `input` until `exit` or end of input.
///
/// Command failures are printed and the loop goes on; only I/O errors on
/// `input`/`output` end it early.
pub fn run<P, S>(
    logic: &mut LogicManager<P, S>,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<()>
where
    P: CommandParser,
    S: SnapshotStore,
{
    writeln!(output, "{WELCOME}")?;
    for line in input.lines() {
        let line = line.context("reading command")?;
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                writeln!(output, "{}", result.feedback)?;
                match result.directive {
                    Some(UiDirective::Exit) => break,
                    Some(UiDirective::ShowHelp) => writeln!(output, "{HELP}")?,
                    None => {}
                }
                if let Some(kind) = result.kind {
                    render(logic.model(), kind, &mut output)?;
                }
            }
            Err(LogicError::Storage(e)) => {
                writeln!(output, "Could not save data: {e}")?;
            }
            Err(LogicError::Command(e)) => writeln!(output, "{e}")?,
        }
    }
    output.flush()?;
    Ok(())
}

fn render(model: &ModelManager, kind: EntityKind, output: &mut impl Write) -> std::io::Result<()> {
    match kind {
        EntityKind::Customer => write_list(model.filtered::<Customer>(), output),
        EntityKind::Employee => write_list(model.filtered::<Employee>(), output),
        EntityKind::Supplier => write_list(model.filtered::<Supplier>(), output),
        EntityKind::Reservation => write_list(model.filtered::<Reservation>(), output),
    }
}

fn write_list<T: Display + Clone + 'static>(
    list: &FilteredList<T>,
    output: &mut impl Write,
) -> std::io::Result<()> {
    for (i, record) in list.items().iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, record)?;
    }
    Ok(())
}
