use core::fmt::Display;

use rhrh_model::{ModelManager, Reservation, Viewed};

use super::{CommandError, CommandOutcome, CommandResult};

/// Add `record` unless a weakly identical one is stored.
pub(super) fn add<T: Viewed + Display>(model: &mut ModelManager, record: T) -> CommandOutcome {
    if T::UNIQUE && model.book().has(&record) {
        tracing::debug!(kind = %T::KIND, "add rejected: duplicate");
        return Err(CommandError::Duplicate(T::KIND));
    }

    let feedback = format!("New {} added: {}", T::KIND, record);
    model.add(record)?;
    tracing::info!(kind = %T::KIND, command = "add", "record added");
    Ok(CommandResult::new(feedback))
}

/// Reservations must name the phone of a known customer.
pub(super) fn add_reservation(
    model: &mut ModelManager,
    reservation: Reservation,
) -> CommandOutcome {
    if !model.book().has_customer_with_phone(reservation.phone()) {
        tracing::debug!(phone = %reservation.phone(), "reservation rejected: unknown customer");
        return Err(CommandError::rejected(format!(
            "No customer with phone {} exists; add the customer first",
            reservation.phone()
        )));
    }
    add(model, reservation)
}
