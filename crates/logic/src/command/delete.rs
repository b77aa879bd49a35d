use core::fmt::Display;

use rhrh_core::Index;
use rhrh_model::{ModelManager, Viewed};

use super::{CommandError, CommandOutcome, CommandResult};

/// Delete the record shown at `index` in the current filtered view.
pub(super) fn delete<T: Viewed + Display>(
    model: &mut ModelManager,
    index: Index,
) -> CommandOutcome {
    let target = model
        .filtered::<T>()
        .get(index)
        .ok_or(CommandError::InvalidIndex(T::KIND))?;

    model.delete(&target)?;
    tracing::info!(
        kind = %T::KIND,
        command = "delete",
        index = index.one_based(),
        "record deleted"
    );
    Ok(CommandResult::new(format!("Deleted {}: {}", T::KIND, target)))
}
