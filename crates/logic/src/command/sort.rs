use rhrh_core::SortOrder;
use rhrh_model::{ModelManager, Viewed};

use super::{CommandOutcome, CommandResult};

/// Reorder the records of `T`; membership and filter are untouched.
pub(super) fn sort<T: Viewed>(
    model: &mut ModelManager,
    key: T::SortKey,
    order: SortOrder,
) -> CommandOutcome {
    model.set_comparator(T::comparator(key, order));
    tracing::info!(kind = %T::KIND, command = "sort", ?key, ?order, "records reordered");

    let direction = match order {
        SortOrder::Ascending => "ascending",
        SortOrder::Descending => "descending",
    };
    Ok(CommandResult::new(format!(
        "Sorted {}s by {:?} in {} order",
        T::KIND,
        key,
        direction
    )))
}
