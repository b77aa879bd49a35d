use rhrh_model::{ContainsKeywords, ModelManager, Viewed};

use super::{CommandOutcome, CommandResult};

/// Narrow the view of `T` to records matching any keyword.
pub(super) fn find<T: Viewed>(
    model: &mut ModelManager,
    keywords: ContainsKeywords,
) -> CommandOutcome {
    model.update_filter(move |record: &T| keywords.test(record));
    let shown = model.filtered::<T>().len();
    tracing::info!(kind = %T::KIND, command = "find", shown, "view filtered");
    Ok(CommandResult::new(format!("{} {}s listed!", shown, T::KIND)))
}

/// Show every record of `T` in its default order.
pub(super) fn list<T: Viewed>(model: &mut ModelManager) -> CommandOutcome {
    model.reset_sort::<T>();
    model.show_all::<T>();
    Ok(CommandResult::new(format!("Listed all {}s", T::KIND)))
}
