//! Entry point for the presentation layer: text in, feedback out.

use thiserror::Error;

use rhrh_model::{FilteredList, ModelManager, Viewed};

use crate::command::{CommandError, CommandResult};
use crate::parser::{CommandParser, DefaultParser};
use crate::storage::{JsonFileStore, SnapshotStore, StorageError, StorageResult, initial_book};

#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The command ran, but its result could not be saved.
    #[error("Could not save data: {0}")]
    Storage(#[from] StorageError),
}

/// Parses, executes and persists commands against one [`ModelManager`].
pub struct LogicManager<P = DefaultParser, S = JsonFileStore> {
    model: ModelManager,
    parser: P,
    store: S,
}

impl<P: CommandParser, S: SnapshotStore> LogicManager<P, S> {
    pub fn new(model: ModelManager, parser: P, store: S) -> Self {
        Self {
            model,
            parser,
            store,
        }
    }

    /// Start from whatever `store` holds (sample records if it is empty).
    pub fn open(parser: P, store: S) -> StorageResult<Self> {
        let book = initial_book(&store)?;
        Ok(Self::new(ModelManager::new(book), parser, store))
    }

    pub fn execute(&mut self, raw: &str) -> Result<CommandResult, LogicError> {
        let span = tracing::info_span!("command", input = raw);
        let _guard = span.enter();

        let command = self.parser.parse(raw).map_err(|e| {
            tracing::warn!(error = %e, "command not understood");
            CommandError::from(e)
        })?;
        let name = command.name();
        let persist = command.changes_records();

        let result = command.execute(&mut self.model).map_err(|e| {
            tracing::warn!(command = name, error = %e, "command rejected");
            e
        })?;

        if persist {
            self.store.save(&self.model.snapshot()).map_err(|e| {
                tracing::error!(command = name, error = %e, "save failed");
                e
            })?;
        }
        Ok(result)
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn filtered<T: Viewed>(&self) -> &FilteredList<T> {
        self.model.filtered::<T>()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
