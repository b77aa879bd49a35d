use anyhow::Context;

use rhrh_cli::AppConfig;
use rhrh_logic::{DefaultParser, JsonFileStore, LogicManager};

fn main() -> anyhow::Result<()> {
    rhrh_observability::init();

    let config = AppConfig::from_env();
    let store = JsonFileStore::new(&config.data_file);
    let mut logic = LogicManager::open(DefaultParser, store)
        .with_context(|| format!("loading records from {}", config.data_file.display()))?;
    tracing::info!(data_file = %config.data_file.display(), "records loaded");

    let stdin = std::io::stdin();
    rhrh_cli::run(&mut logic, stdin.lock(), std::io::stdout().lock())
}
