//! Schema command - Creates the example table.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the schema command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    db.ensure_schema().await?;

    tracing::info!("Schema is up to date");
    Ok(())
}
