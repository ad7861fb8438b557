/*
 * Responsibility
 * - boot the tokio runtime
 * - call app::run() (no logic lives here)
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    list_api::app::run().await
}
