use anyhow::Context;
use taskseed_config::SeedConfig;

/// Load layered configuration, including a `.env` from the workspace or cwd.
pub fn load_config() -> anyhow::Result<SeedConfig> {
    let config = SeedConfig::load_with_dotenv().context("failed to load taskseed configuration")?;
    tracing::debug!(
        tasks = config.generation.task_count,
        sinks = config.output.sinks.len(),
        "configuration loaded"
    );
    Ok(config)
}
