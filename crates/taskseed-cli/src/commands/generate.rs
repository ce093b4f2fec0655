use anyhow::{Context, bail};
use chrono::NaiveDate;
use serde::Serialize;
use taskseed_config::SeedConfig;
use taskseed_gen::fabricate::Fabricator;
use taskseed_gen::rng;
use taskseed_gen::sink::{self, SinkReport};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::commands::shared::today::{effective_today, local_today};
use crate::output::report;

/// Printed after a run. The seed is enough to replay it.
#[derive(Debug, Serialize)]
struct GenerateSummary {
    seed: u64,
    today: NaiveDate,
    tasks: usize,
    reminders: usize,
    sinks: Vec<SinkReport>,
}

/// Handle `taskseed generate`.
pub fn handle(
    args: &GenerateArgs,
    mut config: SeedConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    apply_overrides(&mut config, args);
    config.validate().context("invalid generation settings")?;

    let today = effective_today(args.today, config.generation.today, local_today());
    let seed = rng::resolve_seed(config.generation.seed)?;
    tracing::info!(seed, %today, tasks = config.generation.task_count, "fabricating fixtures");

    let fabricator = Fabricator::new(config.generation.clone())?;
    let set = fabricator
        .run(today, &mut rng::seeded(seed))
        .with_context(|| format!("fixture generation failed (seed {seed}, today {today})"))?;

    let reports = sink::write_all(&set, &config.output)?;
    let failed = reports.iter().filter(|report| !report.is_ok()).count();
    let total = reports.len();

    let summary = GenerateSummary {
        seed,
        today,
        tasks: set.tasks.len(),
        reminders: set.tasks.iter().map(|task| task.reminders.len()).sum(),
        sinks: reports,
    };
    report(&summary, flags)?;

    if failed > 0 {
        bail!("{failed} of {total} sinks failed; see the summary for details");
    }
    Ok(())
}

/// Fold command-line flags over the loaded configuration.
fn apply_overrides(config: &mut SeedConfig, args: &GenerateArgs) {
    if let Some(seed) = args.seed {
        config.generation.seed = Some(seed);
    }
    if let Some(today) = args.today {
        config.generation.today = Some(today);
    }
    if !args.out.is_empty() {
        config.output.sinks.clone_from(&args.out);
    }
    if args.create_dirs {
        config.output.create_missing_dirs = true;
    }
}
