use anyhow::{Context, bail};
use taskseed_config::SeedConfig;
use taskseed_gen::check::{self, Severity};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::commands::shared::today::{effective_today, local_today};
use crate::output::output;

/// Handle `taskseed check`.
pub fn handle(args: &CheckArgs, config: &SeedConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let today = effective_today(args.today, config.generation.today, local_today());
    let set = check::load_dir(&args.dir)
        .with_context(|| format!("failed to load fixtures from {}", args.dir.display()))?;

    let report = check::audit(&set, today);
    output(&report, flags.format)?;

    if report.has_errors() {
        bail!(
            "{} errors and {} warnings in {}",
            report.count(Severity::Error),
            report.count(Severity::Warning),
            args.dir.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
        }
    }

    fn write(dir: &TempDir, name: &str, body: &str) {
        fs::write(dir.path().join(name), body).expect("write fixture");
    }

    #[test]
    fn clean_directory_passes() {
        let dir = TempDir::new().expect("tempdir");
        write(&dir, "categories.json", r#"{"categories":[{"name":"Work"}]}"#);
        write(&dir, "priorities.json", r#"{"priorities":[{"name":"Default"}]}"#);
        write(
            &dir,
            "tasks.json",
            r#"{"tasks":[{"id":"AB12CD34","title":"Plan","description":"Do it.",
            "category":"Work","priority":"Default","deadline":"2026-10-30",
            "status":"OPEN","reminders":[]}]}"#,
        );
        let args = CheckArgs {
            dir: dir.path().to_path_buf(),
            today: NaiveDate::from_ymd_opt(2026, 10, 19),
        };

        handle(&args, &SeedConfig::default(), &flags()).expect("audit passes");
    }

    #[test]
    fn audit_errors_fail_the_command() {
        let dir = TempDir::new().expect("tempdir");
        write(&dir, "categories.json", r#"{"categories":[{"name":"Work"}]}"#);
        write(&dir, "priorities.json", r#"{"priorities":[{"name":"Default"}]}"#);
        write(
            &dir,
            "tasks.json",
            r#"{"tasks":[{"id":"AB12CD34","title":"Plan","description":"Do it.",
            "category":"Nowhere","priority":"Default","deadline":"2026-10-30",
            "status":"OPEN","reminders":[]}]}"#,
        );
        let args = CheckArgs {
            dir: dir.path().to_path_buf(),
            today: NaiveDate::from_ymd_opt(2026, 10, 19),
        };

        let error = handle(&args, &SeedConfig::default(), &flags()).unwrap_err();
        assert!(error.to_string().contains("1 errors"));
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = TempDir::new().expect("tempdir");
        let args = CheckArgs {
            dir: dir.path().join("nope"),
            today: None,
        };
        let error = handle(&args, &SeedConfig::default(), &flags()).unwrap_err();
        assert!(error.to_string().contains("failed to load fixtures"));
    }
}
