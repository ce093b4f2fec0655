//! Generation parameters: task counts, phase sizes, pools, reminders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taskseed_core::catalog::{CATEGORY_NAMES, PRIORITY_NAMES};

use crate::ConfigError;

const fn default_task_count() -> usize {
    50
}

const fn default_overdue_tasks() -> usize {
    3
}

const fn default_short_term_tasks() -> usize {
    5
}

const fn default_pool_multiplier() -> usize {
    5
}

/// Exclusive upper bound for long-term deadlines.
fn default_horizon() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 12, 31).unwrap_or(NaiveDate::MAX)
}

const fn default_reminder_probability() -> f64 {
    0.5
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct GenerationConfig {
    /// Total number of tasks per run.
    #[serde(default = "default_task_count")]
    pub task_count: usize,

    /// Leading tasks with a past deadline and `DELAYED` status.
    #[serde(default = "default_overdue_tasks")]
    pub overdue_tasks: usize,

    /// Tasks following the overdue phase with a deadline within a week.
    #[serde(default = "default_short_term_tasks")]
    pub short_term_tasks: usize,

    /// How many times each canonical name appears in its pool.
    #[serde(default = "default_pool_multiplier")]
    pub pool_multiplier: usize,

    /// Exclusive bound: long-term deadlines fall strictly before this date.
    #[serde(default = "default_horizon")]
    pub horizon: NaiveDate,

    /// Chance that each qualifying reminder type is attached.
    #[serde(default = "default_reminder_probability")]
    pub reminder_probability: f64,

    /// RNG seed. Unset means a fresh entropy seed per run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Reference date. Unset means the local calendar date at startup.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            task_count: default_task_count(),
            overdue_tasks: default_overdue_tasks(),
            short_term_tasks: default_short_term_tasks(),
            pool_multiplier: default_pool_multiplier(),
            horizon: default_horizon(),
            reminder_probability: default_reminder_probability(),
            seed: None,
            today: None,
        }
    }
}

impl GenerationConfig {
    /// Entries in the category pool, or `None` if the size overflows.
    #[must_use]
    pub const fn category_pool_size(&self) -> Option<usize> {
        CATEGORY_NAMES.len().checked_mul(self.pool_multiplier)
    }

    /// Entries in the priority pool, or `None` if the size overflows.
    #[must_use]
    pub const fn priority_pool_size(&self) -> Option<usize> {
        PRIORITY_NAMES.len().checked_mul(self.pool_multiplier)
    }

    /// Tasks left for the long-term phase once the leading phases are filled.
    #[must_use]
    pub const fn long_term_tasks(&self) -> usize {
        self.task_count
            .saturating_sub(self.overdue_tasks)
            .saturating_sub(self.short_term_tasks)
    }

    /// Reject settings that would make a run fail partway through.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.task_count == 0 {
            return Err(ConfigError::invalid(
                "generation.task_count",
                "must be at least 1",
            ));
        }
        // Pools never need more than one copy of each name per task.
        if self.pool_multiplier > self.task_count {
            return Err(ConfigError::invalid(
                "generation.pool_multiplier",
                format!(
                    "{} exceeds task_count ({})",
                    self.pool_multiplier, self.task_count
                ),
            ));
        }
        let pool = self
            .category_pool_size()
            .zip(self.priority_pool_size())
            .map(|(categories, priorities)| categories.min(priorities))
            .ok_or_else(|| {
                ConfigError::invalid("generation.pool_multiplier", "pool size overflows usize")
            })?;
        if pool < self.task_count {
            return Err(ConfigError::invalid(
                "generation.pool_multiplier",
                format!(
                    "pools hold {pool} names but {} tasks are requested",
                    self.task_count
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.reminder_probability) {
            return Err(ConfigError::invalid(
                "generation.reminder_probability",
                format!("{} is outside [0, 1]", self.reminder_probability),
            ));
        }
        Ok(())
    }
}
