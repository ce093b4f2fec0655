//! One fabrication run: pools, then one task per slot, in generation order.

use chrono::NaiveDate;
use rand::Rng;
use taskseed_config::GenerationConfig;
use taskseed_core::catalog::{self, CATEGORY_NAMES, PRIORITY_NAMES};
use taskseed_core::documents::FixtureSet;
use taskseed_core::entities::Task;

use crate::pool::NamePool;
use crate::schedule::{self, Phase};
use crate::{GenerateError, reminders, text};

/// Builds fixture sets from a validated generation config.
#[derive(Debug, Clone)]
pub struct Fabricator {
    config: GenerationConfig,
}

impl Fabricator {
    /// Reject configs whose pools cannot cover every task slot, then run the
    /// remaining config checks.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerateError> {
        let tasks = config.task_count;
        for (pool, size) in [
            ("category", config.category_pool_size()),
            ("priority", config.priority_pool_size()),
        ] {
            if let Some(size) = size.filter(|&size| size < tasks) {
                return Err(GenerateError::PoolTooSmall { pool, size, tasks });
            }
        }
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate the full fixture set relative to `today`.
    ///
    /// Output depends only on `today`, the config, and the RNG stream.
    pub fn run<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<FixtureSet, GenerateError> {
        let multiplier = self.config.pool_multiplier;
        let mut categories = NamePool::shuffled("category", &CATEGORY_NAMES, multiplier, rng);
        let mut priorities = NamePool::shuffled("priority", &PRIORITY_NAMES, multiplier, rng);

        let mut tasks = Vec::with_capacity(self.config.task_count);
        for index in 0..self.config.task_count {
            let phase = Phase::of(index, &self.config);
            let task = self.task(phase, today, &mut categories, &mut priorities, rng)?;
            tracing::trace!(
                index,
                phase = phase.as_str(),
                id = %task.id,
                status = %task.status,
                reminders = task.reminders.len(),
                "fabricated task"
            );
            tasks.push(task);
        }

        tracing::debug!(
            tasks = tasks.len(),
            categories_left = categories.remaining(),
            priorities_left = priorities.remaining(),
            "fabrication complete"
        );

        Ok(FixtureSet {
            categories: catalog::categories(),
            priorities: catalog::priorities(),
            tasks,
        })
    }

    fn task<R: Rng + ?Sized>(
        &self,
        phase: Phase,
        today: NaiveDate,
        categories: &mut NamePool,
        priorities: &mut NamePool,
        rng: &mut R,
    ) -> Result<Task, GenerateError> {
        let id = text::task_id(rng);
        let title = text::title(rng);
        let description = text::description(rng)?;
        let category = categories.draw()?.to_owned();
        let priority = priorities.draw()?.to_owned();
        let slot = schedule::assign(phase, today, self.config.horizon, rng)?;
        let reminders = reminders::plan(
            slot.status,
            slot.deadline,
            today,
            self.config.reminder_probability,
            rng,
        )?;

        Ok(Task {
            id,
            title,
            description,
            category,
            priority,
            deadline: slot.deadline,
            status: slot.status,
            reminders,
        })
    }
}
