//! Deadline and status assignment by phase.
//!
//! ```text
//! index:  0 .. overdue | .. + short_term | .. task_count
//! phase:  Overdue      | ShortTerm       | LongTerm
//! ```

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;
use taskseed_config::GenerationConfig;
use taskseed_core::enums::TaskStatus;

use crate::GenerateError;

/// The contiguous index range a task slot falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Deadline 1 to 10 days ago, always `DELAYED`.
    Overdue,
    /// Deadline today or within the next 7 days.
    ShortTerm,
    /// Deadline between tomorrow and the day before the horizon.
    LongTerm,
}

impl Phase {
    /// Phase of the task at `index` in generation order.
    #[must_use]
    pub const fn of(index: usize, config: &GenerationConfig) -> Self {
        if index < config.overdue_tasks {
            Self::Overdue
        } else if index < config.overdue_tasks + config.short_term_tasks {
            Self::ShortTerm
        } else {
            Self::LongTerm
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::ShortTerm => "short_term",
            Self::LongTerm => "long_term",
        }
    }
}

/// Deadline and status for one task slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub deadline: NaiveDate,
    pub status: TaskStatus,
}

/// Draw the deadline and status for a slot in `phase`.
pub fn assign<R: Rng + ?Sized>(
    phase: Phase,
    today: NaiveDate,
    horizon: NaiveDate,
    rng: &mut R,
) -> Result<Slot, GenerateError> {
    match phase {
        Phase::Overdue => {
            let days = rng.gen_range(1..=10);
            Ok(Slot {
                deadline: shift(today, -days)?,
                status: TaskStatus::Delayed,
            })
        }
        Phase::ShortTerm => {
            let days = rng.gen_range(0..=7);
            Ok(Slot {
                deadline: shift(today, days)?,
                status: assignable_status(rng),
            })
        }
        Phase::LongTerm => {
            // The horizon itself is excluded.
            let span = (horizon - today).num_days() - 1;
            if span < 1 {
                return Err(GenerateError::HorizonElapsed { today, horizon });
            }
            let days = rng.gen_range(1..=span);
            Ok(Slot {
                deadline: shift(today, days)?,
                status: assignable_status(rng),
            })
        }
    }
}

/// Uniform choice among every status except `DELAYED`.
fn assignable_status<R: Rng + ?Sized>(rng: &mut R) -> TaskStatus {
    TaskStatus::ASSIGNABLE
        .choose(rng)
        .copied()
        .unwrap_or(TaskStatus::Open)
}

/// `base` moved by a signed number of days.
pub(crate) fn shift(base: NaiveDate, days: i64) -> Result<NaiveDate, GenerateError> {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        base.checked_add_days(magnitude)
    } else {
        base.checked_sub_days(magnitude)
    };
    shifted.ok_or(GenerateError::DateOutOfRange { base, days })
}
