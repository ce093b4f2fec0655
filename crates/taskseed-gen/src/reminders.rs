//! Reminder synthesis.
//!
//! Each reminder type gets an independent coin flip. A heads only yields a
//! reminder when the type's date would still be in the future.

use chrono::NaiveDate;
use rand::Rng;
use taskseed_core::entities::Reminder;
use taskseed_core::enums::{ReminderType, TaskStatus};

use crate::GenerateError;
use crate::schedule::shift;

/// Reminders for a task with `status` and `deadline`, in fixed type order.
pub fn plan<R: Rng + ?Sized>(
    status: TaskStatus,
    deadline: NaiveDate,
    today: NaiveDate,
    probability: f64,
    rng: &mut R,
) -> Result<Vec<Reminder>, GenerateError> {
    if !status.accepts_reminders() {
        return Ok(Vec::new());
    }

    let days_left = (deadline - today).num_days();
    let mut reminders = Vec::new();
    for kind in ReminderType::ALL {
        if !rng.gen_bool(probability) {
            continue;
        }
        let date = match kind.offset_days() {
            Some(offset) if days_left > offset => shift(deadline, -offset)?,
            Some(_) => continue,
            None if days_left > 0 => shift(today, rng.gen_range(0..=days_left.max(1)))?,
            None => continue,
        };
        reminders.push(Reminder { kind, date });
    }
    Ok(reminders)
}
