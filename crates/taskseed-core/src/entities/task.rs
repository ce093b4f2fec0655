use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Reminder;
use crate::enums::TaskStatus;

/// A generated work item with a deadline, a status, and its reminders.
///
/// `category` and `priority` hold canonical names rather than nested records,
/// matching the layout of `tasks.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub deadline: NaiveDate,
    pub status: TaskStatus,
    pub reminders: Vec<Reminder>,
}

impl Task {
    /// Whether the deadline falls strictly before `today`.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.deadline < today
    }
}
