use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ReminderType;

/// A scheduled notice tied to a task's deadline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Reminder {
    #[serde(rename = "type")]
    pub kind: ReminderType,
    pub date: NaiveDate,
}
