//! Task status and reminder type enums.
//!
//! Both enums serialize in `SCREAMING_SNAKE_CASE`, the spelling the consuming
//! application uses for its `TaskStatus` and `ReminderType` values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a task.
///
/// `Delayed` is reserved for tasks whose deadline has already passed; the
/// generator only assigns it to the overdue phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Open,
    InProgress,
    Postponed,
    Completed,
    Delayed,
}

impl TaskStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Open,
        Self::InProgress,
        Self::Postponed,
        Self::Completed,
        Self::Delayed,
    ];

    /// Statuses that may be assigned to a task whose deadline has not passed.
    pub const ASSIGNABLE: [Self; 4] = [
        Self::Open,
        Self::InProgress,
        Self::Postponed,
        Self::Completed,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Postponed => "POSTPONED",
            Self::Completed => "COMPLETED",
            Self::Delayed => "DELAYED",
        }
    }

    /// Completed tasks carry no reminders.
    #[must_use]
    pub const fn accepts_reminders(self) -> bool {
        !matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown task status '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// ReminderType
// ---------------------------------------------------------------------------

/// Kind of reminder attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderType {
    OneDayBefore,
    OneWeekBefore,
    OneMonthBefore,
    CustomDate,
}

impl ReminderType {
    /// Every reminder type, in the order reminders are emitted.
    pub const ALL: [Self; 4] = [
        Self::OneDayBefore,
        Self::OneWeekBefore,
        Self::OneMonthBefore,
        Self::CustomDate,
    ];

    /// Days between the reminder and the deadline for the relative types.
    ///
    /// A month is a flat 30 days. `CustomDate` has no fixed offset.
    #[must_use]
    pub const fn offset_days(self) -> Option<i64> {
        match self {
            Self::OneDayBefore => Some(1),
            Self::OneWeekBefore => Some(7),
            Self::OneMonthBefore => Some(30),
            Self::CustomDate => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDayBefore => "ONE_DAY_BEFORE",
            Self::OneWeekBefore => "ONE_WEEK_BEFORE",
            Self::OneMonthBefore => "ONE_MONTH_BEFORE",
            Self::CustomDate => "CUSTOM_DATE",
        }
    }
}

impl fmt::Display for ReminderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_in_wire_spelling() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let back: TaskStatus = serde_json::from_str("\"DELAYED\"").unwrap();
        assert_eq!(back, TaskStatus::Delayed);
    }

    #[test]
    fn status_display_matches_serde() {
        for status in TaskStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn assignable_excludes_delayed() {
        assert!(!TaskStatus::ASSIGNABLE.contains(&TaskStatus::Delayed));
        assert_eq!(TaskStatus::ASSIGNABLE.len(), TaskStatus::ALL.len() - 1);
    }

    #[test]
    fn status_parses_from_str() {
        assert_eq!("POSTPONED".parse::<TaskStatus>().unwrap(), TaskStatus::Postponed);
        assert!("postponed".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn only_completed_rejects_reminders() {
        for status in TaskStatus::ALL {
            assert_eq!(status.accepts_reminders(), status != TaskStatus::Completed);
        }
    }

    #[test]
    fn reminder_type_wire_spelling() {
        let json = serde_json::to_string(&ReminderType::OneMonthBefore).unwrap();
        assert_eq!(json, "\"ONE_MONTH_BEFORE\"");
        assert_eq!(ReminderType::CustomDate.to_string(), "CUSTOM_DATE");
    }

    #[test]
    fn relative_offsets() {
        assert_eq!(ReminderType::OneDayBefore.offset_days(), Some(1));
        assert_eq!(ReminderType::OneWeekBefore.offset_days(), Some(7));
        assert_eq!(ReminderType::OneMonthBefore.offset_days(), Some(30));
        assert_eq!(ReminderType::CustomDate.offset_days(), None);
    }
}
