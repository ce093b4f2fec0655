//! Entity structs for the fixture records.
//!
//! Field names match the JSON keys the consuming application reads. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema validation.

mod category;
mod priority;
mod reminder;
mod task;

pub use category::Category;
pub use priority::{DEFAULT_PRIORITY, Priority};
pub use reminder::Reminder;
pub use task::Task;

use crate::errors::CoreError;

/// Reject names that are empty or whitespace-only.
fn require_name(kind: &str, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!("{kind} name cannot be empty")));
    }
    Ok(())
}
