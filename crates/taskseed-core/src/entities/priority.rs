use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Name of the fallback priority the consuming application assigns when a
/// task has none.
pub const DEFAULT_PRIORITY: &str = "Default";

/// A named urgency level for tasks (e.g. "Low", "Urgent").
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Priority {
    pub name: String,
}

impl Priority {
    /// Build a priority, rejecting blank names.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        super::require_name("Priority", &name)?;
        Ok(Self { name })
    }

    /// Whether this is the fallback priority. Case-insensitive.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.name.eq_ignore_ascii_case(DEFAULT_PRIORITY)
    }
}
