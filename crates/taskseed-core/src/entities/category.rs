use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A named grouping for tasks (e.g. "Work", "Travel").
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Category {
    pub name: String,
}

impl Category {
    /// Build a category, rejecting blank names.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        super::require_name("Category", &name)?;
        Ok(Self { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        assert!(Category::new("   ").is_err());
        assert_eq!(Category::new("Work").unwrap().name, "Work");
    }
}
