//! Document envelopes for the three emitted JSON files.
//!
//! Each file is a JSON object with a single named field holding the list:
//! `{"categories": [...]}`, `{"priorities": [...]}`, `{"tasks": [...]}`.

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::{Category, Priority, Task};
use crate::errors::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoriesDocument {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PrioritiesDocument {
    pub priorities: Vec<Priority>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TasksDocument {
    pub tasks: Vec<Task>,
}

/// One complete generated fixture: every record of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSet {
    pub categories: Vec<Category>,
    pub priorities: Vec<Priority>,
    pub tasks: Vec<Task>,
}

impl FixtureSet {
    /// Render the document of `kind` as pretty JSON with 4-space indentation.
    pub fn render(&self, kind: DocumentKind) -> Result<String, CoreError> {
        match kind {
            DocumentKind::Categories => to_pretty_json(&CategoriesDocument {
                categories: self.categories.clone(),
            }),
            DocumentKind::Priorities => to_pretty_json(&PrioritiesDocument {
                priorities: self.priorities.clone(),
            }),
            DocumentKind::Tasks => to_pretty_json(&TasksDocument {
                tasks: self.tasks.clone(),
            }),
        }
    }
}

/// Serialize with 4-space indentation, the layout the consuming application writes.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, CoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|error| CoreError::Validation(error.to_string()))
}

/// The three fixture documents, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Categories,
    Priorities,
    Tasks,
}

impl DocumentKind {
    pub const ALL: [Self; 3] = [Self::Categories, Self::Priorities, Self::Tasks];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Priorities => "priorities",
            Self::Tasks => "tasks",
        }
    }

    /// File name inside a sink directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Categories => "categories.json",
            Self::Priorities => "priorities.json",
            Self::Tasks => "tasks.json",
        }
    }

    /// JSON Schema of the document envelope.
    #[must_use]
    pub fn schema(self) -> serde_json::Value {
        match self {
            Self::Categories => schema_for!(CategoriesDocument).to_value(),
            Self::Priorities => schema_for!(PrioritiesDocument).to_value(),
            Self::Tasks => schema_for!(TasksDocument).to_value(),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownDocument(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog;

    fn sample_set() -> FixtureSet {
        FixtureSet {
            categories: catalog::categories(),
            priorities: catalog::priorities(),
            tasks: Vec::new(),
        }
    }

    #[test]
    fn categories_document_has_single_named_field() {
        let rendered = sample_set().render(DocumentKind::Categories).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["categories"].as_array().unwrap().len(), 10);
        assert_eq!(object["categories"][0]["name"], "Work");
    }

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let rendered = to_pretty_json(&CategoriesDocument {
            categories: vec![Category {
                name: "Work".into(),
            }],
        })
        .unwrap();
        assert_eq!(
            rendered,
            "{\n    \"categories\": [\n        {\n            \"name\": \"Work\"\n        }\n    ]\n}"
        );
    }

    #[test]
    fn kind_parses_from_name() {
        assert_eq!("tasks".parse::<DocumentKind>().unwrap(), DocumentKind::Tasks);
        assert!("reminders".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn file_names_follow_kind_names() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.file_name(), format!("{kind}.json"));
        }
    }
}
