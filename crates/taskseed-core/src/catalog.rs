//! Canonical names and text vocabularies the generator draws from.

use crate::entities::{Category, Priority};

/// Category names, in the order they are written to `categories.json`.
pub const CATEGORY_NAMES: [&str; 10] = [
    "Work",
    "Personal",
    "Health",
    "Finance",
    "Education",
    "Shopping",
    "Travel",
    "Home",
    "Hobbies",
    "Projects",
];

/// Priority names, in the order they are written to `priorities.json`.
pub const PRIORITY_NAMES: [&str; 10] = [
    "Default",
    "Low",
    "Medium",
    "High",
    "Urgent",
    "Critical",
    "Optional",
    "Long-Term",
    "Short-Term",
    "Backlog",
];

/// Words that make up task titles.
pub const TITLE_WORDS: [&str; 10] = [
    "Project", "Meeting", "Update", "Plan", "Design", "Report", "Test", "Code", "Fix", "Develop",
];

/// Sentences that make up task descriptions.
pub const DESCRIPTION_SENTENCES: [&str; 10] = [
    "This task is critical for the project.",
    "Ensure that all requirements are met.",
    "Update the documentation accordingly.",
    "Coordinate with the team for progress.",
    "This needs to be reviewed before submission.",
    "Schedule a meeting to discuss updates.",
    "Fix all reported bugs before release.",
    "Prepare a report on the latest changes.",
    "Check compatibility with existing modules.",
    "Test thoroughly to avoid future issues.",
];

/// Characters a task id is drawn from.
pub const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a task id.
pub const ID_LENGTH: usize = 8;

/// The canonical category records.
#[must_use]
pub fn categories() -> Vec<Category> {
    CATEGORY_NAMES
        .iter()
        .map(|name| Category {
            name: (*name).to_owned(),
        })
        .collect()
}

/// The canonical priority records.
#[must_use]
pub fn priorities() -> Vec<Priority> {
    PRIORITY_NAMES
        .iter()
        .map(|name| Priority {
            name: (*name).to_owned(),
        })
        .collect()
}

/// Whether `id` has the length and charset of a generated task id.
#[must_use]
pub fn is_task_id(id: &str) -> bool {
    id.len() == ID_LENGTH && id.bytes().all(|b| ID_ALPHABET.contains(&b))
}
