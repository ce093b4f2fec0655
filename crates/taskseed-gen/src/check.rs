//! Audit an emitted fixture directory against the consuming application's
//! load rules.
//!
//! The application rebuilds every record through validating constructors, so
//! a fixture that looks fine as JSON can still abort its startup. Findings
//! with [`Severity::Error`] are records the application rejects; warnings are
//! records it silently rewrites or drops.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{Days, Months, NaiveDate};
use serde::Serialize;
use serde::de::DeserializeOwned;
use taskseed_core::catalog::is_task_id;
use taskseed_core::documents::{
    CategoriesDocument, DocumentKind, FixtureSet, PrioritiesDocument, TasksDocument,
};
use taskseed_core::entities::{Category, Priority, Reminder, Task};
use taskseed_core::errors::CoreError;
use taskseed_core::enums::{ReminderType, TaskStatus};

use crate::CheckError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditFinding {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub today: NaiveDate,
    pub categories: usize,
    pub priorities: usize,
    pub tasks: usize,
    pub reminders: usize,
    pub findings: Vec<AuditFinding>,
}

impl AuditReport {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings
            .iter()
            .any(|finding| finding.severity == Severity::Error)
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }
}

/// Read the three fixture documents from `dir`.
pub fn load_dir(dir: &Path) -> Result<FixtureSet, CheckError> {
    let categories: CategoriesDocument = read_document(dir, DocumentKind::Categories)?;
    let priorities: PrioritiesDocument = read_document(dir, DocumentKind::Priorities)?;
    let tasks: TasksDocument = read_document(dir, DocumentKind::Tasks)?;
    Ok(FixtureSet {
        categories: categories.categories,
        priorities: priorities.priorities,
        tasks: tasks.tasks,
    })
}

fn read_document<T: DeserializeOwned>(dir: &Path, kind: DocumentKind) -> Result<T, CheckError> {
    let path = dir.join(kind.file_name());
    let body = fs::read_to_string(&path).map_err(|source| CheckError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|source| CheckError::Parse { path, source })
}

/// Audit a loaded fixture set as the application would see it on `today`.
#[must_use]
pub fn audit(set: &FixtureSet, today: NaiveDate) -> AuditReport {
    let mut auditor = Auditor {
        today,
        findings: Vec::new(),
    };

    let category_names = auditor.names(
        "category",
        set.categories.iter().map(|c| c.name.as_str()),
        |name| Category::new(name).map(drop),
    );
    let priority_names = auditor.names(
        "priority",
        set.priorities.iter().map(|p| p.name.as_str()),
        |name| Priority::new(name).map(drop),
    );
    if !set.priorities.iter().any(Priority::is_default) {
        auditor.warn(
            None,
            "no Default priority; the application will add one".to_owned(),
        );
    }

    for task in &set.tasks {
        auditor.task(task, &category_names, &priority_names);
    }

    tracing::debug!(findings = auditor.findings.len(), "fixture audit complete");

    AuditReport {
        today,
        categories: set.categories.len(),
        priorities: set.priorities.len(),
        tasks: set.tasks.len(),
        reminders: set.tasks.iter().map(|task| task.reminders.len()).sum(),
        findings: auditor.findings,
    }
}

struct Auditor {
    today: NaiveDate,
    findings: Vec<AuditFinding>,
}

impl Auditor {
    fn error(&mut self, task_id: Option<&str>, message: String) {
        self.push(Severity::Error, task_id, message);
    }

    fn warn(&mut self, task_id: Option<&str>, message: String) {
        self.push(Severity::Warning, task_id, message);
    }

    fn push(&mut self, severity: Severity, task_id: Option<&str>, message: String) {
        self.findings.push(AuditFinding {
            severity,
            task_id: task_id.map(str::to_owned),
            message,
        });
    }

    /// Check a name catalog and return the set of usable names.
    fn names<'a>(
        &mut self,
        kind: &str,
        names: impl Iterator<Item = &'a str>,
        rebuild: impl Fn(&str) -> Result<(), CoreError>,
    ) -> HashSet<&'a str> {
        let mut seen_folded = HashSet::new();
        let mut usable = HashSet::new();
        for name in names {
            if let Err(error) = rebuild(name) {
                self.error(None, format!("{kind} '{name}' rejected: {error}"));
                continue;
            }
            if !seen_folded.insert(name.to_lowercase()) {
                self.error(
                    None,
                    format!("duplicate {kind} '{name}' (names compare case-insensitively)"),
                );
            }
            usable.insert(name);
        }
        usable
    }

    fn task(&mut self, task: &Task, categories: &HashSet<&str>, priorities: &HashSet<&str>) {
        let id = Some(task.id.as_str());

        if !is_task_id(&task.id) {
            self.warn(id, format!("id '{}' is not 8 lowercase alphanumerics", task.id));
        }
        if task.title.trim().is_empty() {
            self.error(id, "empty title".to_owned());
        }
        if task.description.trim().is_empty() {
            self.error(id, "empty description".to_owned());
        }
        if !categories.contains(task.category.as_str()) {
            self.error(id, format!("unknown category '{}'", task.category));
        }
        if !priorities.contains(task.priority.as_str()) {
            self.warn(
                id,
                format!("unknown priority '{}'; falls back to Default", task.priority),
            );
        }

        let overdue = task.is_overdue(self.today);
        match task.status {
            TaskStatus::Delayed if !overdue => {
                self.error(
                    id,
                    format!("DELAYED but deadline {} is not in the past", task.deadline),
                );
            }
            TaskStatus::Delayed | TaskStatus::Completed => {}
            status if overdue => {
                self.warn(
                    id,
                    format!(
                        "{status} with past deadline {}; will be marked DELAYED",
                        task.deadline
                    ),
                );
            }
            _ => {}
        }

        if task.status == TaskStatus::Completed && !task.reminders.is_empty() {
            self.error(
                id,
                format!("COMPLETED task carries {} reminders", task.reminders.len()),
            );
            return;
        }

        let mut dates = HashSet::new();
        for reminder in &task.reminders {
            self.reminder(task, reminder, &mut dates);
        }
    }

    fn reminder(&mut self, task: &Task, reminder: &Reminder, dates: &mut HashSet<NaiveDate>) {
        let id = Some(task.id.as_str());
        let kind = reminder.kind;

        if reminder.date < self.today {
            self.warn(
                id,
                format!(
                    "{kind} reminder on {} is in the past; dropped on load",
                    reminder.date
                ),
            );
            return;
        }

        let effective = match application_date(kind, task.deadline) {
            Some(recomputed) if recomputed != reminder.date => {
                self.warn(
                    id,
                    format!(
                        "{kind} reminder dated {} is recomputed to {recomputed} on load",
                        reminder.date
                    ),
                );
                recomputed
            }
            Some(recomputed) => recomputed,
            None => reminder.date,
        };

        if effective < self.today {
            self.error(id, format!("{kind} reminder resolves to {effective}, before today"));
        } else if effective > task.deadline {
            self.error(
                id,
                format!(
                    "{kind} reminder on {effective} is after deadline {}",
                    task.deadline
                ),
            );
        } else if !dates.insert(effective) {
            self.error(id, format!("second reminder on {effective}"));
        }
    }
}

/// The date the application derives for a relative reminder type.
///
/// The application counts a month as a calendar month, not 30 days.
fn application_date(kind: ReminderType, deadline: NaiveDate) -> Option<NaiveDate> {
    match kind {
        ReminderType::OneMonthBefore => deadline.checked_sub_months(Months::new(1)),
        ReminderType::CustomDate => None,
        relative => relative
            .offset_days()
            .and_then(|days| deadline.checked_sub_days(Days::new(days.unsigned_abs()))),
    }
}
