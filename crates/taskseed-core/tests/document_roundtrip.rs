//! Serde roundtrip and JsonSchema validation tests for the fixture documents.

use chrono::NaiveDate;
use taskseed_core::catalog;
use taskseed_core::documents::*;
use taskseed_core::entities::*;
use taskseed_core::enums::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $kind:expr, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip through the 4-space layout
            let json_str = to_pretty_json(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = $kind.schema();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    categories_roundtrip,
    CategoriesDocument,
    DocumentKind::Categories,
    CategoriesDocument {
        categories: catalog::categories(),
    }
);

roundtrip_and_validate!(
    priorities_roundtrip,
    PrioritiesDocument,
    DocumentKind::Priorities,
    PrioritiesDocument {
        priorities: catalog::priorities(),
    }
);

roundtrip_and_validate!(
    tasks_roundtrip,
    TasksDocument,
    DocumentKind::Tasks,
    TasksDocument {
        tasks: vec![
            Task {
                id: "k3v9x0ab".into(),
                title: "Plan Report".into(),
                description: "Ensure that all requirements are met. Fix all reported bugs before release."
                    .into(),
                category: "Work".into(),
                priority: "Urgent".into(),
                deadline: date(2026, 11, 30),
                status: TaskStatus::Open,
                reminders: vec![
                    Reminder {
                        kind: ReminderType::OneDayBefore,
                        date: date(2026, 11, 29),
                    },
                    Reminder {
                        kind: ReminderType::CustomDate,
                        date: date(2026, 11, 2),
                    },
                ],
            },
            Task {
                id: "00zz11yy".into(),
                title: "Fix".into(),
                description: "Update the documentation accordingly. Test thoroughly to avoid future issues."
                    .into(),
                category: "Travel".into(),
                priority: "Backlog".into(),
                deadline: date(2026, 10, 12),
                status: TaskStatus::Delayed,
                reminders: Vec::new(),
            },
        ],
    }
);

#[test]
fn task_json_uses_wire_field_names() {
    let task = Task {
        id: "abcd1234".into(),
        title: "Code".into(),
        description: "Schedule a meeting to discuss updates. Check compatibility with existing modules."
            .into(),
        category: "Home".into(),
        priority: "Low".into(),
        deadline: date(2026, 12, 1),
        status: TaskStatus::InProgress,
        reminders: vec![Reminder {
            kind: ReminderType::OneWeekBefore,
            date: date(2026, 11, 24),
        }],
    };

    let value = serde_json::to_value(&task).unwrap();
    assert_eq!(value["deadline"], "2026-12-01");
    assert_eq!(value["status"], "IN_PROGRESS");
    assert_eq!(value["reminders"][0]["type"], "ONE_WEEK_BEFORE");
    assert_eq!(value["reminders"][0]["date"], "2026-11-24");
}

#[test]
fn tasks_schema_rejects_unknown_status() {
    let schema = DocumentKind::Tasks.schema();
    let instance = serde_json::json!({
        "tasks": [{
            "id": "abcd1234",
            "title": "Code",
            "description": "Fix all reported bugs before release.",
            "category": "Home",
            "priority": "Low",
            "deadline": "2026-12-01",
            "status": "ARCHIVED",
            "reminders": []
        }]
    });
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}
