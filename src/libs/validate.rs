//! Entity validation.
//!
//! One explicit pure pass per entity type, run once before every write.
//! Validation never fails as an error: each pass accumulates problems
//! into a map keyed by field name and the caller treats an empty map as
//! "valid". A later insert for the same key overwrites the earlier
//! entry, so the last-run check per field is authoritative.

use crate::libs::task::Task;
use crate::libs::taxonomy::{Activity, Category};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Longest accepted title, in characters.
pub const MAX_TITLE_LEN: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldError {
    /// The field is absent or carries a value of the wrong shape.
    InvalidType(&'static str),
    TooSmall,
    TooLarge,
    Empty,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidType(expected) => write!(f, "expected {}", expected),
            FieldError::TooSmall => write!(f, "value is too small"),
            FieldError::TooLarge => write!(f, "value is too large"),
            FieldError::Empty => write!(f, "must not be empty"),
        }
    }
}

/// Field name to problem. Empty map means the entity is valid.
pub type ErrorMap = BTreeMap<&'static str, FieldError>;

pub fn validate_category(category: &Category) -> ErrorMap {
    let mut errors = ErrorMap::new();
    check_title(&mut errors, "title", &category.title);
    if category.avatar.trim().is_empty() {
        errors.insert("avatar", FieldError::Empty);
    }
    errors
}

pub fn validate_activity(activity: &Activity) -> ErrorMap {
    let mut errors = ErrorMap::new();
    check_title(&mut errors, "title", &activity.title);
    if activity.category_id <= 0 {
        errors.insert("category_id", FieldError::TooSmall);
    }
    errors
}

/// Validates a task draft against "now" (epoch milliseconds).
///
/// Chronology is only enforced here, at create/edit time; stored rows
/// are never re-checked on read.
pub fn validate_task(task: &Task, now_ms: i64) -> ErrorMap {
    let mut errors = ErrorMap::new();

    check_title(&mut errors, "title", &task.title);

    if task.started_at < now_ms {
        errors.insert("started_at", FieldError::TooSmall);
    }
    if task.ended_at < task.started_at || task.ended_at < now_ms {
        errors.insert("ended_at", FieldError::TooSmall);
    }

    if task.category_id.is_none() {
        errors.insert("category_id", FieldError::InvalidType("integer"));
    }
    if task.activity_id.is_none() {
        errors.insert("activity_id", FieldError::InvalidType("integer"));
    }

    if let Some(budget) = task.budget {
        if budget < 0 {
            errors.insert("budget", FieldError::TooSmall);
        }
    }

    check_range(&mut errors, "start_latitude", task.start_latitude, 90.0);
    check_range(&mut errors, "start_longitude", task.start_longitude, 180.0);
    check_range(&mut errors, "end_latitude", task.end_latitude, 90.0);
    check_range(&mut errors, "end_longitude", task.end_longitude, 180.0);

    errors
}

fn check_title(errors: &mut ErrorMap, field: &'static str, title: &str) {
    if title.trim().is_empty() {
        errors.insert(field, FieldError::Empty);
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors.insert(field, FieldError::TooLarge);
    }
}

fn check_range(errors: &mut ErrorMap, field: &'static str, value: Option<f64>, bound: f64) {
    if let Some(value) = value {
        if value < -bound {
            errors.insert(field, FieldError::TooSmall);
        } else if value > bound {
            errors.insert(field, FieldError::TooLarge);
        }
    }
}
