//! The fixed category/activity taxonomy.
//!
//! Categories and their activities are seeded exactly once, when the
//! schema bootstrapper first creates the tables. The taxonomy is the
//! immutable root of the data model: the application never mutates or
//! deletes these rows afterwards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<i64>,
    pub title: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Option<i64>,
    pub title: String,
    pub category_id: i64,
}

/// Seed rows: `(category title, avatar icon key, activities)`.
///
/// Category titles are unique; the seeding insert ignores duplicates
/// keyed on that uniqueness, so a partially created taxonomy heals on
/// the next bootstrap.
pub const SEED: &[(&str, &str, &[&str])] = &[
    (
        "Sport",
        "dumbbell",
        &["Running", "Gym session", "Swimming", "Cycling", "Yoga", "Hiking", "Football match"],
    ),
    (
        "Food",
        "restaurant",
        &["Breakfast out", "Lunch", "Dinner", "Coffee break", "Picnic", "Cooking class"],
    ),
    (
        "Culture",
        "palette",
        &["Museum", "Theatre", "Concert", "Cinema", "Gallery opening", "Festival"],
    ),
    (
        "Travel",
        "plane",
        &["City trip", "Road trip", "Sightseeing", "Beach day", "Camping"],
    ),
    (
        "Shopping",
        "cart",
        &["Groceries", "Clothes", "Electronics", "Gifts", "Flea market"],
    ),
    (
        "Education",
        "book",
        &["Lecture", "Workshop", "Language course", "Reading", "Exam preparation"],
    ),
    (
        "Work",
        "briefcase",
        &["Meeting", "Deadline", "Business trip", "Interview", "Networking event"],
    ),
    (
        "Health",
        "heart",
        &["Doctor visit", "Dentist", "Checkup", "Therapy", "Spa day"],
    ),
    (
        "Family",
        "people",
        &["Family dinner", "Kids activity", "Visit parents", "Anniversary", "Birthday party"],
    ),
    (
        "Entertainment",
        "gamepad",
        &["Board games", "Video games", "House party", "Karaoke", "Bowling", "Quiz night"],
    ),
    (
        "Outdoors",
        "tree",
        &["Walk in the park", "Fishing", "Gardening", "Stargazing", "Barbecue"],
    ),
];
