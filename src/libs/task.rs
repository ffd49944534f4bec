use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The planner's schedulable unit: an event with a start and end instant,
/// an optional budget and optional location data.
///
/// All instants are epoch milliseconds. `category_id` and `activity_id`
/// are optional on the struct because drafts arrive field by field from
/// the caller, but a task does not validate without both being present.
///
/// `is_deleted` is a latent column carried for storage-format fidelity;
/// no code path ever sets it. Tasks are hard-deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub budget: Option<i64>,
    pub route: Option<String>,
    pub is_route_following: bool,
    pub is_map_enabled: bool,
    pub start_latitude: Option<f64>,
    pub start_longitude: Option<f64>,
    pub end_latitude: Option<f64>,
    pub end_longitude: Option<f64>,
    pub created_at: i64,
    pub started_at: i64,
    pub ended_at: i64,
    pub category_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub is_deleted: bool,
}

impl Task {
    pub fn new(title: &str, started_at: i64, ended_at: i64, category_id: i64, activity_id: i64) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: None,
            budget: None,
            route: None,
            is_route_following: false,
            is_map_enabled: false,
            start_latitude: None,
            start_longitude: None,
            end_latitude: None,
            end_longitude: None,
            created_at: Utc::now().timestamp_millis(),
            started_at,
            ended_at,
            category_id: Some(category_id),
            activity_id: Some(activity_id),
            is_deleted: false,
        }
    }
}
