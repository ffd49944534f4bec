//! Read-only access to the seeded category/activity taxonomy.

use crate::db::db::Db;
use crate::db::error::StoreError;
use crate::db::query::{Direction, Query};
use crate::db::store::{Record, Store};
use crate::db::tasks::{get_i64, get_text};
use crate::libs::taxonomy::{Activity, Category};
use anyhow::Result;

pub const CATEGORY_TABLE: &str = "category";
pub const ACTIVITY_TABLE: &str = "activity";

pub struct Taxonomy {
    store: Store,
}

impl Taxonomy {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { store: Store::open(db.conn) })
    }

    pub fn list_categories(&mut self) -> Result<Vec<Category>, StoreError> {
        let query = Query::new().order_by("title", Direction::Asc);
        let records = self.store.select(CATEGORY_TABLE, &query)?;
        Ok(records.iter().map(category_from_record).collect())
    }

    pub fn list_activities(&mut self, category_id: Option<i64>) -> Result<Vec<Activity>, StoreError> {
        let mut query = Query::new().order_by("title", Direction::Asc);
        if let Some(id) = category_id {
            query = query.filter("category_id", "=", id);
        }
        let records = self.store.select(ACTIVITY_TABLE, &query)?;
        Ok(records.iter().map(activity_from_record).collect())
    }

    pub fn find_category(&mut self, title: &str) -> Result<Option<Category>, StoreError> {
        let query = Query::new().filter("title", "=", title.to_string());
        let records = self.store.select(CATEGORY_TABLE, &query)?;
        Ok(records.first().map(category_from_record))
    }

    pub fn find_activity(&mut self, category_id: i64, title: &str) -> Result<Option<Activity>, StoreError> {
        let query = Query::new()
            .filter("category_id", "=", category_id)
            .filter("title", "=", title.to_string());
        let records = self.store.select(ACTIVITY_TABLE, &query)?;
        Ok(records.first().map(activity_from_record))
    }
}

fn category_from_record(record: &Record) -> Category {
    Category {
        id: get_i64(record, "id"),
        title: get_text(record, "title").unwrap_or_default(),
        avatar: get_text(record, "avatar").unwrap_or_default(),
    }
}

fn activity_from_record(record: &Record) -> Activity {
    Activity {
        id: get_i64(record, "id"),
        title: get_text(record, "title").unwrap_or_default(),
        category_id: get_i64(record, "category_id").unwrap_or(0),
    }
}
