//! Typed query fragment builder for dynamic selects.
//!
//! Filters, ordering and pagination arrive from callers as structured
//! specs and are rendered into a SQL fragment plus a positional parameter
//! list at the last possible moment. Condition *values* are always bound
//! as `?` placeholders; field names and comparators are interpolated
//! verbatim. That asymmetry is deliberate and tested: identifiers come
//! from application code, never from user input, and a malformed
//! comparator surfaces as a query-execution failure rather than a builder
//! failure.

use rusqlite::types::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Logical connective joining a condition to the one that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

#[derive(Debug, Clone)]
pub struct SortOrder {
    pub field: String,
    pub direction: Direction,
}

/// A single `{field, comparator, value}` filter triple.
///
/// The connective belongs to this condition and joins it to the *next*
/// one in sequence; the last condition's connective is never emitted.
/// An omitted connective defaults to `AND`.
#[derive(Debug, Clone)]
pub struct Condition {
    pub field: String,
    pub comparator: String,
    pub value: Value,
    pub connective: Option<Connective>,
}

/// Pagination spec.
///
/// `limit: None` emits no LIMIT clause at all ("no cap"). An explicit
/// `limit: Some(0)` emits `LIMIT 0` and returns zero rows. The two must
/// not be conflated; the engine treats a literal zero as "zero rows".
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub limit: Option<i64>,
    pub offset: i64,
}

/// A structured select spec: conditions, ordering and pagination.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub conditions: Vec<Condition>,
    pub order: Option<SortOrder>,
    pub page: Option<Page>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a condition joined to the next one with `AND`.
    pub fn filter<V: Into<Value>>(mut self, field: &str, comparator: &str, value: V) -> Self {
        self.conditions.push(Condition {
            field: field.to_string(),
            comparator: comparator.to_string(),
            value: value.into(),
            connective: None,
        });
        self
    }

    /// Adds a condition joined to the next one with `OR`.
    pub fn filter_or<V: Into<Value>>(mut self, field: &str, comparator: &str, value: V) -> Self {
        self.conditions.push(Condition {
            field: field.to_string(),
            comparator: comparator.to_string(),
            value: value.into(),
            connective: Some(Connective::Or),
        });
        self
    }

    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order = Some(SortOrder {
            field: field.to_string(),
            direction,
        });
        self
    }

    pub fn page(mut self, limit: Option<i64>, offset: i64) -> Self {
        self.page = Some(Page { limit, offset });
        self
    }

    /// Renders the spec into a SQL fragment and its positional parameters.
    ///
    /// The fragment starts with a leading space and is appended directly to
    /// a `SELECT * FROM <table>` head. For `n` conditions exactly `n - 1`
    /// connectives are emitted, in sequence order.
    pub fn render(&self) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let mut params = Vec::with_capacity(self.conditions.len());

        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            let last = self.conditions.len() - 1;
            for (i, condition) in self.conditions.iter().enumerate() {
                sql.push_str(&format!("{} {} ?", condition.field, condition.comparator));
                params.push(condition.value.clone());
                if i < last {
                    sql.push_str(match condition.connective.unwrap_or(Connective::And) {
                        Connective::And => " AND ",
                        Connective::Or => " OR ",
                    });
                }
            }
        }

        if let Some(order) = &self.order {
            sql.push_str(&format!(" ORDER BY {} {}", order.field, order.direction.as_sql()));
        }

        if let Some(page) = &self.page {
            match page.limit {
                Some(limit) => sql.push_str(&format!(" LIMIT {}", limit)),
                // SQLite needs a LIMIT clause to accept OFFSET; -1 means unbounded
                None if page.offset > 0 => sql.push_str(" LIMIT -1"),
                None => {}
            }
            if page.offset > 0 {
                sql.push_str(&format!(" OFFSET {}", page.offset));
            }
        }

        (sql, params)
    }
}
