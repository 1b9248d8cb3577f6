//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    #[diesel(sql_type = diesel::sql_types::Int8)]
    pub id: i64,
    /// Task description.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub content: String,
    /// Activation flag.
    #[diesel(sql_type = diesel::sql_types::Bool)]
    pub is_active: bool,
    /// Owner JSON payload.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Jsonb>)]
    pub owner: Option<Value>,
    /// Contributor JSON payload.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Jsonb>)]
    pub contributors: Option<Value>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: i64,
    /// Task description.
    pub content: String,
    /// Activation flag.
    pub is_active: bool,
    /// Owner JSON payload.
    pub owner: Option<Value>,
    /// Contributor JSON payload.
    pub contributors: Option<Value>,
}

/// Update model for task records.
///
/// `None` clears the column rather than leaving it untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task description.
    pub content: String,
    /// Activation flag.
    pub is_active: bool,
    /// Owner JSON payload.
    pub owner: Option<Value>,
    /// Contributor JSON payload.
    pub contributors: Option<Value>,
}

/// Row returned when reserving an identifier from the task sequence.
#[derive(Debug, Clone, QueryableByName)]
pub struct ReservedIdRow {
    /// Reserved identifier.
    #[diesel(sql_type = diesel::sql_types::Int8)]
    pub id: i64,
}
