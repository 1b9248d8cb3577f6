//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, ReservedIdRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{Task, TaskId, TaskParts, User, UserId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde_json::Value;
use std::collections::BTreeSet;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn next_id(&self) -> TaskRepositoryResult<TaskId> {
        self.run_blocking(|connection| {
            let row = diesel::sql_query("SELECT nextval('tasks_id_seq') AS id")
                .get_result::<ReservedIdRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            task_id_from_column(row.id)
        })
        .await
    }

    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id().ok_or(TaskRepositoryError::UnidentifiedTask)?;
        let new_row = to_new_row(task)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id().ok_or(TaskRepositoryError::UnidentifiedTask)?;
        let column_id = task_id_to_column(task_id)?;
        let changeset = to_changeset(task)?;

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(column_id)))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let column_id = task_id_to_column(id)?;
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(column_id))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_owner(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = diesel::sql_query(concat!(
                "SELECT id, content, is_active, owner, contributors FROM tasks ",
                "WHERE owner->>'id' = $1 ",
                "ORDER BY id",
            ))
            .bind::<diesel::sql_types::Text, _>(owner.to_string())
            .load::<TaskRow>(connection)
            .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let column_id = task_id_to_column(id)?;
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.filter(tasks::id.eq(column_id)))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn task_id_to_column(id: TaskId) -> TaskRepositoryResult<i64> {
    i64::try_from(id.value()).map_err(TaskRepositoryError::persistence)
}

fn task_id_from_column(value: i64) -> TaskRepositoryResult<TaskId> {
    let unsigned = u64::try_from(value).map_err(TaskRepositoryError::persistence)?;
    TaskId::new(unsigned).map_err(TaskRepositoryError::persistence)
}

fn to_json<T: serde::Serialize>(value: Option<&T>) -> TaskRepositoryResult<Option<Value>> {
    value
        .map(serde_json::to_value)
        .transpose()
        .map_err(TaskRepositoryError::persistence)
}

fn from_json<T: serde::de::DeserializeOwned>(
    value: Option<Value>,
) -> TaskRepositoryResult<Option<T>> {
    value
        .map(serde_json::from_value)
        .transpose()
        .map_err(TaskRepositoryError::persistence)
}

fn to_new_row(task: &Task) -> TaskRepositoryResult<NewTaskRow> {
    let id = task.id().ok_or(TaskRepositoryError::UnidentifiedTask)?;

    Ok(NewTaskRow {
        id: task_id_to_column(id)?,
        content: task.content().to_owned(),
        is_active: task.is_active(),
        owner: to_json(task.owner())?,
        contributors: to_json(task.contributors())?,
    })
}

fn to_changeset(task: &Task) -> TaskRepositoryResult<TaskChangeset> {
    Ok(TaskChangeset {
        content: task.content().to_owned(),
        is_active: task.is_active(),
        owner: to_json(task.owner())?,
        contributors: to_json(task.contributors())?,
    })
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        content,
        is_active,
        owner: persisted_owner,
        contributors: persisted_contributors,
    } = row;

    let owner = from_json::<User>(persisted_owner)?;
    let contributors = from_json::<BTreeSet<User>>(persisted_contributors)?;

    Ok(Task::from_parts(TaskParts {
        id: Some(task_id_from_column(id)?),
        content,
        is_active,
        owner,
        contributors,
    }))
}
