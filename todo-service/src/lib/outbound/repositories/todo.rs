use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoChanges;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_todo(row: PgRow) -> Result<Todo, TodoError> {
        let read = |e: sqlx::Error| TodoError::DatabaseError(e.to_string());

        Ok(Todo {
            id: TodoId(row.try_get("id").map_err(read)?),
            user_id: UserId(row.try_get("user_id").map_err(read)?),
            title: row.try_get("title").map_err(read)?,
            description: row.try_get("description").map_err(read)?,
            completed: row.try_get("completed").map_err(read)?,
            priority: row.try_get("priority").map_err(read)?,
            created_at: row.try_get("created_at").map_err(read)?,
            updated_at: row.try_get("updated_at").map_err(read)?,
        })
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn create(&self, todo: Todo) -> Result<Todo, TodoError> {
        sqlx::query(
            r#"
            INSERT INTO todos (id, user_id, title, description, completed, priority, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(todo.id.as_uuid())
        .bind(todo.user_id.0)
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(&todo.priority)
        .bind(todo.created_at)
        .bind(todo.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        Ok(todo)
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, description, completed, priority, created_at, updated_at
            FROM todos
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_todo).collect()
    }

    async fn update_owned(
        &self,
        owner: &UserId,
        id: &TodoId,
        changes: TodoChanges,
    ) -> Result<u64, TodoError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = $3, description = $4, priority = $5, completed = $6, updated_at = $7
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.0)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.priority)
        .bind(changes.completed)
        .bind(changes.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn delete_owned(&self, owner: &UserId, id: &TodoId) -> Result<u64, TodoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.0)
        .execute(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
