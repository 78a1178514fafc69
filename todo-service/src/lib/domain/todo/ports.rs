use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoChanges;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::user::models::UserId;

/// Port for todo operations, always scoped to the calling user.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Create a todo owned by `owner`.
    ///
    /// # Returns
    /// The stored todo, including its store-assigned id
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn create_todo(
        &self,
        owner: &UserId,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError>;

    /// List every todo owned by `owner` (empty when there are none).
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_todos(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError>;

    /// Replace the mutable fields of `id` if `owner` owns it.
    ///
    /// A todo that does not exist or belongs to someone else is left
    /// untouched and the call still succeeds.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn update_todo(
        &self,
        owner: &UserId,
        id: &TodoId,
        command: UpdateTodoCommand,
    ) -> Result<(), TodoError>;

    /// Delete `id` if `owner` owns it; succeeds when nothing matched.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn delete_todo(&self, owner: &UserId, id: &TodoId) -> Result<(), TodoError>;
}

/// Persistence operations for todos.
///
/// Mutations filter on the conjunction of todo id and owner id and report
/// how many records matched.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn create(&self, todo: Todo) -> Result<Todo, TodoError>;

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError>;

    /// # Returns
    /// Number of records matched by (id, owner)
    async fn update_owned(
        &self,
        owner: &UserId,
        id: &TodoId,
        changes: TodoChanges,
    ) -> Result<u64, TodoError>;

    /// # Returns
    /// Number of records matched by (id, owner)
    async fn delete_owned(&self, owner: &UserId, id: &TodoId) -> Result<u64, TodoError>;
}
