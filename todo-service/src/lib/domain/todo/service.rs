use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoChanges;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::UserId;

/// Domain service for owner-scoped todo operations.
pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn create_todo(
        &self,
        owner: &UserId,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError> {
        let now = Utc::now();
        let todo = Todo {
            id: TodoId::new(),
            user_id: *owner,
            title: command.title,
            description: command.description,
            completed: false,
            priority: command.priority,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(todo).await?;
        tracing::debug!(todo_id = %created.id, user_id = %owner, "Todo created");

        Ok(created)
    }

    async fn list_todos(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError> {
        self.repository.find_by_owner(owner).await
    }

    async fn update_todo(
        &self,
        owner: &UserId,
        id: &TodoId,
        command: UpdateTodoCommand,
    ) -> Result<(), TodoError> {
        let matched = self
            .repository
            .update_owned(owner, id, TodoChanges::new(command, Utc::now()))
            .await?;

        if matched == 0 {
            tracing::debug!(todo_id = %id, user_id = %owner, "Update matched no owned todo");
        }

        Ok(())
    }

    async fn delete_todo(&self, owner: &UserId, id: &TodoId) -> Result<(), TodoError> {
        let matched = self.repository.delete_owned(owner, id).await?;

        if matched == 0 {
            tracing::debug!(todo_id = %id, user_id = %owner, "Delete matched no owned todo");
        }

        Ok(())
    }
}
