use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoChanges;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user collection, kept in insertion order.
///
/// Like the Postgres table it enforces email uniqueness on insert, so a
/// registration that slips past the service's existence check still fails.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.id == *id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }
}

/// Process-local todo collection, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a todo regardless of owner.
    pub async fn get(&self, id: &TodoId) -> Option<Todo> {
        self.todos
            .read()
            .await
            .iter()
            .find(|todo| todo.id == *id)
            .cloned()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: Todo) -> Result<Todo, TodoError> {
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError> {
        Ok(self
            .todos
            .read()
            .await
            .iter()
            .filter(|todo| todo.user_id == *owner)
            .cloned()
            .collect())
    }

    async fn update_owned(
        &self,
        owner: &UserId,
        id: &TodoId,
        changes: TodoChanges,
    ) -> Result<u64, TodoError> {
        let mut todos = self.todos.write().await;

        match todos
            .iter_mut()
            .find(|todo| todo.id == *id && todo.user_id == *owner)
        {
            Some(todo) => {
                changes.apply(todo);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_owned(&self, owner: &UserId, id: &TodoId) -> Result<u64, TodoError> {
        let mut todos = self.todos.write().await;
        let before = todos.len();

        todos.retain(|todo| !(todo.id == *id && todo.user_id == *owner));

        Ok((before - todos.len()) as u64)
    }
}
