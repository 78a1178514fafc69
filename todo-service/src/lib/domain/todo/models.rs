use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::todo::errors::TodoIdError;
use crate::domain::user::models::UserId;

/// Todo unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(pub Uuid);

impl TodoId {
    /// Generate a new random todo ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a todo ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TodoIdError> {
        Uuid::parse_str(s)
            .map(TodoId)
            .map_err(|e| TodoIdError::InvalidFormat(e.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A work item owned by exactly one user.
///
/// `priority` is free-form; clients conventionally send `high`, `medium`
/// or `low` but the value is stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Command to create a todo for the calling user.
#[derive(Debug, Clone)]
pub struct CreateTodoCommand {
    pub title: String,
    pub description: String,
    pub priority: String,
}

/// Full replacement of a todo's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodoCommand {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub completed: bool,
}

/// Field values written by an ownership-scoped update, stamped with the
/// time of the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub completed: bool,
    pub updated_at: DateTime<Utc>,
}

impl TodoChanges {
    pub fn new(command: UpdateTodoCommand, updated_at: DateTime<Utc>) -> Self {
        Self {
            title: command.title,
            description: command.description,
            priority: command.priority,
            completed: command.completed,
            updated_at,
        }
    }

    /// Apply the changes to a stored todo in place.
    pub fn apply(&self, todo: &mut Todo) {
        todo.title = self.title.clone();
        todo.description = self.description.clone();
        todo.priority = self.priority.clone();
        todo.completed = self.completed;
        todo.updated_at = self.updated_at;
    }
}
