use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserSession;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service for registration, login and profile lookup.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn issue_session(&self, user: User) -> Result<UserSession, UserError> {
        let issued = self
            .authenticator
            .issue_token(user.id, &user.email)
            .map_err(|e| UserError::Token(e.to_string()))?;

        Ok(UserSession {
            token: issued.access_token,
            user,
        })
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<UserSession, UserError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            tracing::info!(email = %command.email, "Registration rejected: email already in use");
            return Err(UserError::EmailAlreadyExists(command.email));
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Password(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        self.issue_session(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<UserSession, UserError> {
        let Some(user) = self.repository.find_by_email(&command.email).await? else {
            return Err(self
                .authenticator
                .reject_unknown_account(&command.password)
                .into());
        };

        let issued = self.authenticator.authenticate(
            &command.password,
            &user.password_hash,
            user.id,
            &user.email,
        )?;

        tracing::debug!(user_id = %user.id, "User logged in");

        Ok(UserSession {
            token: issued.access_token,
            user,
        })
    }

    async fn get_profile(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
