//! Registration and login flows.

use std::sync::Arc;

use tracing::info;

use sideline_auth::password::PasswordHasher;
use sideline_auth::token::{SessionToken, TokenEncoder};
use sideline_core::error::AppError;
use sideline_database::repositories::trainer::TrainerRepository;
use sideline_entity::trainer::{CreateTrainer, Trainer};

/// Outcome of a successful register or login: the account plus a freshly
/// issued session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    /// The trainer account.
    pub trainer: Trainer,
    /// The issued session token.
    pub token: SessionToken,
}

/// Handles credential verification and session token issuance.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// Trainer repository.
    trainer_repo: Arc<TrainerRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Session token encoder.
    token_encoder: Arc<TokenEncoder>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        trainer_repo: Arc<TrainerRepository>,
        hasher: Arc<PasswordHasher>,
        token_encoder: Arc<TokenEncoder>,
    ) -> Self {
        Self {
            trainer_repo,
            hasher,
            token_encoder,
        }
    }

    /// Registers a new trainer account and logs it in.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedAccount, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        // The unique constraint on the table closes the race this pre-check
        // leaves open; both paths surface the same conflict error.
        if self
            .trainer_repo
            .find_by_username(username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Username already taken"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let trainer = self
            .trainer_repo
            .create(&CreateTrainer {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        let token = self.token_encoder.issue(trainer.id, &trainer.username)?;

        info!(trainer_id = %trainer.id, username = %trainer.username, "Trainer registered");

        Ok(AuthenticatedAccount { trainer, token })
    }

    /// Verifies credentials and issues a session token.
    ///
    /// Unknown username and wrong password produce the same error with no
    /// distinguishing signal.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedAccount, AppError> {
        let trainer = self
            .trainer_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::invalid_credentials("Invalid credentials"))?;

        let password_valid = self
            .hasher
            .verify_password(password, &trainer.password_hash)?;

        if !password_valid {
            return Err(AppError::invalid_credentials("Invalid credentials"));
        }

        let token = self.token_encoder.issue(trainer.id, &trainer.username)?;

        info!(trainer_id = %trainer.id, username = %trainer.username, "Login successful");

        Ok(AuthenticatedAccount { trainer, token })
    }
}
