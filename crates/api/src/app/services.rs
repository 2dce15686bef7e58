//! User service boundary consumed by the HTTP handlers.
//!
//! Handlers only see `Arc<dyn UserService>`. The in-memory implementation is
//! what the binary and the black-box tests run against; a persistent backend
//! would implement the same trait.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use thiserror::Error;

use pokemonapi_core::{DomainError, User, UserId};

/// Error returned by a [`UserService`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("user not found")]
    NotFound,

    #[error("invalid user id: {0}")]
    InvalidId(String),

    #[error("user already exists: {0}")]
    Conflict(String),

    #[error("user store unavailable")]
    Unavailable,
}

impl From<DomainError> for ServiceError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::NotFound => Self::NotFound,
            DomainError::InvalidId(msg) => Self::InvalidId(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
        }
    }
}

/// Capability boundary for user registration and lookup.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, user: User) -> Result<User, ServiceError>;

    async fn get_user(&self, id: &str) -> Result<User, ServiceError>;
}

/// Process-local user store for dev/test.
#[derive(Debug, Default)]
pub struct InMemoryUserService {
    inner: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users. A poisoned lock still reports the real count.
    pub fn len(&self) -> usize {
        match self.inner.read() {
            Ok(map) => map.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn create_user(&self, mut user: User) -> Result<User, ServiceError> {
        let id = *user.id.get_or_insert_with(UserId::new);

        let mut map = self.inner.write().map_err(|_| ServiceError::Unavailable)?;
        if map.contains_key(&id) {
            return Err(DomainError::conflict(id.to_string()).into());
        }
        map.insert(id, user.clone());

        tracing::debug!(user_id = %id, "user created");
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> Result<User, ServiceError> {
        let id: UserId = id.parse()?;
        let map = self.inner.read().map_err(|_| ServiceError::Unavailable)?;
        map.get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found().into())
    }
}

/// Build the default service wiring for the binary.
pub fn build_services() -> Arc<dyn UserService> {
    Arc::new(InMemoryUserService::new())
}
