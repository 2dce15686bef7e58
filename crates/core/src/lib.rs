//! `pokemonapi-core` — domain building blocks shared by the API.
//!
//! This crate contains **pure domain** types (no HTTP or storage concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod user;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use user::User;
