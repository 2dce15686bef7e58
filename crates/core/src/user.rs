//! User record exposed over the wire.
//!
//! A `User` is bound directly from inbound JSON on registration and returned
//! unchanged on lookup. Only the identifier has meaning to the service layer;
//! every other field is profile data carried through as-is.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::UserId;

/// Registered user.
///
/// `id` is normally absent on create requests and filled in by the service.
/// Unknown JSON members are kept in `profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            profile: serde_json::Map::new(),
        }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }
}
