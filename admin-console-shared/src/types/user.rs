//! User records.
//!
//! Users are the only entity whose text fields are normalised before storage.

use serde::{Deserialize, Serialize};

use super::entity::{EntityId, EntityKind, Identified};
use crate::text::format_input;

/// A persisted user.
///
/// Serialized with camelCase field names:
/// `{"id", "userName", "email", "firstName", "lastName"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// The mutable text fields of a user, as submitted by the create and edit forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserFields {
    pub fn new(
        user_name: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Return a copy with every field passed through [`format_input`].
    pub fn formatted(&self) -> Self {
        Self {
            user_name: format_input(&self.user_name),
            email: format_input(&self.email),
            first_name: format_input(&self.first_name),
            last_name: format_input(&self.last_name),
        }
    }
}

impl User {
    /// Build a user from `fields`, normalising every text field.
    pub fn new(id: EntityId, fields: &UserFields) -> Self {
        let fields = fields.formatted();
        Self {
            id,
            user_name: fields.user_name,
            email: fields.email,
            first_name: fields.first_name,
            last_name: fields.last_name,
        }
    }

    /// Overwrite the text fields in place, normalising them first. The id is kept.
    pub fn apply(&mut self, fields: &UserFields) {
        let fields = fields.formatted();
        self.user_name = fields.user_name;
        self.email = fields.email;
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
    }

    /// The current text fields, used to pre-fill the edit form.
    pub fn fields(&self) -> UserFields {
        UserFields::new(
            self.user_name.clone(),
            self.email.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
        )
    }
}

impl Identified for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> EntityId {
        self.id
    }
}
