//! # Admin Console Shared
//!
//! This crate defines the entity types shared across the admin console: users,
//! groups and roles, plus the text normalisation applied to user input before
//! it is stored.

pub mod text;
pub mod types;

pub use text::format_input;
pub use types::{EntityId, EntityKind, Group, Identified, Role, User, UserFields};
