//! Entity repositories.
//!
//! Each repository owns one collection key and performs every operation as a
//! single read-modify-write through the shared `StorageGateway`.

mod groups;
mod roles;
mod users;

pub use groups::GroupRepository;
pub use roles::RoleRepository;
pub use users::UserRepository;
