//! Identity allocation for append-only collections.

use admin_console_shared::{EntityId, Identified};

/// Return the id for the next entity appended to `collection`.
///
/// `1` for an empty collection, otherwise the last element's id + 1. The
/// collection is assumed to be id-ordered, which holds because entities are
/// only ever appended. Deleting the last element lets its id be handed out
/// again; deleting any other element does not.
///
/// `None` when the last id is already `EntityId::MAX`.
pub fn next_id<T: Identified>(collection: &[T]) -> Option<EntityId> {
    match collection.last() {
        Some(last) => last.id().checked_add(1),
        None => Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_console_shared::{Group, Role, User, UserFields};

    #[test]
    fn test_empty_collection_starts_at_one() {
        let users: Vec<User> = Vec::new();
        assert_eq!(next_id(&users), Some(1));
    }

    #[test]
    fn test_follows_last_element() {
        let groups = vec![Group::new(1, "a"), Group::new(2, "b")];
        assert_eq!(next_id(&groups), Some(3));
    }

    #[test]
    fn test_gap_in_the_middle_is_not_reused() {
        let users = vec![
            User::new(1, &UserFields::default()),
            User::new(3, &UserFields::default()),
        ];
        assert_eq!(next_id(&users), Some(4));
    }

    #[test]
    fn test_uses_last_not_count() {
        let roles = vec![Role::new(5, "r", "")];
        assert_eq!(next_id(&roles), Some(6));
    }

    #[test]
    fn test_exhausted_id_space() {
        let groups = vec![Group::new(EntityId::MAX, "last")];
        assert_eq!(next_id(&groups), None);
    }
}
