//! Favorite entity: a user-to-character association.

/// One row of the favorites table.
///
/// `(user_id, character_id)` is the primary key; the row carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Favorite {
    pub user_id: i64,
    pub character_id: i64,
}

impl Favorite {
    pub fn new(user_id: i64, character_id: i64) -> Self {
        Self {
            user_id,
            character_id,
        }
    }
}
