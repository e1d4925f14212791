//! Item value type.

use serde::{Deserialize, Serialize};

/// A single synthetic record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Position in the produced sequence, starting at 1.
    pub id: i32,
    /// Display name, derived from the id.
    pub name: String,
}

impl Item {
    /// Create an item with an explicit name.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Create the canonical synthetic item for `id`: `name "name {id}"`.
    ///
    /// Pure function of `id` — the same input always yields the same item.
    pub fn synthetic(id: i32) -> Self {
        Self {
            id,
            name: format!("name {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_new() {
        let item = Item::new(7, "seven");
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "seven");
    }

    #[test]
    fn synthetic_name_follows_id() {
        let item = Item::synthetic(42);
        assert_eq!(item.id, 42);
        assert_eq!(item.name, "name 42");
    }

    #[test]
    fn synthetic_is_deterministic() {
        assert_eq!(Item::synthetic(3), Item::synthetic(3));
    }
}
