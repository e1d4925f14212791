//! Conversions between itemfeed native types and protobuf types.
//!
//! Server-side: proto → native for requests, native → proto for responses.
//! The client reuses the same impls in the opposite direction.

use crate::Item;

use super::proto;

impl From<proto::Item> for Item {
    fn from(p: proto::Item) -> Self {
        Item {
            id: p.id,
            name: p.name,
        }
    }
}

impl From<Item> for proto::Item {
    fn from(item: Item) -> Self {
        proto::Item {
            id: item.id,
            name: item.name,
        }
    }
}

impl From<Vec<Item>> for proto::Items {
    fn from(items: Vec<Item>) -> Self {
        proto::Items {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<proto::Items> for Vec<Item> {
    fn from(p: proto::Items) -> Self {
        p.items.into_iter().map(Into::into).collect()
    }
}
