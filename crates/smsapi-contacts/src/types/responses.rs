/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Paged listing envelope used by every REST collection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    #[serde(default)]
    pub size: u64,
    #[serde(default = "Vec::new")]
    pub collection: Vec<T>,
}

impl<T> Collection<T> {
    pub fn first(&self) -> Option<&T> {
        self.collection.first()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.collection.iter()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            size: 0,
            collection: Vec::new(),
        }
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.collection.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.collection.iter()
    }
}
