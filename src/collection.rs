//! Identifier-keyed set container used for every category kind.

use std::collections::hash_map::{Entry, HashMap};
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

/// Anything stored in a [`SetCover`].
///
/// Two values with the same identifier are the same entry, whatever their
/// other fields hold.
pub trait Identifiable {
    fn identifier(&self) -> String;
}

/// A set of values keyed by [`Identifiable::identifier`].
///
/// Iteration order is unspecified.
#[derive(Debug, Clone)]
pub struct SetCover<T> {
    items: HashMap<String, T>,
}

impl<T> Default for SetCover<T> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<T: Identifiable> SetCover<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item` unless its identifier is already taken.
    ///
    /// Returns `false` when the insertion was refused; the stored value is
    /// left untouched in that case.
    pub fn add(&mut self, item: T) -> bool {
        match self.items.entry(item.identifier()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(item);
                true
            }
        }
    }

    /// Checks for a value with the same identifier as `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains_key(&item.identifier())
    }

    pub fn contains_identifier(&self, identifier: &str) -> bool {
        self.items.contains_key(identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<&T> {
        self.items.get(identifier)
    }

    /// Removes the value sharing `item`'s identifier.
    pub fn remove(&mut self, item: &T) -> bool {
        self.items.remove(&item.identifier()).is_some()
    }

    /// Removes and returns the value stored under `identifier`.
    pub fn remove_identifier(&mut self, identifier: &str) -> Option<T> {
        self.items.remove(identifier)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read view over all stored values.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// All stored identifiers.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Identifiable> FromIterator<T> for SetCover<T> {
    /// Collects values, keeping the first of any duplicate identifiers.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.add(item);
        }
        set
    }
}

impl<T: Identifiable> Extend<T> for SetCover<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Identifiable> PartialEq for SetCover<T> {
    /// Equal when both hold the same identifiers.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.identifiers().all(|id| other.contains_identifier(id))
    }
}

impl<T: Identifiable> Eq for SetCover<T> {}

// Serialized as a plain sequence so catalog documents can write arrays.

impl<T: Serialize> Serialize for SetCover<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.values())
    }
}

impl<'de, T> Deserialize<'de> for SetCover<T>
where
    T: Identifiable + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeqVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for SeqVisitor<T>
        where
            T: Identifiable + Deserialize<'de>,
        {
            type Value = SetCover<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of identifiable values")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut set = SetCover::new();
                while let Some(item) = seq.next_element::<T>()? {
                    set.add(item);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SeqVisitor(PhantomData))
    }
}
