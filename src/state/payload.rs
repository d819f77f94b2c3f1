//! JSON body sent to the generation endpoints
//!
//! Form entries arrive as `(name, value)` pairs in document order, the way a
//! browser enumerates form data. Two flattening rules exist:
//!
//! - [`Payload::from_entries_promoting`]: a repeated name turns into a list.
//!   The first value is stored as a scalar; the second occurrence promotes it
//!   to `[first, second]`; later occurrences append.
//! - [`Payload::from_entries_last_wins`]: every value is a scalar and a
//!   repeated name keeps its last value.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Value of one payload key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadValue {
    Scalar(String),
    List(Vec<String>),
    Bool(bool),
}

impl Serialize for PayloadValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
            Self::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

/// Ordered key/value mapping serialized as a JSON object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    entries: Vec<(String, PayloadValue)>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten entries, promoting repeated names to lists
    pub fn from_entries_promoting<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut payload = Self::new();
        for (key, value) in entries {
            payload.push_promoting(key.into(), value.into());
        }
        payload
    }

    /// Flatten entries as scalars; the last value for a name wins
    pub fn from_entries_last_wins<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut payload = Self::new();
        for (key, value) in entries {
            payload.set(key, PayloadValue::Scalar(value.into()));
        }
        payload
    }

    fn push_promoting(&mut self, key: String, value: String) {
        let Some(slot) = self.get_mut(&key) else {
            self.entries.push((key, PayloadValue::Scalar(value)));
            return;
        };

        match slot {
            PayloadValue::List(items) => items.push(value),
            PayloadValue::Scalar(first) => {
                let first = std::mem::take(first);
                *slot = PayloadValue::List(vec![first, value]);
            }
            PayloadValue::Bool(_) => {
                // Only reachable if a caller mixed `set` with promotion
                *slot = PayloadValue::List(vec![value]);
            }
        }
    }

    /// Overwrite `key` in place, or append it if absent
    pub fn set(&mut self, key: impl Into<String>, value: PayloadValue) {
        let key = key.into();
        match self.get_mut(&key) {
            Some(slot) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut PayloadValue> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply the checkbox and multi-select overrides both endpoints expect
    pub fn with_overrides(
        mut self,
        has_ai: bool,
        has_restricao: bool,
        usos_multi: Option<Vec<String>>,
    ) -> Self {
        self.set("has_ai", PayloadValue::Bool(has_ai));
        self.set("has_restricao", PayloadValue::Bool(has_restricao));
        if let Some(usos) = usos_multi {
            self.set("usos_multi", PayloadValue::List(usos));
        }
        self
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
