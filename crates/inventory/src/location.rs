use serde::{Deserialize, Serialize};

use stockboard_core::{DomainError, DomainResult};

use crate::item::Location;

/// A recognized location and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub key: Location,
    pub label: String,
}

/// Ordered, duplicate-free set of recognized locations.
///
/// Order is display order: the first location is the first tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LocationEntry>", into = "Vec<LocationEntry>")]
pub struct LocationSet {
    entries: Vec<LocationEntry>,
}

impl LocationSet {
    /// Build a set from `(key, label)` pairs.
    ///
    /// Rejects an empty set, blank keys and duplicate keys.
    pub fn new<K, L>(entries: impl IntoIterator<Item = (K, L)>) -> DomainResult<Self>
    where
        K: Into<String>,
        L: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, l)| LocationEntry {
                key: Location::new(k),
                label: l.into(),
            })
            .collect::<Vec<_>>();
        Self::try_from(entries)
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.position(location).is_some()
    }

    pub fn position(&self, location: &Location) -> Option<usize> {
        self.entries.iter().position(|e| &e.key == location)
    }

    /// Display label, or `None` for an unrecognized location.
    pub fn label(&self, location: &Location) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| &e.key == location)
            .map(|e| e.label.as_str())
    }

    pub fn first(&self) -> &Location {
        // Construction guarantees at least one entry.
        &self.entries[0].key
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Location> {
        self.entries.iter().map(|e| &e.key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LocationSet {
    fn default() -> Self {
        let entries = [
            ("office", "Office"),
            ("ci", "C/I"),
            ("gate", "Gate"),
            ("ctx", "CTX"),
            ("check-room", "Checkroom"),
            ("celler", "Celler"),
            ("innsbruck", "Innsbruck"),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(k, l)| LocationEntry {
                    key: Location::new(k),
                    label: l.to_string(),
                })
                .collect(),
        }
    }
}

impl TryFrom<Vec<LocationEntry>> for LocationSet {
    type Error = DomainError;

    fn try_from(entries: Vec<LocationEntry>) -> Result<Self, Self::Error> {
        if entries.is_empty() {
            return Err(DomainError::validation("at least one location is required"));
        }
        for (i, entry) in entries.iter().enumerate() {
            if entry.key.as_str().trim().is_empty() {
                return Err(DomainError::validation("location key cannot be blank"));
            }
            if entries[..i].iter().any(|e| e.key == entry.key) {
                return Err(DomainError::validation(format!(
                    "duplicate location: {}",
                    entry.key
                )));
            }
        }
        Ok(Self { entries })
    }
}

impl From<LocationSet> for Vec<LocationEntry> {
    fn from(value: LocationSet) -> Self {
        value.entries
    }
}
