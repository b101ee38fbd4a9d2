use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use stockboard_core::{ItemId, ValueObject};

use crate::lenient;

/// What kind of stock an item is.
///
/// Stored as `"refill"` / `"stable"`. Anything else, including a missing
/// field, is read as equipment: only explicit supplies take part in
/// low-stock evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Consumable, replenishable stock.
    Supplies,
    /// Permanent stock, exempt from low-stock evaluation.
    Equipment,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Supplies, ItemKind::Equipment];

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Supplies => "Supplies",
            ItemKind::Equipment => "Equipment",
        }
    }

    /// Stored representation.
    pub fn as_wire(self) -> &'static str {
        match self {
            ItemKind::Supplies => "refill",
            ItemKind::Equipment => "stable",
        }
    }

    /// Display rank: supplies before equipment.
    pub(crate) fn rank(self) -> u8 {
        match self {
            ItemKind::Supplies => 0,
            ItemKind::Equipment => 1,
        }
    }

    fn missing() -> Self {
        ItemKind::Equipment
    }
}

impl ValueObject for ItemKind {}

impl Serialize for ItemKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for ItemKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) if s == "refill" => ItemKind::Supplies,
            _ => ItemKind::Equipment,
        })
    }
}

/// Site an item is stocked at (e.g. `office`, `check-room`).
///
/// Compared by exact key; which keys are recognized is configuration, see
/// [`crate::LocationSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl ValueObject for Location {}

/// One stocked item, as read from the current snapshot.
///
/// Numeric fields are `None` when the stored value was missing or not a
/// number; the policy decides what that means (see [`crate::StockPolicy`]).
/// Fractional values are kept as stored and compared as real numbers.
/// The domain never mutates an item, it only derives views from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "lenient::item_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "lenient::name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub amount: Option<f64>,
    #[serde(rename = "type", default = "ItemKind::missing")]
    pub kind: ItemKind,
    #[serde(rename = "site", default, deserialize_with = "lenient::location")]
    pub location: Option<Location>,
    #[serde(
        rename = "lowStockThreshold",
        default,
        deserialize_with = "lenient::quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub low_stock_threshold: Option<f64>,
}

impl Item {
    /// Unsaved item with a known amount and no explicit threshold.
    pub fn new(
        name: impl Into<String>,
        kind: ItemKind,
        amount: impl Into<f64>,
        location: impl Into<Location>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            amount: Some(amount.into()),
            kind,
            location: Some(location.into()),
            low_stock_threshold: None,
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_threshold(mut self, threshold: impl Into<f64>) -> Self {
        self.low_stock_threshold = Some(threshold.into());
        self
    }

    /// Decode one stored document.
    ///
    /// `id` is the document key and wins over any `id` field in the body.
    /// Every object decodes; unusable fields fall back as described on
    /// [`Item`]. Returns `None` only for non-object documents.
    pub fn from_document(id: ItemId, document: &Value) -> Option<Self> {
        if !document.is_object() {
            return None;
        }
        let mut item: Item = serde_json::from_value(document.clone()).ok()?;
        item.id = Some(id);
        Some(item)
    }
}
