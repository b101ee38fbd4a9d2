//! Live board state: the latest snapshot plus the views derived from it.

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

use stockboard_core::{DomainError, DomainResult, ItemId};

use crate::config::BoardConfig;
use crate::item::{Item, Location};
use crate::view::{InventoryViewModel, ItemView, LocationView};

/// Application-side holder of the most recent item snapshot.
///
/// The sync collaborator hands every store change to [`Self::apply_snapshot`]
/// (or [`Self::apply_documents`]); readers derive views on demand. Updates go
/// through `&mut self`, so the caller decides how snapshot delivery is
/// serialized.
#[derive(Debug, Clone)]
pub struct InventoryBoard {
    view_model: InventoryViewModel,
    items: Vec<Item>,
    revision: u64,
    synced_at: Option<DateTime<Utc>>,
}

impl InventoryBoard {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            view_model: config.view_model(),
            items: Vec::new(),
            revision: 0,
            synced_at: None,
        }
    }

    /// Replace the snapshot with `items`.
    pub fn apply_snapshot(&mut self, items: Vec<Item>, synced_at: DateTime<Utc>) {
        self.items = items;
        self.revision += 1;
        self.synced_at = Some(synced_at);

        tracing::info!(
            revision = self.revision,
            items = self.items.len(),
            low_stock = self.low_stock_total(),
            "inventory snapshot applied"
        );
    }

    /// Replace the snapshot from raw stored documents keyed by document id.
    ///
    /// Documents that cannot be read as items are skipped. Returns how many
    /// were skipped.
    pub fn apply_documents<I>(&mut self, documents: I, synced_at: DateTime<Utc>) -> usize
    where
        I: IntoIterator<Item = (ItemId, JsonValue)>,
    {
        let mut skipped = 0;
        let items: Vec<Item> = documents
            .into_iter()
            .filter_map(|(id, doc)| {
                let item = Item::from_document(id.clone(), &doc);
                if item.is_none() {
                    skipped += 1;
                    tracing::warn!(item_id = %id, "skipping unreadable inventory document");
                }
                item
            })
            .collect();
        self.apply_snapshot(items, synced_at);
        skipped
    }

    /// Number of snapshots applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn synced_at(&self) -> Option<DateTime<Utc>> {
        self.synced_at
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn view_model(&self) -> &InventoryViewModel {
        &self.view_model
    }

    /// Look up a stored item, e.g. to target an edit or delete.
    pub fn find(&self, id: &ItemId) -> DomainResult<&Item> {
        self.items
            .iter()
            .find(|item| item.id.as_ref() == Some(id))
            .ok_or_else(DomainError::not_found)
    }

    pub fn location_view(&self, location: &Location) -> Vec<ItemView<'_>> {
        self.view_model.location_view(&self.items, location)
    }

    pub fn views(&self) -> Vec<LocationView<'_>> {
        self.view_model.board_views(&self.items)
    }

    /// Low-stock items across all recognized locations.
    pub fn low_stock_total(&self) -> usize {
        let policy = self.view_model.policy();
        let locations = self.view_model.locations();
        self.items
            .iter()
            .filter(|item| item.location.as_ref().is_some_and(|l| locations.contains(l)))
            .filter(|item| policy.is_low_stock(item))
            .count()
    }
}

impl Default for InventoryBoard {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
