//! Location-scoped, ordered and annotated item lists for display.

use serde::Serialize;

use crate::item::{Item, Location};
use crate::location::LocationSet;
use crate::policy::StockPolicy;

/// Read-only display projection of one item.
///
/// Carries derived facts only; colors, fonts and text direction are left to
/// whoever renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView<'a> {
    pub item: &'a Item,
    /// Index within the location bucket before display ordering.
    pub position: usize,
    pub low_stock: bool,
    pub effective_threshold: f64,
    pub type_label: &'static str,
}

/// Items bucketed per recognized location, in configured order.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<'a> {
    buckets: Vec<(&'a Location, Vec<&'a Item>)>,
    dropped: usize,
}

impl<'a> Partition<'a> {
    /// Items at `location`; empty for an unrecognized location.
    pub fn get(&self, location: &Location) -> &[&'a Item] {
        self.buckets
            .iter()
            .find(|(key, _)| *key == location)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a Location, &[&'a Item])> + '_ {
        self.buckets.iter().map(|(key, items)| (*key, items.as_slice()))
    }

    /// Number of items whose location is missing or unrecognized.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// One location's ready-to-render list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationView<'a> {
    pub location: &'a Location,
    pub label: &'a str,
    pub items: Vec<ItemView<'a>>,
    pub low_stock_count: usize,
}

/// Pure view derivation over an item snapshot.
///
/// Holds only injected configuration; every operation reads a snapshot and
/// returns a fresh view, so one instance can serve any number of callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryViewModel {
    locations: LocationSet,
    policy: StockPolicy,
}

impl InventoryViewModel {
    pub fn new(locations: LocationSet, policy: StockPolicy) -> Self {
        Self { locations, policy }
    }

    pub fn locations(&self) -> &LocationSet {
        &self.locations
    }

    pub fn policy(&self) -> &StockPolicy {
        &self.policy
    }

    /// Bucket items by location, keeping input order within each bucket.
    ///
    /// Every recognized location gets a bucket, possibly empty. Items with a
    /// missing or unrecognized location land in no bucket.
    pub fn partition_by_location<'a>(&'a self, items: &'a [Item]) -> Partition<'a> {
        let mut buckets: Vec<(&'a Location, Vec<&'a Item>)> =
            self.locations.keys().map(|key| (key, Vec::new())).collect();
        let mut dropped = 0;

        for item in items {
            let slot = item
                .location
                .as_ref()
                .and_then(|loc| self.locations.position(loc));
            match slot {
                Some(idx) => buckets[idx].1.push(item),
                None => {
                    dropped += 1;
                    tracing::debug!(
                        item_id = ?item.id,
                        location = ?item.location,
                        "item outside recognized locations; excluded from views"
                    );
                }
            }
        }

        Partition { buckets, dropped }
    }

    /// Annotated, display-ordered list for one location.
    ///
    /// Empty for an unrecognized location.
    pub fn location_view<'a>(&'a self, items: &'a [Item], location: &Location) -> Vec<ItemView<'a>> {
        if !self.locations.contains(location) {
            return Vec::new();
        }
        let bucket = items
            .iter()
            .filter(|item| item.location.as_ref() == Some(location));
        self.ordered_views(bucket)
    }

    /// Views for every recognized location, in configured order.
    pub fn board_views<'a>(&'a self, items: &'a [Item]) -> Vec<LocationView<'a>> {
        let partition = self.partition_by_location(items);
        self.locations
            .iter()
            .map(|entry| {
                let views = self.ordered_views(partition.get(&entry.key).iter().copied());
                let low_stock_count = views.iter().filter(|v| v.low_stock).count();
                LocationView {
                    location: &entry.key,
                    label: &entry.label,
                    items: views,
                    low_stock_count,
                }
            })
            .collect()
    }

    fn ordered_views<'a>(&self, bucket: impl Iterator<Item = &'a Item>) -> Vec<ItemView<'a>> {
        let mut views: Vec<ItemView<'a>> = bucket
            .enumerate()
            .map(|(position, item)| self.policy.annotate_at(item, position))
            .collect();
        StockPolicy::order_views(&mut views);
        views
    }
}

impl Default for InventoryViewModel {
    fn default() -> Self {
        Self::new(LocationSet::default(), StockPolicy::default())
    }
}
