//! Low-stock policy: threshold resolution, evaluation and display order.

use core::cmp::Ordering;

use stockboard_core::ValueObject;

use crate::item::{Item, ItemKind};
use crate::view::ItemView;

/// Threshold used when an item has no usable threshold of its own.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Low-stock rules with an injected default threshold.
///
/// All operations are total: malformed item fields resolve toward "use the
/// default threshold" and "not low stock", never toward an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StockPolicy {
    default_threshold: i64,
}

impl StockPolicy {
    /// Policy with a custom default.
    ///
    /// Non-positive defaults are rejected by configuration before they get
    /// here; one that slips through is replaced with
    /// [`DEFAULT_LOW_STOCK_THRESHOLD`].
    pub fn new(default_threshold: i64) -> Self {
        let default_threshold = if default_threshold > 0 {
            default_threshold
        } else {
            DEFAULT_LOW_STOCK_THRESHOLD
        };
        Self { default_threshold }
    }

    pub fn default_threshold(&self) -> i64 {
        self.default_threshold
    }

    /// The item's own threshold if finite and positive, else the default.
    ///
    /// A stored threshold of 0 counts as absent.
    pub fn resolve_threshold(&self, item: &Item) -> f64 {
        match item.low_stock_threshold {
            Some(t) if t.is_finite() && t > 0.0 => t,
            _ => self.default_threshold as f64,
        }
    }

    /// Supplies whose known amount is strictly below the resolved threshold.
    ///
    /// Equipment is never low stock; neither is an item whose amount is not
    /// a number.
    pub fn is_low_stock(&self, item: &Item) -> bool {
        match (item.kind, item.amount) {
            (ItemKind::Supplies, Some(amount)) => amount < self.resolve_threshold(item),
            _ => false,
        }
    }

    /// Read-only display projection of one item.
    pub fn annotate<'a>(&self, item: &'a Item) -> ItemView<'a> {
        self.annotate_at(item, 0)
    }

    pub(crate) fn annotate_at<'a>(&self, item: &'a Item, position: usize) -> ItemView<'a> {
        ItemView {
            item,
            position,
            low_stock: self.is_low_stock(item),
            effective_threshold: self.resolve_threshold(item),
            type_label: item.kind.label(),
        }
    }

    /// Display order: low-stock first, then supplies before equipment.
    ///
    /// Stable, so items that tie on both keys keep their input order. Since
    /// equipment is never low stock the result is low-stock supplies, then
    /// the remaining supplies, then equipment.
    pub fn order_for_display<'a, I>(&self, items: I) -> Vec<&'a Item>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut keyed: Vec<(bool, &'a Item)> = items
            .into_iter()
            .map(|item| (self.is_low_stock(item), item))
            .collect();
        keyed.sort_by(|(a_low, a), (b_low, b)| display_cmp((*a_low, a.kind), (*b_low, b.kind)));
        keyed.into_iter().map(|(_, item)| item).collect()
    }

    /// Same ordering as [`Self::order_for_display`], over annotated views.
    pub(crate) fn order_views(views: &mut [ItemView<'_>]) {
        views.sort_by(|a, b| display_cmp((a.low_stock, a.item.kind), (b.low_stock, b.item.kind)));
    }
}

/// Low-stock before the rest, then supplies before equipment.
///
/// Used with a stable sort; `Equal` keeps input order.
fn display_cmp((a_low, a_kind): (bool, ItemKind), (b_low, b_kind): (bool, ItemKind)) -> Ordering {
    b_low
        .cmp(&a_low)
        .then_with(|| a_kind.rank().cmp(&b_kind.rank()))
}

impl Default for StockPolicy {
    fn default() -> Self {
        Self {
            default_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl ValueObject for StockPolicy {}
