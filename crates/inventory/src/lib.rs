//! Inventory board domain module.
//!
//! Classification, low-stock evaluation and display ordering for a
//! multi-location inventory, implemented purely as deterministic domain
//! logic (no IO, no rendering, no storage). Snapshots come in from a sync
//! collaborator; ordered, annotated views go out to a renderer.

pub mod board;
pub mod config;
pub mod draft;
pub mod item;
mod lenient;
pub mod location;
pub mod policy;
pub mod view;

pub use board::InventoryBoard;
pub use config::{BoardConfig, ConfigError};
pub use draft::ItemDraft;
pub use item::{Item, ItemKind, Location};
pub use location::{LocationEntry, LocationSet};
pub use policy::{DEFAULT_LOW_STOCK_THRESHOLD, StockPolicy};
pub use view::{InventoryViewModel, ItemView, LocationView, Partition};
