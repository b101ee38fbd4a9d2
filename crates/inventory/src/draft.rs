//! Add/edit form drafts.
//!
//! A draft holds raw form text. Validation turns it into an unsaved [`Item`]
//! for the persistence collaborator to write; it is the only place where
//! malformed input is rejected instead of defaulted.

use serde::{Deserialize, Serialize};

use stockboard_core::{DomainError, DomainResult};

use crate::item::{Item, ItemKind, Location};
use crate::lenient;
use crate::location::LocationSet;
use crate::policy::StockPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub amount: String,
    pub kind: ItemKind,
    pub location: Location,
    pub low_stock_threshold: String,
}

impl ItemDraft {
    /// Empty add form, opened on the first configured location.
    pub fn blank(locations: &LocationSet, policy: &StockPolicy) -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            kind: ItemKind::Supplies,
            location: locations.first().clone(),
            low_stock_threshold: policy.default_threshold().to_string(),
        }
    }

    /// Edit form prefilled from a stored item.
    ///
    /// The threshold field shows the resolved threshold, so an item without
    /// one is edited as if it had the default. An unknown amount prefills as
    /// empty text.
    pub fn from_item(item: &Item, policy: &StockPolicy) -> Self {
        Self {
            name: item.name.clone(),
            amount: item.amount.map(|a| a.to_string()).unwrap_or_default(),
            kind: item.kind,
            location: item
                .location
                .clone()
                .unwrap_or_else(|| Location::new(String::new())),
            low_stock_threshold: policy.resolve_threshold(item).to_string(),
        }
    }

    /// Check the draft and build the item to store.
    ///
    /// The name must be non-empty, amount and threshold must be non-empty
    /// numbers, and the location must be recognized. Numbers are stored as
    /// typed. Whitespace-only text is not empty: a name of spaces is kept
    /// and a number of spaces reads as 0.
    pub fn validate(&self, locations: &LocationSet) -> DomainResult<Item> {
        if self.name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let amount = required_number(&self.amount, "amount")?;
        let threshold = required_number(&self.low_stock_threshold, "low stock threshold")?;
        if !locations.contains(&self.location) {
            return Err(DomainError::validation(format!(
                "unknown location: {}",
                self.location
            )));
        }

        Ok(Item {
            id: None,
            name: self.name.clone(),
            amount: Some(amount),
            kind: self.kind,
            location: Some(self.location.clone()),
            low_stock_threshold: Some(threshold),
        })
    }

    /// Live low-stock warning while editing.
    ///
    /// Applies the same rule the saved item will be shown with, so the
    /// warning never disagrees with the list after saving. `false` while the
    /// amount does not parse; an unparsable threshold means the default.
    pub fn preview_low_stock(&self, policy: &StockPolicy) -> bool {
        let preview = Item {
            id: None,
            name: String::new(),
            amount: lenient::parse_text(&self.amount),
            kind: self.kind,
            location: None,
            low_stock_threshold: lenient::parse_text(&self.low_stock_threshold),
        };
        policy.is_low_stock(&preview)
    }
}

fn required_number(text: &str, field: &str) -> DomainResult<f64> {
    if text.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    lenient::parse_text(text)
        .ok_or_else(|| DomainError::validation(format!("{field} must be a number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn draft(name: &str, amount: &str, threshold: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            amount: amount.to_string(),
            kind: ItemKind::Supplies,
            location: Location::new("office"),
            low_stock_threshold: threshold.to_string(),
        }
    }

    #[test]
    fn valid_draft_builds_unsaved_item() {
        let item = draft("Toner", "3", "5").validate(&LocationSet::default()).unwrap();
        assert_eq!(item.id, None);
        assert_eq!(item.name, "Toner");
        assert_eq!(item.amount, Some(3.0));
        assert_eq!(item.low_stock_threshold, Some(5.0));
        assert_eq!(item.location, Some(Location::new("office")));
    }

    #[test]
    fn typed_fractions_are_stored_as_typed() {
        let item = draft("Rope", "9.8", "9.5").validate(&LocationSet::default()).unwrap();
        assert_eq!(item.amount, Some(9.8));
        assert_eq!(item.low_stock_threshold, Some(9.5));
    }

    #[test]
    fn hebrew_names_pass_through() {
        let item = draft("נייר", "1", "10").validate(&LocationSet::default()).unwrap();
        assert_eq!(item.name, "נייר");
    }

    #[test]
    fn rejects_empty_name() {
        let err = draft("", "3", "5").validate(&LocationSet::default()).unwrap_err();
        assert_eq!(err, DomainError::validation("name cannot be empty"));
    }

    #[test]
    fn whitespace_only_text_is_not_empty() {
        let item = draft("  ", " ", "5").validate(&LocationSet::default()).unwrap();
        assert_eq!(item.name, "  ");
        assert_eq!(item.amount, Some(0.0));
    }

    #[test]
    fn rejects_missing_or_non_numeric_fields() {
        let locations = LocationSet::default();
        assert_eq!(
            draft("Toner", "", "5").validate(&locations).unwrap_err(),
            DomainError::validation("amount is required")
        );
        assert_eq!(
            draft("Toner", "x", "5").validate(&locations).unwrap_err(),
            DomainError::validation("amount must be a number")
        );
        assert_eq!(
            draft("Toner", "3", "").validate(&locations).unwrap_err(),
            DomainError::validation("low stock threshold is required")
        );
    }

    #[test]
    fn zero_threshold_is_accepted_and_later_defaulted() {
        let item = draft("Toner", "3", "0").validate(&LocationSet::default()).unwrap();
        assert_eq!(item.low_stock_threshold, Some(0.0));
        assert_eq!(StockPolicy::default().resolve_threshold(&item), 10.0);
    }

    #[test]
    fn rejects_unknown_location() {
        let mut d = draft("Toner", "3", "5");
        d.location = Location::new("mars");
        let err = d.validate(&LocationSet::default()).unwrap_err();
        assert_eq!(err, DomainError::validation("unknown location: mars"));
    }

    #[test]
    fn blank_form_opens_on_first_location() {
        let locations = LocationSet::new([("gate", "Gate"), ("ctx", "CTX")]).unwrap();
        let d = ItemDraft::blank(&locations, &StockPolicy::new(7));
        assert_eq!(d.location, Location::new("gate"));
        assert_eq!(d.kind, ItemKind::Supplies);
        assert_eq!(d.low_stock_threshold, "7");
        assert!(d.name.is_empty());

        let d = ItemDraft::blank(&LocationSet::default(), &StockPolicy::default());
        assert_eq!(d.location, Location::new("office"));
        assert_eq!(d.low_stock_threshold, "10");
    }

    #[test]
    fn edit_prefill_uses_resolved_threshold() {
        let policy = StockPolicy::default();
        let item = Item::new("Soap", ItemKind::Supplies, 4, "ctx");
        let d = ItemDraft::from_item(&item, &policy);
        assert_eq!(d.amount, "4");
        assert_eq!(d.low_stock_threshold, "10");
        assert_eq!(d.location, Location::new("ctx"));

        let d = ItemDraft::from_item(&item.with_threshold(3), &policy);
        assert_eq!(d.low_stock_threshold, "3");
    }

    #[test]
    fn preview_tracks_typed_values() {
        let policy = StockPolicy::default();
        assert!(draft("Soap", "4", "5").preview_low_stock(&policy));
        assert!(!draft("Soap", "5", "5").preview_low_stock(&policy));
        assert!(!draft("Soap", "abc", "5").preview_low_stock(&policy));
        assert!(draft("Soap", "4", "abc").preview_low_stock(&policy));

        let mut d = draft("Cart", "0", "5");
        d.kind = ItemKind::Equipment;
        assert!(!d.preview_low_stock(&policy));
    }

    #[test]
    fn preview_matches_saved_item() {
        let policy = StockPolicy::default();
        let locations = LocationSet::default();
        for (amount, threshold) in [("9.8", "9.5"), ("9.4", "9.5"), ("3", "0"), ("12", "0")] {
            let d = draft("Rope", amount, threshold);
            let saved = d.validate(&locations).unwrap();
            assert_eq!(
                d.preview_low_stock(&policy),
                policy.is_low_stock(&saved),
                "amount={amount} threshold={threshold}"
            );
        }
        assert!(!draft("Rope", "9.8", "9.5").preview_low_stock(&policy));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: whatever the form warns is what the list shows after saving.
        #[test]
        fn preview_agrees_with_saved_item(
            amount in -20.0f64..50.0,
            threshold in -5.0f64..30.0,
            supplies in any::<bool>()
        ) {
            let policy = StockPolicy::default();
            let mut d = draft("Rope", &amount.to_string(), &threshold.to_string());
            d.kind = if supplies { ItemKind::Supplies } else { ItemKind::Equipment };
            let saved = d.validate(&LocationSet::default()).unwrap();
            prop_assert_eq!(d.preview_low_stock(&policy), policy.is_low_stock(&saved));
        }
    }
}
