//! Selection registry for the asset search page.

use crate::model::{Asset, AssetId};

/// Maximum number of assets that can be selected for analysis.
pub const MAX_SELECTED: usize = 3;

/// Ordered, size-bounded, duplicate-free set of selected assets.
///
/// `select` past the bound or with a duplicate id is a silent no-op; the
/// page simply does not add the asset. Nothing here returns an error.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    assets: Vec<Asset>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset iff there is room and its id is not already present.
    pub fn select(&mut self, asset: Asset) {
        if self.assets.len() < MAX_SELECTED && !self.contains(asset.id) {
            self.assets.push(asset);
        }
    }

    /// Remove by id if present.
    pub fn remove(&mut self, id: AssetId) {
        self.assets.retain(|a| a.id != id);
    }

    /// Selected assets in selection order.
    #[must_use]
    pub fn list(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn contains(&self, id: AssetId) -> bool {
        self.assets.iter().any(|a| a.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.assets.len() >= MAX_SELECTED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskRating;

    fn asset(id: u32) -> Asset {
        Asset::new(id, format!("{id} Main St"), "Office", "$10M", RiskRating::Low)
    }

    #[test]
    fn test_select_and_remove() {
        let mut set = SelectionSet::new();
        set.select(asset(1));
        set.select(asset(2));
        assert_eq!(set.len(), 2);
        assert!(set.contains(AssetId(1)));

        set.remove(AssetId(1));
        assert_eq!(set.len(), 1);
        assert!(!set.contains(AssetId(1)));

        // Removing an absent id is a no-op
        set.remove(AssetId(99));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_fourth_selection_rejected() {
        let mut set = SelectionSet::new();
        set.select(asset(1));
        set.select(asset(2));
        set.select(asset(3));
        set.select(asset(4));

        assert_eq!(set.len(), 3);
        assert!(set.is_full());
        assert!(!set.contains(AssetId(4)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut set = SelectionSet::new();
        set.select(asset(1));
        set.select(asset(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_frees_a_slot() {
        let mut set = SelectionSet::new();
        set.select(asset(1));
        set.select(asset(2));
        set.select(asset(3));
        set.remove(AssetId(2));
        set.select(asset(4));

        assert_eq!(set.len(), 3);
        assert!(set.contains(AssetId(4)));
        // Order preserved: 1, 3, 4
        let ids: Vec<u32> = set.list().iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }
}
