//! Cosmetic skin catalog
//!
//! The catalog is fixed at startup; only ownership flags and the selected
//! skin change at runtime.

/// Skin rarity tiers (ordering is used to sort the shop list)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// A single skin entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    /// Cube fill color (RGB)
    pub color: [u8; 3],
    /// Price in coins
    pub price: u64,
    pub owned: bool,
    pub rarity: Rarity,
}

/// Result of activating a skin in the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Skin was already owned and is now active
    Selected,
    /// Skin was bought and is now active
    Purchased,
    /// Not enough coins; nothing changed
    InsufficientFunds,
    /// Index outside the catalog; nothing changed
    Unknown,
}

impl PurchaseOutcome {
    /// True when progress changed and should be persisted
    pub fn changed(&self) -> bool {
        matches!(self, PurchaseOutcome::Selected | PurchaseOutcome::Purchased)
    }
}

/// Indices of `skins` sorted by rarity (stable, so catalog order breaks ties)
pub fn display_order(skins: &[SkinDescriptor]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..skins.len()).collect();
    order.sort_by_key(|&i| skins[i].rarity);
    order
}

/// The fixed, ordered set of skins plus the active selection
#[derive(Debug, Clone)]
pub struct SkinCatalog {
    skins: Vec<SkinDescriptor>,
    selected: usize,
}

impl Default for SkinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SkinCatalog {
    /// Build the stock catalog: only the base skin is owned
    pub fn new() -> Self {
        let skins = vec![
            SkinDescriptor {
                id: "classic",
                name: "Classic",
                color: [102, 255, 0],
                price: 0,
                owned: true,
                rarity: Rarity::Common,
            },
            SkinDescriptor {
                id: "ice",
                name: "Ice",
                color: [0, 255, 255],
                price: 20,
                owned: false,
                rarity: Rarity::Rare,
            },
            SkinDescriptor {
                id: "dark",
                name: "Dark",
                color: [0, 0, 139],
                price: 35,
                owned: false,
                rarity: Rarity::Rare,
            },
            SkinDescriptor {
                id: "gold",
                name: "Gold",
                color: [255, 215, 0],
                price: 350,
                owned: false,
                rarity: Rarity::Legendary,
            },
        ];
        Self { skins, selected: 0 }
    }

    pub fn len(&self) -> usize {
        self.skins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SkinDescriptor> {
        self.skins.get(index)
    }

    pub fn skins(&self) -> &[SkinDescriptor] {
        &self.skins
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Catalog indices in shop order
    pub fn display_order(&self) -> Vec<usize> {
        display_order(&self.skins)
    }

    /// Make an owned skin active. Returns false (no change) otherwise.
    pub fn select(&mut self, index: usize) -> bool {
        match self.skins.get(index) {
            Some(skin) if skin.owned => {
                self.selected = index;
                true
            }
            _ => false,
        }
    }

    /// Buy (or just select, if owned) the skin at `index`, paying from `coins`
    pub fn purchase(&mut self, index: usize, coins: &mut u64) -> PurchaseOutcome {
        let Some(skin) = self.skins.get_mut(index) else {
            return PurchaseOutcome::Unknown;
        };

        if skin.owned {
            self.selected = index;
            return PurchaseOutcome::Selected;
        }

        if *coins < skin.price {
            return PurchaseOutcome::InsufficientFunds;
        }

        *coins -= skin.price;
        skin.owned = true;
        self.selected = index;
        PurchaseOutcome::Purchased
    }

    /// Ownership flags in catalog order (persisted form)
    pub fn owned_flags(&self) -> Vec<bool> {
        self.skins.iter().map(|s| s.owned).collect()
    }

    /// Set a single ownership flag from a saved record
    pub(crate) fn restore_owned(&mut self, index: usize, owned: bool) {
        if let Some(skin) = self.skins.get_mut(index) {
            skin.owned = owned;
        }
    }

    /// Set the selection from a saved record (bounds-checked only)
    pub(crate) fn restore_selected(&mut self, index: usize) {
        if index < self.skins.len() {
            self.selected = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DARK: usize = 2;

    #[test]
    fn test_stock_catalog() {
        let catalog = SkinCatalog::new();
        let owned: Vec<_> = catalog.skins().iter().filter(|s| s.owned).collect();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].price, 0);
        assert_eq!(catalog.selected_index(), 0);
        assert_eq!(catalog.get(DARK).unwrap().price, 35);
    }

    #[test]
    fn test_purchase_insufficient_funds() {
        let mut catalog = SkinCatalog::new();
        let mut coins = 30;

        let outcome = catalog.purchase(DARK, &mut coins);

        assert_eq!(outcome, PurchaseOutcome::InsufficientFunds);
        assert!(!outcome.changed());
        assert_eq!(coins, 30);
        assert!(!catalog.get(DARK).unwrap().owned);
        assert_eq!(catalog.selected_index(), 0);
    }

    #[test]
    fn test_purchase_success() {
        let mut catalog = SkinCatalog::new();
        let mut coins = 40;

        let outcome = catalog.purchase(DARK, &mut coins);

        assert_eq!(outcome, PurchaseOutcome::Purchased);
        assert_eq!(coins, 5);
        assert!(catalog.get(DARK).unwrap().owned);
        assert_eq!(catalog.selected_index(), DARK);
    }

    #[test]
    fn test_purchase_owned_only_selects() {
        let mut catalog = SkinCatalog::new();
        let mut coins = 40;
        catalog.purchase(DARK, &mut coins);
        catalog.select(0);

        let outcome = catalog.purchase(DARK, &mut coins);
        assert_eq!(outcome, PurchaseOutcome::Selected);
        assert_eq!(coins, 5);
        assert_eq!(catalog.selected_index(), DARK);
    }

    #[test]
    fn test_select_unowned_is_noop() {
        let mut catalog = SkinCatalog::new();
        assert!(!catalog.select(DARK));
        assert!(!catalog.select(99));
        assert_eq!(catalog.selected_index(), 0);
        assert!(catalog.select(0));
    }

    #[test]
    fn test_purchase_out_of_range() {
        let mut catalog = SkinCatalog::new();
        let mut coins = 1000;
        assert_eq!(catalog.purchase(42, &mut coins), PurchaseOutcome::Unknown);
        assert_eq!(coins, 1000);
    }

    #[test]
    fn test_display_order_by_rarity() {
        let catalog = SkinCatalog::new();
        assert_eq!(catalog.display_order(), vec![0, 1, 2, 3]);
    }
}
