//! The catalog as the client views see it: one pool per slot type and a
//! name → price lookup.

use std::collections::HashMap;

use crate::models::{Equipment, ItemType, Slot};

/// A chosen item as held by a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedItem {
    pub name: String,
    pub price: f64,
}

impl From<&Equipment> for SelectedItem {
    fn from(item: &Equipment) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
        }
    }
}

/// Pool of items a slot draws from.
pub fn pool_type(slot: Slot) -> ItemType {
    match slot {
        Slot::Primary => ItemType::PrimaryWeapon,
        Slot::Sub => ItemType::SubWeapon,
        Slot::Gadget1 | Slot::Gadget2 => ItemType::Gadget,
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    primary: Vec<Equipment>,
    sub: Vec<Equipment>,
    gadgets: Vec<Equipment>,
    prices: HashMap<String, f64>,
}

impl Catalog {
    /// Partition the fetched catalog by item type, keeping fetch order
    /// inside each pool.
    pub fn new(items: Vec<Equipment>) -> Self {
        let mut catalog = Self::default();
        for item in items {
            catalog.prices.insert(item.name.clone(), item.price);
            match item.item_type {
                ItemType::PrimaryWeapon => catalog.primary.push(item),
                ItemType::SubWeapon => catalog.sub.push(item),
                ItemType::Gadget => catalog.gadgets.push(item),
            }
        }
        catalog
    }

    pub fn pool(&self, item_type: ItemType) -> &[Equipment] {
        match item_type {
            ItemType::PrimaryWeapon => &self.primary,
            ItemType::SubWeapon => &self.sub,
            ItemType::Gadget => &self.gadgets,
        }
    }

    pub fn pool_for(&self, slot: Slot) -> &[Equipment] {
        self.pool(pool_type(slot))
    }

    /// Find an item by name within the pool a slot draws from.
    pub fn find_for(&self, slot: Slot, name: &str) -> Option<&Equipment> {
        self.pool_for(slot).iter().find(|item| item.name == name)
    }

    /// Current catalog price of an item, by name.
    pub fn price_of(&self, name: &str) -> Option<f64> {
        self.prices.get(name).copied()
    }

    /// Turn a stored item name back into a selection at today's price.
    ///
    /// Names missing from the catalog keep the name and price at zero, the
    /// same way totals treat them.
    pub fn resolve(&self, name: &str) -> SelectedItem {
        SelectedItem {
            name: name.to_string(),
            price: self.price_of(name).unwrap_or(0.0),
        }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
