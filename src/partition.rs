//! Selection partition: the catalog split into selected chips and available items.
//!
//! Every catalog id lives on exactly one side. `available` stays sorted by id and
//! `selected` keeps chip-creation order. The only mutations are [`Selection::add_by_name`],
//! [`Selection::remove_by_chip_id`] and [`Selection::remove_last`].

use crate::catalog::{Catalog, ChipId, Item, ItemId};
use crate::error::SelectionError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    pub chip_id: ChipId,
    pub item: Item,
}

/// What a successful command did to the partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change {
    Added(Chip),
    Removed(Item),
}

#[derive(Clone, Debug)]
pub struct Selection {
    catalog: Catalog,
    selected: Vec<Chip>,
    available: Vec<Item>,
    last_chip_id: u64,
}

impl Selection {
    pub fn new(catalog: Catalog) -> Self {
        let mut available = catalog.items().to_vec();
        available.sort_by_key(|it| it.id);
        Self {
            catalog,
            selected: Vec::new(),
            available,
            last_chip_id: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> &[Chip] {
        &self.selected
    }

    pub fn available(&self) -> &[Item] {
        &self.available
    }

    pub fn is_exhausted(&self) -> bool {
        self.available.is_empty()
    }

    pub fn chip(&self, chip_id: ChipId) -> Option<&Chip> {
        self.selected.iter().find(|c| c.chip_id == chip_id)
    }

    pub fn last_chip_id(&self) -> ChipId {
        ChipId(self.last_chip_id)
    }

    pub fn add_by_name(&mut self, query: &str) -> Result<Chip, SelectionError> {
        let wanted = query.trim();
        // available is id-sorted, so the first hit is the lowest id among equal names
        let pos = self
            .available
            .iter()
            .position(|it| it.display_name.trim().eq_ignore_ascii_case(wanted))
            .ok_or(SelectionError::NotFound)?;

        let item = self.available.remove(pos);
        self.last_chip_id += 1;
        let chip = Chip {
            chip_id: ChipId(self.last_chip_id),
            item,
        };
        self.selected.push(chip.clone());
        debug!(chip_id = %chip.chip_id, item_id = %chip.item.id, "chip added");
        debug_assert!(self.is_consistent());
        Ok(chip)
    }

    pub fn remove_by_chip_id(&mut self, chip_id: ChipId) -> Result<Item, SelectionError> {
        let pos = self
            .selected
            .iter()
            .position(|c| c.chip_id == chip_id)
            .ok_or(SelectionError::NotFound)?;

        let chip = self.selected.remove(pos);
        let slot = self
            .available
            .partition_point(|it| it.id < chip.item.id);
        self.available.insert(slot, chip.item.clone());
        debug!(chip_id = %chip_id, item_id = %chip.item.id, "chip removed");
        debug_assert!(self.is_consistent());
        Ok(chip.item)
    }

    pub fn remove_last(&mut self) -> Result<Item, SelectionError> {
        let last = self
            .selected
            .last()
            .map(|c| c.chip_id)
            .ok_or(SelectionError::EmptySelection)?;
        self.remove_by_chip_id(last)
    }

    /// Checks the partition and ordering invariants against the catalog.
    pub fn is_consistent(&self) -> bool {
        let sorted = self.available.windows(2).all(|w| w[0].id < w[1].id);

        let mut seen: HashSet<ItemId> = HashSet::with_capacity(self.catalog.len());
        let sides = self
            .selected
            .iter()
            .map(|c| c.item.id)
            .chain(self.available.iter().map(|it| it.id));
        for id in sides {
            if !seen.insert(id) {
                return false;
            }
        }
        let covers = seen.len() == self.catalog.len() && self.catalog.ids().all(|id| seen.contains(&id));

        let ids_increase = self.selected.windows(2).all(|w| w[0].chip_id < w[1].chip_id);

        sorted && covers && ids_increase
    }
}
