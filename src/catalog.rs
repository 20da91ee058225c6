//! The fixed universe of selectable items.
//!
//! A [`Catalog`] is built once (from the built-in list or a JSON file) and never
//! mutated afterwards. Item ids are unique; construction rejects duplicates.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ItemId);
id_newtype!(ChipId);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub display_name: String,
    #[serde(default)]
    pub secondary_text: String,
    #[serde(default)]
    pub image_ref: String,
}

impl Item {
    pub fn new(
        id: u64,
        display_name: impl Into<String>,
        secondary_text: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId(id),
            display_name: display_name.into(),
            secondary_text: secondary_text.into(),
            image_ref: image_ref.into(),
        }
    }
}

/// Cheap to clone; the item list is shared.
#[derive(Clone, Debug)]
pub struct Catalog {
    items: Arc<[Item]>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for it in &items {
            if !seen.insert(it.id) {
                return Err(CatalogError::DuplicateId(it.id));
            }
        }
        Ok(Self {
            items: items.into(),
        })
    }

    pub fn builtin() -> Self {
        let items = vec![
            Item::new(1, "Steve Mark", "stevemark@example.com", "steve.jpg"),
            Item::new(2, "Nick Garner", "nickgarner@example.com", "nick.jpg"),
            Item::new(3, "Tom Giannopoulos", "tomgg@example.com", "tom.jpg"),
            Item::new(4, "Tony Williams", "tony@example.com", "tony.jpg"),
            Item::new(5, "Hercules Lant", "hercules@example.com", "hercules.jpg"),
            Item::new(6, "Sam Albert", "sam@example.com", "sam.jpg"),
        ];
        Self {
            items: items.into(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(s)?;
        Self::new(items)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), items = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|it| it.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(|it| it.id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
