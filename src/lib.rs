//! chips - selection state behind a multi-select chip input
//!
//! A fixed [`catalog::Catalog`] is split into selected chips and available items by
//! [`partition::Selection`]; [`filter`] derives the suggestion list and [`ui`] turns
//! key presses into partition commands and renders the result in a terminal.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod partition;

pub mod ui;

pub use catalog::{Catalog, ChipId, Item, ItemId};
pub use error::{CatalogError, ConfigError, Error, SelectionError};
pub use filter::{Suggestions, filter_available};
pub use partition::{Change, Chip, Selection};
