// UI module root: controller state in `model`, transitions in `update`, drawing in `render`.

pub mod model;
pub mod render;
pub mod run;
pub mod update;

use crate::catalog::{ChipId, ItemId};

pub use model::{Model, Snapshot, initial_model};
pub use render::{render_field_block, render_full, render_main_content, render_modeline_padded};
pub use run::{run, run_interactive};
pub use update::handle_update;

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    TextChanged(String),
    Rune(char),
    FieldActivated,
    KeyBackspace,
    KeyEnter,
    KeyTab,
    KeyDelete,
    KeyUp,
    KeyDown,
    KeyLeft,
    KeyRight,
    PickSuggestion(ItemId),
    RemoveChip(ChipId),
}
