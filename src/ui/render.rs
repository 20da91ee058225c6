// Render module split into focused submodules, one per screen region.

pub mod decorate;
pub mod field;
pub mod full;
pub mod list;
pub mod modeline;
pub mod styles;
pub mod util;

pub use decorate::highlight_match;
pub use field::{field_block_height, render_chips, render_field_block};
pub use full::render_full;
pub use list::{render_list_content, render_main_content};
pub use modeline::{render_modeline, render_modeline_padded};
