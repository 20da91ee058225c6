use crate::catalog::{ChipId, ItemId};
use crate::error::SelectionError;
use crate::partition::Change;
use crate::ui::Msg;
use crate::ui::model::{MODELINE_LINES, Model};

/// Apply one event. `Ok(None)` means only the query/view state changed.
pub fn handle_update(m: &mut Model, msg: Msg) -> Result<Option<Change>, SelectionError> {
    let res = dispatch(m, msg);
    relayout(m);
    res
}

fn dispatch(m: &mut Model, msg: Msg) -> Result<Option<Change>, SelectionError> {
    match msg {
        Msg::WindowSize { width, height } => {
            handle_window_size(m, width, height);
            Ok(None)
        }
        Msg::TextChanged(s) => {
            set_text(m, s);
            Ok(None)
        }
        Msg::Rune(r) => {
            let mut s = m.text.clone();
            s.push(r);
            set_text(m, s);
            Ok(None)
        }
        Msg::FieldActivated => {
            m.suggestions_visible = true;
            Ok(None)
        }
        Msg::KeyBackspace => handle_key_backspace(m),
        Msg::KeyEnter => handle_key_enter(m),
        Msg::KeyTab => handle_key_tab(m),
        Msg::KeyDelete => handle_key_delete(m),
        Msg::KeyUp => {
            handle_key_up(m);
            Ok(None)
        }
        Msg::KeyDown => {
            handle_key_down(m);
            Ok(None)
        }
        Msg::KeyLeft => {
            move_chip_focus(m, -1);
            Ok(None)
        }
        Msg::KeyRight => {
            move_chip_focus(m, 1);
            Ok(None)
        }
        Msg::PickSuggestion(id) => pick_suggestion(m, id),
        Msg::RemoveChip(chip_id) => remove_chip(m, chip_id),
    }
}

fn handle_window_size(m: &mut Model, width: usize, height: usize) {
    m.screen_width = width;
    m.screen_height = height;
}

// The list gets whatever the field block and modeline leave over.
fn relayout(m: &mut Model) {
    if m.screen_height == 0 {
        return;
    }
    let field = crate::ui::render::field_block_height(m);
    m.per_page = m.screen_height.saturating_sub(field + MODELINE_LINES);
}

fn set_text(m: &mut Model, s: String) {
    m.text = s;
    m.suggestions_visible = true;
    m.cursor = 0;
    if !m.text.is_empty() {
        m.chip_focus = None;
    }
}

fn handle_key_backspace(m: &mut Model) -> Result<Option<Change>, SelectionError> {
    if !m.text.is_empty() {
        let mut s = m.text.clone();
        s.pop();
        set_text(m, s);
        return Ok(None);
    }
    // delete-key: only with an empty field and something to remove
    let item = m.selection.remove_last()?;
    clamp_chip_focus(m);
    Ok(Some(Change::Removed(item)))
}

fn handle_key_enter(m: &mut Model) -> Result<Option<Change>, SelectionError> {
    let query = m.text.trim().to_string();
    if query.is_empty() {
        return Err(SelectionError::InvalidInput);
    }
    let chip = m.selection.add_by_name(&query)?;
    // suggestion visibility is deliberately left as it was
    m.text.clear();
    m.cursor = 0;
    Ok(Some(Change::Added(chip)))
}

fn handle_key_tab(m: &mut Model) -> Result<Option<Change>, SelectionError> {
    let id = m.highlighted().map(|it| it.id).ok_or(SelectionError::NotFound)?;
    pick_suggestion(m, id)
}

fn pick_suggestion(m: &mut Model, id: ItemId) -> Result<Option<Change>, SelectionError> {
    let name = m
        .selection
        .available()
        .iter()
        .find(|it| it.id == id)
        .map(|it| it.display_name.clone());
    m.text.clear();
    m.cursor = 0;
    let name = name.ok_or(SelectionError::NotFound)?;
    let chip = m.selection.add_by_name(&name)?;
    Ok(Some(Change::Added(chip)))
}

fn remove_chip(m: &mut Model, chip_id: ChipId) -> Result<Option<Change>, SelectionError> {
    let item = m.selection.remove_by_chip_id(chip_id)?;
    clamp_chip_focus(m);
    clamp_cursor(m);
    Ok(Some(Change::Removed(item)))
}

fn handle_key_delete(m: &mut Model) -> Result<Option<Change>, SelectionError> {
    let chip_id = m
        .focused_chip()
        .map(|c| c.chip_id)
        .ok_or(SelectionError::NotFound)?;
    remove_chip(m, chip_id)
}

fn handle_key_down(m: &mut Model) {
    if !m.suggestions_shown() {
        m.suggestions_visible = true;
        m.cursor = 0;
        return;
    }
    let total = m.suggestions().count();
    if m.cursor + 1 < total {
        m.cursor += 1;
    }
}

fn handle_key_up(m: &mut Model) {
    if m.cursor > 0 {
        m.cursor -= 1;
    }
}

fn move_chip_focus(m: &mut Model, delta: isize) {
    let n = m.selection.selected().len();
    if !m.text.is_empty() || n == 0 {
        m.chip_focus = None;
        return;
    }
    m.chip_focus = match (m.chip_focus, delta < 0) {
        // leaving the field to the left lands on the last chip
        (None, true) => Some(n - 1),
        (None, false) => None,
        (Some(0), true) => Some(0),
        (Some(i), true) => Some(i - 1),
        (Some(i), false) if i + 1 < n => Some(i + 1),
        // past the last chip returns to the text field
        (Some(_), false) => None,
    };
}

fn clamp_chip_focus(m: &mut Model) {
    let n = m.selection.selected().len();
    m.chip_focus = match m.chip_focus {
        Some(_) if n == 0 => None,
        Some(i) if i >= n => Some(n - 1),
        other => other,
    };
}

fn clamp_cursor(m: &mut Model) {
    let total = m.suggestions().count();
    if m.cursor >= total {
        m.cursor = total.saturating_sub(1);
    }
}
