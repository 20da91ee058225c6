use crate::catalog::{Catalog, Item};
use crate::filter::{Suggestions, filter_available};
use crate::partition::{Chip, Selection};
use serde::Serialize;

// small constants reused by rendering code
// minimum height of the field block; it grows when chips wrap
pub const FIELD_BLOCK_LINES: usize = 3;
pub const MODELINE_LINES: usize = 1;
pub const DEFAULT_WIDTH: usize = 80;

pub const PLACEHOLDER: &str = "Add new item...";
pub const PLACEHOLDER_EXHAUSTED: &str = "Nothing left to add";

#[derive(Clone, Debug)]
pub struct Model {
    pub selection: Selection,
    // transient query state
    pub text: String,
    pub suggestions_visible: bool,
    // index into the visible suggestions
    pub cursor: usize,
    // index into selected chips, only while the text is empty
    pub chip_focus: Option<usize>,
    // list rows left after the field block and modeline
    pub per_page: usize,
    pub screen_width: usize,
    pub screen_height: usize,
    // set once the user asks to leave the program
    pub done: bool,
}

/// Read-only view handed to the presentation layer after every transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub selected: Vec<Chip>,
    pub available: Vec<Item>,
    pub visible_suggestions: Vec<Item>,
    pub query_text: String,
    pub suggestions_shown: bool,
    pub placeholder: String,
}

pub fn initial_model(catalog: Catalog) -> Model {
    from_selection(Selection::new(catalog))
}

pub fn from_selection(selection: Selection) -> Model {
    Model {
        selection,
        text: String::new(),
        suggestions_visible: false,
        cursor: 0,
        chip_focus: None,
        per_page: 0,
        screen_width: 0,
        screen_height: 0,
        done: false,
    }
}

impl Model {
    // wrapper update that delegates to the update module; failures are silent no-ops
    pub fn update(&mut self, msg: crate::ui::Msg) {
        tracing::trace!(?msg, "event");
        match crate::ui::update::handle_update(self, msg) {
            Ok(Some(change)) => tracing::debug!(?change, "applied"),
            Ok(None) => {}
            Err(e) => tracing::debug!(error = %e, "ignored"),
        }
    }

    pub fn mode(&self) -> String {
        if !self.text.is_empty() {
            return format!("Filter: {}", self.text);
        }
        format!(
            "{} selected, {} left",
            self.selection.selected().len(),
            self.selection.available().len()
        )
    }

    pub fn suggestions(&self) -> Suggestions<'_> {
        filter_available(self.selection.available(), &self.text)
    }

    pub fn visible_suggestions(&self) -> Vec<Item> {
        self.suggestions().cloned().collect()
    }

    pub fn suggestions_shown(&self) -> bool {
        self.suggestions_visible && self.suggestions().next().is_some()
    }

    pub fn placeholder(&self) -> &'static str {
        if self.selection.is_exhausted() {
            PLACEHOLDER_EXHAUSTED
        } else {
            PLACEHOLDER
        }
    }

    pub fn highlighted(&self) -> Option<&Item> {
        if !self.suggestions_shown() {
            return None;
        }
        self.suggestions().nth(self.cursor)
    }

    pub fn focused_chip(&self) -> Option<&Chip> {
        self.chip_focus.and_then(|i| self.selection.selected().get(i))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            selected: self.selection.selected().to_vec(),
            available: self.selection.available().to_vec(),
            visible_suggestions: self.visible_suggestions(),
            query_text: self.text.clone(),
            suggestions_shown: self.suggestions_shown(),
            placeholder: self.placeholder().to_string(),
        }
    }

    // Render helper wrappers that forward to the render module to keep this file focused on state.
    pub fn render_field_block(&self) -> Vec<String> {
        crate::ui::render::render_field_block(self)
    }
    pub fn render_list_content(&self, visible: &[Item]) -> String {
        crate::ui::render::render_list_content(self, visible)
    }
    pub fn render_main_content(&self) -> String {
        crate::ui::render::render_main_content(self)
    }
    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }

    pub fn selected_names(&self) -> impl Iterator<Item = &str> {
        self.selection
            .selected()
            .iter()
            .map(|c| c.item.display_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Msg;

    #[test]
    fn test_initial_model_and_mode() {
        let mut m = initial_model(Catalog::builtin());
        assert_eq!(m.mode(), "0 selected, 6 left");
        assert!(!m.suggestions_visible);
        assert!(!m.suggestions_shown());
        m.text = "abcd".to_string();
        assert_eq!(m.mode(), "Filter: abcd");
    }

    #[test]
    fn test_snapshot_reflects_filter() {
        let mut m = initial_model(Catalog::builtin());
        m.update(Msg::TextChanged("to".to_string()));
        let snap = m.snapshot();
        assert_eq!(snap.query_text, "to");
        assert!(snap.suggestions_shown);
        let names: Vec<&str> = snap
            .visible_suggestions
            .iter()
            .map(|it| it.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["Tom Giannopoulos", "Tony Williams"]);
        assert_eq!(snap.available.len(), 6);
        assert_eq!(snap.placeholder, PLACEHOLDER);
    }

    #[test]
    fn test_no_matches_hides_list_even_when_visible() {
        let mut m = initial_model(Catalog::builtin());
        m.update(Msg::TextChanged("qqq".to_string()));
        assert!(m.suggestions_visible);
        assert!(!m.suggestions_shown());
        assert!(m.highlighted().is_none());
    }

    #[test]
    fn test_exhausted_placeholder_and_hidden_list() {
        let mut m = initial_model(Catalog::builtin());
        let names: Vec<String> = m
            .selection
            .available()
            .iter()
            .map(|it| it.display_name.clone())
            .collect();
        for n in names {
            m.update(Msg::TextChanged(n));
            m.update(Msg::KeyEnter);
        }
        m.update(Msg::FieldActivated);
        for q in ["", "a", "Steve"] {
            m.update(Msg::TextChanged(q.to_string()));
            assert!(m.visible_suggestions().is_empty());
            assert!(!m.suggestions_shown());
        }
        assert_eq!(m.placeholder(), PLACEHOLDER_EXHAUSTED);
        assert_eq!(m.selected_names().count(), 6);
    }

    #[test]
    fn test_update_logs_and_applies_under_trace() {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter("trace")
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut m = initial_model(Catalog::builtin());
            m.update(Msg::TextChanged("Steve Mark".to_string()));
            m.update(Msg::KeyEnter);
            m.update(Msg::KeyEnter);
            assert_eq!(m.selected_names().collect::<Vec<_>>(), vec!["Steve Mark"]);
        });
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut m = initial_model(Catalog::builtin());
        m.update(Msg::TextChanged("Nick Garner".to_string()));
        m.update(Msg::KeyEnter);
        let json = serde_json::to_value(m.snapshot()).unwrap();
        assert_eq!(json["selected"][0]["chip_id"], 1);
        assert_eq!(json["selected"][0]["item"]["display_name"], "Nick Garner");
        assert_eq!(json["query_text"], "");
    }
}
