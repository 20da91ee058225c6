use crate::filter::match_span;
use crate::ui::render::styles::{STYLE_LABEL, STYLE_MATCH};

/// Render `name` with the first case-insensitive occurrence of `query` emphasized.
pub fn highlight_match(name: &str, query: &str) -> String {
    let Some(span) = match_span(name, query) else {
        return STYLE_LABEL.render(name);
    };
    let mut out = String::new();
    if span.start > 0 {
        out.push_str(&STYLE_LABEL.render(&name[..span.start]));
    }
    out.push_str(&STYLE_MATCH.render(&name[span.clone()]));
    if span.end < name.len() {
        out.push_str(&STYLE_LABEL.render(&name[span.end..]));
    }
    out
}
