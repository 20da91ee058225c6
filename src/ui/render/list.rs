use crate::catalog::Item;
use crate::ui::model::Model;
use crate::ui::render::decorate::highlight_match;
use crate::ui::render::styles::{STYLE_CURSOR, STYLE_DESC, STYLE_LINENUM};
use crate::ui::render::util::{normalize_and_pad, screen_width};

fn compute_gutter_width(total: usize) -> usize {
    if total == 0 {
        return 1;
    }
    let gw = ((total as f64).log10().floor() as usize) + 1;
    usize::max(gw, 3)
}

fn format_num_str(num: usize, gutter_width: usize) -> String {
    format!("{:>1$} │ ", num, gutter_width)
}

/// Page shown for the current cursor position.
pub fn current_page(m: &Model) -> usize {
    if m.per_page == 0 {
        0
    } else {
        m.cursor / m.per_page
    }
}

fn render_item_line(it: &Item, num_str: String, is_cursor: bool, m: &Model) -> String {
    let marker = if is_cursor {
        STYLE_CURSOR.render("› ")
    } else {
        "  ".to_string()
    };
    let mut line = format!(
        "{}{}{}",
        STYLE_LINENUM.render(&num_str),
        marker,
        highlight_match(&it.display_name, &m.text)
    );
    if !it.secondary_text.is_empty() {
        line.push_str(&STYLE_DESC.render(&format!("  {}", it.secondary_text)));
    }
    line
}

pub fn render_list_content(m: &Model, visible: &[Item]) -> String {
    let total = visible.len();
    let per = if m.per_page == 0 { total } else { m.per_page };
    if per == 0 {
        return String::new();
    }
    let start = current_page(m).saturating_mul(per);
    let end = usize::min(start + per, total);
    let gutter_width = compute_gutter_width(total);

    let mut b = String::new();
    for (idx, it) in visible.iter().enumerate().skip(start).take(end.saturating_sub(start)) {
        let num_str = format_num_str(idx + 1, gutter_width);
        b.push_str(&render_item_line(it, num_str, idx == m.cursor, m));
        b.push('\n');
    }
    b
}

pub fn render_main_content(m: &Model) -> String {
    let total_width = screen_width(m.screen_width);

    let lines: Vec<String> = if m.suggestions_shown() {
        let visible = m.visible_suggestions();
        m.render_list_content(&visible)
            .lines()
            .map(|s| s.to_string())
            .collect()
    } else {
        Vec::new()
    };
    // without a known height the list is unpaged
    let per = if m.screen_height == 0 {
        lines.len()
    } else {
        m.per_page
    };
    // Ensure we return exactly `per` lines each normalized to the terminal width.
    normalize_and_pad(lines, total_width, per)
}
