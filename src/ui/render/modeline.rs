use crate::ui::model::Model;
use crate::ui::render::list::current_page;
use crate::ui::render::styles::STYLE_MODELINE;
use crate::ui::render::util::screen_width;
use lipgloss::Color;

pub fn render_modeline(m: &Model, inner_max: usize, mode: &str, total: usize) -> String {
    let per = if m.per_page == 0 { total } else { m.per_page };
    let total_pages = if per > 0 { total.div_ceil(per) } else { 1 };
    let page = current_page(m);

    // prepare inner styles without padding so spacing is under our control
    let inner_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let key_style = STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
        .padding(0, 0, 0, 0);
    let desc_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let pag_style = STYLE_MODELINE.clone().faint(true).padding(0, 0, 0, 0);

    let pairs_def: Vec<(&str, &str)> =
        vec![("⏎", "add"), ("⇥", "pick"), ("⌫", "remove"), ("⎋", "done")];

    // Build rendered pairs and their plain widths in one pass
    let pairs: Vec<(String, usize)> = pairs_def
        .iter()
        .map(|(k, d)| {
            let plain_len = d.chars().count() + 1 + k.chars().count();
            let rendered = format!(
                "{}{}{}",
                desc_style.render(d),
                inner_style.render(":"),
                key_style.render(k)
            );
            (rendered, plain_len)
        })
        .collect();

    let pair_sep_rendered = inner_style.render("  ");
    let pair_sep_width = 2usize;

    let mut pag_plain = String::new();
    let mut pag_rendered = String::new();
    if total_pages > 1 {
        pag_plain = format!("Page {}/{} ↑/↓", page + 1, total_pages);
        let arrows = format!("{}/{}", key_style.render("↑"), key_style.render("↓"));
        let pag_unstyled = format!("Page {}/{} ", page + 1, total_pages);
        pag_rendered = pag_style.render(&format!("{pag_unstyled}{arrows}"));
    }
    let mut pag_width = pag_plain.chars().count();

    let left_width_of = |n: usize| -> usize {
        if n == 0 {
            0
        } else {
            pairs.iter().take(n).map(|(_, w)| *w).sum::<usize>() + pair_sep_width * (n - 1)
        }
    };

    // indicator and mode both carry 1 char of padding on each side
    let indicator_w = 3usize;
    let mode_w = mode.chars().count() + 2;
    let sep_w = " | ".chars().count();
    let avail = inner_max.saturating_sub(indicator_w + mode_w + sep_w);

    // drop rightmost pairs until left + pag fits into avail
    let mut pairs_count = pairs.len();
    while pairs_count > 0 && left_width_of(pairs_count) + pag_width > avail {
        pairs_count -= 1;
    }
    let left_width = left_width_of(pairs_count);
    let left_joined_rendered = pairs
        .iter()
        .take(pairs_count)
        .map(|(r, _)| r.clone())
        .collect::<Vec<_>>()
        .join(&pair_sep_rendered);

    // if still doesn't fit and pagination exists, shorten pagination to just "Page X/Y"
    if left_width + pag_width > avail && !pag_plain.is_empty() {
        let short_pag = format!("Page {}/{}", page + 1, total_pages);
        pag_width = short_pag.chars().count();
        pag_rendered = pag_style.render(&short_pag);
    }

    let pad = avail.saturating_sub(left_width + pag_width + 2);
    let filler = if pad > 0 {
        STYLE_MODELINE.clone().width(pad as i32).render("")
    } else {
        String::new()
    };

    let footer_inner = format!("{left_joined_rendered}{filler}{pag_rendered}");

    let mode_style = STYLE_MODELINE
        .clone()
        .background(Color::from_rgb(101, 101, 101))
        .padding(0, 1, 0, 1)
        .bold(true);
    let mode_styled = mode_style.render(mode);

    // Dim marker at the far left: '+' while items remain, '=' once everything is selected.
    let indicator_char = if m.selection.is_exhausted() { "=" } else { "+" };
    let indicator_style = STYLE_MODELINE.clone().faint(true).padding(0, 1, 0, 1);
    let indicator_styled = indicator_style.render(indicator_char);

    let sep_styled = inner_style.render(" | ");
    let trailing_pad = STYLE_MODELINE.render(" ");

    format!("{indicator_styled}{mode_styled}{sep_styled}{footer_inner}{trailing_pad}")
}

pub fn render_modeline_padded(m: &Model) -> String {
    let total_width = screen_width(m.screen_width);
    let inner_max = total_width.saturating_sub(3);
    let total = if m.suggestions_shown() {
        m.suggestions().count()
    } else {
        0
    };
    let mode = m.mode();
    let modeline = render_modeline(m, inner_max, &mode, total);
    let modeline_single = modeline.replace('\n', " ");
    STYLE_MODELINE
        .clone()
        .width(total_width as i32)
        .render(&modeline_single)
}
