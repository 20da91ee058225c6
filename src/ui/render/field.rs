use crate::ui::model::{DEFAULT_WIDTH, FIELD_BLOCK_LINES, Model};
use crate::ui::render::styles::{
    STYLE_CHIP, STYLE_CHIP_FOCUSED, STYLE_FIELD_BOX, STYLE_PLACEHOLDER, STYLE_TYPED,
};

pub fn render_chips(m: &Model) -> String {
    m.selection
        .selected()
        .iter()
        .enumerate()
        .map(|(i, chip)| {
            let label = format!(" {} × ", chip.item.display_name);
            if m.chip_focus == Some(i) {
                STYLE_CHIP_FOCUSED.render(&label)
            } else {
                STYLE_CHIP.render(&label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_input(m: &Model) -> String {
    if m.text.is_empty() {
        return format!("▏{}", STYLE_PLACEHOLDER.render(m.placeholder()));
    }
    format!("{}▏", STYLE_TYPED.render(&m.text))
}

pub fn render_field_block(m: &Model) -> Vec<String> {
    let chips = render_chips(m);
    let line = if chips.is_empty() {
        render_input(m)
    } else {
        format!("{chips} {}", render_input(m))
    };
    let box_width = if m.screen_width >= 2 {
        m.screen_width - 2
    } else {
        DEFAULT_WIDTH
    };
    let w_i32: i32 = box_width.try_into().unwrap_or(i32::MAX);
    let block = STYLE_FIELD_BOX.clone().width(w_i32).render(&line);
    // grows with wrapped chips, never shorter than FIELD_BLOCK_LINES
    let mut out: Vec<String> = block.lines().map(|s| s.to_string()).collect();
    while out.len() < FIELD_BLOCK_LINES {
        out.push(String::new());
    }
    out
}

pub fn field_block_height(m: &Model) -> usize {
    render_field_block(m).len()
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::ui::Msg;
    use crate::ui::model::{PLACEHOLDER, PLACEHOLDER_EXHAUSTED};
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn empty_field_shows_placeholder() {
        let mut m = crate::ui::initial_model(Catalog::builtin());
        m.update(Msg::WindowSize { width: 80, height: 24 });
        let block = strip_ansi(&m.render_field_block().join("\n"));
        assert!(block.contains(PLACEHOLDER));
    }

    #[test]
    fn chips_and_text_are_rendered() {
        let mut m = crate::ui::initial_model(Catalog::builtin());
        m.update(Msg::WindowSize { width: 80, height: 24 });
        m.update(Msg::TextChanged("Sam Albert".into()));
        m.update(Msg::KeyEnter);
        m.update(Msg::TextChanged("ni".into()));
        let block = strip_ansi(&m.render_field_block().join("\n"));
        assert!(block.contains("Sam Albert ×"));
        assert!(block.contains("ni▏"));
        assert!(!block.contains(PLACEHOLDER));
    }

    #[test]
    fn wrapped_chips_grow_the_box() {
        let (w, h) = (40usize, 24usize);
        let mut m = crate::ui::initial_model(Catalog::builtin());
        m.update(Msg::WindowSize { width: w, height: h });
        for id in 1..=6 {
            m.update(Msg::PickSuggestion(crate::catalog::ItemId(id)));
        }
        assert!(m.selection.is_exhausted());

        let field = m.render_field_block();
        assert!(field.len() > crate::ui::model::FIELD_BLOCK_LINES);
        let block = strip_ansi(&field.join("\n"));
        assert!(block.contains("Sam Albert"), "{block}");
        assert!(block.contains(PLACEHOLDER_EXHAUSTED), "{block}");
        assert!(block.lines().last().unwrap_or("").contains('╰'), "{block}");

        let full = strip_ansi(&m.render_full());
        let lines: Vec<&str> = full.lines().collect();
        assert_eq!(lines.len(), h, "{full}");
        assert!(lines.iter().all(|l| l.chars().count() == w), "{full}");
        assert!(full.contains("Sam Albert"));
    }

    #[test]
    fn exhausted_field_swaps_placeholder() {
        let catalog = Catalog::new(vec![crate::catalog::Item::new(1, "Solo", "", "")]).unwrap();
        let mut m = crate::ui::initial_model(catalog);
        m.update(Msg::WindowSize { width: 60, height: 12 });
        m.update(Msg::PickSuggestion(crate::catalog::ItemId(1)));
        let block = strip_ansi(&m.render_field_block().join("\n"));
        assert!(block.contains(PLACEHOLDER_EXHAUSTED));
    }
}
