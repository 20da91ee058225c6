use crate::ui::model::Model;

pub fn render_full(m: &Model) -> String {
    let mut lines = m.render_field_block();
    // on a very short screen keep the bottom of the box, where the input sits
    let room = m.screen_height.saturating_sub(1);
    if m.screen_height > 0 && lines.len() > room {
        lines.drain(..lines.len() - room);
    }
    lines.extend(m.render_main_content().lines().map(str::to_string));
    let first_line = crate::ui::render::modeline::render_modeline_padded(m)
        .lines()
        .next()
        .unwrap_or("")
        .to_string();
    lines.push(first_line);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, Item};
    use crate::ui::Msg;
    use regex::Regex;

    // helper to strip ANSI CSI sequences from rendered output for assertions
    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    fn many_items(n: u64) -> Catalog {
        let items = (1..=n)
            .map(|i| Item::new(i, format!("user{i}"), format!("user{i}@example.com"), ""))
            .collect();
        Catalog::new(items).unwrap()
    }

    #[test]
    fn render_full_matches_dimensions() {
        let sizes = [(80usize, 24usize), (100usize, 10usize), (40usize, 20usize)];

        for (w, h) in sizes.iter().cloned() {
            let mut m = crate::ui::initial_model(many_items(50));
            m.update(Msg::WindowSize { width: w, height: h });
            m.update(Msg::FieldActivated);

            let out = m.render_full();
            let stripped = strip_ansi(&out);

            let lines: Vec<&str> = stripped.lines().collect();
            assert_eq!(
                lines.len(),
                h,
                "height mismatch for {}x{}: got {} lines\n<<output>>\n{}",
                w,
                h,
                lines.len(),
                stripped
            );

            for (idx, line) in lines.iter().enumerate() {
                let lw = line.chars().count();
                assert_eq!(
                    lw, w,
                    "width mismatch at line {idx} for {w}x{h}: got {lw} chars\nline: `{line}`\n<<output>>\n{stripped}"
                );
            }
        }
    }

    #[test]
    fn modeline_is_last_line() {
        let (w, h) = (80usize, 24usize);
        let mut m = crate::ui::initial_model(Catalog::builtin());
        m.update(Msg::WindowSize { width: w, height: h });
        let stripped = strip_ansi(&m.render_full());
        let lines: Vec<&str> = stripped.lines().collect();
        let last = *lines.last().unwrap();
        let modeline = strip_ansi(&crate::ui::render_modeline_padded(&m));
        assert_eq!(last, modeline.lines().next().unwrap_or(""));
    }

    #[test]
    fn field_block_is_first_and_list_follows() {
        let (w, h) = (80usize, 24usize);
        let mut m = crate::ui::initial_model(Catalog::builtin());
        m.update(Msg::WindowSize { width: w, height: h });
        m.update(Msg::TextChanged("to".into()));
        let stripped = strip_ansi(&m.render_full());
        let lines: Vec<&str> = stripped.lines().collect();
        let field = strip_ansi(&m.render_field_block().join("\n"));
        for (i, fl) in field.lines().enumerate() {
            assert_eq!(lines[i], fl, "field line {i} mismatch:\n{stripped}");
        }
        assert!(lines[3].contains("Tom Giannopoulos"));
        assert!(lines[4].contains("Tony Williams"));
    }
}
