use crate::catalog::Item;
use std::ops::Range;

/// Lazy view over the items whose name contains the query, ASCII case-insensitively.
///
/// Cloning restarts the iteration from the current position, so the same view can be
/// walked several times (count, then render) without recomputing anything up front.
#[derive(Clone, Debug)]
pub struct Suggestions<'a> {
    items: std::slice::Iter<'a, Item>,
    needle: String,
}

impl<'a> Iterator for Suggestions<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<&'a Item> {
        let needle = &self.needle;
        self.items
            .by_ref()
            .find(|it| needle.is_empty() || it.display_name.to_ascii_lowercase().contains(needle.as_str()))
    }
}

pub fn filter_available<'a>(available: &'a [Item], query: &str) -> Suggestions<'a> {
    Suggestions {
        items: available.iter(),
        needle: query.to_ascii_lowercase(),
    }
}

// Byte range of the first case-insensitive occurrence of `query` in `name`.
pub fn match_span(name: &str, query: &str) -> Option<Range<usize>> {
    if query.is_empty() {
        return None;
    }
    let start = name
        .to_ascii_lowercase()
        .find(&query.to_ascii_lowercase())?;
    Some(start..start + query.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn names<'a>(it: impl Iterator<Item = &'a Item>) -> Vec<&'a str> {
        it.map(|i| i.display_name.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let c = Catalog::builtin();
        let all = names(filter_available(c.items(), ""));
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], "Steve Mark");
        assert_eq!(all[5], "Sam Albert");
    }

    #[test]
    fn substring_is_case_insensitive() {
        let c = Catalog::builtin();
        assert_eq!(names(filter_available(c.items(), "TO")), vec!["Tom Giannopoulos", "Tony Williams"]);
        assert_eq!(names(filter_available(c.items(), "ar")), vec!["Steve Mark", "Nick Garner"]);
        assert!(names(filter_available(c.items(), "zzz")).is_empty());
    }

    #[test]
    fn tom_does_not_match_tony() {
        let c = Catalog::builtin();
        let only_tony: Vec<Item> = c
            .items()
            .iter()
            .filter(|it| it.display_name == "Tony Williams")
            .cloned()
            .collect();
        assert_eq!(filter_available(&only_tony, "tom").count(), 0);
    }

    #[test]
    fn view_is_restartable() {
        let c = Catalog::builtin();
        let view = filter_available(c.items(), "a");
        let first = names(view.clone());
        let second = names(view);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn match_span_finds_first_occurrence() {
        assert_eq!(match_span("Nick Garner", "GAR"), Some(5..8));
        assert_eq!(match_span("Nick Garner", ""), None);
        assert_eq!(match_span("Nick Garner", "xyz"), None);
    }
}
