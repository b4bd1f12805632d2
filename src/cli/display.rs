//! Colored terminal rendering of a page bar
//!
//! Styles the bar for interactive terminals: the current page is bold cyan,
//! gap markers are dimmed. Plain [`PageSet::render`] output stays untouched
//! for piping.

use colored::Colorize;

use crate::page::render::{BarToken, GAP_TOKEN};
use crate::page::window::PageSet;

/// Render a page set with terminal styling.
///
/// Token order and spacing are identical to [`PageSet::render`]; only ANSI
/// styling differs, and `colored`'s global override (`NO_COLOR`, or
/// `--no-color` on the CLI) disables it entirely.
#[must_use]
pub fn render_colored(set: &PageSet) -> String {
    let rendered: Vec<String> = set
        .tokens()
        .iter()
        .map(|token| match token {
            BarToken::Page(page) if *page == set.current_page() => {
                page.to_string().bold().cyan().to_string()
            }
            BarToken::Page(page) => page.to_string(),
            BarToken::Gap => GAP_TOKEN.dimmed().to_string(),
        })
        .collect();

    rendered.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::params::PageParams;

    fn make_set(current_page: i64, total_pages: i64, boundaries: i64, around: i64) -> PageSet {
        let params = PageParams::new(current_page, total_pages, boundaries, around).unwrap();
        PageSet::compute(&params)
    }

    #[test]
    fn test_colored_output_matches_plain_when_styling_disabled() {
        colored::control::set_override(false);
        let set = make_set(2, 10, 3, 1);
        assert_eq!(render_colored(&set), set.render());
        colored::control::unset_override();
    }

    #[test]
    fn test_colored_output_contains_every_page() {
        let set = make_set(2, 10, 3, 1);
        let styled = render_colored(&set);
        for page in set.pages() {
            assert!(styled.contains(&page.to_string()));
        }
    }
}
