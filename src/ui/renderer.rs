//! Plain-text rendering of a [`FinderViewModel`].
//!
//! # Layout
//!
//! ```text
//! == Red Shoes ==
//! [filtered] 3 of 30 matches
//!   * boot-1  Red leather boot
//!     boot-2  Red suede boot
//! (load more)
//! ```

use super::viewmodel::{CardInfo, FinderViewModel, ViewMode};
use std::fmt::Write;

/// Renders the view model with the default card and browse formatting.
#[must_use]
pub fn render_to_string(vm: &FinderViewModel) -> String {
    render_with(vm, &default_card, &default_browse)
}

/// Renders the view model, formatting each filtered card with `card` and the
/// unfiltered view with `browse`.
///
/// Both callbacks return their text without a trailing newline.
#[must_use]
pub fn render_with(
    vm: &FinderViewModel,
    card: &dyn Fn(&CardInfo) -> String,
    browse: &dyn Fn(&FinderViewModel) -> String,
) -> String {
    let mut out = String::new();

    let heading = if vm.page_heading.is_empty() {
        "(no heading)"
    } else {
        vm.page_heading.as_str()
    };
    let _ = writeln!(out, "== {heading} ==");

    match vm.mode {
        ViewMode::Browse => {
            let _ = writeln!(out, "{}", browse(vm));
        }
        ViewMode::Filtered => {
            let _ = writeln!(
                out,
                "[filtered] {} of {} matches",
                vm.cards.len(),
                vm.total_matches
            );
            for info in &vm.cards {
                let _ = writeln!(out, "{}", card(info));
            }
            if vm.has_more {
                out.push_str("(load more)\n");
            }
        }
    }

    out
}

/// `  * id  title`, starred when favorite.
#[must_use]
pub fn default_card(card: &CardInfo) -> String {
    let marker = if card.favorite { '*' } else { ' ' };
    format!("  {marker} {}  {}", card.id, card.title)
}

#[must_use]
pub fn default_browse(vm: &FinderViewModel) -> String {
    format!("[browse] {} items", vm.total_matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_filtered_view_with_load_more() {
        let vm = FinderViewModel {
            page_heading: "Red".to_string(),
            mode: ViewMode::Filtered,
            cards: vec![CardInfo {
                id: "1".to_string(),
                title: "Boot".to_string(),
                favorite: true,
            }],
            total_matches: 2,
            has_more: true,
        };
        assert_eq!(
            render_to_string(&vm),
            "== Red ==\n[filtered] 1 of 2 matches\n  * 1  Boot\n(load more)\n"
        );
    }

    #[test]
    fn browse_mode_hides_cards() {
        let vm = FinderViewModel {
            page_heading: String::new(),
            mode: ViewMode::Browse,
            cards: vec![],
            total_matches: 5,
            has_more: false,
        };
        assert_eq!(render_to_string(&vm), "== (no heading) ==\n[browse] 5 items\n");
    }

    #[test]
    fn caller_supplies_card_and_browse_formatting() {
        let mut vm = FinderViewModel {
            page_heading: "Red".to_string(),
            mode: ViewMode::Filtered,
            cards: vec![CardInfo {
                id: "1".to_string(),
                title: "Boot".to_string(),
                favorite: false,
            }],
            total_matches: 1,
            has_more: false,
        };
        let card = |c: &CardInfo| format!("- {}", c.title.to_uppercase());
        let browse = |_: &FinderViewModel| "all products".to_string();

        assert_eq!(
            render_with(&vm, &card, &browse),
            "== Red ==\n[filtered] 1 of 1 matches\n- BOOT\n"
        );

        vm.mode = ViewMode::Browse;
        assert_eq!(render_with(&vm, &card, &browse), "== Red ==\nall products\n");
    }
}
