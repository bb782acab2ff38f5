//! Shared test utilities: booting pages and poking at their elements.
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let mut page = home(4);
//! type_query(&mut page, "赛事");
//! click(&mut page, SEARCH_BUTTON_ID);
//! assert_eq!(page.window().navigations(), ["search.html?q=%E8%B5%9B%E4%BA%8B"]);
//! ```

use crate::carousel::{ACTIVE_CLASS, DOT_CLASS};
use crate::config::SiteConfig;
use crate::dom::{Event, NodeId};
use crate::location::Location;
use crate::page::{Page, PageLayout};
use crate::search::SEARCH_INPUT_ID;
use crate::types::PageKind;

// =========================================================================
// Booting
// =========================================================================

/// Build `layout`, load it at `href` with stock config and run document-ready.
pub fn boot(layout: PageLayout, href: &str, kind: PageKind) -> Page {
    let mut page = Page::new(layout.build(), Location::parse(href), kind, SiteConfig::default());
    page.ready();
    page
}

/// A content page with a carousel of `slides` (none when zero) and a search box.
pub fn home(slides: usize) -> Page {
    boot(
        PageLayout {
            slides,
            search_box: true,
            results: false,
        },
        "/index.html",
        PageKind::Content,
    )
}

/// The results page loaded at `href`.
pub fn results_page(href: &str) -> Page {
    boot(
        PageLayout {
            slides: 0,
            search_box: true,
            results: true,
        },
        href,
        PageKind::Results,
    )
}

// =========================================================================
// Lookups panic with a clear message on miss.
// =========================================================================

/// Find an element by id. Panics if not found.
pub fn element(page: &Page, id: &str) -> NodeId {
    page.document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("no element #{id} on this page"))
}

pub fn current_slide(page: &Page) -> usize {
    page.carousel()
        .expect("page has no carousel")
        .current_index()
}

/// Indices of the dots currently marked active.
pub fn active_dots(page: &Page) -> Vec<usize> {
    let doc = page.document();
    doc.get_elements_by_class_name(DOT_CLASS)
        .into_iter()
        .enumerate()
        .filter(|(_, dot)| doc.element(*dot).is_some_and(|e| e.has_class(ACTIVE_CLASS)))
        .map(|(i, _)| i)
        .collect()
}

// =========================================================================
// Interaction
// =========================================================================

pub fn type_query(page: &mut Page, text: &str) {
    let input = element(page, SEARCH_INPUT_ID);
    if let Some(el) = page.document_mut().element_mut(input) {
        el.value = text.to_string();
    }
}

pub fn click(page: &mut Page, id: &str) {
    let target = element(page, id);
    page.dispatch(Event::click(target));
}
