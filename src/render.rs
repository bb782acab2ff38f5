//! Search results rendering.
//!
//! Rendering happens in two steps so matching and presentation can be tested
//! apart:
//!
//! 1. [`results_view`] turns a result set into a [`ResultsView`], a plain value
//!    describing what the page should show (links already resolved against
//!    the base path).
//! 2. [`ResultsView::to_markup`] renders that value with Maud.
//!
//! The query is user input taken from the URL. Maud escapes every
//! interpolation, so a crafted `?q=<script>…` shows up as text.
//!
//! Result titles are not `<a href>` links. Each entry is a
//! `span.search-result-link` carrying its target in `data-url`; a single
//! delegated click handler on the container performs the navigation.

use crate::types::PageEntry;
use maud::{Markup, html};
use serde::Serialize;

pub const RESULT_LINK_CLASS: &str = "search-result-link";

/// One rendered result entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub title: String,
    pub description: String,
    /// Absolute link: base path + catalog url.
    pub target: String,
}

/// What the results container should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsView {
    Empty { query: String },
    Found { query: String, items: Vec<ResultItem> },
}

/// Build the view for `results`, resolving every link against `base_path`.
pub fn results_view(results: &[&PageEntry], query: &str, base_path: &str) -> ResultsView {
    if results.is_empty() {
        return ResultsView::Empty {
            query: query.to_string(),
        };
    }
    ResultsView::Found {
        query: query.to_string(),
        items: results
            .iter()
            .map(|page| ResultItem {
                title: page.title.clone(),
                description: page.description.clone(),
                target: format!("{base_path}{}", page.url),
            })
            .collect(),
    }
}

impl ResultsView {
    pub fn query(&self) -> &str {
        match self {
            Self::Empty { query } | Self::Found { query, .. } => query,
        }
    }

    pub fn items(&self) -> &[ResultItem] {
        match self {
            Self::Empty { .. } => &[],
            Self::Found { items, .. } => items,
        }
    }

    /// Heading line shown above the list.
    pub fn heading(&self) -> String {
        match self {
            Self::Empty { query } => format!("没有找到与“{query}”相关的内容。"),
            Self::Found { query, items } => {
                format!("找到 {} 个与“{query}”相关的结果：", items.len())
            }
        }
    }

    pub fn to_markup(&self) -> Markup {
        html! {
            h2 { (self.heading()) }
            @let items = self.items();
            @if !items.is_empty() {
                ul {
                    @for item in items {
                        li {
                            span.search-result-link data-url=(item.target) { (item.title) }
                            br;
                            small { (item.description) }
                        }
                    }
                }
            }
        }
    }
}
