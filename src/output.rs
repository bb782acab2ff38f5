//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.
//!
//! Entities follow the same two-level pattern everywhere: a header line with
//! a 3-digit positional index and the title, then indented context lines.
//!
//! ## Search
//!
//! ```text
//! 找到 1 个与“ultraskate”相关的结果：
//! 001 赛事 → /competition.html
//!     长板行业赛事、短距离比赛、长途拉力赛、Ultraskate、国内赛事等。
//! ```
//!
//! ## Catalog
//!
//! ```text
//! 001 首页
//!     Source: index.html
//!     Description: 长板首页介绍，包括长板定义、图片、玩法概览等。
//! ```
//!
//! ## Carousel
//!
//! ```text
//!     0ms  slide 1/3  translateX(0%)
//!  3000ms  slide 2/3  translateX(-100%)
//! ```

use crate::carousel::track_transform;
use crate::catalog::Catalog;
use crate::render::ResultsView;
use std::time::Duration;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Format search results: heading, then one entry per match with its link.
pub fn format_search_output(view: &ResultsView) -> Vec<String> {
    let mut lines = vec![view.heading()];
    for (i, item) in view.items().iter().enumerate() {
        lines.push(format!("{} {} → {}", format_index(i + 1), item.title, item.target));
        if !item.description.is_empty() {
            lines.push(format!("{}{}", indent(1), truncate_desc(&item.description, 60)));
        }
    }
    lines
}

pub fn print_search_output(view: &ResultsView) {
    for line in format_search_output(view) {
        println!("{}", line);
    }
}

/// Format the catalog in search order.
pub fn format_catalog_output(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, page) in catalog.pages().iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), page.title));
        lines.push(format!("{}Source: {}", indent(1), page.url));
        if !page.description.is_empty() {
            lines.push(format!("{}Description: {}", indent(1), page.description));
        }
    }
    lines.push(String::new());
    lines.push(format!("{} pages", catalog.len()));
    lines
}

pub fn print_catalog_output(catalog: &Catalog) {
    for line in format_catalog_output(catalog) {
        println!("{}", line);
    }
}

/// Format a carousel run: one line per slide shown, with the time it was shown.
pub fn format_carousel_trace(frames: &[(Duration, usize)], slides: usize) -> Vec<String> {
    let width = frames
        .iter()
        .map(|(at, _)| at.as_millis().to_string().len())
        .max()
        .unwrap_or(1);
    frames
        .iter()
        .map(|(at, index)| {
            format!(
                "{:>width$}ms  slide {}/{}  {}",
                at.as_millis(),
                index + 1,
                slides,
                track_transform(*index),
            )
        })
        .collect()
}

pub fn print_carousel_trace(frames: &[(Duration, usize)], slides: usize) {
    for line in format_carousel_trace(frames, slides) {
        println!("{}", line);
    }
}
