//! # Longboard Site
//!
//! The interactive parts of the longboard static site: an auto-advancing image
//! carousel on the home page and a site search that sends the visitor to a
//! results page.
//!
//! Everything else on the site is static HTML and CSS. The two components are
//! independent: they share no state and only coexist because both mount when
//! the document is ready.
//!
//! # Architecture: Components Over a Small Host Model
//!
//! The components never touch a browser API directly. They talk to three
//! seams, each with an in-process implementation:
//!
//! ```text
//! Carousel ─┐                         ┌─ dom::Document   (elements + listeners)
//!           ├── page::Page (ready,  ──┼─ timer::Timers   (setInterval/clearInterval)
//! Search  ──┘    dispatch, advance)   └─ browser::Navigator (navigate, alert)
//! ```
//!
//! - Listeners store a message value instead of a closure. Dispatch returns
//!   the messages an event reaches and [`page::Page`] routes them to the
//!   owning component's `update`.
//! - Timers run on a virtual clock ([`timer::VirtualTimers`]), one firing at a
//!   time, so autoplay behavior is deterministic and testable.
//! - Navigation and alerts are recorded by [`browser::Window`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Slide index, wraparound, track transform, dots, autoplay timer |
//! | [`catalog`] | The fixed page catalog and case-insensitive substring search |
//! | [`search`] | Search box (query entry) and results panel (display + click navigation) |
//! | [`render`] | Structured results view and its Maud markup |
//! | [`location`] | Pathname/query handling: base path, query parameter, results URL |
//! | [`page`] | Page runtime: document-ready, event dispatch, timer advance |
//! | [`dom`] | Minimal document model with message-carrying listeners |
//! | [`timer`] | `Timers` trait and the virtual-clock scheduler |
//! | [`browser`] | `Navigator` trait and the recording `Window` |
//! | [`config`] | `config.toml` loading, merging and validation |
//! | [`types`] | Shared types (`PageEntry`, `PageKind`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Escaped Rendering
//!
//! The results page echoes the visitor's query, which arrives in the URL.
//! Rendering goes through [Maud](https://maud.lambda.xyz/), which escapes every
//! interpolation, so `search.html?q=<script>…` displays the text instead of
//! running it.
//!
//! ## Explicit Page Roles
//!
//! Whether a page is the results page is decided by whoever boots it
//! ([`types::PageKind`]), not by matching the URL against `search.html`.
//!
//! ## Handlers Are Owned, Not Global
//!
//! Each component keeps a [`dom::Registration`] per listener it attaches.
//! Attaching again first detaches the previous listener, so initializing a
//! page twice never makes one click navigate twice.

pub mod browser;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod dom;
pub mod location;
pub mod output;
pub mod page;
pub mod render;
pub mod search;
pub mod timer;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
