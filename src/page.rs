//! One loaded page: document, window, timers and the components on it.
//!
//! [`Page::ready`] is the document-ready hook. It mounts whatever the markup
//! supports:
//!
//! | Component | Needs | Page kinds |
//! |-----------|-------|------------|
//! | [`Carousel`] | `#carouselSlides` with at least one slide | all |
//! | [`SearchBox`] | `#searchInput` and `#searchBtn` | all |
//! | [`ResultsPanel`] | the page booted as [`PageKind::Results`] | results |
//!
//! Events come in through [`Page::dispatch`]; time moves through
//! [`Page::advance`]. Both run handlers to completion one at a time, the same
//! cooperative model a browser tab has.

use crate::browser::Window;
use crate::carousel::{self, Carousel, CarouselMessage};
use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::dom::{Document, Element, Event};
use crate::location::Location;
use crate::search::{self, ResultsPanel, SearchBox, SearchEffect, SearchMessage};
use crate::timer::{TimerHandle, VirtualTimers};
use crate::types::PageKind;
use std::time::Duration;

/// Every listener message on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Carousel(CarouselMessage),
    Search(SearchMessage),
}

impl From<CarouselMessage> for Message {
    fn from(message: CarouselMessage) -> Self {
        Self::Carousel(message)
    }
}

impl From<SearchMessage> for Message {
    fn from(message: SearchMessage) -> Self {
        Self::Search(message)
    }
}

/// Which standard elements a page's markup contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageLayout {
    /// Number of slides (and dots). Zero means no carousel markup.
    pub slides: usize,
    pub search_box: bool,
    pub results: bool,
}

impl PageLayout {
    /// Build the document for this layout.
    pub fn build(&self) -> Document<Message> {
        let mut doc = Document::new();
        if self.search_box {
            let header = doc.append(Element::new().with_class("site-header"));
            doc.append_child(header, Element::new().with_id(search::SEARCH_INPUT_ID));
            doc.append_child(header, Element::new().with_id(search::SEARCH_BUTTON_ID));
        }
        if self.slides > 0 {
            let frame = doc.append(Element::new().with_class("carousel"));
            let track = doc.append_child(frame, Element::new().with_id(carousel::SLIDES_ID));
            for _ in 0..self.slides {
                doc.append_child(track, Element::new().with_class("slide"));
            }
            let dots = doc.append_child(frame, Element::new().with_class("dots"));
            for _ in 0..self.slides {
                doc.append_child(dots, Element::new().with_class(carousel::DOT_CLASS));
            }
        }
        if self.results {
            doc.append(Element::new().with_id(search::RESULTS_ID));
        }
        doc
    }
}

pub struct Page {
    document: Document<Message>,
    window: Window,
    timers: VirtualTimers,
    catalog: Catalog,
    config: SiteConfig,
    kind: PageKind,
    carousel: Option<Carousel>,
    search_box: Option<SearchBox>,
    results: Option<ResultsPanel>,
}

impl Page {
    pub fn new(
        document: Document<Message>,
        location: Location,
        kind: PageKind,
        config: SiteConfig,
    ) -> Self {
        Self {
            document,
            window: Window::new(location),
            timers: VirtualTimers::new(),
            catalog: Catalog::new(config.pages.clone()),
            config,
            kind,
            carousel: None,
            search_box: None,
            results: None,
        }
    }

    /// Document-ready: mount every component the markup supports.
    pub fn ready(&mut self) {
        self.init_carousel();
        self.init_search_box();
        if self.kind == PageKind::Results {
            self.init_results();
        }
    }

    fn init_carousel(&mut self) {
        if let Some(old) = self.carousel.take() {
            old.unmount(&mut self.document, &mut self.timers);
        }
        self.carousel = Carousel::mount(
            &mut self.document,
            &mut self.timers,
            self.config.carousel.interval(),
        );
    }

    /// Attach the search box handlers. Safe to call repeatedly.
    pub fn init_search_box(&mut self) {
        if let Some(search_box) = &mut self.search_box {
            search_box.attach(&mut self.document);
            return;
        }
        self.search_box = SearchBox::mount(&mut self.document, &self.config.search);
    }

    fn init_results(&mut self) {
        let panel = self
            .results
            .get_or_insert_with(|| ResultsPanel::new(&self.document, &self.config.search));
        panel.show(&mut self.document, &self.catalog, self.window.location());
    }

    /// Deliver an event to its target and every ancestor it bubbles to.
    pub fn dispatch(&mut self, event: Event) {
        for message in self.document.listeners_for(event.target, event.kind) {
            self.update(message, &event);
        }
    }

    fn update(&mut self, message: Message, event: &Event) {
        match message {
            Message::Carousel(message) => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.update(message, &mut self.document, &mut self.timers);
                }
            }
            Message::Search(SearchMessage::ResultClicked) => {
                if let Some(panel) = &self.results {
                    panel.handle_click(event, &self.document, &mut self.window);
                }
            }
            Message::Search(message) => {
                let effect = match &self.search_box {
                    Some(search_box) => {
                        search_box.update(message, event, &self.document, &mut self.window)
                    }
                    None => SearchEffect::None,
                };
                if let SearchEffect::Click(target) = effect {
                    self.dispatch(Event::click(target));
                }
            }
        }
    }

    /// Let `by` pass, running each due timer callback in turn.
    pub fn advance(&mut self, by: Duration) {
        let deadline = self.timers.now() + by;
        while let Some(handle) = self.timers.fire_next(deadline) {
            self.on_timer(handle);
        }
        self.timers.settle(deadline);
    }

    fn on_timer(&mut self, handle: TimerHandle) {
        if let Some(carousel) = &mut self.carousel {
            if carousel.autoplay_timer() == Some(handle) {
                carousel.update(CarouselMessage::Tick, &mut self.document, &mut self.timers);
            }
        }
    }

    pub fn document(&self) -> &Document<Message> {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document<Message> {
        &mut self.document
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn timers(&self) -> &VirtualTimers {
        &self.timers
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn search_box(&self) -> Option<&SearchBox> {
        self.search_box.as_ref()
    }

    pub fn results(&self) -> Option<&ResultsPanel> {
        self.results.as_ref()
    }

    /// Markup currently rendered into the results container.
    pub fn results_html(&self) -> Option<&str> {
        let container = self.results.as_ref()?.container()?;
        self.document.element(container)?.inner_html.as_deref()
    }
}
