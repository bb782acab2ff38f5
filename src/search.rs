//! Search box and results page wiring.
//!
//! Two entry points share this module:
//!
//! - [`SearchBox`] lives on every page that has `#searchInput` and
//!   `#searchBtn`. Clicking the button (or pressing Enter in the input)
//!   navigates to the results page with the trimmed query in the URL.
//! - [`ResultsPanel`] lives on the results page. It reads the query back from
//!   the URL, runs it against the [`Catalog`] and renders the matches into
//!   `#searchResults`.
//!
//! Both own their listener registrations, so initializing twice replaces the
//! handlers instead of adding a second copy.

use crate::browser::Navigator;
use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::dom::{Document, Element, Event, EventKind, NodeId, Registration};
use crate::location::{Location, results_url};
use crate::render::{RESULT_LINK_CLASS, ResultsView, results_view};
use crate::types::PageEntry;
use tracing::{debug, error, info};

pub const SEARCH_INPUT_ID: &str = "searchInput";
pub const SEARCH_BUTTON_ID: &str = "searchBtn";
pub const RESULTS_ID: &str = "searchResults";
pub const EMPTY_QUERY_ALERT: &str = "请输入搜索关键词";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMessage {
    /// The search button was clicked.
    Submit,
    /// A key was pressed in the search input.
    InputKeyPress,
    /// A click landed somewhere inside the results container.
    ResultClicked,
}

/// What the host should do after a search message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEffect {
    None,
    /// Re-dispatch a click on this element, as `button.click()` would.
    Click(NodeId),
}

/// The query entry point: an input plus a button.
#[derive(Debug)]
pub struct SearchBox {
    input: NodeId,
    button: NodeId,
    results_page: String,
    query_param: String,
    on_click: Registration,
    on_key_press: Registration,
}

impl SearchBox {
    /// Locate the input and button and attach the handlers.
    ///
    /// Returns `None` (and attaches nothing) unless both elements exist.
    pub fn mount<M>(doc: &mut Document<M>, config: &SearchConfig) -> Option<Self>
    where
        M: Clone + From<SearchMessage>,
    {
        let (Some(input), Some(button)) = (
            doc.get_element_by_id(SEARCH_INPUT_ID),
            doc.get_element_by_id(SEARCH_BUTTON_ID),
        ) else {
            debug!("search input or button missing, search box skipped");
            return None;
        };
        let mut search_box = Self {
            input,
            button,
            results_page: config.results_page.clone(),
            query_param: config.query_param.clone(),
            on_click: Registration::new(),
            on_key_press: Registration::new(),
        };
        search_box.attach(doc);
        Some(search_box)
    }

    /// (Re)attach the click and keypress handlers, dropping any previous ones.
    pub fn attach<M>(&mut self, doc: &mut Document<M>)
    where
        M: Clone + From<SearchMessage>,
    {
        self.on_click
            .attach(doc, self.button, EventKind::Click, SearchMessage::Submit.into());
        self.on_key_press.attach(
            doc,
            self.input,
            EventKind::KeyPress,
            SearchMessage::InputKeyPress.into(),
        );
    }

    pub fn input(&self) -> NodeId {
        self.input
    }

    pub fn button(&self) -> NodeId {
        self.button
    }

    /// Read the input and navigate to the results page, or alert on an empty query.
    pub fn submit<M: Clone, N: Navigator>(&self, doc: &Document<M>, nav: &mut N) {
        let query = doc
            .element(self.input)
            .map(|e| e.value.trim())
            .unwrap_or_default();
        if query.is_empty() {
            nav.alert(EMPTY_QUERY_ALERT);
            return;
        }
        nav.navigate(&results_url(&self.results_page, &self.query_param, query));
    }

    pub fn update<M: Clone, N: Navigator>(
        &self,
        message: SearchMessage,
        event: &Event,
        doc: &Document<M>,
        nav: &mut N,
    ) -> SearchEffect {
        match message {
            SearchMessage::Submit => {
                self.submit(doc, nav);
                SearchEffect::None
            }
            SearchMessage::InputKeyPress if event.key.as_deref() == Some("Enter") => {
                SearchEffect::Click(self.button)
            }
            SearchMessage::InputKeyPress | SearchMessage::ResultClicked => SearchEffect::None,
        }
    }
}

/// The results display on the results page.
#[derive(Debug)]
pub struct ResultsPanel {
    container: Option<NodeId>,
    query_param: String,
    on_click: Registration,
    view: Option<ResultsView>,
}

impl ResultsPanel {
    pub fn new<M: Clone>(doc: &Document<M>, config: &SearchConfig) -> Self {
        Self {
            container: doc.get_element_by_id(RESULTS_ID),
            query_param: config.query_param.clone(),
            on_click: Registration::new(),
            view: None,
        }
    }

    /// Load the results page: pre-fill the input, search, render.
    ///
    /// Without a query parameter the zero-results view is rendered.
    pub fn show<M>(&mut self, doc: &mut Document<M>, catalog: &Catalog, location: &Location)
    where
        M: Clone + From<SearchMessage>,
    {
        let query = location.query_param(&self.query_param);
        if let Some(q) = &query {
            if let Some(input) = doc
                .get_element_by_id(SEARCH_INPUT_ID)
                .and_then(|id| doc.element_mut(id))
            {
                input.value = q.clone();
            }
        }
        let results = catalog.search(query.as_deref());
        self.display_results(
            doc,
            &results,
            query.as_deref().unwrap_or_default(),
            location.base_path(),
        );
    }

    /// Render `results` into the container. No-op when the page has none.
    pub fn display_results<M>(
        &mut self,
        doc: &mut Document<M>,
        results: &[&PageEntry],
        query: &str,
        base_path: &str,
    ) where
        M: Clone + From<SearchMessage>,
    {
        let Some(container) = self.container else {
            debug!("no #{RESULTS_ID} on this page, results not rendered");
            return;
        };
        let view = results_view(results, query, base_path);

        let links = view
            .items()
            .iter()
            .map(|item| {
                Element::new()
                    .with_class(RESULT_LINK_CLASS)
                    .with_data("url", &item.target)
            })
            .collect();
        doc.replace_children(container, links);
        if let Some(element) = doc.element_mut(container) {
            element.inner_html = Some(view.to_markup().into_string());
        }
        self.on_click.attach(
            doc,
            container,
            EventKind::Click,
            SearchMessage::ResultClicked.into(),
        );

        let targets: Vec<&str> = view.items().iter().map(|i| i.target.as_str()).collect();
        debug!(count = targets.len(), ?targets, "search results rendered");
        self.view = Some(view);
    }

    /// The last rendered view.
    pub fn view(&self) -> Option<&ResultsView> {
        self.view.as_ref()
    }

    pub fn container(&self) -> Option<NodeId> {
        self.container
    }

    /// Delegated click handler: navigate to the clicked entry's target.
    pub fn handle_click<M: Clone, N: Navigator>(
        &self,
        event: &Event,
        doc: &Document<M>,
        nav: &mut N,
    ) {
        let Some(link) = doc.closest(event.target, RESULT_LINK_CLASS) else {
            return;
        };
        match doc.element(link).and_then(|e| e.dataset.get("url")) {
            Some(url) => {
                info!(url = url.as_str(), "search result clicked");
                nav.navigate(url);
            }
            None => error!("search result link has no data-url"),
        }
    }
}
