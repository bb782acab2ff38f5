//! Shared types used by the catalog, the config layer and the renderers.

use serde::{Deserialize, Serialize};

/// One searchable page of the site.
///
/// `url` is relative to the directory the results page lives in; links are
/// always built as `base_path + url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageEntry {
    pub url: String,
    pub title: String,
    pub description: String,
}

impl PageEntry {
    pub fn new(url: &str, title: &str, description: &str) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Which role the embedding page plays.
///
/// Chosen by the page that boots the components, never inferred from the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Any ordinary page: carousel (if present) and the search box.
    #[default]
    Content,
    /// The results page: additionally reads the query and renders matches.
    Results,
}
