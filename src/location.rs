//! Page location: pathname, query string and the links derived from them.

/// The address of the current page, split the way `window.location` does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pathname: String,
    /// Query string including the leading `?`, or empty.
    search: String,
}

impl Location {
    pub fn new(pathname: &str, search: &str) -> Self {
        let search = if search.is_empty() || search.starts_with('?') {
            search.to_string()
        } else {
            format!("?{search}")
        };
        Self {
            pathname: pathname.to_string(),
            search,
        }
    }

    /// Split an href such as `/sub/search.html?q=x#top`. The fragment is dropped.
    pub fn parse(href: &str) -> Self {
        let without_fragment = href.split_once('#').map_or(href, |(head, _)| head);
        match without_fragment.split_once('?') {
            Some((path, query)) => Self::new(path, &format!("?{query}")),
            None => Self::new(without_fragment, ""),
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Directory part of the pathname, up to and including the last `/`.
    ///
    /// - `/sub/dir/search.html` → `/sub/dir/`
    /// - `/search.html` → `/`
    /// - `search.html` → `/`
    pub fn base_path(&self) -> &str {
        match self.pathname.rfind('/') {
            Some(idx) => &self.pathname[..=idx],
            None => "/",
        }
    }

    /// First value of the named query parameter, decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.search.trim_start_matches('?');
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// Link to the results page carrying `query` as its single parameter.
///
/// Both the name and the value are percent-encoded. The value is encoded
/// slightly more strictly than `encodeURIComponent` (`!'()*` are escaped too),
/// which decodes to the same text.
pub fn results_url(results_page: &str, param: &str, query: &str) -> String {
    format!(
        "{results_page}?{}={}",
        urlencoding::encode(param),
        urlencoding::encode(query)
    )
}
