//! The site's page catalog and substring search over it.
//!
//! The catalog is a fixed, ordered list of [`PageEntry`] values. It is built
//! once (from the stock list or from `config.toml`) and only read afterwards.
//!
//! ## Matching
//!
//! A page matches when its title or its description contains the query,
//! both sides lowercased. There is no tokenization, stemming or scoring:
//! results come back in catalog order.
//!
//! ```text
//! "ULTRASKATE"  →  赛事 (description mentions "Ultraskate")
//! "长板"        →  every page
//! ""            →  nothing
//! ```

use crate::types::PageEntry;

/// The stock catalog shipped with the site.
pub fn default_pages() -> Vec<PageEntry> {
    vec![
        PageEntry::new(
            "index.html",
            "首页",
            "长板首页介绍，包括长板定义、图片、玩法概览等。",
        ),
        PageEntry::new("gaishu.html", "长板概述", "长板的历史、结构、玩法流派等概述。"),
        PageEntry::new(
            "play.html",
            "玩法",
            "长板的各种玩法：代步、速降、舞蹈、平花等。",
        ),
        PageEntry::new(
            "competition.html",
            "赛事",
            "长板行业赛事、短距离比赛、长途拉力赛、Ultraskate、国内赛事等。",
        ),
        PageEntry::new(
            "famous.html",
            "著名人物",
            "黎建鹏、高孝周、Hans Wouters、Lotfi Lamaali等著名长板滑手介绍。",
        ),
        PageEntry::new("me.html", "联系我们", "长板爱好者交流：联系方式、微信、QQ邮箱。"),
    ]
}

/// Read-only list of searchable pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pages: Vec<PageEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(default_pages())
    }
}

impl Catalog {
    pub fn new(pages: Vec<PageEntry>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Every page whose title or description contains `query`, case-insensitively.
    ///
    /// An absent or empty query matches nothing.
    pub fn search(&self, query: Option<&str>) -> Vec<&PageEntry> {
        let query = match query {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return Vec::new(),
        };
        self.pages
            .iter()
            .filter(|page| {
                page.title.to_lowercase().contains(&query)
                    || page.description.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(results: &[&PageEntry]) -> Vec<String> {
        results.iter().map(|p| p.url.clone()).collect()
    }

    #[test]
    fn default_catalog_has_six_pages() {
        assert_eq!(Catalog::default().len(), 6);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let catalog = Catalog::default();
        assert!(catalog.search(Some("")).is_empty());
    }

    #[test]
    fn absent_query_matches_nothing() {
        let catalog = Catalog::default();
        assert!(catalog.search(None).is_empty());
    }

    #[test]
    fn site_keyword_matches_every_page_in_catalog_order() {
        let catalog = Catalog::default();
        let results = catalog.search(Some("长板"));
        assert_eq!(results.len(), 6);
        assert_eq!(
            urls(&results),
            vec![
                "index.html",
                "gaishu.html",
                "play.html",
                "competition.html",
                "famous.html",
                "me.html",
            ]
        );
    }

    #[test]
    fn unknown_token_matches_nothing() {
        let catalog = Catalog::default();
        assert!(catalog.search(Some("nonexistent-token-xyz")).is_empty());
    }

    #[test]
    fn matching_ignores_case() {
        let catalog = Catalog::default();
        let results = catalog.search(Some("ULTRASKATE"));
        assert_eq!(urls(&results), vec!["competition.html"]);
    }

    #[test]
    fn title_only_match() {
        let catalog = Catalog::default();
        let results = catalog.search(Some("著名人物"));
        assert_eq!(urls(&results), vec!["famous.html"]);
    }

    #[test]
    fn substring_inside_a_word_matches() {
        let catalog = Catalog::default();
        let results = catalog.search(Some("wout"));
        assert_eq!(urls(&results), vec!["famous.html"]);
    }

    #[test]
    fn custom_catalog_is_searched() {
        let catalog = Catalog::new(vec![
            PageEntry::new("a.html", "Alpha", "first"),
            PageEntry::new("b.html", "Beta", "second alpha mention"),
        ]);
        let results = catalog.search(Some("alpha"));
        assert_eq!(urls(&results), vec!["a.html", "b.html"]);
    }

    #[test]
    fn empty_catalog_matches_nothing() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.search(Some("长板")).is_empty());
    }
}
