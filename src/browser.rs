//! Navigation and user-facing alerts.

use crate::location::Location;
use tracing::{info, warn};

/// The side effects a page can have on the browser.
pub trait Navigator {
    /// Full-page navigation to `url`.
    fn navigate(&mut self, url: &str);
    /// Blocking message box.
    fn alert(&mut self, message: &str);
}

/// The browser window of one loaded page.
///
/// Navigations and alerts are recorded in order instead of performed, so a
/// host (or a test) can observe exactly what the page asked for.
#[derive(Debug, Clone)]
pub struct Window {
    location: Location,
    navigations: Vec<String>,
    alerts: Vec<String>,
}

impl Window {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            navigations: Vec::new(),
            alerts: Vec::new(),
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Navigator for Window {
    fn navigate(&mut self, url: &str) {
        info!(from = self.location.pathname(), to = url, "navigating");
        self.navigations.push(url.to_string());
    }

    fn alert(&mut self, message: &str) {
        warn!(text = message, "alert");
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_navigations_in_order() {
        let mut win = Window::new(Location::parse("/index.html"));
        win.navigate("search.html?q=a");
        win.navigate("/play.html");
        assert_eq!(win.navigations(), ["search.html?q=a", "/play.html"]);
        assert!(win.alerts().is_empty());
    }

    #[test]
    fn records_alerts() {
        let mut win = Window::new(Location::parse("/index.html"));
        win.alert("请输入搜索关键词");
        assert_eq!(win.alerts(), ["请输入搜索关键词"]);
        assert_eq!(win.location().pathname(), "/index.html");
    }
}
