//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a user `config.toml` only needs the keys it overrides.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [carousel]
//! interval_ms = 3000           # Autoplay period, also used when resuming
//!
//! [search]
//! results_page = "search.html" # Where the search box sends the query
//! query_param = "q"            # Query string parameter carrying the query
//!
//! [[pages]]                    # The search catalog (replaces the stock list)
//! url = "index.html"
//! title = "首页"
//! description = "长板首页介绍，包括长板定义、图片、玩法概览等。"
//! ```
//!
//! ## Partial Configuration
//!
//! ```toml
//! # Only slow down the carousel
//! [carousel]
//! interval_ms = 5000
//! ```
//!
//! Tables merge key by key; arrays (such as `pages`) replace the stock value
//! as a whole. Unknown keys are rejected to catch typos early.

use crate::catalog::default_pages;
use crate::types::PageEntry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Carousel timing.
    pub carousel: CarouselConfig,
    /// Search box and results page settings.
    pub search: SearchConfig,
    /// The searchable catalog, in display order.
    pub pages: Vec<PageEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            search: SearchConfig::default(),
            pages: default_pages(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel.interval_ms must be greater than 0".into(),
            ));
        }
        if self.search.results_page.trim().is_empty() {
            return Err(ConfigError::Validation(
                "search.results_page must not be empty".into(),
            ));
        }
        if self.search.results_page.contains(['?', '#']) {
            return Err(ConfigError::Validation(
                "search.results_page must be a plain path without '?' or '#'".into(),
            ));
        }
        if !is_unreserved_name(&self.search.query_param) {
            return Err(ConfigError::Validation(
                "search.query_param must be non-empty ASCII letters, digits, '-', '.', '_' or '~'"
                    .into(),
            ));
        }
        for (idx, page) in self.pages.iter().enumerate() {
            if page.url.trim().is_empty() || page.title.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "pages[{idx}] needs a non-empty url and title"
                )));
            }
        }
        Ok(())
    }
}

/// Non-empty and made only of URL unreserved characters, so the name reads
/// back unchanged from a query string.
fn is_unreserved_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~'))
}

/// Carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Autoplay period in milliseconds.
    pub interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 3000 }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Search settings shared by the search box and the results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Results page the search box navigates to (relative or absolute).
    pub results_page: String,
    /// Name of the query string parameter carrying the search text.
    pub query_param: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            results_page: "search.html".to_string(),
            query_param: "q".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, on top of the stock defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Longboard Site Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Carousel
# ---------------------------------------------------------------------------
[carousel]
# Autoplay period in milliseconds. Also used when autoplay resumes after the
# pointer leaves the slides and after a dot click.
interval_ms = 3000

# ---------------------------------------------------------------------------
# Search
# ---------------------------------------------------------------------------
[search]
# Page the search box navigates to. Relative paths resolve against the
# directory of the page the search was started from.
results_page = "search.html"

# Query string parameter carrying the search text (search.html?q=...).
query_param = "q"

# ---------------------------------------------------------------------------
# Catalog
# ---------------------------------------------------------------------------
# Every page the search can find, in the order results are listed. `url` is
# relative to the results page's directory. Listing any [[pages]] replaces
# the whole stock catalog.

[[pages]]
url = "index.html"
title = "首页"
description = "长板首页介绍，包括长板定义、图片、玩法概览等。"

[[pages]]
url = "gaishu.html"
title = "长板概述"
description = "长板的历史、结构、玩法流派等概述。"

[[pages]]
url = "play.html"
title = "玩法"
description = "长板的各种玩法：代步、速降、舞蹈、平花等。"

[[pages]]
url = "competition.html"
title = "赛事"
description = "长板行业赛事、短距离比赛、长途拉力赛、Ultraskate、国内赛事等。"

[[pages]]
url = "famous.html"
title = "著名人物"
description = "黎建鹏、高孝周、Hans Wouters、Lotfi Lamaali等著名长板滑手介绍。"

[[pages]]
url = "me.html"
title = "联系我们"
description = "长板爱好者交流：联系方式、微信、QQ邮箱。"
"##
}
