use clap::{Parser, Subcommand};
use longboard_site::catalog::Catalog;
use longboard_site::location::Location;
use longboard_site::page::{Page, PageLayout};
use longboard_site::types::PageKind;
use longboard_site::{config, output, render};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "longboard-site")]
#[command(about = "Carousel and site search for the longboard static site")]
#[command(long_about = "\
Carousel and site search for the longboard static site

The site's pages embed two components: an auto-advancing image carousel
and a search box that sends the query to the results page. This tool runs
the same components outside the browser to inspect the catalog, try queries
and preview what the results page renders.

Configuration is read from config.toml in --config-dir (all keys optional).
Run 'longboard-site gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Log navigations and component wiring
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalog and list matching pages
    Search {
        /// Search text (matched case-insensitively against titles and descriptions)
        query: String,
        /// Path of the results page; links resolve against its directory
        #[arg(long, default_value = "/search.html")]
        path: String,
        /// Print the results view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load a results page URL and print the markup it renders
    Render {
        /// Results page URL, e.g. "/sub/search.html?q=长板"
        url: String,
    },
    /// List the search catalog
    Catalog,
    /// Run carousel autoplay on a virtual clock and print each transition
    Carousel {
        /// Number of slides
        #[arg(long, default_value_t = 5)]
        slides: usize,
        /// How long to let autoplay run, in milliseconds
        #[arg(long, default_value_t = 15_000)]
        duration_ms: u64,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

/// Upper bound on autoplay transitions the `carousel` command will trace.
const MAX_CAROUSEL_STEPS: u64 = 10_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Search { query, path, json } => {
            let site_config = config::load_config(&cli.config_dir)?;
            let catalog = Catalog::new(site_config.pages);
            let location = Location::parse(&path);
            let results = catalog.search(Some(query.as_str()));
            let view = render::results_view(&results, &query, location.base_path());
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                output::print_search_output(&view);
            }
        }
        Command::Render { url } => {
            let site_config = config::load_config(&cli.config_dir)?;
            let layout = PageLayout {
                slides: 0,
                search_box: true,
                results: true,
            };
            let mut page = Page::new(
                layout.build(),
                Location::parse(&url),
                PageKind::Results,
                site_config,
            );
            page.ready();
            println!("{}", page.results_html().unwrap_or_default());
        }
        Command::Catalog => {
            let site_config = config::load_config(&cli.config_dir)?;
            output::print_catalog_output(&Catalog::new(site_config.pages));
        }
        Command::Carousel {
            slides,
            duration_ms,
        } => {
            if slides == 0 {
                return Err("--slides must be at least 1".into());
            }
            let site_config = config::load_config(&cli.config_dir)?;
            let steps = duration_ms / site_config.carousel.interval_ms;
            if steps > MAX_CAROUSEL_STEPS {
                return Err(format!(
                    "--duration-ms spans {steps} autoplay steps (max {MAX_CAROUSEL_STEPS})"
                )
                .into());
            }
            let frames = run_carousel(site_config, slides, Duration::from_millis(duration_ms));
            output::print_carousel_trace(&frames, slides);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "longboard_site=info"
    } else {
        "longboard_site=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Mount a carousel on an otherwise empty page and record every slide change.
fn run_carousel(
    site_config: config::SiteConfig,
    slides: usize,
    duration: Duration,
) -> Vec<(Duration, usize)> {
    let interval = site_config.carousel.interval();
    let layout = PageLayout {
        slides,
        search_box: false,
        results: false,
    };
    let mut page = Page::new(
        layout.build(),
        Location::parse("/index.html"),
        PageKind::Content,
        site_config,
    );
    page.ready();

    let mut frames = Vec::new();
    let Some(start) = page.carousel().map(|c| c.current_index()) else {
        return frames;
    };
    frames.push((page.timers().now(), start));
    let end = page.timers().now() + duration;
    while page.timers().now() + interval <= end {
        page.advance(interval);
        if let Some(carousel) = page.carousel() {
            frames.push((page.timers().now(), carousel.current_index()));
        }
    }
    frames
}
