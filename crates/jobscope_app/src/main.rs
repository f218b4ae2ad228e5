mod driver;
mod logging;
mod persistence;
mod render;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use jobscope_client::{ApiSettings, CoordinatorHandle, ReqwestApi, TimeRange};
use jobscope_core::{Msg, SearchState, SortBy};

use driver::Driver;

const SETTLE_DEADLINE: Duration = Duration::from_secs(60);

struct Options {
    /// Seed query string, e.g. `hashtags=python,remote&timeFilter=7d`.
    query: Option<String>,
    base_url: Option<String>,
    sort: Option<SortBy>,
    pages: u32,
    discover: bool,
    summary: bool,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut options = Options {
            query: None,
            base_url: None,
            sort: None,
            pages: 1,
            discover: false,
            summary: false,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--discover" => options.discover = true,
                "--summary" => options.summary = true,
                "--pages" => {
                    let value = args.next().context("--pages needs a number")?;
                    options.pages = value.parse().context("--pages needs a number")?;
                }
                "--sort" => {
                    let value = args.next().context("--sort needs a value")?;
                    options.sort = Some(
                        SortBy::parse(&value)
                            .context("--sort expects recent, relevance or salary")?,
                    );
                }
                "--base-url" => {
                    options.base_url = Some(args.next().context("--base-url needs a value")?);
                }
                other if other.starts_with("--") => bail!("unknown flag {other}"),
                other => options.query = Some(other.to_string()),
            }
        }
        Ok(options)
    }
}

fn main() -> Result<()> {
    logging::initialize(logging::LogDestination::File);
    let options = Options::parse(std::env::args().skip(1))?;

    let session_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    // An explicit query wins; otherwise restore the previous session.
    let (query, sort) = match (&options.query, options.sort) {
        (Some(query), sort) => (query.clone(), sort),
        (None, sort) => match persistence::load_session(&session_dir) {
            Some(session) => (session.query, sort.or(session.sort_by)),
            None => (String::new(), sort),
        },
    };

    let mut settings = ApiSettings::default();
    if let Some(base_url) = &options.base_url {
        settings.base_url = base_url.clone();
    }
    let api = Arc::new(ReqwestApi::new(settings).context("building HTTP client")?);
    let handle = CoordinatorHandle::new(api);
    let mut driver = Driver::new(SearchState::hydrate(&query), handle);

    if let Some(sort) = sort {
        driver.dispatch(Msg::SortChanged(sort));
    }
    driver.dispatch(Msg::SearchSubmitted);
    if options.discover {
        driver.dispatch(Msg::DiscoveryRequested);
    }

    if !driver.pump_until_settled(SETTLE_DEADLINE) {
        bail!("search did not settle within {SETTLE_DEADLINE:?}");
    }

    let view = driver.state().view();
    print!("{}", render::render_results(&view));
    if let Some(error) = &view.error {
        if view.jobs.is_empty() {
            bail!("search failed: {error}");
        }
    }

    let last_page = options
        .pages
        .min(view.total_pages.try_into().unwrap_or(u32::MAX));
    for page in 2..=last_page {
        driver.dispatch(Msg::PageChanged(page));
        if !driver.pump_until_settled(SETTLE_DEADLINE) {
            bail!("page {page} did not settle within {SETTLE_DEADLINE:?}");
        }
        print!("{}", render::render_results(&driver.state().view()));
    }

    if options.summary {
        if let Some(snapshot) = driver.fetch_dashboard(TimeRange::D7, SETTLE_DEADLINE) {
            print!("{}", render::render_dashboard(&snapshot));
        }
    }

    persistence::save_session(
        &session_dir,
        driver.state().url_query(),
        driver.state().sort_by(),
    );
    Ok(())
}
