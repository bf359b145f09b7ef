use crate::browser::session::SIGNED_IN_AVATAR_CLASS;
use crate::dom::{DomElement, DomRoot, ElementWaiter, Locator, PageActions};
use crate::error::{Result, ScraperError};
use crate::search::url::keyword_search_url;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default base URL for job searches
pub const DEFAULT_JOBS_BASE_URL: &str = "https://www.linkedin.com/jobs";

/// Placeholder when a card has no readable company element
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Placeholder when a card has no readable location element
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Known class names of the search results container, newest UI variant
/// first. The page has shipped several of these over time and old ones keep
/// turning up, so all are tried in order.
const RESULT_CONTAINER_CLASSES: [&str; 4] = [
    "jobs-search__job-details",
    "scaffold-layout__detail",
    "jobs-search-results-list",
    "jobs-search-two-pane__details",
];

/// Broader XPath fallback when no known container class matches
const RESULT_CONTAINER_XPATH: &str =
    "//div[contains(@class, 'jobs-search__job-details') or contains(@class, 'jobs-details')]";

/// Known class names of individual job cards, tried in order
const JOB_CARD_CLASSES: [&str; 4] = [
    "job-card-list",
    "jobs-search-results__list-item",
    "job-card-container",
    "jobs-search-result-item",
];

/// XPath scan for list items when no card class matches
const JOB_CARD_XPATH: &str = "//li[contains(@class, 'jobs-search-results__list-item')]";

const JOB_TITLE_LINK_CLASS: &str = "job-card-list__title--link";
const COMPANY_CLASS: &str = "artdeco-entity-lockup__subtitle";
const LOCATION_CLASS: &str = "job-card-container__metadata-wrapper";

/// Home-page job feed container
const JOB_FEED_CLASS: &str = "scaffold-finite-scroll__content";

/// One card per named section inside the feed
const SECTION_CARD_CLASS: &str = "artdeco-card";

/// List items inside a feed section
const SECTION_ITEM_CLASS: &str = "jobs-job-board-list__item";

/// How long each known container class is probed before the next is tried
const CONTAINER_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Wait window for the XPath fallbacks
const XPATH_FALLBACK_TIMEOUT: Duration = Duration::from_secs(5);

/// One scraped job posting.
///
/// Immutable once built; carries no identity beyond its fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    /// Link to the posting
    pub url: String,

    /// Job title from the card's title link
    pub title: String,

    /// Company name, or [`UNKNOWN_COMPANY`] when the card carries none
    pub company: String,

    /// Location text, or [`UNKNOWN_LOCATION`] when the card carries none
    pub location: String,
}

/// A named section of the home-page job feed with its postings, in page
/// order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobSection {
    /// The section's heading text, e.g. "Top job picks for you"
    pub title: String,

    /// Postings under that heading, in DOM order
    pub jobs: Vec<JobPosting>,
}

/// Scrapes job postings from keyword searches and the home-page job feed.
///
/// Borrowing the page view keeps the session usable for further scrapes:
///
/// ```rust,no_run
/// use linkedin_scraper::{JobSearch, SearchSession, SessionOptions};
///
/// # fn main() -> linkedin_scraper::Result<()> {
/// let session = SearchSession::launch(SessionOptions::default())?;
/// let jobs = JobSearch::new(session.page()).search("rust developer")?;
/// for job in &jobs {
///     println!("{} @ {} ({})", job.title, job.company, job.location);
/// }
/// # Ok(())
/// # }
/// ```
pub struct JobSearch<P> {
    page: P,
    base_url: String,
    waiter: ElementWaiter,
    probe_waiter: ElementWaiter,
    fallback_waiter: ElementWaiter,

    /// Pause after navigation for lazy content to render. Time-based
    /// because the page exposes no reliable load-completion signal.
    settle_delay: Duration,

    /// Pause after each stabilizing scroll
    scroll_pause: Duration,
}

impl<P> JobSearch<P>
where
    P: DomRoot + PageActions,
    P::Element: DomElement,
{
    pub fn new(page: P) -> Self {
        let waiter = ElementWaiter::new();
        Self {
            page,
            base_url: DEFAULT_JOBS_BASE_URL.to_string(),
            waiter,
            probe_waiter: waiter.with_timeout(CONTAINER_PROBE_TIMEOUT),
            fallback_waiter: waiter.with_timeout(XPATH_FALLBACK_TIMEOUT),
            settle_delay: Duration::from_secs(5),
            scroll_pause: Duration::from_secs(1),
        }
    }

    /// Builder method: override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builder method: use `waiter` for every wait in the scrape, including
    /// the per-class container probes and the XPath fallbacks
    pub fn with_waiter(mut self, waiter: ElementWaiter) -> Self {
        self.waiter = waiter;
        self.probe_waiter = waiter;
        self.fallback_waiter = waiter;
        self
    }

    /// Builder method: override the post-navigation settle delay
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    /// Builder method: override the pause after stabilizing scrolls
    pub fn with_scroll_pause(mut self, scroll_pause: Duration) -> Self {
        self.scroll_pause = scroll_pause;
        self
    }

    /// Run a keyword search and scrape the result cards.
    ///
    /// Returns postings in DOM order, without deduplication. Cards whose
    /// title link cannot be found are skipped with a warning. An empty vec
    /// means the results container or the cards never appeared; only
    /// session-level faults return an error.
    pub fn search(&self, term: &str) -> Result<Vec<JobPosting>> {
        let url = keyword_search_url(&self.base_url, "search", term);
        log::debug!("job search: {}", url);

        self.page.open(&url)?;
        self.page.scroll_to_bottom()?;
        std::thread::sleep(self.settle_delay);

        let container = match self.find_results_container()? {
            Some(container) => container,
            None => {
                log::debug!("no job results container found, returning empty results");
                return Ok(Vec::new());
            }
        };

        // Walk the page once more so lazily rendered cards exist before the
        // card scan
        self.page.scroll_to_bottom()?;
        std::thread::sleep(self.scroll_pause);
        self.page.scroll_to_half()?;
        std::thread::sleep(self.scroll_pause);

        let cards = self.find_job_cards(&container)?;
        let mut jobs = Vec::new();
        for card in &cards {
            if let Some(job) = self.scrape_job_card(card)? {
                jobs.push(job);
            }
        }

        log::debug!("job search yielded {} postings", jobs.len());
        Ok(jobs)
    }

    /// Scrape the signed-in home page's job feed, grouped into named
    /// sections.
    ///
    /// Sections are identified by their heading text; cards without a
    /// recognizable heading are skipped rather than guessed at by position.
    pub fn recommended(&self) -> Result<Vec<JobSection>> {
        self.page.open(&self.base_url)?;
        std::thread::sleep(self.settle_delay);

        if self
            .waiter
            .wait_for(&self.page, &Locator::class(SIGNED_IN_AVATAR_CLASS))?
            .is_none()
        {
            return Err(ScraperError::NotSignedIn(
                "the job feed requires an authenticated session".to_string(),
            ));
        }

        let feed = match self
            .waiter
            .wait_for(&self.page, &Locator::class(JOB_FEED_CLASS))?
        {
            Some(feed) => feed,
            None => {
                log::debug!("job feed container not found");
                return Ok(Vec::new());
            }
        };

        let areas = self
            .waiter
            .wait_for_all(&feed, &Locator::class(SECTION_CARD_CLASS))?;

        let mut sections: IndexMap<String, Vec<JobPosting>> = IndexMap::new();
        for area in &areas {
            let title = match section_heading(area)? {
                Some(title) => title,
                None => {
                    log::debug!("feed card without a heading, skipped");
                    continue;
                }
            };

            let jobs = sections.entry(title).or_default();
            for item in area.find_all(&Locator::class(SECTION_ITEM_CLASS))? {
                if let Some(job) = self.scrape_job_card(&item)? {
                    jobs.push(job);
                }
            }
        }

        Ok(sections
            .into_iter()
            .map(|(title, jobs)| JobSection { title, jobs })
            .collect())
    }

    /// Locate the search results container: known class names in order,
    /// then the broader XPath match
    fn find_results_container(&self) -> Result<Option<P::Element>> {
        let class_locators: Vec<Locator> = RESULT_CONTAINER_CLASSES
            .iter()
            .map(|c| Locator::class(*c))
            .collect();

        if let Some(container) = self.probe_waiter.first_match(&self.page, &class_locators)? {
            return Ok(Some(container));
        }

        log::debug!("no known container class matched, trying XPath fallback");
        self.fallback_waiter
            .wait_for(&self.page, &Locator::xpath(RESULT_CONTAINER_XPATH))
    }

    /// Locate the job cards under the results container: known card classes
    /// in order, then the XPath scan
    fn find_job_cards(&self, container: &P::Element) -> Result<Vec<P::Element>> {
        let card_locators: Vec<Locator> = JOB_CARD_CLASSES
            .iter()
            .map(|c| Locator::class(*c))
            .collect();

        let cards = self.probe_waiter.first_match_all(container, &card_locators)?;
        if !cards.is_empty() {
            return Ok(cards);
        }

        log::debug!("no known card class matched, scanning by XPath");
        self.fallback_waiter
            .wait_for_all(container, &Locator::xpath(JOB_CARD_XPATH))
    }

    /// Extract one posting from a card.
    ///
    /// The title link is required: without it the card is skipped
    /// (`Ok(None)`). Company and location are best-effort with placeholder
    /// substitutes.
    fn scrape_job_card(&self, card: &P::Element) -> Result<Option<JobPosting>> {
        let title_link = match self
            .waiter
            .wait_for(card, &Locator::class(JOB_TITLE_LINK_CLASS))?
        {
            Some(link) => link,
            None => {
                log::warn!("job card skipped: title link not found");
                return Ok(None);
            }
        };

        let title = title_link.text()?.trim().to_string();
        let url = title_link.attribute("href")?.unwrap_or_default();

        let company = first_text(card, COMPANY_CLASS)?
            .unwrap_or_else(|| UNKNOWN_COMPANY.to_string());
        let location = first_text(card, LOCATION_CLASS)?
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());

        Ok(Some(JobPosting {
            url,
            title,
            company,
            location,
        }))
    }
}

/// Text of the first element with `class_name` under `root`, without
/// waiting
fn first_text<E: DomElement>(root: &E, class_name: &str) -> Result<Option<String>> {
    let found = root.find_all(&Locator::class(class_name))?;
    match found.first() {
        Some(element) => Ok(Some(element.text()?.trim().to_string())),
        None => Ok(None),
    }
}

/// Heading text of a feed section card: the first non-empty h2
fn section_heading<E: DomElement>(area: &E) -> Result<Option<String>> {
    for heading in area.find_all(&Locator::tag("h2"))? {
        let text = heading.text()?.trim().to_string();
        if !text.is_empty() {
            return Ok(Some(text));
        }
    }
    Ok(None)
}
