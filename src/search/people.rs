use crate::dom::{DomElement, DomRoot, ElementWaiter, Locator, PageActions};
use crate::error::Result;
use crate::search::url::{keyword_search_url, normalize_profile_url};
use std::time::Duration;

/// Default base URL for people searches
pub const DEFAULT_PEOPLE_BASE_URL: &str = "https://www.linkedin.com";

/// Class name of the people search results container
const RESULTS_CONTAINER_CLASS: &str = "search-marvel-srp";

/// The first result list inside the container
const RESULTS_LIST_SELECTOR: &str = ".search-marvel-srp>div>div>div>ul:first-of-type";

/// Anchor holding the profile link inside one result card
const PROFILE_LINK_SELECTOR: &str = ".mb1 a";

/// Fractions of the container's scroll height visited to trigger
/// incremental lazy loading
const SCROLL_STOPS: [f64; 3] = [0.3, 0.6, 1.0];

/// Scrapes profile URLs from people search results.
///
/// The results list renders incrementally as its container is scrolled, so
/// the scraper walks the container to fixed percentage offsets with settle
/// pauses in between before reading the cards. Blunt, but the page offers
/// no load-completion signal to listen for.
pub struct PeopleSearch<P> {
    page: P,
    base_url: String,
    waiter: ElementWaiter,

    /// Pause after navigation and after each scroll stop
    settle_delay: Duration,
}

impl<P> PeopleSearch<P>
where
    P: DomRoot + PageActions,
    P::Element: DomElement,
{
    pub fn new(page: P) -> Self {
        Self {
            page,
            base_url: DEFAULT_PEOPLE_BASE_URL.to_string(),
            waiter: ElementWaiter::new(),
            settle_delay: Duration::from_secs(5),
        }
    }

    /// Builder method: override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builder method: override the waiter used for all element waits
    pub fn with_waiter(mut self, waiter: ElementWaiter) -> Self {
        self.waiter = waiter;
        self
    }

    /// Builder method: override the settle delay
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    /// Run a people search and collect profile URLs.
    ///
    /// URLs come back in DOM order, query parameters stripped, without
    /// deduplication. Cards without a profile anchor are skipped. An empty
    /// vec means the results never rendered; errors are session faults
    /// only.
    pub fn search(&self, term: &str) -> Result<Vec<String>> {
        let url = keyword_search_url(&self.base_url, "search/results/people/", term);
        log::debug!("people search: {}", url);

        self.page.open(&url)?;
        self.page.scroll_to_bottom()?;
        std::thread::sleep(self.settle_delay);

        if self
            .waiter
            .wait_for(&self.page, &Locator::class(RESULTS_CONTAINER_CLASS))?
            .is_none()
        {
            log::debug!("people results container not found, returning empty results");
            return Ok(Vec::new());
        }

        for stop in SCROLL_STOPS {
            self.page
                .scroll_element_to_percent(RESULTS_CONTAINER_CLASS, stop)?;
            std::thread::sleep(self.settle_delay);
        }

        let list = match self
            .waiter
            .wait_for(&self.page, &Locator::css(RESULTS_LIST_SELECTOR))?
        {
            Some(list) => list,
            None => {
                log::debug!("people result list not found, returning empty results");
                return Ok(Vec::new());
            }
        };

        let cards = list.find_all(&Locator::tag("li"))?;
        log::debug!("found {} people cards", cards.len());

        let mut profiles = Vec::new();
        for card in &cards {
            if let Some(profile_url) = self.scrape_people_card(card)? {
                profiles.push(profile_url);
            }
        }

        log::debug!("collected {} profile links", profiles.len());
        Ok(profiles)
    }

    /// Profile URL from one result card, `None` when the card has no
    /// profile anchor
    fn scrape_people_card(&self, card: &P::Element) -> Result<Option<String>> {
        let link = match self
            .waiter
            .wait_for(card, &Locator::css(PROFILE_LINK_SELECTOR))?
        {
            Some(link) => link,
            None => {
                log::debug!("people card without a profile link, skipped");
                return Ok(None);
            }
        };

        match link.attribute("href")? {
            Some(href) => Ok(Some(normalize_profile_url(&href))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakeElement, FakePage};

    fn quick_scraper(page: &FakePage) -> PeopleSearch<&FakePage> {
        let waiter = ElementWaiter::new()
            .with_timeout(Duration::from_millis(40))
            .with_poll_interval(Duration::from_millis(5));
        PeopleSearch::new(page)
            .with_waiter(waiter)
            .with_settle_delay(Duration::ZERO)
    }

    fn people_card(href: &str) -> FakeElement {
        FakeElement::new(&["li"])
            .with_child(FakeElement::new(&[PROFILE_LINK_SELECTOR]).with_attr("href", href))
    }

    fn results_page(cards: Vec<FakeElement>) -> FakePage {
        let mut list = FakeElement::new(&[RESULTS_LIST_SELECTOR]);
        for card in cards {
            list = list.with_child(card);
        }
        let container = FakeElement::new(&[RESULTS_CONTAINER_CLASS]).with_child(list);
        FakePage::new(FakeElement::new(&["root"]).with_child(container))
    }

    #[test]
    fn test_search_url_shape() {
        let page = results_page(vec![]);
        let scraper = quick_scraper(&page);

        scraper.search("George Maksimenko").unwrap();

        let navigations = page.navigations.borrow();
        assert_eq!(
            navigations[0],
            "https://www.linkedin.com/search/results/people/?keywords=George%20Maksimenko&refresh=true"
        );
    }

    #[test]
    fn test_scrolls_container_to_percentage_stops() {
        let page = results_page(vec![]);
        let scraper = quick_scraper(&page);

        scraper.search("x").unwrap();

        let scrolls = page.scrolls.borrow();
        assert_eq!(
            *scrolls,
            vec![
                "bottom".to_string(),
                "search-marvel-srp@0.3".to_string(),
                "search-marvel-srp@0.6".to_string(),
                "search-marvel-srp@1".to_string(),
            ]
        );
    }

    #[test]
    fn test_profile_urls_are_normalized_and_ordered() {
        let page = results_page(vec![
            people_card("https://x/in/abc?trk=foo"),
            people_card("https://x/in/def"),
            people_card("https://x/in/ghi?miniProfileUrn=urn%3Ali"),
        ]);
        let scraper = quick_scraper(&page);

        let profiles = scraper.search("x").unwrap();

        assert_eq!(
            profiles,
            vec![
                "https://x/in/abc".to_string(),
                "https://x/in/def".to_string(),
                "https://x/in/ghi".to_string(),
            ]
        );
    }

    #[test]
    fn test_cards_without_anchor_are_skipped() {
        let page = results_page(vec![
            people_card("https://x/in/abc"),
            FakeElement::new(&["li"]).with_text("promoted content"),
            people_card("https://x/in/def"),
        ]);
        let scraper = quick_scraper(&page);

        let profiles = scraper.search("x").unwrap();
        assert_eq!(
            profiles,
            vec!["https://x/in/abc".to_string(), "https://x/in/def".to_string()]
        );
    }

    #[test]
    fn test_missing_container_returns_empty() {
        let page = FakePage::new(FakeElement::new(&["root"]));
        let scraper = quick_scraper(&page);

        let profiles = scraper.search("x").unwrap();
        assert!(profiles.is_empty());
        // No container, no percent scrolling
        assert_eq!(*page.scrolls.borrow(), vec!["bottom".to_string()]);
    }

    #[test]
    fn test_missing_list_returns_empty() {
        let container = FakeElement::new(&[RESULTS_CONTAINER_CLASS]).with_text("no list");
        let page = FakePage::new(FakeElement::new(&["root"]).with_child(container));
        let scraper = quick_scraper(&page);

        let profiles = scraper.search("x").unwrap();
        assert!(profiles.is_empty());
    }

    #[test]
    fn test_duplicate_profiles_are_kept() {
        let page = results_page(vec![
            people_card("https://x/in/abc?trk=a"),
            people_card("https://x/in/abc?trk=b"),
        ]);
        let scraper = quick_scraper(&page);

        let profiles = scraper.search("x").unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0], profiles[1]);
    }
}
