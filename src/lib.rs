//! # linkedin-scraper
//!
//! A Rust library for scraping job postings and people-search results from
//! a signed-in LinkedIn session by driving a real Chrome browser via the
//! Chrome DevTools Protocol (CDP).
//!
//! ## Features
//!
//! - **Session Management**: Launch or connect to Chrome/Chromium, reusing
//!   an authenticated profile directory
//! - **Element Waiting**: Poll for asynchronously rendered elements with a
//!   timeout instead of failing on the first missing node
//! - **Selector Fallback**: Ordered lists of historical class-name variants
//!   tried in sequence, with XPath fallbacks behind them
//! - **Scrapers**: Keyword job search, the home-page job feed grouped into
//!   named sections, and people search returning profile URLs
//!
//! ## Scraping a job search
//!
//! ```rust,no_run
//! use linkedin_scraper::{JobSearch, SearchSession, SessionOptions};
//!
//! # fn main() -> linkedin_scraper::Result<()> {
//! // Launch against a profile directory holding a signed-in session
//! let session = SearchSession::launch(
//!     SessionOptions::new().user_data_dir("/home/me/.chrome-linkedin"),
//! )?;
//!
//! let jobs = JobSearch::new(session.page()).search("rust developer")?;
//! for job in &jobs {
//!     println!("{} @ {} ({})", job.title, job.company, job.location);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Scraping a people search
//!
//! ```rust,no_run
//! use linkedin_scraper::{PeopleSearch, SearchSession};
//!
//! # fn main() -> linkedin_scraper::Result<()> {
//! let session = SearchSession::new()?;
//! let profiles = PeopleSearch::new(session.page()).search("George Maksimenko")?;
//! println!("Found {} profiles", profiles.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error model
//!
//! An element that never shows up is not an error: waits resolve to
//! `None`/empty results and scrapers return empty lists. [`ScraperError`]
//! covers session-level faults only (browser gone, navigation refused),
//! which always propagate to the caller. Batch helpers in
//! [`search::batch`] convert per-URL faults into failure records so one
//! bad URL does not abort a batch.
//!
//! ## Module Overview
//!
//! - [`browser`]: Session launch/connect and configuration
//! - [`dom`]: Locators, DOM queries, and the element waiter
//! - [`search`]: Job and people scrapers, profile records, batch helpers
//! - [`error`]: Error types and result alias

pub mod browser;
pub mod dom;
pub mod error;
pub mod search;

pub use browser::{ConnectionOptions, SearchSession, SessionOptions};
pub use dom::{DomElement, DomRoot, ElementWaiter, LiveElement, LivePage, Locator, PageActions};
pub use error::{Result, ScraperError};
pub use search::{
    scrape_each, BatchOutcome, JobPosting, JobSearch, JobSection, PeopleSearch, PersonProfile,
};
