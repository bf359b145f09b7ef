//! Search scrapers and their records
//!
//! - [`jobs`]: keyword job search and the home-page job feed
//! - [`people`]: people search returning profile URLs
//! - [`profile`]: profile data records
//! - [`batch`]: per-URL batch scraping with failure records
//! - [`url`]: search URL construction and profile URL normalization

pub mod batch;
pub mod jobs;
pub mod people;
pub mod profile;
pub mod url;

pub use batch::{scrape_each, BatchOutcome};
pub use jobs::{JobPosting, JobSearch, JobSection, UNKNOWN_COMPANY, UNKNOWN_LOCATION};
pub use people::PeopleSearch;
pub use profile::{Accomplishment, Contact, Education, Experience, Interest, PersonProfile};
pub use url::{keyword_search_url, normalize_profile_url};
