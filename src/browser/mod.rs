//! Browser session management
//!
//! A [`SearchSession`] owns one Chrome instance and the tab all scraping
//! runs in. Scrapers borrow a [`crate::dom::LivePage`] view of the tab and
//! never own the session; dropping the session invalidates everything in
//! flight.

pub mod config;
pub mod session;

pub use config::{ConnectionOptions, SessionOptions};
pub use session::SearchSession;
