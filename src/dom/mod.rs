//! Element location and waiting
//!
//! This module carries the pieces every scraper in the crate is built on:
//! - Locator: a (strategy, value) pair identifying DOM elements
//! - DomRoot / DomElement: querying the page or an element subtree
//! - PageActions: navigation and scroll primitives
//! - ElementWaiter: polling with a timeout and ordered selector fallback
//!
//! The live implementations drive a `headless_chrome` tab; tests substitute
//! a fake DOM root with the same traits.

pub mod locator;
pub mod query;
pub mod wait;

#[cfg(test)]
pub(crate) mod fake;

pub use locator::Locator;
pub use query::{DomElement, DomRoot, LiveElement, LivePage, PageActions};
pub use wait::{ElementWaiter, DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT};
