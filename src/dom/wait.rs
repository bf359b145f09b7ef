use crate::dom::locator::Locator;
use crate::dom::query::DomRoot;
use crate::error::Result;
use std::time::{Duration, Instant};

/// Default time to keep polling for an element before giving up
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fixed cadence between DOM polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Polls a search root until elements matching a locator appear, or a
/// timeout elapses.
///
/// A timed-out wait is not an error: the singular form resolves to `None`
/// and the plural form to an empty vec, and callers check for that instead
/// of catching anything. Errors coming out of the waiter are session-level
/// faults from the underlying root and always propagate.
///
/// The result pages this crate targets render asynchronously with no
/// reliable load-completion signal, so time-based polling is the contract
/// here, fragile as it is.
#[derive(Debug, Clone, Copy)]
pub struct ElementWaiter {
    timeout: Duration,
    poll_interval: Duration,
}

impl Default for ElementWaiter {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ElementWaiter {
    /// Waiter with the default timeout and poll cadence
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: override the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder method: override the poll cadence
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// The configured timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Wait for the first element matching `locator` under `root`.
    ///
    /// Returns `Ok(None)` when nothing matched within the timeout.
    pub fn wait_for<R: DomRoot>(&self, root: &R, locator: &Locator) -> Result<Option<R::Element>> {
        let mut found = self.wait_for_all(root, locator)?;
        if found.is_empty() {
            Ok(None)
        } else {
            Ok(Some(found.swap_remove(0)))
        }
    }

    /// Wait for all elements matching `locator` under `root`.
    ///
    /// Returns the full match list from the first poll that finds anything,
    /// or an empty vec when the timeout elapses. The root is always polled
    /// at least once, even with a zero timeout.
    pub fn wait_for_all<R: DomRoot>(&self, root: &R, locator: &Locator) -> Result<Vec<R::Element>> {
        let deadline = Instant::now() + self.timeout;
        loop {
            let found = root.find_all(locator)?;
            if !found.is_empty() {
                return Ok(found);
            }
            if Instant::now() >= deadline {
                log::debug!("timed out waiting for {}", locator);
                return Ok(Vec::new());
            }
            std::thread::sleep(self.poll_interval);
        }
    }

    /// Try an ordered list of locators, returning the first element that
    /// appears.
    ///
    /// Each locator gets a full wait window before the next is tried, so
    /// this is for fallback lists (historical UI variants of the same
    /// logical element), not for racing alternatives.
    pub fn first_match<R: DomRoot>(
        &self,
        root: &R,
        locators: &[Locator],
    ) -> Result<Option<R::Element>> {
        for locator in locators {
            if let Some(element) = self.wait_for(root, locator)? {
                log::debug!("matched {}", locator);
                return Ok(Some(element));
            }
        }
        Ok(None)
    }

    /// Plural form of [`first_match`](Self::first_match): the first locator
    /// in the list that matches anything yields the full match list
    pub fn first_match_all<R: DomRoot>(
        &self,
        root: &R,
        locators: &[Locator],
    ) -> Result<Vec<R::Element>> {
        for locator in locators {
            let found = self.wait_for_all(root, locator)?;
            if !found.is_empty() {
                log::debug!("matched {} ({} elements)", locator, found.len());
                return Ok(found);
            }
        }
        Ok(Vec::new())
    }
}
