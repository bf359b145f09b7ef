use crate::browser::config::{ConnectionOptions, SessionOptions};
use crate::dom::{ElementWaiter, Locator, LivePage};
use crate::error::{Result, ScraperError};
use headless_chrome::{Browser, Tab};
use std::sync::Arc;
use std::time::Duration;

/// Class name carried by the signed-in avatar in the global navigation bar.
/// Its presence is how a ready, authenticated session is recognized.
pub const SIGNED_IN_AVATAR_CLASS: &str = "global-nav__me-photo";

/// A live, authenticated browser session that all scraping runs against.
///
/// The session owns the Chrome instance and one tab. Exactly one logical
/// operation drives the tab at a time; scrapers borrow a [`LivePage`] view
/// for the duration of a scrape and return plain data.
///
/// Session bootstrap (credentials, cookie handling) is the caller's
/// business: launch against a `user_data_dir` holding a signed-in profile,
/// or connect to a browser that is already signed in.
pub struct SearchSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// The tab scraping operations run in
    tab: Arc<Tab>,
}

impl SearchSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: SessionOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // The default 30s idle timeout would kill long scrapes between
        // navigations
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.sandbox = options.sandbox;

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        let browser =
            Browser::new(launch_opts).map_err(|e| ScraperError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ScraperError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab })
    }

    /// Connect to an existing browser instance via WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        let browser = Browser::connect(options.ws_url)
            .map_err(|e| ScraperError::ConnectionFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ScraperError::ConnectionFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab })
    }

    /// Launch a browser with default options
    pub fn new() -> Result<Self> {
        Self::launch(SessionOptions::default())
    }

    /// The tab this session scrapes in
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Borrow a page view for element queries and navigation
    pub fn page(&self) -> LivePage<'_> {
        LivePage::new(&self.tab)
    }

    /// Navigate the scraping tab to a URL
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| ScraperError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab
            .wait_until_navigated()
            .map_err(|e| ScraperError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Whether the current page shows a signed-in session.
    ///
    /// Looks for the signed-in avatar in the navigation bar within the
    /// default wait window. Any session fault during the check also reads
    /// as "not signed in".
    pub fn is_signed_in(&self) -> bool {
        let page = self.page();
        ElementWaiter::new()
            .wait_for(&page, &Locator::class(SIGNED_IN_AVATAR_CLASS))
            .map(|found| found.is_some())
            .unwrap_or(false)
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close the browser by closing all of its tabs.
    ///
    /// The Browser struct has no public close method in headless_chrome;
    /// the process shuts down when the instance is dropped.
    pub fn close(&self) -> Result<()> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| ScraperError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
            .clone();

        for tab in tabs {
            let _ = tab.close(false); // Ignore errors on individual tab closes
        }
        Ok(())
    }
}
