use thiserror::Error;

/// Errors surfaced by scraping operations.
///
/// A missing element is not an error: element lookups that time out resolve
/// to `None`/empty results at the [`crate::dom::ElementWaiter`] boundary.
/// `ScraperError` is reserved for session-level faults the caller has to
/// deal with (browser gone, navigation refused, script rejected).
#[derive(Debug, Error)]
pub enum ScraperError {
    /// Failed to launch a Chrome/Chromium instance
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Failed to connect to an existing browser instance
    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    /// Navigation to a URL failed or timed out
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// Tab-level operation failed (create, close, lookup)
    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    /// JavaScript evaluation in the page failed
    #[error("Script evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The driver reported a fault that is not a plain "element not found":
    /// disconnected session, crashed tab, malformed attribute access
    #[error("Browser session fault: {0}")]
    SessionFault(String),

    /// The operation needs an authenticated session and none was detected
    #[error("Not signed in: {0}")]
    NotSignedIn(String),
}

/// Result type alias using [`ScraperError`]
pub type Result<T> = std::result::Result<T, ScraperError>;
