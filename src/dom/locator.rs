use serde::{Deserialize, Serialize};
use std::fmt;

/// A strategy/value pair identifying DOM elements.
///
/// The scrapers mostly locate elements by CSS class name, with CSS selector
/// and XPath variants for the places the page structure forces them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Locator {
    /// Match elements carrying a CSS class (equivalent to the selector `.name`)
    ClassName(String),

    /// Match elements by a full CSS selector
    Css(String),

    /// Match elements by an XPath expression
    XPath(String),

    /// Match elements by tag name (equivalent to the selector `tag`)
    Tag(String),
}

impl Locator {
    /// Shorthand for `Locator::ClassName`
    pub fn class(name: impl Into<String>) -> Self {
        Self::ClassName(name.into())
    }

    /// Shorthand for `Locator::Css`
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Shorthand for `Locator::XPath`
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self::XPath(expr.into())
    }

    /// Shorthand for `Locator::Tag`
    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into())
    }

    /// Render the locator as a CSS selector string.
    ///
    /// Returns `None` for XPath locators, which have no CSS equivalent and
    /// go through the driver's XPath search instead.
    pub fn as_css(&self) -> Option<String> {
        match self {
            Self::ClassName(name) => Some(format!(".{}", name)),
            Self::Css(selector) => Some(selector.clone()),
            Self::Tag(name) => Some(name.clone()),
            Self::XPath(_) => None,
        }
    }

    /// The raw locator value, whatever the strategy
    pub fn value(&self) -> &str {
        match self {
            Self::ClassName(v) | Self::Css(v) | Self::XPath(v) | Self::Tag(v) => v,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassName(v) => write!(f, "class={}", v),
            Self::Css(v) => write!(f, "css={}", v),
            Self::XPath(v) => write!(f, "xpath={}", v),
            Self::Tag(v) => write!(f, "tag={}", v),
        }
    }
}
