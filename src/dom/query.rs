use crate::dom::locator::Locator;
use crate::error::{Result, ScraperError};
use headless_chrome::browser::tab::NoElementFound;
use headless_chrome::Tab;

/// Anything elements can be searched under: the full page or an element
/// subtree.
///
/// Zero matches is an expected outcome and reported as `Ok` with an empty
/// vec; `Err` is reserved for session-level faults (driver disconnected,
/// tab crashed) which callers must not swallow.
pub trait DomRoot {
    type Element;

    /// Find all elements matching the locator under this root, in DOM order
    fn find_all(&self, locator: &Locator) -> Result<Vec<Self::Element>>;
}

/// A located element: attribute and text access plus scoped searching
pub trait DomElement: DomRoot<Element = Self> + Sized {
    /// Read an attribute value, `None` when the attribute is not present
    fn attribute(&self, name: &str) -> Result<Option<String>>;

    /// The rendered text content of the element
    fn text(&self) -> Result<String>;
}

/// Navigation and scrolling primitives of a page.
///
/// Kept separate from [`DomRoot`] so scrapers can be driven against a fake
/// page in tests while the live implementation forwards to the browser tab.
pub trait PageActions {
    /// Load a URL and block until navigation completes
    fn open(&self, url: &str) -> Result<()>;

    /// Scroll the window to the bottom of the document
    fn scroll_to_bottom(&self) -> Result<()>;

    /// Scroll the window to half the document height
    fn scroll_to_half(&self) -> Result<()>;

    /// Scroll the first element with `class_name` to a fraction of its own
    /// scroll height (`percent` in `0.0..=1.0`), triggering lazy loading
    fn scroll_element_to_percent(&self, class_name: &str, percent: f64) -> Result<()>;
}

impl<'r, R: DomRoot + ?Sized> DomRoot for &'r R {
    type Element = R::Element;

    fn find_all(&self, locator: &Locator) -> Result<Vec<Self::Element>> {
        (**self).find_all(locator)
    }
}

impl<'p, P: PageActions + ?Sized> PageActions for &'p P {
    fn open(&self, url: &str) -> Result<()> {
        (**self).open(url)
    }

    fn scroll_to_bottom(&self) -> Result<()> {
        (**self).scroll_to_bottom()
    }

    fn scroll_to_half(&self) -> Result<()> {
        (**self).scroll_to_half()
    }

    fn scroll_element_to_percent(&self, class_name: &str, percent: f64) -> Result<()> {
        (**self).scroll_element_to_percent(class_name, percent)
    }
}

/// Borrowed view of the session's tab implementing [`DomRoot`] and
/// [`PageActions`] over the live browser
#[derive(Clone, Copy)]
pub struct LivePage<'a> {
    tab: &'a Tab,
}

impl<'a> LivePage<'a> {
    pub(crate) fn new(tab: &'a Tab) -> Self {
        Self { tab }
    }

    fn evaluate(&self, expression: &str) -> Result<()> {
        self.tab
            .evaluate(expression, false)
            .map_err(|e| ScraperError::EvaluationFailed(e.to_string()))?;
        Ok(())
    }
}

/// A live element handle tied to the tab it was found in
pub struct LiveElement<'a> {
    inner: headless_chrome::Element<'a>,
}

impl<'a> LiveElement<'a> {
    fn new(inner: headless_chrome::Element<'a>) -> Self {
        Self { inner }
    }
}

/// Convert a driver lookup result into the two-tier error model:
/// "no element found" becomes an empty result, anything else is a fault
fn collect_found<'a>(
    found: anyhow::Result<Vec<headless_chrome::Element<'a>>>,
    locator: &Locator,
) -> Result<Vec<LiveElement<'a>>> {
    match found {
        Ok(elements) => Ok(elements.into_iter().map(LiveElement::new).collect()),
        Err(err) if err.downcast_ref::<NoElementFound>().is_some() => {
            log::trace!("no elements matched {}", locator);
            Ok(Vec::new())
        }
        Err(err) => Err(ScraperError::SessionFault(err.to_string())),
    }
}

impl<'a> DomRoot for LivePage<'a> {
    type Element = LiveElement<'a>;

    fn find_all(&self, locator: &Locator) -> Result<Vec<LiveElement<'a>>> {
        let found = match locator.as_css() {
            Some(css) => self.tab.find_elements(&css),
            None => self.tab.find_elements_by_xpath(locator.value()),
        };
        collect_found(found, locator)
    }
}

impl PageActions for LivePage<'_> {
    fn open(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| ScraperError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| ScraperError::NavigationFailed(format!("Navigation timeout: {}", e)))?;
        Ok(())
    }

    fn scroll_to_bottom(&self) -> Result<()> {
        self.evaluate("window.scrollTo(0, document.body.scrollHeight);")
    }

    fn scroll_to_half(&self) -> Result<()> {
        self.evaluate("window.scrollTo(0, Math.ceil(document.body.scrollHeight / 2));")
    }

    fn scroll_element_to_percent(&self, class_name: &str, percent: f64) -> Result<()> {
        let js = format!(
            "var elem = document.getElementsByClassName(\"{}\")[0]; \
             if (elem) {{ elem.scrollTo(0, elem.scrollHeight * {}); }}",
            class_name, percent
        );
        self.evaluate(&js)
    }
}

impl<'a> DomRoot for LiveElement<'a> {
    type Element = LiveElement<'a>;

    fn find_all(&self, locator: &Locator) -> Result<Vec<LiveElement<'a>>> {
        let found = match locator.as_css() {
            Some(css) => self.inner.find_elements(&css),
            // `Element::find_elements_by_xpath` ties the returned handles to
            // the `&self` borrow rather than `'a`; its whole-document
            // `PerformSearch` is driven entirely off `self.parent`, so go
            // through that `&'a Tab` directly to get `'a`-lived handles.
            None => self.inner.parent.find_elements_by_xpath(locator.value()),
        };
        collect_found(found, locator)
    }
}

impl DomElement for LiveElement<'_> {
    fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.inner
            .get_attribute_value(name)
            .map_err(|e| ScraperError::SessionFault(format!("Attribute access failed: {}", e)))
    }

    fn text(&self) -> Result<String> {
        self.inner
            .get_inner_text()
            .map_err(|e| ScraperError::SessionFault(format!("Text access failed: {}", e)))
    }
}
