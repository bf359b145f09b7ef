//! Fake DOM fixture for driving the waiter and the scrapers without a
//! browser.
//!
//! Fake nodes answer to a flat set of locator keys instead of real CSS
//! matching; a key is compared against the raw locator value, whatever the
//! strategy. The page root supports match-after-N-polls delays and fault
//! injection per key.

use crate::dom::locator::Locator;
use crate::dom::query::{DomElement, DomRoot, PageActions};
use crate::error::{Result, ScraperError};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

#[derive(Debug)]
struct FakeNode {
    keys: Vec<String>,
    text: String,
    attrs: HashMap<String, String>,
    children: Vec<FakeElement>,
}

/// A cheaply cloneable fake element
#[derive(Debug, Clone)]
pub(crate) struct FakeElement(Rc<FakeNode>);

impl FakeElement {
    pub fn new(keys: &[&str]) -> Self {
        Self(Rc::new(FakeNode {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            text: String::new(),
            attrs: HashMap::new(),
            children: Vec::new(),
        }))
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        let mut node = self.into_node();
        node.text = text.into();
        Self(Rc::new(node))
    }

    pub fn with_attr(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut node = self.into_node();
        node.attrs.insert(key.into(), value.into());
        Self(Rc::new(node))
    }

    pub fn with_child(self, child: FakeElement) -> Self {
        let mut node = self.into_node();
        node.children.push(child);
        Self(Rc::new(node))
    }

    fn into_node(self) -> FakeNode {
        Rc::try_unwrap(self.0).expect("builder used after the element was shared")
    }

    fn matches(&self, value: &str) -> bool {
        self.0.keys.iter().any(|k| k == value)
    }

    /// Pre-order walk over descendants, excluding the node itself
    fn collect_descendants(&self, value: &str, out: &mut Vec<FakeElement>) {
        for child in &self.0.children {
            if child.matches(value) {
                out.push(child.clone());
            }
            child.collect_descendants(value, out);
        }
    }
}

impl DomRoot for FakeElement {
    type Element = FakeElement;

    fn find_all(&self, locator: &Locator) -> Result<Vec<FakeElement>> {
        let mut out = Vec::new();
        self.collect_descendants(locator.value(), &mut out);
        Ok(out)
    }
}

impl DomElement for FakeElement {
    fn attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self.0.attrs.get(name).cloned())
    }

    fn text(&self) -> Result<String> {
        Ok(self.0.text.clone())
    }
}

/// Fake page: a fake DOM root plus recorders for navigation and scroll
/// calls, match delays, and injected faults
pub(crate) struct FakePage {
    root: FakeElement,
    delays: RefCell<HashMap<String, usize>>,
    faults: RefCell<HashSet<String>>,
    polls: RefCell<HashMap<String, usize>>,
    pub navigations: RefCell<Vec<String>>,
    pub scrolls: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn new(root: FakeElement) -> Self {
        Self {
            root,
            delays: RefCell::new(HashMap::new()),
            faults: RefCell::new(HashSet::new()),
            polls: RefCell::new(HashMap::new()),
            navigations: RefCell::new(Vec::new()),
            scrolls: RefCell::new(Vec::new()),
        }
    }

    /// Queries for `key` return nothing for the first `polls` polls
    pub fn delay_matches(&self, key: &str, polls: usize) {
        self.delays.borrow_mut().insert(key.to_string(), polls);
    }

    /// Queries for `key` fail with a session fault
    pub fn inject_fault(&self, key: &str) {
        self.faults.borrow_mut().insert(key.to_string());
    }

    /// How many times `key` has been queried on this page
    pub fn poll_count(&self, key: &str) -> usize {
        self.polls.borrow().get(key).copied().unwrap_or(0)
    }
}

impl DomRoot for FakePage {
    type Element = FakeElement;

    fn find_all(&self, locator: &Locator) -> Result<Vec<FakeElement>> {
        let value = locator.value();
        *self.polls.borrow_mut().entry(value.to_string()).or_insert(0) += 1;

        if self.faults.borrow().contains(value) {
            return Err(ScraperError::SessionFault(format!(
                "injected fault for {}",
                value
            )));
        }
        if let Some(remaining) = self.delays.borrow_mut().get_mut(value) {
            if *remaining > 0 {
                *remaining -= 1;
                return Ok(Vec::new());
            }
        }
        self.root.find_all(locator)
    }
}

impl PageActions for FakePage {
    fn open(&self, url: &str) -> Result<()> {
        self.navigations.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn scroll_to_bottom(&self) -> Result<()> {
        self.scrolls.borrow_mut().push("bottom".to_string());
        Ok(())
    }

    fn scroll_to_half(&self) -> Result<()> {
        self.scrolls.borrow_mut().push("half".to_string());
        Ok(())
    }

    fn scroll_element_to_percent(&self, class_name: &str, percent: f64) -> Result<()> {
        self.scrolls
            .borrow_mut()
            .push(format!("{}@{}", class_name, percent));
        Ok(())
    }
}
