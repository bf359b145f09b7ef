//! Profile data records.
//!
//! Every field is declared and defaulted up front: the source DOM is not
//! guaranteed to carry any given section, and a missing field is simply a
//! field holding its default, decided when the record is built.

use serde::{Deserialize, Serialize};

/// A connection or contact entry on a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One position in the experience section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_title: Option<String>,

    /// Company name as shown on the entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// One entry in the education section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Education {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A followed interest (company, school, influencer)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Interest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An accomplishment entry (publication, award, language, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Accomplishment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A scraped profile.
///
/// Any field may be absent; sub-entity lists default to empty. There is no
/// relational integrity between sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersonProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,

    /// Whether the profile advertises itself as open to work
    #[serde(default)]
    pub open_to_work: bool,

    /// Canonical URL of the profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experiences: Vec<Experience>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub educations: Vec<Education>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<Interest>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accomplishments: Vec<Accomplishment>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
}

impl PersonProfile {
    /// An empty profile anchored at its URL
    pub fn new(linkedin_url: impl Into<String>) -> Self {
        Self {
            linkedin_url: Some(linkedin_url.into()),
            ..Self::default()
        }
    }
}
