// SPDX-License-Identifier: MPL-2.0
//! Record types of the genealogical object model.
//!
//! These mirror the entities of the tree file one-to-one. Records only carry
//! data and reference lists; resolving a reference to another record goes
//! through [`TreeRead`](crate::db::TreeRead).

use crate::domain::handles::{
    CitationHandle, EventHandle, FamilyHandle, MediaHandle, PersonHandle,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A personal name, either the primary one or an alternate.
///
/// Names can carry their own citations (e.g. a birth register scan proving a
/// spelling), which is why the collector visits them separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub given: String,
    #[serde(default)]
    pub surname: String,
    /// Citations backing this name.
    #[serde(default, rename = "citations")]
    pub citation_refs: Vec<CitationHandle>,
}

impl Name {
    /// Returns the name in "Given Surname" display form.
    #[must_use]
    pub fn display(&self) -> String {
        match (self.given.is_empty(), self.surname.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.given.clone(),
            (true, false) => self.surname.clone(),
            (false, false) => format!("{} {}", self.given, self.surname),
        }
    }
}

/// A person record: the root entity of a collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub handle: PersonHandle,
    #[serde(default)]
    pub primary_name: Name,
    #[serde(default)]
    pub alternate_names: Vec<Name>,
    /// Media attached directly to the person.
    #[serde(default, rename = "media")]
    pub media_refs: Vec<MediaHandle>,
    /// Citations attached directly to the person.
    #[serde(default, rename = "citations")]
    pub citation_refs: Vec<CitationHandle>,
    /// Events the person participates in.
    #[serde(default, rename = "events")]
    pub event_refs: Vec<EventHandle>,
    /// Families the person belongs to, as spouse or parent.
    #[serde(default, rename = "families")]
    pub family_refs: Vec<FamilyHandle>,
}

impl Person {
    /// Returns the primary name in display form, or the handle if unnamed.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = self.primary_name.display();
        if name.is_empty() {
            self.handle.to_string()
        } else {
            name
        }
    }
}

/// A family record grouping spouses and children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub handle: FamilyHandle,
    /// Media attached directly to the family (e.g. a wedding photograph).
    #[serde(default, rename = "media")]
    pub media_refs: Vec<MediaHandle>,
    /// Family events (marriage, divorce, ...).
    #[serde(default, rename = "events")]
    pub event_refs: Vec<EventHandle>,
}

/// An event record (birth, marriage, residence, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub handle: EventHandle,
    #[serde(default)]
    pub description: String,
    /// Citations backing this event.
    #[serde(default, rename = "citations")]
    pub citation_refs: Vec<CitationHandle>,
}

/// A citation record linking a claim to its evidence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub handle: CitationHandle,
    #[serde(default)]
    pub source: String,
    /// Media attached to the citation (e.g. a scanned document).
    #[serde(default, rename = "media")]
    pub media_refs: Vec<MediaHandle>,
}

/// A media record: the leaf entity the gallery displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub handle: MediaHandle,
    #[serde(default)]
    pub description: String,
    /// File path, absolute or relative to the tree's media base directory.
    #[serde(default)]
    pub path: PathBuf,
    /// MIME type, e.g. `image/jpeg`. Absent when unknown.
    #[serde(default)]
    pub mime: Option<String>,
}

impl Media {
    /// Returns `true` when the media is a displayable image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime
            .as_deref()
            .is_some_and(|mime| mime.starts_with("image/"))
    }
}
