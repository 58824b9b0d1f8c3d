// SPDX-License-Identifier: MPL-2.0
//! Reference accessor traits.
//!
//! Each trait expresses the capability "yields references to related records
//! of one kind". The collector is written against these traits, so the same
//! traversal step works for a person, a family, or a citation without caring
//! which one it got.

use crate::domain::handles::{CitationHandle, EventHandle, MediaHandle};
use crate::domain::records::{Citation, Event, Family, Name, Person};

/// Records that reference media directly.
pub trait HasMediaRefs {
    fn media_refs(&self) -> &[MediaHandle];
}

/// Records that reference citations.
pub trait HasCitationRefs {
    fn citation_refs(&self) -> &[CitationHandle];
}

/// Records that reference events.
pub trait HasEventRefs {
    fn event_refs(&self) -> &[EventHandle];
}

impl HasMediaRefs for Person {
    fn media_refs(&self) -> &[MediaHandle] {
        &self.media_refs
    }
}

impl HasMediaRefs for Family {
    fn media_refs(&self) -> &[MediaHandle] {
        &self.media_refs
    }
}

impl HasMediaRefs for Citation {
    fn media_refs(&self) -> &[MediaHandle] {
        &self.media_refs
    }
}

impl HasCitationRefs for Person {
    fn citation_refs(&self) -> &[CitationHandle] {
        &self.citation_refs
    }
}

impl HasCitationRefs for Name {
    fn citation_refs(&self) -> &[CitationHandle] {
        &self.citation_refs
    }
}

impl HasCitationRefs for Event {
    fn citation_refs(&self) -> &[CitationHandle] {
        &self.citation_refs
    }
}

impl HasEventRefs for Person {
    fn event_refs(&self) -> &[EventHandle] {
        &self.event_refs
    }
}

impl HasEventRefs for Family {
    fn event_refs(&self) -> &[EventHandle] {
        &self.event_refs
    }
}
