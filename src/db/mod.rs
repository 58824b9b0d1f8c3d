// SPDX-License-Identifier: MPL-2.0
//! Tree storage and change notification.
//!
//! [`TreeRead`] is the read seam the collector and gallery are written
//! against. [`MemoryTree`] is the in-memory database behind it, loaded from a
//! tree file and mutated through methods that publish [`Change`]
//! notifications to subscribers.

pub mod tree_file;

use crate::domain::{
    Citation, CitationHandle, Event, EventHandle, Family, FamilyHandle, Media, MediaHandle,
    Person, PersonHandle,
};
use crate::error::{Error, RecordKind, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Read access to a tree.
///
/// Lookups return [`Error::NotFound`] for a dangling handle; callers that
/// tolerate a missing record (only the active-person lookup does) match on
/// that variant explicitly.
pub trait TreeRead {
    fn person(&self, handle: &PersonHandle) -> Result<&Person>;
    fn family(&self, handle: &FamilyHandle) -> Result<&Family>;
    fn event(&self, handle: &EventHandle) -> Result<&Event>;
    fn citation(&self, handle: &CitationHandle) -> Result<&Citation>;
    fn media(&self, handle: &MediaHandle) -> Result<&Media>;

    /// Base directory relative media paths are resolved against.
    fn media_base(&self) -> &Path;

    /// Resolves a media record's path to a full filesystem path.
    fn media_full_path(&self, media: &Media) -> PathBuf {
        if media.path.is_absolute() {
            media.path.clone()
        } else {
            self.media_base().join(&media.path)
        }
    }
}

/// Mutation categories a subscriber can register interest in.
///
/// The set matches what can invalidate a collected gallery: person edits plus
/// the full add/update/delete lifecycle of families, events, citations, and
/// media. Person add/delete are absent on purpose; a new or removed person
/// only matters once it becomes the active selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    PersonUpdate,
    FamilyAdd,
    FamilyUpdate,
    FamilyDelete,
    EventAdd,
    EventUpdate,
    EventDelete,
    CitationAdd,
    CitationUpdate,
    CitationDelete,
    MediaAdd,
    MediaUpdate,
    MediaDelete,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Change::PersonUpdate => "person-update",
            Change::FamilyAdd => "family-add",
            Change::FamilyUpdate => "family-update",
            Change::FamilyDelete => "family-delete",
            Change::EventAdd => "event-add",
            Change::EventUpdate => "event-update",
            Change::EventDelete => "event-delete",
            Change::CitationAdd => "citation-add",
            Change::CitationUpdate => "citation-update",
            Change::CitationDelete => "citation-delete",
            Change::MediaAdd => "media-add",
            Change::MediaUpdate => "media-update",
            Change::MediaDelete => "media-delete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
struct Subscriber {
    interests: Vec<Change>,
    sender: Sender<Change>,
}

/// In-memory tree database.
///
/// Records live in ordered maps so iteration (and therefore the UI person
/// list and test output) is deterministic. Mutators publish their change
/// category to every matching subscriber.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    name: String,
    media_base: PathBuf,
    people: BTreeMap<PersonHandle, Person>,
    families: BTreeMap<FamilyHandle, Family>,
    events: BTreeMap<EventHandle, Event>,
    citations: BTreeMap<CitationHandle, Citation>,
    media: BTreeMap<MediaHandle, Media>,
    subscribers: Vec<Subscriber>,
}

impl MemoryTree {
    pub fn new(name: impl Into<String>, media_base: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            media_base: media_base.into(),
            ..Self::default()
        }
    }

    /// Tree name as given in the tree file.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All persons, in handle order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Registers a subscriber for the given change categories.
    ///
    /// The receiver gets one message per matching mutation. Disconnected
    /// receivers are dropped from the list on the next publish.
    pub fn subscribe(&mut self, interests: &[Change]) -> Receiver<Change> {
        let (sender, receiver) = channel();
        self.subscribers.push(Subscriber {
            interests: interests.to_vec(),
            sender,
        });
        receiver
    }

    fn publish(&mut self, change: Change) {
        self.subscribers.retain(|sub| {
            if !sub.interests.contains(&change) {
                return true;
            }
            sub.sender.send(change).is_ok()
        });
    }

    /// Inserts a person. New persons publish nothing; they only become
    /// relevant once selected as the active person.
    pub fn insert_person(&mut self, person: Person) {
        self.people.insert(person.handle.clone(), person);
    }

    pub fn update_person(&mut self, person: Person) {
        self.people.insert(person.handle.clone(), person);
        self.publish(Change::PersonUpdate);
    }

    pub fn insert_family(&mut self, family: Family) {
        self.families.insert(family.handle.clone(), family);
        self.publish(Change::FamilyAdd);
    }

    pub fn update_family(&mut self, family: Family) {
        self.families.insert(family.handle.clone(), family);
        self.publish(Change::FamilyUpdate);
    }

    /// Removes a family and strips memberships pointing at it.
    pub fn remove_family(&mut self, handle: &FamilyHandle) {
        if self.families.remove(handle).is_none() {
            return;
        }
        for person in self.people.values_mut() {
            person.family_refs.retain(|h| h != handle);
        }
        self.publish(Change::FamilyDelete);
    }

    pub fn insert_event(&mut self, event: Event) {
        self.events.insert(event.handle.clone(), event);
        self.publish(Change::EventAdd);
    }

    pub fn update_event(&mut self, event: Event) {
        self.events.insert(event.handle.clone(), event);
        self.publish(Change::EventUpdate);
    }

    /// Removes an event and strips references pointing at it.
    pub fn remove_event(&mut self, handle: &EventHandle) {
        if self.events.remove(handle).is_none() {
            return;
        }
        for person in self.people.values_mut() {
            person.event_refs.retain(|h| h != handle);
        }
        for family in self.families.values_mut() {
            family.event_refs.retain(|h| h != handle);
        }
        self.publish(Change::EventDelete);
    }

    pub fn insert_citation(&mut self, citation: Citation) {
        self.citations.insert(citation.handle.clone(), citation);
        self.publish(Change::CitationAdd);
    }

    pub fn update_citation(&mut self, citation: Citation) {
        self.citations.insert(citation.handle.clone(), citation);
        self.publish(Change::CitationUpdate);
    }

    /// Removes a citation and strips references pointing at it.
    pub fn remove_citation(&mut self, handle: &CitationHandle) {
        if self.citations.remove(handle).is_none() {
            return;
        }
        for person in self.people.values_mut() {
            person.citation_refs.retain(|h| h != handle);
            person.primary_name.citation_refs.retain(|h| h != handle);
            for name in &mut person.alternate_names {
                name.citation_refs.retain(|h| h != handle);
            }
        }
        for event in self.events.values_mut() {
            event.citation_refs.retain(|h| h != handle);
        }
        self.publish(Change::CitationDelete);
    }

    pub fn insert_media(&mut self, media: Media) {
        self.media.insert(media.handle.clone(), media);
        self.publish(Change::MediaAdd);
    }

    pub fn update_media(&mut self, media: Media) {
        self.media.insert(media.handle.clone(), media);
        self.publish(Change::MediaUpdate);
    }

    /// Removes a media record and strips references pointing at it.
    pub fn remove_media(&mut self, handle: &MediaHandle) {
        if self.media.remove(handle).is_none() {
            return;
        }
        for person in self.people.values_mut() {
            person.media_refs.retain(|h| h != handle);
        }
        for family in self.families.values_mut() {
            family.media_refs.retain(|h| h != handle);
        }
        for citation in self.citations.values_mut() {
            citation.media_refs.retain(|h| h != handle);
        }
        self.publish(Change::MediaDelete);
    }
}

impl TreeRead for MemoryTree {
    fn person(&self, handle: &PersonHandle) -> Result<&Person> {
        self.people
            .get(handle)
            .ok_or_else(|| Error::not_found(RecordKind::Person, handle.as_str()))
    }

    fn family(&self, handle: &FamilyHandle) -> Result<&Family> {
        self.families
            .get(handle)
            .ok_or_else(|| Error::not_found(RecordKind::Family, handle.as_str()))
    }

    fn event(&self, handle: &EventHandle) -> Result<&Event> {
        self.events
            .get(handle)
            .ok_or_else(|| Error::not_found(RecordKind::Event, handle.as_str()))
    }

    fn citation(&self, handle: &CitationHandle) -> Result<&Citation> {
        self.citations
            .get(handle)
            .ok_or_else(|| Error::not_found(RecordKind::Citation, handle.as_str()))
    }

    fn media(&self, handle: &MediaHandle) -> Result<&Media> {
        self.media
            .get(handle)
            .ok_or_else(|| Error::not_found(RecordKind::Media, handle.as_str()))
    }

    fn media_base(&self) -> &Path {
        &self.media_base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(handle: &str, description: &str) -> Media {
        Media {
            handle: MediaHandle::from(handle),
            description: description.into(),
            path: PathBuf::from(format!("{handle}.jpg")),
            mime: Some("image/jpeg".into()),
        }
    }

    #[test]
    fn lookup_of_missing_handle_is_not_found() {
        let tree = MemoryTree::default();
        let err = tree.person(&PersonHandle::from("P1")).unwrap_err();
        assert_eq!(err, Error::not_found(RecordKind::Person, "P1"));
    }

    #[test]
    fn media_full_path_joins_relative_paths_only() {
        let mut tree = MemoryTree::new("test", "/srv/media");
        tree.insert_media(media("M1", "relative"));
        tree.insert_media(Media {
            handle: MediaHandle::from("M2"),
            description: "absolute".into(),
            path: PathBuf::from("/photos/m2.jpg"),
            mime: None,
        });

        let relative = tree.media(&MediaHandle::from("M1")).unwrap();
        assert_eq!(tree.media_full_path(relative), PathBuf::from("/srv/media/M1.jpg"));

        let absolute = tree.media(&MediaHandle::from("M2")).unwrap();
        assert_eq!(tree.media_full_path(absolute), PathBuf::from("/photos/m2.jpg"));
    }

    #[test]
    fn subscribers_only_receive_matching_categories() {
        let mut tree = MemoryTree::default();
        let media_changes = tree.subscribe(&[Change::MediaAdd, Change::MediaDelete]);

        tree.insert_media(media("M1", "one"));
        tree.insert_event(Event {
            handle: EventHandle::from("E1"),
            ..Event::default()
        });
        tree.remove_media(&MediaHandle::from("M1"));

        let received: Vec<Change> = media_changes.try_iter().collect();
        assert_eq!(received, vec![Change::MediaAdd, Change::MediaDelete]);
    }

    #[test]
    fn disconnected_subscribers_are_pruned_on_publish() {
        let mut tree = MemoryTree::default();
        let receiver = tree.subscribe(&[Change::MediaAdd]);
        drop(receiver);

        tree.insert_media(media("M1", "one"));
        assert!(tree.subscribers.is_empty());
    }

    #[test]
    fn remove_media_strips_references() {
        let mut tree = MemoryTree::default();
        tree.insert_media(media("M1", "one"));
        tree.insert_citation(Citation {
            handle: CitationHandle::from("C1"),
            media_refs: vec![MediaHandle::from("M1")],
            ..Citation::default()
        });
        tree.insert_person(Person {
            handle: PersonHandle::from("P1"),
            media_refs: vec![MediaHandle::from("M1")],
            ..Person::default()
        });

        tree.remove_media(&MediaHandle::from("M1"));

        assert!(tree
            .citation(&CitationHandle::from("C1"))
            .unwrap()
            .media_refs
            .is_empty());
        assert!(tree
            .person(&PersonHandle::from("P1"))
            .unwrap()
            .media_refs
            .is_empty());
    }

    #[test]
    fn remove_event_strips_person_and_family_references() {
        let mut tree = MemoryTree::default();
        tree.insert_event(Event {
            handle: EventHandle::from("E1"),
            ..Event::default()
        });
        tree.insert_person(Person {
            handle: PersonHandle::from("P1"),
            event_refs: vec![EventHandle::from("E1")],
            ..Person::default()
        });
        tree.insert_family(Family {
            handle: FamilyHandle::from("F1"),
            event_refs: vec![EventHandle::from("E1")],
            ..Family::default()
        });

        tree.remove_event(&EventHandle::from("E1"));

        assert!(tree
            .person(&PersonHandle::from("P1"))
            .unwrap()
            .event_refs
            .is_empty());
        assert!(tree
            .family(&FamilyHandle::from("F1"))
            .unwrap()
            .event_refs
            .is_empty());
    }
}
