// SPDX-License-Identifier: MPL-2.0
//! Gallery view-model: the collected media list resolved for display.
//!
//! [`Gallery`] owns the active person, the resolved entries, and a change
//! subscription on the tree. Entries are rebuilt from scratch on every
//! trigger (active-person change or any relevant tree mutation); nothing from
//! a previous run survives into the next.

use crate::collector::collect_person_media;
use crate::db::{Change, MemoryTree, TreeRead};
use crate::domain::{MediaHandle, PersonHandle};
use crate::error::Result;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

/// Mutation categories that invalidate a collected gallery.
pub const REFRESH_TRIGGERS: [Change; 13] = [
    Change::PersonUpdate,
    Change::FamilyAdd,
    Change::FamilyUpdate,
    Change::FamilyDelete,
    Change::EventAdd,
    Change::EventUpdate,
    Change::EventDelete,
    Change::CitationAdd,
    Change::CitationUpdate,
    Change::CitationDelete,
    Change::MediaAdd,
    Change::MediaUpdate,
    Change::MediaDelete,
];

/// One displayable gallery row, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub handle: MediaHandle,
    pub description: String,
    /// Full filesystem path of the media file.
    pub full_path: PathBuf,
    /// Directory containing the media file.
    pub folder: PathBuf,
    pub mime: Option<String>,
}

impl GalleryEntry {
    /// Returns `true` when the entry can be rendered as a thumbnail.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime
            .as_deref()
            .is_some_and(|mime| mime.starts_with("image/"))
    }
}

/// Builds the resolved entry list for `active`, sorted by description.
pub fn build_entries<T: TreeRead + ?Sized>(
    tree: &T,
    active: Option<&PersonHandle>,
) -> Result<Vec<GalleryEntry>> {
    let summaries = collect_person_media(tree, active)?;
    let mut entries = Vec::with_capacity(summaries.len());
    for summary in summaries {
        let media = tree.media(&summary.handle)?;
        let full_path = tree.media_full_path(media);
        let folder = full_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        entries.push(GalleryEntry {
            handle: summary.handle,
            description: summary.description,
            full_path,
            folder,
            mime: media.mime.clone(),
        });
    }
    Ok(entries)
}

/// The gallery state held by the application.
#[derive(Debug, Default)]
pub struct Gallery {
    active: Option<PersonHandle>,
    entries: Vec<GalleryEntry>,
    changes: Option<Receiver<Change>>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes this gallery to every mutation category that can
    /// invalidate it. Replaces any previous subscription.
    pub fn watch(&mut self, tree: &mut MemoryTree) {
        self.changes = Some(tree.subscribe(&REFRESH_TRIGGERS));
    }

    pub fn set_active(&mut self, active: Option<PersonHandle>) {
        self.active = active;
    }

    #[must_use]
    pub fn active(&self) -> Option<&PersonHandle> {
        self.active.as_ref()
    }

    /// Drains pending change notifications; `true` when any arrived.
    ///
    /// All categories share the single invalidate-and-recollect response, so
    /// only arrival matters, not which category fired.
    pub fn needs_refresh(&mut self) -> bool {
        match &self.changes {
            Some(receiver) => receiver.try_iter().count() > 0,
            None => false,
        }
    }

    /// Recomputes the entries from the current tree state.
    pub fn rebuild<T: TreeRead + ?Sized>(&mut self, tree: &T) -> Result<()> {
        self.entries = build_entries(tree, self.active.as_ref())?;
        Ok(())
    }

    /// Replaces the entries with a list built elsewhere (e.g. off-thread).
    pub fn set_entries(&mut self, entries: Vec<GalleryEntry>) {
        self.entries = entries;
    }

    #[must_use]
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    /// Looks up a displayed entry by media handle.
    #[must_use]
    pub fn entry(&self, handle: &MediaHandle) -> Option<&GalleryEntry> {
        self.entries.iter().find(|entry| &entry.handle == handle)
    }
}
