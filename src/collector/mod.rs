// SPDX-License-Identifier: MPL-2.0
//! The media collector: walks everything reachable from a person and gathers
//! unique media references.
//!
//! Media can hang off a person directly, off their citations, off citations
//! of their primary and alternate names, off citations of their events, and
//! off each of their families (directly and via family-event citations). The
//! collector visits all of those, deduplicates by media handle, and returns
//! the result sorted ascending by description.
//!
//! Collection is a pure read over the tree: it holds no state between runs
//! and is recomputed from scratch on every trigger. [`Collector`] exposes the
//! traversal as a resumable stepper so a UI event loop can interleave work on
//! large trees; [`collect_person_media`] drives it to completion in one call.

use crate::db::TreeRead;
use crate::domain::{
    FamilyHandle, HasCitationRefs, HasEventRefs, HasMediaRefs, MediaHandle, PersonHandle,
};
use crate::error::Result;
use std::collections::{HashSet, VecDeque};

/// One collected media reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSummary {
    pub handle: MediaHandle,
    pub description: String,
}

/// A pending traversal step.
///
/// Each phase re-resolves the person so a phase is self-contained; family
/// phases are queued one per family, which keeps individual steps small.
#[derive(Debug, Clone)]
enum Phase {
    PersonMedia(PersonHandle),
    PersonCitations(PersonHandle),
    PrimaryNameCitations(PersonHandle),
    AlternateNameCitations(PersonHandle),
    PersonEventCitations(PersonHandle),
    QueueFamilies(PersonHandle),
    Family(FamilyHandle),
}

/// Resumable media collection over a tree.
///
/// `step()` performs one [`Phase`] and reports whether work remains;
/// `finish()` sorts and returns what was found so far. Dropping a collector
/// mid-run cancels it with no side effects, since the traversal only reads.
#[derive(Debug)]
pub struct Collector<'a, T: TreeRead + ?Sized> {
    tree: &'a T,
    phases: VecDeque<Phase>,
    seen: HashSet<MediaHandle>,
    found: Vec<MediaSummary>,
}

impl<'a, T: TreeRead + ?Sized> Collector<'a, T> {
    /// Starts a collection rooted at `active`.
    ///
    /// No active person, or an active handle that does not resolve, yields a
    /// collector that is already done; both produce an empty result rather
    /// than an error.
    pub fn new(tree: &'a T, active: Option<&PersonHandle>) -> Self {
        let mut phases = VecDeque::new();
        if let Some(handle) = active {
            if tree.person(handle).is_ok() {
                phases.extend([
                    Phase::PersonMedia(handle.clone()),
                    Phase::PersonCitations(handle.clone()),
                    Phase::PrimaryNameCitations(handle.clone()),
                    Phase::AlternateNameCitations(handle.clone()),
                    Phase::PersonEventCitations(handle.clone()),
                    Phase::QueueFamilies(handle.clone()),
                ]);
            }
        }
        Self {
            tree,
            phases,
            seen: HashSet::new(),
            found: Vec::new(),
        }
    }

    /// Performs one traversal phase.
    ///
    /// Returns `Ok(true)` while phases remain, `Ok(false)` once done. A
    /// dangling reference inside the traversal surfaces the underlying
    /// [`Error::NotFound`](crate::error::Error::NotFound) unchanged.
    pub fn step(&mut self) -> Result<bool> {
        let Some(phase) = self.phases.pop_front() else {
            return Ok(false);
        };

        match phase {
            Phase::PersonMedia(handle) => {
                let person = self.tree.person(&handle)?.clone();
                self.take_media(&person)?;
            }
            Phase::PersonCitations(handle) => {
                let person = self.tree.person(&handle)?.clone();
                self.take_citations(&person)?;
            }
            Phase::PrimaryNameCitations(handle) => {
                let name = self.tree.person(&handle)?.primary_name.clone();
                self.take_citations(&name)?;
            }
            Phase::AlternateNameCitations(handle) => {
                let names = self.tree.person(&handle)?.alternate_names.clone();
                for name in &names {
                    self.take_citations(name)?;
                }
            }
            Phase::PersonEventCitations(handle) => {
                let person = self.tree.person(&handle)?.clone();
                self.take_event_citations(&person)?;
            }
            Phase::QueueFamilies(handle) => {
                let family_refs = self.tree.person(&handle)?.family_refs.clone();
                for family in family_refs {
                    self.phases.push_back(Phase::Family(family));
                }
            }
            Phase::Family(handle) => {
                let family = self.tree.family(&handle)?.clone();
                self.take_media(&family)?;
                self.take_event_citations(&family)?;
            }
        }

        Ok(!self.phases.is_empty())
    }

    /// Sorts what was found and returns it.
    ///
    /// Ordering is ascending by description, case-sensitive; the stable sort
    /// keeps discovery order for equal descriptions.
    #[must_use]
    pub fn finish(self) -> Vec<MediaSummary> {
        let mut found = self.found;
        found.sort_by(|a, b| a.description.cmp(&b.description));
        found
    }

    /// Drives the collection to completion.
    pub fn run(mut self) -> Result<Vec<MediaSummary>> {
        while self.step()? {}
        Ok(self.finish())
    }

    /// Records the media referenced by `record`, skipping handles already
    /// seen. If two references disagree on description the first one
    /// discovered wins; the tree is assumed to keep them identical.
    fn take_media(&mut self, record: &impl HasMediaRefs) -> Result<()> {
        for handle in record.media_refs() {
            if self.seen.insert(handle.clone()) {
                let media = self.tree.media(handle)?;
                self.found.push(MediaSummary {
                    handle: handle.clone(),
                    description: media.description.clone(),
                });
            }
        }
        Ok(())
    }

    /// Records media attached to each citation of `record`.
    fn take_citations(&mut self, record: &impl HasCitationRefs) -> Result<()> {
        for handle in record.citation_refs() {
            let citation = self.tree.citation(handle)?.clone();
            self.take_media(&citation)?;
        }
        Ok(())
    }

    /// Records media attached to citations of each event of `record`.
    fn take_event_citations(&mut self, record: &impl HasEventRefs) -> Result<()> {
        for handle in record.event_refs() {
            let event = self.tree.event(handle)?.clone();
            self.take_citations(&event)?;
        }
        Ok(())
    }
}

/// Collects all media reachable from `active`, deduplicated and sorted
/// ascending by description.
///
/// `None` and an unresolvable active handle both yield an empty list. Errors
/// are reserved for dangling references encountered mid-traversal.
pub fn collect_person_media<T: TreeRead + ?Sized>(
    tree: &T,
    active: Option<&PersonHandle>,
) -> Result<Vec<MediaSummary>> {
    Collector::new(tree, active).run()
}
