// SPDX-License-Identifier: MPL-2.0
//! Domain layer - the genealogical object model, free of presentation
//! dependencies.
//!
//! This module contains the record types mirrored from the tree file and the
//! typed accessor traits the collector traverses.
//!
//! # Modules
//!
//! - [`handles`]: Opaque record identifiers ([`PersonHandle`](handles::PersonHandle),
//!   [`MediaHandle`](handles::MediaHandle), ...)
//! - [`records`]: Record types ([`Person`](records::Person), [`Family`](records::Family),
//!   [`Event`](records::Event), [`Citation`](records::Citation), [`Media`](records::Media))
//! - [`refs`]: Reference accessor traits ([`HasMediaRefs`](refs::HasMediaRefs),
//!   [`HasCitationRefs`](refs::HasCitationRefs), [`HasEventRefs`](refs::HasEventRefs))

pub mod handles;
pub mod records;
pub mod refs;

pub use handles::{CitationHandle, EventHandle, FamilyHandle, MediaHandle, PersonHandle};
pub use records::{Citation, Event, Family, Media, Name, Person};
pub use refs::{HasCitationRefs, HasEventRefs, HasMediaRefs};
