// SPDX-License-Identifier: MPL-2.0
//! KinGallery collects every media object reachable from a person in a
//! family tree and shows the result as a sorted thumbnail gallery.
//!
//! The crate is split into a UI-free core and an Iced front end:
//!
//! - [`domain`] holds the record types and typed handles.
//! - [`db`] is the in-memory tree store with change notifications.
//! - [`collector`] walks a person's records and gathers reachable media.
//! - [`gallery`] turns collection results into displayable entries and
//!   tracks when a re-collection is due.
//! - [`app`] and [`ui`] are the Iced application and its widgets.

pub mod app;
pub mod collector;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod opener;
pub mod ui;

pub use error::{Error, Result};
