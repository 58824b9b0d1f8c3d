// SPDX-License-Identifier: MPL-2.0
//! UI components.
//!
//! Each component owns its `Message` enum and a `view` function taking a
//! `ViewContext`; the application maps component messages into its own
//! top-level message type.

pub mod gallery_pane;
pub mod media_editor;
pub mod person_panel;
pub mod styles;
