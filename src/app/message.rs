// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::db::MemoryTree;
use crate::error::Error;
use crate::gallery::GalleryEntry;
use crate::ui::gallery_pane;
use crate::ui::media_editor;
use crate::ui::person_panel;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery_pane::Message),
    People(person_panel::Message),
    Editor(media_editor::Message),
    /// Trigger the open-tree file dialog from the empty state.
    OpenTreeDialog,
    /// Result from the open-tree file dialog.
    OpenTreeDialogResult(Option<PathBuf>),
    /// Result from loading a tree file in the background.
    TreeLoaded {
        path: PathBuf,
        result: Result<MemoryTree, Error>,
    },
    /// Result from a background media collection run.
    GalleryRebuilt(Result<Vec<GalleryEntry>, Error>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional tree file to preload on startup.
    pub tree_path: Option<String>,
    /// Optional start person handle inside the preloaded tree.
    pub person: Option<String>,
}
