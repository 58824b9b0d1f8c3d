// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the tree, the collector,
//! and the UI components.
//!
//! The `App` struct wires together the loaded tree, the gallery view-model,
//! and the panels, and translates messages into side effects like background
//! collection runs or opening files externally. Policy decisions (double-click
//! window, rebuild triggers) stay close to the update loop so user-facing
//! behavior is easy to audit.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::db::{tree_file, MemoryTree, TreeRead};
use crate::domain::{MediaHandle, PersonHandle};
use crate::gallery::{self, Gallery};
use crate::i18n::fluent::I18n;
use crate::opener;
use crate::ui::gallery_pane::{self, MenuAction};
use crate::ui::media_editor;
use crate::ui::person_panel;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;

/// Two presses on the same thumbnail within this window count as a
/// double-click.
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Root Iced application state bridging the tree database, the gallery, and
/// localized UI panels.
pub struct App {
    pub i18n: I18n,
    config: Config,
    tree: Option<MemoryTree>,
    tree_path: Option<PathBuf>,
    gallery: Gallery,
    /// `(handle, display name)` pairs for the people panel, sorted by name.
    people: Vec<(PersonHandle, String)>,
    /// The application-level active media selection.
    active_media: Option<MediaHandle>,
    hovered: Option<MediaHandle>,
    menu_for: Option<MediaHandle>,
    editor: Option<media_editor::State>,
    last_click: Option<(MediaHandle, Instant)>,
    collecting: bool,
    load_error: Option<String>,
    /// Start person requested on the command line, consumed on first load.
    start_person: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("tree", &self.tree_path)
            .field("active", &self.gallery.active())
            .field("entries", &self.gallery.entries().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            tree: None,
            tree_path: None,
            gallery: Gallery::new(),
            people: Vec::new(),
            active_media: None,
            hovered: None,
            menu_for: None,
            editor: None,
            last_click: None,
            collecting: false,
            load_error: None,
            start_person: None,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// tree loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            config,
            start_person: flags.person,
            ..Self::default()
        };

        let task = match flags.tree_path {
            Some(path) => app.load_tree_task(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match &self.tree {
            Some(tree) if !tree.name().is_empty() => {
                format!("{} — {}", self.i18n.tr("window-title"), tree.name())
            }
            _ => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenTreeDialog => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("Tree files", &["toml"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::OpenTreeDialogResult,
            ),
            Message::OpenTreeDialogResult(Some(path)) => self.load_tree_task(path),
            Message::OpenTreeDialogResult(None) => Task::none(),
            Message::TreeLoaded { path, result } => self.on_tree_loaded(path, result),
            Message::GalleryRebuilt(result) => {
                self.collecting = false;
                match result {
                    Ok(entries) => self.gallery.set_entries(entries),
                    Err(err) => eprintln!("Media collection failed: {}", err),
                }
                Task::none()
            }
            Message::People(person_panel::Message::Selected(handle)) => {
                self.menu_for = None;
                self.editor = None;
                self.last_click = None;
                self.gallery.set_active(Some(handle));
                self.rebuild_task()
            }
            Message::Gallery(msg) => self.on_gallery(msg),
            Message::Editor(msg) => self.on_editor(msg),
        }
    }

    fn on_tree_loaded(
        &mut self,
        path: PathBuf,
        result: Result<MemoryTree, crate::error::Error>,
    ) -> Task<Message> {
        match result {
            Ok(mut tree) => {
                self.gallery = Gallery::new();
                self.gallery.watch(&mut tree);

                self.people = tree
                    .people()
                    .map(|p| (p.handle.clone(), p.display_name()))
                    .collect();
                self.people.sort_by(|a, b| a.1.cmp(&b.1));

                let start = self
                    .start_person
                    .take()
                    .map(PersonHandle::new)
                    .or_else(|| self.people.first().map(|(handle, _)| handle.clone()));
                self.gallery.set_active(start);

                self.tree = Some(tree);
                self.tree_path = Some(path);
                self.load_error = None;
                self.active_media = None;
                self.hovered = None;
                self.menu_for = None;
                self.editor = None;
                self.rebuild_task()
            }
            Err(err) => {
                eprintln!("Failed to load tree file {}: {}", path.display(), err);
                self.load_error = Some(err.to_string());
                Task::none()
            }
        }
    }

    fn on_gallery(&mut self, message: gallery_pane::Message) -> Task<Message> {
        match message {
            gallery_pane::Message::Pressed(handle) => {
                self.menu_for = None;
                let is_double = matches!(
                    self.last_click.take(),
                    Some((last, at)) if last == handle && at.elapsed() <= DOUBLE_CLICK_WINDOW
                );
                if is_double {
                    self.open_editor(&handle);
                } else {
                    self.last_click = Some((handle, Instant::now()));
                }
                Task::none()
            }
            gallery_pane::Message::RightPressed(handle) => {
                self.menu_for = Some(handle);
                Task::none()
            }
            gallery_pane::Message::Entered(handle) => {
                self.hovered = Some(handle);
                Task::none()
            }
            gallery_pane::Message::Exited(handle) => {
                if self.hovered == Some(handle) {
                    self.hovered = None;
                }
                Task::none()
            }
            gallery_pane::Message::DismissMenu => {
                self.menu_for = None;
                Task::none()
            }
            gallery_pane::Message::Menu(action, handle) => {
                self.menu_for = None;
                self.on_menu_action(action, &handle)
            }
        }
    }

    fn on_menu_action(&mut self, action: MenuAction, handle: &MediaHandle) -> Task<Message> {
        match action {
            MenuAction::View => {
                if let Some(entry) = self.gallery.entry(handle) {
                    if let Err(err) = opener::open_with_default_app(&entry.full_path) {
                        eprintln!("Failed to open {}: {}", entry.full_path.display(), err);
                    }
                }
            }
            MenuAction::OpenFolder => {
                if let Some(entry) = self.gallery.entry(handle) {
                    if let Err(err) = opener::open_with_default_app(&entry.folder) {
                        eprintln!("Failed to open {}: {}", entry.folder.display(), err);
                    }
                }
            }
            MenuAction::Edit => self.open_editor(handle),
            MenuAction::MakeActive => self.active_media = Some(handle.clone()),
        }
        Task::none()
    }

    fn on_editor(&mut self, message: media_editor::Message) -> Task<Message> {
        match message {
            media_editor::Message::DescriptionChanged(value) => {
                if let Some(editor) = &mut self.editor {
                    editor.description = value;
                }
                Task::none()
            }
            media_editor::Message::PathChanged(value) => {
                if let Some(editor) = &mut self.editor {
                    editor.path = value;
                }
                Task::none()
            }
            media_editor::Message::MimeChanged(value) => {
                if let Some(editor) = &mut self.editor {
                    editor.mime = value;
                }
                Task::none()
            }
            media_editor::Message::Cancel => {
                self.editor = None;
                Task::none()
            }
            media_editor::Message::Save => {
                let Some(editor) = self.editor.take() else {
                    return Task::none();
                };
                if let Some(tree) = &mut self.tree {
                    tree.update_media(editor.to_media());
                }
                // The mutation above published `media-update`; the gallery
                // subscription turns it into a full re-collection.
                if self.gallery.needs_refresh() {
                    return self.rebuild_task();
                }
                Task::none()
            }
        }
    }

    /// Opens the media editor for `handle`, reading current record values.
    fn open_editor(&mut self, handle: &MediaHandle) {
        let Some(tree) = &self.tree else { return };
        match tree.media(handle) {
            Ok(media) => self.editor = Some(media_editor::State::from_media(media)),
            Err(err) => eprintln!("Cannot edit media: {}", err),
        }
    }

    /// Loads a tree file off the UI thread.
    fn load_tree_task(&mut self, path: PathBuf) -> Task<Message> {
        Task::perform(
            async move {
                let result = tree_file::load(&path);
                (path, result)
            },
            |(path, result)| Message::TreeLoaded { path, result },
        )
    }

    /// Kicks off a background collection run for the current active person.
    fn rebuild_task(&mut self) -> Task<Message> {
        let Some(tree) = self.tree.clone() else {
            return Task::none();
        };
        let active = self.gallery.active().cloned();
        self.collecting = true;
        Task::perform(
            async move { gallery::build_entries(&tree, active.as_ref()) },
            Message::GalleryRebuilt,
        )
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            tree: self.tree.as_ref(),
            gallery: &self.gallery,
            people: &self.people,
            active_media: self.active_media.as_ref(),
            hovered: self.hovered.as_ref(),
            menu_for: self.menu_for.as_ref(),
            editor: self.editor.as_ref(),
            collecting: self.collecting,
            load_error: self.load_error.as_deref(),
            thumbnail_size: self.config.thumbnail_size(),
            hover_size: self.config.hover_size(),
        })
    }
}
