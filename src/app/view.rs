// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the empty state when no tree is loaded, otherwise the people
//! panel beside either the gallery or the media editor.

use super::Message;
use crate::db::MemoryTree;
use crate::domain::{MediaHandle, PersonHandle};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::gallery_pane;
use crate::ui::media_editor;
use crate::ui::person_panel;
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tree: Option<&'a MemoryTree>,
    pub gallery: &'a Gallery,
    pub people: &'a [(PersonHandle, String)],
    pub active_media: Option<&'a MediaHandle>,
    pub hovered: Option<&'a MediaHandle>,
    pub menu_for: Option<&'a MediaHandle>,
    pub editor: Option<&'a media_editor::State>,
    pub collecting: bool,
    pub load_error: Option<&'a str>,
    pub thumbnail_size: f32,
    pub hover_size: f32,
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.tree.is_none() {
        return view_empty(ctx.i18n, ctx.load_error);
    }

    let people = person_panel::view(person_panel::ViewContext {
        i18n: ctx.i18n,
        people: ctx.people,
        active: ctx.gallery.active(),
    })
    .map(Message::People);

    let main: Element<'_, Message> = if let Some(editor) = ctx.editor {
        media_editor::view(media_editor::ViewContext {
            i18n: ctx.i18n,
            state: editor,
        })
        .map(Message::Editor)
    } else if ctx.collecting {
        container(text(ctx.i18n.tr("collecting")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    } else if ctx.gallery.active().is_none() {
        container(text(ctx.i18n.tr("empty-no-person")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    } else {
        gallery_pane::view(gallery_pane::ViewContext {
            i18n: ctx.i18n,
            entries: ctx.gallery.entries(),
            hovered: ctx.hovered,
            menu_for: ctx.menu_for,
            active_media: ctx.active_media,
            thumbnail_size: ctx.thumbnail_size,
            hover_size: ctx.hover_size,
        })
        .map(Message::Gallery)
    };

    let content = Column::new()
        .push(view_header(&ctx))
        .push(main)
        .width(Length::Fill)
        .height(Length::Fill);

    Row::new()
        .push(people)
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Header row: tree name on the left, active media selection on the right.
fn view_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let name = ctx.tree.map(MemoryTree::name).unwrap_or_default();

    let mut row = Row::new()
        .spacing(8)
        .padding(10)
        .push(text(name).size(16))
        .push(Space::new().width(Length::Fill));

    if let Some(handle) = ctx.active_media {
        let label = ctx
            .gallery
            .entry(handle)
            .map(|entry| entry.description.clone())
            .unwrap_or_else(|| handle.to_string());
        row = row.push(
            text(format!("{}: {}", ctx.i18n.tr("active-media-label"), label)).size(14),
        );
    }

    row.into()
}

fn view_empty<'a>(i18n: &'a I18n, load_error: Option<&'a str>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(16)
        .push(text(i18n.tr("empty-no-tree")).size(20))
        .push(
            button(text(i18n.tr("empty-open-button")).size(14))
                .style(styles::primary)
                .padding([8, 16])
                .on_press(Message::OpenTreeDialog),
        )
        .push(text(i18n.tr("empty-drop-hint")).size(12));

    if let Some(error) = load_error {
        content = content.push(
            text(format!("{}: {}", i18n.tr("error-tree-load-failed"), error)).size(12),
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
