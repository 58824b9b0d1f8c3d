// SPDX-License-Identifier: MPL-2.0
//! The gallery pane: a vertical, scrollable list of media thumbnails.
//!
//! Each entry shows the thumbnail above its description, enlarges while
//! hovered, and carries the interactions of the original gallery: a press
//! (double-press edits), a right press opening a context menu with View /
//! Open Containing Folder / Edit / Make Active Media, and a tooltip hint.

use crate::domain::MediaHandle;
use crate::gallery::GalleryEntry;
use crate::i18n::fluent::I18n;
use crate::ui::styles;
use iced::widget::{
    button, container, image, mouse_area, rule, scrollable, text, tooltip, Column,
};
use iced::{Element, Length};

/// Width of context-menu entries, wide enough for the longest label.
const MENU_WIDTH: f32 = 220.0;

/// Context-menu actions on one media entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    View,
    OpenFolder,
    Edit,
    MakeActive,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Left press on a thumbnail; the app turns two quick ones into an edit.
    Pressed(MediaHandle),
    /// Right press: open the context menu for this entry.
    RightPressed(MediaHandle),
    Entered(MediaHandle),
    Exited(MediaHandle),
    Menu(MenuAction, MediaHandle),
    DismissMenu,
}

/// Everything the pane needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entries: &'a [GalleryEntry],
    pub hovered: Option<&'a MediaHandle>,
    pub menu_for: Option<&'a MediaHandle>,
    pub active_media: Option<&'a MediaHandle>,
    pub thumbnail_size: f32,
    pub hover_size: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.entries.is_empty() {
        return container(text(ctx.i18n.tr("empty-no-media")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let mut column = Column::new().spacing(10).padding(10);
    for entry in ctx.entries {
        column = column.push(entry_view(&ctx, entry));
    }

    scrollable(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn entry_view<'a>(ctx: &ViewContext<'a>, entry: &'a GalleryEntry) -> Element<'a, Message> {
    let hovered = ctx.hovered == Some(&entry.handle);
    let width = if hovered {
        ctx.hover_size
    } else {
        ctx.thumbnail_size
    };

    let visual: Element<'a, Message> = if entry.is_image() {
        image(entry.full_path.clone())
            .width(Length::Fixed(width))
            .into()
    } else {
        container(text(ctx.i18n.tr("no-preview")).size(12))
            .width(Length::Fixed(width))
            .height(Length::Fixed(width * 0.75))
            .center_x(Length::Fixed(width))
            .center_y(Length::Fixed(width * 0.75))
            .style(styles::placeholder)
            .into()
    };

    let visual = if ctx.active_media == Some(&entry.handle) {
        container(visual).style(styles::active_frame).padding(2).into()
    } else {
        visual
    };

    let area = mouse_area(visual)
        .on_press(Message::Pressed(entry.handle.clone()))
        .on_right_press(Message::RightPressed(entry.handle.clone()))
        .on_enter(Message::Entered(entry.handle.clone()))
        .on_exit(Message::Exited(entry.handle.clone()));

    let hinted = tooltip(
        area,
        text(ctx.i18n.tr("thumb-tooltip")).size(12),
        tooltip::Position::Bottom,
    );

    let mut item = Column::new()
        .spacing(4)
        .push(hinted)
        .push(text(entry.description.as_str()).size(14));

    if ctx.menu_for == Some(&entry.handle) {
        item = item.push(context_menu(ctx.i18n, entry));
    }

    item.into()
}

/// The right-click menu, rendered inline under its entry.
fn context_menu<'a>(i18n: &'a I18n, entry: &'a GalleryEntry) -> Element<'a, Message> {
    let item = |label: String, action: MenuAction| {
        button(text(label).size(13))
            .width(Length::Fixed(MENU_WIDTH))
            .style(styles::menu_item)
            .on_press(Message::Menu(action, entry.handle.clone()))
    };

    let menu = Column::new()
        .push(item(i18n.tr("menu-view"), MenuAction::View))
        .push(item(
            i18n.tr("menu-open-containing-folder"),
            MenuAction::OpenFolder,
        ))
        .push(rule::horizontal(1))
        .push(item(i18n.tr("menu-edit"), MenuAction::Edit))
        .push(rule::horizontal(1))
        .push(item(
            i18n.tr("menu-make-active-media"),
            MenuAction::MakeActive,
        ))
        .width(Length::Fixed(MENU_WIDTH));

    container(menu).style(styles::panel).padding(2).into()
}
