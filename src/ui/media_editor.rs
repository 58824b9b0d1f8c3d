// SPDX-License-Identifier: MPL-2.0
//! Media editor: edits one media record's description, path, and MIME type.
//!
//! Saving hands the edited record back to the tree, whose `media-update`
//! notification then triggers a gallery re-collection.

use crate::domain::{Media, MediaHandle};
use crate::i18n::fluent::I18n;
use crate::ui::styles;
use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{Element, Length};

/// Editing buffer for one media record.
#[derive(Debug, Clone)]
pub struct State {
    pub handle: MediaHandle,
    pub description: String,
    pub path: String,
    pub mime: String,
}

impl State {
    /// Starts an edit session from the record's current values.
    #[must_use]
    pub fn from_media(media: &Media) -> Self {
        Self {
            handle: media.handle.clone(),
            description: media.description.clone(),
            path: media.path.display().to_string(),
            mime: media.mime.clone().unwrap_or_default(),
        }
    }

    /// Builds the edited record. An empty MIME field becomes `None`.
    #[must_use]
    pub fn to_media(&self) -> Media {
        Media {
            handle: self.handle.clone(),
            description: self.description.clone(),
            path: self.path.clone().into(),
            mime: if self.mime.trim().is_empty() {
                None
            } else {
                Some(self.mime.trim().to_string())
            },
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    DescriptionChanged(String),
    PathChanged(String),
    MimeChanged(String),
    Save,
    Cancel,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

fn field(label: String, value: &str, on_input: fn(String) -> Message) -> Column<'_, Message> {
    Column::new()
        .spacing(4)
        .push(text(format!("{label}:")).size(13))
        .push(text_input("", value).on_input(on_input).padding(6).size(14))
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let buttons = Row::new()
        .spacing(8)
        .push(
            button(text(ctx.i18n.tr("editor-save")).size(14))
                .style(styles::primary)
                .on_press(Message::Save),
        )
        .push(
            button(text(ctx.i18n.tr("editor-cancel")).size(14))
                .style(styles::menu_item)
                .on_press(Message::Cancel),
        );

    let form = Column::new()
        .spacing(12)
        .padding(16)
        .max_width(480)
        .push(text(ctx.i18n.tr("editor-title")).size(18))
        .push(field(
            ctx.i18n.tr("editor-description"),
            &ctx.state.description,
            Message::DescriptionChanged,
        ))
        .push(field(
            ctx.i18n.tr("editor-path"),
            &ctx.state.path,
            Message::PathChanged,
        ))
        .push(field(
            ctx.i18n.tr("editor-mime"),
            &ctx.state.mime,
            Message::MimeChanged,
        ))
        .push(buttons);

    container(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::panel)
        .into()
}
