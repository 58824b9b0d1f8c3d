// SPDX-License-Identifier: MPL-2.0
//! People panel: selects the active person driving the gallery.
//!
//! This stands in for the host application's active-person signal; picking a
//! row re-runs the collection for that person.

use crate::domain::PersonHandle;
use crate::i18n::fluent::I18n;
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Selected(PersonHandle),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// `(handle, display name)` pairs, already sorted for display.
    pub people: &'a [(PersonHandle, String)],
    pub active: Option<&'a PersonHandle>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(2);
    for (handle, name) in ctx.people {
        let selected = ctx.active == Some(handle);
        let style = if selected {
            styles::person_row_selected
        } else {
            styles::person_row
        };
        rows = rows.push(
            button(text(name.as_str()).size(14))
                .width(Length::Fill)
                .style(style)
                .on_press(Message::Selected(handle.clone())),
        );
    }

    let content = Column::new()
        .spacing(8)
        .padding(10)
        .push(text(ctx.i18n.tr("people-heading")).size(16))
        .push(scrollable(rows).height(Length::Fill));

    container(content)
        .width(Length::Fixed(220.0))
        .height(Length::Fill)
        .style(styles::panel)
        .into()
}
