// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.
//!
//! Colors derive from the active Iced `Theme` palette so the gallery stays
//! readable in both light and dark modes without hard-coding colors.

use iced::widget::{button, container};
use iced::{Background, Border, Theme};

/// Generic panel surface used for the people list and the media editor.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Frame drawn around the thumbnail of the active media selection.
pub fn active_frame(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        border: Border {
            color: palette.primary.strong.color,
            width: 2.0,
            radius: 2.0.into(),
        },
        ..container::Style::default()
    }
}

/// Placeholder box shown for media without an image preview.
pub fn placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        text_color: Some(palette.background.strong.text),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Context-menu entry: flat, highlighted on hover.
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette.primary.weak.color)),
            text_color: palette.primary.weak.text,
            ..button::Style::default()
        },
        _ => button::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            text_color: palette.background.weak.text,
            ..button::Style::default()
        },
    }
}

/// Person list row.
pub fn person_row(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette.background.strong.color)),
            text_color: palette.background.strong.text,
            ..button::Style::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette.background.base.text,
            ..button::Style::default()
        },
    }
}

/// Person list row for the active person.
pub fn person_row_selected(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(Background::Color(palette.primary.base.color)),
        text_color: palette.primary.base.text,
        ..button::Style::default()
    }
}

/// Primary action button (open tree, save).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette.primary.strong.color)),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        },
        _ => button::Style {
            background: Some(Background::Color(palette.primary.base.color)),
            text_color: palette.primary.base.text,
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        },
    }
}
