// SPDX-License-Identifier: MPL-2.0
//! Settings view: language selection and theme mode.
//!
//! Picking either option applies it immediately, persists it to the config
//! file, and, when a session is present, pushes the change to the server.

use crate::app::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, Button, Column, Text},
    Element, Length,
};

pub fn view_settings(app: &App) -> Element<'_, Message> {
    let title = Text::new(app.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let mut language_selection_column = Column::new()
        .push(Text::new(app.i18n.tr("select-language-label")))
        .spacing(spacing::XS);

    for locale in &app.i18n.available_locales {
        let display_name = locale.to_string();

        let translated_name_key = format!("language-name-{locale}");
        let translated_name = app.i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{translated_name} ({display_name})")
        };

        let is_current_locale = app.i18n.current_locale() == locale;
        let mut button =
            Button::new(Text::new(button_text)).on_press(Message::LanguageSelected(locale.clone()));

        if is_current_locale {
            button = button.style(button::primary);
        } else {
            button = button.style(button::secondary);
        }

        language_selection_column = language_selection_column.push(button);
    }

    let mut theme_column = Column::new()
        .push(Text::new(app.i18n.tr("theme-label")))
        .spacing(spacing::XS);

    for (mode, key) in [(ThemeMode::Light, "theme-light"), (ThemeMode::Dark, "theme-dark")] {
        let mut button =
            Button::new(Text::new(app.i18n.tr(key))).on_press(Message::ThemeSelected(mode));

        if app.theme_mode == mode {
            button = button.style(button::primary);
        } else {
            button = button.style(button::secondary);
        }

        theme_column = theme_column.push(button);
    }

    Column::new()
        .push(title)
        .push(language_selection_column)
        .push(theme_column)
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
