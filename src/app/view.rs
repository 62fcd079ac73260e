// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen under the navbar, then stacks the login
//! dialog and the toast overlay on top.

use super::{App, Message, Screen};
use crate::recipe;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::login;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::recipes::{self, ViewContext as RecipesViewContext};
use crate::ui::settings;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Renders the full application view from the current state.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        state: app.menus,
        theme_mode: app.theme_mode,
        session: &app.session,
        notifications: &app.notifications,
        active_target: app.screen.nav_target(),
    })
    .map(Message::Navbar);

    let screen_view: Element<'_, Message> = match app.screen {
        Screen::Home => view_home(app),
        Screen::Recipes => recipes::view(RecipesViewContext {
            i18n: &app.i18n,
            state: &app.recipes,
            session: &app.session,
        })
        .map(Message::Recipes),
        Screen::Settings => settings::view_settings(app),
    };

    let base = Column::new()
        .push(navbar_view)
        .push(
            Container::new(screen_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(base);

    if let Some(form) = &app.login {
        layers = layers.push(login::view(form, &app.i18n).map(Message::Login));
    }

    layers = layers.push(
        Toast::view_overlay(&app.notifications, &app.i18n, app.now).map(Message::Notification),
    );

    layers.into()
}

fn view_home(app: &App) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(Text::new(app.i18n.tr("app-title")).size(typography::TITLE_LG))
        .push(Text::new(app.i18n.tr("tagline")).size(typography::BODY_LG))
        .push(
            button(Text::new(app.i18n.tr("share-button")))
                .on_press(Message::ShareApp)
                .style(button::secondary)
                .padding(spacing::XS),
        );

    let trending = recipe::trending(&app.recipes.recipes, recipes::TRENDING_COUNT);
    if !trending.is_empty() {
        let mut row = Row::new().spacing(spacing::SM);
        for recipe in trending {
            row = row.push(
                Text::new(format!("🔥 {} ({})", recipe.title, recipe.likes_count()))
                    .size(typography::BODY),
            );
        }
        content = content
            .push(Text::new(app.i18n.tr("trending-title")).size(typography::TITLE_SM))
            .push(row);
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
