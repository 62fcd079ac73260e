// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler mutates the relevant slice of `App` state and returns any
//! follow-up task (network call, clipboard write, focus operation).

use super::message::TaskError;
use super::{persistence, App, Message, Screen};
use crate::diagnostics::{self, DiagnosticsHandle};
use crate::i18n::I18n;
use crate::recipe::{Likes, RecipeId};
use crate::net::recipes::LikeResponse;
use crate::net::settings::{FailurePolicy, SettingsResponse};
use crate::share::{self, SharePlan, SystemShare};
use crate::ui::login;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::recipes;
use crate::ui::theming::ThemeMode;
use iced::advanced::widget::Id;
use iced::widget::operation;
use iced::Task;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

pub fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.menus) {
        navbar::Event::None => Task::none(),
        navbar::Event::Navigate(target) => handle_screen_switch(app, target.into()),
        navbar::Event::ToggleTheme => apply_theme(app, app.theme_mode.toggled()),
        navbar::Event::OpenLogin => {
            app.login = Some(login::LoginForm::default());
            operation::focus(Id::new(login::USERNAME_INPUT))
        }
        navbar::Event::Logout => {
            let username = app.session.display_name().to_string();
            app.session.clear();
            app.notifications.push(
                Notification::info("notification-logout").with_arg("username", username),
            );
            Task::none()
        }
    }
}

pub fn handle_screen_switch(app: &mut App, screen: Screen) -> Task<Message> {
    app.screen = screen;
    // The browse screen fetches on first entry; after that the cached list
    // stays until a search or category change refreshes it.
    if screen == Screen::Recipes && app.recipes.recipes.is_empty() && !app.recipes.loading {
        app.recipes.loading = true;
        return app.fetch_recipes_task();
    }
    Task::none()
}

pub fn handle_recipes_message(app: &mut App, message: recipes::Message) -> Task<Message> {
    match recipes::update(message, &mut app.recipes, Instant::now()) {
        recipes::Event::None => Task::none(),
        recipes::Event::FetchRequested => app.fetch_recipes_task(),
        recipes::Event::LikeRequested(id) => handle_like_request(app, id),
        recipes::Event::ShareRequested(id) => {
            let url = app.recipe_url(&id);
            let title = app
                .recipes
                .recipes
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.title.clone())
                .unwrap_or_default();
            let plan = share::share_recipe(&SystemShare, &title, &url);
            apply_share_plan(app, plan)
        }
        recipes::Event::CopyLinkRequested(id) => {
            let url = app.recipe_url(&id);
            app.notifications
                .push(Notification::success("notification-copied"));
            iced::clipboard::write(url)
        }
        recipes::Event::ThumbnailsRequested(batch) => thumbnail_fetch_tasks(app, batch),
    }
}

/// One download task per promoted thumbnail.
fn thumbnail_fetch_tasks(app: &App, batch: Vec<(RecipeId, String)>) -> Task<Message> {
    let tasks = batch.into_iter().map(|(id, url)| {
        let client = app.recipe_client.clone();
        Task::perform(
            async move { client.fetch_thumbnail(&url).await.map_err(TaskError::from) },
            move |result| Message::ThumbnailFetched(id.clone(), result),
        )
    });
    Task::batch(tasks)
}

fn handle_like_request(app: &mut App, id: RecipeId) -> Task<Message> {
    if !app.session.is_authenticated() {
        app.notifications
            .push(Notification::warning("notification-login-required"));
        return Task::none();
    }
    let Some(token) = app.session.resolve_csrf_token().cloned() else {
        app.notifications
            .push(Notification::warning("notification-login-required"));
        return Task::none();
    };

    let client = app.recipe_client.clone();
    let task_id = id.clone();
    Task::perform(
        async move { client.toggle_like(&task_id, &token).await.map_err(TaskError::from) },
        move |result| Message::LikeCompleted(id.clone(), result),
    )
}

fn apply_share_plan(app: &mut App, plan: SharePlan) -> Task<Message> {
    match plan {
        SharePlan::Done => Task::none(),
        SharePlan::CopyToClipboard(text) => {
            app.notifications
                .push(Notification::success("notification-copied"));
            iced::clipboard::write(text)
        }
        SharePlan::CopyAfterFailure { text, detail } => {
            app.diagnostics
                .log(diagnostics::Event::ShareFailure { detail });
            app.notifications
                .push(Notification::success("notification-copied"));
            iced::clipboard::write(text)
        }
    }
}

pub fn handle_login_message(app: &mut App, message: login::Message) -> Task<Message> {
    let Some(form) = app.login.as_mut() else {
        return Task::none();
    };
    match login::update(message, form) {
        login::Event::None => Task::none(),
        login::Event::Invalid(key) => {
            app.notifications.push(Notification::warning(key));
            Task::none()
        }
        login::Event::Submitted(session) => {
            let username = session.display_name().to_string();
            app.session = session;
            app.login = None;
            app.notifications.push(
                Notification::success("notification-welcome").with_arg("username", username),
            );
            Task::none()
        }
        login::Event::Cancelled => {
            app.login = None;
            Task::none()
        }
    }
}

pub fn handle_language_selected(app: &mut App, locale: LanguageIdentifier) -> Task<Message> {
    match language_sync_value(&mut app.i18n, &app.diagnostics, locale) {
        Some(value) => app.sync_setting("language", &value),
        None => Task::none(),
    }
}

/// Applies the locale change and returns the value to push to the server.
/// An unsupported or re-selected locale leaves the current one in place and
/// returns `None`; no request goes out for an unchanged setting.
pub(super) fn language_sync_value(
    i18n: &mut I18n,
    diagnostics: &DiagnosticsHandle,
    locale: LanguageIdentifier,
) -> Option<String> {
    let before = i18n.current_locale().clone();
    persistence::apply_language_change(i18n, diagnostics, locale);
    let after = i18n.current_locale();
    if *after == before {
        return None;
    }
    Some(after.to_string())
}

pub fn handle_theme_selected(app: &mut App, mode: ThemeMode) -> Task<Message> {
    apply_theme(app, mode)
}

fn apply_theme(app: &mut App, mode: ThemeMode) -> Task<Message> {
    app.theme_mode = mode;
    persistence::persist_theme(&app.diagnostics, mode);
    app.sync_setting("theme", mode.as_str())
}

pub fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    app.now = now;
    app.notifications.tick(now);
    if recipes::poll_search(&mut app.recipes, now).is_some() {
        return app.fetch_recipes_task();
    }
    Task::none()
}

pub fn handle_escape(app: &mut App) -> Task<Message> {
    if app.login.is_some() {
        app.login = None;
    } else {
        app.menus.handle_escape();
    }
    Task::none()
}

pub fn handle_tab(app: &mut App, shift: bool) -> Task<Message> {
    // Tab is trapped only while the login dialog is open.
    let Some(form) = app.login.as_mut() else {
        return Task::none();
    };
    let target = form.trap.advance(shift);
    if target == login::USERNAME_INPUT || target == login::TOKEN_INPUT {
        operation::focus(Id::new(target))
    } else {
        Task::none()
    }
}

pub fn handle_recipes_fetched(
    app: &mut App,
    result: Result<Vec<crate::recipe::Recipe>, TaskError>,
) -> Task<Message> {
    match result {
        Ok(recipes) => {
            app.recipes.set_recipes(recipes);
            // Cards at the top of the list are visible right away; fetch
            // their thumbnails without waiting for a scroll event.
            let promoted = app.recipes.promote_visible(0.0);
            return thumbnail_fetch_tasks(app, promoted);
        }
        Err(error) => {
            app.recipes.loading = false;
            app.diagnostics.log(diagnostics::Event::FetchFailure {
                detail: error.detail,
            });
            app.notifications
                .push(Notification::error("notification-recipes-load-failed"));
        }
    }
    Task::none()
}

pub fn handle_like_completed(
    app: &mut App,
    id: RecipeId,
    result: Result<LikeResponse, TaskError>,
) -> Task<Message> {
    match result {
        Ok(response) => {
            if let Some(recipe) = app.recipes.recipes.iter_mut().find(|r| r.id == id) {
                apply_like_response(recipe, &response, app.session.user_id.as_deref());
            }
        }
        Err(error) => {
            app.diagnostics.log(diagnostics::Event::FetchFailure {
                detail: error.detail,
            });
            app.notifications
                .push(Notification::error("notification-like-failed"));
        }
    }
    Task::none()
}

/// Folds the server's toggle result into the cached recipe. Membership lists
/// are edited in place so the heart state keeps tracking the user; plain
/// counts take the server's number.
fn apply_like_response(
    recipe: &mut crate::recipe::Recipe,
    response: &LikeResponse,
    user_id: Option<&str>,
) {
    match (&mut recipe.likes, response.action.as_deref(), user_id) {
        (Likes::Users(users), Some("liked"), Some(user)) => {
            if !users.iter().any(|u| u == user) {
                users.push(user.to_string());
            }
        }
        (Likes::Users(users), Some("unliked"), Some(user)) => {
            users.retain(|u| u != user);
        }
        _ => {
            if let Some(count) = response.count {
                recipe.likes = Likes::Count(count);
            }
        }
    }
}

pub fn handle_thumbnail_fetched(
    app: &mut App,
    id: RecipeId,
    result: Result<Vec<u8>, TaskError>,
) -> Task<Message> {
    match result {
        Ok(bytes) => {
            app.recipes
                .thumbnails
                .insert(id, iced::widget::image::Handle::from_bytes(bytes));
        }
        Err(error) => {
            // Missing thumbnails are cosmetic; log and keep the placeholder.
            app.diagnostics.log(diagnostics::Event::FetchFailure {
                detail: error.detail,
            });
        }
    }
    Task::none()
}

pub fn handle_settings_synced(
    app: &mut App,
    result: Result<SettingsResponse, TaskError>,
) -> Task<Message> {
    match result {
        Ok(response) => {
            // The server composes the confirmation text; show it as-is.
            if let Some(message) = response.message {
                app.notifications
                    .push(Notification::verbatim(crate::ui::notifications::Kind::Success, message));
            }
        }
        Err(error) => {
            app.diagnostics.log(diagnostics::Event::SyncFailure {
                detail: error.detail,
            });
            if app.sync_policy == FailurePolicy::Toast {
                app.notifications.push(Notification::error(error.key));
            }
        }
    }
    Task::none()
}

pub fn handle_share_app(app: &mut App) -> Task<Message> {
    let plan = share::share_app(&SystemShare);
    apply_share_plan(app, plan)
}

pub fn handle_outside_click(app: &mut App) -> Task<Message> {
    if app.menus.any_dropdown_open() {
        app.menus.close_dropdowns();
    }
    Task::none()
}
