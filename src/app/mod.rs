// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together localization, theming, the session, the
//! network clients, and the UI components, and translates messages into
//! side effects like config persistence or HTTP calls. Policy decisions
//! (token gating, sync failure handling, toast scheduling) stay close to
//! the main update loop so user-facing behavior is easy to audit.

mod message;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, TaskError};
pub use screen::Screen;

use crate::config::{self, Config, DEFAULT_SEARCH_DEBOUNCE_MS};
use crate::diagnostics::{self, DiagnosticsHandle};
use crate::i18n::I18n;
use crate::net::recipes::RecipeClient;
use crate::net::settings::{self, FailurePolicy, SettingsClient};
use crate::recipe::RecipeId;
use crate::session::{CsrfToken, Session};
use crate::ui::login::LoginForm;
use crate::ui::navbar::MenuState;
use crate::ui::notifications::Manager;
use crate::ui::recipes::RecipesState;
use crate::ui::theming::{resolve_theme, ThemeMode};
use iced::{Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging UI components, localization, the
/// session, and the network clients.
pub struct App {
    pub i18n: I18n,
    pub theme_mode: ThemeMode,
    screen: Screen,
    session: Session,
    menus: MenuState,
    recipes: RecipesState,
    notifications: Manager,
    diagnostics: DiagnosticsHandle,
    settings_client: SettingsClient,
    recipe_client: RecipeClient,
    server_url: String,
    sync_policy: FailurePolicy,
    login: Option<LoginForm>,
    /// Last tick instant; toast phases render relative to this.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("authenticated", &self.session.is_authenticated())
            .field("recipe_count", &self.recipes.recipes.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
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
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let server_url = config.server_url();
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::default(),
            screen: Screen::Home,
            session: Session::anonymous(),
            menus: MenuState::default(),
            recipes: RecipesState::new(Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS)),
            notifications: Manager::new(),
            diagnostics: DiagnosticsHandle::new(),
            settings_client: SettingsClient::new(server_url.clone()),
            recipe_client: RecipeClient::new(server_url.clone()),
            server_url,
            sync_policy: FailurePolicy::default(),
            login: None,
            now: Instant::now(),
        }
    }
}

impl App {
    /// Initializes application state from persisted config and CLI flags and
    /// kicks off the initial recipe fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let diagnostics = DiagnosticsHandle::new();
        let config = match config::load() {
            Ok(config) => config,
            Err(error) => {
                diagnostics.log(diagnostics::Event::ConfigWarning {
                    detail: format!("failed to load config: {error}"),
                });
                Config::default()
            }
        };

        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme_mode = resolve_theme(flags.theme.as_deref(), config.theme);
        let server_url = flags
            .server
            .clone()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| config.server_url());
        let debounce = Duration::from_millis(
            config
                .search_debounce_ms
                .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
        );

        // Development aid: inject an externally established session.
        let session = Session {
            user_id: flags.user.clone(),
            username: flags.user.clone(),
            form_token: None,
            cookie_token: flags.token.as_deref().and_then(CsrfToken::new),
        };

        let mut app = App {
            i18n,
            theme_mode,
            session,
            recipes: RecipesState::new(debounce),
            diagnostics,
            settings_client: SettingsClient::new(server_url.clone()),
            recipe_client: RecipeClient::new(server_url.clone()),
            server_url,
            sync_policy: config.sync_failure_policy,
            ..Self::default()
        };

        // Prefetch the recipe list so the home trending row has data.
        app.recipes.loading = true;
        let task = app.fetch_recipes_task();

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.is_active(),
            self.recipes.search_debouncer.is_pending(),
        );
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(self, navbar_message)
            }
            Message::Recipes(recipes_message) => {
                update::handle_recipes_message(self, recipes_message)
            }
            Message::Login(login_message) => update::handle_login_message(self, login_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::LanguageSelected(locale) => update::handle_language_selected(self, locale),
            Message::ThemeSelected(mode) => update::handle_theme_selected(self, mode),
            Message::Tick(now) => update::handle_tick(self, now),
            Message::EscapePressed => update::handle_escape(self),
            Message::TabPressed { shift } => update::handle_tab(self, shift),
            Message::OutsideClick => update::handle_outside_click(self),
            Message::ShareApp => update::handle_share_app(self),
            Message::RecipesFetched(result) => update::handle_recipes_fetched(self, result),
            Message::LikeCompleted(id, result) => {
                update::handle_like_completed(self, id, result)
            }
            Message::ThumbnailFetched(id, result) => {
                update::handle_thumbnail_fetched(self, id, result)
            }
            Message::SettingsSynced(result) => update::handle_settings_synced(self, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Canonical web URL of a recipe, used for share and copy-link.
    fn recipe_url(&self, id: &RecipeId) -> String {
        format!("{}/recipes/{}/", self.server_url, id.as_str())
    }

    /// Builds the task fetching the list with the current filters.
    fn fetch_recipes_task(&self) -> Task<Message> {
        let client = self.recipe_client.clone();
        let category = self.recipes.category.clone();
        let search = self.recipes.search_query.clone();
        Task::perform(
            async move {
                client
                    .fetch(&category, &search)
                    .await
                    .map_err(TaskError::from)
            },
            Message::RecipesFetched,
        )
    }

    /// Pushes one settings change to the server. Without a resolvable
    /// security token this is a no-op: no request is built or sent.
    fn sync_setting(&self, name: &str, value: &str) -> Task<Message> {
        let changes = vec![(name.to_string(), value.to_string())];
        let Some(body) = settings::plan_request(&self.session, &changes) else {
            return Task::none();
        };

        let client = self.settings_client.clone();
        let policy = self.sync_policy;
        Task::perform(
            async move {
                client
                    .update_with_policy(&body, policy)
                    .await
                    .map_err(TaskError::from)
            },
            Message::SettingsSynced,
        )
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::recipes::LikeResponse;
    use crate::net::settings::SettingsResponse;
    use crate::recipe::Recipe;
    use crate::ui::login;
    use crate::ui::navbar;
    use crate::ui::notifications::{Kind, Notification};
    use crate::ui::recipes;

    fn sync_error(detail: &str) -> TaskError {
        TaskError {
            key: "error-api-general",
            detail: detail.to_string(),
        }
    }

    fn recipe_json(id: &str, likes: &str) -> Recipe {
        serde_json::from_str(&format!(
            r#"{{"_id": "{id}", "title": "Recipe {id}", "likes": {likes}}}"#
        ))
        .expect("recipe json")
    }

    fn authenticated_app() -> App {
        let mut app = App::default();
        app.session = Session {
            user_id: Some("u1".to_string()),
            username: Some("asha".to_string()),
            form_token: None,
            cookie_token: CsrfToken::new("tok"),
        };
        app
    }

    #[test]
    fn theme_toggle_from_navbar_flips_mode() {
        let mut app = App::default();
        assert_eq!(app.theme_mode, ThemeMode::Light);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn language_selection_switches_locale() {
        let mut app = App::default();
        let hi: unic_langid::LanguageIdentifier = "hi".parse().unwrap();
        let _ = app.update(Message::LanguageSelected(hi.clone()));
        assert_eq!(app.i18n.current_locale(), &hi);
        assert_eq!(app.i18n.tr("navbar-recipes"), "रेसिपी");
    }

    #[test]
    fn unsupported_language_is_ignored() {
        let mut app = App::default();
        let fr: unic_langid::LanguageIdentifier = "fr".parse().unwrap();
        let _ = app.update(Message::LanguageSelected(fr));
        assert_eq!(app.i18n.current_locale().language.as_str(), "en");
    }

    #[test]
    fn unchanged_language_selection_plans_no_sync() {
        let mut app = App::default();
        let en: unic_langid::LanguageIdentifier = "en".parse().unwrap();
        app.i18n.set_locale(en.clone());
        let fr: unic_langid::LanguageIdentifier = "fr".parse().unwrap();
        assert_eq!(
            update::language_sync_value(&mut app.i18n, &app.diagnostics, fr),
            None
        );
        assert_eq!(
            update::language_sync_value(&mut app.i18n, &app.diagnostics, en),
            None
        );
        let hi: unic_langid::LanguageIdentifier = "hi".parse().unwrap();
        assert_eq!(
            update::language_sync_value(&mut app.i18n, &app.diagnostics, hi).as_deref(),
            Some("hi")
        );
    }

    #[test]
    fn navigation_from_drawer_switches_screen() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(
            navbar::NavTarget::Settings,
        )));
        assert_eq!(app.screen, Screen::Settings);
    }

    #[test]
    fn like_without_session_warns_instead_of_calling() {
        let mut app = App::default();
        let _ = app.update(Message::Recipes(recipes::Message::LikePressed(RecipeId(
            "r1".to_string(),
        ))));
        let visible = app.notifications.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind(), Kind::Warning);
    }

    #[test]
    fn login_flow_installs_session_and_welcomes() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::OpenLogin));
        assert!(app.login.is_some());

        let _ = app.update(Message::Login(login::Message::UsernameChanged(
            "asha".to_string(),
        )));
        let _ = app.update(Message::Login(login::Message::TokenChanged(
            "tok-1".to_string(),
        )));
        let _ = app.update(Message::Login(login::Message::Submit));

        assert!(app.login.is_none());
        assert!(app.session.is_authenticated());
        let visible = app.notifications.visible();
        assert_eq!(visible.len(), 1);
        assert!(visible[0].resolve_text(&app.i18n).contains("asha"));
    }

    #[test]
    fn invalid_login_keeps_dialog_open() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::OpenLogin));
        let _ = app.update(Message::Login(login::Message::UsernameChanged(
            "ab".to_string(),
        )));
        let _ = app.update(Message::Login(login::Message::Submit));
        assert!(app.login.is_some());
        assert!(!app.session.is_authenticated());
    }

    #[test]
    fn logout_clears_session() {
        let mut app = authenticated_app();
        let _ = app.update(Message::Navbar(navbar::Message::Logout));
        assert!(!app.session.is_authenticated());
        assert!(app.session.resolve_csrf_token().is_none());
    }

    #[test]
    fn escape_closes_login_dialog_before_menus() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::OpenLogin));
        app.menus.drawer_open = true;

        let _ = app.update(Message::EscapePressed);
        assert!(app.login.is_none());
        assert!(app.menus.drawer_open);

        let _ = app.update(Message::EscapePressed);
        assert!(!app.menus.drawer_open);
    }

    #[test]
    fn tab_cycles_login_focus_only_while_dialog_open() {
        let mut app = App::default();
        // No dialog: nothing to advance.
        let _ = app.update(Message::TabPressed { shift: false });

        let _ = app.update(Message::Navbar(navbar::Message::OpenLogin));
        let _ = app.update(Message::TabPressed { shift: false });
        let form = app.login.as_ref().unwrap();
        assert_eq!(form.trap.current(), login::TOKEN_INPUT);
    }

    #[test]
    fn outside_click_closes_open_dropdowns() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleBell));
        assert!(app.menus.bell_open);
        let _ = app.update(Message::OutsideClick);
        assert!(!app.menus.bell_open);
    }

    #[test]
    fn fetched_recipes_populate_state() {
        let mut app = App::default();
        let _ = app.update(Message::RecipesFetched(Ok(vec![
            recipe_json("a", "3"),
            recipe_json("b", "[]"),
        ])));
        assert_eq!(app.recipes.recipes.len(), 2);
        assert!(!app.recipes.loading);
    }

    #[test]
    fn fetched_recipes_promote_visible_thumbnails_eagerly() {
        let mut app = App::default();
        let recipe: Recipe = serde_json::from_str(
            r#"{"_id": "a", "title": "Poha", "likes": [], "image_url": "/media/a.jpg"}"#,
        )
        .expect("recipe json");
        let _ = app.update(Message::RecipesFetched(Ok(vec![recipe])));
        assert!(app.recipes.lazy.is_promoted(&RecipeId("a".to_string())));
    }

    #[test]
    fn fetch_failure_toasts_and_logs() {
        let mut app = App::default();
        let _ = app.update(Message::RecipesFetched(Err(sync_error("boom"))));
        assert_eq!(app.notifications.visible().len(), 1);
        assert_eq!(app.notifications.visible()[0].kind(), Kind::Error);
        assert_eq!(app.diagnostics.len(), 1);
    }

    #[test]
    fn like_completion_updates_cached_count() {
        let mut app = authenticated_app();
        let _ = app.update(Message::RecipesFetched(Ok(vec![recipe_json("a", "3")])));

        let response = LikeResponse {
            success: true,
            action: Some("liked".to_string()),
            count: Some(4),
            message: None,
        };
        let _ = app.update(Message::LikeCompleted(
            RecipeId("a".to_string()),
            Ok(response),
        ));
        assert_eq!(app.recipes.recipes[0].likes_count(), 4);
    }

    #[test]
    fn like_completion_toggles_user_membership() {
        let mut app = authenticated_app();
        let _ = app.update(Message::RecipesFetched(Ok(vec![recipe_json("a", "[]")])));

        let response = LikeResponse {
            success: true,
            action: Some("liked".to_string()),
            count: Some(1),
            message: None,
        };
        let _ = app.update(Message::LikeCompleted(
            RecipeId("a".to_string()),
            Ok(response),
        ));
        assert!(app.recipes.recipes[0].likes.contains("u1"));
    }

    #[test]
    fn sync_failure_is_silent_under_ignore_policy() {
        let mut app = App::default();
        assert_eq!(app.sync_policy, FailurePolicy::Ignore);
        let _ = app.update(Message::SettingsSynced(Err(sync_error("timeout"))));
        assert!(app.notifications.visible().is_empty());
        let logged = app.diagnostics.snapshot();
        assert!(matches!(
            logged.as_slice(),
            [diagnostics::TimestampedEvent {
                event: diagnostics::Event::SyncFailure { detail },
                ..
            }] if detail.contains("timeout")
        ));
    }

    #[test]
    fn sync_failure_toasts_under_toast_policy() {
        let mut app = App::default();
        app.sync_policy = FailurePolicy::Toast;
        let _ = app.update(Message::SettingsSynced(Err(sync_error("timeout"))));
        assert_eq!(app.notifications.visible().len(), 1);
        assert_eq!(app.notifications.visible()[0].kind(), Kind::Error);
        assert_eq!(app.diagnostics.len(), 1);
    }

    #[test]
    fn sync_success_shows_server_message_verbatim() {
        let mut app = App::default();
        let _ = app.update(Message::SettingsSynced(Ok(SettingsResponse {
            success: true,
            message: Some("Theme updated to dark".to_string()),
        })));
        let visible = app.notifications.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].resolve_text(&app.i18n), "Theme updated to dark");
    }

    #[test]
    fn sync_without_token_builds_no_request() {
        let app = App::default();
        let changes = vec![("theme".to_string(), "dark".to_string())];
        assert!(settings::plan_request(&app.session, &changes).is_none());
    }

    #[test]
    fn tick_advances_toast_lifecycle() {
        let mut app = App::default();
        app.notifications
            .push(Notification::info("notification-copied"));
        let created = app.notifications.visible()[0].created_at();

        let _ = app.update(Message::Tick(created + Duration::from_millis(100)));
        assert_eq!(app.notifications.visible().len(), 1);

        let _ = app.update(Message::Tick(created + Duration::from_millis(5400)));
        assert!(app.notifications.visible().is_empty());
    }

    #[test]
    fn tick_fires_debounced_search() {
        let mut app = App::default();
        let _ = app.update(Message::Recipes(recipes::Message::SearchChanged(
            "poha".to_string(),
        )));
        assert!(app.recipes.search_debouncer.is_pending());

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_millis(400)));
        assert!(!app.recipes.search_debouncer.is_pending());
        assert!(app.recipes.loading);
    }

    #[test]
    fn thumbnail_fetch_result_is_stored() {
        let mut app = App::default();
        let id = RecipeId("a".to_string());
        let _ = app.update(Message::ThumbnailFetched(id.clone(), Ok(vec![0u8; 8])));
        assert!(app.recipes.thumbnails.contains_key(&id));

        let _ = app.update(Message::ThumbnailFetched(
            RecipeId("b".to_string()),
            Err(sync_error("404")),
        ));
        // Failures only reach diagnostics.
        assert!(app.notifications.visible().is_empty());
        assert_eq!(app.diagnostics.len(), 1);
    }

    #[test]
    fn recipe_url_is_rooted_at_the_server() {
        let app = App::default();
        let url = app.recipe_url(&RecipeId("abc".to_string()));
        assert_eq!(url, format!("{}/recipes/abc/", app.server_url));
    }

    #[test]
    fn copy_link_pushes_success_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Recipes(recipes::Message::CopyLinkPressed(
            RecipeId("a".to_string()),
        )));
        let visible = app.notifications.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].resolve_text(&app.i18n), "Copied to clipboard!");
    }

    #[test]
    fn share_falls_back_to_clipboard_with_toast() {
        // Desktop share is unavailable; the plan degrades to clipboard.
        let mut app = App::default();
        let _ = app.update(Message::Recipes(recipes::Message::SharePressed(RecipeId(
            "a".to_string(),
        ))));
        let visible = app.notifications.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind(), Kind::Success);
    }

    #[test]
    fn view_renders_on_every_screen() {
        let mut app = App::default();
        for screen in [Screen::Home, Screen::Recipes, Screen::Settings] {
            app.screen = screen;
            let _element = app.view();
        }
    }
}
