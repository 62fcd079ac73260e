// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: bell menu, user menu, navigation drawer, and the
//! theme toggle.
//!
//! At most one of the bell and user dropdowns is open at a time. A click
//! outside both closes both. Escape closes the user menu and the drawer
//! unconditionally, whatever else is going on.

use crate::i18n::I18n;
use crate::session::Session;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::notifications::Manager;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Which dropdowns and panels are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub bell_open: bool,
    pub user_open: bool,
    pub drawer_open: bool,
}

impl MenuState {
    /// Whether either dropdown is open. Outside-click dismissal only
    /// matters while this holds.
    #[must_use]
    pub fn any_dropdown_open(&self) -> bool {
        self.bell_open || self.user_open
    }

    /// Closes both dropdowns. The drawer is not affected; it has its own
    /// trigger.
    pub fn close_dropdowns(&mut self) {
        self.bell_open = false;
        self.user_open = false;
    }

    /// Escape closes the user menu and the drawer, open or not.
    pub fn handle_escape(&mut self) {
        self.user_open = false;
        self.drawer_open = false;
    }
}

/// Drawer navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Recipes,
    Settings,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleBell,
    ToggleUser,
    ToggleDrawer,
    CloseDropdowns,
    Navigate(NavTarget),
    ToggleTheme,
    OpenLogin,
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(NavTarget),
    ToggleTheme,
    OpenLogin,
    Logout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, state: &mut MenuState) -> Event {
    match message {
        Message::ToggleBell => {
            state.bell_open = !state.bell_open;
            if state.bell_open {
                state.user_open = false;
            }
            Event::None
        }
        Message::ToggleUser => {
            state.user_open = !state.user_open;
            if state.user_open {
                state.bell_open = false;
            }
            Event::None
        }
        Message::ToggleDrawer => {
            // The trigger's active indicator reads this same flag, so the
            // panel and the indicator can never disagree.
            state.drawer_open = !state.drawer_open;
            Event::None
        }
        Message::CloseDropdowns => {
            state.close_dropdowns();
            Event::None
        }
        Message::Navigate(target) => {
            // Drawer links close the drawer before navigation proceeds.
            state.drawer_open = false;
            state.close_dropdowns();
            Event::Navigate(target)
        }
        Message::ToggleTheme => Event::ToggleTheme,
        Message::OpenLogin => {
            state.close_dropdowns();
            Event::OpenLogin
        }
        Message::Logout => {
            state.close_dropdowns();
            Event::Logout
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: MenuState,
    pub theme_mode: ThemeMode,
    pub session: &'a Session,
    pub notifications: &'a Manager,
    pub active_target: NavTarget,
}

/// Render the navigation bar, including any open dropdown or drawer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.state.bell_open {
        content = content.push(align_right(build_bell_dropdown(&ctx)));
    } else if ctx.state.user_open {
        content = content.push(align_right(build_user_dropdown(&ctx)));
    }

    if ctx.state.drawer_open {
        content = content.push(build_drawer(&ctx));
    }

    content.into()
}

fn align_right<'a>(element: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(element)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding([0.0, spacing::SM])
        .into()
}

/// Build the top bar: drawer toggle, title, then bell, theme toggle and
/// user button on the right.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let drawer_button = button(Text::new("☰").size(typography::TITLE_SM))
        .on_press(Message::ToggleDrawer)
        .padding(spacing::XS)
        .style(if ctx.state.drawer_open {
            active_trigger_style
        } else {
            trigger_style
        });

    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let bell_label = if ctx.notifications.history_len() > 0 {
        format!("🔔 {}", ctx.notifications.history_len())
    } else {
        "🔔".to_string()
    };
    let bell_button = button(Text::new(bell_label).size(typography::BODY_LG))
        .on_press(Message::ToggleBell)
        .padding(spacing::XS)
        .style(if ctx.state.bell_open {
            active_trigger_style
        } else {
            trigger_style
        });

    let theme_button = button(Text::new(ctx.theme_mode.toggle_glyph()).size(typography::BODY_LG))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(trigger_style);

    let user_button = button(Text::new(ctx.session.display_name()).size(typography::BODY))
        .on_press(Message::ToggleUser)
        .padding(spacing::XS)
        .style(if ctx.state.user_open {
            active_trigger_style
        } else {
            trigger_style
        });

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(drawer_button)
        .push(title)
        .push(Container::new(Text::new("")).width(Length::Fill))
        .push(bell_button)
        .push(theme_button)
        .push(user_button);

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

/// Build the bell dropdown listing recent notifications.
fn build_bell_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS);

    column = column.push(
        Text::new(ctx.i18n.tr("bell-title"))
            .size(typography::BODY_SM)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            }),
    );

    if ctx.notifications.history_len() == 0 {
        column = column.push(Text::new(ctx.i18n.tr("bell-empty")).size(typography::BODY));
    } else {
        for notification in ctx.notifications.history().take(5) {
            let line = format!(
                "{} {}",
                notification.kind().glyph(),
                notification.resolve_text(ctx.i18n)
            );
            column = column.push(Text::new(line).size(typography::BODY));
        }
    }

    dropdown_container(column.into())
}

/// Build the user dropdown: settings link plus login or logout.
fn build_user_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS);

    if ctx.session.is_authenticated() {
        column = column.push(
            Text::new(ctx.i18n.tr("menu-profile"))
                .size(typography::BODY_SM)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );
    }

    column = column.push(build_menu_item(
        ctx.i18n.tr("navbar-settings"),
        Message::Navigate(NavTarget::Settings),
    ));

    if ctx.session.is_authenticated() {
        column = column.push(build_menu_item(ctx.i18n.tr("menu-logout"), Message::Logout));
    } else {
        column = column.push(build_menu_item(ctx.i18n.tr("menu-login"), Message::OpenLogin));
    }

    dropdown_container(column.into())
}

/// Build the navigation drawer with one link per destination.
fn build_drawer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = [
        (NavTarget::Home, "navbar-home"),
        (NavTarget::Recipes, "navbar-recipes"),
        (NavTarget::Settings, "navbar-settings"),
    ];

    let mut column = Column::new().spacing(spacing::XXS);
    for (target, key) in links {
        let label = if target == ctx.active_target {
            format!("› {}", ctx.i18n.tr(key))
        } else {
            ctx.i18n.tr(key)
        };
        column = column.push(build_menu_item(label, Message::Navigate(target)));
    }

    Container::new(column)
        .width(Length::Fixed(sizing::DRAWER_WIDTH))
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

fn dropdown_container<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fixed(sizing::DROPDOWN_WIDTH))
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

/// Build a single menu item.
fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(menu_item_style)
        .into()
}

/// Style function for dropdown triggers in the top bar.
fn trigger_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

/// Style for a trigger whose panel is currently open.
fn active_trigger_style(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(palette.primary.weak.color.into()),
        text_color: palette.primary.weak.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style function for menu items.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_and_user_menus_are_mutually_exclusive() {
        let mut state = MenuState::default();

        update(Message::ToggleBell, &mut state);
        assert!(state.bell_open);
        assert!(!state.user_open);

        update(Message::ToggleUser, &mut state);
        assert!(state.user_open);
        assert!(!state.bell_open);

        update(Message::ToggleBell, &mut state);
        assert!(state.bell_open);
        assert!(!state.user_open);
    }

    #[test]
    fn toggling_an_open_menu_closes_it() {
        let mut state = MenuState::default();
        update(Message::ToggleBell, &mut state);
        update(Message::ToggleBell, &mut state);
        assert!(!state.bell_open);
        assert!(!state.user_open);
    }

    #[test]
    fn outside_click_closes_both_dropdowns() {
        let mut state = MenuState {
            bell_open: true,
            user_open: false,
            drawer_open: true,
        };
        update(Message::CloseDropdowns, &mut state);
        assert!(!state.bell_open);
        assert!(!state.user_open);
        // Outside clicks leave the drawer alone.
        assert!(state.drawer_open);
    }

    #[test]
    fn escape_closes_user_menu_and_drawer() {
        let mut state = MenuState {
            bell_open: false,
            user_open: true,
            drawer_open: true,
        };
        state.handle_escape();
        assert!(!state.user_open);
        assert!(!state.drawer_open);
    }

    #[test]
    fn escape_is_a_noop_when_nothing_is_open() {
        let mut state = MenuState::default();
        state.handle_escape();
        assert_eq!(state, MenuState::default());
    }

    #[test]
    fn drawer_toggle_flips_state() {
        let mut state = MenuState::default();
        update(Message::ToggleDrawer, &mut state);
        assert!(state.drawer_open);
        update(Message::ToggleDrawer, &mut state);
        assert!(!state.drawer_open);
    }

    #[test]
    fn drawer_link_closes_drawer_and_navigates() {
        let mut state = MenuState {
            bell_open: false,
            user_open: false,
            drawer_open: true,
        };
        let event = update(Message::Navigate(NavTarget::Recipes), &mut state);
        assert!(!state.drawer_open);
        assert!(matches!(event, Event::Navigate(NavTarget::Recipes)));
    }

    #[test]
    fn theme_toggle_emits_event_without_touching_menus() {
        let mut state = MenuState {
            bell_open: true,
            user_open: false,
            drawer_open: false,
        };
        let event = update(Message::ToggleTheme, &mut state);
        assert!(matches!(event, Event::ToggleTheme));
        assert!(state.bell_open);
    }

    #[test]
    fn login_and_logout_close_dropdowns() {
        let mut state = MenuState {
            bell_open: false,
            user_open: true,
            drawer_open: false,
        };
        let event = update(Message::OpenLogin, &mut state);
        assert!(!state.user_open);
        assert!(matches!(event, Event::OpenLogin));

        state.user_open = true;
        let event = update(Message::Logout, &mut state);
        assert!(!state.user_open);
        assert!(matches!(event, Event::Logout));
    }

    #[test]
    fn navbar_view_renders_in_every_menu_state() {
        let i18n = I18n::default();
        let session = Session::default();
        let notifications = Manager::new();

        for state in [
            MenuState::default(),
            MenuState {
                bell_open: true,
                ..Default::default()
            },
            MenuState {
                user_open: true,
                ..Default::default()
            },
            MenuState {
                drawer_open: true,
                ..Default::default()
            },
        ] {
            let _element = view(ViewContext {
                i18n: &i18n,
                state,
                theme_mode: ThemeMode::Light,
                session: &session,
                notifications: &notifications,
                active_target: NavTarget::Home,
            });
        }
    }
}
