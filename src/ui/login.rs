// SPDX-License-Identifier: MPL-2.0
//! Login dialog.
//!
//! The dialog does not authenticate; it accepts a username and a security
//! token issued by the website and hands them to the parent. While it is
//! open, Tab focus cycles through its fields and never escapes the dialog.

use crate::i18n::I18n;
use crate::session::{CsrfToken, Session};
use crate::ui::design_tokens::{border, radius, shadow, spacing, typography};
use crate::ui::focus::FocusTrap;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text_input, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

pub const USERNAME_INPUT: &str = "login-username";
pub const TOKEN_INPUT: &str = "login-token";
pub const SUBMIT_BUTTON: &str = "login-submit";
pub const CANCEL_BUTTON: &str = "login-cancel";

/// Shortest username the website accepts.
pub const MIN_USERNAME_LEN: usize = 3;

/// Dialog state. Exists only while the dialog is open.
#[derive(Debug)]
pub struct LoginForm {
    pub username: String,
    pub token: String,
    pub trap: FocusTrap,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            token: String::new(),
            trap: FocusTrap::new(vec![
                USERNAME_INPUT,
                TOKEN_INPUT,
                SUBMIT_BUTTON,
                CANCEL_BUTTON,
            ]),
        }
    }
}

/// Messages emitted by the dialog.
#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    TokenChanged(String),
    Submit,
    Cancel,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Validation failed; the key names the warning to show.
    Invalid(&'static str),
    /// The form validated; the parent installs the session.
    Submitted(Session),
    Cancelled,
}

/// Process a dialog message and return the corresponding event.
pub fn update(message: Message, form: &mut LoginForm) -> Event {
    match message {
        Message::UsernameChanged(value) => {
            form.username = value;
            // Typing means the field holds real focus; realign the trap so
            // the next Tab continues from here.
            form.trap.set_current(USERNAME_INPUT);
            Event::None
        }
        Message::TokenChanged(value) => {
            form.token = value;
            form.trap.set_current(TOKEN_INPUT);
            Event::None
        }
        Message::Submit => {
            let username = form.username.trim();
            if username.chars().count() < MIN_USERNAME_LEN {
                return Event::Invalid("notification-username-too-short");
            }
            let Some(token) = CsrfToken::new(form.token.trim()) else {
                return Event::Invalid("notification-token-missing");
            };
            // The dialog has no separate id field; the username stands in
            // until the server hands us a real id.
            let session = Session {
                user_id: Some(username.to_string()),
                username: Some(username.to_string()),
                form_token: None,
                cookie_token: Some(token),
            };
            Event::Submitted(session)
        }
        Message::Cancel => Event::Cancelled,
    }
}

/// Render the dialog as a centered card.
pub fn view<'a>(form: &'a LoginForm, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("login-title")).size(typography::TITLE_MD);

    let username_input = text_input(&i18n.tr("login-username-label"), &form.username)
        .id(iced::advanced::widget::Id::new(USERNAME_INPUT))
        .on_input(Message::UsernameChanged)
        .padding(spacing::XS);

    let token_input = text_input(&i18n.tr("login-token-label"), &form.token)
        .id(iced::advanced::widget::Id::new(TOKEN_INPUT))
        .on_input(Message::TokenChanged)
        .secure(true)
        .padding(spacing::XS);

    let submit = button(Text::new(i18n.tr("login-submit")))
        .on_press(Message::Submit)
        .style(button::primary)
        .padding(spacing::XS);

    let cancel = button(Text::new(i18n.tr("login-cancel")))
        .on_press(Message::Cancel)
        .style(button::secondary)
        .padding(spacing::XS);

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(submit)
        .push(cancel);

    let card = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(username_input)
        .push(token_input)
        .push(buttons);

    Container::new(
        Container::new(card)
            .width(Length::Fixed(360.0))
            .padding(spacing::MD)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.base.color.into()),
                border: Border {
                    radius: radius::MD.into(),
                    width: border::WIDTH_SM,
                    color: theme.extended_palette().background.strong.color,
                },
                shadow: shadow::MD,
                ..Default::default()
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(|theme: &Theme| container::Style {
        background: Some(ColorScheme::for_theme(theme).overlay_background.into()),
        ..Default::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> LoginForm {
        LoginForm {
            username: "asha".to_string(),
            token: "tok-123".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn submit_with_valid_fields_builds_a_session() {
        let mut form = filled_form();
        let event = update(Message::Submit, &mut form);
        match event {
            Event::Submitted(session) => {
                assert_eq!(session.username.as_deref(), Some("asha"));
                assert!(session.is_authenticated());
                assert!(session.resolve_csrf_token().is_some());
            }
            other => panic!("expected Submitted, got {other:?}"),
        }
    }

    #[test]
    fn short_username_is_rejected() {
        let mut form = filled_form();
        form.username = "ab".to_string();
        let event = update(Message::Submit, &mut form);
        assert!(matches!(
            event,
            Event::Invalid("notification-username-too-short")
        ));
    }

    #[test]
    fn username_is_trimmed_before_validation() {
        let mut form = filled_form();
        form.username = "  ab  ".to_string();
        let event = update(Message::Submit, &mut form);
        assert!(matches!(
            event,
            Event::Invalid("notification-username-too-short")
        ));
    }

    #[test]
    fn empty_token_is_rejected() {
        let mut form = filled_form();
        form.token = "   ".to_string();
        let event = update(Message::Submit, &mut form);
        assert!(matches!(event, Event::Invalid("notification-token-missing")));
    }

    #[test]
    fn cancel_emits_cancelled() {
        let mut form = filled_form();
        let event = update(Message::Cancel, &mut form);
        assert!(matches!(event, Event::Cancelled));
    }

    #[test]
    fn trap_cycles_over_the_four_fields() {
        let mut form = LoginForm::default();
        assert_eq!(form.trap.current(), USERNAME_INPUT);
        form.trap.advance(false);
        assert_eq!(form.trap.current(), TOKEN_INPUT);
        form.trap.advance(false);
        form.trap.advance(false);
        assert_eq!(form.trap.current(), CANCEL_BUTTON);
        form.trap.advance(false);
        assert_eq!(form.trap.current(), USERNAME_INPUT);
        form.trap.advance(true);
        assert_eq!(form.trap.current(), CANCEL_BUTTON);
    }

    #[test]
    fn typing_realigns_the_trap() {
        let mut form = LoginForm::default();
        form.trap.advance(false);
        form.trap.advance(false);
        assert_eq!(form.trap.current(), SUBMIT_BUTTON);

        let _ = update(Message::TokenChanged("t".to_string()), &mut form);
        assert_eq!(form.trap.current(), TOKEN_INPUT);
        assert_eq!(form.trap.advance(false), SUBMIT_BUTTON);
    }

    #[test]
    fn view_renders() {
        let form = LoginForm::default();
        let i18n = I18n::default();
        let _element = view(&form, &i18n);
    }
}
