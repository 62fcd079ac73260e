// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and mouse events are mapped to top-level messages here:
//! Escape and Tab for menu and focus handling, ignored mouse presses for
//! outside-click dismissal of the dropdown menus.

use super::Message;
use iced::{event, keyboard, mouse, time, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
///
/// Mouse presses are only forwarded when no widget claimed them; a press on
/// a menu item reaches its button, anything else counts as a click outside.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match key.as_ref() {
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    Some(Message::EscapePressed)
                }
                keyboard::Key::Named(keyboard::key::Named::Tab) => Some(Message::TabPressed {
                    shift: modifiers.shift(),
                }),
                _ => None,
            }
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => match status {
            event::Status::Ignored => Some(Message::OutsideClick),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates a periodic tick subscription for toast auto-dismiss and search
/// debounce polling. Idle when neither is pending.
pub fn create_tick_subscription(
    notifications_active: bool,
    debounce_pending: bool,
) -> Subscription<Message> {
    if notifications_active || debounce_pending {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
