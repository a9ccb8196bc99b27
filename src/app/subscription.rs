// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are narrowed down to the two the page reacts to (window
//! close and Escape); timers only run while something on screen moves.

use super::Message;
use crate::app::config::{ANIMATION_TICK_MS, REVEAL_HORIZON_MS};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes window close requests and unhandled Escape presses.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        match (event, status) {
            (
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Escape),
                    ..
                }),
                event::Status::Ignored,
            ) => Some(Message::EscapePressed),
            _ => None,
        }
    })
}

/// Horizon after a reveal during which entrance animations may still run.
#[must_use]
pub fn reveal_horizon() -> Duration {
    Duration::from_millis(REVEAL_HORIZON_MS)
}

/// Redraw tick for entrance and hover animations.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::AnimationFrame)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
