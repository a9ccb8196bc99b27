// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Persistence warnings and contact send failures end up here. The
//! [`Manager`] owns the queue, [`Toast`] renders it as an overlay.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{message_text, Notification, NotificationId, Severity};
pub use toast::Toast;
