// SPDX-License-Identifier: MPL-2.0
//! Reusable UI pieces shared across page sections.
//!
//! - [`reveal`] - Applies an animation [`Frame`](crate::ui::animation::Frame)
//!   to any element
//! - [`heading`] - Centered section title with its intro line, and pill chips

pub mod heading;
pub mod reveal;

pub use heading::{chip, section_heading};
pub use reveal::{animated, bounded};
