// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio rendered as a native desktop page
//! with the Iced GUI framework.
//!
//! It shows a hero, about, skills, projects, experience and contact section
//! in one scrolling column, with reveal animations, a persisted light/dark
//! theme, a project detail modal and a validated contact form.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod contact;
pub mod content;
pub mod error;
pub mod ui;
