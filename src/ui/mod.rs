// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Sections
//!
//! - [`header`] - Fixed navigation bar with the theme toggle
//! - [`home`] - Hero with call-to-action buttons and social links
//! - [`about`] - Bio, feature cards and stats
//! - [`skills`] - Animated skill bars
//! - [`projects`] - Project grid and detail modal
//! - [`timeline`] - Experience timeline
//! - [`contact_form`] - Contact form with validation and delivery status
//! - [`footer`] - Quick links, social links and copyright
//!
//! # Shared Infrastructure
//!
//! - [`animation`] - Reveal, stagger and hover transitions
//! - [`components`] - Reusable UI pieces (section headings, chips, reveal wrappers)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (spacing, sizing, typography)
//! - [`theme`] - Color helpers
//! - [`theming`] - Light/Dark theme state and persistence
//! - [`notifications`] - Toast notification system for user feedback

pub mod about;
pub mod animation;
pub mod components;
pub mod contact_form;
pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod home;
pub mod notifications;
pub mod projects;
pub mod skills;
pub mod styles;
pub mod theme;
pub mod theming;
pub mod timeline;
