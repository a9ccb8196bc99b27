// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Contact**: simulated send delay, success banner lifetime, HTTP timeout
//! - **Animation**: reveal durations and stagger step
//! - **Scrolling**: threshold for the scroll-to-top button

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Delay of the simulated send collaborator (in milliseconds).
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

/// Maximum accepted simulated delay (in milliseconds).
pub const MAX_SUBMIT_DELAY_MS: u64 = 30_000;

/// How long the success banner stays before the form returns to idle (in seconds).
pub const DEFAULT_SUCCESS_RESET_SECS: u64 = 5;

/// Minimum success banner lifetime (in seconds).
pub const MIN_SUCCESS_RESET_SECS: u64 = 1;

/// Maximum success banner lifetime (in seconds).
pub const MAX_SUCCESS_RESET_SECS: u64 = 60;

/// Per-request timeout for the HTTP sender (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimum HTTP timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Whether reveal animations play at all.
pub const DEFAULT_ANIMATIONS_ENABLED: bool = true;

/// Delay between consecutive children of a stagger container (in milliseconds).
pub const STAGGER_STEP_MS: u64 = 100;

/// Frame interval of the animation tick (in milliseconds, ~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

/// How long after a region is revealed the animation tick keeps running
/// (in milliseconds). Covers the longest staggered entrance.
pub const REVEAL_HORIZON_MS: u64 = 2500;

// ==========================================================================
// Scrolling Defaults
// ==========================================================================

/// Absolute scroll offset after which the scroll-to-top button appears (in pixels).
pub const SCROLL_TOP_BUTTON_THRESHOLD: f32 = 300.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SUBMIT_DELAY_MS <= MAX_SUBMIT_DELAY_MS);

    assert!(MIN_SUCCESS_RESET_SECS > 0);
    assert!(MAX_SUCCESS_RESET_SECS >= MIN_SUCCESS_RESET_SECS);
    assert!(DEFAULT_SUCCESS_RESET_SECS >= MIN_SUCCESS_RESET_SECS);
    assert!(DEFAULT_SUCCESS_RESET_SECS <= MAX_SUCCESS_RESET_SECS);

    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    assert!(STAGGER_STEP_MS > 0);
    assert!(ANIMATION_TICK_MS > 0);
    assert!(REVEAL_HORIZON_MS > ANIMATION_TICK_MS);
    assert!(SCROLL_TOP_BUTTON_THRESHOLD > 0.0);
};
