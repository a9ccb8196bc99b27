// SPDX-License-Identifier: MPL-2.0
//! Entrance and hover animations.
//!
//! A [`Preset`] names a transition; [`preset`] looks up its [`Transition`],
//! which is sampled into a [`Frame`] (opacity, offset, scale) for a given
//! elapsed time. Iced widgets have no transform, so views apply frames by
//! fading colors ([`crate::ui::theme::faded`]) and shifting padding
//! ([`Frame::padding`]).
//!
//! Scroll-triggered reveals are driven by a [`ViewportObserver`] which maps
//! a [`ScrollSample`] to the regions currently on screen, and a
//! [`RevealTracker`] which remembers when each region first appeared.

use crate::app::config::defaults::STAGGER_STEP_MS;
use iced::{Padding, Vector};
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Named transition catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    FadeIn,
    SlideUp,
    SlideDown,
    SlideRight,
    ScrollReveal,
    /// Parent of staggered children; the parent itself only fades.
    StaggerContainer,
    HoverScale,
}

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-out.
    #[default]
    EaseOut,
    /// Cubic ease-in-out.
    EaseInOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Visual state of an animated element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    /// Displacement from the resting position, in logical pixels.
    pub offset: Vector,
    pub scale: f32,
}

impl Frame {
    /// Resting state: fully opaque, in place, unscaled.
    pub const SETTLED: Frame = Frame {
        opacity: 1.0,
        offset: Vector::ZERO,
        scale: 1.0,
    };

    fn lerp(from: Frame, to: Frame, t: f32) -> Frame {
        Frame {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            offset: Vector::new(
                from.offset.x + (to.offset.x - from.offset.x) * t,
                from.offset.y + (to.offset.y - from.offset.y) * t,
            ),
            scale: from.scale + (to.scale - from.scale) * t,
        }
    }

    /// Padding that displaces content by `offset` inside a box sized for
    /// the whole `travel` of its transition (the `from` offset), so layout
    /// size never changes while the offset animates.
    #[must_use]
    pub fn padding(&self, travel: Vector) -> Padding {
        let dx = self.offset.x.clamp(travel.x.min(0.0), travel.x.max(0.0));
        let dy = self.offset.y.clamp(travel.y.min(0.0), travel.y.max(0.0));
        Padding {
            top: dy - travel.y.min(0.0),
            bottom: travel.y.max(0.0) - dy,
            left: dx - travel.x.min(0.0),
            right: travel.x.max(0.0) - dx,
        }
    }
}

/// Transition descriptor: animates from `from` to `to` over `duration`,
/// starting after `delay`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub from: Frame,
    pub to: Frame,
    pub easing: Easing,
}

impl Transition {
    const fn entrance(duration_ms: u64, dx: f32, dy: f32) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::ZERO,
            from: Frame {
                opacity: 0.0,
                offset: Vector::new(dx, dy),
                scale: 1.0,
            },
            to: Frame::SETTLED,
            easing: Easing::EaseOut,
        }
    }

    /// Eased timer with settled frames; only [`Transition::progress`] moves.
    #[must_use]
    pub const fn timed(duration_ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::ZERO,
            from: Frame::SETTLED,
            to: Frame::SETTLED,
            easing: Easing::EaseOut,
        }
    }

    /// Same transition, started `delay` later.
    #[must_use]
    pub fn delayed(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Eased progress in `0.0..=1.0` after `elapsed`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        self.easing
            .apply(running.as_secs_f32() / self.duration.as_secs_f32())
    }

    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Frame {
        Frame::lerp(self.from, self.to, self.progress(elapsed))
    }

    /// Time until the final frame is reached.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }
}

/// Looks up the transition of a preset.
#[must_use]
pub fn preset(preset: Preset) -> Transition {
    match preset {
        Preset::FadeIn => Transition::entrance(600, 0.0, 0.0),
        Preset::SlideUp => Transition::entrance(500, 0.0, 20.0),
        Preset::SlideDown => Transition::entrance(500, 0.0, -20.0),
        Preset::SlideRight => Transition::entrance(500, -20.0, 0.0),
        Preset::ScrollReveal => Transition::entrance(600, 0.0, 24.0),
        Preset::StaggerContainer => Transition::entrance(400, 0.0, 0.0),
        Preset::HoverScale => Transition {
            duration: Duration::from_millis(200),
            delay: Duration::ZERO,
            from: Frame::SETTLED,
            to: Frame {
                scale: 1.05,
                ..Frame::SETTLED
            },
            easing: Easing::EaseInOut,
        },
    }
}

/// Start delay of the `index`-th child of a stagger container.
#[must_use]
pub fn stagger_delay(index: usize) -> Duration {
    let index = u64::try_from(index).unwrap_or(u64::MAX);
    Duration::from_millis(STAGGER_STEP_MS.saturating_mul(index))
}

/// One observation of a scrollable's viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    /// Absolute vertical scroll offset.
    pub offset_y: f32,
    pub viewport_height: f32,
    /// Total content height; `0.0` when not measured yet.
    pub content_height: f32,
}

/// Reports which regions of a scrolled page are on screen.
pub trait ViewportObserver<K> {
    /// Regions intersecting the viewport of `sample`, in page order.
    fn visible(&self, sample: &ScrollSample) -> Vec<K>;
}

/// Observer that places regions using estimated heights, scaled so their
/// sum matches the measured content height.
#[derive(Debug, Clone)]
pub struct EstimatedLayout<K> {
    regions: Vec<(K, f32)>,
    /// Portion of the viewport a region must reach into before it counts.
    margin: f32,
}

impl<K: Copy> EstimatedLayout<K> {
    #[must_use]
    pub fn new(regions: Vec<(K, f32)>) -> Self {
        Self {
            regions,
            margin: 0.1,
        }
    }

    /// Sum of the unscaled region heights.
    #[must_use]
    pub fn estimated_height(&self) -> f32 {
        self.regions.iter().map(|(_, h)| h).sum()
    }

    /// Estimated top edge of `key` in a page of `content_height`.
    pub fn top_of(&self, key: K, content_height: f32) -> Option<f32>
    where
        K: PartialEq,
    {
        let scale = self.scale(content_height);
        let mut top = 0.0;
        for (region, height) in &self.regions {
            if *region == key {
                return Some(top);
            }
            top += height * scale;
        }
        None
    }

    fn scale(&self, content_height: f32) -> f32 {
        let estimated = self.estimated_height();
        if content_height > 0.0 && estimated > 0.0 {
            content_height / estimated
        } else {
            1.0
        }
    }
}

impl<K: Copy> ViewportObserver<K> for EstimatedLayout<K> {
    fn visible(&self, sample: &ScrollSample) -> Vec<K> {
        let scale = self.scale(sample.content_height);
        let inset = sample.viewport_height * self.margin;
        let view_top = sample.offset_y + inset;
        let view_bottom = sample.offset_y + sample.viewport_height - inset;

        let mut top = 0.0;
        let mut visible = Vec::new();
        for (key, height) in &self.regions {
            let bottom = top + height * scale;
            if bottom > view_top && top < view_bottom {
                visible.push(*key);
            }
            top = bottom;
        }
        visible
    }
}

/// Remembers when each region was first revealed (`once` semantics: a
/// region never hides again) and yields animation frames for it.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    revealed: HashMap<K, Instant>,
    enabled: bool,
}

impl<K: Copy + Eq + Hash> RevealTracker<K> {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            revealed: HashMap::new(),
            enabled,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Marks `key` as revealed at `now`. Returns `false` if it already was.
    pub fn reveal(&mut self, key: K, now: Instant) -> bool {
        if self.revealed.contains_key(&key) {
            return false;
        }
        self.revealed.insert(key, now);
        true
    }

    /// Feeds one viewport sample; returns the regions revealed by it.
    pub fn observe(
        &mut self,
        observer: &impl ViewportObserver<K>,
        sample: &ScrollSample,
        now: Instant,
    ) -> Vec<K> {
        observer
            .visible(sample)
            .into_iter()
            .filter(|key| self.reveal(*key, now))
            .collect()
    }

    #[must_use]
    pub fn is_revealed(&self, key: K) -> bool {
        self.revealed.contains_key(&key)
    }

    /// Time since `key` was revealed, if it was.
    #[must_use]
    pub fn elapsed(&self, key: K, now: Instant) -> Option<Duration> {
        self.revealed
            .get(&key)
            .map(|at| now.saturating_duration_since(*at))
    }

    /// Frame of `transition` for the region `key`.
    ///
    /// Unrevealed regions sit at the transition's first frame; with
    /// animations disabled every frame is the final one.
    #[must_use]
    pub fn frame(&self, key: K, transition: &Transition, now: Instant) -> Frame {
        if !self.enabled {
            return transition.to;
        }
        match self.elapsed(key, now) {
            Some(elapsed) => transition.sample(elapsed),
            None => transition.from,
        }
    }

    /// Eased progress of `transition` for `key`, `1.0` when disabled.
    #[must_use]
    pub fn progress(&self, key: K, transition: &Transition, now: Instant) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        self.elapsed(key, now)
            .map_or(0.0, |elapsed| transition.progress(elapsed))
    }

    /// Whether some revealed region is younger than `horizon`.
    #[must_use]
    pub fn is_animating(&self, horizon: Duration, now: Instant) -> bool {
        self.enabled
            && self
                .revealed
                .values()
                .any(|at| now.saturating_duration_since(*at) < horizon)
    }
}

/// Read-only view of a [`RevealTracker`] at one instant, handed to views.
#[derive(Debug, Clone, Copy)]
pub struct Motion<'a, K> {
    tracker: &'a RevealTracker<K>,
    now: Instant,
}

impl<'a, K: Copy + Eq + Hash> Motion<'a, K> {
    #[must_use]
    pub fn new(tracker: &'a RevealTracker<K>, now: Instant) -> Self {
        Self { tracker, now }
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Frame of `preset` for the region `key`.
    #[must_use]
    pub fn frame(&self, key: K, p: Preset) -> Frame {
        self.tracker.frame(key, &preset(p), self.now)
    }

    /// Frame of `preset` for the `index`-th staggered child of `key`.
    #[must_use]
    pub fn staggered(&self, key: K, p: Preset, index: usize) -> Frame {
        self.tracker
            .frame(key, &preset(p).delayed(stagger_delay(index)), self.now)
    }

    #[must_use]
    pub fn progress(&self, key: K, transition: &Transition) -> f32 {
        self.tracker.progress(key, transition, self.now)
    }
}

/// Hover-scale state of at most one element.
#[derive(Debug, Clone)]
pub struct HoverTracker<K> {
    hovered: Option<(K, Instant)>,
}

impl<K> Default for HoverTracker<K> {
    fn default() -> Self {
        Self { hovered: None }
    }
}

impl<K: Copy + PartialEq> HoverTracker<K> {
    pub fn enter(&mut self, key: K, now: Instant) {
        if self.hovered.map(|(k, _)| k) != Some(key) {
            self.hovered = Some((key, now));
        }
    }

    /// Clears the hover if it is still on `key`.
    pub fn exit(&mut self, key: K) {
        if self.hovered.is_some_and(|(k, _)| k == key) {
            self.hovered = None;
        }
    }

    #[must_use]
    pub fn hovered(&self) -> Option<K> {
        self.hovered.map(|(k, _)| k)
    }

    #[must_use]
    pub fn scale(&self, key: K, now: Instant) -> f32 {
        match self.hovered {
            Some((k, since)) if k == key => preset(Preset::HoverScale)
                .sample(now.saturating_duration_since(since))
                .scale,
            _ => 1.0,
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.hovered.is_some_and(|(_, since)| {
            !preset(Preset::HoverScale).is_finished(now.saturating_duration_since(since))
        })
    }
}
