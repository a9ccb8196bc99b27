// SPDX-License-Identifier: MPL-2.0
//! Page sections and the regions that animate independently.

use crate::ui::animation::EstimatedLayout;
use std::fmt;

/// Navigation targets of the header and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// Header order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Footer quick links.
    pub const QUICK_LINKS: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    /// Region the section starts at.
    #[must_use]
    pub fn region(self) -> Region {
        match self {
            Section::Home => Region::Hero,
            Section::About => Region::About,
            Section::Projects => Region::Projects,
            Section::Experience => Region::Experience,
            Section::Contact => Region::Contact,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Vertical slices of the page, top to bottom, each revealed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
    Footer,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Hero,
        Region::About,
        Region::Skills,
        Region::Projects,
        Region::Experience,
        Region::Contact,
        Region::Footer,
    ];

    /// Rough rendered height at the default window width.
    #[must_use]
    pub fn estimated_height(self) -> f32 {
        match self {
            Region::Hero => 760.0,
            Region::About => 1100.0,
            Region::Skills => 560.0,
            Region::Projects => 1500.0,
            Region::Experience => 1000.0,
            Region::Contact => 980.0,
            Region::Footer => 340.0,
        }
    }
}

/// Viewport observer for the whole page.
#[must_use]
pub fn page_layout() -> EstimatedLayout<Region> {
    EstimatedLayout::new(
        Region::ALL
            .iter()
            .map(|region| (*region, region.estimated_height()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::animation::{ScrollSample, ViewportObserver};

    #[test]
    fn home_starts_at_the_top() {
        let layout = page_layout();
        assert_eq!(layout.top_of(Section::Home.region(), 0.0), Some(0.0));
    }

    #[test]
    fn sections_are_in_page_order() {
        let layout = page_layout();
        let tops: Vec<f32> = Section::ALL
            .iter()
            .filter_map(|s| layout.top_of(s.region(), 8000.0))
            .collect();
        assert_eq!(tops.len(), Section::ALL.len());
        assert!(tops.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn first_screen_shows_the_hero() {
        let sample = ScrollSample {
            offset_y: 0.0,
            viewport_height: 720.0,
            content_height: 0.0,
        };
        assert_eq!(page_layout().visible(&sample).first(), Some(&Region::Hero));
    }

    #[test]
    fn labels_match_navigation_text() {
        let labels: Vec<_> = Section::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Home", "About", "Projects", "Experience", "Contact"]);
    }
}
