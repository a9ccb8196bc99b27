// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content.
//!
//! Everything shown on the page lives here as `'static` data. Views only
//! read from this module; nothing is ever mutated at runtime.

mod data;

use std::fmt;

/// Identifier of a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExperienceId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub description: &'static str,
    /// Remote cover image. Shown as a link; never downloaded.
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_link: &'static str,
    pub github_link: &'static str,
    pub category: &'static str,
}

impl Project {
    /// Technologies shown on a card: at most `limit`, plus how many were left out.
    #[must_use]
    pub fn visible_technologies(&self, limit: usize) -> (&'static [&'static str], usize) {
        let shown = self.technologies.len().min(limit);
        (
            &self.technologies[..shown],
            self.technologies.len() - shown,
        )
    }
}

/// Proficiency percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MAX: u8 = 100;

    /// Creates a level, clamping values above 100.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Fraction in `0.0..=1.0`, for progress bars.
    #[must_use]
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / f32::from(Self::MAX)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub id: ExperienceId,
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Twitter,
    Email,
    Website,
}

impl SocialKind {
    /// Text glyph used in place of a brand icon.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            SocialKind::GitHub => "GH",
            SocialKind::LinkedIn => "in",
            SocialKind::Twitter => "X",
            SocialKind::Email => "@",
            SocialKind::Website => "↗",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub kind: SocialKind,
}

/// "Why work with me" card in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// Section heading plus its one-line intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionIntro {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Page owner and the prose around the lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub brand: &'static str,
    pub greeting: &'static str,
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub bio: &'static [&'static str],
    pub footer_blurb: &'static str,
    pub about: SectionIntro,
    pub skills_title: &'static str,
    pub projects: SectionIntro,
    pub experience: SectionIntro,
    pub contact: SectionIntro,
}

#[must_use]
pub fn profile() -> &'static Profile {
    &data::PROFILE
}

#[must_use]
pub fn projects() -> &'static [Project] {
    data::PROJECTS
}

#[must_use]
pub fn skills() -> &'static [Skill] {
    data::SKILLS
}

#[must_use]
pub fn experience() -> &'static [Experience] {
    data::EXPERIENCE
}

#[must_use]
pub fn social_links() -> &'static [SocialLink] {
    data::SOCIAL_LINKS
}

/// Subset of [`social_links`] shown under the hero text.
pub fn hero_links() -> impl Iterator<Item = &'static SocialLink> {
    data::SOCIAL_LINKS.iter().filter(|link| {
        matches!(
            link.kind,
            SocialKind::GitHub | SocialKind::LinkedIn | SocialKind::Email
        )
    })
}

/// Subset of [`social_links`] shown in the footer.
pub fn footer_links() -> impl Iterator<Item = &'static SocialLink> {
    data::SOCIAL_LINKS
        .iter()
        .filter(|link| link.kind != SocialKind::Twitter)
}

#[must_use]
pub fn features() -> &'static [Feature] {
    data::FEATURES
}

#[must_use]
pub fn stats() -> &'static [Stat] {
    data::STATS
}

#[must_use]
pub fn project(id: ProjectId) -> Option<&'static Project> {
    data::PROJECTS.iter().find(|p| p.id == id)
}

#[must_use]
pub fn experience_entry(id: ExperienceId) -> Option<&'static Experience> {
    data::EXPERIENCE.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<_> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn experience_ids_are_unique() {
        let ids: HashSet<_> = experience().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), experience().len());
    }

    #[test]
    fn lookup_by_id_finds_every_project() {
        for p in projects() {
            assert_eq!(project(p.id), Some(p));
        }
        assert_eq!(project(ProjectId(999)), None);
    }

    #[test]
    fn lookup_by_id_finds_every_experience_entry() {
        for e in experience() {
            assert_eq!(experience_entry(e.id), Some(e));
        }
        assert!(experience_entry(ExperienceId(0)).is_none());
    }

    #[test]
    fn skill_level_clamps_to_hundred() {
        assert_eq!(SkillLevel::new(150).value(), 100);
        assert_eq!(SkillLevel::new(42).value(), 42);
        assert!((SkillLevel::new(50).fraction() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn all_skill_levels_in_range() {
        assert!(skills().iter().all(|s| s.level.value() <= SkillLevel::MAX));
    }

    #[test]
    fn visible_technologies_caps_and_counts_hidden() {
        let four = projects()
            .iter()
            .find(|p| p.technologies.len() == 4)
            .expect("a project with four technologies");
        let (shown, hidden) = four.visible_technologies(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 1);
        assert_eq!(shown, &four.technologies[..3]);
    }

    #[test]
    fn visible_technologies_under_limit_hides_nothing() {
        let three = projects()
            .iter()
            .find(|p| p.technologies.len() == 3)
            .expect("a project with three technologies");
        let (shown, hidden) = three.visible_technologies(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn hero_links_skip_twitter() {
        let kinds: Vec<_> = hero_links().map(|l| l.kind).collect();
        assert!(!kinds.contains(&SocialKind::Twitter));
        assert!(kinds.contains(&SocialKind::Email));
    }

    #[test]
    fn footer_links_end_with_website() {
        let kinds: Vec<_> = footer_links().map(|l| l.kind).collect();
        assert_eq!(kinds.len(), 4);
        assert_eq!(kinds.last(), Some(&SocialKind::Website));
    }

    #[test]
    fn profile_has_bio() {
        assert!(!profile().bio.is_empty());
        assert!(!profile().name.is_empty());
    }
}
