// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::section::{Region, Section};
use iced_folio::content::{self, SkillLevel};
use iced_folio::ui::projects::CARD_TECHNOLOGIES;
use std::collections::HashSet;

#[test]
fn project_ids_are_unique_and_resolvable() {
    let mut seen = HashSet::new();
    for project in content::projects() {
        assert!(seen.insert(project.id), "duplicate id {}", project.id);
        assert_eq!(content::project(project.id).map(|p| p.title), Some(project.title));
    }
}

#[test]
fn cards_show_at_most_three_technologies() {
    for project in content::projects() {
        let (shown, hidden) = project.visible_technologies(CARD_TECHNOLOGIES);
        assert!(shown.len() <= CARD_TECHNOLOGIES);
        assert_eq!(shown.len() + hidden, project.technologies.len());
    }
}

#[test]
fn skill_levels_are_percentages() {
    for skill in content::skills() {
        assert!(skill.level.value() <= SkillLevel::MAX);
        assert!((0.0..=1.0).contains(&skill.level.fraction()));
    }
}

#[test]
fn experience_entries_resolve_by_id() {
    for entry in content::experience() {
        assert!(content::experience_entry(entry.id).is_some());
        assert!(!entry.skills.is_empty());
    }
}

#[test]
fn every_section_maps_to_a_page_region() {
    let regions: HashSet<Region> = Section::ALL.iter().map(|s| s.region()).collect();
    assert_eq!(regions.len(), Section::ALL.len());
    assert!(!regions.contains(&Region::Footer));
}

#[test]
fn social_links_split_between_hero_and_footer() {
    assert!(content::hero_links().count() > 0);
    assert!(content::footer_links().count() > 0);
    assert!(content::hero_links().count() <= content::social_links().len());
}
