//! Projection of one record onto the fixed slots of the detail view.
//!
//! There is no decision logic here beyond defaulting: optional fields that are
//! absent get a fixed stand-in text, and hometown falls back to the state.

use crate::images::ImageResolver;
use crate::model::Record;
use serde::Serialize;

pub const NOT_AVAILABLE: &str = "Not available";
pub const INFO_NOT_AVAILABLE: &str = "Information not available";
pub const VARIOUS_LOCATIONS: &str = "Various locations";
pub const DEFAULT_MOTTO: &str = "Duty, Honor, Country";
pub const TITLE_SUFFIX: &str = "Know Your Heroes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub image: String,
    pub name: String,
    pub rank_line: String,
    pub award: String,
    pub born: String,
    pub died: String,
    pub age: String,
    pub hometown: String,
    pub state: String,
    pub regiment: String,
    pub war: String,
    pub battle_location: String,
    pub year: String,
    pub biography: String,
    pub family: String,
    pub education: String,
    pub motto: String,
}

impl DetailView {
    pub fn project(record: &Record, images: &ImageResolver) -> Self {
        let or = |value: &Option<String>, fallback: &str| {
            value.clone().unwrap_or_else(|| fallback.to_string())
        };

        Self {
            id: record.id.clone(),
            title: format!("{} - {}", record.name, TITLE_SUFFIX),
            image: images.resolve_detail(record),
            name: record.name.clone(),
            rank_line: format!("{}, {}", record.rank, record.regiment),
            award: record.award.clone(),
            born: or(&record.date_of_birth, NOT_AVAILABLE),
            died: or(&record.date_of_death, NOT_AVAILABLE),
            age: or(&record.age, NOT_AVAILABLE),
            hometown: or(&record.hometown, &record.state),
            state: record.state.clone(),
            regiment: record.regiment.clone(),
            war: record.war.clone(),
            battle_location: or(&record.battle_location, VARIOUS_LOCATIONS),
            year: record.year.clone(),
            biography: record.full_story.clone(),
            family: or(&record.family_background, INFO_NOT_AVAILABLE),
            education: or(&record.education, INFO_NOT_AVAILABLE),
            motto: or(&record.motto, DEFAULT_MOTTO),
        }
    }
}
