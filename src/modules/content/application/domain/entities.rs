use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::categories::{BlogCategory, ProjectCategory, SkillCategory};

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    pub image: String,
    pub gallery: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown body.
    pub content: String,
    pub author: String,
    pub publish_date: NaiveDate,
    pub read_time: String,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    pub image: String,
    pub featured: bool,
}

impl BlogPost {
    /// Date as the Indonesian locale renders it, e.g. `1/6/2024`.
    pub fn publish_date_display(&self) -> String {
        self.publish_date.format("%-d/%-m/%Y").to_string()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0..=100.
    pub level: u8,
    pub category: SkillCategory,
    pub icon: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    /// `YYYY-MM`
    pub start_date: String,
    /// `YYYY-MM`; absent while `current` is set.
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

impl Experience {
    pub fn period(&self) -> String {
        let end = match (&self.end_date, self.current) {
            (_, true) => "Sekarang",
            (Some(end), false) => end.as_str(),
            (None, false) => "",
        };
        format!("{} - {}", self.start_date, end)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub instagram: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profile_image: String,
    pub social: SocialLinks,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub position: String,
    pub content: String,
    pub avatar: String,
}
