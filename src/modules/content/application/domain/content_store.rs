use std::collections::HashSet;

use super::categories::SkillCategory;
use super::entities::{BlogPost, Experience, PersonalInfo, Project, Skill, Testimonial};

/// Every collection the site renders. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub personal_info: PersonalInfo,
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentIntegrityError {
    #[error("{kind} id must not be empty")]
    EmptyId { kind: &'static str },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("skill {name} has level {level}, expected 0..=100")]
    SkillLevelOutOfRange { name: String, level: u8 },

    #[error("duplicate skill {name} in category {category:?}")]
    DuplicateSkill { name: String, category: SkillCategory },

    #[error("experience {id} is current but has end date {end_date}")]
    CurrentWithEndDate { id: String, end_date: String },
}

impl ContentStore {
    /// Checks the record invariants. Reports every violation found.
    pub fn verify(&self) -> Result<(), Vec<ContentIntegrityError>> {
        let mut errors = Vec::new();

        check_ids("project", self.projects.iter().map(|p| p.id.as_str()), &mut errors);
        check_ids("blog post", self.blog_posts.iter().map(|p| p.id.as_str()), &mut errors);
        check_ids(
            "experience",
            self.experiences.iter().map(|e| e.id.as_str()),
            &mut errors,
        );
        check_ids(
            "testimonial",
            self.testimonials.iter().map(|t| t.id.as_str()),
            &mut errors,
        );

        let mut seen_skills = HashSet::new();
        for skill in &self.skills {
            if skill.level > 100 {
                errors.push(ContentIntegrityError::SkillLevelOutOfRange {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
            if !seen_skills.insert((skill.category, skill.name.as_str())) {
                errors.push(ContentIntegrityError::DuplicateSkill {
                    name: skill.name.clone(),
                    category: skill.category,
                });
            }
        }

        for experience in &self.experiences {
            if let (true, Some(end_date)) = (experience.current, &experience.end_date) {
                errors.push(ContentIntegrityError::CurrentWithEndDate {
                    id: experience.id.clone(),
                    end_date: end_date.clone(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ContentIntegrityError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            errors.push(ContentIntegrityError::EmptyId { kind });
        } else if !seen.insert(id) {
            errors.push(ContentIntegrityError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::{
        experience, fixture_store, project, skill,
    };
    use crate::content::application::domain::ProjectCategory;

    #[test]
    fn fixture_store_is_consistent() {
        assert!(fixture_store().verify().is_ok());
    }

    #[test]
    fn reports_duplicate_project_ids() {
        let mut store = fixture_store();
        store.projects = vec![
            project("dup", "One", ProjectCategory::Frontend),
            project("dup", "Two", ProjectCategory::WebApp),
        ];

        let errors = store.verify().unwrap_err();
        assert_eq!(
            errors,
            vec![ContentIntegrityError::DuplicateId {
                kind: "project",
                id: "dup".to_string(),
            }]
        );
    }

    #[test]
    fn reports_every_violation() {
        let mut store = fixture_store();
        store.projects = vec![project("", "Nameless", ProjectCategory::AiMl)];
        store.skills = vec![
            skill("Rust", 120, SkillCategory::Backend),
            skill("Rust", 80, SkillCategory::Backend),
        ];
        let mut current = experience("now", true);
        current.end_date = Some("2024-01".to_string());
        store.experiences = vec![current];

        let errors = store.verify().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ContentIntegrityError::EmptyId { kind: "project" }));
        assert!(errors.contains(&ContentIntegrityError::SkillLevelOutOfRange {
            name: "Rust".to_string(),
            level: 120,
        }));
        assert!(errors.contains(&ContentIntegrityError::DuplicateSkill {
            name: "Rust".to_string(),
            category: SkillCategory::Backend,
        }));
        assert!(errors.contains(&ContentIntegrityError::CurrentWithEndDate {
            id: "now".to_string(),
            end_date: "2024-01".to_string(),
        }));
    }

    #[test]
    fn same_skill_name_in_different_categories_is_allowed() {
        let mut store = fixture_store();
        store.skills = vec![
            skill("Figma", 88, SkillCategory::Design),
            skill("Figma", 60, SkillCategory::Tools),
        ];

        assert!(store.verify().is_ok());
    }
}
