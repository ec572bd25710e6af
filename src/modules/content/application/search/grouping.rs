use serde::Serialize;
use utoipa::ToSchema;

use crate::content::application::domain::{Skill, SkillCategory};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub title: String,
    pub skills: Vec<Skill>,
}

/// Skills keyed by category, in the order each category first appears.
///
/// Serialised as an array so the order survives JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct SkillGroups {
    pub groups: Vec<SkillGroup>,
}

impl SkillGroups {
    pub fn get(&self, category: SkillCategory) -> Option<&[Skill]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.skills.as_slice())
    }

    pub fn categories(&self) -> Vec<SkillCategory> {
        self.groups.iter().map(|g| g.category).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub fn group_skills_by_category(skills: &[Skill]) -> SkillGroups {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill.clone()),
            None => groups.push(SkillGroup {
                category: skill.category,
                title: skill.category.title().to_string(),
                skills: vec![skill.clone()],
            }),
        }
    }

    SkillGroups { groups }
}
