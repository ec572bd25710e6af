use crate::content::application::domain::Skill;
use crate::content::application::ports::outgoing::ContentQuery;
use crate::content::application::search::{group_skills_by_category, limited, SkillGroups};
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetGroupedSkillsUseCase, GetSkillsUseCase,
};

/// Serves both skill views from the same collection.
pub struct GetSkillsService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetSkillsService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self, limit: Option<usize>) -> Vec<Skill> {
        limited(self.query.skills(), limit)
    }
}

impl<Q> GetGroupedSkillsUseCase for GetSkillsService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self) -> SkillGroups {
        group_skills_by_category(self.query.skills())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::adapter::outgoing::StaticContentStore;
    use crate::content::application::domain::SkillCategory;

    #[test]
    fn top_six_for_home_page() {
        let service = GetSkillsService::new(StaticContentStore::seeded());

        let skills = GetSkillsUseCase::execute(&service, Some(6));
        assert_eq!(skills.len(), 6);
        assert!(skills.iter().all(|s| s.category == SkillCategory::Frontend));
    }

    #[test]
    fn grouped_view_covers_every_skill() {
        let service = GetSkillsService::new(StaticContentStore::seeded());

        let grouped = GetGroupedSkillsUseCase::execute(&service);
        let total: usize = grouped.groups.iter().map(|g| g.skills.len()).sum();

        assert_eq!(total, 15);
        assert_eq!(grouped.len(), 4);
    }
}
