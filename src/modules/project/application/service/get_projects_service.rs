use crate::content::application::domain::{CategorySelector, Project, ProjectCategory};
use crate::content::application::ports::outgoing::ContentQuery;
use crate::content::application::search::{filter_projects, Listing};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectsService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self, category: CategorySelector<ProjectCategory>) -> Listing<Project> {
        filter_projects(&self.query, &category)
    }
}
