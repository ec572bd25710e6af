use crate::content::application::domain::Project;
use crate::content::application::ports::outgoing::ContentQuery;
use crate::content::application::search::limited;
use crate::modules::project::application::ports::incoming::use_cases::GetFeaturedProjectsUseCase;

pub struct GetFeaturedProjectsService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetFeaturedProjectsService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetFeaturedProjectsUseCase for GetFeaturedProjectsService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self, limit: Option<usize>) -> Vec<Project> {
        limited(self.query.projects().iter().filter(|p| p.featured), limit)
    }
}
