use crate::content::application::domain::Experience;
use crate::content::application::ports::outgoing::ContentQuery;
use crate::content::application::search::limited;
use crate::modules::profile::application::ports::incoming::use_cases::GetExperiencesUseCase;

pub struct GetExperiencesService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetExperiencesService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetExperiencesUseCase for GetExperiencesService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self, limit: Option<usize>) -> Vec<Experience> {
        limited(self.query.experiences(), limit)
    }
}
