use crate::content::application::domain::PersonalInfo;
use crate::content::application::ports::outgoing::ContentQuery;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileUseCase;

pub struct GetProfileService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self) -> PersonalInfo {
        self.query.personal_info().clone()
    }
}
