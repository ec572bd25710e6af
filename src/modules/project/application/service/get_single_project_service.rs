use tracing::debug;

use crate::content::application::domain::Project;
use crate::content::application::ports::outgoing::ContentQuery;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};

pub struct GetSingleProjectService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self, project_id: &str) -> Result<Project, GetSingleProjectError> {
        match self.query.find_project(project_id) {
            Some(project) => Ok(project.clone()),
            None => {
                debug!(project_id, "Project lookup missed");
                Err(GetSingleProjectError::NotFound(project_id.to_string()))
            }
        }
    }
}
