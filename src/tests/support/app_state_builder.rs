use std::sync::Arc;

use actix_web::web;

use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::blog::application::ports::incoming::use_cases::GetBlogPostsUseCase;
use crate::contact::adapter::outgoing::SimulatedContactSender;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::ports::incoming::use_cases::GetProjectsUseCase;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::content_fixtures::fixture_content;
use crate::tests::support::stubs::StubSubmitContact;
use crate::AppState;

/// Real read services over the fixture store; contact delivery is stubbed.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    blog: BlogUseCases,
    profile: ProfileUseCases,
    contact: ContactUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let AppState {
            project,
            blog,
            profile,
            ..
        } = AppState::new(
            fixture_content(),
            SimulatedContactSender::new(std::time::Duration::ZERO, false),
        );

        Self {
            project,
            blog,
            profile,
            contact: ContactUseCases {
                submit: Arc::new(StubSubmitContact::success()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_blog_posts(
        mut self,
        uc: impl GetBlogPostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.get_list = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            blog: self.blog,
            profile: self.profile,
            contact: self.contact,
        })
    }
}
