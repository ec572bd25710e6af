pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::blog;
pub use modules::contact;
pub use modules::content;
pub use modules::profile;
pub use modules::project;

use crate::api::openapi::ApiDoc;
use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::blog::application::service::{
    GetBlogPostsService, GetFeaturedPostsService, GetRecentPostsService, GetSinglePostService,
};
use crate::config::AppConfig;
use crate::contact::adapter::outgoing::SimulatedContactSender;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::service::SubmitContactService;
use crate::content::adapter::outgoing::StaticContentStore;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{
    GetExperiencesService, GetProfileService, GetSkillsService, GetTestimonialsService,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    GetFeaturedProjectsService, GetProjectsService, GetSingleProjectService,
};
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub blog: BlogUseCases,
    pub profile: ProfileUseCases,
    pub contact: ContactUseCases,
}

impl AppState {
    /// Wires every read use case to the same content store.
    pub fn new(content: StaticContentStore, sender: SimulatedContactSender) -> Self {
        let skills = Arc::new(GetSkillsService::new(content.clone()));

        Self {
            project: ProjectUseCases {
                get_list: Arc::new(GetProjectsService::new(content.clone())),
                get_featured: Arc::new(GetFeaturedProjectsService::new(content.clone())),
                get_single: Arc::new(GetSingleProjectService::new(content.clone())),
            },
            blog: BlogUseCases {
                get_list: Arc::new(GetBlogPostsService::new(content.clone())),
                get_featured: Arc::new(GetFeaturedPostsService::new(content.clone())),
                get_recent: Arc::new(GetRecentPostsService::new(content.clone())),
                get_single: Arc::new(GetSinglePostService::new(content.clone())),
            },
            profile: ProfileUseCases {
                get_profile: Arc::new(GetProfileService::new(content.clone())),
                get_skills: skills.clone(),
                get_grouped_skills: skills,
                get_experiences: Arc::new(GetExperiencesService::new(content.clone())),
                get_testimonials: Arc::new(GetTestimonialsService::new(content)),
            },
            contact: ContactUseCases {
                submit: Arc::new(SubmitContactService::new(sender)),
            },
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    config::load_env_files();
    let config = AppConfig::from_env();

    if config.contact_simulate_failure {
        warn!(
            env = %config.rust_env,
            "Contact delivery is set to fail; every submission will be answered with an error"
        );
    }
    if config.is_production() && config.contact_submit_delay.is_zero() {
        warn!("CONTACT_SUBMIT_DELAY_MS is 0 in production");
    }

    // Content is compiled in; a failed integrity check is logged and surfaced by /ready.
    let content = StaticContentStore::seeded();
    if !content.log_integrity() {
        warn!("Content store has integrity problems; /ready will report unhealthy");
    }

    let sender = SimulatedContactSender::new(
        config.contact_submit_delay,
        config.contact_simulate_failure,
    );
    let state = AppState::new(content.clone(), sender);

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(content.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

/// Literal segments such as `featured` register before the `{id}` routes.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_grouped_skills_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_testimonials_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_featured_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_categories_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    // Blog
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_featured_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_recent_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_blog_categories_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::get_single_post_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
