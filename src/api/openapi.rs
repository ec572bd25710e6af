use crate::api::schemas::{ErrorDetail, ErrorResponse, FieldErrorDetail};
use utoipa::OpenApi;

use crate::blog::adapter::incoming::web::routes::{BlogPostDetail, BlogPostSummary};
use crate::contact::adapter::incoming::web::routes::ContactRequest;
use crate::contact::application::domain::ContactStatus;
use crate::contact::application::ports::incoming::use_cases::ContactReceipt;
use crate::content::application::domain::{
    BlogCategory, Experience, PersonalInfo, Project, ProjectCategory, Skill, SkillCategory,
    SocialLinks, Testimonial,
};
use crate::content::application::search::{SkillGroup, SkillGroups};
use crate::profile::adapter::incoming::web::routes::ExperienceResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read-only portfolio content with category filtering and blog search, plus the contact form",
        contact(
            name = "Trian Aprilianto",
            email = "trian@example.com"
        )
    ),
    paths(
        // Profile endpoints
        crate::profile::adapter::incoming::web::routes::get_profile_handler,
        crate::profile::adapter::incoming::web::routes::get_skills_handler,
        crate::profile::adapter::incoming::web::routes::get_grouped_skills_handler,
        crate::profile::adapter::incoming::web::routes::get_experiences_handler,
        crate::profile::adapter::incoming::web::routes::get_testimonials_handler,

        // Project endpoints
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::project::adapter::incoming::web::routes::get_project_categories_handler,
        crate::project::adapter::incoming::web::routes::get_single_project_handler,

        // Blog endpoints
        crate::blog::adapter::incoming::web::routes::get_blog_posts_handler,
        crate::blog::adapter::incoming::web::routes::get_featured_posts_handler,
        crate::blog::adapter::incoming::web::routes::get_recent_posts_handler,
        crate::blog::adapter::incoming::web::routes::get_blog_categories_handler,
        crate::blog::adapter::incoming::web::routes::get_single_post_handler,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            FieldErrorDetail,

            // Content
            PersonalInfo,
            SocialLinks,
            Project,
            ProjectCategory,
            BlogCategory,
            BlogPostSummary,
            BlogPostDetail,
            Skill,
            SkillCategory,
            SkillGroup,
            SkillGroups,
            Experience,
            ExperienceResponse,
            Testimonial,

            // Contact
            ContactRequest,
            ContactReceipt,
            ContactStatus
        )
    ),
    tags(
        (name = "profile", description = "Profile, skills, experience and testimonials"),
        (name = "projects", description = "Project catalog with category filter"),
        (name = "blog", description = "Blog posts with category filter and search"),
        (name = "contact", description = "Contact form submission"),
    )
)]
pub struct ApiDoc;
