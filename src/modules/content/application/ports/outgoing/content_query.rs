// src/modules/content/application/ports/outgoing/content_query.rs

use crate::content::application::domain::{
    BlogPost, Experience, PersonalInfo, Project, Skill, Testimonial,
};

//
// ──────────────────────────────────────────────────────────
// Port (Read-only, in-memory)
// ──────────────────────────────────────────────────────────
//

/// Read access to the content collections, in source order.
///
/// Implementations hold their data for the life of the process, so every
/// accessor is infallible and borrows.
pub trait ContentQuery: Send + Sync {
    fn personal_info(&self) -> &PersonalInfo;

    fn projects(&self) -> &[Project];

    fn blog_posts(&self) -> &[BlogPost];

    fn skills(&self) -> &[Skill];

    fn experiences(&self) -> &[Experience];

    fn testimonials(&self) -> &[Testimonial];

    fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects().iter().find(|p| p.id == id)
    }

    fn find_blog_post(&self, id: &str) -> Option<&BlogPost> {
        self.blog_posts().iter().find(|p| p.id == id)
    }
}
