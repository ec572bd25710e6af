use std::sync::Arc;

use tracing::{info, warn};

use crate::content::application::domain::{
    BlogPost, ContentIntegrityError, ContentStore, Experience, PersonalInfo, Project, Skill,
    Testimonial,
};
use crate::content::application::ports::outgoing::ContentQuery;

use super::seed;

/// The content compiled into the binary, shared by every service.
#[derive(Debug, Clone)]
pub struct StaticContentStore {
    store: Arc<ContentStore>,
}

impl StaticContentStore {
    pub fn seeded() -> Self {
        let store = Self::from_store(seed::content_store());
        info!(
            projects = store.projects().len(),
            blog_posts = store.blog_posts().len(),
            skills = store.skills().len(),
            experiences = store.experiences().len(),
            "Content store loaded"
        );
        store
    }

    pub fn from_store(store: ContentStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn verify(&self) -> Result<(), Vec<ContentIntegrityError>> {
        self.store.verify()
    }

    /// Logs each integrity violation; returns whether the store is clean.
    pub fn log_integrity(&self) -> bool {
        match self.verify() {
            Ok(()) => true,
            Err(errors) => {
                for err in &errors {
                    warn!("Content integrity: {}", err);
                }
                false
            }
        }
    }
}

impl ContentQuery for StaticContentStore {
    fn personal_info(&self) -> &PersonalInfo {
        &self.store.personal_info
    }

    fn projects(&self) -> &[Project] {
        &self.store.projects
    }

    fn blog_posts(&self) -> &[BlogPost] {
        &self.store.blog_posts
    }

    fn skills(&self) -> &[Skill] {
        &self.store.skills
    }

    fn experiences(&self) -> &[Experience] {
        &self.store.experiences
    }

    fn testimonials(&self) -> &[Testimonial] {
        &self.store.testimonials
    }
}
