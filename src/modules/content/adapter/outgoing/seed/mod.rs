//! Content compiled into the binary.

mod blog;
mod portfolio;

use crate::content::application::domain::ContentStore;

pub fn content_store() -> ContentStore {
    ContentStore {
        personal_info: portfolio::personal_info(),
        projects: portfolio::projects(),
        blog_posts: blog::blog_posts(),
        skills: portfolio::skills(),
        experiences: portfolio::experiences(),
        testimonials: portfolio::testimonials(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
