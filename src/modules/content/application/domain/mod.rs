pub mod categories;
pub mod content_store;
pub mod entities;

pub use categories::{
    category_labels, BlogCategory, CategoryLabel, CategorySelector, ProjectCategory,
    SkillCategory, ALL_CATEGORIES_LABEL,
};
pub use content_store::{ContentIntegrityError, ContentStore};
pub use entities::{
    BlogPost, Experience, PersonalInfo, Project, Skill, SocialLinks, Testimonial,
};
