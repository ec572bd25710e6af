mod filter;
mod grouping;

pub use filter::{
    filter_blog_posts, filter_by_category, filter_projects, filter_records, limited,
    Categorized, Listing, SearchTerm, Searchable,
};
pub use grouping::{group_skills_by_category, SkillGroup, SkillGroups};
