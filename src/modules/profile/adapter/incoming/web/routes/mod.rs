mod get_experiences;
mod get_profile;
mod get_skills;
mod get_testimonials;

pub use get_experiences::*;
pub use get_profile::*;
pub use get_skills::*;
pub use get_testimonials::*;
