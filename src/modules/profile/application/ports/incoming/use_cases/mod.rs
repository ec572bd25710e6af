mod get_experiences;
mod get_profile;
mod get_skills;
mod get_testimonials;

pub use get_experiences::GetExperiencesUseCase;
pub use get_profile::GetProfileUseCase;
pub use get_skills::{GetGroupedSkillsUseCase, GetSkillsUseCase};
pub use get_testimonials::GetTestimonialsUseCase;
