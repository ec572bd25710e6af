pub mod get_experiences_service;
pub mod get_profile_service;
pub mod get_skills_service;
pub mod get_testimonials_service;

pub use get_experiences_service::GetExperiencesService;
pub use get_profile_service::GetProfileService;
pub use get_skills_service::GetSkillsService;
pub use get_testimonials_service::GetTestimonialsService;
