use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    GetExperiencesUseCase, GetGroupedSkillsUseCase, GetProfileUseCase, GetSkillsUseCase,
    GetTestimonialsUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub get_skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub get_grouped_skills: Arc<dyn GetGroupedSkillsUseCase + Send + Sync>,
    pub get_experiences: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    pub get_testimonials: Arc<dyn GetTestimonialsUseCase + Send + Sync>,
}
