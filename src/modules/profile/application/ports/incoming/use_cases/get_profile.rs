use crate::content::application::domain::PersonalInfo;

pub trait GetProfileUseCase: Send + Sync {
    fn execute(&self) -> PersonalInfo;
}
