use crate::content::application::domain::Testimonial;

pub trait GetTestimonialsUseCase: Send + Sync {
    fn execute(&self) -> Vec<Testimonial>;
}
