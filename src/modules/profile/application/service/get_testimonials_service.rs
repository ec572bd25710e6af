use crate::content::application::domain::Testimonial;
use crate::content::application::ports::outgoing::ContentQuery;
use crate::modules::profile::application::ports::incoming::use_cases::GetTestimonialsUseCase;

pub struct GetTestimonialsService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetTestimonialsService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetTestimonialsUseCase for GetTestimonialsService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self) -> Vec<Testimonial> {
        self.query.testimonials().to_vec()
    }
}
