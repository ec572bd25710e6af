mod submission;

pub use submission::{
    ContactField, ContactStatus, ContactSubmission, ContactValidationError, FieldError,
};
