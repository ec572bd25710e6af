pub mod blog;
pub mod contact;
pub mod content;
pub mod profile;
pub mod project;
