mod json_config;
mod query;
mod response;

pub use json_config::{custom_json_config, custom_query_config};
pub use query::LimitQuery;
pub use response::{ApiFieldError, ApiResponse};
