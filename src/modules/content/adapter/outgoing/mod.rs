mod seed;
mod static_content_store;

pub use static_content_store::StaticContentStore;
