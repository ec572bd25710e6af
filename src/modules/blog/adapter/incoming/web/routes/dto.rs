use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::content::application::domain::{BlogCategory, BlogPost};

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

/// A post as it appears on cards and in listings. The markdown body is left
/// out; fetch `/api/blog/{id}` for it.
#[derive(Debug, Serialize, ToSchema)]
pub struct BlogPostSummary {
    #[schema(example = "react-best-practices-2024")]
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    #[schema(value_type = String, format = Date, example = "2024-06-01")]
    pub publish_date: NaiveDate,
    #[schema(example = "1/6/2024")]
    pub publish_date_display: String,
    #[schema(example = "8 menit")]
    pub read_time: String,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    pub image: String,
    pub featured: bool,
}

impl From<BlogPost> for BlogPostSummary {
    fn from(post: BlogPost) -> Self {
        let publish_date_display = post.publish_date_display();
        Self {
            id: post.id,
            title: post.title,
            excerpt: post.excerpt,
            author: post.author,
            publish_date: post.publish_date,
            publish_date_display,
            read_time: post.read_time,
            category: post.category,
            tags: post.tags,
            image: post.image,
            featured: post.featured,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BlogPostDetail {
    #[serde(flatten)]
    pub summary: BlogPostSummary,
    /// Markdown body.
    pub content: String,
}

impl From<BlogPost> for BlogPostDetail {
    fn from(mut post: BlogPost) -> Self {
        let content = std::mem::take(&mut post.content);
        Self {
            summary: post.into(),
            content,
        }
    }
}
