use serde::Serialize;
use utoipa::ToSchema;

use crate::content::application::domain::{
    BlogCategory, BlogPost, CategorySelector, Project, ProjectCategory,
};
use crate::content::application::ports::outgoing::ContentQuery;

//
// ──────────────────────────────────────────────────────────
// Record capabilities
// ──────────────────────────────────────────────────────────
//

pub trait Categorized {
    type Category: PartialEq;

    fn category(&self) -> &Self::Category;
}

/// Text fields a free-text search looks at.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Categorized for Project {
    type Category = ProjectCategory;

    fn category(&self) -> &ProjectCategory {
        &self.category
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }
}

impl Categorized for BlogPost {
    type Category = BlogCategory;

    fn category(&self) -> &BlogCategory {
        &self.category
    }
}

impl Searchable for BlogPost {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.excerpt.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

//
// ──────────────────────────────────────────────────────────
// Search term
// ──────────────────────────────────────────────────────────
//

/// A normalised free-text query: trimmed, then lowercased.
///
/// Whitespace-only input normalises to the empty term, which matches
/// every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        self.is_empty()
            || record
                .search_fields()
                .into_iter()
                .any(|field| field.to_lowercase().contains(&self.0))
    }
}

impl From<Option<&str>> for SearchTerm {
    fn from(raw: Option<&str>) -> Self {
        raw.map(SearchTerm::new).unwrap_or_default()
    }
}

//
// ──────────────────────────────────────────────────────────
// Result
// ──────────────────────────────────────────────────────────
//

/// The visible subset of a listing and its size.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub count: usize,
}

impl<T> Listing<T> {
    pub fn new(items: Vec<T>) -> Self {
        let count = items.len();
        Self { items, count }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        Listing::new(self.items.into_iter().map(f).collect())
    }
}

impl<T> FromIterator<T> for Listing<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

//
// ──────────────────────────────────────────────────────────
// Filters
// ──────────────────────────────────────────────────────────
//

/// Stable category filter: keeps source order, never re-sorts.
pub fn filter_by_category<'a, T: Categorized>(
    records: &'a [T],
    selector: &CategorySelector<T::Category>,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| selector.matches(record.category()))
        .collect()
}

/// Category AND search term.
pub fn filter_records<'a, T: Categorized + Searchable>(
    records: &'a [T],
    selector: &CategorySelector<T::Category>,
    term: &SearchTerm,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| selector.matches(record.category()) && term.matches(*record))
        .collect()
}

/// The project listing only filters by category, even though projects are
/// searchable.
pub fn filter_projects<Q: ContentQuery + ?Sized>(
    store: &Q,
    selector: &CategorySelector<ProjectCategory>,
) -> Listing<Project> {
    filter_by_category(store.projects(), selector)
        .into_iter()
        .cloned()
        .collect()
}

pub fn filter_blog_posts<Q: ContentQuery + ?Sized>(
    store: &Q,
    selector: &CategorySelector<BlogCategory>,
    term: &SearchTerm,
) -> Listing<BlogPost> {
    filter_records(store.blog_posts(), selector, term)
        .into_iter()
        .cloned()
        .collect()
}

/// First `limit` items in source order; `None` keeps everything.
pub fn limited<'a, T: Clone + 'a>(
    records: impl IntoIterator<Item = &'a T>,
    limit: Option<usize>,
) -> Vec<T> {
    records
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}
