use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Label the listing pages use for "no category restriction".
pub const ALL_CATEGORIES_LABEL: &str = "Semua";

//
// ──────────────────────────────────────────────────────────
// Fixed enumerations
// ──────────────────────────────────────────────────────────
//

/// A closed set of categories with stable display labels.
///
/// Labels are what clients send back as filter values, so `from_label`
/// is an exact, case-sensitive match.
pub trait CategoryLabel: Sized + Copy + PartialEq + 'static {
    const VARIANTS: &'static [Self];

    fn label(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|c| c.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ProjectCategory {
    #[serde(rename = "Full Stack")]
    FullStack,
    Frontend,
    #[serde(rename = "Web App")]
    WebApp,
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
    #[serde(rename = "AI/ML")]
    AiMl,
}

impl CategoryLabel for ProjectCategory {
    const VARIANTS: &'static [Self] = &[
        Self::FullStack,
        Self::Frontend,
        Self::WebApp,
        Self::UiUxDesign,
        Self::AiMl,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::FullStack => "Full Stack",
            Self::Frontend => "Frontend",
            Self::WebApp => "Web App",
            Self::UiUxDesign => "UI/UX Design",
            Self::AiMl => "AI/ML",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum BlogCategory {
    Frontend,
    Backend,
    Programming,
    Performance,
    #[serde(rename = "CSS")]
    Css,
}

impl CategoryLabel for BlogCategory {
    const VARIANTS: &'static [Self] = &[
        Self::Frontend,
        Self::Backend,
        Self::Programming,
        Self::Performance,
        Self::Css,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Programming => "Programming",
            Self::Performance => "Performance",
            Self::Css => "CSS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Design,
}

impl SkillCategory {
    /// Section heading used on the about page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend Development",
            Self::Backend => "Backend Development",
            Self::Tools => "Tools & Technologies",
            Self::Design => "Design & UI/UX",
        }
    }
}

/// Filter controls in display order: the sentinel first, then the enumeration.
pub fn category_labels<C: CategoryLabel>() -> Vec<&'static str> {
    std::iter::once(ALL_CATEGORIES_LABEL)
        .chain(C::VARIANTS.iter().map(|c| c.label()))
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Selector
// ──────────────────────────────────────────────────────────
//

/// The category half of a listing query.
///
/// An unrecognised label is kept rather than rejected: it matches nothing,
/// so a stale filter value from a client yields an empty listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector<C> {
    All,
    Only(C),
    Unrecognized(String),
}

impl<C> Default for CategorySelector<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: CategoryLabel> CategorySelector<C> {
    pub fn parse(label: Option<&str>) -> Self {
        match label {
            // `?category=` with no value is an unset parameter, not a label.
            None | Some("") | Some(ALL_CATEGORIES_LABEL) => Self::All,
            Some(label) => C::from_label(label)
                .map(Self::Only)
                .unwrap_or_else(|| Self::Unrecognized(label.to_string())),
        }
    }
}

impl<C: PartialEq> CategorySelector<C> {
    pub fn matches(&self, category: &C) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
            Self::Unrecognized(_) => false,
        }
    }
}
