use chrono::NaiveDate;

use crate::content::adapter::outgoing::StaticContentStore;
use crate::content::application::domain::{
    BlogCategory, BlogPost, ContentStore, Experience, PersonalInfo, Project, ProjectCategory,
    Skill, SkillCategory, SocialLinks, Testimonial,
};

// ──────────────────────────────────────────────────────────
// Single records
// ──────────────────────────────────────────────────────────

pub fn project(id: &str, title: &str, category: ProjectCategory) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} in short"),
        long_description: format!("{title} in long form"),
        technologies: vec!["TypeScript".to_string()],
        category,
        image: format!("/images/{id}.png"),
        gallery: vec![],
        demo_url: None,
        github_url: None,
        featured: false,
    }
}

pub fn blog_post(id: &str, title: &str, category: BlogCategory, tags: &[&str]) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: format!("About {title}"),
        content: format!("# {title}"),
        author: "Test Author".to_string(),
        publish_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        read_time: "5 menit".to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: format!("/images/blog/{id}.png"),
        featured: false,
    }
}

pub fn skill(name: &str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category,
        icon: "*".to_string(),
    }
}

/// Current roles start 2022-01 with no end; past ones run 2020-03 to 2021-12.
pub fn experience(id: &str, current: bool) -> Experience {
    let (start_date, end_date) = if current {
        ("2022-01", None)
    } else {
        ("2020-03", Some("2021-12".to_string()))
    };

    Experience {
        id: id.to_string(),
        company: "Acme".to_string(),
        position: "Developer".to_string(),
        start_date: start_date.to_string(),
        end_date,
        current,
        description: vec!["Shipped features".to_string()],
        technologies: vec!["React".to_string()],
    }
}

// ──────────────────────────────────────────────────────────
// Whole store
// ──────────────────────────────────────────────────────────

/// Small consistent store:
/// - projects `shop`*, `tasks`, `folio`*, `crm` (* featured)
/// - posts `a`* React Tips, `b` CSS Grid, `c`* Node Services
pub fn fixture_store() -> ContentStore {
    let mut shop = project("shop", "Shop", ProjectCategory::FullStack);
    shop.featured = true;
    let mut folio = project("folio", "Folio", ProjectCategory::Frontend);
    folio.featured = true;

    let mut react = blog_post("a", "React Tips", BlogCategory::Frontend, &["React"]);
    react.featured = true;
    let mut node = blog_post("c", "Node Services", BlogCategory::Backend, &["Docker", "Node.js"]);
    node.featured = true;

    ContentStore {
        personal_info: PersonalInfo {
            name: "Test Person".to_string(),
            title: "Developer".to_string(),
            bio: "Writes code.".to_string(),
            email: "test@example.com".to_string(),
            phone: "+62 000".to_string(),
            location: "Jakarta".to_string(),
            profile_image: "/images/profile.png".to_string(),
            social: SocialLinks {
                github: "https://github.com/test".to_string(),
                linkedin: "https://linkedin.com/in/test".to_string(),
                twitter: "https://twitter.com/test".to_string(),
                instagram: "https://instagram.com/test".to_string(),
            },
        },
        projects: vec![
            shop,
            project("tasks", "Tasks", ProjectCategory::WebApp),
            folio,
            project("crm", "CRM", ProjectCategory::WebApp),
        ],
        blog_posts: vec![
            react,
            blog_post("b", "CSS Grid", BlogCategory::Css, &["CSS"]),
            node,
        ],
        skills: vec![
            skill("React", 95, SkillCategory::Frontend),
            skill("TypeScript", 90, SkillCategory::Frontend),
            skill("Node.js", 88, SkillCategory::Backend),
            skill("Git", 90, SkillCategory::Tools),
        ],
        experiences: vec![experience("now", true), experience("before", false)],
        testimonials: vec![Testimonial {
            id: "t1".to_string(),
            name: "Client".to_string(),
            position: "CEO".to_string(),
            content: "Great work.".to_string(),
            avatar: "/images/avatar.png".to_string(),
        }],
    }
}

pub fn fixture_content() -> StaticContentStore {
    StaticContentStore::from_store(fixture_store())
}
