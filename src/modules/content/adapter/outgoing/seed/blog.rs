use chrono::NaiveDate;

use crate::content::application::domain::{BlogCategory, BlogPost};

use super::strings;

const AUTHOR: &str = "Trian Aprilianto";

struct PostSeed {
    id: &'static str,
    title: &'static str,
    excerpt: &'static str,
    body: &'static str,
    published: (i32, u32, u32),
    read_time: &'static str,
    category: BlogCategory,
    tags: &'static [&'static str],
    image: &'static str,
    featured: bool,
}

const POSTS: [PostSeed; 5] = [
    PostSeed {
        id: "react-best-practices-2024",
        title: "React Best Practices untuk Developer di 2024",
        excerpt: "Panduan lengkap tentang best practices React modern, mulai dari hooks hingga performance optimization yang wajib diketahui setiap developer.",
        body: include_str!("posts/react-best-practices-2024.md"),
        published: (2024, 6, 1),
        read_time: "8 menit",
        category: BlogCategory::Frontend,
        tags: &["React", "JavaScript", "Best Practices", "Performance"],
        image: "/images/blog/react-best-practices.png",
        featured: true,
    },
    PostSeed {
        id: "typescript-advanced-patterns",
        title: "Advanced TypeScript Patterns untuk Developer Pro",
        excerpt: "Menguasai pattern-pattern advanced TypeScript yang akan membuat code Anda lebih type-safe dan ekspressive.",
        body: include_str!("posts/typescript-advanced-patterns.md"),
        published: (2024, 5, 28),
        read_time: "10 menit",
        category: BlogCategory::Programming,
        tags: &["TypeScript", "Advanced", "Types", "Patterns"],
        image: "/images/blog/typescript-patterns.png",
        featured: true,
    },
    PostSeed {
        id: "web-performance-optimization",
        title: "Web Performance Optimization: Panduan Lengkap",
        excerpt: "Strategi dan teknik untuk mengoptimalkan performa website agar loading time lebih cepat dan user experience lebih baik.",
        body: include_str!("posts/web-performance-optimization.md"),
        published: (2024, 5, 25),
        read_time: "12 menit",
        category: BlogCategory::Performance,
        tags: &["Performance", "Optimization", "Web Development", "Core Web Vitals"],
        image: "/images/blog/web-performance.png",
        featured: false,
    },
    PostSeed {
        id: "modern-css-features",
        title: "CSS Modern Features yang Harus Anda Ketahui",
        excerpt: "Eksplorasi fitur-fitur CSS terbaru yang akan mengubah cara Anda membangun layout dan styling website.",
        body: include_str!("posts/modern-css-features.md"),
        published: (2024, 5, 20),
        read_time: "9 menit",
        category: BlogCategory::Css,
        tags: &["CSS", "Modern Features", "Layout", "Styling"],
        image: "/images/blog/modern-css.jpg",
        featured: false,
    },
    PostSeed {
        id: "node-js-microservices",
        title: "Membangun Microservices dengan Node.js dan Docker",
        excerpt: "Panduan step-by-step untuk membangun arsitektur microservices yang scalable menggunakan Node.js dan containerization.",
        body: include_str!("posts/node-js-microservices.md"),
        published: (2024, 5, 15),
        read_time: "15 menit",
        category: BlogCategory::Backend,
        tags: &["Node.js", "Microservices", "Docker", "Architecture"],
        image: "/images/blog/microservices.webp",
        featured: true,
    },
];

pub fn blog_posts() -> Vec<BlogPost> {
    POSTS
        .iter()
        .filter_map(|seed| {
            let (year, month, day) = seed.published;
            // Seed dates are literals; an impossible one drops the post rather than the process.
            let publish_date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(BlogPost {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                excerpt: seed.excerpt.to_string(),
                content: seed.body.to_string(),
                author: AUTHOR.to_string(),
                publish_date,
                read_time: seed.read_time.to_string(),
                category: seed.category,
                tags: strings(seed.tags),
                image: seed.image.to_string(),
                featured: seed.featured,
            })
        })
        .collect()
}
