use crate::content::application::domain::{
    Experience, PersonalInfo, Project, ProjectCategory, Skill, SkillCategory, SocialLinks,
    Testimonial,
};

use super::strings;

pub fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Trian Aprilianto".to_string(),
        title: "Full Stack Developer & UI/UX Designer".to_string(),
        bio: "Passionate developer dengan 5+ tahun pengalaman dalam membangun aplikasi web modern. Spesialisasi dalam React, TypeScript, dan desain pengalaman pengguna yang menakjubkan.".to_string(),
        email: "trianapriliant@email.com".to_string(),
        phone: "+62 812 3456 7890".to_string(),
        location: "Jakarta, Indonesia".to_string(),
        profile_image: "/images/profile.jpg".to_string(),
        social: SocialLinks {
            github: "https://github.com/trianapriliant".to_string(),
            linkedin: "https://linkedin.com/in/trianapriliant".to_string(),
            twitter: "https://twitter.com/trianapriliant".to_string(),
            instagram: "https://instagram.com/trianapriliant".to_string(),
        },
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "ecommerce-platform".to_string(),
            title: "E-Commerce Platform Modern".to_string(),
            description: "Platform e-commerce full-stack dengan fitur pembayaran real-time, dashboard admin yang komprehensif, dan pengalaman berbelanja yang seamless.".to_string(),
            long_description: "Platform e-commerce yang dibangun dengan teknologi modern menggunakan Next.js, TypeScript, dan Prisma. Menampilkan sistem pembayaran terintegrasi, manajemen inventory real-time, dan dashboard analytics yang powerful. Dilengkapi dengan sistem rekomendasi AI dan chatbot customer service.".to_string(),
            technologies: strings(&[
                "Next.js",
                "TypeScript",
                "Prisma",
                "PostgreSQL",
                "Stripe",
                "Tailwind CSS",
                "Redis",
            ]),
            category: ProjectCategory::FullStack,
            image: "/images/projects/ecommerce-hero.jpg".to_string(),
            gallery: strings(&[
                "/images/projects/ecommerce-hero.jpg",
                "/images/projects/taskapp-hero.png",
                "/images/projects/portfolio-hero.jpg",
            ]),
            demo_url: Some("https://ecommerce-demo.trianapriliant.dev".to_string()),
            github_url: Some("https://github.com/trianapriliant/ecommerce-platform".to_string()),
            featured: true,
        },
        Project {
            id: "task-management-app".to_string(),
            title: "Task Management App".to_string(),
            description: "Aplikasi manajemen tugas kolaboratif dengan real-time updates, drag & drop functionality, dan dashboard analitik yang interaktif.".to_string(),
            long_description: "Aplikasi manajemen proyek yang memungkinkan tim berkolaborasi secara efektif. Fitur unggulan termasuk kanban board interaktif, time tracking, laporan produktivitas, dan integrasi dengan berbagai tools populer.".to_string(),
            technologies: strings(&[
                "React",
                "Node.js",
                "Socket.io",
                "MongoDB",
                "Express",
                "Chart.js",
            ]),
            category: ProjectCategory::WebApp,
            image: "/images/projects/taskapp-hero.png".to_string(),
            gallery: strings(&[
                "/images/projects/taskapp-hero.png",
                "/images/projects/banking-hero.png",
            ]),
            demo_url: Some("https://taskapp-demo.trianapriliant.dev".to_string()),
            github_url: Some("https://github.com/trianapriliant/task-management".to_string()),
            featured: true,
        },
        Project {
            id: "portfolio-website".to_string(),
            title: "Portfolio Website 3D".to_string(),
            description: "Website portfolio interaktif dengan efek 3D yang memukau, animasi smooth, dan desain responsive yang modern.".to_string(),
            long_description: "Website portfolio pribadi yang menampilkan kemampuan dalam 3D web development menggunakan Three.js. Menampilkan efek visual yang menakjubkan sambil tetap mempertahankan performa dan accessibility.".to_string(),
            technologies: strings(&[
                "React",
                "Three.js",
                "Framer Motion",
                "Tailwind CSS",
                "TypeScript",
            ]),
            category: ProjectCategory::Frontend,
            image: "/images/projects/portfolio-hero.jpg".to_string(),
            gallery: strings(&["/images/projects/portfolio-hero.jpg"]),
            demo_url: Some("https://trianapriliant.dev".to_string()),
            github_url: Some("https://github.com/trianapriliant/portfolio-3d".to_string()),
            featured: true,
        },
        Project {
            id: "mobile-banking-ui".to_string(),
            title: "Mobile Banking UI Design".to_string(),
            description: "Desain UI/UX untuk aplikasi mobile banking dengan fokus pada keamanan, kemudahan penggunaan, dan estetika modern.".to_string(),
            long_description: "Prototype desain untuk aplikasi mobile banking yang mengutamakan user experience dan security. Penelitian mendalam tentang user behavior dan implementasi design system yang konsisten.".to_string(),
            technologies: strings(&["Figma", "Principle", "Adobe XD", "Sketch"]),
            category: ProjectCategory::UiUxDesign,
            image: "/images/projects/banking-hero.png".to_string(),
            gallery: strings(&[
                "/images/projects/banking-hero.png",
                "/images/projects/ecommerce-hero.jpg",
            ]),
            demo_url: None,
            github_url: None,
            featured: false,
        },
        Project {
            id: "ai-chatbot".to_string(),
            title: "AI Customer Service Bot".to_string(),
            description: "Chatbot AI untuk customer service dengan natural language processing dan integrasi multi-platform.".to_string(),
            long_description: "Sistem chatbot yang menggunakan machine learning untuk memberikan customer service yang personal dan efisien. Dapat diintegrasikan dengan WhatsApp, Telegram, dan website.".to_string(),
            technologies: strings(&["Python", "TensorFlow", "FastAPI", "React", "WebSocket"]),
            category: ProjectCategory::AiMl,
            image: "/images/projects/chatbot-hero.png".to_string(),
            gallery: strings(&["/images/projects/chatbot-hero.png"]),
            demo_url: None,
            github_url: Some("https://github.com/trianapriliant/ai-chatbot".to_string()),
            featured: false,
        },
    ]
}

pub fn skills() -> Vec<Skill> {
    [
        ("React", 95, SkillCategory::Frontend, "⚛️"),
        ("TypeScript", 90, SkillCategory::Frontend, "🔷"),
        ("Next.js", 88, SkillCategory::Frontend, "▲"),
        ("Vue.js", 85, SkillCategory::Frontend, "💚"),
        ("Tailwind CSS", 92, SkillCategory::Frontend, "🎨"),
        ("Three.js", 78, SkillCategory::Frontend, "🎯"),
        ("Node.js", 88, SkillCategory::Backend, "💚"),
        ("Python", 85, SkillCategory::Backend, "🐍"),
        ("PostgreSQL", 82, SkillCategory::Backend, "🐘"),
        ("MongoDB", 80, SkillCategory::Backend, "🍃"),
        ("Redis", 75, SkillCategory::Backend, "🔴"),
        ("Git", 90, SkillCategory::Tools, "🔀"),
        ("Docker", 78, SkillCategory::Tools, "🐳"),
        ("AWS", 75, SkillCategory::Tools, "☁️"),
        ("Figma", 88, SkillCategory::Design, "🎨"),
    ]
    .into_iter()
    .map(|(name, level, category, icon)| Skill {
        name: name.to_string(),
        level,
        category,
        icon: icon.to_string(),
    })
    .collect()
}

pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "senior-developer".to_string(),
            company: "TechFlow Solutions".to_string(),
            position: "Senior Full Stack Developer".to_string(),
            start_date: "2022-01".to_string(),
            end_date: None,
            current: true,
            description: strings(&[
                "Memimpin tim development untuk membangun aplikasi enterprise dengan teknologi modern",
                "Mengimplementasikan arsitektur microservices yang scalable dan maintainable",
                "Mentoring junior developers dan melakukan code review untuk quality assurance",
                "Berkolaborasi dengan tim design untuk menciptakan user experience yang optimal",
            ]),
            technologies: strings(&["React", "Next.js", "Node.js", "PostgreSQL", "AWS", "Docker"]),
        },
        Experience {
            id: "fullstack-developer".to_string(),
            company: "Digital Innovation Labs".to_string(),
            position: "Full Stack Developer".to_string(),
            start_date: "2020-03".to_string(),
            end_date: Some("2021-12".to_string()),
            current: false,
            description: strings(&[
                "Mengembangkan aplikasi web kompleks dengan fokus pada performa dan user experience",
                "Implementasi sistem CI/CD untuk automation deployment dan testing",
                "Optimasi database performance dan query optimization",
                "Kolaborasi cross-functional dengan tim product dan design",
            ]),
            technologies: strings(&["Vue.js", "Python", "Django", "MySQL", "Redis", "GitLab CI"]),
        },
        Experience {
            id: "frontend-developer".to_string(),
            company: "StartupHub Indonesia".to_string(),
            position: "Frontend Developer".to_string(),
            start_date: "2019-06".to_string(),
            end_date: Some("2020-02".to_string()),
            current: false,
            description: strings(&[
                "Membangun interface yang responsive dan interactive untuk berbagai platform",
                "Implementasi modern JavaScript frameworks dan best practices",
                "Kolaborasi dengan designer untuk pixel-perfect implementation",
                "Performance optimization dan accessibility compliance",
            ]),
            technologies: strings(&["React", "JavaScript", "SASS", "Webpack", "Jest"]),
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    [
        (
            "1",
            "Sarah Johnson",
            "Product Manager at TechFlow",
            "Alex adalah developer yang luar biasa. Kemampuan teknis yang kuat dikombinasikan dengan pemahaman bisnis yang mendalam. Hasil kerja selalu melampaui ekspektasi.",
            "/images/testimonials/sarah.jpg",
        ),
        (
            "2",
            "Michael Chen",
            "CEO at Digital Innovation Labs",
            "Bekerja dengan Alex selalu menyenangkan. Problem-solving skills yang excellent dan always deliver on time. Highly recommended!",
            "/images/testimonials/michael.jpg",
        ),
        (
            "3",
            "Lisa Amanda",
            "Design Lead at StartupHub",
            "Alex memiliki eye for detail yang luar biasa dalam mengimplementasikan design. Kolaborasi yang smooth dan hasil yang selalu pixel-perfect.",
            "/images/testimonials/lisa.jpg",
        ),
    ]
    .into_iter()
    .map(|(id, name, position, content, avatar)| Testimonial {
        id: id.to_string(),
        name: name.to_string(),
        position: position.to_string(),
        content: content.to_string(),
        avatar: avatar.to_string(),
    })
    .collect()
}
