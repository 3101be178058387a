#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectKind {
    #[default]
    CustomCode,
    WordPress,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 2] = [ProjectKind::CustomCode, ProjectKind::WordPress];

    pub fn label(self) -> &'static str {
        match self {
            Self::CustomCode => "Custom Code",
            Self::WordPress => "WordPress",
        }
    }
}

/// Hover glow colour behind a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Pink,
    Green,
}

impl Accent {
    pub fn token(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Pink => "pink",
            Self::Green => "green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
    pub repository: Option<&'static str>,
    pub accent: Accent,
    pub kind: ProjectKind,
}

const WORDPRESS_STACK: &[&str] = &["WordPress", "Elementor Pro"];
const REACT_CSS: &[&str] = &["ReactJS", "CSS"];

pub static PROJECTS: [Project; 13] = [
    Project {
        title: "Vertexa Digital Studio",
        description: "Designed and developed the official Vertexa Digital Studio website using React, creating a modern, responsive, and user-friendly platform. Focused on clean design, smooth navigation, and performance optimization to deliver a professional online presence.",
        tech: REACT_CSS,
        link: "https://www.vertexa.digital",
        repository: Some("https://github.com/hania-cs/Vertexa-Digital-Studios"),
        accent: Accent::Cyan,
        kind: ProjectKind::CustomCode,
    },
    Project {
        title: "Karm El Anab",
        description: "Developed a role-based farmer and admin management web application using React, TypeScript, Vite, TailwindCSS, Supabase, PostgreSQL and shadcn-ui for a university student's project that enables admin-approved farmer authentication, farm and ground data management, equipment rental requests, and centralized administrative control with a relational database–driven design.",
        tech: &["ReactTS", "TailwindCSS", "Supabase", "shadcn-ui", "Vite", "PostgreSQL"],
        link: "https://karm3inab.vercel.app/",
        repository: Some("https://github.com/hania-cs/Karm_El_Anab"),
        accent: Accent::Cyan,
        kind: ProjectKind::CustomCode,
    },
    Project {
        title: "CrispyTime",
        description: "Designed and developed a responsive, sleek designed restaurant website using ReactTS, Vite, TailwindCSS and shadcn-ui, that allows users to add menu items to a cart, manage order quantities, and send the finalized order to the restaurant via WhatsApp in a structured, readable message format.",
        tech: &["ReactTS", "TailwindCSS", "shadcn-ui", "Vite"],
        link: "https://crispy-time.vercel.app/",
        repository: Some("https://github.com/hania-cs/CrispyTime"),
        accent: Accent::Cyan,
        kind: ProjectKind::CustomCode,
    },
    Project {
        title: "Connect Services SARL",
        description: "Designed and developed the official ConnectServices SARL website using React, creating a modern, responsive, and user-friendly platform. Focused on clean design, smooth navigation, and performance optimization to deliver a professional online presence.",
        tech: REACT_CSS,
        link: "https://www.connect-services.me",
        repository: Some("https://github.com/hania-cs/ConnectServicesSARL"),
        accent: Accent::Cyan,
        kind: ProjectKind::CustomCode,
    },
    Project {
        title: "Yanta Municipality Website",
        description: "I helped develop the frontend of Yanta Municipality's website, creating a responsive and user-friendly interface that allows residents and visitors to access municipal information, announcements, and services easily.",
        tech: &["Next.js"],
        link: "https://www.yanta-leb.com/en",
        repository: None,
        accent: Accent::Pink,
        kind: ProjectKind::CustomCode,
    },
    Project {
        title: "Glitch Portfolio Site",
        description: "Built a glitch-inspired portfolio using React, Vite, and CSS to showcase projects and experience, featuring responsive design and creative visual effects",
        tech: REACT_CSS,
        link: "https://glitch-portfolio-teal.vercel.app/",
        repository: Some("https://github.com/hania-cs/GlitchPortfolio"),
        accent: Accent::Green,
        kind: ProjectKind::CustomCode,
    },
    Project {
        title: "Tiramisu Shop",
        description: "Built a responsive single-page website for a tiramisu shop, built with React and Vite. Showcases products with a clean design, fast performance, and seamless deployment on Vercel.",
        tech: REACT_CSS,
        link: "https://glitch-portfolio-teal.vercel.app/",
        repository: Some("https://github.com/hania-cs/TiramisuChoice"),
        accent: Accent::Pink,
        kind: ProjectKind::CustomCode,
    },
    Project {
        title: "Student Portfolio - Manuela Frierre Portfolio",
        description: "Created a responsive React portfolio to showcase a psychology student's skills, research, and achievements with a clean and user-friendly design.",
        tech: REACT_CSS,
        link: "https://manuelaportfolio.vercel.app/",
        repository: Some("https://github.com/hania-cs/ManuelaPortfolio"),
        accent: Accent::Cyan,
        kind: ProjectKind::CustomCode,
    },
    Project {
        title: "Jingle Jings",
        description: "A one page website built for a small business in Brazil, built with React",
        tech: REACT_CSS,
        link: "https://jingle-gings.vercel.app/",
        repository: None,
        accent: Accent::Pink,
        kind: ProjectKind::CustomCode,
    },
    Project {
        title: "Arab Center for Consulting",
        description: "WordPress website for a Saudi consulting firm offering governance, financial, and operational advisory services, designed by the client and project lead. SEO contribution: Improved metadata structure and page speed for better discoverability.",
        tech: WORDPRESS_STACK,
        link: "https://arabcenter.com.sa/",
        repository: None,
        accent: Accent::Pink,
        kind: ProjectKind::WordPress,
    },
    Project {
        title: "Blossom Bloom Clinic",
        description: "WordPress mental health clinic website with a client-approved mobile-first design and a single-page desktop redirect for optimal viewing. SEO contribution: Optimized content structure and implemented mobile-first indexing improvements.",
        tech: WORDPRESS_STACK,
        link: "https://bnbclinics.com/",
        repository: None,
        accent: Accent::Pink,
        kind: ProjectKind::WordPress,
    },
    Project {
        title: "Hizzek Mizzek",
        description: "WordPress e-commerce website for a Lebanese gift and snack business with integrated DHL shipping. SEO contribution: Organized product taxonomy and applied schema markup for product visibility.",
        tech: WORDPRESS_STACK,
        link: "http://hezzikmezzik.com/",
        repository: None,
        accent: Accent::Pink,
        kind: ProjectKind::WordPress,
    },
    Project {
        title: "Midnight Fragrance",
        description: "WordPress perfume e-commerce store featuring categorized products for Men, Women, and Unisex fragrances. SEO contribution: Enhanced category metadata, optimized images, and improved overall loading performance.",
        tech: WORDPRESS_STACK,
        link: "https://fragrance.sheefra.company/",
        repository: None,
        accent: Accent::Pink,
        kind: ProjectKind::WordPress,
    },
];

/// Projects of one kind, in catalog order.
pub fn projects_of(kind: ProjectKind) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |project| project.kind == kind)
}

/// Owned list backing the keyed project list for one filter value.
pub fn visible_projects(kind: ProjectKind) -> Vec<&'static Project> {
    projects_of(kind).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn filter_splits_the_catalog() {
        let custom = projects_of(ProjectKind::CustomCode).count();
        let wordpress = projects_of(ProjectKind::WordPress).count();
        assert_eq!((custom, wordpress), (9, 4));
        assert_eq!(custom + wordpress, PROJECTS.len());
    }

    #[test]
    fn default_filter_shows_custom_code_first() {
        let first = projects_of(ProjectKind::default()).next().map(|p| p.title);
        assert_eq!(first, Some("Vertexa Digital Studio"));
    }

    #[test]
    fn visible_list_follows_the_filter_in_catalog_order() {
        let wordpress: Vec<_> = visible_projects(ProjectKind::WordPress)
            .iter()
            .map(|project| project.title)
            .collect();
        let expected: Vec<_> = PROJECTS
            .iter()
            .filter(|project| project.kind == ProjectKind::WordPress)
            .map(|project| project.title)
            .collect();
        assert_eq!(wordpress, expected);
        assert_eq!(visible_projects(ProjectKind::CustomCode).len(), 9);
    }

    #[test]
    fn titles_are_unique_keys() {
        let titles: HashSet<_> = PROJECTS.iter().map(|project| project.title).collect();
        assert_eq!(titles.len(), PROJECTS.len());
    }

    #[test]
    fn every_project_links_out_and_lists_tech() {
        for project in &PROJECTS {
            assert!(project.link.starts_with("http"), "{}", project.title);
            assert!(!project.tech.is_empty(), "{}", project.title);
        }
    }
}
