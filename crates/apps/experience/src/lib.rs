//! Experience window: roles grouped by the stack they were built on.

use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Track {
    #[default]
    React,
    WordPress,
}

impl Track {
    const ALL: [Track; 2] = [Track::React, Track::WordPress];

    fn label(self) -> &'static str {
        match self {
            Self::React => "React",
            Self::WordPress => "WordPress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub link: Option<&'static str>,
    pub track: Track,
}

pub static ROLES: [Role; 7] = [
    Role {
        title: "Founder & CEO",
        company: "Vertexa Digital Studios",
        location: "Rashaya, Lebanon | Remote",
        period: "Nov 2025 - Present",
        description: "I run my own web development agency where I handle full-stack projects end to end, covering web development, UX/UI design, SEO, and branding. I lead every project from concept to deployment, building responsive websites and e-commerce solutions while managing the technical architecture, code quality, and overall platform performance.",
        skills: &[
            "React",
            "Typescript",
            "Tailwind",
            "Node.js",
            "PostgreSQL",
            "WordPress",
            "SEO",
            "UI/UX Design",
            "Client Relations",
            "Branding",
        ],
        link: Some("https://www.vertexa.digital"),
        track: Track::React,
    },
    Role {
        title: "Full Stack Developer",
        company: "Connect Services SARL",
        location: "Dahr Alahmar, Lebanon | On-site",
        period: "Nov 2025 - Present",
        description: "I design and develop modern, responsive websites using React, including the company’s official site showcasing its services and portfolio. I build and maintain high-quality, performance-optimized websites for a diverse range of clients, collaborating closely with a graphic designer to translate visual concepts and brand identities into functional, user-centered web experiences. I also develop full-stack solutions with modern technologies to ensure scalability, security, and seamless user interaction, while creating intuitive UI/UX designs that prioritize accessibility, aesthetics, and responsiveness across all devices.",
        skills: &[
            "React",
            "Typescript",
            "Tailwind",
            "Node.js",
            "PostgreSQL",
            "UI/UX Design",
            "Client Relations",
        ],
        link: Some("https://connect-services.me"),
        track: Track::React,
    },
    Role {
        title: "Frontend Developer",
        company: "The Pixel Company",
        location: "Cairo-Egypt | Remote",
        period: "Aug 2024 - Oct 2024",
        description: "I collaborated with clients under NDA to gather requirements, clarify their vision, and deliver tailored technical solutions, partnering closely with UI/UX designers to transform protected design concepts into functional, polished interfaces. I built responsive web applications using React and occasional vanilla JavaScript for advanced interactivity, ensuring compatibility and a seamless experience across devices.",
        skills: &["Git", "TypeScript", "React", "TailwindCSS", "Client Relations"],
        link: None,
        track: Track::React,
    },
    Role {
        title: "Web Developer Intern",
        company: "OctoVertex",
        location: "Beirut, Lebanon | Remote",
        period: "Dec 2024 - May 2025",
        description: "I engaged with clients to gather requirements and deliver tailored technical solutions, collaborating with UI/UX designers to transform concepts into intuitive, visually appealing interfaces. I built responsive web applications using React, WordPress, and PHP, ensuring functionality, performance, and a seamless user experience.",
        skills: &["Git", "TypeScript", "React", "WordPress"],
        link: Some("https://octovertex.com/"),
        track: Track::React,
    },
    Role {
        title: "WordPress Developer",
        company: "Freelance – Reporting to Project Manager & SEO Specialist",
        location: "Cairo, Egypt | Remote",
        period: "Apr 2024 - Present",
        description: "I build and customize WordPress business and eCommerce sites optimized for search performance, implementing SEO-driven site structures, metadata, heading hierarchy, URL optimization, schema markup, and on-page SEO. I conduct technical SEO audits to identify crawlability, indexing, and speed issues, and improve Core Web Vitals through image compression, caching, script minimization, and responsive layouts. I translate project requirements into responsive, mobile-first, search-optimized designs and implement plugins and custom features aligned with brand identity, performance targets, and SEO goals.",
        skills: &["WordPress", "SEO"],
        link: None,
        track: Track::WordPress,
    },
    Role {
        title: "WordPress Developer Intern",
        company: "Sheefra",
        location: "Beirut, Lebanon | Remote",
        period: "May 2024 - May 2025",
        description: "Developed and customized three WordPress websites, including two eCommerce stores and one business site, building an eCommerce perfume website with optimized product presentation and smooth cart functionality. Designed a mobile-friendly online store for HizkezMizzek, aligning site structure with brand identity and SEO requirements. Resolved front-end issues affecting performance, usability, and search visibility, while executing on-page SEO tasks such as metadata optimization, alt-text updates, image compression, and speed improvements.",
        skills: &["WordPress", "SEO"],
        link: Some("https://www.sheefra.io/"),
        track: Track::WordPress,
    },
    Role {
        title: "React Developer Intern",
        company: "YAFA Cloud Services LLC",
        location: "Dubai, UAE | Remote",
        period: "Apr 2024 - Oct 2024",
        description: "I utilized React.js and TypeScript to develop and maintain interactive user interfaces for the company's website. I collaborated with design and backend teams to ensure seamless integration of frontend components and implemented responsive design principles to enhance user experience across various devices and screen sizes. I conducted code reviews and participated in Agile development processes to deliver high-quality software solutions. I worked closely with senior developers to troubleshoot and debug frontend issues, ensuring optimal performance and functionality. Additionally, I worked on a blogging system for the company's website, focusing on the frontend using React, TypeScript, and Material-UI.",
        skills: &["React", "Javascript", "Material-UI"],
        link: Some("https://yafatek.dev/"),
        track: Track::React,
    },
];

pub fn roles_on(track: Track) -> Vec<&'static Role> {
    ROLES.iter().filter(|role| role.track == track).collect()
}

#[component]
fn RoleCard(role: &'static Role) -> impl IntoView {
    view! {
        <Card layout_class="experience-card">
            <Cluster justify=LayoutJustify::Between align=LayoutAlign::Start>
                <Cluster gap=LayoutGap::Sm align=LayoutAlign::Start>
                    <span class="experience-badge" aria-hidden="true">
                        <Icon icon=IconName::Building />
                    </span>
                    <Stack gap=LayoutGap::None>
                        <Heading role=TextRole::Label>{role.title}</Heading>
                        <Text tone=TextTone::Accent>{role.company}</Text>
                    </Stack>
                </Cluster>
                {role.link.map(|href| {
                    view! {
                        <a class="experience-link" href=href target="_blank" rel="noopener noreferrer" aria-label="Company site">
                            <Icon icon=IconName::Open />
                        </a>
                    }
                })}
            </Cluster>
            <Cluster gap=LayoutGap::Md layout_class="experience-meta">
                <Cluster gap=LayoutGap::Sm>
                    <Icon icon=IconName::Calendar size=IconSize::Xs />
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{role.period}</Text>
                </Cluster>
                <Cluster gap=LayoutGap::Sm>
                    <Icon icon=IconName::Location size=IconSize::Xs />
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{role.location}</Text>
                </Cluster>
            </Cluster>
            <Text tone=TextTone::Secondary>{role.description}</Text>
            <Cluster gap=LayoutGap::Sm>
                {role.skills.iter().map(|skill| view! { <Badge>{*skill}</Badge> }).collect_view()}
            </Cluster>
        </Card>
    }
}

#[component]
pub fn ExperienceApp() -> impl IntoView {
    let track = create_rw_signal(Track::default());

    view! {
        <Stack layout_class="experience-app" gap=LayoutGap::Md padding=LayoutPadding::Lg>
            <Heading role=TextRole::Title>"Experience"</Heading>
            <SegmentedControl aria_label="Experience track">
                {Track::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <SegmentedControlOption
                                selected=Signal::derive(move || track.get() == option)
                                on_click=Callback::new(move |_| track.set(option))
                            >
                                {option.label()}
                            </SegmentedControlOption>
                        }
                    })
                    .collect_view()}
            </SegmentedControl>
            <Stack layout_class="experience-list" gap=LayoutGap::Md>
                <For each=move || roles_on(track.get()) key=|role| role.title let:role>
                    <RoleCard role=role />
                </For>
            </Stack>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn react_is_the_default_track() {
        assert_eq!(Track::default(), Track::React);
        assert_eq!(roles_on(Track::React).len(), 5);
        assert_eq!(roles_on(Track::WordPress).len(), 2);
    }

    #[test]
    fn filtering_preserves_listing_order() {
        let titles: Vec<_> = roles_on(Track::WordPress)
            .into_iter()
            .map(|role| role.title)
            .collect();
        assert_eq!(titles, ["WordPress Developer", "WordPress Developer Intern"]);
    }

    #[test]
    fn links_are_absolute_when_present() {
        for role in &ROLES {
            if let Some(link) = role.link {
                assert!(link.starts_with("https://"), "{}", role.company);
            }
        }
    }
}
