//! Skills window: self-assessed proficiency bars grouped by category.

use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percent, `0..=100`.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        name: "Languages",
        skills: &[skill("JavaScript", 90), skill("TypeScript", 85)],
    },
    SkillCategory {
        name: "Frontend",
        skills: &[
            skill("React", 90),
            skill("Next.js", 70),
            skill("TailwindCSS", 95),
        ],
    },
    SkillCategory {
        name: "Backend & Tools",
        skills: &[
            skill("Node.js", 85),
            skill("PostgreSQL", 75),
            skill("MongoDB", 70),
        ],
    },
    SkillCategory {
        name: "Version Control & DevOps",
        skills: &[skill("Git", 90), skill("Docker", 65)],
    },
];

#[component]
fn SkillMeter(skill: Skill) -> impl IntoView {
    view! {
        <Stack layout_class="skill-meter" gap=LayoutGap::Sm>
            <Cluster justify=LayoutJustify::Between>
                <Text role=TextRole::Label>{skill.name}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {format!("{}%", skill.level)}
                </Text>
            </Cluster>
            <ProgressBar aria_label=skill.name max=100 value=u16::from(skill.level) />
        </Stack>
    }
}

#[component]
pub fn SkillsApp() -> impl IntoView {
    view! {
        <Stack layout_class="skills-app" gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Heading role=TextRole::Title>"Skills & Technologies"</Heading>
            {SKILL_CATEGORIES
                .iter()
                .map(|category| {
                    view! {
                        <section class="skill-category" aria-label=category.name>
                            <Heading role=TextRole::Label tone=TextTone::Accent>
                                {category.name}
                            </Heading>
                            <Stack gap=LayoutGap::Md>
                                {category
                                    .skills
                                    .iter()
                                    .map(|skill| view! { <SkillMeter skill=*skill /> })
                                    .collect_view()}
                            </Stack>
                        </section>
                    }
                })
                .collect_view()}
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn categories_render_in_declared_order() {
        let names: Vec<_> = SKILL_CATEGORIES.iter().map(|category| category.name).collect();
        assert_eq!(
            names,
            [
                "Languages",
                "Frontend",
                "Backend & Tools",
                "Version Control & DevOps"
            ]
        );
    }

    #[test]
    fn skill_names_are_unique_and_levels_bounded() {
        let mut seen = HashSet::new();
        for skill in SKILL_CATEGORIES.iter().flat_map(|category| category.skills) {
            assert!(seen.insert(skill.name), "duplicate skill {}", skill.name);
            assert!(skill.level <= 100, "{} above 100%", skill.name);
        }
        assert_eq!(seen.len(), 10);
    }
}
