//! Projects window: a filterable list of client and personal builds.

mod catalog;

use leptos::*;
use system_ui::prelude::*;

pub use catalog::{projects_of, visible_projects, Accent, Project, ProjectKind, PROJECTS};

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <Card layout_class="project-card">
            <span class="project-accent" data-accent=project.accent.token() aria-hidden="true"></span>
            <Cluster justify=LayoutJustify::Between align=LayoutAlign::Start>
                <Heading role=TextRole::Label>{project.title}</Heading>
                <Cluster gap=LayoutGap::Sm>
                    {project.repository.map(|href| {
                        view! {
                            <a class="project-link" href=href target="_blank" rel="noopener noreferrer" aria-label="Source code">
                                <Icon icon=IconName::Code />
                            </a>
                        }
                    })}
                    <a class="project-link" href=project.link target="_blank" rel="noopener noreferrer" aria-label="Visit site">
                        <Icon icon=IconName::Open />
                    </a>
                </Cluster>
            </Cluster>
            <Text tone=TextTone::Secondary>{project.description}</Text>
            <Cluster gap=LayoutGap::Sm>
                {project.tech.iter().map(|tech| view! { <Badge>{*tech}</Badge> }).collect_view()}
            </Cluster>
        </Card>
    }
}

#[component]
pub fn ProjectsApp() -> impl IntoView {
    let filter = create_rw_signal(ProjectKind::default());

    view! {
        <Stack layout_class="projects-app" gap=LayoutGap::Md padding=LayoutPadding::Lg>
            <Heading role=TextRole::Title>"Projects"</Heading>
            <SegmentedControl aria_label="Project type">
                {ProjectKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <SegmentedControlOption
                                selected=Signal::derive(move || filter.get() == kind)
                                on_click=Callback::new(move |_| filter.set(kind))
                            >
                                {kind.label()}
                            </SegmentedControlOption>
                        }
                    })
                    .collect_view()}
            </SegmentedControl>
            <Stack layout_class="project-list" gap=LayoutGap::Md>
                <For
                    each=move || visible_projects(filter.get())
                    key=|project| project.title
                    let:project
                >
                    <ProjectCard project=project />
                </For>
            </Stack>
        </Stack>
    }
}
