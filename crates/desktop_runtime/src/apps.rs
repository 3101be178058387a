//! Maps each [`WindowId`] to the app crate that renders its body.

use desktop_app_about::AboutApp;
use desktop_app_contact::ContactApp;
use desktop_app_experience::ExperienceApp;
use desktop_app_pet::PetApp;
use desktop_app_projects::ProjectsApp;
use desktop_app_skills::SkillsApp;
use leptos::*;

use crate::model::WindowId;

/// Renders the content view hosted inside the window frame for `window_id`.
pub fn render_window_contents(window_id: WindowId) -> View {
    match window_id {
        WindowId::About => view! { <AboutApp /> }.into_view(),
        WindowId::Projects => view! { <ProjectsApp /> }.into_view(),
        WindowId::Experience => view! { <ExperienceApp /> }.into_view(),
        WindowId::Skills => view! { <SkillsApp /> }.into_view(),
        WindowId::Contact => view! { <ContactApp /> }.into_view(),
        WindowId::Pet => view! { <PetApp /> }.into_view(),
    }
}
