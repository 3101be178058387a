//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod sticky_notes;
mod welcome;
mod window;

use leptos::*;
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconColumn, DesktopRoot, DesktopSide,
    DesktopWindowLayer,
};

use self::{
    dock::DesktopDock, sticky_notes::StickyNotes, welcome::WelcomeWidget, window::DraggableWindow,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
use crate::{
    manifest::{LEFT_LAUNCHERS, RIGHT_LAUNCHERS},
    model::{LauncherEntry, PointerPosition},
    reducer::DesktopAction,
};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[component]
fn LauncherColumn(side: DesktopSide, launchers: &'static [LauncherEntry]) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <DesktopIconColumn side=side>
            {launchers
                .iter()
                .map(|launcher| {
                    let launcher = *launcher;
                    view! {
                        <DesktopIconButton
                            icon=launcher.icon()
                            label=launcher.label
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::ActivateLauncher {
                                    target: launcher.target,
                                })
                            })
                        />
                    }
                })
                .collect_view()}
        </DesktopIconColumn>
    }
}

#[component]
/// Top-level desktop shell: launcher columns, welcome area, open windows and the dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let compact = Signal::derive(move || runtime.viewport.get().is_compact());
    let open_windows = Signal::derive(move || runtime.state.with(|desktop| desktop.open_ids()));

    view! {
        <DesktopRoot id="desktop-shell-root" compact=compact>
            <DesktopBackdrop>
                <div data-ui-slot="grid" aria-hidden="true"></div>
                <div data-ui-slot="glow" data-glow="top-left" aria-hidden="true"></div>
                <div data-ui-slot="glow" data-glow="bottom-right" aria-hidden="true"></div>
                <div data-ui-slot="glow" data-glow="center" aria-hidden="true"></div>
            </DesktopBackdrop>

            <LauncherColumn side=DesktopSide::Left launchers=LEFT_LAUNCHERS />
            <LauncherColumn side=DesktopSide::Right launchers=RIGHT_LAUNCHERS />

            <section class="desktop-center" aria-label="Welcome">
                <WelcomeWidget />
                <Show when=move || !compact.get()>
                    <StickyNotes />
                </Show>
            </section>

            <DesktopWindowLayer>
                <For
                    each=move || open_windows.get()
                    key=|window_id| *window_id
                    let:window_id
                >
                    <DraggableWindow window_id=window_id />
                </For>
            </DesktopWindowLayer>

            <DesktopDock />
        </DesktopRoot>
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn shell_leaves_the_main_landmark_to_the_page() {
        let source = include_str!("components.rs");
        let opening = ["<", "main"].concat();
        assert!(!source.contains(&opening));
    }
}
