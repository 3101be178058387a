use system_ui::{Dock, DockButton};

use super::*;
use crate::manifest::DOCK_ENTRIES;

#[component]
pub(super) fn DesktopDock() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <Dock layout_class="desktop-dock" aria_label="Dock">
            {DOCK_ENTRIES
                .iter()
                .map(|entry| {
                    let window_id = entry.window_id;
                    let active = Signal::derive(move || {
                        runtime.state.with(|desktop| desktop.is_open(window_id))
                    });
                    view! {
                        <DockButton
                            icon=window_id.icon()
                            label=entry.label
                            active=active
                            on_click=Callback::new(move |_| runtime.open_window(window_id))
                        />
                    }
                })
                .collect_view()}
        </Dock>
    }
}
