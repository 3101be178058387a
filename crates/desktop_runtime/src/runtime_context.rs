//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the viewport signal and boot-time deep
//! link handling. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    deep_link, host,
    model::{DesktopState, ViewportSize, WindowId},
    reducer::{reduce_desktop, DesktopAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive window stack.
    pub state: RwSignal<DesktopState>,
    /// Reactive browser viewport size, refreshed on `resize`.
    pub viewport: RwSignal<ViewportSize>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    pub fn open_window(&self, window_id: WindowId) {
        self.dispatch_action(DesktopAction::OpenWindow { window_id });
    }

    pub fn close_window(&self, window_id: WindowId) {
        self.dispatch_action(DesktopAction::CloseWindow { window_id });
    }

    /// Raises `window_id` unless it is already on top.
    ///
    /// Pointer presses inside the topmost window arrive constantly; skipping them keeps the
    /// counter and the reactive graph quiet.
    pub fn focus_window(&self, window_id: WindowId) {
        let already_top = self
            .state
            .with_untracked(|desktop| desktop.topmost() == Some(window_id));
        if !already_top {
            self.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    }
}

fn log_transition(previous: &DesktopState, next: &DesktopState) {
    if cfg!(debug_assertions) {
        let describe = |state: &DesktopState| {
            let mut entries = state.windows.clone();
            entries.sort_by_key(|entry| entry.stack_order);
            entries
                .iter()
                .map(|entry| format!("{}#{}", entry.id.token(), entry.stack_order))
                .collect::<Vec<_>>()
                .join(" < ")
        };
        logging::log!(
            "desktop stack: [{}] -> [{}]",
            describe(previous),
            describe(next)
        );
    }
}

fn apply_boot_deep_link(runtime: DesktopRuntimeContext) {
    let parsed = deep_link::current_deep_link();
    for rejected in &parsed.rejected {
        logging::warn!("{rejected}; skipping");
    }
    if !parsed.state.open.is_empty() {
        runtime.dispatch_action(DesktopAction::ApplyDeepLink {
            deep_link: parsed.state,
        });
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and applies the boot deep link.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let state = create_rw_signal(DesktopState::default());
    let viewport = create_rw_signal(host::viewport_size());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        let effects = reduce_desktop(&mut desktop, action);
        if desktop != previous {
            log_transition(&previous, &desktop);
            state.set(desktop);
        }
        for effect in effects {
            host::run_runtime_effect(effect);
        }
    });

    let resize = window_event_listener(ev::resize, move |_| {
        let next = host::viewport_size();
        if viewport.get_untracked() != next {
            viewport.set(next);
        }
    });
    on_cleanup(move || resize.remove());

    let runtime = DesktopRuntimeContext {
        state,
        viewport,
        dispatch,
    };
    provide_context(runtime);
    apply_boot_deep_link(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
