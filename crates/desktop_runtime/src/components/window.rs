use leptos::leptos_dom::helpers::WindowListenerHandle;
use system_ui::{
    IconName, WindowBody, WindowControlButton, WindowControlKind, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

use super::*;
use crate::{
    apps::render_window_contents,
    drag::{initial_position, WindowGeometry},
    host,
    model::WindowId,
};

/// Browser-window listeners held only for the duration of one drag.
struct DragListeners {
    moves: WindowListenerHandle,
    ups: WindowListenerHandle,
    cancels: WindowListenerHandle,
}

impl DragListeners {
    fn remove(self) {
        self.moves.remove();
        self.ups.remove();
        self.cancels.remove();
    }
}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DraggableWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let geometry = create_rw_signal(WindowGeometry::new(initial_position(
        runtime.viewport.get_untracked(),
        host::random_unit(),
    )));
    let listeners = store_value(None::<DragListeners>);

    let release_listeners = move || {
        let _ = listeners.try_update_value(|slot| {
            if let Some(active) = slot.take() {
                active.remove();
            }
        });
    };
    on_cleanup(release_listeners);

    let focused = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| desktop.topmost() == Some(window_id))
    });
    let style = Signal::derive(move || {
        let viewport = runtime.viewport.get();
        let rect = geometry.with(|geometry| geometry.rendered_rect(viewport));
        let stack_order = runtime
            .state
            .with(|desktop| desktop.stack_order(window_id).unwrap_or_default());
        format!("{}z-index:{};", rect.to_style(), stack_order)
    });
    let maximized = Signal::derive(move || geometry.with(|geometry| geometry.maximized));
    let dragging = Signal::derive(move || geometry.with(WindowGeometry::is_dragging));

    let end_drag = move || {
        geometry.update(|geometry| {
            geometry.end_drag();
        });
        release_listeners();
    };

    let begin_drag = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.focus_window(window_id);

        let pointer = pointer_from_pointer_event(&ev);
        geometry.update(|geometry| geometry.begin_drag(pointer));

        release_listeners();
        let moves = window_event_listener(ev::pointermove, move |ev| {
            let pointer = pointer_from_pointer_event(&ev);
            let mut next = geometry.get_untracked();
            if next.drag_to(pointer) {
                geometry.set(next);
            }
        });
        let ups = window_event_listener(ev::pointerup, move |_| end_drag());
        let cancels = window_event_listener(ev::pointercancel, move |_| end_drag());
        listeners.set_value(Some(DragListeners {
            moves,
            ups,
            cancels,
        }));
    };

    let toggle_maximized = move || geometry.update(WindowGeometry::toggle_maximized);

    view! {
        <WindowFrame
            id=window_id.dom_id()
            layout_class="desktop-window"
            style=style
            aria_label=window_id.title()
            focused=focused
            maximized=maximized
            dragging=dragging
            on_pointerdown=Callback::new(move |_| runtime.focus_window(window_id))
        >
            <WindowTitleBar
                on_pointerdown=Callback::new(begin_drag)
                on_dblclick=Callback::new(move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    toggle_maximized();
                })
            >
                <WindowControls>
                    <WindowControlButton
                        kind=WindowControlKind::Close
                        aria_label="Close window"
                        icon=IconName::Dismiss
                        on_click=Callback::new(move |_| runtime.close_window(window_id))
                    />
                    <WindowControlButton
                        kind=WindowControlKind::Minimize
                        aria_label="Minimize window"
                        icon=IconName::WindowMinimize
                    />
                    <WindowControlButton
                        kind=WindowControlKind::Maximize
                        aria_label=Signal::derive(move || {
                            let label = if maximized.get() {
                                "Restore window"
                            } else {
                                "Maximize window"
                            };
                            label.to_string()
                        })
                        icon=Signal::derive(move || {
                            if maximized.get() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            }
                        })
                        on_click=Callback::new(move |_| toggle_maximized())
                    />
                </WindowControls>
                <WindowTitle>{window_id.title()}</WindowTitle>
                <span data-ui-slot="titlebar-spacer" aria-hidden="true"></span>
            </WindowTitleBar>
            <WindowBody>{render_window_contents(window_id)}</WindowBody>
        </WindowFrame>
    }
}
