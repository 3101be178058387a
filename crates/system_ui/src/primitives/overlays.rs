use super::*;

#[component]
/// Backdrop-dimmed modal sheet scoped to its containing window.
///
/// Clicks on the backdrop invoke `on_dismiss`; clicks inside the sheet do not.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:click=move |ev| {
                if let Some(on_dismiss) = on_dismiss.as_ref() {
                    on_dismiss.call(ev);
                }
            }
        >
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind="modal"
                data-ui-elevation=Elevation::Overlay.token()
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}

#[component]
/// Transient status toast.
pub fn Toast(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = TextTone::Success)] tone: TextTone,
    #[prop(optional)] icon: Option<IconName>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast", layout_class)
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-tone=tone.token()
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </div>
    }
}
