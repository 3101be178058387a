use super::*;

#[component]
/// Shared button primitive with standardized states, icon slots, and semantic shape tokens.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonShape::Standard)] shape: ButtonShape,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Native button type; `"submit"` inside a [`FormSurface`].
    #[prop(default = "button")]
    button_type: &'static str,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", layout_class);
    view! {
        <button
            type=button_type
            class=class
            aria-label=move || aria_label.get()
            aria-pressed=move || bool_token(pressed.get())
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=shape.token()
            data-ui-state=move || {
                if pressed.get() {
                    "pressed"
                } else if selected.get() {
                    "selected"
                } else {
                    "idle"
                }
            }
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// Shared circular icon-only button.
pub fn IconButton(
    icon: IconName,
    #[prop(default = ButtonVariant::Quiet)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || bool_token(pressed.get())
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=ButtonShape::Circle.token()
            data-ui-pressed=move || bool_token(pressed.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Md />
        </button>
    }
}

#[component]
/// Shared pill-style segmented control container.
pub fn SegmentedControl(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-segmented-control", layout_class)
            role="group"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="segmented-control"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared segmented control option button.
pub fn SegmentedControlOption(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-segmented-control-option", layout_class)
            aria-pressed=move || bool_token(selected.get())
            data-ui-primitive="true"
            data-ui-kind="segmented-control-option"
            data-ui-variant=ButtonVariant::Segmented.token()
            data-ui-shape=ButtonShape::Pill.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Form wrapper that suppresses native navigation and forwards submits.
pub fn FormSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_submit: Option<Callback<SubmitEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <form
            class=merge_layout_class("ui-form", layout_class)
            aria-label=aria_label
            novalidate=true
            data-ui-primitive="true"
            data-ui-kind="form"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                if let Some(on_submit) = on_submit.as_ref() {
                    on_submit.call(ev);
                }
            }
        >
            {children()}
        </form>
    }
}

#[component]
/// Shared labeled field wrapper that keeps copy and control structure on the primitive layer.
pub fn FieldGroup(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    /// Inline validation message rendered under the control.
    #[prop(optional, into)]
    error: MaybeSignal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            class=merge_layout_class("ui-field-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-group"
        >
            {title.map(|title| view! { <span data-ui-slot="title">{title}</span> })}
            <span data-ui-slot="control">{children()}</span>
            {move || {
                error
                    .get()
                    .map(|message| view! { <span data-ui-slot="error" role="alert">{message}</span> })
            }}
        </label>
    }
}

#[component]
/// Shared text input primitive.
pub fn TextField(
    #[prop(default = FieldVariant::Standard)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-field", layout_class)
            id=id
            placeholder=placeholder
            aria-label=aria_label
            autocomplete=autocomplete
            type=input_type.unwrap_or("text")
            required=required
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-variant=variant.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
    }
}

#[component]
/// Shared multiline text area primitive.
pub fn TextArea(
    #[prop(default = FieldVariant::Standard)] variant: FieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = 4)] rows: u8,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <textarea
            class=merge_layout_class("ui-textarea", layout_class)
            id=id
            placeholder=placeholder
            aria-label=aria_label
            rows=rows
            required=required
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="text-area"
            data-ui-variant=variant.token()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        ></textarea>
    }
}

#[component]
/// Shared linear meter for bounded values (skill level, pet stats).
pub fn ProgressBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = ProgressTone::Accent)] tone: ProgressTone,
    #[prop(optional, into)] aria_label: Option<String>,
    max: u16,
    #[prop(into)] value: MaybeSignal<u16>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-progress", layout_class)
            role="progressbar"
            aria-label=aria_label
            aria-valuemin="0"
            aria-valuemax=max
            aria-valuenow=move || value.get().min(max)
            data-ui-primitive="true"
            data-ui-kind="progress"
            data-ui-tone=tone.token()
        >
            <span
                data-ui-slot="fill"
                style=move || format!("width: {}%;", percent_of(value.get(), max))
            ></span>
        </div>
    }
}
