//! Contact window: social links and a validated message form with a simulated send.

mod form;
mod toast;

use std::time::Duration;

use leptos::*;
use system_ui::prelude::*;

pub use form::{ContactForm, ContactFormError};
pub use toast::SentToast;

const SEND_DELAY: Duration = Duration::from_millis(1500);
const TOAST_DURATION: Duration = Duration::from_millis(4000);

struct SocialLink {
    label: &'static str,
    href: &'static str,
    username: &'static str,
    icon: IconName,
}

static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/hania-cs",
        username: "@hania-cs",
        icon: IconName::BranchFork,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/hania-seif/",
        username: "Hania Seifeldeen",
        icon: IconName::PeopleTeam,
    },
    SocialLink {
        label: "Email",
        href: "mailto:haniacs05@gmail.com",
        username: "haniacs05@gmail.com",
        icon: IconName::Mail,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SendPhase {
    Editing,
    Sending,
}

#[component]
pub fn ContactApp() -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());
    let error = create_rw_signal(None::<ContactFormError>);
    let phase = create_rw_signal(SendPhase::Editing);
    let toast = create_rw_signal(SentToast::default());

    let sending = Signal::derive(move || phase.get() == SendPhase::Sending);
    let error_text = Signal::derive(move || error.get().map(|err| err.to_string()));

    let edit = move |apply: fn(&mut ContactForm, String)| {
        Callback::new(move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            form.update(|form| apply(form, value));
            if error.get_untracked().is_some() {
                error.set(None);
            }
        })
    };

    let finish_send = move || {
        let _ = form.try_update(ContactForm::clear);
        let _ = phase.try_set(SendPhase::Editing);
        let Some(serial) = toast.try_update(SentToast::show) else {
            return;
        };
        set_timeout(
            move || {
                let _ = toast.try_update(|toast| toast.expire(serial));
            },
            TOAST_DURATION,
        );
    };

    let submit = Callback::new(move |_: ev::SubmitEvent| {
        if sending.get_untracked() {
            return;
        }
        match form.with_untracked(ContactForm::validate) {
            Ok(()) => {
                error.set(None);
                toast.update(SentToast::dismiss);
                phase.set(SendPhase::Sending);
                set_timeout(finish_send, SEND_DELAY);
            }
            Err(err) => error.set(Some(err)),
        }
    });

    view! {
        <Stack layout_class="contact-app" gap=LayoutGap::Lg padding=LayoutPadding::Lg>
            <Stack gap=LayoutGap::Sm>
                <Heading role=TextRole::Title>"Get in Touch"</Heading>
                <Text tone=TextTone::Secondary>
                    "Have a project in mind or just want to chat? Drop me a message!"
                </Text>
            </Stack>

            <Grid layout_class="contact-socials" gap=LayoutGap::Sm columns=2>
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                class="contact-social"
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <span class="contact-social-icon">
                                    <Icon icon=link.icon size=IconSize::Md />
                                </span>
                                <Stack gap=LayoutGap::None>
                                    <Text role=TextRole::Label>{link.label}</Text>
                                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                                        {link.username}
                                    </Text>
                                </Stack>
                            </a>
                        }
                    })
                    .collect_view()}
            </Grid>

            <FormSurface layout_class="contact-form" aria_label="Contact form" on_submit=submit>
                <FieldGroup error=error_text>
                    <Grid gap=LayoutGap::Md columns=2>
                        <TextField
                            placeholder="Your name"
                            aria_label="Your name"
                            autocomplete="name"
                            required=true
                            value=Signal::derive(move || form.with(|form| form.name.clone()))
                            disabled=sending
                            on_input=edit(|form, value| form.name = value)
                        />
                        <TextField
                            input_type="email"
                            placeholder="Your email"
                            aria_label="Your email"
                            autocomplete="email"
                            required=true
                            value=Signal::derive(move || form.with(|form| form.email.clone()))
                            disabled=sending
                            on_input=edit(|form, value| form.email = value)
                        />
                    </Grid>
                    <TextArea
                        placeholder="Your message..."
                        aria_label="Your message"
                        rows=4
                        required=true
                        value=Signal::derive(move || form.with(|form| form.message.clone()))
                        disabled=sending
                        on_input=edit(|form, value| form.message = value)
                    />
                </FieldGroup>
                <Button
                    variant=ButtonVariant::Primary
                    button_type="submit"
                    layout_class="contact-submit"
                    disabled=sending
                    leading_icon=IconName::Send
                >
                    {move || if sending.get() { "Sending..." } else { "Send Message" }}
                </Button>
            </FormSurface>

            <Show when=move || toast.with(SentToast::visible)>
                <Toast icon=IconName::Checkmark>
                    <Text role=TextRole::Label>"Message sent!"</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        "Thanks for reaching out. I'll get back to you soon!"
                    </Text>
                </Toast>
            </Show>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn social_links_carry_their_brand_glyphs() {
        let icons: Vec<_> = SOCIAL_LINKS.iter().map(|link| (link.label, link.icon)).collect();
        assert_eq!(
            icons,
            [
                ("GitHub", IconName::BranchFork),
                ("LinkedIn", IconName::PeopleTeam),
                ("Email", IconName::Mail),
            ]
        );
    }
}
