//! Pixel Pet: a tiny virtual pet whose stats decay over time.

mod stats;

use std::time::Duration;

use leptos::*;
use system_ui::prelude::*;

pub use stats::{PetActionError, PetMood, PetStats};

const PET_NAME: &str = "Pixel";
const DECAY_INTERVAL: Duration = Duration::from_millis(3000);
const MESSAGE_DURATION: Duration = Duration::from_millis(1500);
const BOUNCE_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CareAction {
    Feed,
    Play,
    Sleep,
}

impl CareAction {
    fn label(self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Play => "Play",
            Self::Sleep => "Sleep",
        }
    }

    fn icon(self) -> IconName {
        match self {
            Self::Feed => IconName::Food,
            Self::Play => IconName::Sparkle,
            Self::Sleep => IconName::WeatherMoon,
        }
    }

    fn apply(self, stats: &mut PetStats) -> Result<&'static str, PetActionError> {
        match self {
            Self::Feed => stats.feed(),
            Self::Play => stats.play(),
            Self::Sleep => stats.sleep(),
        }
    }
}

/// Latest speech bubble. `serial` lets a stale clear timer recognize it was superseded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Bubble {
    serial: u64,
    text: Option<String>,
}

#[component]
fn StatRow(
    icon: IconName,
    label: &'static str,
    tone: ProgressTone,
    #[prop(into)] value: Signal<u8>,
) -> impl IntoView {
    view! {
        <Cluster layout_class="pet-stat" gap=LayoutGap::Sm align=LayoutAlign::Center>
            <Icon icon=icon size=IconSize::Sm />
            <ProgressBar
                tone=tone
                aria_label=label
                max=100
                value=Signal::derive(move || u16::from(value.get()))
            />
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                {move || format!("{}%", value.get())}
            </Text>
        </Cluster>
    }
}

#[component]
pub fn PetApp() -> impl IntoView {
    let stats = create_rw_signal(PetStats::default());
    let bubble = create_rw_signal(Bubble::default());
    let bouncing = create_rw_signal(false);

    match set_interval_with_handle(move || stats.update(PetStats::decay), DECAY_INTERVAL) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("pet decay timer failed: {err:?}"),
    }

    let say = move |text: String| {
        let mut serial = 0;
        bubble.update(|bubble| {
            bubble.serial += 1;
            bubble.text = Some(text);
            serial = bubble.serial;
        });
        set_timeout(
            move || {
                let _ = bubble.try_update(|bubble| {
                    if bubble.serial == serial {
                        bubble.text = None;
                    }
                });
            },
            MESSAGE_DURATION,
        );
    };

    let care = move |action: CareAction| {
        let mut outcome = Ok("");
        stats.update(|stats| outcome = action.apply(stats));
        match outcome {
            Ok(reply) => {
                say(reply.to_string());
                bouncing.set(true);
                set_timeout(
                    move || {
                        let _ = bouncing.try_set(false);
                    },
                    BOUNCE_DURATION,
                );
            }
            Err(refusal) => say(refusal.to_string()),
        }
    };

    let mood = Signal::derive(move || stats.with(PetStats::mood));

    view! {
        <Stack layout_class="pet-app" gap=LayoutGap::Lg align=LayoutAlign::Center padding=LayoutPadding::Lg>
            <Heading role=TextRole::Title>{PET_NAME}</Heading>

            <div class="pet-stage">
                <Show when=move || bubble.with(|bubble| bubble.text.is_some())>
                    <div class="pet-bubble" role="status" aria-live="polite">
                        {move || bubble.with(|bubble| bubble.text.clone().unwrap_or_default())}
                    </div>
                </Show>
                <div
                    class="pet-body"
                    data-mood=move || mood.get().token()
                    data-ui-state=move || if bouncing.get() { "bouncing" } else { "idle" }
                >
                    <span class="pet-shine" aria-hidden="true"></span>
                    <span class="pet-face">{move || mood.get().face()}</span>
                </div>
                <span class="pet-mood">{move || mood.get().token()}</span>
            </div>

            <Stack layout_class="pet-stats" gap=LayoutGap::Sm>
                <StatRow
                    icon=IconName::Food
                    label="Hunger"
                    tone=ProgressTone::Warm
                    value=Signal::derive(move || stats.with(|stats| stats.hunger))
                />
                <StatRow
                    icon=IconName::Heart
                    label="Happiness"
                    tone=ProgressTone::Accent
                    value=Signal::derive(move || stats.with(|stats| stats.happiness))
                />
                <StatRow
                    icon=IconName::Flash
                    label="Energy"
                    tone=ProgressTone::Bright
                    value=Signal::derive(move || stats.with(|stats| stats.energy))
                />
            </Stack>

            <Cluster layout_class="pet-actions" gap=LayoutGap::Md justify=LayoutJustify::Center>
                {[CareAction::Feed, CareAction::Play, CareAction::Sleep]
                    .into_iter()
                    .map(move |action| {
                        view! {
                            <Button
                                layout_class="pet-action"
                                leading_icon=action.icon()
                                on_click=Callback::new(move |_| care(action))
                            >
                                {action.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </Cluster>
        </Stack>
    }
}
