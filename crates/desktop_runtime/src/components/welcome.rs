use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use system_ui::{Heading, Text, TextRole, TextTone};

use super::*;
use crate::host;

const OWNER_NAME: &str = "Hania Seifeldeen";
const ROLES: [&str; 4] = [
    "Web Developer",
    "Creative Thinker",
    "Problem Solver",
    "Tech Enthusiast",
];

const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Salutation for the local hour of day.
pub(crate) fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypingPhase {
    Typing,
    Holding,
    Deleting,
}

/// Character-at-a-time role cycler behind the welcome headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Typewriter {
    role: usize,
    shown: usize,
    phase: TypingPhase,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self {
            role: 0,
            shown: 0,
            phase: TypingPhase::Typing,
        }
    }
}

impl Typewriter {
    fn role_len(&self) -> usize {
        ROLES[self.role].chars().count()
    }

    /// Visible prefix of the current role.
    pub(crate) fn text(&self) -> String {
        ROLES[self.role].chars().take(self.shown).collect()
    }

    /// Advances one step and returns how long to wait before the next one.
    pub(crate) fn tick(&mut self) -> Duration {
        match self.phase {
            TypingPhase::Typing => {
                self.shown = (self.shown + 1).min(self.role_len());
                if self.shown == self.role_len() {
                    self.phase = TypingPhase::Holding;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            TypingPhase::Holding => {
                self.phase = TypingPhase::Deleting;
                self.shown = self.shown.saturating_sub(1);
                DELETE_DELAY
            }
            TypingPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.role = (self.role + 1) % ROLES.len();
                    self.phase = TypingPhase::Typing;
                    TYPE_DELAY
                } else {
                    DELETE_DELAY
                }
            }
        }
    }
}

fn schedule_tick(
    typewriter: RwSignal<Typewriter>,
    pending: StoredValue<Option<TimeoutHandle>>,
    delay: Duration,
) {
    let scheduled = set_timeout_with_handle(
        move || {
            let mut next = typewriter.get_untracked();
            let delay = next.tick();
            typewriter.set(next);
            schedule_tick(typewriter, pending, delay);
        },
        delay,
    );
    match scheduled {
        Ok(handle) => pending.set_value(Some(handle)),
        Err(err) => logging::warn!("typewriter timer failed: {err:?}"),
    }
}

#[component]
pub(super) fn WelcomeWidget() -> impl IntoView {
    let greeting = greeting_for_hour(host::local_hour());
    let typewriter = create_rw_signal(Typewriter::default());
    let pending = store_value(None::<TimeoutHandle>);

    schedule_tick(typewriter, pending, TYPE_DELAY);
    on_cleanup(move || {
        let _ = pending.try_update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    });

    view! {
        <section class="welcome-widget" aria-label="Welcome">
            <Text role=TextRole::Label tone=TextTone::Secondary>
                {format!("{greeting}, I'm")}
            </Text>
            <Heading role=TextRole::Display>{OWNER_NAME}</Heading>
            <p class="welcome-role" aria-live="polite">
                <span>{move || typewriter.with(Typewriter::text)}</span>
                <span class="welcome-caret" aria-hidden="true">"|"</span>
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run_until_role_changes(typewriter: &mut Typewriter) -> Vec<Duration> {
        let start = typewriter.role;
        let mut delays = Vec::new();
        while typewriter.role == start {
            delays.push(typewriter.tick());
        }
        delays
    }

    #[test]
    fn greeting_boundaries_follow_the_clock() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }

    #[test]
    fn types_a_character_per_tick_then_holds() {
        let mut typewriter = Typewriter::default();
        assert_eq!(typewriter.tick(), TYPE_DELAY);
        assert_eq!(typewriter.text(), "W");

        for _ in 1.."Web Developer".len() - 1 {
            assert_eq!(typewriter.tick(), TYPE_DELAY);
        }
        assert_eq!(typewriter.tick(), HOLD_DELAY);
        assert_eq!(typewriter.text(), "Web Developer");
    }

    #[test]
    fn full_cycle_deletes_back_to_empty_and_advances() {
        let mut typewriter = Typewriter::default();
        let delays = run_until_role_changes(&mut typewriter);

        let len = "Web Developer".len();
        assert_eq!(delays.len(), 2 * len);
        assert_eq!(delays.iter().filter(|d| **d == HOLD_DELAY).count(), 1);
        assert_eq!(delays.iter().filter(|d| **d == DELETE_DELAY).count(), len - 1);
        assert_eq!(typewriter.text(), "");
        assert_eq!(typewriter.role, 1);
    }

    #[test]
    fn roles_wrap_around() {
        let mut typewriter = Typewriter::default();
        for _ in 0..ROLES.len() {
            run_until_role_changes(&mut typewriter);
        }
        assert_eq!(typewriter.role, 0);
        assert_eq!(typewriter.phase, TypingPhase::Typing);
    }
}
