use thiserror::Error;

pub(crate) const STAT_MAX: u8 = 100;

/// Refusals returned by the care actions. The display text is what the pet says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PetActionError {
    #[error("I'm full! 🫃")]
    Full,
    #[error("Too tired... 😴")]
    TooTired,
    #[error("Not sleepy! 😊")]
    NotSleepy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetMood {
    Happy,
    Hungry,
    Sleepy,
    Excited,
    Sad,
}

impl PetMood {
    pub fn token(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Hungry => "hungry",
            Self::Sleepy => "sleepy",
            Self::Excited => "excited",
            Self::Sad => "sad",
        }
    }

    pub fn face(self) -> &'static str {
        match self {
            Self::Happy => "(◕‿◕)",
            Self::Hungry => "(◕︿◕)",
            Self::Sleepy => "(－ω－)",
            Self::Excited => "(★‿★)",
            Self::Sad => "(╥﹏╥)",
        }
    }
}

fn raise(stat: u8, amount: u8) -> u8 {
    stat.saturating_add(amount).min(STAT_MAX)
}

/// Hunger, happiness and energy, each held in `0..=100`.
///
/// Hunger reads as "fullness": 100 is sated and low values make the pet hungry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetStats {
    pub hunger: u8,
    pub happiness: u8,
    pub energy: u8,
}

impl Default for PetStats {
    fn default() -> Self {
        Self {
            hunger: 70,
            happiness: 80,
            energy: 60,
        }
    }
}

impl PetStats {
    /// One decay step, applied by the pet's interval timer.
    pub fn decay(&mut self) {
        self.hunger = self.hunger.saturating_sub(2);
        self.happiness = self.happiness.saturating_sub(1);
        self.energy = self.energy.saturating_sub(1);
    }

    pub fn feed(&mut self) -> Result<&'static str, PetActionError> {
        if self.hunger >= STAT_MAX {
            return Err(PetActionError::Full);
        }
        self.hunger = raise(self.hunger, 25);
        self.energy = raise(self.energy, 5);
        Ok("Yummy! 🍕")
    }

    pub fn play(&mut self) -> Result<&'static str, PetActionError> {
        if self.energy < 10 {
            return Err(PetActionError::TooTired);
        }
        self.happiness = raise(self.happiness, 20);
        self.energy = self.energy.saturating_sub(15);
        self.hunger = self.hunger.saturating_sub(10);
        Ok("Wheee! 🎉")
    }

    pub fn sleep(&mut self) -> Result<&'static str, PetActionError> {
        if self.energy >= STAT_MAX {
            return Err(PetActionError::NotSleepy);
        }
        self.energy = raise(self.energy, 30);
        self.hunger = self.hunger.saturating_sub(5);
        Ok("Zzz... 💤")
    }

    /// First matching rule wins: sleepy, hungry, sad, excited, then happy.
    pub fn mood(&self) -> PetMood {
        if self.energy < 20 {
            PetMood::Sleepy
        } else if self.hunger < 30 {
            PetMood::Hungry
        } else if self.happiness < 30 {
            PetMood::Sad
        } else if self.happiness > 80 && self.hunger > 50 && self.energy > 50 {
            PetMood::Excited
        } else {
            PetMood::Happy
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn stats(hunger: u8, happiness: u8, energy: u8) -> PetStats {
        PetStats {
            hunger,
            happiness,
            energy,
        }
    }

    #[test]
    fn starts_content() {
        let pet = PetStats::default();
        assert_eq!(pet, stats(70, 80, 60));
        assert_eq!(pet.mood(), PetMood::Happy);
    }

    #[test]
    fn decay_floors_at_zero() {
        let mut pet = stats(1, 0, 1);
        pet.decay();
        assert_eq!(pet, stats(0, 0, 0));

        let mut pet = PetStats::default();
        pet.decay();
        assert_eq!(pet, stats(68, 79, 59));
    }

    #[test]
    fn feeding_caps_at_full_then_refuses() {
        let mut pet = stats(90, 50, 98);
        assert_eq!(pet.feed(), Ok("Yummy! 🍕"));
        assert_eq!(pet, stats(100, 50, 100));

        assert_eq!(pet.feed(), Err(PetActionError::Full));
        assert_eq!(pet, stats(100, 50, 100));
        assert_eq!(PetActionError::Full.to_string(), "I'm full! 🫃");
    }

    #[test]
    fn play_needs_energy() {
        let mut pet = stats(5, 90, 12);
        assert_eq!(pet.play(), Ok("Wheee! 🎉"));
        assert_eq!(pet, stats(0, 100, 0));

        assert_eq!(pet.play(), Err(PetActionError::TooTired));
        assert_eq!(PetActionError::TooTired.to_string(), "Too tired... 😴");
    }

    #[test]
    fn play_at_exactly_ten_energy_is_allowed() {
        let mut pet = stats(50, 50, 10);
        assert!(pet.play().is_ok());
        assert_eq!(pet.energy, 0);
    }

    #[test]
    fn sleep_refuses_when_rested() {
        let mut pet = stats(3, 50, 80);
        assert_eq!(pet.sleep(), Ok("Zzz... 💤"));
        assert_eq!(pet, stats(0, 50, 100));

        assert_eq!(pet.sleep(), Err(PetActionError::NotSleepy));
        assert_eq!(PetActionError::NotSleepy.to_string(), "Not sleepy! 😊");
    }

    #[test]
    fn mood_rules_apply_in_priority_order() {
        assert_eq!(stats(10, 10, 10).mood(), PetMood::Sleepy);
        assert_eq!(stats(10, 10, 50).mood(), PetMood::Hungry);
        assert_eq!(stats(60, 10, 50).mood(), PetMood::Sad);
        assert_eq!(stats(60, 90, 60).mood(), PetMood::Excited);
        assert_eq!(stats(60, 80, 60).mood(), PetMood::Happy);
        assert_eq!(stats(50, 90, 60).mood(), PetMood::Happy);
    }

    #[test]
    fn every_mood_has_a_distinct_face() {
        let moods = [
            PetMood::Happy,
            PetMood::Hungry,
            PetMood::Sleepy,
            PetMood::Excited,
            PetMood::Sad,
        ];
        let mut faces: Vec<_> = moods.iter().map(|mood| mood.face()).collect();
        faces.sort_unstable();
        faces.dedup();
        assert_eq!(faces.len(), moods.len());
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        #[derive(Debug, Clone, Copy)]
        enum Step {
            Decay,
            Feed,
            Play,
            Sleep,
        }

        fn step_strategy() -> impl Strategy<Value = Step> {
            prop_oneof![
                Just(Step::Decay),
                Just(Step::Feed),
                Just(Step::Play),
                Just(Step::Sleep),
            ]
        }

        proptest! {
            #[test]
            fn stats_stay_in_range(steps in prop::collection::vec(step_strategy(), 0..200)) {
                let mut pet = PetStats::default();
                for step in steps {
                    let before = pet;
                    let outcome = match step {
                        Step::Decay => {
                            pet.decay();
                            Ok("")
                        }
                        Step::Feed => pet.feed(),
                        Step::Play => pet.play(),
                        Step::Sleep => pet.sleep(),
                    };
                    if outcome.is_err() {
                        prop_assert_eq!(pet, before);
                    }
                    prop_assert!(pet.hunger <= STAT_MAX);
                    prop_assert!(pet.happiness <= STAT_MAX);
                    prop_assert!(pet.energy <= STAT_MAX);
                }
            }
        }
    }
}
