//! The pet entity: stored baselines, derived attribute views, and the
//! sparse patch used for partial updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decay::{self, Direction};
use crate::ids::PetId;
use crate::species::{Species, tick_profile};

/// Default hunger baseline stamped onto a freshly created pet.
pub const DEFAULT_HUNGER: i64 = 10;

/// Default happiness baseline stamped onto a freshly created pet.
pub const DEFAULT_HAPPINESS: i64 = 10;

/// A pet embedded in its owner's document.
///
/// Only baselines and their timestamps are stored. The current hunger and
/// happiness are derived on read via [`Pet::hunger`] and [`Pet::happiness`];
/// because they are methods rather than fields they can never be serialized
/// back into the store or picked up by a field-by-field merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Identity key, unique across the whole store.
    pub pet_id: PetId,
    /// What kind of creature this pet is. Never [`Species::Undefined`] for
    /// a persisted pet.
    pub species: Species,
    /// Hunger baseline at `last_hunger_update`.
    pub last_hunger: i64,
    /// UTC instant at which `last_hunger` was true.
    pub last_hunger_update: DateTime<Utc>,
    /// Happiness baseline at `last_happiness_update`.
    pub last_happiness: i64,
    /// UTC instant at which `last_happiness` was true.
    pub last_happiness_update: DateTime<Utc>,
}

impl Pet {
    /// Create a pet with the given creation baselines, both timestamps
    /// stamped at `created_at`.
    pub const fn created(
        pet_id: PetId,
        species: Species,
        hunger: i64,
        happiness: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            pet_id,
            species,
            last_hunger: hunger,
            last_hunger_update: created_at,
            last_happiness: happiness,
            last_happiness_update: created_at,
        }
    }

    /// Current hunger, derived from the stored baseline and the species
    /// tick rate. Falls toward zero over time. Never persisted.
    pub fn hunger(&self) -> i64 {
        decay::value_at(
            self.last_hunger,
            self.last_hunger_update,
            tick_profile(self.species).hunger_tick_ms,
            Direction::Decrease,
        )
    }

    /// Current happiness, derived from the stored baseline and the species
    /// tick rate. Falls toward zero absent interaction. Never persisted.
    pub fn happiness(&self) -> i64 {
        decay::value_at(
            self.last_happiness,
            self.last_happiness_update,
            tick_profile(self.species).happiness_tick_ms,
            Direction::Decrease,
        )
    }
}

/// Sparse update for a [`Pet`]: the statically-declared list of mergeable
/// fields.
///
/// Every field is wrapped in `Option` so that "absent" (`None`) is distinct
/// from "explicitly set to the zero value" (`Some(0)`). `Some(0)` really
/// does reset a baseline to zero. The derived views ([`Pet::hunger`],
/// [`Pet::happiness`]) have no counterpart here, so a merge can never
/// re-persist a transient, clock-dependent number as authoritative state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetPatch {
    /// Replacement species, if supplied.
    #[serde(default)]
    pub species: Option<Species>,
    /// Replacement hunger baseline, if supplied.
    #[serde(default)]
    pub last_hunger: Option<i64>,
    /// Replacement hunger timestamp, if supplied.
    #[serde(default)]
    pub last_hunger_update: Option<DateTime<Utc>>,
    /// Replacement happiness baseline, if supplied.
    #[serde(default)]
    pub last_happiness: Option<i64>,
    /// Replacement happiness timestamp, if supplied.
    #[serde(default)]
    pub last_happiness_update: Option<DateTime<Utc>>,
}

impl PetPatch {
    /// Whether the patch carries no fields at all.
    pub const fn is_empty(&self) -> bool {
        self.species.is_none()
            && self.last_hunger.is_none()
            && self.last_hunger_update.is_none()
            && self.last_happiness.is_none()
            && self.last_happiness_update.is_none()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    #[test]
    fn creation_stamps_both_attributes_with_the_same_instant() {
        let now = Utc::now();
        let pet = Pet::created(PetId::new(), Species::Dog, DEFAULT_HUNGER, DEFAULT_HAPPINESS, now);
        assert_eq!(pet.last_hunger_update, now);
        assert_eq!(pet.last_happiness_update, now);
        assert_eq!(pet.last_hunger, 10);
        assert_eq!(pet.last_happiness, 10);
    }

    #[test]
    fn derived_views_equal_the_baseline_immediately_after_creation() {
        let pet = Pet::created(
            PetId::new(),
            Species::Cat,
            DEFAULT_HUNGER,
            DEFAULT_HAPPINESS,
            Utc::now(),
        );
        assert_eq!(pet.hunger(), DEFAULT_HUNGER);
        assert_eq!(pet.happiness(), DEFAULT_HAPPINESS);
    }

    #[test]
    fn derived_views_decay_with_backdated_baselines() {
        // 25 s ago at a 10 s tick rate: two full ticks elapsed.
        let backdated = Utc::now() - TimeDelta::milliseconds(25_000);
        let pet = Pet::created(PetId::new(), Species::Dog, 10, 10, backdated);
        assert_eq!(pet.hunger(), 8);
        assert_eq!(pet.happiness(), 8);
    }

    #[test]
    fn derived_views_are_not_serialized() {
        let pet = Pet::created(PetId::new(), Species::Dog, 10, 10, Utc::now());
        let json = serde_json::to_value(&pet).ok();
        let object = json.as_ref().and_then(serde_json::Value::as_object);
        assert!(object.is_some_and(|map| {
            !map.contains_key("hunger") && !map.contains_key("happiness")
        }));
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(PetPatch::default().is_empty());
        let patch = PetPatch {
            last_hunger: Some(0),
            ..PetPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
