//! Partial-update merge rules for pets.
//!
//! A [`PetPatch`] is the statically-declared list of mergeable fields, each
//! wrapped in `Option`. Merging copies only the `Some` fields onto a
//! freshly-fetched authoritative copy of the target pet, so an absent field
//! (`None`) and an explicit zero (`Some(0)`) mean different things. The
//! derived hunger/happiness views have no field representation at all and
//! therefore can never be merged back as stored state.

use menagerie_types::{Pet, PetPatch};

/// Merge a sparse patch onto the authoritative copy of a pet.
///
/// The identity key is not mergeable: the result always keeps
/// `current.pet_id`. An empty patch returns `current` unchanged.
pub fn merge_patch(current: &Pet, patch: &PetPatch) -> Pet {
    let mut merged = current.clone();
    if let Some(species) = patch.species {
        merged.species = species;
    }
    if let Some(last_hunger) = patch.last_hunger {
        merged.last_hunger = last_hunger;
    }
    if let Some(last_hunger_update) = patch.last_hunger_update {
        merged.last_hunger_update = last_hunger_update;
    }
    if let Some(last_happiness) = patch.last_happiness {
        merged.last_happiness = last_happiness;
    }
    if let Some(last_happiness_update) = patch.last_happiness_update {
        merged.last_happiness_update = last_happiness_update;
    }
    merged
}
