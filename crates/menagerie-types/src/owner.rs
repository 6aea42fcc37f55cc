//! The owner document: an account holding its pets as embedded children.

use serde::{Deserialize, Serialize};

use crate::ids::{OwnerId, PetId};
use crate::pet::Pet;

/// An owner document as stored in the collection.
///
/// Pets live exclusively inside their owner's document -- they have no
/// independent lifecycle, and removing one from `pets` destroys it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Identity key of the owner.
    pub owner_id: OwnerId,
    /// Display name, unset until the owner picks one.
    #[serde(default)]
    pub display_name: Option<String>,
    /// The pets this owner holds, in creation order.
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Create an owner with no display name and no pets.
    pub const fn new(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            display_name: None,
            pets: Vec::new(),
        }
    }

    /// Find one of this owner's pets by identity key.
    pub fn pet(&self, pet_id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.pet_id == pet_id)
    }

    /// Whether this owner holds a pet with the given identity key.
    pub fn has_pet(&self, pet_id: PetId) -> bool {
        self.pet(pet_id).is_some()
    }
}
