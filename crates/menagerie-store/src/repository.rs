//! The storage orchestrator.
//!
//! [`Repository`] sits between the services and the [`OwnerCollection`].
//! It owns the identity invariants the raw collection cannot: every
//! identity-keyed lookup must match at most one record (more is a
//! store-integrity fault, surfaced as [`GameError::AmbiguousTarget`], never
//! resolved by picking the first), creates check for an existing identity
//! before writing, and updates/deletes report their modified counts for the
//! caller to interpret.

use menagerie_types::{GameError, Owner, OwnerId, Pet, PetId, PetPatch};

use crate::document::OwnerCollection;
use crate::merge::merge_patch;

/// Enforce the at-most-one-match invariant on a query result.
fn at_most_one<T>(
    mut matches: Vec<T>,
    entity: &'static str,
    identifier: &str,
) -> Result<Option<T>, GameError> {
    if matches.len() > 1 {
        return Err(GameError::AmbiguousTarget {
            entity,
            identifier: identifier.to_owned(),
        });
    }
    Ok(matches.pop())
}

/// Executes find/insert/update/delete against the owner collection while
/// enforcing one-result invariants and translating store outcomes into the
/// domain taxonomy.
#[derive(Debug, Default)]
pub struct Repository {
    owners: OwnerCollection,
}

impl Repository {
    /// Create a repository over an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository over an existing collection (seeded data).
    pub const fn with_collection(owners: OwnerCollection) -> Self {
        Self { owners }
    }

    // =========================================================================
    // Owners
    // =========================================================================

    /// Look up an owner by identity key.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AmbiguousTarget`] if more than one document
    /// carries the key.
    pub async fn find_owner(&self, owner_id: OwnerId) -> Result<Option<Owner>, GameError> {
        let matches = self.owners.find(|owner| owner.owner_id == owner_id).await;
        at_most_one(matches, "owner", &owner_id.to_string())
    }

    /// Create an owner with the given identity key and no pets.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyExists`] if the key is already taken and
    /// [`GameError::AmbiguousTarget`] if the existence check itself finds
    /// duplicates.
    pub async fn create_owner(&self, owner_id: OwnerId) -> Result<(), GameError> {
        if self.find_owner(owner_id).await?.is_some() {
            return Err(GameError::AlreadyExists {
                entity: "owner",
                identifier: owner_id.to_string(),
            });
        }

        self.owners.insert_one(Owner::new(owner_id)).await;
        tracing::debug!(%owner_id, "Created owner");
        Ok(())
    }

    /// Set an owner's display name, returning the modified count.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] if no owner carries the key and
    /// [`GameError::AmbiguousTarget`] if more than one does.
    pub async fn rename_owner(
        &self,
        owner_id: OwnerId,
        display_name: &str,
    ) -> Result<u64, GameError> {
        if self.find_owner(owner_id).await?.is_none() {
            return Err(GameError::NotFound {
                entity: "owner",
                identifier: owner_id.to_string(),
            });
        }

        let name = display_name.to_owned();
        let modified = self
            .owners
            .update_one(
                |owner| owner.owner_id == owner_id,
                |owner| owner.display_name = Some(name),
            )
            .await;
        tracing::debug!(%owner_id, modified, "Renamed owner");
        Ok(modified)
    }

    /// Delete an owner and, with it, every pet it holds. Returns the
    /// deleted count.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] if no owner carries the key and
    /// [`GameError::AmbiguousTarget`] if more than one does.
    pub async fn delete_owner(&self, owner_id: OwnerId) -> Result<u64, GameError> {
        if self.find_owner(owner_id).await?.is_none() {
            return Err(GameError::NotFound {
                entity: "owner",
                identifier: owner_id.to_string(),
            });
        }

        let deleted = self.owners.delete_one(|owner| owner.owner_id == owner_id).await;
        tracing::debug!(%owner_id, deleted, "Deleted owner");
        Ok(deleted)
    }

    // =========================================================================
    // Pets
    // =========================================================================

    /// Look up a pet by identity key across all owner documents.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AmbiguousTarget`] if more than one pet carries
    /// the key, whether inside one owner or spread over several.
    pub async fn find_pet(&self, pet_id: PetId) -> Result<Option<Pet>, GameError> {
        let matches = self.owners.find_pets(|pet| pet.pet_id == pet_id).await;
        at_most_one(matches, "pet", &pet_id.to_string())
    }

    /// Attach a freshly built pet to the given owner, returning its
    /// identity key.
    ///
    /// The owner existence check runs before any write, so creating a pet
    /// for a missing owner leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] if the owner does not exist,
    /// [`GameError::AlreadyExists`] if the pet's key is already taken, and
    /// [`GameError::AmbiguousTarget`] if either existence check finds
    /// duplicates.
    pub async fn create_pet(&self, owner_id: OwnerId, pet: Pet) -> Result<PetId, GameError> {
        if self.find_owner(owner_id).await?.is_none() {
            return Err(GameError::NotFound {
                entity: "owner",
                identifier: owner_id.to_string(),
            });
        }

        let pet_id = pet.pet_id;
        if self.find_pet(pet_id).await?.is_some() {
            return Err(GameError::AlreadyExists {
                entity: "pet",
                identifier: pet_id.to_string(),
            });
        }

        let modified = self
            .owners
            .update_one(
                |owner| owner.owner_id == owner_id,
                |owner| owner.pets.push(pet),
            )
            .await;
        if modified == 0 {
            // The owner passed the existence check moments ago.
            return Err(GameError::Internal(format!(
                "owner {owner_id} vanished while attaching pet {pet_id}"
            )));
        }

        tracing::debug!(%owner_id, %pet_id, "Created pet");
        Ok(pet_id)
    }

    /// Merge a sparse patch onto the stored pet and replace the matching
    /// child element in its owner's document. Returns the modified count.
    ///
    /// The patch is applied to a freshly-fetched authoritative copy, never
    /// to caller-supplied state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] if no pet carries the key and
    /// [`GameError::AmbiguousTarget`] if more than one does.
    pub async fn update_pet(&self, pet_id: PetId, patch: &PetPatch) -> Result<u64, GameError> {
        let Some(current) = self.find_pet(pet_id).await? else {
            return Err(GameError::NotFound {
                entity: "pet",
                identifier: pet_id.to_string(),
            });
        };

        let merged = merge_patch(&current, patch);
        let modified = self
            .owners
            .update_one(
                |owner| owner.has_pet(pet_id),
                |owner| {
                    if let Some(slot) = owner.pets.iter_mut().find(|pet| pet.pet_id == pet_id) {
                        *slot = merged;
                    }
                },
            )
            .await;
        tracing::debug!(%pet_id, modified, "Updated pet");
        Ok(modified)
    }

    /// Remove a pet from its owner's document. Returns the modified count.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] if no pet carries the key and
    /// [`GameError::AmbiguousTarget`] if more than one does.
    pub async fn delete_pet(&self, pet_id: PetId) -> Result<u64, GameError> {
        if self.find_pet(pet_id).await?.is_none() {
            return Err(GameError::NotFound {
                entity: "pet",
                identifier: pet_id.to_string(),
            });
        }

        let modified = self
            .owners
            .update_one(
                |owner| owner.has_pet(pet_id),
                |owner| owner.pets.retain(|pet| pet.pet_id != pet_id),
            )
            .await;
        tracing::debug!(%pet_id, modified, "Deleted pet");
        Ok(modified)
    }
}
