//! Pet lifecycle operations and the feed/stroke game actions.
//!
//! Both actions share one read-modify-write shape: validate the
//! identifier, fetch the pet, read the targeted attribute's current
//! derived value, add the signed improvement to form a new baseline,
//! validate it non-negative, and persist baseline plus fresh timestamp
//! through the merger. There is deliberately no optimistic concurrency
//! guard: two racing action sequences against the same pet resolve
//! last-writer-wins.

use std::sync::Arc;

use chrono::Utc;
use menagerie_store::Repository;
use menagerie_types::{GameError, Pet, PetId, PetPatch};

use crate::config::PetCreationDefaults;
use crate::outcome::interpret_count;
use crate::requests::{
    CreatePetRequest, DeletePetRequest, FeedPetRequest, GetPetRequest, StrokePetRequest,
    UpdatePetRequest,
};
use crate::validate;

/// Service for pet lifecycle and game actions.
#[derive(Debug, Clone)]
pub struct PetService {
    repository: Arc<Repository>,
    defaults: PetCreationDefaults,
}

impl PetService {
    /// Create a service over the given repository and creation defaults.
    pub const fn new(repository: Arc<Repository>, defaults: PetCreationDefaults) -> Self {
        Self {
            repository,
            defaults,
        }
    }

    /// Fetch a pet by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MalformedIdentifier`] before any store access,
    /// [`GameError::NotFound`] if no pet matches, and
    /// [`GameError::AmbiguousTarget`] on duplicate keys.
    pub async fn get_pet(&self, request: &GetPetRequest) -> Result<Pet, GameError> {
        let pet_id = PetId::from(validate::identifier(&request.pet_identifier)?);

        self.repository
            .find_pet(pet_id)
            .await?
            .ok_or_else(|| GameError::NotFound {
                entity: "pet",
                identifier: request.pet_identifier.clone(),
            })
    }

    /// Create a pet for an existing owner, returning the new identifier.
    ///
    /// Both baselines start at the configured defaults with both
    /// timestamps stamped at creation time.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidValue`] for an undeclared or reserved
    /// species discriminant and [`GameError::NotFound`] if the owner does
    /// not exist (checked before any write).
    pub async fn create_pet(&self, request: &CreatePetRequest) -> Result<PetId, GameError> {
        let owner_id = validate::identifier(&request.owner_identifier)?.into();
        let species = validate::live_species("species", request.species)?;

        let pet = Pet::created(
            PetId::new(),
            species,
            self.defaults.hunger,
            self.defaults.happiness,
            Utc::now(),
        );
        let pet_id = self.repository.create_pet(owner_id, pet).await?;
        tracing::info!(%owner_id, %pet_id, ?species, "Pet created");
        Ok(pet_id)
    }

    /// Administrative overwrite of a pet's stored fields.
    ///
    /// Only the fields present in the request are written; an absent field
    /// leaves the stored value untouched, while an explicit zero really
    /// sets zero.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidValue`] for negative baselines or a bad
    /// species, plus the usual lookup and count failures.
    pub async fn update_pet(&self, request: &UpdatePetRequest) -> Result<(), GameError> {
        let pet_id = PetId::from(validate::identifier(&request.pet_identifier)?);
        if let Some(last_hunger) = request.last_hunger {
            validate::non_negative("lastHunger", last_hunger)?;
        }
        if let Some(last_happiness) = request.last_happiness {
            validate::non_negative("lastHappiness", last_happiness)?;
        }
        let species = match request.species {
            Some(raw) => Some(validate::live_species("species", raw)?),
            None => None,
        };

        let patch = PetPatch {
            species,
            last_hunger: request.last_hunger,
            last_hunger_update: request.last_hunger_update,
            last_happiness: request.last_happiness,
            last_happiness_update: request.last_happiness_update,
        };
        let modified = self.repository.update_pet(pet_id, &patch).await?;
        interpret_count(modified, "update_pet", "pet", &request.pet_identifier)
    }

    /// Delete a pet from its owner's collection.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] if no pet matches, plus the usual
    /// count failures.
    pub async fn delete_pet(&self, request: &DeletePetRequest) -> Result<(), GameError> {
        let pet_id = PetId::from(validate::identifier(&request.pet_identifier)?);

        let modified = self.repository.delete_pet(pet_id).await?;
        interpret_count(modified, "delete_pet", "pet", &request.pet_identifier)?;
        tracing::info!(%pet_id, "Pet deleted");
        Ok(())
    }

    /// Feed a pet: rebaseline hunger to its current derived value plus the
    /// improvement, stamped now.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidValue`] if the new baseline would be
    /// negative, plus the shared action failure surface.
    pub async fn feed(&self, request: &FeedPetRequest) -> Result<(), GameError> {
        let pet_id = PetId::from(validate::identifier(&request.pet_identifier)?);
        let pet = self.fetch(pet_id, &request.pet_identifier).await?;

        let new_baseline = pet.hunger().saturating_add(request.hunger_improvement);
        validate::non_negative("lastHunger", new_baseline)?;

        let patch = PetPatch {
            last_hunger: Some(new_baseline),
            last_hunger_update: Some(Utc::now()),
            ..PetPatch::default()
        };
        let modified = self.repository.update_pet(pet_id, &patch).await?;
        interpret_count(modified, "feed", "pet", &request.pet_identifier)?;
        tracing::info!(%pet_id, new_baseline, "Pet fed");
        Ok(())
    }

    /// Stroke a pet: rebaseline happiness to its current derived value
    /// plus the improvement, stamped now.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`Self::feed`].
    pub async fn stroke(&self, request: &StrokePetRequest) -> Result<(), GameError> {
        let pet_id = PetId::from(validate::identifier(&request.pet_identifier)?);
        let pet = self.fetch(pet_id, &request.pet_identifier).await?;

        let new_baseline = pet.happiness().saturating_add(request.happiness_improvement);
        validate::non_negative("lastHappiness", new_baseline)?;

        let patch = PetPatch {
            last_happiness: Some(new_baseline),
            last_happiness_update: Some(Utc::now()),
            ..PetPatch::default()
        };
        let modified = self.repository.update_pet(pet_id, &patch).await?;
        interpret_count(modified, "stroke", "pet", &request.pet_identifier)?;
        tracing::info!(%pet_id, new_baseline, "Pet stroked");
        Ok(())
    }

    /// Fetch the pet an action targets, failing `NotFound` if absent.
    async fn fetch(&self, pet_id: PetId, raw_identifier: &str) -> Result<Pet, GameError> {
        self.repository
            .find_pet(pet_id)
            .await?
            .ok_or_else(|| GameError::NotFound {
                entity: "pet",
                identifier: raw_identifier.to_owned(),
            })
    }
}
