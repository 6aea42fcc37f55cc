//! Owner account operations.
//!
//! Each operation validates its payload, delegates to the repository, and
//! interprets the reported counts. Failures propagate to the boundary
//! untranslated.

use std::sync::Arc;

use menagerie_store::Repository;
use menagerie_types::{GameError, Owner, OwnerId};

use crate::outcome::interpret_count;
use crate::requests::{
    CreateOwnerRequest, DeleteOwnerRequest, GetOwnerRequest, RenameOwnerRequest,
};
use crate::validate;

/// Service for owner account management.
#[derive(Debug, Clone)]
pub struct OwnerService {
    repository: Arc<Repository>,
}

impl OwnerService {
    /// Create a service over the given repository.
    pub const fn new(repository: Arc<Repository>) -> Self {
        Self { repository }
    }

    /// Fetch an owner by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MissingField`] / [`GameError::MalformedIdentifier`]
    /// for a bad payload, [`GameError::NotFound`] if no owner matches, and
    /// [`GameError::AmbiguousTarget`] on duplicate keys.
    pub async fn get_owner(&self, request: &GetOwnerRequest) -> Result<Owner, GameError> {
        validate::required("ownerIdentifier", &request.owner_identifier)?;
        let owner_id = OwnerId::from(validate::identifier(&request.owner_identifier)?);

        self.repository
            .find_owner(owner_id)
            .await?
            .ok_or_else(|| GameError::NotFound {
                entity: "owner",
                identifier: request.owner_identifier.clone(),
            })
    }

    /// Create an owner with the caller-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyExists`] if the identifier is taken, in
    /// addition to the payload failures of [`Self::get_owner`].
    pub async fn create_owner(&self, request: &CreateOwnerRequest) -> Result<(), GameError> {
        validate::required("ownerIdentifier", &request.owner_identifier)?;
        let owner_id = OwnerId::from(validate::identifier(&request.owner_identifier)?);

        self.repository.create_owner(owner_id).await?;
        tracing::info!(%owner_id, "Owner created");
        Ok(())
    }

    /// Set an owner's display name.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoEffect`] if the write touched nothing and
    /// [`GameError::AmbiguousTarget`] if it touched more than one record.
    pub async fn rename_owner(&self, request: &RenameOwnerRequest) -> Result<(), GameError> {
        validate::required("ownerIdentifier", &request.owner_identifier)?;
        validate::required("displayName", &request.display_name)?;
        let owner_id = OwnerId::from(validate::identifier(&request.owner_identifier)?);

        let modified = self
            .repository
            .rename_owner(owner_id, &request.display_name)
            .await?;
        interpret_count(modified, "rename_owner", "owner", &request.owner_identifier)
    }

    /// Delete an owner and every pet it holds.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`Self::rename_owner`].
    pub async fn delete_owner(&self, request: &DeleteOwnerRequest) -> Result<(), GameError> {
        validate::required("ownerIdentifier", &request.owner_identifier)?;
        let owner_id = OwnerId::from(validate::identifier(&request.owner_identifier)?);

        let deleted = self.repository.delete_owner(owner_id).await?;
        interpret_count(deleted, "delete_owner", "owner", &request.owner_identifier)?;
        tracing::info!(%owner_id, "Owner deleted");
        Ok(())
    }
}
