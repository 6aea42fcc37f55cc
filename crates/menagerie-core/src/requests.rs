//! Deserializable request shapes, one per operation.
//!
//! These are the payloads the boundary layer deserializes JSON bodies
//! into before invoking the services. Identifiers arrive as raw strings
//! and species as raw integer discriminants; both are validated by the
//! services, never trusted from the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fetch an owner by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOwnerRequest {
    /// UUID of the owner as a string.
    pub owner_identifier: String,
}

/// Create an owner with a caller-supplied identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOwnerRequest {
    /// UUID of the new owner as a string.
    pub owner_identifier: String,
}

/// Set an owner's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameOwnerRequest {
    /// UUID of the owner as a string.
    pub owner_identifier: String,
    /// New display name for the owner.
    pub display_name: String,
}

/// Delete an owner and every pet it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOwnerRequest {
    /// UUID of the owner as a string.
    pub owner_identifier: String,
}

/// Fetch a pet by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPetRequest {
    /// UUID of the pet as a string.
    pub pet_identifier: String,
}

/// Create a pet for an existing owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    /// UUID of the owning account as a string.
    pub owner_identifier: String,
    /// Raw species discriminant; validated for enum membership.
    pub species: i32,
}

/// Administrative overwrite of a pet's stored fields.
///
/// Absent fields (`null` or missing on the wire) leave the stored value
/// untouched; an explicit zero really sets zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetRequest {
    /// UUID of the pet as a string.
    pub pet_identifier: String,
    /// Replacement raw species discriminant, if supplied.
    #[serde(default)]
    pub species: Option<i32>,
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

/// Delete a pet from its owner's collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePetRequest {
    /// UUID of the pet as a string.
    pub pet_identifier: String,
}

/// Feed a pet, raising its hunger baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPetRequest {
    /// UUID of the pet as a string.
    pub pet_identifier: String,
    /// Signed amount added to the current derived hunger.
    pub hunger_improvement: i64,
}

/// Stroke a pet, raising its happiness baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokePetRequest {
    /// UUID of the pet as a string.
    pub pet_identifier: String,
    /// Signed amount added to the current derived happiness.
    pub happiness_improvement: i64,
}
