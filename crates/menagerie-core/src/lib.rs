//! Validation, configuration, and game services for the Menagerie pet
//! backend.
//!
//! This crate composes the pieces from `menagerie-types` and
//! `menagerie-store` into the operations a boundary layer calls: owner
//! account management, pet lifecycle, and the feed/stroke game actions.
//! Every operation validates its payload first, so malformed input fails
//! before any store access.
//!
//! # Modules
//!
//! - [`config`] -- Typed configuration loaded from YAML
//! - [`requests`] -- Deserializable request shapes, one per operation
//! - [`validate`] -- Pure field validators
//! - [`owner_service`] -- Owner account operations
//! - [`pet_service`] -- Pet lifecycle and the feed/stroke actions

pub mod config;
pub mod owner_service;
pub mod pet_service;
pub mod requests;
pub mod validate;

mod outcome;

// Re-export primary types for convenience.
pub use config::{ConfigError, GameConfig, LoggingConfig, PetCreationDefaults};
pub use owner_service::OwnerService;
pub use pet_service::PetService;
pub use requests::{
    CreateOwnerRequest, CreatePetRequest, DeleteOwnerRequest, DeletePetRequest, FeedPetRequest,
    GetOwnerRequest, GetPetRequest, RenameOwnerRequest, StrokePetRequest, UpdatePetRequest,
};
