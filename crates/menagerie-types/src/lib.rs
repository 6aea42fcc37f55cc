//! Shared type definitions for the Menagerie pet backend.
//!
//! This crate is the single source of truth for the entities the rest of
//! the workspace operates on: owners, their pets, the decaying attribute
//! model, and the error taxonomy every layer propagates.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for owner and pet identifiers
//! - [`species`] -- The species enumeration and its tick profiles
//! - [`decay`] -- Tick-rate decay computation for pet attributes
//! - [`owner`] -- The owner document embedding its pets
//! - [`pet`] -- The pet entity, its derived views, and the sparse patch
//! - [`error`] -- The shared [`GameError`] taxonomy
//!
//! [`GameError`]: error::GameError

pub mod decay;
pub mod error;
pub mod ids;
pub mod owner;
pub mod pet;
pub mod species;

// Re-export primary types for convenience.
pub use decay::{Direction, value_at, value_at_instant};
pub use error::GameError;
pub use ids::{OwnerId, PetId};
pub use owner::Owner;
pub use pet::{DEFAULT_HAPPINESS, DEFAULT_HUNGER, Pet, PetPatch};
pub use species::{Species, TickProfile, tick_profile};
