//! Storage layer for the Menagerie pet backend.
//!
//! Owners are stored as whole documents with their pets embedded as a
//! nested collection. This crate provides the document-store surface, the
//! merge rules for sparse pet updates, and the repository that enforces
//! identity invariants on top of both.
//!
//! # Architecture
//!
//! ```text
//! Services
//!     |
//!     +-- Repository          (one-result invariants, existence checks,
//!         |                    modified-count reporting)
//!         +-- merge_patch     (sparse patch -> authoritative entity)
//!         +-- OwnerCollection (find / insert-one / update-one / delete-one,
//!                              flattened nested-pet query)
//! ```
//!
//! # Modules
//!
//! - [`document`] -- The owner document collection
//! - [`merge`] -- Partial-update merge rules for pets
//! - [`repository`] -- The storage orchestrator

pub mod document;
pub mod merge;
pub mod repository;

// Re-export primary types for convenience.
pub use document::OwnerCollection;
pub use merge::merge_patch;
pub use repository::Repository;
