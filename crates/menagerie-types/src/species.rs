//! The species enumeration and its per-species tick profiles.
//!
//! The species roster is fixed. Each species maps to a [`TickProfile`]
//! through a process-wide, immutable lookup; the table is total over every
//! valid species and is safe to read from concurrent handlers.

use serde::{Deserialize, Serialize};

/// Kind of creature a pet can be.
///
/// The raw integer discriminants are part of the request contract: pet
/// creation payloads carry the species as a raw integer, and enum-membership
/// validation rejects undeclared values before they reach the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Reserved placeholder discriminant. Deserialization targets may start
    /// here, but a persisted pet must never carry this value.
    #[default]
    Undefined = 0,
    /// A cat.
    Cat = 1,
    /// A dog.
    Dog = 2,
    /// A fall guy.
    FallGuy = 3,
}

impl Species {
    /// Resolve a raw discriminant to a declared species.
    ///
    /// Returns `None` for integers outside the declared roster, which is
    /// how raw values smuggled through deserialization are caught.
    pub const fn from_repr(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Undefined),
            1 => Some(Self::Cat),
            2 => Some(Self::Dog),
            3 => Some(Self::FallGuy),
            _ => None,
        }
    }

    /// Return the raw discriminant for this species.
    pub const fn repr(self) -> i32 {
        self as i32
    }
}

/// Per-species tick rates: milliseconds per one unit of attribute change.
///
/// Example: a rate of 10 000 means the attribute changes by one unit every
/// ten seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickProfile {
    /// Milliseconds per unit of hunger change.
    pub hunger_tick_ms: i64,
    /// Milliseconds per unit of happiness change.
    pub happiness_tick_ms: i64,
}

/// Resolve the tick profile for a species.
///
/// # Panics
///
/// Panics on [`Species::Undefined`]. A persisted pet never carries the
/// reserved discriminant, so reaching that arm is a programming error in
/// the caller, not a user-facing failure.
#[allow(clippy::panic)] // The Undefined arm encodes a broken caller invariant.
pub const fn tick_profile(species: Species) -> TickProfile {
    match species {
        Species::Cat | Species::Dog => TickProfile {
            hunger_tick_ms: 10_000,
            happiness_tick_ms: 10_000,
        },
        Species::FallGuy => TickProfile {
            hunger_tick_ms: 10_000,
            happiness_tick_ms: 32_767,
        },
        Species::Undefined => panic!("tick_profile: Species::Undefined has no tick profile"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repr_roundtrip_for_declared_members() {
        for species in [Species::Undefined, Species::Cat, Species::Dog, Species::FallGuy] {
            assert_eq!(Species::from_repr(species.repr()), Some(species));
        }
    }

    #[test]
    fn undeclared_discriminants_are_rejected() {
        assert_eq!(Species::from_repr(4), None);
        assert_eq!(Species::from_repr(-1), None);
        assert_eq!(Species::from_repr(i32::MAX), None);
    }

    #[test]
    fn every_valid_species_has_a_profile() {
        assert_eq!(tick_profile(Species::Cat).hunger_tick_ms, 10_000);
        assert_eq!(tick_profile(Species::Dog).happiness_tick_ms, 10_000);
        // The fall guy barely loses happiness but gets hungry like the rest.
        assert_eq!(tick_profile(Species::FallGuy).happiness_tick_ms, 32_767);
        assert_eq!(tick_profile(Species::FallGuy).hunger_tick_ms, 10_000);
    }

    #[test]
    #[should_panic(expected = "no tick profile")]
    fn undefined_species_lookup_is_a_programming_error() {
        let _ = tick_profile(Species::Undefined);
    }
}
