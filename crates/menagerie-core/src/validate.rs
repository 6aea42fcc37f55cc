//! Pure field validators.
//!
//! Each check inspects a single field, raises exactly one failure kind on
//! violation, and has no side effects. Services run these before touching
//! the repository, so a bad payload never reaches the store.

use menagerie_types::{GameError, Species};
use uuid::Uuid;

/// Require a non-empty string value for `field`.
///
/// # Errors
///
/// Returns [`GameError::MissingField`] if the value is empty.
pub fn required(field: &'static str, value: &str) -> Result<(), GameError> {
    if value.is_empty() {
        return Err(GameError::MissingField { field });
    }
    Ok(())
}

/// Require a non-negative integer for `field`.
///
/// # Errors
///
/// Returns [`GameError::InvalidValue`] if the value is negative.
pub fn non_negative(field: &'static str, value: i64) -> Result<(), GameError> {
    if value < 0 {
        return Err(GameError::InvalidValue {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Require `raw` to be a declared [`Species`] discriminant.
///
/// Deserialization can smuggle arbitrary integers into an enum-shaped
/// field; this is where they are caught.
///
/// # Errors
///
/// Returns [`GameError::InvalidValue`] for undeclared discriminants.
pub fn species_member(field: &'static str, raw: i32) -> Result<Species, GameError> {
    Species::from_repr(raw).ok_or_else(|| GameError::InvalidValue {
        field,
        value: raw.to_string(),
    })
}

/// Resolve a raw species discriminant for a pet that is about to be
/// persisted: it must be a declared member and must not be the reserved
/// [`Species::Undefined`] placeholder, which is never valid live state.
///
/// # Errors
///
/// Returns [`GameError::InvalidValue`] for undeclared discriminants and
/// for the reserved placeholder.
pub fn live_species(field: &'static str, raw: i32) -> Result<Species, GameError> {
    let species = species_member(field, raw)?;
    if species == Species::Undefined {
        return Err(GameError::InvalidValue {
            field,
            value: raw.to_string(),
        });
    }
    Ok(species)
}

/// Require a parseable UUID textual representation.
///
/// # Errors
///
/// Returns [`GameError::MalformedIdentifier`] if the string does not parse.
pub fn identifier(value: &str) -> Result<Uuid, GameError> {
    Uuid::parse_str(value).map_err(|_| GameError::MalformedIdentifier(value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty_strings() {
        assert!(matches!(
            required("ownerIdentifier", ""),
            Err(GameError::MissingField { field: "ownerIdentifier" })
        ));
        assert!(required("ownerIdentifier", "x").is_ok());
    }

    #[test]
    fn non_negative_rejects_negatives_only() {
        assert!(non_negative("lastHunger", 0).is_ok());
        assert!(non_negative("lastHunger", 10).is_ok());
        assert!(matches!(
            non_negative("lastHunger", -1),
            Err(GameError::InvalidValue { field: "lastHunger", .. })
        ));
    }

    #[test]
    fn species_member_accepts_every_declared_discriminant() {
        assert_eq!(species_member("species", 0).ok(), Some(Species::Undefined));
        assert_eq!(species_member("species", 2).ok(), Some(Species::Dog));
        assert!(matches!(
            species_member("species", 7),
            Err(GameError::InvalidValue { field: "species", .. })
        ));
    }

    #[test]
    fn live_species_rejects_the_reserved_placeholder() {
        assert_eq!(live_species("species", 1).ok(), Some(Species::Cat));
        assert!(matches!(
            live_species("species", 0),
            Err(GameError::InvalidValue { field: "species", .. })
        ));
    }

    #[test]
    fn identifier_requires_uuid_text() {
        assert!(identifier("0b147a4a-6d9f-4b70-91a6-58b0a1a20a1d").is_ok());
        assert!(matches!(
            identifier("not-a-uuid"),
            Err(GameError::MalformedIdentifier(_))
        ));
        assert!(matches!(identifier(""), Err(GameError::MalformedIdentifier(_))));
    }
}
