//! The shared error taxonomy for the pet backend.
//!
//! Every failure kind here is raised synchronously by the layer that
//! detects it and propagates unhandled to the process boundary, which owns
//! the translation to an external status. The core never catches and
//! suppresses these. Anything outside the taxonomy is wrapped in
//! [`GameError::Internal`] and surfaced generically, leaking nothing beyond
//! a message string.

/// Errors raised by validation, the repository, and the services.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A required field was empty or absent from the payload.
    #[error("payload does not contain {field}")]
    MissingField {
        /// The missing field, named as it appears on the wire.
        field: &'static str,
    },

    /// A field carried a value outside its domain (negative integer,
    /// undeclared enum discriminant).
    #[error("invalid value for {field}: {value}")]
    InvalidValue {
        /// The offending field, named as it appears on the wire.
        field: &'static str,
        /// The rejected value, rendered for the message.
        value: String,
    },

    /// An identifier string was not a parseable UUID.
    #[error("identifier could not be parsed as a UUID: {0:?}")]
    MalformedIdentifier(String),

    /// No entity matched an identity-keyed lookup.
    #[error("no {entity} exists with identifier {identifier}")]
    NotFound {
        /// What kind of entity was looked up.
        entity: &'static str,
        /// The identity key that matched nothing.
        identifier: String,
    },

    /// A create collided with an existing identity key.
    #[error("a {entity} with identifier {identifier} already exists")]
    AlreadyExists {
        /// What kind of entity was being created.
        entity: &'static str,
        /// The identity key that collided.
        identifier: String,
    },

    /// An update or delete touched zero records.
    #[error("{operation} modified no records")]
    NoEffect {
        /// The operation that had no effect.
        operation: &'static str,
    },

    /// An identity-keyed lookup or write matched more than one record.
    /// This signals a store-integrity fault; it is surfaced, never
    /// auto-repaired by picking the first match.
    #[error("ambiguous {entity} identifier {identifier}: matched more than one record")]
    AmbiguousTarget {
        /// What kind of entity was targeted.
        entity: &'static str,
        /// The identity key that matched multiple records.
        identifier: String,
    },

    /// An unexpected internal fault outside the taxonomy.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        let err = GameError::MissingField { field: "ownerIdentifier" };
        assert!(err.to_string().contains("ownerIdentifier"));

        let err = GameError::InvalidValue {
            field: "lastHunger",
            value: "-3".to_owned(),
        };
        assert!(err.to_string().contains("lastHunger"));
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn ambiguity_message_flags_the_integrity_fault() {
        let err = GameError::AmbiguousTarget {
            entity: "pet",
            identifier: "abc".to_owned(),
        };
        assert!(err.to_string().contains("more than one"));
    }
}
