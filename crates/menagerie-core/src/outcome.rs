//! Interpretation of store-reported modified counts.

use menagerie_types::GameError;

/// Translate a modified/deleted count into the domain taxonomy.
///
/// Zero records touched means the write had no effect; more than one
/// record touched by an identity-keyed write is a store-integrity fault,
/// never silently accepted.
pub(crate) fn interpret_count(
    modified: u64,
    operation: &'static str,
    entity: &'static str,
    identifier: &str,
) -> Result<(), GameError> {
    match modified {
        0 => Err(GameError::NoEffect { operation }),
        1 => Ok(()),
        _ => Err(GameError::AmbiguousTarget {
            entity,
            identifier: identifier.to_owned(),
        }),
    }
}
