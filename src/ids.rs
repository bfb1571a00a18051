// Identifier generation for users and todos

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh resource identifiers.
///
/// Pluggable so tests can substitute predictable ids for the random
/// production ones.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Random version-4 identifiers, the production default
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic generator backed by a counter.
///
/// Ids still carry the version-4 layout (version and variant nibbles set),
/// so they pass the same format validation as production ids.
#[derive(Default)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> Uuid {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);

        let mut bytes = [0u8; 16];
        bytes[8..].copy_from_slice(&n.to_be_bytes());

        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ids::is_canonical_v4;

    #[test]
    fn test_random_ids_are_canonical_and_unique() {
        let ids = RandomIds;

        let a = ids.generate();
        let b = ids.generate();

        assert_ne!(a, b);
        assert!(is_canonical_v4(&a.to_string()));
        assert!(is_canonical_v4(&b.to_string()));
    }

    #[test]
    fn test_sequential_ids_are_deterministic() {
        let first = SequentialIds::default();
        let second = SequentialIds::default();

        assert_eq!(first.generate(), second.generate());
        assert_eq!(first.generate(), second.generate());
        assert_ne!(first.generate(), first.generate());
    }

    #[test]
    fn test_sequential_ids_pass_format_validation() {
        let ids = SequentialIds::default();

        for _ in 0..5 {
            let id = ids.generate();
            assert!(is_canonical_v4(&id.to_string()), "id {} not canonical", id);
        }
    }
}
