//! The owner document collection.
//!
//! This is the document-store client surface the repository talks to:
//! find-by-predicate returning zero or more matches, insert-one,
//! update-one, delete-one, and a flattened query across the nested pet
//! arrays of every document. The backing here is an embedded in-memory
//! collection behind an async lock, so every operation is a store
//! round-trip in miniature.
//!
//! The collection itself enforces no uniqueness: duplicate identity keys
//! are representable, and it is the repository's job to treat them as an
//! integrity fault rather than silently picking a winner.

use menagerie_types::{Owner, Pet};
use tokio::sync::RwLock;

/// A collection of [`Owner`] documents.
#[derive(Debug, Default)]
pub struct OwnerCollection {
    documents: RwLock<Vec<Owner>>,
}

impl OwnerCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every document matching `predicate`, zero or more.
    pub async fn find<P>(&self, predicate: P) -> Vec<Owner>
    where
        P: Fn(&Owner) -> bool,
    {
        let documents = self.documents.read().await;
        documents.iter().filter(|owner| predicate(owner)).cloned().collect()
    }

    /// Flatten the nested pet arrays across all documents and return every
    /// pet matching `predicate`.
    ///
    /// This is the cross-document lookup: a pet's identity key does not say
    /// which owner holds it, so the search spans the whole collection.
    pub async fn find_pets<P>(&self, predicate: P) -> Vec<Pet>
    where
        P: Fn(&Pet) -> bool,
    {
        let documents = self.documents.read().await;
        documents
            .iter()
            .flat_map(|owner| owner.pets.iter())
            .filter(|pet| predicate(pet))
            .cloned()
            .collect()
    }

    /// Insert a single document.
    pub async fn insert_one(&self, owner: Owner) {
        let mut documents = self.documents.write().await;
        documents.push(owner);
    }

    /// Apply `mutate` to the first document matching `predicate`.
    ///
    /// Returns the number of documents modified (zero or one); later
    /// matches are left untouched, like a driver's update-one.
    pub async fn update_one<P, M>(&self, predicate: P, mutate: M) -> u64
    where
        P: Fn(&Owner) -> bool,
        M: FnOnce(&mut Owner),
    {
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|owner| predicate(owner)) {
            Some(owner) => {
                mutate(owner);
                1
            }
            None => 0,
        }
    }

    /// Remove the first document matching `predicate`.
    ///
    /// Returns the number of documents deleted (zero or one).
    pub async fn delete_one<P>(&self, predicate: P) -> u64
    where
        P: Fn(&Owner) -> bool,
    {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|owner| predicate(owner)) {
            Some(index) => {
                documents.remove(index);
                1
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use menagerie_types::{DEFAULT_HAPPINESS, DEFAULT_HUNGER, OwnerId, PetId, Species};

    use super::*;

    fn owner_with_pet() -> (Owner, PetId) {
        let mut owner = Owner::new(OwnerId::new());
        let pet = Pet::created(
            PetId::new(),
            Species::Dog,
            DEFAULT_HUNGER,
            DEFAULT_HAPPINESS,
            Utc::now(),
        );
        let pet_id = pet.pet_id;
        owner.pets.push(pet);
        (owner, pet_id)
    }

    #[tokio::test]
    async fn find_returns_zero_or_more_matches() {
        let collection = OwnerCollection::new();
        let id = OwnerId::new();
        collection.insert_one(Owner::new(id)).await;
        collection.insert_one(Owner::new(OwnerId::new())).await;
        // Duplicate keys are representable at this layer.
        collection.insert_one(Owner::new(id)).await;

        assert_eq!(collection.find(|o| o.owner_id == id).await.len(), 2);
        assert_eq!(collection.find(|_| true).await.len(), 3);
        assert!(collection.find(|_| false).await.is_empty());
    }

    #[tokio::test]
    async fn find_pets_flattens_across_documents() {
        let collection = OwnerCollection::new();
        let (first, first_pet) = owner_with_pet();
        let (second, _) = owner_with_pet();
        collection.insert_one(first).await;
        collection.insert_one(second).await;

        let all = collection.find_pets(|_| true).await;
        assert_eq!(all.len(), 2);

        let matched = collection.find_pets(|p| p.pet_id == first_pet).await;
        assert_eq!(matched.len(), 1);
    }

    #[tokio::test]
    async fn update_one_touches_only_the_first_match() {
        let collection = OwnerCollection::new();
        let id = OwnerId::new();
        collection.insert_one(Owner::new(id)).await;
        collection.insert_one(Owner::new(id)).await;

        let modified = collection
            .update_one(
                |o| o.owner_id == id,
                |o| o.display_name = Some("renamed".to_owned()),
            )
            .await;
        assert_eq!(modified, 1);

        let renamed = collection
            .find(|o| o.display_name.as_deref() == Some("renamed"))
            .await;
        assert_eq!(renamed.len(), 1);
    }

    #[tokio::test]
    async fn delete_one_reports_zero_when_nothing_matches() {
        let collection = OwnerCollection::new();
        collection.insert_one(Owner::new(OwnerId::new())).await;

        assert_eq!(collection.delete_one(|_| false).await, 0);
        assert_eq!(collection.delete_one(|_| true).await, 1);
        assert!(collection.find(|_| true).await.is_empty());
    }
}
