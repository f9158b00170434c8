//! Pet profile registry

use thiserror::Error;
use uuid::Uuid;

/// Error when a pet profile is missing a required field
#[derive(Debug, Clone, Error)]
#[error("Pet {field} must not be empty")]
pub struct InvalidPetError {
    pub field: &'static str,
}

/// A pet profile. Process-local, like the rest of the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub age: String,
    pub photo: String,
    pub description: Option<String>,
}

/// In-memory pet store with explicit mutation methods
#[derive(Debug, Clone, Default)]
pub struct PetRegistry {
    pets: Vec<Pet>,
}

impl PetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the default profiles
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.pets.push(Pet {
            id: Uuid::new_v4(),
            name: "Whiskers".to_string(),
            breed: "Persian".to_string(),
            age: "3 years".to_string(),
            photo: "🐱".to_string(),
            description: Some(
                "A fluffy and gentle Persian cat who loves to nap in sunny spots.".to_string(),
            ),
        });
        registry.pets.push(Pet {
            id: Uuid::new_v4(),
            name: "Shadow".to_string(),
            breed: "Black Cat".to_string(),
            age: "2 years".to_string(),
            photo: "🐈‍⬛".to_string(),
            description: Some(
                "A mysterious and playful black cat with bright green eyes.".to_string(),
            ),
        });
        registry
    }

    /// Add a profile. Name, breed, and age are required.
    pub fn add(
        &mut self,
        name: &str,
        breed: &str,
        age: &str,
        photo: Option<&str>,
        description: Option<&str>,
    ) -> Result<Uuid, InvalidPetError> {
        if name.trim().is_empty() {
            return Err(InvalidPetError { field: "name" });
        }
        if breed.trim().is_empty() {
            return Err(InvalidPetError { field: "breed" });
        }
        if age.trim().is_empty() {
            return Err(InvalidPetError { field: "age" });
        }
        let id = Uuid::new_v4();
        self.pets.push(Pet {
            id,
            name: name.trim().to_string(),
            breed: breed.trim().to_string(),
            age: age.trim().to_string(),
            photo: photo.unwrap_or("🐱").to_string(),
            description: description.map(|d| d.to_string()),
        });
        Ok(id)
    }

    /// Replace the profile with a matching id. Returns false if unknown.
    pub fn update(&mut self, updated: Pet) -> bool {
        match self.pets.iter_mut().find(|p| p.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Remove the profile with this id. Returns false if unknown.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.pets.len();
        self.pets.retain(|p| p.id != id);
        self.pets.len() < before
    }

    /// Remove the first profile with this name (case-insensitive)
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        match self.find_by_name(name).map(|p| p.id) {
            Some(id) => self.remove(id),
            None => false,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    /// Look up a profile by name, case-insensitively
    pub fn find_by_name(&self, name: &str) -> Option<&Pet> {
        let wanted = name.trim().to_lowercase();
        self.pets.iter().find(|p| p.name.to_lowercase() == wanted)
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}
