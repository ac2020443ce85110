use serde::{Deserialize, Serialize};

use petcare_core::{Entity, PetId};

/// Kind of pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

impl PetType {
    pub fn label(self) -> &'static str {
        match self {
            PetType::Dog => "Dog",
            PetType::Cat => "Cat",
            PetType::Bird => "Bird",
            PetType::Rabbit => "Rabbit",
            PetType::Other => "Other",
        }
    }
}

/// A pet owned by the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PetType,
    pub breed: String,
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Pet {
    pub fn apply(&mut self, patch: PetPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(breed) = patch.breed {
            self.breed = breed;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }
    }
}

impl Entity for Pet {
    type Id = PetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A pet as submitted through the "add pet" form; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PetType,
    pub breed: String,
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewPet {
    pub fn into_pet(self, id: PetId) -> Pet {
        Pet {
            id,
            name: self.name,
            kind: self.kind,
            breed: self.breed,
            age: self.age,
            image_url: self.image_url,
        }
    }
}

/// Partial update for [`Pet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<PetType>,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub image_url: Option<String>,
}
