use crate::error::ArtifactError;
use crate::recipe::SizeClass;
use crate::registry::{RecipeBook, RecipeRegistry};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;

impl RecipeBook {
    /// Serializes the compiled recipes using the bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Writes the compiled recipes to `path`, so later runs can skip compilation.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        fs::write(path, self.to_bytes()?)
            .map_err(|e| ArtifactError::Generic(format!("Could not write '{}': {}", path, e)))
    }

    /// Loads a book written by [`RecipeBook::save`].
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let bytes = fs::read(path)
            .map_err(|e| ArtifactError::Generic(format!("Could not read '{}': {}", path, e)))?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a book and checks that it could have come out of the
    /// compiler.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let (book, _): (Self, usize) = decode_from_slice(bytes, standard())
            .map_err(|e| ArtifactError::Generic(format!("Deserialization failed: {}", e)))?;
        book.validate()?;
        Ok(book)
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        check_registry(&self.large, SizeClass::Large)?;
        check_registry(&self.small, SizeClass::Small)
    }
}

fn check_registry(registry: &RecipeRegistry, slot: SizeClass) -> Result<(), ArtifactError> {
    if registry.size() != slot {
        return Err(ArtifactError::Invalid(format!(
            "registry for size {} is stored in the {} slot",
            registry.size(),
            slot
        )));
    }

    for (id, recipe) in registry.entries() {
        let code = &recipe.display_code;
        if recipe.size != slot {
            return Err(ArtifactError::Invalid(format!(
                "recipe '{}' of size {} is registered under size {}",
                code, recipe.size, slot
            )));
        }
        if id != recipe.id || !id.is_ascii_uppercase() {
            return Err(ArtifactError::Invalid(format!(
                "recipe '{}' has id '{}' but is registered as '{}'",
                code, recipe.id, id
            )));
        }
        if let Some(kind) = recipe.required.keys().find(|k| !k.is_ascii_lowercase()) {
            return Err(ArtifactError::Invalid(format!(
                "recipe '{}' requires unknown flower type '{}'",
                code, kind
            )));
        }
        let required: u64 = recipe.required.values().map(|&q| u64::from(q)).sum();
        if required > u64::from(recipe.total_flowers) {
            return Err(ArtifactError::Invalid(format!(
                "recipe '{}' requires {} named flowers but totals {}",
                code, required, recipe.total_flowers
            )));
        }
    }

    Ok(())
}
