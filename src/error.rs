use thiserror::Error;

/// Errors that can occur while compiling a bouquet design into a `Recipe`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Design '{0}' is too short to carry an identifier and a size class")]
    MissingHeader(String),

    #[error("Design '{description}' has an invalid identifier '{found}', expected an uppercase letter")]
    InvalidIdentifier { description: String, found: char },

    #[error("Design '{description}' has an invalid size class '{found}', expected 'L' or 'S'")]
    InvalidSizeClass { description: String, found: char },

    #[error(
        "Design '{description}' has {quantities} quantities for {flower_types} flower types, expected exactly one more quantity than flower types"
    )]
    ArityMismatch {
        description: String,
        quantities: usize,
        flower_types: usize,
    },

    #[error("Design '{description}' lists flower type '{flower}' more than once")]
    DuplicateFlowerType { description: String, flower: char },

    #[error("Design '{description}' has a quantity '{literal}' that does not fit in 32 bits")]
    QuantityOverflow { description: String, literal: String },

    #[error(
        "Design '{description}' declares {total} flowers in total, but its named flowers already require {required}"
    )]
    TotalBelowRequired {
        description: String,
        total: u32,
        required: u32,
    },
}

/// Errors raised at the input boundary, before anything reaches the matcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Could not read input '{path}': {message}")]
    Read { path: String, message: String },

    #[error("'{0}' is not a flower, expected a lowercase type followed by 'L' or 'S'")]
    InvalidFlower(String),
}

/// Errors that can occur when persisting or loading a compiled `RecipeBook`.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact error: {0}")]
    Generic(String),

    #[error("Recipe book is inconsistent: {0}")]
    Invalid(String),
}

/// Errors that can occur while loading a `FacilityConfig`.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Invalid config: {0}")]
    Parse(String),
}

/// Errors raised by an `Emitter` while surfacing a bouquet.
#[derive(Error, Debug, Clone)]
pub enum EmitError {
    #[error("Failed to emit bouquet '{code}': {message}")]
    Write { code: String, message: String },
}
