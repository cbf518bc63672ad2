//! Prelude module for convenient imports
//!
//! Re-exports the types needed to compile designs and run a facility.
//!
//! # Example
//!
//! ```rust,no_run
//! use ikebana::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let input = read_input("path/to/input.txt")?;
//! let config = FacilityConfig::from_file("path/to/config.json")?;
//!
//! let mut facility = Facility::from_text(&input, &config)?;
//! let mut emitter = WriterEmitter::new(std::io::stdout());
//! let emitted = facility.run(extract_flowers(&input), &mut emitter)?;
//!
//! eprintln!("{} bouquets", emitted);
//! # Ok(())
//! # }
//! ```

// Compilation and matching
pub use crate::compiler::{Compiler, compile_recipe};
pub use crate::facility::Facility;
pub use crate::matcher::{Bouquet, FillerOutcome, MatchingEngine};

// Data model
pub use crate::inventory::Inventory;
pub use crate::recipe::{Flower, Recipe, SizeClass};
pub use crate::registry::{RecipeBook, RecipeRegistry};

// Boundaries
pub use crate::config::{FacilityConfig, FillerPolicy};
pub use crate::emitter::{Emitter, WriterEmitter};
pub use crate::intake::{extract_flowers, extract_recipe_descriptions, read_input};
pub use crate::report::{FacilityReport, Leftover};

// Error types
pub use crate::error::{ArtifactError, CompileError, ConfigError, EmitError, IntakeError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
