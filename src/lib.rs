//! # Ikebana - Streaming Bouquet Assembly Engine
//!
//! **Ikebana** compiles bouquet designs ahead of time and then matches them,
//! one flower at a time, against an unbounded stream of flowers. Whenever the
//! flowers received so far can make up a known design, the design's code is
//! emitted and the flowers it used are taken out of stock.
//!
//! ## Core Workflow
//!
//! 1.  **Extract**: Pull design descriptions (`AS10a10b25`) and flowers (`aS`)
//!     out of raw text with the helpers in [`intake`].
//! 2.  **Compile**: Use `Compiler::builder` to turn the designs into a
//!     [`RecipeBook`](registry::RecipeBook), one ordered registry per size class.
//!     A book can be saved with bincode and loaded again later.
//! 3.  **Match**: Create a [`Facility`](facility::Facility) from the book and
//!     feed it flowers. Each size class has its own stock and recipes; the first
//!     recipe in declaration order that the stock satisfies completes.
//! 4.  **Emit**: Completed bouquets go to an [`Emitter`](emitter::Emitter) in the
//!     order they complete.
//!
//! A design's total may exceed the flowers it names. The difference is filler:
//! flowers of any type, taken from the stock according to the configured
//! [`FillerPolicy`](config::FillerPolicy).
//!
//! ## Quick Start
//!
//! ```rust
//! use ikebana::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let input = "AS2a1b3\n\naSbSaS";
//!
//!     let config = FacilityConfig::default();
//!     let mut facility = Facility::from_text(input, &config)?;
//!
//!     let mut bouquets: Vec<String> = Vec::new();
//!     facility.run(extract_flowers(input), &mut bouquets)?;
//!
//!     assert_eq!(bouquets, vec!["AS2a1b".to_string()]);
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod config;
pub mod emitter;
pub mod error;
pub mod facility;
pub mod intake;
pub mod inventory;
pub mod matcher;
pub mod prelude;
pub mod recipe;
pub mod registry;
pub mod report;

#[cfg(feature = "python-bindings")]
mod python;
