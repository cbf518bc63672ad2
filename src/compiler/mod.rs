use crate::error::CompileError;
use crate::registry::RecipeBook;
use tracing::{debug, warn};

pub mod parsing;

pub use parsing::compile_recipe;

/// Compiles a batch of bouquet designs into a [`RecipeBook`].
pub struct Compiler {
    descriptions: Vec<String>,
    skip_malformed: bool,
}

pub struct CompilerBuilder {
    descriptions: Vec<String>,
    skip_malformed: bool,
}

impl CompilerBuilder {
    pub fn new<I, S>(descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            descriptions: descriptions.into_iter().map(Into::into).collect(),
            skip_malformed: false,
        }
    }

    /// Log and drop malformed designs instead of failing the whole batch.
    pub fn skip_malformed(mut self, skip: bool) -> Self {
        self.skip_malformed = skip;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            descriptions: self.descriptions,
            skip_malformed: self.skip_malformed,
        }
    }
}

impl Compiler {
    pub fn builder<I, S>(descriptions: I) -> CompilerBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CompilerBuilder::new(descriptions)
    }

    /// Compiles every design in declaration order.
    ///
    /// A design reusing an id already seen in the same size class replaces the
    /// earlier one but keeps its position.
    pub fn compile(self) -> Result<RecipeBook, CompileError> {
        let mut book = RecipeBook::new();

        for description in &self.descriptions {
            let recipe = match compile_recipe(description) {
                Ok(recipe) => recipe,
                Err(error) if self.skip_malformed => {
                    warn!(%error, "skipping malformed design");
                    continue;
                }
                Err(error) => return Err(error),
            };

            debug!(
                design = %description,
                code = %recipe.display_code,
                filler = recipe.filler(),
                "compiled design"
            );
            if let Some(previous) = book.insert(recipe) {
                warn!(
                    id = %previous.id,
                    size = %previous.size,
                    replaced = %previous.display_code,
                    "design id declared twice, keeping the later definition"
                );
            }
        }

        Ok(book)
    }
}
