use crate::compiler::Compiler;
use crate::config::FacilityConfig;
use crate::emitter::Emitter;
use crate::error::{CompileError, EmitError};
use crate::intake::extract_recipe_descriptions;
use crate::matcher::{Bouquet, MatchingEngine};
use crate::recipe::{Flower, SizeClass};
use crate::registry::RecipeBook;
use crate::report::{FacilityReport, Leftover};
use tracing::info;

/// Routes a flower stream to one matching engine per size class.
///
/// The two size classes never share stock or recipes.
#[derive(Debug, Clone)]
pub struct Facility {
    large: MatchingEngine,
    small: MatchingEngine,
}

impl Facility {
    pub fn new(book: RecipeBook, config: &FacilityConfig) -> Self {
        info!(
            large = book.large.len(),
            small = book.small.len(),
            policy = ?config.filler_policy,
            "facility ready"
        );
        Self {
            large: MatchingEngine::new(book.large, config.filler_policy),
            small: MatchingEngine::new(book.small, config.filler_policy),
        }
    }

    /// Extracts and compiles every design found in `text`.
    pub fn from_text(text: &str, config: &FacilityConfig) -> Result<Self, CompileError> {
        let book = Compiler::builder(extract_recipe_descriptions(text))
            .skip_malformed(config.skip_malformed_designs)
            .build()
            .compile()?;
        Ok(Self::new(book, config))
    }

    pub fn engine(&self, size: SizeClass) -> &MatchingEngine {
        match size {
            SizeClass::Large => &self.large,
            SizeClass::Small => &self.small,
        }
    }

    fn engine_mut(&mut self, size: SizeClass) -> &mut MatchingEngine {
        match size {
            SizeClass::Large => &mut self.large,
            SizeClass::Small => &mut self.small,
        }
    }

    /// Takes one flower and returns the bouquet it completes, if any.
    pub fn receive(&mut self, flower: Flower) -> Option<Bouquet> {
        self.engine_mut(flower.size).receive(flower.kind)
    }

    /// Consumes `flowers` in order, emitting each bouquet as it completes.
    /// Returns the number of bouquets emitted.
    ///
    /// Stops at the first emitter failure. The flowers of the bouquet that
    /// failed to emit stay consumed; the returned [`EmitError`] carries its
    /// display code, and flowers after it are left unread.
    pub fn run<I, E>(&mut self, flowers: I, emitter: &mut E) -> Result<usize, EmitError>
    where
        I: IntoIterator<Item = Flower>,
        E: Emitter + ?Sized,
    {
        let mut emitted = 0;
        for flower in flowers {
            if let Some(bouquet) = self.receive(flower) {
                emitter.emit(&bouquet)?;
                emitted += 1;
            }
        }
        Ok(emitted)
    }

    /// Builds a report from the bouquets emitted so far and the current stock.
    pub fn report(&self, bouquets: Vec<Bouquet>) -> FacilityReport {
        let leftovers = SizeClass::ALL
            .into_iter()
            .flat_map(move |size| {
                self.engine(size)
                    .inventory()
                    .iter()
                    .map(move |(kind, count)| Leftover { size, kind, count })
            })
            .collect();
        FacilityReport {
            bouquets,
            leftovers,
        }
    }
}
