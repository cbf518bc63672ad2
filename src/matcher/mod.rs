use crate::config::FillerPolicy;
use crate::inventory::Inventory;
use crate::recipe::SizeClass;
use crate::registry::RecipeRegistry;
use serde::Serialize;
use tracing::{debug, trace, warn};

mod filler;

pub use filler::FillerOutcome;
use filler::take_filler;

/// A completed bouquet, ready to be emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bouquet {
    pub recipe_id: char,
    pub size: SizeClass,
    pub display_code: String,
    pub filler: FillerOutcome,
}

/// Matches the flowers of one size class against that class's recipes.
///
/// Every arrival is added to the stock and then the registry is scanned in
/// declaration order. The first recipe whose named flowers are all in stock
/// completes: its flowers and filler are deducted and a [`Bouquet`] is
/// returned. At most one bouquet completes per arrival.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    registry: RecipeRegistry,
    inventory: Inventory,
    filler_policy: FillerPolicy,
}

impl MatchingEngine {
    pub fn new(registry: RecipeRegistry, filler_policy: FillerPolicy) -> Self {
        Self {
            registry,
            inventory: Inventory::new(),
            filler_policy,
        }
    }

    pub fn size(&self) -> SizeClass {
        self.registry.size()
    }

    pub fn registry(&self) -> &RecipeRegistry {
        &self.registry
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Takes one flower of `kind` and returns the bouquet it completes, if any.
    pub fn receive(&mut self, kind: char) -> Option<Bouquet> {
        let count = self.inventory.increment(kind);
        trace!(size = %self.size(), flower = %kind, count, "flower received");

        let recipe = self
            .registry
            .iter()
            .find(|recipe| self.inventory.satisfies(recipe))?;

        for (&required_kind, &needed) in &recipe.required {
            self.inventory.decrement(required_kind, u64::from(needed));
        }

        let filler = take_filler(&mut self.inventory, recipe.filler(), self.filler_policy);
        if let FillerOutcome::Shortfall { needed } = filler {
            warn!(
                code = %recipe.display_code,
                needed,
                policy = ?self.filler_policy,
                "filler could not be taken from stock, emitting without deducting it"
            );
        }
        debug!(code = %recipe.display_code, ?filler, "bouquet completed");

        Some(Bouquet {
            recipe_id: recipe.id,
            size: recipe.size,
            display_code: recipe.display_code.clone(),
            filler,
        })
    }
}
