//! Common test utilities for building registries, engines and inputs.
use ikebana::prelude::*;

/// Three designs and a stream that exercises matches, filler deduction and
/// filler shortfalls in both size classes.
#[allow(dead_code)]
pub const SAMPLE_INPUT: &str = "AS2a1b3
BS1c3
AL1a1b4

aS
aS
bL
aL
bS
cS
aS
aS
aS
cS
bL
bL
bL
aL
";

/// Bouquets `SAMPLE_INPUT` produces, in completion order.
#[allow(dead_code)]
pub fn sample_bouquets() -> Vec<String> {
    ["AL1a1b", "AS2a1b", "BS1c", "BS1c", "AL1a1b"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Compiles `designs` into a registry for `size`.
#[allow(dead_code)]
pub fn registry(size: SizeClass, designs: &[&str]) -> RecipeRegistry {
    let mut registry = RecipeRegistry::new(size);
    for design in designs {
        let recipe = compile_recipe(design).expect("test design should compile");
        assert_eq!(recipe.size, size, "design '{}' has the wrong size class", design);
        registry.insert(recipe);
    }
    registry
}

/// Creates a small-flower engine for `designs`.
#[allow(dead_code)]
pub fn small_engine(designs: &[&str], policy: FillerPolicy) -> MatchingEngine {
    MatchingEngine::new(registry(SizeClass::Small, designs), policy)
}

/// Feeds each character of `kinds` as one flower and collects the codes emitted.
#[allow(dead_code)]
pub fn feed(engine: &mut MatchingEngine, kinds: &str) -> Vec<String> {
    kinds
        .chars()
        .filter_map(|kind| engine.receive(kind))
        .map(|bouquet| bouquet.display_code)
        .collect()
}

/// Snapshot of the stock in first-appearance order.
#[allow(dead_code)]
pub fn stock(engine: &MatchingEngine) -> Vec<(char, u64)> {
    engine.inventory().iter().collect()
}
