use crate::recipe::{OrderedMap, Recipe, SizeClass};
use serde::{Deserialize, Serialize};

/// The compiled recipes of one size class, in the order they were declared.
///
/// Declaration order decides which recipe wins when several are satisfiable
/// by the same stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRegistry {
    size: SizeClass,
    recipes: OrderedMap<char, Recipe>,
}

impl RecipeRegistry {
    pub fn new(size: SizeClass) -> Self {
        Self {
            size,
            recipes: OrderedMap::default(),
        }
    }

    pub fn size(&self) -> SizeClass {
        self.size
    }

    /// Adds a recipe at the end of the registry.
    ///
    /// A recipe whose id is already registered replaces the old one in place,
    /// keeping its original position. The replaced recipe is returned.
    pub fn insert(&mut self, recipe: Recipe) -> Option<Recipe> {
        debug_assert_eq!(recipe.size, self.size);
        self.recipes.insert(recipe.id, recipe)
    }

    pub fn get(&self, id: char) -> Option<&Recipe> {
        self.recipes.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// Recipes together with the id they are registered under.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (char, &Recipe)> {
        self.recipes.iter().map(|(&id, recipe)| (id, recipe))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Both registries produced by one compilation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeBook {
    pub large: RecipeRegistry,
    pub small: RecipeRegistry,
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self {
            large: RecipeRegistry::new(SizeClass::Large),
            small: RecipeRegistry::new(SizeClass::Small),
        }
    }
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes the recipe to the registry of its size class.
    pub fn insert(&mut self, recipe: Recipe) -> Option<Recipe> {
        self.registry_mut(recipe.size).insert(recipe)
    }

    pub fn registry(&self, size: SizeClass) -> &RecipeRegistry {
        match size {
            SizeClass::Large => &self.large,
            SizeClass::Small => &self.small,
        }
    }

    pub fn registry_mut(&mut self, size: SizeClass) -> &mut RecipeRegistry {
        match size {
            SizeClass::Large => &mut self.large,
            SizeClass::Small => &mut self.small,
        }
    }

    pub fn len(&self) -> usize {
        self.large.len() + self.small.len()
    }

    pub fn is_empty(&self) -> bool {
        self.large.is_empty() && self.small.is_empty()
    }
}
