use crate::recipe::{OrderedMap, Recipe};
use serde::{Deserialize, Serialize};

/// Running stock of unconsumed flowers for one size class.
///
/// Entries are created on the first sighting of a flower type and are never
/// removed, so iteration follows the order in which types first arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    counts: OrderedMap<char, u64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more flower of `kind` and returns the updated count.
    pub fn increment(&mut self, kind: char) -> u64 {
        let count = self.counts.entry(kind).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Removes `amount` flowers of `kind`.
    ///
    /// Callers must have checked the stock first; the count never wraps.
    pub(crate) fn decrement(&mut self, kind: char, amount: u64) {
        if let Some(count) = self.counts.get_mut(&kind) {
            debug_assert!(*count >= amount, "deducting {amount} of '{kind}' from {count}");
            *count = count.saturating_sub(amount);
        }
    }

    /// Current count of `kind`. Types never seen count as zero.
    pub fn count(&self, kind: char) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Whether every named requirement of `recipe` is covered by the stock.
    /// A recipe without named flowers is always satisfiable.
    pub fn satisfies(&self, recipe: &Recipe) -> bool {
        recipe
            .required
            .iter()
            .all(|(&kind, &needed)| self.count(kind) >= u64::from(needed))
    }

    /// Flower types and counts in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&kind, &count)| (kind, count))
    }

    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |total, &count| total.saturating_add(count))
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
