use crate::matcher::{Bouquet, FillerOutcome};
use crate::recipe::SizeClass;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Flowers of one type still in stock once the stream is exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leftover {
    pub size: SizeClass,
    pub kind: char,
    pub count: u64,
}

/// Summary of a facility run: every emitted bouquet, with how its filler was
/// paid, plus the remaining stock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacilityReport {
    pub bouquets: Vec<Bouquet>,
    pub leftovers: Vec<Leftover>,
}

impl FacilityReport {
    pub fn leftover_total(&self) -> u64 {
        self.leftovers
            .iter()
            .fold(0u64, |total, l| total.saturating_add(l.count))
    }

    /// Bouquets emitted without their filler being deducted.
    pub fn shortfalls(&self) -> usize {
        self.bouquets
            .iter()
            .filter(|b| matches!(b.filler, FillerOutcome::Shortfall { .. }))
            .count()
    }
}

impl fmt::Display for FacilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bouquets emitted: {}", self.bouquets.len())?;
        writeln!(f, "Filler shortfalls: {}", self.shortfalls())?;
        for size in SizeClass::ALL {
            let stock = self
                .leftovers
                .iter()
                .filter(|l| l.size == size && l.count > 0)
                .map(|l| format!("{}{}", l.count, l.kind))
                .join(" ");
            let stock = if stock.is_empty() { "-".to_string() } else { stock };
            writeln!(f, "Leftover {}: {}", size, stock)?;
        }
        Ok(())
    }
}
