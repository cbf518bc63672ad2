use crate::config::FillerPolicy;
use crate::inventory::Inventory;
use serde::Serialize;

/// What happened to the filler flowers of a completed bouquet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FillerOutcome {
    /// The recipe names all of its flowers.
    NotNeeded,
    /// Filler was taken from the listed types.
    Deducted { taken: Vec<(char, u32)> },
    /// The stock could not pay the filler under the active policy, so it was
    /// left in place.
    Shortfall { needed: u32 },
}

/// Deducts `needed` filler flowers from `inventory` according to `policy`.
/// Either the whole amount is deducted or nothing is.
pub(super) fn take_filler(
    inventory: &mut Inventory,
    needed: u32,
    policy: FillerPolicy,
) -> FillerOutcome {
    if needed == 0 {
        return FillerOutcome::NotNeeded;
    }

    let plan = match policy {
        FillerPolicy::SingleType => inventory
            .iter()
            .find(|&(_, count)| count >= u64::from(needed))
            .map(|(kind, _)| vec![(kind, needed)]),
        FillerPolicy::Spread => {
            let mut remaining = needed;
            let mut taken = Vec::new();
            for (kind, count) in inventory.iter() {
                if remaining == 0 {
                    break;
                }
                let take = u32::try_from(count).unwrap_or(u32::MAX).min(remaining);
                if take > 0 {
                    taken.push((kind, take));
                    remaining -= take;
                }
            }
            (remaining == 0).then_some(taken)
        }
    };

    match plan {
        Some(taken) => {
            for &(kind, amount) in &taken {
                inventory.decrement(kind, u64::from(amount));
            }
            FillerOutcome::Deducted { taken }
        }
        None => FillerOutcome::Shortfall { needed },
    }
}
