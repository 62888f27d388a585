//! Mixer batch calculation.

use dosage_core::config::MixerContainer;
use dosage_core::constants::{CEMENT_BAG_KG, CONSUMPTION_DECIMALS, CONTAINER_VOLUME_DECIMALS};
use dosage_core::types::{BatchResult, MaterialQuantities};

use crate::util::round_to;

/// Split a pour into batches sized by the mixing container.
///
/// `consumption` is per m³; per-batch quantities scale with the container
/// volume and totals with the requested pour volume.
pub fn calculate(
    consumption: MaterialQuantities,
    container: MixerContainer,
    total_volume: f64,
) -> BatchResult {
    let container_volume = container.volume();

    let number_of_batches = (total_volume / container_volume).ceil() as u32;

    let per_batch = MaterialQuantities {
        cement: round_to(consumption.cement * container_volume, CONSUMPTION_DECIMALS),
        sand: round_to(consumption.sand * container_volume, CONSUMPTION_DECIMALS),
        gravel: round_to(consumption.gravel * container_volume, CONSUMPTION_DECIMALS),
        water: round_to(consumption.water * container_volume, CONSUMPTION_DECIMALS),
    };

    let total = MaterialQuantities {
        cement: round_to(consumption.cement * total_volume, CONSUMPTION_DECIMALS),
        sand: round_to(consumption.sand * total_volume, CONSUMPTION_DECIMALS),
        gravel: round_to(consumption.gravel * total_volume, CONSUMPTION_DECIMALS),
        water: round_to(consumption.water * total_volume, CONSUMPTION_DECIMALS),
    };

    BatchResult {
        container_volume: round_to(container_volume, CONTAINER_VOLUME_DECIMALS),
        total_volume,
        number_of_batches,
        per_batch,
        total,
    }
}

/// Batch breakdown rounded to practical whole kilograms, plus cement bag
/// counts for purchasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PracticalBatchResult {
    pub batch: BatchResult,
    /// Whole bags needed per batch.
    pub cement_bags_per_batch: u32,
    /// Whole bags for the full pour.
    pub total_cement_bags: u32,
}

/// Like [`calculate`], with quantities rounded to whole units for the crew.
pub fn calculate_practical(
    consumption: MaterialQuantities,
    container: MixerContainer,
    total_volume: f64,
    cement_bag_kg: Option<f64>,
) -> PracticalBatchResult {
    let bag = cement_bag_kg.unwrap_or(CEMENT_BAG_KG);
    let mut batch = calculate(consumption, container, total_volume);

    let cement_bags_per_batch = (batch.per_batch.cement / bag).ceil() as u32;
    let total_cement_bags = (batch.total.cement / bag).ceil() as u32;

    batch.per_batch = MaterialQuantities {
        cement: batch.per_batch.cement.round(),
        sand: batch.per_batch.sand.round(),
        gravel: batch.per_batch.gravel.round(),
        water: batch.per_batch.water.round(),
    };
    batch.total = MaterialQuantities {
        cement: batch.total.cement.round(),
        sand: batch.total.sand.round(),
        gravel: batch.total.gravel.round(),
        water: batch.total.water.round(),
    };

    PracticalBatchResult {
        batch,
        cement_bags_per_batch,
        total_cement_bags,
    }
}
