//! Rounding consumption to practical field increments.

use dosage_core::config::RoundingConfig;
use dosage_core::constants::CEMENT_BAG_KG;
use dosage_core::types::{FieldConsumption, MaterialQuantities};

use crate::util::round_to;

/// Round precise consumption to the configured field increments.
///
/// The cement bag count is reported only when the cement increment is the
/// standard 50 kg bag.
pub fn round(consumption: MaterialQuantities, config: RoundingConfig) -> FieldConsumption {
    let cement_increment = config.cement_increment as f64;
    let aggregate_increment = config.aggregate_increment as f64;
    let water_increment = config.water_increment as f64;

    let cement_bags = if cement_increment == CEMENT_BAG_KG {
        Some((consumption.cement / CEMENT_BAG_KG).ceil() as u32)
    } else {
        None
    };

    FieldConsumption {
        cement: (consumption.cement / cement_increment).round() * cement_increment,
        sand: (consumption.sand / aggregate_increment).round() * aggregate_increment,
        gravel: (consumption.gravel / aggregate_increment).round() * aggregate_increment,
        water: (consumption.water / water_increment).round() * water_increment,
        cement_bags,
    }
}

/// Scale per-m³ consumption to a given volume, optionally field-rounding the
/// scaled quantities. Without a config the result keeps one decimal.
pub fn scale_to_volume(
    consumption: MaterialQuantities,
    volume: f64,
    config: Option<RoundingConfig>,
) -> FieldConsumption {
    let scaled = MaterialQuantities {
        cement: consumption.cement * volume,
        sand: consumption.sand * volume,
        gravel: consumption.gravel * volume,
        water: consumption.water * volume,
    };

    match config {
        Some(config) => round(scaled, config),
        None => FieldConsumption {
            cement: round_to(scaled.cement, 1),
            sand: round_to(scaled.sand, 1),
            gravel: round_to(scaled.gravel, 1),
            water: round_to(scaled.water, 1),
            cement_bags: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consumption() -> MaterialQuantities {
        MaterialQuantities {
            cement: 432.07,
            sand: 672.4,
            gravel: 1019.5,
            water: 209.9,
        }
    }

    #[test]
    fn test_unit_increments_round_to_whole_units() {
        let rounded = round(consumption(), RoundingConfig::default());
        assert_eq!(rounded.cement, 432.0);
        assert_eq!(rounded.sand, 672.0);
        assert_eq!(rounded.gravel, 1020.0);
        assert_eq!(rounded.water, 210.0);
        assert_eq!(rounded.cement_bags, None);
    }

    #[test]
    fn test_five_kg_increments() {
        let config = RoundingConfig {
            water_increment: 5,
            cement_increment: 5,
            aggregate_increment: 5,
        };
        let rounded = round(consumption(), config);
        assert_eq!(rounded.cement, 430.0);
        assert_eq!(rounded.sand, 670.0);
        assert_eq!(rounded.gravel, 1020.0);
        assert_eq!(rounded.water, 210.0);
    }

    #[test]
    fn test_bag_increment_reports_bag_count() {
        let config = RoundingConfig {
            water_increment: 1,
            cement_increment: 50,
            aggregate_increment: 5,
        };
        let rounded = round(consumption(), config);
        assert_eq!(rounded.cement, 450.0);
        // Bags cover the precise demand: ceil(432.07 / 50) = 9.
        assert_eq!(rounded.cement_bags, Some(9));
    }

    #[test]
    fn test_scale_to_volume_without_config() {
        let scaled = scale_to_volume(consumption(), 2.0, None);
        assert!((scaled.cement - 864.1).abs() < 1e-9);
        assert!((scaled.water - 419.8).abs() < 1e-9);
        assert_eq!(scaled.cement_bags, None);
    }

    #[test]
    fn test_scale_to_volume_with_config_rounds_scaled_values() {
        let config = RoundingConfig {
            water_increment: 10,
            cement_increment: 50,
            aggregate_increment: 5,
        };
        let scaled = scale_to_volume(consumption(), 2.0, Some(config));
        assert_eq!(scaled.cement, 850.0);
        assert_eq!(scaled.water, 420.0);
        assert_eq!(scaled.cement_bags, Some(18)); // ceil(864.14 / 50)
    }
}
