//! The legged-mechanism design space and its mapping onto [`CandidateConfig`].
//!
//! Angles are expressed in degrees inside the space and converted to radians
//! when a parameter set is turned into a configuration.

use lf_types::{validation_error, CandidateConfig, LfResult};

use crate::search::{GridSearch, ParameterSet, ParameterValue, SearchSpace};

pub const MOTOR_RADIUS: f64 = 1.5;
pub const MAIN_LENGTH: f64 = 10.0;
pub const MAIN_HEIGHT: f64 = 2.0;
pub const UPPER_EXTENSION: f64 = 3.0;
pub const LEG_WIDTH: f64 = 3.0;
pub const LEG_HEIGHT: f64 = 5.0;
pub const LEG_ANGLE_DEG: f64 = 15.0;
pub const FOOT_HEIGHT: f64 = 5.0;
pub const LEG_NUMBER: u32 = 4;

/// Configuration every sampled parameter set is applied on top of.
pub fn base_config() -> CandidateConfig {
    CandidateConfig {
        motor_radius: MOTOR_RADIUS,
        main_length: MAIN_LENGTH,
        main_height: MAIN_HEIGHT,
        upper_extension: UPPER_EXTENSION,
        leg_width: LEG_WIDTH,
        leg_height: LEG_HEIGHT,
        leg_angle: LEG_ANGLE_DEG.to_radians(),
        foot_height: FOOT_HEIGHT,
        leg_number: LEG_NUMBER,
    }
}

/// Grid of hand-picked presets used by fixed mode.
pub fn preset_space() -> SearchSpace {
    SearchSpace::new()
        .add_choice("mainLength", floats(&[10.0, 15.0]))
        .add_choice("legAngle", floats(&[10.0, 15.0, 20.0]))
        .add_choice("footHeight", floats(&[5.0, 7.0]))
        .add_choice("legNumber", vec![ParameterValue::Int(3), ParameterValue::Int(5)])
}

/// Bounded uniform ranges used by randomized mode.
///
/// `legNumber` is inclusive on both ends, so `[2, 5]` here is `[2, 6)`.
pub fn random_space() -> SearchSpace {
    SearchSpace::new()
        .add_float("upperExtension", 0.5, 5.0)
        .add_float("legWidth", 1.0, 4.0)
        .add_float("legHeight", 2.0, 8.0)
        .add_float("legAngle", -5.0, 45.0)
        .add_float("footHeight", 2.0, 8.0)
        .add_int("legNumber", 2, 5)
}

/// All fixed-mode presets, in grid order.
pub fn presets() -> LfResult<Vec<CandidateConfig>> {
    GridSearch::new(&preset_space(), 2)
        .points()
        .iter()
        .map(config_from_parameters)
        .collect()
}

/// Fixed-mode preset at `index`.
pub fn preset(index: usize) -> LfResult<CandidateConfig> {
    let grid = GridSearch::new(&preset_space(), 2);
    let params = grid.points().get(index).ok_or_else(|| {
        validation_error!("preset index {index} out of range (0..{})", grid.points().len())
    })?;
    config_from_parameters(params)
}

/// Apply a parameter set on top of [`base_config`].
pub fn config_from_parameters(params: &ParameterSet) -> LfResult<CandidateConfig> {
    let mut config = base_config();
    for (name, value) in params {
        let v = value.as_f64();
        match name.as_str() {
            "motorRadius" => config.motor_radius = v,
            "mainLength" => config.main_length = v,
            "mainHeight" => config.main_height = v,
            "upperExtension" => config.upper_extension = v,
            "legWidth" => config.leg_width = v,
            "legHeight" => config.leg_height = v,
            "legAngle" => config.leg_angle = v.to_radians(),
            "footHeight" => config.foot_height = v,
            "legNumber" => {
                let legs = value
                    .as_i64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| validation_error!("legNumber must be a whole number, got {value}"))?;
                config.leg_number = legs;
            }
            other => return Err(validation_error!("unknown design parameter '{other}'")),
        }
    }
    Ok(config)
}

fn floats(values: &[f64]) -> Vec<ParameterValue> {
    values.iter().copied().map(ParameterValue::Float).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn preset_grid_covers_documented_values() {
        let all = presets().unwrap();
        assert_eq!(all.len(), 24);
        assert_eq!(GridSearch::new(&preset_space(), 2).points().len(), 24);

        for config in &all {
            config.validate().unwrap();
            assert_eq!(config.motor_radius, 1.5);
            assert_eq!(config.main_height, 2.0);
            assert_eq!(config.upper_extension, 3.0);
            assert_eq!(config.leg_width, 3.0);
            assert_eq!(config.leg_height, 5.0);
            assert!([10.0, 15.0].contains(&config.main_length));
            assert!([5.0, 7.0].contains(&config.foot_height));
            assert!([3, 5].contains(&config.leg_number));
            let degrees = config.leg_angle_degrees().round();
            assert!([10.0, 15.0, 20.0].contains(&degrees));
        }
    }

    #[test]
    fn preset_order_is_stable() {
        let first = preset(0).unwrap();
        assert_eq!(first.main_length, 10.0);
        assert!((first.leg_angle - 10f64.to_radians()).abs() < 1e-12);
        assert_eq!(first.foot_height, 5.0);
        assert_eq!(first.leg_number, 3);

        let last = preset(23).unwrap();
        assert_eq!(last.main_length, 15.0);
        assert_eq!(last.leg_number, 5);

        assert!(preset(24).is_err());
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        let mut params = HashMap::new();
        params.insert("tailLength".to_string(), ParameterValue::Float(1.0));
        assert!(config_from_parameters(&params).is_err());
    }

    #[test]
    fn fractional_leg_number_is_rejected() {
        let mut params = HashMap::new();
        params.insert("legNumber".to_string(), ParameterValue::Float(2.5));
        assert!(config_from_parameters(&params).is_err());
    }
}
