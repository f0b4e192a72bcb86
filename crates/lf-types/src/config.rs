//! Candidate mechanism configuration (one point of the design space).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::LfResult;
use crate::validation_error;

/// Body and leg geometry handed to the simulator.
///
/// Lengths are in simulator units, `leg_angle` is in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateConfig {
    pub motor_radius: f64,
    pub main_length: f64,
    pub main_height: f64,
    pub upper_extension: f64,
    pub leg_width: f64,
    pub leg_height: f64,
    pub leg_angle: f64,
    pub foot_height: f64,
    pub leg_number: u32,
}

impl CandidateConfig {
    /// Minimum number of legs a mechanism can be built with.
    pub const MIN_LEGS: u32 = 2;

    /// Named length fields, in persisted order.
    pub fn lengths(&self) -> [(&'static str, f64); 7] {
        [
            ("motorRadius", self.motor_radius),
            ("mainLength", self.main_length),
            ("mainHeight", self.main_height),
            ("upperExtension", self.upper_extension),
            ("legWidth", self.leg_width),
            ("legHeight", self.leg_height),
            ("footHeight", self.foot_height),
        ]
    }

    /// Leg angle converted back to degrees.
    pub fn leg_angle_degrees(&self) -> f64 {
        self.leg_angle.to_degrees()
    }

    /// Check `legNumber >= 2` and that every length is strictly positive.
    pub fn validate(&self) -> LfResult<()> {
        if self.leg_number < Self::MIN_LEGS {
            return Err(validation_error!(
                "legNumber must be >= {}, got {}",
                Self::MIN_LEGS,
                self.leg_number
            ));
        }
        for (name, value) in self.lengths() {
            // NaN fails this comparison too
            if !(value > 0.0) {
                return Err(validation_error!("{name} must be > 0, got {value}"));
            }
        }
        if !self.leg_angle.is_finite() {
            return Err(validation_error!("legAngle must be finite, got {}", self.leg_angle));
        }
        Ok(())
    }
}

impl fmt::Display for CandidateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.lengths().iter().take(6) {
            writeln!(f, "{name} = {value}")?;
        }
        writeln!(f, "legAngle = {} ({:.2} deg)", self.leg_angle, self.leg_angle_degrees())?;
        writeln!(f, "footHeight = {}", self.foot_height)?;
        write!(f, "legNumber = {}", self.leg_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pentapod() -> CandidateConfig {
        CandidateConfig {
            motor_radius: 1.5,
            main_length: 10.0,
            main_height: 2.0,
            upper_extension: 3.0,
            leg_width: 3.0,
            leg_height: 5.0,
            leg_angle: 20f64.to_radians(),
            foot_height: 5.0,
            leg_number: 5,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(pentapod().validate().is_ok());
    }

    #[test]
    fn rejects_single_leg() {
        let mut config = pentapod();
        config.leg_number = 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("legNumber"));
    }

    #[test]
    fn rejects_non_positive_length() {
        let mut config = pentapod();
        config.foot_height = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("footHeight"));

        let mut config = pentapod();
        config.leg_width = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_angle_is_allowed() {
        let mut config = pentapod();
        config.leg_angle = (-5f64).to_radians();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn serializes_with_record_field_names() {
        let value = serde_json::to_value(pentapod()).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "motorRadius",
            "mainLength",
            "mainHeight",
            "upperExtension",
            "legWidth",
            "legHeight",
            "legAngle",
            "footHeight",
            "legNumber",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object.len(), 9);
        assert_eq!(value["legNumber"], serde_json::json!(5));
    }

    #[test]
    fn display_lists_every_field() {
        let text = pentapod().to_string();
        assert!(text.starts_with("motorRadius = 1.5"));
        assert!(text.contains("legAngle = "));
        assert!(text.contains("20.00 deg"));
        assert!(text.ends_with("legNumber = 5"));
    }
}
