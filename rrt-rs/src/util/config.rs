use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::io::svg::svg_util::Color;

///Configuration of the RRT planner
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RRTConfig {
    ///Fixed distance advanced by every steering step
    pub step_length: f32,
    ///Every `goal_bias_freq`-th iteration targets the goal instead of a random sample
    pub goal_bias_freq: usize,
    ///Radius of the start and end nodes, also used to check whether they lie in free space
    pub endpoint_radius: f32,
    ///Radius of the nodes grown by the planner (presentation only)
    pub node_radius: f32,
    ///Maximum number of iterations before the planner gives up. 100 000 if left out, unbounded if `null`
    #[serde(default = "default_max_iterations")]
    pub max_iterations: Option<usize>,
    ///Maximum wall-clock time in milliseconds before the planner gives up. Unbounded if undefined
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
    ///Colors assigned to the nodes and edges of the tree
    #[serde(default)]
    pub palette: TreePalette,
}

fn default_max_iterations() -> Option<usize> {
    Some(100_000)
}

impl RRTConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.step_length.is_finite() && self.step_length > 0.0,
            "step length should be strictly positive: {}",
            self.step_length
        );
        ensure!(
            self.goal_bias_freq >= 1,
            "goal bias frequency should be at least 1"
        );
        ensure!(
            self.endpoint_radius.is_finite() && self.endpoint_radius > 0.0,
            "endpoint radius should be strictly positive: {}",
            self.endpoint_radius
        );
        ensure!(
            self.node_radius.is_finite() && self.node_radius > 0.0,
            "node radius should be strictly positive: {}",
            self.node_radius
        );
        ensure!(
            self.max_iterations != Some(0),
            "iteration budget should allow at least one iteration"
        );
        ensure!(
            self.time_limit_ms != Some(0),
            "time limit should be strictly positive"
        );
        Ok(())
    }
}

impl Default for RRTConfig {
    fn default() -> Self {
        Self {
            step_length: 1.5,
            goal_bias_freq: 10,
            endpoint_radius: 1.0,
            node_radius: 0.08,
            max_iterations: default_max_iterations(),
            time_limit_ms: None,
            palette: TreePalette::default(),
        }
    }
}

///Presentation colors of the tree
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TreePalette {
    pub start: Color,
    pub goal: Color,
    pub node: Color,
    pub edge: Color,
    pub path: Color,
}

impl Default for TreePalette {
    fn default() -> Self {
        Self {
            start: Color(0x00, 0x80, 0x00), // GREEN
            goal: Color(0xFF, 0x00, 0x00),  // RED
            node: Color(0x00, 0x00, 0xFF),  // BLUE
            edge: Color(0x80, 0x00, 0x80),  // PURPLE
            path: Color(0xFF, 0xFF, 0x00),  // YELLOW
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(RRTConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let base = RRTConfig::default();
        let invalid = [
            RRTConfig {
                step_length: 0.0,
                ..base
            },
            RRTConfig {
                step_length: f32::NAN,
                ..base
            },
            RRTConfig {
                goal_bias_freq: 0,
                ..base
            },
            RRTConfig {
                endpoint_radius: -1.0,
                ..base
            },
            RRTConfig {
                max_iterations: Some(0),
                ..base
            },
            RRTConfig {
                time_limit_ms: Some(0),
                ..base
            },
        ];
        for config in invalid {
            assert!(config.validate().is_err(), "{config:?} should be invalid");
        }
    }

    #[test]
    fn json_without_optional_fields_uses_defaults() {
        let json = r#"{
            "step_length": 2.0,
            "goal_bias_freq": 5,
            "endpoint_radius": 1.0,
            "node_radius": 0.1,
            "max_iterations": null
        }"#;
        let config: RRTConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_iterations, None);
        assert_eq!(config.time_limit_ms, None);
        assert_eq!(config.palette, TreePalette::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn omitted_iteration_budget_stays_bounded() {
        let json = r#"{
            "step_length": 1.5,
            "goal_bias_freq": 10,
            "endpoint_radius": 1.0,
            "node_radius": 0.08
        }"#;
        let config: RRTConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_iterations, Some(100_000));
        assert_eq!(config, RRTConfig::default());
    }

    #[test]
    fn palette_serializes_as_hex() {
        let json = serde_json::to_string(&TreePalette::default()).unwrap();
        assert!(json.contains("\"start\":\"#008000\""));
        let back: TreePalette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TreePalette::default());
    }
}
