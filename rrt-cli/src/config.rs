use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use rrt_rs::io::svg::svg_util::SvgDrawOptions;
use rrt_rs::util::RRTConfig;

/// Configuration of a run of the command line application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CliConfig {
    /// Configuration of the planner
    pub rrt: RRTConfig,
    /// Configuration of the random scene generator, used when no scene file is provided
    #[serde(default)]
    pub scene: SceneGenConfig,
    /// Seed for the PRNG. If undefined, the run is non-deterministic and uses entropy
    pub prng_seed: Option<u64>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rrt: RRTConfig::default(),
            scene: SceneGenConfig::default(),
            prng_seed: Some(0),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

/// Parameters of the random scene generator
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SceneGenConfig {
    /// Width of the rectangular region
    pub width: f32,
    /// Height of the rectangular region
    pub height: f32,
    /// Number of obstacles to place
    pub n_obstacles: usize,
    /// Bounds of the uniform distribution of obstacle widths
    pub obstacle_width_range: (f32, f32),
    /// Bounds of the uniform distribution of obstacle heights
    pub obstacle_height_range: (f32, f32),
    /// Number of rejected samples after which the generator gives up on placing an obstacle or endpoint
    pub max_attempts: usize,
}

impl Default for SceneGenConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 30.0,
            n_obstacles: 15,
            obstacle_width_range: (2.0, 5.0),
            obstacle_height_range: (2.0, 5.0),
            max_attempts: 10_000,
        }
    }
}

impl SceneGenConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0.0 && self.height > 0.0,
            "region should have a strictly positive width and height: {} x {}",
            self.width,
            self.height
        );
        for (name, (lo, hi)) in [
            ("width", self.obstacle_width_range),
            ("height", self.obstacle_height_range),
        ] {
            ensure!(
                0.0 < lo && lo < hi,
                "obstacle {name} range should satisfy 0 < min < max: ({lo}, {hi})"
            );
        }
        ensure!(
            self.obstacle_width_range.0 < self.width && self.obstacle_height_range.0 < self.height,
            "smallest obstacles do not fit inside the region"
        );
        ensure!(self.max_attempts > 0, "at least one attempt is required");
        Ok(())
    }
}
