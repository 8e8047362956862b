use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info};
use rand::Rng;
use rand::distr::{Distribution, Uniform};

use rrt_rs::entities::{Obstacle, Region, Scene};
use rrt_rs::geometry::geo_traits::{CollidesWith, Contains};
use rrt_rs::geometry::primitives::{Circle, Point};
use rrt_rs::io::import::SceneQuery;
use rrt_rs::rrt::UniformRectSampler;

use crate::config::SceneGenConfig;

/// Generates a random scene: a rectangular region, non-overlapping obstacles inside it and a start
/// and goal whose disks of radius `endpoint_radius` lie inside the region, clear of every obstacle.
pub fn generate_scene(
    config: &SceneGenConfig,
    endpoint_radius: f32,
    rng: &mut impl Rng,
) -> Result<SceneQuery> {
    config.validate()?;
    let region = Region::rectangular(config.width, config.height)?;
    let sampler = UniformRectSampler::new(region.bbox())?;

    let obstacles = generate_obstacles(config, &region, &sampler, rng)?;
    debug!(
        "[GEN] placed {} obstacles in a {} x {} region",
        obstacles.len(),
        config.width,
        config.height
    );

    let mut endpoint = || {
        sample_endpoint(
            &region,
            &obstacles,
            &sampler,
            endpoint_radius,
            config.max_attempts,
            rng,
        )
    };
    let start = endpoint().context("could not place the start")?;
    let goal = endpoint().context("could not place the goal")?;

    let scene = Scene::new(region, obstacles);
    info!(
        "[GEN] scene generated, obstacle coverage: {:.1}%, start: ({:.3}, {:.3}), goal: ({:.3}, {:.3})",
        scene.obstacle_coverage() * 100.0,
        start.0,
        start.1,
        goal.0,
        goal.1
    );

    Ok(SceneQuery { scene, start, goal })
}

/// Places obstacles one at a time by rejection sampling.
/// A candidate is rejected if it sticks out of the region or touches an already placed obstacle.
fn generate_obstacles(
    config: &SceneGenConfig,
    region: &Region,
    sampler: &UniformRectSampler,
    rng: &mut impl Rng,
) -> Result<Vec<Obstacle>> {
    let uniform = |(lo, hi): (f32, f32)| {
        Uniform::new(lo, hi).map_err(|e| anyhow!("invalid obstacle dimension range: {e}"))
    };
    let width_distr = uniform(config.obstacle_width_range)?;
    let height_distr = uniform(config.obstacle_height_range)?;

    let mut obstacles: Vec<Obstacle> = Vec::with_capacity(config.n_obstacles);
    let mut n_attempts = 0;
    while obstacles.len() < config.n_obstacles {
        if n_attempts >= config.max_attempts {
            bail!(
                "only {} of {} obstacles could be placed after {} attempts",
                obstacles.len(),
                config.n_obstacles,
                n_attempts
            );
        }
        n_attempts += 1;

        let lower_left = sampler.sample(rng);
        let candidate = Obstacle::new(
            obstacles.len(),
            lower_left,
            width_distr.sample(rng),
            height_distr.sample(rng),
        )?;
        let fits = region.shape.contains(&candidate.shape)
            && !obstacles
                .iter()
                .any(|o| o.shape.collides_with(&candidate.shape));
        if fits {
            obstacles.push(candidate);
        }
    }
    Ok(obstacles)
}

fn sample_endpoint(
    region: &Region,
    obstacles: &[Obstacle],
    sampler: &UniformRectSampler,
    radius: f32,
    max_attempts: usize,
    rng: &mut impl Rng,
) -> Result<Point> {
    for _ in 0..max_attempts {
        let disk = Circle::try_new(sampler.sample(rng), radius)?;
        let free = region.shape.contains(&disk)
            && !obstacles.iter().any(|o| o.shape.collides_with(&disk));
        if free {
            return Ok(disk.center);
        }
    }
    bail!("no free position found after {max_attempts} attempts")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;

    #[test]
    fn crowded_region_fails() {
        let config = SceneGenConfig {
            width: 10.0,
            height: 10.0,
            n_obstacles: 50,
            max_attempts: 1000,
            ..SceneGenConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(generate_scene(&config, 1.0, &mut rng).is_err());
    }

    #[test]
    fn endpoint_too_large_fails() {
        let config = SceneGenConfig {
            n_obstacles: 0,
            max_attempts: 100,
            ..SceneGenConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(generate_scene(&config, 100.0, &mut rng).is_err());
    }
}
