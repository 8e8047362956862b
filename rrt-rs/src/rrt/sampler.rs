use anyhow::{Result, anyhow};
use rand::Rng;
use rand::distr::{Distribution, Uniform};

use crate::geometry::primitives::{Point, Rect};

/// Samples a [`Point`] from a uniform distribution over a given [`Rect`].
#[derive(Clone, Debug)]
pub struct UniformRectSampler {
    pub bbox: Rect,
    x_distr: Uniform<f32>,
    y_distr: Uniform<f32>,
}

impl UniformRectSampler {
    pub fn new(bbox: Rect) -> Result<Self> {
        let x_distr = Uniform::new(bbox.x_min, bbox.x_max)
            .map_err(|e| anyhow!("invalid sampling range in x: {e}"))?;
        let y_distr = Uniform::new(bbox.y_min, bbox.y_max)
            .map_err(|e| anyhow!("invalid sampling range in y: {e}"))?;
        Ok(Self {
            bbox,
            x_distr,
            y_distr,
        })
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Point {
        Point(self.x_distr.sample(rng), self.y_distr.sample(rng))
    }
}
