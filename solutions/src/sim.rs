//! random instances within given limits

use anyhow::Result;
use anyhow::bail;
use lib::def::Coord;
use lib::def::Instance;
use lib::def::Point;
use rand::Rng;

#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub length_max: Coord,
    pub points_max: usize,
    pub radius_max: Coord,
}

impl Limits {
    pub fn check(&self) -> Result<()> {
        if self.length_max < 1 {
            bail!("length max must be at least 1, got {}", self.length_max);
        }
        if self.points_max < 1 {
            bail!("points max must be at least 1, got {}", self.points_max);
        }
        if self.radius_max < 0 {
            bail!("radius max must not be negative, got {}", self.radius_max);
        }
        Ok(())
    }
}

pub fn random_instance<R: Rng>(rng: &mut R, limits: &Limits) -> Result<Instance> {
    limits.check()?;
    let length = rng.random_range(1..=limits.length_max);
    let count = rng.random_range(1..=limits.points_max);
    let points = (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(1..=length),
                rng.random_range(0..=limits.radius_max),
            )
        })
        .collect();
    Instance::new(length, points)
}
