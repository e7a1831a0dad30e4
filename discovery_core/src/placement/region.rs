//! Sampling regions for the rejection sampler.

use discovery_graph::Position;
use rand::Rng;

use crate::config::PlacementConfig;

/// An axis-aligned rectangle candidates are drawn from, given by its centre
/// and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingRegion {
    pub center: Position,
    pub half_width: f64,
    pub half_height: f64,
}

impl SamplingRegion {
    /// The region used for a given sampling round.
    ///
    /// Round 0 is the viewport minus its margin. Every later round scales the
    /// previous one by `growth` about the viewport centre.
    pub fn for_round(config: &PlacementConfig, round: u32) -> Self {
        let scale = config.growth.powf(f64::from(round));
        Self {
            center: Position::new(config.width / 2.0, config.height / 2.0),
            half_width: (config.width / 2.0 - config.margin) * scale,
            half_height: (config.height / 2.0 - config.margin) * scale,
        }
    }

    /// Draw a uniform candidate centre for a shape of `radius`, keeping the
    /// whole shape inside the region where it fits.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, radius: f64) -> Position {
        Position::new(
            sample_axis(rng, self.center.x, self.half_width, radius),
            sample_axis(rng, self.center.y, self.half_height, radius),
        )
    }

    /// Check if a point lies inside the region.
    pub fn contains(&self, point: &Position) -> bool {
        (point.x - self.center.x).abs() <= self.half_width
            && (point.y - self.center.y).abs() <= self.half_height
    }
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, center: f64, half: f64, radius: f64) -> f64 {
    let lo = center - half + radius;
    let hi = center + half - radius;
    if !(hi - lo).is_finite() || lo >= hi {
        // Shape is wider than the region on this axis, or the region has
        // grown past what an f64 can hold.
        return center;
    }
    rng.gen_range(lo..=hi)
}
