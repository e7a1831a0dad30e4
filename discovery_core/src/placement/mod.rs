//! Placement - non-overlapping positions for newly visible nodes.
//!
//! Incremental rejection sampling:
//! 1. **Size**: The new node's radius grows with its rendered text length
//! 2. **Sample**: Draw a uniform candidate inside the current sampling region
//! 3. **Reject**: Discard it if it comes closer to any placed node than the
//!    sum of both radii plus the buffer
//! 4. **Widen**: After a round of failed draws, grow the region and retry
//! 5. **Fallback**: When every round fails, use the spot just right of all
//!    placed nodes, which is free by construction
//!
//! Already placed nodes never move.

mod region;

pub use region::*;

use discovery_graph::{GraphStore, Node, NodeId, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::config::PlacementConfig;

/// Extra gap added to the fallback spot so rounding never brings it inside
/// the required distance.
const FALLBACK_PAD: f64 = 1.0;

/// A placed shape that new candidates must keep clear of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub center: Position,
    pub radius: f64,
}

/// Radius of a node that renders `len` characters.
pub fn radius_for_len(len: usize, config: &PlacementConfig) -> f64 {
    (len as f64 * config.char_width / 2.0).max(config.min_radius)
}

/// Check if a shape of `radius` at `candidate` keeps clear of every obstacle.
pub fn fits(candidate: &Position, radius: f64, obstacles: &[Obstacle], buffer: f64) -> bool {
    obstacles
        .iter()
        .all(|o| candidate.distance(&o.center) >= o.radius + radius + buffer)
}

/// Rejection-sampling placer.
#[derive(Debug, Clone)]
pub struct Placer {
    config: PlacementConfig,
    rng: StdRng,
}

impl Placer {
    /// Create a new placer. A configured seed makes placement reproducible.
    pub fn new(config: PlacementConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Get the placement settings.
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Radius of a node's rendered shape.
    ///
    /// Placeholder and label have the same length, so the radius does not
    /// change when a teased node is found.
    pub fn radius(&self, node: &Node) -> f64 {
        radius_for_len(node.display_len(), &self.config)
    }

    /// Collect the shapes of every visible, placed node except `skip`.
    pub fn obstacles(&self, store: &GraphStore, skip: Option<NodeId>) -> Vec<Obstacle> {
        store
            .visible()
            .filter(|(id, _)| Some(*id) != skip)
            .filter_map(|(_, node)| {
                node.position().map(|center| Obstacle {
                    center,
                    radius: self.radius(node),
                })
            })
            .collect()
    }

    /// Choose a position for `node` that overlaps no other visible node.
    ///
    /// The store is not modified; the caller fixes the returned position on
    /// the node.
    pub fn place(&mut self, store: &GraphStore, node: NodeId) -> Position {
        let radius = store
            .node(node)
            .map(|n| self.radius(n))
            .unwrap_or(self.config.min_radius);
        let obstacles = self.obstacles(store, Some(node));
        self.find_spot(radius, &obstacles)
    }

    /// Find a free spot for a shape of `radius`.
    ///
    /// Runs at most `max_rounds * attempts_per_round` draws, each checked
    /// against every obstacle.
    pub fn find_spot(&mut self, radius: f64, obstacles: &[Obstacle]) -> Position {
        let buffer = self.config.buffer;

        for round in 0..self.config.max_rounds {
            let region = SamplingRegion::for_round(&self.config, round);
            for _ in 0..self.config.attempts_per_round {
                let candidate = region.sample(&mut self.rng, radius);
                if fits(&candidate, radius, obstacles, buffer) {
                    if round > 0 {
                        debug!(round, x = candidate.x, y = candidate.y, "placed in widened region");
                    }
                    return candidate;
                }
            }
        }

        let spot = self.fallback_spot(radius, obstacles);
        warn!(
            obstacles = obstacles.len(),
            rounds = self.config.max_rounds,
            x = spot.x,
            y = spot.y,
            "sampling exhausted, using fallback spot"
        );
        spot
    }

    /// The spot just right of the bounding box of all obstacles, level with
    /// the viewport centre.
    fn fallback_spot(&self, radius: f64, obstacles: &[Obstacle]) -> Position {
        let center_y = self.config.height / 2.0;
        let right_edge = obstacles
            .iter()
            .map(|o| o.center.x + o.radius)
            .fold(f64::NEG_INFINITY, f64::max);

        if right_edge.is_finite() {
            Position::new(right_edge + self.config.buffer + radius + FALLBACK_PAD, center_y)
        } else {
            Position::new(self.config.width / 2.0, center_y)
        }
    }
}
